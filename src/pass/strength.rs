//! Password strength scoring.

/// Strength level, 0 to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrengthLevel(u8);

impl StrengthLevel {
    pub const MAX: u8 = 5;

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Very Weak",
            2 => "Weak",
            3 => "Medium",
            4 => "Strong",
            5 => "Very Strong",
            _ => "Too Short",
        }
    }

    /// Bar fill, 0 to 100.
    pub fn percent(self) -> u8 {
        self.0 * 20
    }

    /// 256-colour ANSI index for the meter.
    pub fn color(self) -> u8 {
        match self.0 {
            1 => 160, // red
            2 => 208, // orange
            3 => 220, // yellow
            4 => 34,  // green
            5 => 33,  // blue
            _ => 250, // grey
        }
    }
}

/// Score a password: one point per check, all five always evaluated.
pub fn score(password: &str) -> StrengthLevel {
    let checks = [
        password.chars().count() >= 8,
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    StrengthLevel(checks.iter().filter(|&&hit| hit).count() as u8)
}
