use crate::app::{AppState, Notice};
use crate::history::{HISTORY_LIMIT, HistoryList};
use crate::pass::{CharacterClass, MAX_LENGTH, MIN_LENGTH, StrengthLevel};
use crate::terminal::{
    BOLD, RESET, box_bottom, box_line, box_line_center, box_opt, box_top, print_error,
    print_rule, print_success, strength_bar,
};

const METER_WIDTH: usize = 40;

pub fn enter_prompt() -> &'static str {
    "Enter menu option (or press Enter to generate a password)"
}

/// Main screen: current password, strength, options, history, last notice.
pub fn print_main_screen(
    state: &AppState,
    history: &HistoryList,
    strength: Option<StrengthLevel>,
    notice: Option<&Notice>,
) {
    box_top("Password Generator");
    match &state.current {
        Some(pw) => {
            box_line(&format!("{BOLD}{}{RESET}", pw));
            if let Some(level) = strength {
                box_line(&format!(
                    "Strength: {}",
                    strength_bar(level, state.theme, METER_WIDTH)
                ));
            }
        }
        None => box_line("(no password yet)"),
    }
    print_rule();
    box_line(&format!(
        "  1) Password Length: {} ({}-{})",
        state.length, MIN_LENGTH, MAX_LENGTH
    ));
    for (i, class) in CharacterClass::ALL.into_iter().enumerate() {
        let mark = if state.classes.contains(class) { 'x' } else { ' ' };
        box_line(&format!("  {}) [{}] {}", i + 2, mark, class.label()));
    }
    box_bottom();
    println!();

    box_top(&format!("Password History ({}/{})", history.len(), HISTORY_LIMIT));
    if history.is_empty() {
        box_line("No history yet. Generate some passwords to see them here!");
    } else {
        for (i, pw) in history.iter().enumerate() {
            box_line(&format!("  {}. {}", i + 1, pw));
        }
    }
    box_bottom();
    println!();

    box_top("Commands");
    box_line("  [Enter] generate   c copy   c N copy entry   d N delete entry");
    box_line(&format!(
        "  x export   t theme ({})   h help   q quit",
        state.theme
    ));
    box_bottom();

    match notice {
        Some(n) if n.is_error() => print_error(&n.message),
        Some(n) => print_success(&n.message),
        None => println!(),
    }
}

pub fn print_help() {
    box_top("pwsmith");
    box_line_center("Password generator with strength meter and history");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without arguments. Opens this menu.");
    box_line("  2) Client: Pass flags (e.g., -l 20 -s) to generate one password,");
    box_line("     or manage the history, without the menu.");
    box_line("");
    box_line("USAGE:");
    box_line("  pwsmith [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt("  -l, --length <N>", "Characters per password, 6-50 (default: 12)");
    box_opt("      --no-upper", "Leave out uppercase letters (A-Z)");
    box_opt("      --no-lower", "Leave out lowercase letters (a-z)");
    box_opt("      --no-digits", "Leave out numbers (0-9)");
    box_opt("  -s, --symbols", "Include symbols (!@#$%^&*()_+-=[]{}|;:,.<>?/~)");
    box_opt("  -b, --board", "Copy the generated password to the clipboard");
    box_opt("      --score <PASSWORD>", "Print the strength of a password and exit");
    box_line("");
    box_line(" History:");
    box_opt("      --history", "Print the last five generated passwords");
    box_opt("      --delete <N>", "Delete history entry N (as numbered by --history)");
    box_opt(
        "  -o, --output [DIR]",
        "Export the history to DIR/passwords_history.txt (default: .)",
    );
    box_line("");
    box_line(" General:");
    box_opt(
        "      --store <PATH>",
        "Key-value store file (env PWSMITH_STORE, default: config dir)",
    );
    box_opt("  -q, --quiet", "Suppress notices");
    box_opt("  -h, --help", "Show this help");
    box_opt("  -v, --version", "Show version");
    box_line("");
    box_line("MENU:");
    box_line("  [Enter] generate  1 length  2-5 toggle classes  c / c N copy");
    box_line("  d N delete  x export  t theme  h help  q quit");
    box_line("");
    box_line("Logging goes to stderr; set RUST_LOG=debug for details.");
    box_bottom();
}
