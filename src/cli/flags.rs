#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub symbols: bool,
    pub no_upper: bool,
    pub no_lower: bool,
    pub no_digits: bool,
    pub history: bool,
    pub length: Option<usize>,
    /// 1-based, as printed by `--history`.
    pub delete: Option<usize>,
    pub output: Option<String>,
    pub score: Option<String>,
    pub store: Option<String>,
}

impl CliFlags {
    /// Any flag that shapes a generated password.
    pub fn has_generation_args(&self) -> bool {
        self.length.is_some()
            || self.clipboard
            || self.symbols
            || self.no_upper
            || self.no_lower
            || self.no_digits
    }

    /// Any flag that reads or changes the history.
    pub fn has_history_args(&self) -> bool {
        self.history || self.delete.is_some() || self.output.is_some()
    }

    /// Generate unless the invocation is only about the history.
    pub fn wants_generate(&self) -> bool {
        self.has_generation_args() || !self.has_history_args()
    }
}
