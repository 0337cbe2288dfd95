//! Password generation, strength scoring and export.

pub mod charset;
pub mod export;
mod generate;
mod password;
pub mod strength;

pub use charset::{CharacterClass, ClassSet};
pub use generate::{GenerationConfig, generate};
pub use password::Password;
pub use strength::{StrengthLevel, score};

pub const MIN_LENGTH: usize = 6;
pub const MAX_LENGTH: usize = 50;
pub const DEFAULT_LENGTH: usize = 12;
