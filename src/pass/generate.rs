//! Password generation.

use log::debug;

use super::charset::{self, ClassSet};
use super::{MAX_LENGTH, MIN_LENGTH, Password};
use crate::error::GenerationError;
use crate::random::IndexSource;

/// Length and enabled classes for one generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    length: usize,
    classes: ClassSet,
}

impl GenerationConfig {
    pub fn new(length: usize, classes: ClassSet) -> Result<Self, GenerationError> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(GenerationError::LengthOutOfRange { length });
        }
        Ok(Self { length, classes })
    }
}

/// Generate a password of exactly `config.length` characters, each drawn
/// uniformly (with replacement) from the enabled alphabets.
pub fn generate<R>(config: &GenerationConfig, rng: &mut R) -> Result<Password, GenerationError>
where
    R: IndexSource + ?Sized,
{
    let chars = charset::build(config.classes);
    if chars.is_empty() {
        return Err(GenerationError::NoClassSelected);
    }

    let pass: String = (0..config.length)
        .map(|_| random_char(&chars, rng))
        .collect();
    debug!(
        "generated password: length {}, alphabet {} chars",
        config.length,
        chars.len()
    );
    Ok(Password::from(pass))
}

#[inline]
fn random_char<R: IndexSource + ?Sized>(chars: &[char], rng: &mut R) -> char {
    chars[rng.index(chars.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::charset::CharacterClass;
    use crate::random::{RngIndex, SequenceIndex};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn classes(list: &[CharacterClass]) -> ClassSet {
        list.iter().copied().collect()
    }

    #[test]
    fn test_length_and_alphabet_for_every_combination() {
        let mut rng = RngIndex::new(StdRng::seed_from_u64(1));
        for mask in 1u8..16 {
            let set: ClassSet = CharacterClass::ALL
                .into_iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, c)| c)
                .collect();
            let alphabet = charset::build(set);
            for length in [MIN_LENGTH, 12, 33, MAX_LENGTH] {
                let config = GenerationConfig::new(length, set).unwrap();
                let pw = generate(&config, &mut rng).unwrap();
                assert_eq!(pw.char_len(), length);
                assert!(pw.as_str().chars().all(|c| alphabet.contains(&c)));
            }
        }
    }

    #[test]
    fn test_no_class_selected() {
        let config = GenerationConfig::new(12, ClassSet::empty()).unwrap();
        let mut rng = SequenceIndex::new(vec![0]);
        assert_eq!(
            generate(&config, &mut rng),
            Err(GenerationError::NoClassSelected)
        );
    }

    #[test]
    fn test_deterministic_with_sequence() {
        let config = GenerationConfig::new(6, classes(&[CharacterClass::Digit])).unwrap();
        let mut rng = SequenceIndex::new(vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(generate(&config, &mut rng).unwrap(), "123456");
    }

    #[test]
    fn test_indices_span_concatenated_alphabet() {
        // Upper (26) + Symbol: index 26 is the first symbol
        let set = classes(&[CharacterClass::Upper, CharacterClass::Symbol]);
        let config = GenerationConfig::new(6, set).unwrap();
        let mut rng = SequenceIndex::new(vec![0, 25, 26, 27, 0, 0]);
        assert_eq!(generate(&config, &mut rng).unwrap(), "AZ!@AA");
    }

    #[test]
    fn test_repeats_allowed() {
        let config = GenerationConfig::new(8, classes(&[CharacterClass::Lower])).unwrap();
        let mut rng = SequenceIndex::new(vec![0]);
        assert_eq!(generate(&config, &mut rng).unwrap(), "aaaaaaaa");
    }

    #[test]
    fn test_length_bounds() {
        assert!(GenerationConfig::new(MIN_LENGTH, ClassSet::default()).is_ok());
        assert!(GenerationConfig::new(MAX_LENGTH, ClassSet::default()).is_ok());
        assert_eq!(
            GenerationConfig::new(5, ClassSet::default()),
            Err(GenerationError::LengthOutOfRange { length: 5 })
        );
        assert_eq!(
            GenerationConfig::new(51, ClassSet::default()),
            Err(GenerationError::LengthOutOfRange { length: 51 })
        );
    }
}
