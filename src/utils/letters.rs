use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Letters a grid can be built from. The soft sign is excluded since no
/// Ukrainian word begins with it.
pub const ALPHABET: &str = "абвгґдеєжзиіїйклмнопрстуфхцчшщюя";

static ALPHABET_SET: Lazy<HashSet<char>> = Lazy::new(|| ALPHABET.chars().collect());

/// Check whether a character belongs to the playable alphabet
#[allow(dead_code)]
pub fn is_playable_letter(ch: char) -> bool {
    ALPHABET_SET.contains(&ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_size() {
        assert_eq!(ALPHABET.chars().count(), 32);
    }

    #[test]
    fn test_playable_letters() {
        assert!(is_playable_letter('а'));
        assert!(is_playable_letter('ґ'));
        assert!(is_playable_letter('я'));
    }

    #[test]
    fn test_unplayable_letters() {
        // soft sign, Latin lookalike, digit
        assert!(!is_playable_letter('ь'));
        assert!(!is_playable_letter('a'));
        assert!(!is_playable_letter('7'));
    }
}
