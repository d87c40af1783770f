use std::collections::HashSet;

use crate::dictionary::Dictionary;
use crate::models::{Grid, Outcome, WordCategory};

pub struct WordValidator {
    dictionary: Dictionary,
    target: WordCategory,
    grid: Grid,
}

impl WordValidator {
    pub fn new(dictionary: Dictionary, target: WordCategory, grid: Grid) -> Self {
        Self {
            dictionary,
            target,
            grid,
        }
    }

    /// Check if a submitted word counts: a dictionary word tagged with
    /// the target category, starting with a grid letter. The grid check
    /// repeats the loader's filter.
    pub fn is_valid_word(&self, word: &str) -> bool {
        let Some(category) = self.dictionary.get(word) else {
            return false;
        };
        if category != self.target {
            return false;
        }
        word.chars()
            .next()
            .is_some_and(|first| self.grid.contains(&first))
    }

    /// Partition the round into accepted submissions and dictionary
    /// words the player never entered.
    ///
    /// Missed words are counted against every dictionary key, not just
    /// the target category, so unentered words of other categories are
    /// reported too.
    pub fn check(&self, submission: &[String]) -> Outcome {
        let accepted: HashSet<String> = submission
            .iter()
            .filter(|word| self.is_valid_word(word))
            .cloned()
            .collect();

        let missed: HashSet<String> = self
            .dictionary
            .words()
            .filter(|word| !accepted.contains(*word))
            .map(str::to_string)
            .collect();

        Outcome { accepted, missed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> WordValidator {
        let dictionary = Dictionary::from_entries([
            ("або".to_string(), WordCategory::Adverb),
            ("бо".to_string(), WordCategory::Noun),
        ]);
        WordValidator::new(
            dictionary,
            WordCategory::Adverb,
            vec!['а', 'б', 'в', 'г', 'д'],
        )
    }

    fn submission(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_accepts_target_category_word() {
        let validator = fixture();
        let outcome = validator.check(&submission(&["або"]));

        assert_eq!(outcome.accepted, HashSet::from(["або".to_string()]));
        assert_eq!(outcome.missed, HashSet::from(["бо".to_string()]));
    }

    #[test]
    fn test_rejects_wrong_category() {
        let validator = fixture();
        assert!(!validator.is_valid_word("бо"));
    }

    #[test]
    fn test_rejects_unknown_word() {
        let validator = fixture();
        assert!(!validator.is_valid_word("кит"));
    }

    #[test]
    fn test_rejects_word_off_grid() {
        // dictionary entry that never went through the loader's filter
        let dictionary = Dictionary::from_entries([("кит".to_string(), WordCategory::Noun)]);
        let validator = WordValidator::new(
            dictionary,
            WordCategory::Noun,
            vec!['а', 'б', 'в', 'г', 'д'],
        );
        assert!(!validator.is_valid_word("кит"));
    }

    #[test]
    fn test_empty_submission_misses_everything() {
        let validator = fixture();
        let outcome = validator.check(&[]);

        assert!(outcome.accepted.is_empty());
        assert_eq!(
            outcome.missed,
            HashSet::from(["або".to_string(), "бо".to_string()])
        );
    }

    #[test]
    fn test_missed_spans_all_categories() {
        // the noun stays missed in an adverb round even though it could
        // never have been accepted
        let validator = fixture();
        let outcome = validator.check(&submission(&["або"]));
        assert!(outcome.missed.contains("бо"));
    }

    #[test]
    fn test_duplicate_submissions_collapse() {
        let validator = fixture();
        let outcome = validator.check(&submission(&["або", "або", "або"]));
        assert_eq!(outcome.accepted.len(), 1);
    }

    #[test]
    fn test_blank_and_garbage_lines_rejected() {
        let validator = fixture();
        let outcome = validator.check(&submission(&["", "   ", "xyz"]));
        assert!(outcome.accepted.is_empty());
    }
}
