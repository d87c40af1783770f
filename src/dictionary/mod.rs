use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;

use crate::models::{Grid, WordCategory};

/// Longest word the game accepts, in characters
pub const MAX_WORD_LEN: usize = 5;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary file {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed dictionary line {line_no}: expected `<word> <tag>`, got {line:?}")]
    MalformedLine { line_no: usize, line: String },
}

/// Tag classification rules, first match wins
const TAG_RULES: &[(fn(&str) -> bool, WordCategory)] = &[
    (
        |tag| tag.starts_with('n') && !tag.starts_with("no"),
        WordCategory::Noun,
    ),
    (|tag| tag.starts_with('v'), WordCategory::Verb),
    (|tag| tag.starts_with("adj"), WordCategory::Adjective),
    (|tag| tag.starts_with("adv"), WordCategory::Adverb),
];

/// Map a raw dictionary tag to a category. A leading `/` is stripped
/// before the rules are applied.
pub fn classify_tag(tag: &str) -> WordCategory {
    let tag = tag.strip_prefix('/').unwrap_or(tag);
    for (matches, category) in TAG_RULES {
        if matches(tag) {
            return *category;
        }
    }
    WordCategory::Other
}

/// Word list filtered down to the entries playable on one grid
#[derive(Debug)]
pub struct Dictionary {
    entries: HashMap<String, WordCategory>,
}

impl Dictionary {
    /// Load a `<word> <tag>` word list and keep the entries playable on
    /// the given grid.
    ///
    /// A malformed line aborts the whole load; a partial dictionary
    /// would make the forgotten-words report meaningless.
    pub async fn load<P: AsRef<Path>>(path: P, grid: &Grid) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path)
                .await
                .map_err(|source| DictionaryError::FileAccess {
                    path: path.to_path_buf(),
                    source,
                })?;

        let mut entries = HashMap::new();
        for (idx, line) in content.lines().enumerate() {
            let mut fields = line.split_whitespace();
            let (word, tag) = match (fields.next(), fields.next(), fields.next()) {
                (Some(word), Some(tag), None) => (word, tag),
                _ => {
                    return Err(DictionaryError::MalformedLine {
                        line_no: idx + 1,
                        line: line.to_string(),
                    })
                }
            };

            let category = classify_tag(tag);
            if is_playable(word, category, grid) {
                // later duplicates overwrite earlier ones
                entries.insert(word.to_string(), category);
            }
        }

        let dictionary = Self { entries };
        tracing::info!(
            "Loaded {} playable words into dictionary",
            dictionary.len()
        );

        Ok(dictionary)
    }

    /// Create an empty dictionary (for testing)
    #[allow(dead_code)]
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Create a dictionary from pre-classified entries (for testing)
    #[allow(dead_code)]
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, WordCategory)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Category recorded for a word, if it survived the filter
    pub fn get(&self, word: &str) -> Option<WordCategory> {
        self.entries.get(word).copied()
    }

    /// Check if a word exists in the dictionary
    #[allow(dead_code)]
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Iterate over every playable word
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A word is playable when it is 1..=5 characters long, starts with a
/// grid letter, and carries a usable category.
fn is_playable(word: &str, category: WordCategory, grid: &Grid) -> bool {
    if category == WordCategory::Other {
        return false;
    }
    let len = word.chars().count();
    if len == 0 || len > MAX_WORD_LEN {
        return false;
    }
    match word.chars().next() {
        Some(first) => grid.contains(&first),
        None => false,
    }
}
