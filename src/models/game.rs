use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Grammatical category parsed from a dictionary tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordCategory {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Other,
}

impl WordCategory {
    /// Categories a round can ask for (everything except Other)
    pub const PLAYABLE: [WordCategory; 4] = [
        WordCategory::Noun,
        WordCategory::Verb,
        WordCategory::Adjective,
        WordCategory::Adverb,
    ];

    /// Pick the target category for a session, uniformly at random
    pub fn random_target() -> Self {
        use rand::Rng;
        let mut rng = rand::rng();
        Self::PLAYABLE[rng.random_range(0..Self::PLAYABLE.len())]
    }
}

impl fmt::Display for WordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WordCategory::Noun => "noun",
            WordCategory::Verb => "verb",
            WordCategory::Adjective => "adjective",
            WordCategory::Adverb => "adverb",
            WordCategory::Other => "other",
        };
        f.write_str(name)
    }
}

/// The letters a session is played on
pub type Grid = Vec<char>;

/// Result of checking a submission: words the player got right and
/// dictionary words the player never entered
#[derive(Debug, Clone, Default, Serialize)]
pub struct Outcome {
    pub accepted: HashSet<String>,
    pub missed: HashSet<String>,
}
