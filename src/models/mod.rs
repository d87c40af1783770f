pub mod game;

pub use game::{Grid, Outcome, WordCategory};
