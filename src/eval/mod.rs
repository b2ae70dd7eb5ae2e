//! Card evaluation: ratings plus text heuristics.
//!
//! - `frequency`: Pool-relative keyword and creature-type tallies
//! - `removal`: Removal phrase classification
//! - `scorer`: `evaluate` and the pool-bound `CardScorer`

pub mod frequency;
pub mod removal;
pub mod scorer;

pub use frequency::{KeywordFrequency, KindredFrequency};
pub use removal::{removal_score, RemovalClass};
pub use scorer::{evaluate, sort_by_score, CardScorer, ScoredEntry};
