//! Search and evaluation for tempo.

pub mod eval;
pub mod search;
pub mod time;

pub use eval::{evaluate, evaluate_relative};
pub use search::control::{Aborted, SearchControl};
pub use search::negamax::{INF, MATE_SCORE, MATE_THRESHOLD, MAX_PLY};
pub use search::repetition::RepetitionTracker;
pub use search::{MAX_DEPTH, SearchOptions, SearchReport, Searcher};
pub use time::allocate_time;
