pub mod context;
pub mod cup;
pub mod index;
pub mod match_play;
pub mod pace;
pub mod sequencer;
pub mod sort_utils;
pub mod standings;
pub mod stats;

pub use context::*;
pub use cup::*;
pub use index::*;
pub use match_play::*;
pub use pace::*;
pub use sequencer::*;
pub use sort_utils::*;
pub use standings::*;
pub use stats::*;
