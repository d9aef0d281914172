pub mod course;
pub mod entry;
pub mod group;
pub mod score;
pub mod snapshot;
pub mod tournament;
pub mod utils;

pub use course::*;
pub use entry::*;
pub use group::*;
pub use score::*;
pub use snapshot::*;
pub use tournament::*;
pub use utils::*;
