pub mod types;
pub mod validation;

pub use types::*;
