pub mod brief;
pub mod classify;
pub mod cli;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod normalize;
pub mod scout;
pub mod story;

pub use error::{Result, SpotkitError};
