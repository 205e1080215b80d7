pub mod classifiers;
pub mod config;
pub mod core;
pub mod error;
pub mod preprocessing;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use classifiers::{SplitFinder, TIE_EPSILON, find_best_split};
pub use error::SplitError;
