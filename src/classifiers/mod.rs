pub mod conditional_tests;
pub mod split_criteria;
mod split_finder;

pub use split_finder::{SplitFinder, TIE_EPSILON, find_best_split};
