pub mod build;
pub mod choice;
pub mod error;
pub mod split_finder_params;

pub use build::{build_split_criterion, build_split_finder, load_params, parse_params};
pub use choice::{Choice, NoParams};
pub use error::BuildError;
pub use split_finder_params::{SplitCriterionChoice, SplitCriterionKind, SplitFinderParams};
