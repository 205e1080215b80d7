use std::fs;
use std::path::Path;

use crate::classifiers::SplitFinder;
use crate::classifiers::split_criteria::{
    GiniSplitCriterion, InfoGainSplitCriterion, SplitCriterion,
};
use crate::config::error::BuildError;
use crate::config::split_finder_params::{SplitCriterionChoice, SplitFinderParams};

pub fn build_split_criterion(choice: &SplitCriterionChoice) -> Box<dyn SplitCriterion> {
    match choice {
        SplitCriterionChoice::GiniSplit(_) => Box::new(GiniSplitCriterion::new()),
        SplitCriterionChoice::InfoGainSplit(_) => Box::new(InfoGainSplitCriterion::new()),
    }
}

pub fn build_split_finder(params: &SplitFinderParams) -> Result<SplitFinder, BuildError> {
    if !(params.tie_epsilon.is_finite() && params.tie_epsilon >= 0.0) {
        return Err(BuildError::InvalidParameter(format!(
            "tie_epsilon must be a non-negative finite number, got {}",
            params.tie_epsilon
        )));
    }
    Ok(SplitFinder::new(
        build_split_criterion(&params.split_criterion),
        params.tie_epsilon,
    ))
}

pub fn parse_params(text: &str) -> Result<SplitFinderParams, BuildError> {
    Ok(serde_json::from_str(text)?)
}

pub fn load_params(path: &Path) -> Result<SplitFinderParams, BuildError> {
    let text = fs::read_to_string(path)?;
    parse_params(&text)
}
