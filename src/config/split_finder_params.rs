use crate::classifiers::TIE_EPSILON;
use crate::config::choice::{Choice, NoParams};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

fn default_tie_epsilon() -> f64 {
    TIE_EPSILON
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(SplitCriterionKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum SplitCriterionChoice {
    #[strum_discriminants(strum(
        message = "Gini Split Criterion",
        detailed_message = "Use Gini impurity to choose splits."
    ))]
    GiniSplit(NoParams),
    #[strum_discriminants(strum(
        message = "Information Gain Split Criterion",
        detailed_message = "Use entropy reduction, in bits, to choose splits."
    ))]
    InfoGainSplit(NoParams),
}
impl Default for SplitCriterionChoice {
    fn default() -> Self {
        Self::GiniSplit(NoParams::default())
    }
}

impl Choice for SplitCriterionChoice {
    type Kind = SplitCriterionKind;

    fn default_params(kind: Self::Kind) -> Value {
        match kind {
            SplitCriterionKind::GiniSplit | SplitCriterionKind::InfoGainSplit => json!({}),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SplitFinderParams {
    #[serde(default)]
    #[schemars(
        title = "Split criterion",
        description = "Impurity measure used to score candidate splits."
    )]
    pub split_criterion: SplitCriterionChoice,

    #[serde(default = "default_tie_epsilon")]
    #[schemars(
        title = "Tie epsilon",
        description = "Margin a later candidate must beat the current best by.",
        range(min = 0.0),
        default = "default_tie_epsilon"
    )]
    pub tie_epsilon: f64,
}
impl Default for SplitFinderParams {
    fn default() -> Self {
        Self {
            split_criterion: SplitCriterionChoice::default(),
            tie_epsilon: default_tie_epsilon(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn empty_object_gives_defaults() {
        let p: SplitFinderParams = serde_json::from_str("{}").unwrap();
        assert_eq!(p, SplitFinderParams::default());
        assert_eq!(p.tie_epsilon, 1e-9);
    }

    #[test]
    fn criterion_is_tagged_kebab_case() {
        let p: SplitFinderParams = serde_json::from_str(
            r#"{"split_criterion": {"type": "info-gain-split", "params": {}}, "tie_epsilon": 0.0}"#,
        )
        .unwrap();
        assert_eq!(
            p.split_criterion,
            SplitCriterionChoice::InfoGainSplit(NoParams {})
        );
        assert_eq!(p.tie_epsilon, 0.0);

        let v = serde_json::to_value(SplitFinderParams::default()).unwrap();
        assert_eq!(v["split_criterion"]["type"], "gini-split");
    }

    #[test]
    fn kinds_round_trip_through_strum() {
        let kinds = SplitCriterionChoice::kinds();
        assert_eq!(
            kinds.iter().map(|(k, _)| *k).collect::<Vec<_>>(),
            vec!["gini-split", "info-gain-split"]
        );
        assert_eq!(kinds[0].1, "Gini Split Criterion");

        let kind = SplitCriterionKind::from_str("info-gain-split").unwrap();
        let choice =
            SplitCriterionChoice::from_parts(kind, SplitCriterionChoice::default_params(kind))
                .unwrap();
        assert_eq!(choice, SplitCriterionChoice::InfoGainSplit(NoParams {}));
    }

    #[test]
    fn schema_mentions_both_fields() {
        let schema = serde_json::to_string(&schemars::schema_for!(SplitFinderParams)).unwrap();
        assert!(schema.contains("split_criterion"));
        assert!(schema.contains("tie_epsilon"));

        let criterion_schema = serde_json::to_string(&SplitCriterionChoice::schema()).unwrap();
        assert!(criterion_schema.contains("info-gain-split"));
    }
}
