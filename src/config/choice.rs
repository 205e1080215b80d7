use anyhow::Result;
use schemars::{JsonSchema, Schema, schema_for};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use strum::{EnumMessage, IntoEnumIterator};

/// Marker params for choices that take no configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct NoParams {}

/// Contract for any tagged "choice enum" (`{"type": ..., "params": ...}`).
pub trait Choice: Sized + Serialize + DeserializeOwned + JsonSchema {
    type Kind: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator;

    /// JSON Schema for the whole tagged enum.
    fn schema() -> Schema {
        schema_for!(Self)
    }

    /// Default `params` JSON for a given kind.
    fn default_params(kind: Self::Kind) -> Value;

    /// Every kind with its short description, in declaration order.
    fn kinds() -> Vec<(&'static str, &'static str)> {
        Self::Kind::iter()
            .map(|k| {
                let name: &'static str = k.into();
                (name, k.get_message().unwrap_or(""))
            })
            .collect()
    }

    /// Build the typed enum from kind + params.
    fn from_parts(kind: Self::Kind, params: Value) -> Result<Self> {
        let key: &'static str = kind.into();
        let v = json!({ "type": key, "params": params });
        Ok(serde_json::from_value(v)?)
    }
}
