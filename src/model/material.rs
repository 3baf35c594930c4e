//! Material types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::core::GltfEntity;

/// A material: a technique plus values for its parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    /// The technique ID
    ///
    /// glTF 1.0 reserves `None` for an implicit default technique, which is
    /// not defined here; a missing technique is reported as an error.
    #[serde(default)]
    pub technique: Option<String>,
    /// Parameter values by technique parameter name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<BTreeMap<String, Value>>,
    /// User-defined name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Material {
    /// Create a material using the given technique
    pub fn new(technique: impl Into<String>) -> Self {
        Self {
            technique: Some(technique.into()),
            values: None,
            name: None,
        }
    }

    /// Set a parameter value
    pub fn with_value(mut self, parameter: impl Into<String>, value: Value) -> Self {
        self.values
            .get_or_insert_with(BTreeMap::new)
            .insert(parameter.into(), value);
        self
    }
}

impl GltfEntity for Material {
    const KIND_NAME: &'static str = "material";
}
