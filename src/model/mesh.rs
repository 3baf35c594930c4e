//! Mesh types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::core::GltfEntity;

/// A mesh made of primitives
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mesh {
    /// Geometry to be rendered with a material
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primitives: Option<Vec<MeshPrimitive>>,
    /// User-defined name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Mesh {
    /// Create a mesh from primitives
    pub fn new(primitives: Vec<MeshPrimitive>) -> Self {
        Self {
            primitives: Some(primitives),
            name: None,
        }
    }
}

impl GltfEntity for Mesh {
    const KIND_NAME: &'static str = "mesh";
}

/// Geometry rendered with one material
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeshPrimitive {
    /// Attribute semantic (e.g. `"POSITION"`) to accessor ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, Option<String>>>,
    /// Index accessor ID; `None` means non-indexed geometry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indices: Option<String>,
    /// The material ID (required)
    #[serde(default)]
    pub material: Option<String>,
    /// Primitive topology, `0..=6`; defaults to triangles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<u32>,
}

impl MeshPrimitive {
    /// Create a primitive rendered with the given material
    pub fn new(material: impl Into<String>) -> Self {
        Self {
            material: Some(material.into()),
            ..Self::default()
        }
    }

    /// Map an attribute semantic to an accessor
    pub fn with_attribute(mut self, semantic: impl Into<String>, accessor: impl Into<String>) -> Self {
        self.attributes
            .get_or_insert_with(BTreeMap::new)
            .insert(semantic.into(), Some(accessor.into()));
        self
    }

    /// Set the index accessor
    pub fn with_indices(mut self, accessor: impl Into<String>) -> Self {
        self.indices = Some(accessor.into());
        self
    }
}
