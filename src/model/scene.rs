//! Scene graph types: cameras, nodes and scenes

use serde::{Deserialize, Serialize};

use super::core::GltfEntity;

/// A camera projection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Camera {
    /// `"perspective"` or `"orthographic"` (required)
    #[serde(rename = "type", default)]
    pub camera_type: Option<String>,
    /// Perspective projection; required when the type is `"perspective"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perspective: Option<Perspective>,
    /// Orthographic projection; required when the type is `"orthographic"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orthographic: Option<Orthographic>,
    /// User-defined name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl GltfEntity for Camera {
    const KIND_NAME: &'static str = "camera";
}

/// Perspective projection parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Perspective {
    /// Aspect ratio of the field of view
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<f64>,
    /// Vertical field of view in radians
    #[serde(default)]
    pub yfov: Option<f64>,
    /// Far clipping plane distance
    #[serde(default)]
    pub zfar: Option<f64>,
    /// Near clipping plane distance
    #[serde(default)]
    pub znear: Option<f64>,
}

/// Orthographic projection parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Orthographic {
    /// Horizontal magnification
    #[serde(default)]
    pub xmag: Option<f64>,
    /// Vertical magnification
    #[serde(default)]
    pub ymag: Option<f64>,
    /// Far clipping plane distance
    #[serde(default)]
    pub zfar: Option<f64>,
    /// Near clipping plane distance
    #[serde(default)]
    pub znear: Option<f64>,
}

/// A node in the scene hierarchy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Camera attached to the node; `None` means no camera
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera: Option<String>,
    /// Child node IDs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<String>>,
    /// Mesh IDs rendered at this node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meshes: Option<Vec<String>>,
    /// Joint name when the node is part of a skeleton
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joint_name: Option<String>,
    /// Column-major 4x4 local transform
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matrix: Option<Vec<f64>>,
    /// Unit quaternion rotation `(x, y, z, w)`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Vec<f64>>,
    /// Non-uniform scale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<Vec<f64>>,
    /// Translation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<Vec<f64>>,
    /// User-defined name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Node {
    /// Create a node with the given children
    pub fn with_children<I, S>(children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            children: Some(children.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Create a node rendering the given meshes
    pub fn with_meshes<I, S>(meshes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            meshes: Some(meshes.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Child node IDs, empty when absent
    pub fn child_ids(&self) -> &[String] {
        self.children.as_deref().unwrap_or(&[])
    }
}

impl GltfEntity for Node {
    const KIND_NAME: &'static str = "node";
}

/// A set of root nodes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    /// Root node IDs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes: Option<Vec<String>>,
    /// User-defined name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Scene {
    /// Create a scene from root node IDs
    pub fn new<I, S>(nodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            nodes: Some(nodes.into_iter().map(Into::into).collect()),
            name: None,
        }
    }
}

impl GltfEntity for Scene {
    const KIND_NAME: &'static str = "scene";
}
