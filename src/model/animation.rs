//! Animation types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::core::GltfEntity;

/// Target paths an animation channel may drive
pub const ANIMATION_TARGET_PATHS: [&str; 3] = ["translation", "rotation", "scale"];

/// A keyframe animation
///
/// Samplers refer to `parameters` by name, and parameters refer to accessors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animation {
    /// Channels connecting samplers to node properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<AnimationChannel>>,
    /// Parameter name to accessor ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<BTreeMap<String, Option<String>>>,
    /// Samplers by ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub samplers: Option<BTreeMap<String, AnimationSampler>>,
    /// User-defined name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl GltfEntity for Animation {
    const KIND_NAME: &'static str = "animation";
}

/// Connects an animation sampler to a node property
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationChannel {
    /// Sampler ID within the same animation (required)
    #[serde(default)]
    pub sampler: Option<String>,
    /// The animated property (required)
    #[serde(default)]
    pub target: Option<AnimationChannelTarget>,
}

impl AnimationChannel {
    /// Create a channel driving `path` of `node` from `sampler`
    pub fn new(
        sampler: impl Into<String>,
        node: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            sampler: Some(sampler.into()),
            target: Some(AnimationChannelTarget {
                id: Some(node.into()),
                path: Some(path.into()),
            }),
        }
    }
}

/// The node and property an animation channel drives
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationChannelTarget {
    /// Node ID (required)
    #[serde(default)]
    pub id: Option<String>,
    /// One of [`ANIMATION_TARGET_PATHS`] (required)
    #[serde(default)]
    pub path: Option<String>,
}

/// Combines keyframe input with output values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationSampler {
    /// Animation parameter name holding keyframe times (required)
    #[serde(default)]
    pub input: Option<String>,
    /// Interpolation algorithm; only `"LINEAR"` is defined
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpolation: Option<String>,
    /// Animation parameter name holding output values (required)
    #[serde(default)]
    pub output: Option<String>,
}

impl AnimationSampler {
    /// Create a linear sampler from two parameter names
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: Some(input.into()),
            interpolation: Some("LINEAR".to_string()),
            output: Some(output.into()),
        }
    }
}

impl GltfEntity for AnimationSampler {
    const KIND_NAME: &'static str = "animationSampler";
}
