//! Image, sampler and texture types

use serde::{Deserialize, Serialize};

use super::core::GltfEntity;

/// An image referenced by textures
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// Location of the image data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// User-defined name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Image {
    /// Create an image with the given URI
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
            name: None,
        }
    }
}

impl GltfEntity for Image {
    const KIND_NAME: &'static str = "image";
}

/// Texture sampling state
///
/// Every property is optional; glTF defines `LINEAR`/`NEAREST_MIPMAP_LINEAR`
/// filtering and `REPEAT` wrapping as defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sampler {
    /// Magnification filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mag_filter: Option<u32>,
    /// Minification filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_filter: Option<u32>,
    /// S wrapping mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrap_s: Option<u32>,
    /// T wrapping mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrap_t: Option<u32>,
    /// User-defined name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl GltfEntity for Sampler {
    const KIND_NAME: &'static str = "sampler";
}

/// A texture combining an image with a sampler
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Texture {
    /// The image ID (required)
    #[serde(default)]
    pub source: Option<String>,
    /// The sampler ID (required)
    #[serde(default)]
    pub sampler: Option<String>,
    /// Texel format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<u32>,
    /// Internal texel format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_format: Option<u32>,
    /// GL texture target; only `TEXTURE_2D` is meaningful in glTF 1.0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<u32>,
    /// Texel data type
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub texel_type: Option<u32>,
    /// User-defined name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Texture {
    /// Create a texture from an image and a sampler
    pub fn new(source: impl Into<String>, sampler: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            sampler: Some(sampler.into()),
            ..Self::default()
        }
    }
}

impl GltfEntity for Texture {
    const KIND_NAME: &'static str = "texture";
}
