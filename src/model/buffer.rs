//! Binary data types: buffers, buffer views and accessors

use serde::{Deserialize, Serialize};

use super::core::GltfEntity;

/// A raw binary buffer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Buffer {
    /// Location of the payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// Payload length in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub byte_length: Option<u64>,
    /// `"arraybuffer"` (the default) or `"text"`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub buffer_type: Option<String>,
    /// User-defined name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Buffer {
    /// Create a buffer with the given URI and length
    pub fn new(uri: impl Into<String>, byte_length: u64) -> Self {
        Self {
            uri: Some(uri.into()),
            byte_length: Some(byte_length),
            ..Self::default()
        }
    }
}

impl GltfEntity for Buffer {
    const KIND_NAME: &'static str = "buffer";
}

/// A view into a buffer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BufferView {
    /// The buffer ID (required)
    #[serde(default)]
    pub buffer: Option<String>,
    /// Offset into the buffer in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub byte_offset: Option<u64>,
    /// Length of the view in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub byte_length: Option<u64>,
    /// Intended GL buffer binding target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<u32>,
    /// User-defined name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl BufferView {
    /// Create a view covering `byte_length` bytes of the given buffer from `byte_offset`
    pub fn new(buffer: impl Into<String>, byte_offset: u64, byte_length: u64) -> Self {
        Self {
            buffer: Some(buffer.into()),
            byte_offset: Some(byte_offset),
            byte_length: Some(byte_length),
            ..Self::default()
        }
    }
}

impl GltfEntity for BufferView {
    const KIND_NAME: &'static str = "bufferView";
}

/// A typed view into a buffer view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accessor {
    /// The buffer view ID (required)
    #[serde(default)]
    pub buffer_view: Option<String>,
    /// Offset relative to the start of the buffer view in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub byte_offset: Option<u64>,
    /// Stride between elements in bytes; `0` means tightly packed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub byte_stride: Option<u32>,
    /// Component data type code (required)
    #[serde(default)]
    pub component_type: Option<u32>,
    /// Number of elements (required)
    #[serde(default)]
    pub count: Option<u64>,
    /// Element type such as `"VEC3"` (required)
    #[serde(rename = "type", default)]
    pub accessor_type: Option<String>,
    /// Per-component maximum values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Vec<f64>>,
    /// Per-component minimum values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Vec<f64>>,
    /// User-defined name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Accessor {
    /// Create an accessor with all required properties set
    pub fn new(
        buffer_view: impl Into<String>,
        component_type: u32,
        count: u64,
        accessor_type: impl Into<String>,
    ) -> Self {
        Self {
            buffer_view: Some(buffer_view.into()),
            byte_offset: Some(0),
            component_type: Some(component_type),
            count: Some(count),
            accessor_type: Some(accessor_type.into()),
            ..Self::default()
        }
    }
}

impl GltfEntity for Accessor {
    const KIND_NAME: &'static str = "accessor";
}
