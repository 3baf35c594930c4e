//! Binary payloads that belong to a document
//!
//! A glTF document only names its buffers, images and shaders; the bytes live
//! elsewhere (external files, data URIs, a binary chunk). Whoever loads the
//! document puts those bytes into a [`PayloadStore`], keyed by the ID of the
//! entity they belong to. The validator core never reads payloads; the
//! [`PayloadCheck`](crate::checks::PayloadCheck) verifies that they exist.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// The entity kind a payload belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PayloadKind {
    /// Raw contents of a buffer
    Buffer,
    /// The byte range of a buffer view, extracted from its buffer
    BufferView,
    /// Encoded image file contents
    Image,
    /// Shader source text
    Shader,
}

impl PayloadKind {
    /// All payload kinds
    pub const ALL: [PayloadKind; 4] = [
        PayloadKind::Buffer,
        PayloadKind::BufferView,
        PayloadKind::Image,
        PayloadKind::Shader,
    ];
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PayloadKind::Buffer => "buffer",
            PayloadKind::BufferView => "bufferView",
            PayloadKind::Image => "image",
            PayloadKind::Shader => "shader",
        };
        f.write_str(name)
    }
}

/// Byte payloads keyed by entity kind and ID
///
/// Payloads are reference counted; copying between stores shares the bytes.
///
/// # Example
///
/// ```
/// use gltf_validator::payload::{PayloadKind, PayloadStore};
///
/// let mut store = PayloadStore::new();
/// store.put(PayloadKind::Shader, "vs", b"void main() {}".to_vec());
/// assert_eq!(store.shader_as_string("vs").as_deref(), Some("void main() {}"));
/// assert!(store.data(PayloadKind::Image, "vs").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PayloadStore {
    buffers: BTreeMap<String, Arc<[u8]>>,
    buffer_views: BTreeMap<String, Arc<[u8]>>,
    images: BTreeMap<String, Arc<[u8]>>,
    shaders: BTreeMap<String, Arc<[u8]>>,
}

impl PayloadStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn map(&self, kind: PayloadKind) -> &BTreeMap<String, Arc<[u8]>> {
        match kind {
            PayloadKind::Buffer => &self.buffers,
            PayloadKind::BufferView => &self.buffer_views,
            PayloadKind::Image => &self.images,
            PayloadKind::Shader => &self.shaders,
        }
    }

    fn map_mut(&mut self, kind: PayloadKind) -> &mut BTreeMap<String, Arc<[u8]>> {
        match kind {
            PayloadKind::Buffer => &mut self.buffers,
            PayloadKind::BufferView => &mut self.buffer_views,
            PayloadKind::Image => &mut self.images,
            PayloadKind::Shader => &mut self.shaders,
        }
    }

    /// Store the payload of the given entity, replacing any previous one
    pub fn put(&mut self, kind: PayloadKind, id: impl Into<String>, data: impl Into<Arc<[u8]>>) {
        self.map_mut(kind).insert(id.into(), data.into());
    }

    /// The payload of the given entity
    pub fn data(&self, kind: PayloadKind, id: &str) -> Option<&[u8]> {
        self.map(kind).get(id).map(|data| data.as_ref())
    }

    /// Whether a payload is stored for the given entity
    pub fn contains(&self, kind: PayloadKind, id: &str) -> bool {
        self.map(kind).contains_key(id)
    }

    /// Remove and return the payload of the given entity
    pub fn remove(&mut self, kind: PayloadKind, id: &str) -> Option<Arc<[u8]>> {
        self.map_mut(kind).remove(id)
    }

    /// All payloads of one kind
    pub fn payloads(&self, kind: PayloadKind) -> &BTreeMap<String, Arc<[u8]>> {
        self.map(kind)
    }

    /// Copy every payload of `other` into this store
    ///
    /// Existing payloads under the same IDs are replaced. Bytes are shared,
    /// not duplicated.
    pub fn copy_from(&mut self, other: &PayloadStore) {
        for kind in PayloadKind::ALL {
            let source = other.map(kind);
            self.map_mut(kind)
                .extend(source.iter().map(|(id, data)| (id.clone(), Arc::clone(data))));
        }
    }

    /// The shader source of the given shader, decoded as UTF-8
    ///
    /// Invalid sequences are replaced with U+FFFD.
    pub fn shader_as_string(&self, id: &str) -> Option<String> {
        self.data(PayloadKind::Shader, id)
            .map(|data| String::from_utf8_lossy(data).into_owned())
    }

    /// Total number of stored payloads
    pub fn len(&self) -> usize {
        PayloadKind::ALL.iter().map(|kind| self.map(*kind).len()).sum()
    }

    /// Whether the store holds no payloads
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
