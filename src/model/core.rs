//! Core glTF types: the document graph, entity kinds and validator configuration

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::check::{CheckRegistry, DocumentCheck};

use super::animation::Animation;
use super::buffer::{Accessor, Buffer, BufferView};
use super::material::Material;
use super::mesh::Mesh;
use super::scene::{Camera, Node, Scene};
use super::technique::{Program, Shader, Technique};
use super::texture::{Image, Sampler, Texture};

/// An entity type stored in the document graph
///
/// The associated name is used in diagnostics, e.g. "unresolved identifier of
/// kind program".
pub trait GltfEntity {
    /// Human-readable kind name
    const KIND_NAME: &'static str;
}

/// Root collections of a glTF document
///
/// The order of [`EntityKind::ALL`] is the order in which the top-level
/// validator visits the collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    /// `buffers`
    Buffer,
    /// `bufferViews`
    BufferView,
    /// `images`
    Image,
    /// `shaders`
    Shader,
    /// `programs`
    Program,
    /// `techniques`
    Technique,
    /// `materials`
    Material,
    /// `meshes`
    Mesh,
    /// `accessors`
    Accessor,
    /// `cameras`
    Camera,
    /// `animations`
    Animation,
    /// `textures`
    Texture,
    /// `samplers`
    Sampler,
    /// `nodes`
    Node,
    /// `scenes`
    Scene,
}

impl EntityKind {
    /// Every root collection, in document declaration order
    pub const ALL: [EntityKind; 15] = [
        EntityKind::Buffer,
        EntityKind::BufferView,
        EntityKind::Image,
        EntityKind::Shader,
        EntityKind::Program,
        EntityKind::Technique,
        EntityKind::Material,
        EntityKind::Mesh,
        EntityKind::Accessor,
        EntityKind::Camera,
        EntityKind::Animation,
        EntityKind::Texture,
        EntityKind::Sampler,
        EntityKind::Node,
        EntityKind::Scene,
    ];

    /// The JSON property name of the collection
    pub fn collection_name(&self) -> &'static str {
        match self {
            EntityKind::Buffer => "buffers",
            EntityKind::BufferView => "bufferViews",
            EntityKind::Image => "images",
            EntityKind::Shader => "shaders",
            EntityKind::Program => "programs",
            EntityKind::Technique => "techniques",
            EntityKind::Material => "materials",
            EntityKind::Mesh => "meshes",
            EntityKind::Accessor => "accessors",
            EntityKind::Camera => "cameras",
            EntityKind::Animation => "animations",
            EntityKind::Texture => "textures",
            EntityKind::Sampler => "samplers",
            EntityKind::Node => "nodes",
            EntityKind::Scene => "scenes",
        }
    }

    /// Get a kind from its collection name
    pub fn from_collection_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.collection_name() == name)
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.collection_name())
    }
}

/// Metadata about the glTF asset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// The glTF version, e.g. `"1.0"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Tool that generated the document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generator: Option<String>,
    /// Copyright message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

/// A glTF 1.0 document graph
///
/// Every collection maps string identifiers to entities. Collections that are
/// missing from the JSON are empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Asset metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<Asset>,
    /// Raw binary buffers
    #[serde(default)]
    pub buffers: BTreeMap<String, Buffer>,
    /// Views into buffers
    #[serde(default)]
    pub buffer_views: BTreeMap<String, BufferView>,
    /// Images used by textures
    #[serde(default)]
    pub images: BTreeMap<String, Image>,
    /// GLSL shader sources
    #[serde(default)]
    pub shaders: BTreeMap<String, Shader>,
    /// Linked shader programs
    #[serde(default)]
    pub programs: BTreeMap<String, Program>,
    /// Rendering techniques
    #[serde(default)]
    pub techniques: BTreeMap<String, Technique>,
    /// Materials instantiating techniques
    #[serde(default)]
    pub materials: BTreeMap<String, Material>,
    /// Meshes
    #[serde(default)]
    pub meshes: BTreeMap<String, Mesh>,
    /// Typed views into buffer views
    #[serde(default)]
    pub accessors: BTreeMap<String, Accessor>,
    /// Cameras
    #[serde(default)]
    pub cameras: BTreeMap<String, Camera>,
    /// Keyframe animations
    #[serde(default)]
    pub animations: BTreeMap<String, Animation>,
    /// Textures
    #[serde(default)]
    pub textures: BTreeMap<String, Texture>,
    /// Texture samplers
    #[serde(default)]
    pub samplers: BTreeMap<String, Sampler>,
    /// Scene graph nodes
    #[serde(default)]
    pub nodes: BTreeMap<String, Node>,
    /// Scenes
    #[serde(default)]
    pub scenes: BTreeMap<String, Scene>,
    /// The default scene; `None` means no scene is displayed by default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene: Option<String>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entities in the given root collection
    pub fn collection_len(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Buffer => self.buffers.len(),
            EntityKind::BufferView => self.buffer_views.len(),
            EntityKind::Image => self.images.len(),
            EntityKind::Shader => self.shaders.len(),
            EntityKind::Program => self.programs.len(),
            EntityKind::Technique => self.techniques.len(),
            EntityKind::Material => self.materials.len(),
            EntityKind::Mesh => self.meshes.len(),
            EntityKind::Accessor => self.accessors.len(),
            EntityKind::Camera => self.cameras.len(),
            EntityKind::Animation => self.animations.len(),
            EntityKind::Texture => self.textures.len(),
            EntityKind::Sampler => self.samplers.len(),
            EntityKind::Node => self.nodes.len(),
            EntityKind::Scene => self.scenes.len(),
        }
    }

    /// Identifiers of the given root collection, in iteration order
    pub fn ids(&self, kind: EntityKind) -> Vec<&str> {
        fn keys<T>(map: &BTreeMap<String, T>) -> Vec<&str> {
            map.keys().map(String::as_str).collect()
        }
        match kind {
            EntityKind::Buffer => keys(&self.buffers),
            EntityKind::BufferView => keys(&self.buffer_views),
            EntityKind::Image => keys(&self.images),
            EntityKind::Shader => keys(&self.shaders),
            EntityKind::Program => keys(&self.programs),
            EntityKind::Technique => keys(&self.techniques),
            EntityKind::Material => keys(&self.materials),
            EntityKind::Mesh => keys(&self.meshes),
            EntityKind::Accessor => keys(&self.accessors),
            EntityKind::Camera => keys(&self.cameras),
            EntityKind::Animation => keys(&self.animations),
            EntityKind::Texture => keys(&self.textures),
            EntityKind::Sampler => keys(&self.samplers),
            EntityKind::Node => keys(&self.nodes),
            EntityKind::Scene => keys(&self.scenes),
        }
    }

    /// Total number of root entities
    pub fn entity_count(&self) -> usize {
        EntityKind::ALL
            .iter()
            .map(|kind| self.collection_len(*kind))
            .sum()
    }
}

/// Configuration for a validation pass
///
/// Selects which root collections the top-level validator visits and holds
/// the additional document checks to run afterwards. Entities outside the
/// selected collections are still validated when they are referenced from a
/// selected one.
#[derive(Clone)]
pub struct ValidatorConfig {
    /// Root collections visited by the top-level validator
    kinds: HashSet<EntityKind>,
    /// Additional checks run after the per-kind validators
    registry: CheckRegistry,
}

impl ValidatorConfig {
    /// Create a configuration that visits every root collection and runs no
    /// additional checks
    pub fn new() -> Self {
        Self {
            kinds: EntityKind::ALL.into_iter().collect(),
            registry: CheckRegistry::new(),
        }
    }

    /// Restrict the pass to the given root collections
    ///
    /// # Example
    ///
    /// ```
    /// use gltf_validator::{EntityKind, ValidatorConfig};
    ///
    /// let config = ValidatorConfig::new()
    ///     .with_kinds([EntityKind::Technique, EntityKind::Material]);
    /// assert!(config.validates(EntityKind::Technique));
    /// assert!(!config.validates(EntityKind::Buffer));
    /// ```
    pub fn with_kinds(mut self, kinds: impl IntoIterator<Item = EntityKind>) -> Self {
        self.kinds = kinds.into_iter().collect();
        self
    }

    /// Skip the given root collection
    pub fn without_kind(mut self, kind: EntityKind) -> Self {
        self.kinds.remove(&kind);
        self
    }

    /// Register an additional document check
    pub fn with_check(mut self, check: Arc<dyn DocumentCheck>) -> Self {
        self.registry.register(check);
        self
    }

    /// Whether the top-level validator visits the given collection
    pub fn validates(&self, kind: EntityKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Get the check registry
    pub fn registry(&self) -> &CheckRegistry {
        &self.registry
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ValidatorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<_> = self.kinds.iter().collect();
        kinds.sort();
        f.debug_struct("ValidatorConfig")
            .field("kinds", &kinds)
            .field("checks", &self.registry.names())
            .finish()
    }
}
