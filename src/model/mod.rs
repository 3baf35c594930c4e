//! Data structures representing glTF 1.0 documents

// Declare all submodules
mod animation;
mod buffer;
mod core;
mod material;
mod mesh;
mod scene;
mod technique;
mod texture;

// Re-export all public types from core module
pub use core::{Asset, Document, EntityKind, GltfEntity, ValidatorConfig};

pub use animation::{
    ANIMATION_TARGET_PATHS, Animation, AnimationChannel, AnimationChannelTarget, AnimationSampler,
};
pub use buffer::{Accessor, Buffer, BufferView};
pub use material::Material;
pub use mesh::{Mesh, MeshPrimitive};
pub use scene::{Camera, Node, Orthographic, Perspective, Scene};
pub use technique::{ParameterType, Program, Shader, Technique, TechniqueParameters};
pub use texture::{Image, Sampler, Texture};
