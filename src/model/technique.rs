//! Shader, program and technique types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::*;

use super::core::GltfEntity;

/// A GLSL shader
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shader {
    /// Location of the GLSL source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// `GL_VERTEX_SHADER` or `GL_FRAGMENT_SHADER` (required)
    #[serde(rename = "type", default)]
    pub shader_type: Option<u32>,
    /// User-defined name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Shader {
    /// Create a vertex shader with the given source URI
    pub fn vertex(uri: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
            shader_type: Some(GL_VERTEX_SHADER),
            name: None,
        }
    }

    /// Create a fragment shader with the given source URI
    pub fn fragment(uri: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
            shader_type: Some(GL_FRAGMENT_SHADER),
            name: None,
        }
    }
}

impl GltfEntity for Shader {
    const KIND_NAME: &'static str = "shader";
}

/// A shader program linking a vertex and a fragment shader
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    /// The vertex shader ID (required)
    #[serde(default)]
    pub vertex_shader: Option<String>,
    /// The fragment shader ID (required)
    #[serde(default)]
    pub fragment_shader: Option<String>,
    /// Vertex attribute symbols used by the program
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<String>>,
    /// User-defined name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Program {
    /// Create a program from two shader IDs
    pub fn new(vertex_shader: impl Into<String>, fragment_shader: impl Into<String>) -> Self {
        Self {
            vertex_shader: Some(vertex_shader.into()),
            fragment_shader: Some(fragment_shader.into()),
            attributes: None,
            name: None,
        }
    }
}

impl GltfEntity for Program {
    const KIND_NAME: &'static str = "program";
}

/// A rendering technique
///
/// `attributes` maps vertex attribute symbols and `uniforms` maps shader
/// uniform symbols to names in `parameters`. An absent map is the same as an
/// empty one; an entry whose value is `None` is malformed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technique {
    /// The program ID (required)
    #[serde(default)]
    pub program: Option<String>,
    /// Parameters by name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<BTreeMap<String, TechniqueParameters>>,
    /// Attribute symbol to parameter name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, Option<String>>>,
    /// Uniform symbol to parameter name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uniforms: Option<BTreeMap<String, Option<String>>>,
    /// Fixed-function render states; not inspected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub states: Option<Value>,
    /// User-defined name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Technique {
    /// Create a technique using the given program and no parameters
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: Some(program.into()),
            ..Self::default()
        }
    }

    /// Add a parameter
    pub fn with_parameter(mut self, name: impl Into<String>, parameter: TechniqueParameters) -> Self {
        self.parameters
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), parameter);
        self
    }

    /// Map an attribute symbol to a parameter name
    pub fn with_attribute(mut self, symbol: impl Into<String>, parameter: impl Into<String>) -> Self {
        self.attributes
            .get_or_insert_with(BTreeMap::new)
            .insert(symbol.into(), Some(parameter.into()));
        self
    }

    /// Map a uniform symbol to a parameter name
    pub fn with_uniform(mut self, symbol: impl Into<String>, parameter: impl Into<String>) -> Self {
        self.uniforms
            .get_or_insert_with(BTreeMap::new)
            .insert(symbol.into(), Some(parameter.into()));
        self
    }
}

impl GltfEntity for Technique {
    const KIND_NAME: &'static str = "technique";
}

/// A technique parameter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechniqueParameters {
    /// Type code (required), see [`ParameterType`]
    #[serde(rename = "type", default)]
    pub parameter_type: Option<u32>,
    /// Free-form semantic; any string is legal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic: Option<String>,
    /// Node whose transform is used for the semantic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,
    /// Array length for array uniforms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Default value; a texture ID when the type is `SAMPLER_2D`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl TechniqueParameters {
    /// Create a parameter with the given type code
    pub fn new(parameter_type: u32) -> Self {
        Self {
            parameter_type: Some(parameter_type),
            ..Self::default()
        }
    }

    /// Create a parameter with the given type code and semantic
    pub fn with_semantic(parameter_type: u32, semantic: impl Into<String>) -> Self {
        Self {
            parameter_type: Some(parameter_type),
            semantic: Some(semantic.into()),
            ..Self::default()
        }
    }

    /// Set the default value
    pub fn value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }
}

impl GltfEntity for TechniqueParameters {
    const KIND_NAME: &'static str = "techniqueParameters";
}

/// The closed set of technique parameter type codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterType {
    /// `BYTE`
    Byte,
    /// `UNSIGNED_BYTE`
    UnsignedByte,
    /// `SHORT`
    Short,
    /// `UNSIGNED_SHORT`
    UnsignedShort,
    /// `INT`
    Int,
    /// `UNSIGNED_INT`
    UnsignedInt,
    /// `FLOAT`
    Float,
    /// `FLOAT_VEC2`
    FloatVec2,
    /// `FLOAT_VEC3`
    FloatVec3,
    /// `FLOAT_VEC4`
    FloatVec4,
    /// `INT_VEC2`
    IntVec2,
    /// `INT_VEC3`
    IntVec3,
    /// `INT_VEC4`
    IntVec4,
    /// `BOOL`
    Bool,
    /// `BOOL_VEC2`
    BoolVec2,
    /// `BOOL_VEC3`
    BoolVec3,
    /// `BOOL_VEC4`
    BoolVec4,
    /// `FLOAT_MAT2`
    FloatMat2,
    /// `FLOAT_MAT3`
    FloatMat3,
    /// `FLOAT_MAT4`
    FloatMat4,
    /// `SAMPLER_2D`
    Sampler2D,
}

impl ParameterType {
    /// Get the parameter type for a GL type code
    pub fn from_code(code: u32) -> Option<Self> {
        let parameter_type = match code {
            GL_BYTE => ParameterType::Byte,
            GL_UNSIGNED_BYTE => ParameterType::UnsignedByte,
            GL_SHORT => ParameterType::Short,
            GL_UNSIGNED_SHORT => ParameterType::UnsignedShort,
            GL_INT => ParameterType::Int,
            GL_UNSIGNED_INT => ParameterType::UnsignedInt,
            GL_FLOAT => ParameterType::Float,
            GL_FLOAT_VEC2 => ParameterType::FloatVec2,
            GL_FLOAT_VEC3 => ParameterType::FloatVec3,
            GL_FLOAT_VEC4 => ParameterType::FloatVec4,
            GL_INT_VEC2 => ParameterType::IntVec2,
            GL_INT_VEC3 => ParameterType::IntVec3,
            GL_INT_VEC4 => ParameterType::IntVec4,
            GL_BOOL => ParameterType::Bool,
            GL_BOOL_VEC2 => ParameterType::BoolVec2,
            GL_BOOL_VEC3 => ParameterType::BoolVec3,
            GL_BOOL_VEC4 => ParameterType::BoolVec4,
            GL_FLOAT_MAT2 => ParameterType::FloatMat2,
            GL_FLOAT_MAT3 => ParameterType::FloatMat3,
            GL_FLOAT_MAT4 => ParameterType::FloatMat4,
            GL_SAMPLER_2D => ParameterType::Sampler2D,
            _ => return None,
        };
        Some(parameter_type)
    }

    /// The GL type code
    pub fn code(&self) -> u32 {
        match self {
            ParameterType::Byte => GL_BYTE,
            ParameterType::UnsignedByte => GL_UNSIGNED_BYTE,
            ParameterType::Short => GL_SHORT,
            ParameterType::UnsignedShort => GL_UNSIGNED_SHORT,
            ParameterType::Int => GL_INT,
            ParameterType::UnsignedInt => GL_UNSIGNED_INT,
            ParameterType::Float => GL_FLOAT,
            ParameterType::FloatVec2 => GL_FLOAT_VEC2,
            ParameterType::FloatVec3 => GL_FLOAT_VEC3,
            ParameterType::FloatVec4 => GL_FLOAT_VEC4,
            ParameterType::IntVec2 => GL_INT_VEC2,
            ParameterType::IntVec3 => GL_INT_VEC3,
            ParameterType::IntVec4 => GL_INT_VEC4,
            ParameterType::Bool => GL_BOOL,
            ParameterType::BoolVec2 => GL_BOOL_VEC2,
            ParameterType::BoolVec3 => GL_BOOL_VEC3,
            ParameterType::BoolVec4 => GL_BOOL_VEC4,
            ParameterType::FloatMat2 => GL_FLOAT_MAT2,
            ParameterType::FloatMat3 => GL_FLOAT_MAT3,
            ParameterType::FloatMat4 => GL_FLOAT_MAT4,
            ParameterType::Sampler2D => GL_SAMPLER_2D,
        }
    }

    /// The GL name of the type, e.g. `"FLOAT_VEC3"`
    pub fn name(&self) -> &'static str {
        match self {
            ParameterType::Byte => "BYTE",
            ParameterType::UnsignedByte => "UNSIGNED_BYTE",
            ParameterType::Short => "SHORT",
            ParameterType::UnsignedShort => "UNSIGNED_SHORT",
            ParameterType::Int => "INT",
            ParameterType::UnsignedInt => "UNSIGNED_INT",
            ParameterType::Float => "FLOAT",
            ParameterType::FloatVec2 => "FLOAT_VEC2",
            ParameterType::FloatVec3 => "FLOAT_VEC3",
            ParameterType::FloatVec4 => "FLOAT_VEC4",
            ParameterType::IntVec2 => "INT_VEC2",
            ParameterType::IntVec3 => "INT_VEC3",
            ParameterType::IntVec4 => "INT_VEC4",
            ParameterType::Bool => "BOOL",
            ParameterType::BoolVec2 => "BOOL_VEC2",
            ParameterType::BoolVec3 => "BOOL_VEC3",
            ParameterType::BoolVec4 => "BOOL_VEC4",
            ParameterType::FloatMat2 => "FLOAT_MAT2",
            ParameterType::FloatMat3 => "FLOAT_MAT3",
            ParameterType::FloatMat4 => "FLOAT_MAT4",
            ParameterType::Sampler2D => "SAMPLER_2D",
        }
    }

    /// Whether the type is a texture sampler
    pub fn is_sampler(&self) -> bool {
        matches!(self, ParameterType::Sampler2D)
    }
}
