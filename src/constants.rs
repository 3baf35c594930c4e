//! GL constants used by glTF 1.0 documents
//!
//! glTF 1.0 stores WebGL enums as their raw numeric codes. Only the codes that
//! the validator inspects are listed here.

/// `GL_BYTE`
pub const GL_BYTE: u32 = 5120;
/// `GL_UNSIGNED_BYTE`
pub const GL_UNSIGNED_BYTE: u32 = 5121;
/// `GL_SHORT`
pub const GL_SHORT: u32 = 5122;
/// `GL_UNSIGNED_SHORT`
pub const GL_UNSIGNED_SHORT: u32 = 5123;
/// `GL_INT`
pub const GL_INT: u32 = 5124;
/// `GL_UNSIGNED_INT`
pub const GL_UNSIGNED_INT: u32 = 5125;
/// `GL_FLOAT`
pub const GL_FLOAT: u32 = 5126;

/// `GL_FLOAT_VEC2`
pub const GL_FLOAT_VEC2: u32 = 35664;
/// `GL_FLOAT_VEC3`
pub const GL_FLOAT_VEC3: u32 = 35665;
/// `GL_FLOAT_VEC4`
pub const GL_FLOAT_VEC4: u32 = 35666;
/// `GL_INT_VEC2`
pub const GL_INT_VEC2: u32 = 35667;
/// `GL_INT_VEC3`
pub const GL_INT_VEC3: u32 = 35668;
/// `GL_INT_VEC4`
pub const GL_INT_VEC4: u32 = 35669;
/// `GL_BOOL`
pub const GL_BOOL: u32 = 35670;
/// `GL_BOOL_VEC2`
pub const GL_BOOL_VEC2: u32 = 35671;
/// `GL_BOOL_VEC3`
pub const GL_BOOL_VEC3: u32 = 35672;
/// `GL_BOOL_VEC4`
pub const GL_BOOL_VEC4: u32 = 35673;
/// `GL_FLOAT_MAT2`
pub const GL_FLOAT_MAT2: u32 = 35674;
/// `GL_FLOAT_MAT3`
pub const GL_FLOAT_MAT3: u32 = 35675;
/// `GL_FLOAT_MAT4`
pub const GL_FLOAT_MAT4: u32 = 35676;
/// `GL_SAMPLER_2D`
pub const GL_SAMPLER_2D: u32 = 35678;

/// `GL_FRAGMENT_SHADER`
pub const GL_FRAGMENT_SHADER: u32 = 35632;
/// `GL_VERTEX_SHADER`
pub const GL_VERTEX_SHADER: u32 = 35633;

/// `GL_ARRAY_BUFFER`
pub const GL_ARRAY_BUFFER: u32 = 34962;
/// `GL_ELEMENT_ARRAY_BUFFER`
pub const GL_ELEMENT_ARRAY_BUFFER: u32 = 34963;

/// `GL_TEXTURE_2D`
pub const GL_TEXTURE_2D: u32 = 3553;

/// `GL_NEAREST`
pub const GL_NEAREST: u32 = 9728;
/// `GL_LINEAR`
pub const GL_LINEAR: u32 = 9729;
/// `GL_NEAREST_MIPMAP_NEAREST`
pub const GL_NEAREST_MIPMAP_NEAREST: u32 = 9984;
/// `GL_LINEAR_MIPMAP_NEAREST`
pub const GL_LINEAR_MIPMAP_NEAREST: u32 = 9985;
/// `GL_NEAREST_MIPMAP_LINEAR`
pub const GL_NEAREST_MIPMAP_LINEAR: u32 = 9986;
/// `GL_LINEAR_MIPMAP_LINEAR`
pub const GL_LINEAR_MIPMAP_LINEAR: u32 = 9987;

/// `GL_REPEAT`
pub const GL_REPEAT: u32 = 10497;
/// `GL_CLAMP_TO_EDGE`
pub const GL_CLAMP_TO_EDGE: u32 = 33071;
/// `GL_MIRRORED_REPEAT`
pub const GL_MIRRORED_REPEAT: u32 = 33648;

/// Component types an accessor may declare
pub const ACCESSOR_COMPONENT_TYPES: [u32; 6] = [
    GL_BYTE,
    GL_UNSIGNED_BYTE,
    GL_SHORT,
    GL_UNSIGNED_SHORT,
    GL_UNSIGNED_INT,
    GL_FLOAT,
];

/// Element types an accessor may declare
pub const ACCESSOR_TYPES: [&str; 7] = ["SCALAR", "VEC2", "VEC3", "VEC4", "MAT2", "MAT3", "MAT4"];

/// Filters accepted for `magFilter`
pub const MAG_FILTERS: [u32; 2] = [GL_NEAREST, GL_LINEAR];

/// Filters accepted for `minFilter`
pub const MIN_FILTERS: [u32; 6] = [
    GL_NEAREST,
    GL_LINEAR,
    GL_NEAREST_MIPMAP_NEAREST,
    GL_LINEAR_MIPMAP_NEAREST,
    GL_NEAREST_MIPMAP_LINEAR,
    GL_LINEAR_MIPMAP_LINEAR,
];

/// Wrap modes accepted for `wrapS` and `wrapT`
pub const WRAP_MODES: [u32; 3] = [GL_REPEAT, GL_CLAMP_TO_EDGE, GL_MIRRORED_REPEAT];

/// Largest primitive `mode` (`GL_TRIANGLE_FAN`)
pub const MAX_PRIMITIVE_MODE: u32 = 6;

/// Largest `byteStride` an accessor may declare
pub const MAX_BYTE_STRIDE: u32 = 255;

/// Size in bytes of one component of the given component type
pub fn component_size(component_type: u32) -> Option<u64> {
    match component_type {
        GL_BYTE | GL_UNSIGNED_BYTE => Some(1),
        GL_SHORT | GL_UNSIGNED_SHORT => Some(2),
        GL_INT | GL_UNSIGNED_INT | GL_FLOAT => Some(4),
        _ => None,
    }
}

/// Number of components of the given accessor element type
pub fn component_count(accessor_type: &str) -> Option<u64> {
    match accessor_type {
        "SCALAR" => Some(1),
        "VEC2" => Some(2),
        "VEC3" => Some(3),
        "VEC4" | "MAT2" => Some(4),
        "MAT3" => Some(9),
        "MAT4" => Some(16),
        _ => None,
    }
}
