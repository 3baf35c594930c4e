//! Shared fixtures for integration tests
//!
//! `BOX_GLTF` is a complete, valid glTF 1.0 document: a textured, lit box
//! with a camera, a light node and a rotation animation. Tests load it and
//! break one thing at a time.

#![allow(dead_code)]

use gltf_validator::Document;
use gltf_validator::payload::{PayloadKind, PayloadStore};
use serde_json::Value;

pub const BOX_GLTF: &str = r#"{
    "asset": { "version": "1.0", "generator": "fixture" },
    "scene": "main",
    "buffers": {
        "box": { "uri": "box.bin", "byteLength": 840, "type": "arraybuffer" },
        "anim": { "uri": "anim.bin", "byteLength": 48 }
    },
    "bufferViews": {
        "indicesView": { "buffer": "box", "byteOffset": 0, "byteLength": 72, "target": 34963 },
        "attributesView": { "buffer": "box", "byteOffset": 72, "byteLength": 768, "target": 34962 },
        "animView": { "buffer": "anim", "byteOffset": 0, "byteLength": 48 }
    },
    "accessors": {
        "indices": {
            "bufferView": "indicesView", "byteOffset": 0,
            "componentType": 5123, "count": 36, "type": "SCALAR"
        },
        "positions": {
            "bufferView": "attributesView", "byteOffset": 0, "byteStride": 12,
            "componentType": 5126, "count": 24, "type": "VEC3",
            "min": [-0.5, -0.5, -0.5], "max": [0.5, 0.5, 0.5]
        },
        "normals": {
            "bufferView": "attributesView", "byteOffset": 288, "byteStride": 12,
            "componentType": 5126, "count": 24, "type": "VEC3"
        },
        "texcoords": {
            "bufferView": "attributesView", "byteOffset": 576, "byteStride": 8,
            "componentType": 5126, "count": 24, "type": "VEC2"
        },
        "times": {
            "bufferView": "animView", "byteOffset": 0,
            "componentType": 5126, "count": 2, "type": "SCALAR"
        },
        "rotations": {
            "bufferView": "animView", "byteOffset": 8,
            "componentType": 5126, "count": 2, "type": "VEC4"
        }
    },
    "images": {
        "img": { "uri": "box.png" }
    },
    "samplers": {
        "smp": { "magFilter": 9729, "minFilter": 9987, "wrapS": 10497, "wrapT": 10497 }
    },
    "textures": {
        "tex": {
            "source": "img", "sampler": "smp", "target": 3553,
            "format": 6408, "internalFormat": 6408, "type": 5121
        }
    },
    "shaders": {
        "vs": { "uri": "box_vs.glsl", "type": 35633 },
        "fs": { "uri": "box_fs.glsl", "type": 35632 }
    },
    "programs": {
        "prog": {
            "vertexShader": "vs", "fragmentShader": "fs",
            "attributes": ["a_position", "a_normal", "a_texcoord0"]
        }
    },
    "techniques": {
        "tech": {
            "program": "prog",
            "parameters": {
                "position": { "type": 35665, "semantic": "POSITION" },
                "normal": { "type": 35665, "semantic": "NORMAL" },
                "texcoord0": { "type": 35664, "semantic": "TEXCOORD_0" },
                "modelViewMatrix": { "type": 35676, "semantic": "MODELVIEW" },
                "normalMatrix": { "type": 35675, "semantic": "MODELVIEWINVERSETRANSPOSE" },
                "projectionMatrix": { "type": 35676, "semantic": "PROJECTION" },
                "light": { "type": 35676, "semantic": "MODELVIEW", "node": "light" },
                "diffuse": { "type": 35678 },
                "shininess": { "type": 5126, "value": 20.0 }
            },
            "attributes": {
                "a_position": "position",
                "a_normal": "normal",
                "a_texcoord0": "texcoord0"
            },
            "uniforms": {
                "u_modelViewMatrix": "modelViewMatrix",
                "u_normalMatrix": "normalMatrix",
                "u_projectionMatrix": "projectionMatrix",
                "u_light": "light",
                "u_diffuse": "diffuse",
                "u_shininess": "shininess"
            },
            "states": { "enable": [2929, 2884] }
        }
    },
    "materials": {
        "mat": {
            "technique": "tech",
            "values": { "diffuse": "tex", "shininess": 50.0 }
        }
    },
    "meshes": {
        "boxMesh": {
            "primitives": [{
                "attributes": {
                    "NORMAL": "normals",
                    "POSITION": "positions",
                    "TEXCOORD_0": "texcoords"
                },
                "indices": "indices",
                "material": "mat",
                "mode": 4
            }]
        }
    },
    "cameras": {
        "cam": {
            "type": "perspective",
            "perspective": { "aspectRatio": 1.5, "yfov": 0.66, "zfar": 100.0, "znear": 0.01 }
        }
    },
    "nodes": {
        "root": {
            "children": ["boxNode", "cameraNode", "light"],
            "matrix": [1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1]
        },
        "boxNode": { "meshes": ["boxMesh"] },
        "cameraNode": { "camera": "cam", "translation": [0, 0, 5], "rotation": [0, 0, 0, 1] },
        "light": { "translation": [2, 2, 2] }
    },
    "animations": {
        "spin": {
            "parameters": { "TIME": "times", "rotation": "rotations" },
            "samplers": {
                "s": { "input": "TIME", "output": "rotation", "interpolation": "LINEAR" }
            },
            "channels": [
                { "sampler": "s", "target": { "id": "boxNode", "path": "rotation" } }
            ]
        }
    },
    "scenes": {
        "main": { "nodes": ["root"] }
    }
}"#;

/// The box fixture as a document
pub fn box_document() -> Document {
    Document::from_json_str(BOX_GLTF).expect("fixture must deserialize")
}

/// The box fixture as raw JSON, for tests that edit it before loading
pub fn box_json() -> Value {
    serde_json::from_str(BOX_GLTF).expect("fixture must be valid JSON")
}

/// Load a document from edited fixture JSON
pub fn document_from(json: Value) -> Document {
    serde_json::from_value(json).expect("edited fixture must deserialize")
}

/// Context paths of all diagnostics, in report order
pub fn contexts(result: &gltf_validator::ValidatorResult) -> Vec<&str> {
    result
        .diagnostics()
        .iter()
        .map(|d| d.context.as_str())
        .collect()
}

/// Payloads for every buffer, image and shader of the box fixture
pub fn box_payloads() -> PayloadStore {
    let mut store = PayloadStore::new();
    store.put(PayloadKind::Buffer, "box", vec![0u8; 840]);
    store.put(PayloadKind::Buffer, "anim", vec![0u8; 48]);
    store.put(PayloadKind::Image, "img", b"\x89PNG\r\n\x1a\n".to_vec());
    store.put(PayloadKind::Shader, "vs", b"attribute vec3 a_position;".to_vec());
    store.put(PayloadKind::Shader, "fs", b"uniform sampler2D u_diffuse;".to_vec());
    store
}
