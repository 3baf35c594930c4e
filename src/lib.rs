//! # gltf_validator
//!
//! A pure Rust validator for glTF 1.0 documents.
//!
//! A glTF 1.0 asset is a graph of entities (buffers, accessors, shaders,
//! programs, techniques, materials, meshes, nodes, ...) that refer to each
//! other by string identifiers. This library walks that graph and reports
//! every dangling reference, missing required property, malformed mapping and
//! out-of-domain value as a structured diagnostic with the path that led to
//! it, e.g. `techniques[t1].uniform u_diffuse.parameters[diffuse].textures[tex0]`.
//!
//! ## Features
//!
//! - Pure Rust implementation with no unsafe code
//! - One validator per entity kind, composed by a top-level pass
//! - Diagnostics with stable codes, severities and context paths
//! - Pluggable whole-document checks (payload presence, unused entities)
//! - Synthesis of default techniques for converters
//!
//! ## Example
//!
//! ```
//! use gltf_validator::Document;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let json = r#"{
//!     "shaders": {
//!         "vs": { "uri": "vs.glsl", "type": 35633 },
//!         "fs": { "uri": "fs.glsl", "type": 35632 }
//!     },
//!     "programs": { "p0": { "vertexShader": "vs", "fragmentShader": "fs" } },
//!     "techniques": { "t0": { "program": "p1" } }
//! }"#;
//!
//! let document = Document::from_json_str(json)?;
//! let result = document.validate();
//! assert_eq!(result.error_count(), 1);
//! assert_eq!(result.diagnostics()[0].context, "techniques[t0].programs[p1]");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod check;
pub mod checks;
pub mod constants;
pub mod error;
pub mod graph;
pub mod model;
pub mod payload;
pub mod synthesis;
pub mod validator;

pub use error::{Error, Result};
pub use model::{Document, EntityKind, ValidatorConfig};
pub use validator::{
    Diagnostic, DiagnosticKind, Severity, Validator, ValidatorContext, ValidatorResult,
    validate_document, validate_document_with_config,
};

use std::io::Read;

impl Document {
    /// Deserialize a document from a reader holding glTF 1.0 JSON
    ///
    /// Only the JSON structure is read; referenced files and data URIs are
    /// not resolved.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gltf_validator::Document;
    /// use std::fs::File;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let file = File::open("duck.gltf")?;
    /// let document = Document::from_reader(file)?;
    /// println!("{}", document.validate());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Deserialize a document from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate every root entity of this document
    pub fn validate(&self) -> ValidatorResult {
        validate_document(self)
    }

    /// Validate this document with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error when a registered check aborts the pass.
    pub fn validate_with_config(&self, config: &ValidatorConfig) -> Result<ValidatorResult> {
        validate_document_with_config(self, config)
    }
}
