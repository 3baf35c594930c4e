//! Validation logic for glTF documents
//!
//! This module checks that a document graph is internally consistent:
//! - Every identifier resolves to an entity of the right kind
//! - Required properties are present and drawn from their enumerations
//! - Technique parameters, uniforms and attributes agree with each other
//! - Byte ranges of buffer views and accessors fit their storage
//! - The node hierarchy is acyclic
//!
//! Each entity kind has one validator (`validate_<kind>`) that resolves the
//! identifier it is given, checks the entity and recurses into the entities it
//! references. A validator stops checking its own branch as soon as its result
//! holds an error, so one root cause does not produce a cascade of follow-up
//! errors. The top-level pass visits every root entity regardless of errors in
//! its siblings.

mod animation;
mod buffer;
mod context;
mod material;
mod mesh;
mod program;
mod result;
mod scene;
mod technique;
mod texture;

pub use context::{SEGMENT_SEPARATOR, ValidatorContext};
pub use result::{Diagnostic, DiagnosticKind, Severity, ValidatorResult};

use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::OnceLock;

use tracing::{debug, trace};

use crate::error::Result;
use crate::graph::{cycle_candidates, resolve_or_report_missing};
use crate::model::{Document, EntityKind, ValidatorConfig};

/// Validates the entities of one document
///
/// The validator only borrows the document; any number of validators may
/// inspect the same document concurrently as long as nobody mutates it.
#[derive(Debug, Clone)]
pub struct Validator<'a> {
    document: &'a Document,
    /// Computed on first use by the node validator
    cycle_candidates: OnceLock<HashSet<&'a str>>,
}

impl<'a> Validator<'a> {
    /// Create a validator for the given document
    pub fn new(document: &'a Document) -> Self {
        Self {
            document,
            cycle_candidates: OnceLock::new(),
        }
    }

    /// The document being validated
    pub fn document(&self) -> &'a Document {
        self.document
    }

    /// Validate every root entity of the document
    ///
    /// Visits all collections in [`EntityKind::ALL`] order and checks the
    /// default scene reference. Registered checks are not run; see
    /// [`Validator::validate_with_config`].
    pub fn validate(&self) -> ValidatorResult {
        self.validate_roots(&ValidatorConfig::new())
    }

    /// Validate the root collections selected by `config`, then run its
    /// registered checks
    ///
    /// # Errors
    ///
    /// Returns an error only when a registered check aborts; content problems
    /// are always reported through the returned [`ValidatorResult`].
    pub fn validate_with_config(&self, config: &ValidatorConfig) -> Result<ValidatorResult> {
        let mut result = self.validate_roots(config);
        result.merge(config.registry().validate_all(self.document)?);
        Ok(result)
    }

    fn cycle_candidates(&self) -> &HashSet<&'a str> {
        self.cycle_candidates
            .get_or_init(|| cycle_candidates(&self.document.nodes))
    }

    fn validate_roots(&self, config: &ValidatorConfig) -> ValidatorResult {
        debug!(
            entities = self.document.entity_count(),
            "Validating glTF document"
        );
        let root = ValidatorContext::root();
        let mut result = ValidatorResult::new();

        for kind in EntityKind::ALL {
            if !config.validates(kind) {
                continue;
            }
            for id in self.document.ids(kind) {
                result.merge(self.validate_entity(kind, id, &root));
            }
        }

        if let Some(scene_id) = self.document.scene.as_deref() {
            resolve_or_report_missing(
                &self.document.scenes,
                scene_id,
                &root.with("scene"),
                &mut result,
            );
        }

        debug!(
            errors = result.error_count(),
            warnings = result.warning_count(),
            "Validation finished"
        );
        result
    }

    /// Validate one entity of the given kind
    pub fn validate_entity(
        &self,
        kind: EntityKind,
        id: &str,
        context: &ValidatorContext,
    ) -> ValidatorResult {
        trace!(%kind, id, "Validating entity");
        let id = Some(id);
        match kind {
            EntityKind::Buffer => self.validate_buffer(id, context),
            EntityKind::BufferView => self.validate_buffer_view(id, context),
            EntityKind::Image => self.validate_image(id, context),
            EntityKind::Shader => self.validate_shader(id, context),
            EntityKind::Program => self.validate_program(id, context),
            EntityKind::Technique => self.validate_technique(id, context),
            EntityKind::Material => self.validate_material(id, context),
            EntityKind::Mesh => self.validate_mesh(id, context),
            EntityKind::Accessor => self.validate_accessor(id, context),
            EntityKind::Camera => self.validate_camera(id, context),
            EntityKind::Animation => self.validate_animation(id, context),
            EntityKind::Texture => self.validate_texture(id, context),
            EntityKind::Sampler => self.validate_sampler(id, context),
            EntityKind::Node => self.validate_node(id, context),
            EntityKind::Scene => self.validate_scene(id, context),
        }
    }
}

/// Validate a document with every root collection and no additional checks
pub fn validate_document(document: &Document) -> ValidatorResult {
    Validator::new(document).validate()
}

/// Validate a document with custom configuration
///
/// # Errors
///
/// Returns an error when a registered check aborts the pass.
pub fn validate_document_with_config(
    document: &Document,
    config: &ValidatorConfig,
) -> Result<ValidatorResult> {
    Validator::new(document).validate_with_config(config)
}

/// Report a null required identifier
///
/// Returns the identifier when it is present.
pub(crate) fn require_id<'i>(
    id: Option<&'i str>,
    kind_name: &str,
    context: &ValidatorContext,
    result: &mut ValidatorResult,
) -> Option<&'i str> {
    if id.is_none() {
        result.add_error(
            DiagnosticKind::MissingRequiredField,
            format!("The {} ID is null", kind_name),
            context,
        );
    }
    id
}

/// JSON type name of a value, for messages
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// The texture ID a sampler value names
///
/// Non-string values name the texture whose ID is their JSON rendering.
pub(crate) fn texture_id(value: &serde_json::Value) -> Cow<'_, str> {
    match value {
        serde_json::Value::String(id) => Cow::Borrowed(id.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}
