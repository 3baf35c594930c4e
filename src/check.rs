//! Pluggable whole-document checks
//!
//! The per-kind validators follow references from one entity to the next. A
//! [`DocumentCheck`] looks at the document as a whole instead, for concerns
//! that do not belong to any single entity: payload presence, unreferenced
//! entities, or project-specific conventions. Checks are registered on a
//! [`ValidatorConfig`](crate::ValidatorConfig) and run after the entity pass.

use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::error::Result;
use crate::model::Document;
use crate::validator::ValidatorResult;

/// A validation pass over a whole document
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use gltf_validator::check::DocumentCheck;
/// use gltf_validator::{
///     DiagnosticKind, Document, Result, ValidatorConfig, ValidatorContext, ValidatorResult,
/// };
///
/// struct RequireScene;
///
/// impl DocumentCheck for RequireScene {
///     fn name(&self) -> &'static str {
///         "require-scene"
///     }
///
///     fn validate(&self, document: &Document) -> Result<ValidatorResult> {
///         let mut result = ValidatorResult::new();
///         if document.scene.is_none() {
///             result.add_warning(
///                 DiagnosticKind::MissingRequiredField,
///                 "The document has no default scene",
///                 &ValidatorContext::root(),
///             );
///         }
///         Ok(result)
///     }
/// }
///
/// let config = ValidatorConfig::new().with_check(Arc::new(RequireScene));
/// let result = Document::new().validate_with_config(&config).unwrap();
/// assert_eq!(result.warning_count(), 1);
/// ```
pub trait DocumentCheck: Send + Sync {
    /// Short name used in logs and error messages
    fn name(&self) -> &'static str;

    /// Inspect the document and report findings
    ///
    /// # Errors
    ///
    /// Returning an error aborts the validation pass. Content problems should
    /// be reported as diagnostics instead.
    fn validate(&self, document: &Document) -> Result<ValidatorResult>;

    /// Whether the check has anything to inspect in `document`
    ///
    /// Inapplicable checks are skipped. The default is `true`.
    fn is_applicable(&self, _document: &Document) -> bool {
        true
    }
}

/// Ordered collection of registered checks
#[derive(Clone, Default)]
pub struct CheckRegistry {
    checks: Vec<Arc<dyn DocumentCheck>>,
}

impl CheckRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a check; checks run in registration order
    pub fn register(&mut self, check: Arc<dyn DocumentCheck>) {
        self.checks.push(check);
    }

    /// The check registered under `name`, if any
    pub fn get(&self, name: &str) -> Option<&dyn DocumentCheck> {
        self.checks
            .iter()
            .find(|c| c.name() == name)
            .map(|c| c.as_ref())
    }

    /// All registered checks
    pub fn checks(&self) -> &[Arc<dyn DocumentCheck>] {
        &self.checks
    }

    /// Names of all registered checks in registration order
    pub fn names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|c| c.name()).collect()
    }

    /// Run every applicable check and merge the findings
    ///
    /// # Errors
    ///
    /// Returns the first error a check reports.
    pub fn validate_all(&self, document: &Document) -> Result<ValidatorResult> {
        let mut result = ValidatorResult::new();
        for check in &self.checks {
            if !check.is_applicable(document) {
                trace!(check = check.name(), "Skipping inapplicable check");
                continue;
            }
            debug!(check = check.name(), "Running document check");
            match check.validate(document) {
                Ok(check_result) => result.merge(check_result),
                Err(e) => {
                    warn!(check = check.name(), error = %e, "Document check aborted");
                    return Err(e);
                }
            }
        }
        Ok(result)
    }
}
