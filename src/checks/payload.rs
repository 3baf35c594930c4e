//! Payload presence check

use std::sync::Arc;

use tracing::trace;

use crate::check::DocumentCheck;
use crate::error::Result;
use crate::model::{Document, EntityKind};
use crate::payload::{PayloadKind, PayloadStore};
use crate::validator::{DiagnosticKind, ValidatorContext, ValidatorResult};

/// Checks that every buffer, image and shader has a payload in a store
///
/// A missing payload is an error. A buffer whose payload length differs from
/// its declared `byteLength` is a warning.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use gltf_validator::checks::PayloadCheck;
/// use gltf_validator::model::Image;
/// use gltf_validator::payload::PayloadStore;
/// use gltf_validator::{Document, ValidatorConfig};
///
/// let mut document = Document::new();
/// document.images.insert("img".to_string(), Image::new("image.png"));
///
/// let store = Arc::new(PayloadStore::new());
/// let config = ValidatorConfig::new().with_check(Arc::new(PayloadCheck::new(store)));
/// let result = document.validate_with_config(&config).unwrap();
/// assert_eq!(result.error_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct PayloadCheck {
    store: Arc<PayloadStore>,
}

impl PayloadCheck {
    /// Create a check against the given store
    pub fn new(store: Arc<PayloadStore>) -> Self {
        Self { store }
    }

    /// The store payloads are looked up in
    pub fn store(&self) -> &PayloadStore {
        &self.store
    }

    fn check_present<'d>(
        &self,
        kind: PayloadKind,
        entity_kind: EntityKind,
        ids: impl Iterator<Item = &'d String>,
        result: &mut ValidatorResult,
    ) {
        let root = ValidatorContext::root();
        for id in ids {
            if !self.store.contains(kind, id) {
                result.add_error(
                    DiagnosticKind::MissingReference,
                    format!("No payload is stored for {} {}", kind, id),
                    &root.with(format!("{}[{}]", entity_kind.collection_name(), id)),
                );
            }
        }
    }
}

impl DocumentCheck for PayloadCheck {
    fn name(&self) -> &'static str {
        "payload"
    }

    fn validate(&self, document: &Document) -> Result<ValidatorResult> {
        trace!(payloads = self.store.len(), "Checking payload presence");
        let mut result = ValidatorResult::new();

        self.check_present(
            PayloadKind::Buffer,
            EntityKind::Buffer,
            document.buffers.keys(),
            &mut result,
        );
        self.check_present(
            PayloadKind::Image,
            EntityKind::Image,
            document.images.keys(),
            &mut result,
        );
        self.check_present(
            PayloadKind::Shader,
            EntityKind::Shader,
            document.shaders.keys(),
            &mut result,
        );

        let root = ValidatorContext::root();
        for (id, buffer) in &document.buffers {
            let (Some(declared), Some(data)) =
                (buffer.byte_length, self.store.data(PayloadKind::Buffer, id))
            else {
                continue;
            };
            if data.len() as u64 != declared {
                result.add_warning(
                    DiagnosticKind::InvalidValue,
                    format!(
                        "The buffer payload has {} bytes, but byteLength is {}",
                        data.len(),
                        declared
                    ),
                    &root.with(format!("buffers[{}]", id)),
                );
            }
        }
        Ok(result)
    }

    fn is_applicable(&self, document: &Document) -> bool {
        !document.buffers.is_empty() || !document.images.is_empty() || !document.shaders.is_empty()
    }
}
