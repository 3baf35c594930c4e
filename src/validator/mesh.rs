//! Mesh validation

use crate::constants::MAX_PRIMITIVE_MODE;
use crate::graph::resolve_or_report_missing;
use crate::model::MeshPrimitive;

use super::{DiagnosticKind, Validator, ValidatorContext, ValidatorResult, require_id};

impl Validator<'_> {
    /// Validate the mesh with the given ID and all of its primitives
    pub fn validate_mesh(
        &self,
        mesh_id: Option<&str>,
        current: &ValidatorContext,
    ) -> ValidatorResult {
        let mut result = ValidatorResult::new();
        let Some(mesh_id) = require_id(mesh_id, "mesh", current, &mut result) else {
            return result;
        };

        let context = current.with(format!("meshes[{}]", mesh_id));
        let Some(mesh) =
            resolve_or_report_missing(&self.document.meshes, mesh_id, &context, &mut result)
        else {
            return result;
        };

        for (index, primitive) in mesh.primitives.iter().flatten().enumerate() {
            let primitive_context = context.with(format!("primitives[{}]", index));
            result.merge(self.validate_mesh_primitive(primitive, &primitive_context));
            if result.has_errors() {
                return result;
            }
        }
        result
    }

    fn validate_mesh_primitive(
        &self,
        primitive: &MeshPrimitive,
        context: &ValidatorContext,
    ) -> ValidatorResult {
        let mut result = ValidatorResult::new();

        if let Some(mode) = primitive.mode.filter(|mode| *mode > MAX_PRIMITIVE_MODE) {
            result.add_error(
                DiagnosticKind::InvalidValue,
                format!(
                    "The mode {} is not a valid primitive mode (0..={})",
                    mode, MAX_PRIMITIVE_MODE
                ),
                context,
            );
            return result;
        }

        if let Some(attributes) = primitive.attributes.as_ref() {
            if let Some(semantic) = attributes
                .iter()
                .find_map(|(semantic, target)| target.is_none().then_some(semantic))
            {
                result.add_error(
                    DiagnosticKind::MalformedMapping,
                    format!("The accessor ID is null for attribute {}", semantic),
                    context,
                );
                return result;
            }

            for (semantic, accessor_id) in attributes {
                result.merge(self.validate_accessor(
                    accessor_id.as_deref(),
                    &context.with(format!("attribute {}", semantic)),
                ));
                if result.has_errors() {
                    return result;
                }
            }
        }

        if let Some(indices) = primitive.indices.as_deref() {
            result.merge(self.validate_accessor(Some(indices), &context.with("indices")));
            if result.has_errors() {
                return result;
            }
        }

        result.merge(self.validate_material(primitive.material.as_deref(), context));
        result
    }
}
