//! Material validation

use crate::graph::resolve_or_report_missing;
use crate::model::ParameterType;

use super::{DiagnosticKind, Validator, ValidatorContext, ValidatorResult, require_id};

impl Validator<'_> {
    /// Validate the material with the given ID
    ///
    /// The technique is validated first. Values are then matched against the
    /// technique's parameters: a value for an unknown parameter is a warning,
    /// and a value for a sampler parameter must name an existing texture.
    pub fn validate_material(
        &self,
        material_id: Option<&str>,
        current: &ValidatorContext,
    ) -> ValidatorResult {
        let mut result = ValidatorResult::new();
        let Some(material_id) = require_id(material_id, "material", current, &mut result) else {
            return result;
        };

        let context = current.with(format!("materials[{}]", material_id));
        let Some(material) =
            resolve_or_report_missing(&self.document.materials, material_id, &context, &mut result)
        else {
            return result;
        };

        result.merge(self.validate_technique(material.technique.as_deref(), &context));
        if result.has_errors() {
            return result;
        }

        let Some(values) = material.values.as_ref() else {
            return result;
        };
        // The technique resolved above
        let parameters = material
            .technique
            .as_deref()
            .and_then(|id| self.document.techniques.get(id))
            .and_then(|technique| technique.parameters.as_ref());

        for (parameter_id, value) in values {
            let Some(parameter) = parameters.and_then(|parameters| parameters.get(parameter_id))
            else {
                result.add_warning(
                    DiagnosticKind::InvalidValue,
                    format!(
                        "The value {} does not correspond to a parameter of the technique",
                        parameter_id
                    ),
                    &context,
                );
                continue;
            };

            let is_sampler = parameter
                .parameter_type
                .and_then(ParameterType::from_code)
                .is_some_and(|parameter_type| parameter_type.is_sampler());
            if is_sampler {
                let value_context = context.with(format!("value {}", parameter_id));
                result.merge(self.validate_sampler_value(parameter_id, value, &value_context));
                if result.has_errors() {
                    return result;
                }
            }
        }
        result
    }
}
