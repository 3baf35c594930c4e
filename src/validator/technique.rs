//! Technique and technique parameter validation

use std::collections::BTreeMap;

use serde_json::Value;

use crate::graph::resolve_or_report_missing;
use crate::model::{ParameterType, Technique, TechniqueParameters};

use super::{
    DiagnosticKind, Validator, ValidatorContext, ValidatorResult, json_type_name, texture_id,
};

/// Which symbol mapping of a technique is being checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SymbolMapping {
    Uniform,
    Attribute,
}

impl SymbolMapping {
    fn label(&self) -> &'static str {
        match self {
            SymbolMapping::Uniform => "uniform",
            SymbolMapping::Attribute => "attribute",
        }
    }
}

impl Validator<'_> {
    /// Validate the technique with the given ID
    ///
    /// Checks the uniform mappings, then the attribute mappings, then the
    /// program. A `None` ID would select the implicit default technique of
    /// glTF 1.0, which is not defined and therefore reported as an error.
    pub fn validate_technique(
        &self,
        technique_id: Option<&str>,
        current: &ValidatorContext,
    ) -> ValidatorResult {
        let mut result = ValidatorResult::new();

        let Some(technique_id) = technique_id else {
            result.add_error(
                DiagnosticKind::UnsupportedDefault,
                "The technique ID is null, and an implicit default technique is not supported",
                current,
            );
            return result;
        };

        let context = current.with(format!("techniques[{}]", technique_id));
        let Some(technique) = resolve_or_report_missing(
            &self.document.techniques,
            technique_id,
            &context,
            &mut result,
        ) else {
            return result;
        };

        result.merge(self.validate_symbol_mapping(
            technique,
            technique.uniforms.as_ref(),
            SymbolMapping::Uniform,
            &context,
        ));
        if result.has_errors() {
            return result;
        }

        result.merge(self.validate_symbol_mapping(
            technique,
            technique.attributes.as_ref(),
            SymbolMapping::Attribute,
            &context,
        ));
        if result.has_errors() {
            return result;
        }

        result.merge(self.validate_program(technique.program.as_deref(), &context));
        if result.has_errors() {
            return result;
        }

        result.merge(self.validate_program_attribute_coverage(technique, &context));
        result
    }

    /// Validate a uniform or attribute mapping of a technique
    ///
    /// An absent mapping is empty. Every entry must name a parameter; entries
    /// without a target are reported before any parameter is inspected.
    fn validate_symbol_mapping(
        &self,
        technique: &Technique,
        mapping: Option<&BTreeMap<String, Option<String>>>,
        kind: SymbolMapping,
        context: &ValidatorContext,
    ) -> ValidatorResult {
        let mut result = ValidatorResult::new();
        let Some(mapping) = mapping else {
            return result;
        };

        if let Some(symbol) = mapping
            .iter()
            .find_map(|(symbol, target)| target.is_none().then_some(symbol))
        {
            result.add_error(
                DiagnosticKind::MalformedMapping,
                format!(
                    "The techniqueParameters ID is null for {} {}",
                    kind.label(),
                    symbol
                ),
                context,
            );
            return result;
        }

        for (symbol, parameter_id) in mapping {
            let Some(parameter_id) = parameter_id.as_deref() else {
                continue;
            };
            let symbol_context = context.with(format!("{} {}", kind.label(), symbol));

            result.merge(self.validate_technique_parameters(
                technique,
                parameter_id,
                &symbol_context,
            ));
            if result.has_errors() {
                return result;
            }

            if kind == SymbolMapping::Attribute {
                result.merge(self.validate_attribute_parameter_type(
                    technique,
                    parameter_id,
                    &symbol_context,
                ));
                if result.has_errors() {
                    return result;
                }
            }
        }
        result
    }

    /// Validate the parameter with the given name in the given technique
    pub fn validate_technique_parameters(
        &self,
        technique: &Technique,
        parameter_id: &str,
        current: &ValidatorContext,
    ) -> ValidatorResult {
        let context = current.with(format!("parameters[{}]", parameter_id));
        let mut result = ValidatorResult::new();

        let Some(parameters) = resolve_parameter(technique, parameter_id, &context, &mut result)
        else {
            return result;
        };

        let Some(type_code) = parameters.parameter_type else {
            result.add_error(
                DiagnosticKind::MissingRequiredField,
                "The type is null",
                &context,
            );
            return result;
        };
        let Some(parameter_type) = ParameterType::from_code(type_code) else {
            result.add_error(
                DiagnosticKind::InvalidValue,
                format!("The type {} is not a valid parameter type", type_code),
                &context,
            );
            return result;
        };

        // Semantics are free-form strings and are not checked

        // Only resolved; the node may draw with this technique itself
        if let Some(node_id) = parameters.node.as_deref() {
            resolve_or_report_missing(
                &self.document.nodes,
                node_id,
                &context.with(format!("nodes[{}]", node_id)),
                &mut result,
            );
            if result.has_errors() {
                return result;
            }
        }

        if parameter_type.is_sampler() {
            if let Some(value) = parameters.value.as_ref() {
                result.merge(self.validate_sampler_value(parameter_id, value, &context));
                if result.has_errors() {
                    return result;
                }
            }
        }

        result
    }

    /// Validate a value that must name a texture
    ///
    /// A non-string value is a warning; it is converted to its display string
    /// and the texture lookup is still made.
    pub(crate) fn validate_sampler_value(
        &self,
        parameter_id: &str,
        value: &Value,
        context: &ValidatorContext,
    ) -> ValidatorResult {
        let mut result = ValidatorResult::new();
        if !value.is_string() {
            result.add_warning(
                DiagnosticKind::TypeShapeWarning,
                format!(
                    "The value of techniqueParameters {} is {}, but should be string",
                    parameter_id,
                    json_type_name(value)
                ),
                context,
            );
        }
        let texture_id = texture_id(value);
        result.merge(self.validate_texture(Some(&*texture_id), context));
        result
    }

    /// Attribute parameters feed vertex data and cannot be samplers
    fn validate_attribute_parameter_type(
        &self,
        technique: &Technique,
        parameter_id: &str,
        context: &ValidatorContext,
    ) -> ValidatorResult {
        let mut result = ValidatorResult::new();
        let Some(parameters) = resolve_parameter(technique, parameter_id, context, &mut result)
        else {
            return result;
        };
        let parameter_type = parameters
            .parameter_type
            .and_then(ParameterType::from_code);
        if let Some(parameter_type) = parameter_type.filter(ParameterType::is_sampler) {
            result.add_error(
                DiagnosticKind::InvalidValue,
                format!(
                    "The attribute parameter {} has type {}, which cannot be used for vertex attributes",
                    parameter_id,
                    parameter_type.name()
                ),
                context,
            );
        }
        result
    }

    /// Warn about program attributes the technique does not map
    fn validate_program_attribute_coverage(
        &self,
        technique: &Technique,
        context: &ValidatorContext,
    ) -> ValidatorResult {
        let mut result = ValidatorResult::new();
        let Some(program_id) = technique.program.as_deref() else {
            return result;
        };
        let Some(program) =
            resolve_or_report_missing(&self.document.programs, program_id, context, &mut result)
        else {
            return result;
        };

        let mapped = technique.attributes.as_ref();
        for symbol in program.attributes.iter().flatten() {
            if !mapped.is_some_and(|attributes| attributes.contains_key(symbol)) {
                result.add_warning(
                    DiagnosticKind::InvalidValue,
                    format!(
                        "The attribute {} of program {} is not mapped to a technique parameter",
                        symbol, program_id
                    ),
                    context,
                );
            }
        }
        result
    }
}

/// Resolve a parameter of a technique; an absent parameter map is empty
fn resolve_parameter<'t>(
    technique: &'t Technique,
    parameter_id: &str,
    context: &ValidatorContext,
    result: &mut ValidatorResult,
) -> Option<&'t TechniqueParameters> {
    match technique.parameters.as_ref() {
        Some(parameters) => resolve_or_report_missing(parameters, parameter_id, context, result),
        None => {
            let empty: BTreeMap<String, TechniqueParameters> = BTreeMap::new();
            resolve_or_report_missing(&empty, parameter_id, context, result);
            None
        }
    }
}
