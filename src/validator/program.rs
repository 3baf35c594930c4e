//! Program and shader validation

use crate::constants::{GL_FRAGMENT_SHADER, GL_VERTEX_SHADER};
use crate::graph::resolve_or_report_missing;

use super::{DiagnosticKind, Validator, ValidatorContext, ValidatorResult, require_id};

fn shader_type_name(shader_type: u32) -> &'static str {
    match shader_type {
        GL_VERTEX_SHADER => "VERTEX_SHADER",
        GL_FRAGMENT_SHADER => "FRAGMENT_SHADER",
        _ => "unknown",
    }
}

impl Validator<'_> {
    /// Validate the program with the given ID
    ///
    /// Both shaders are required, and each must have the stage implied by the
    /// slot it is linked into.
    pub fn validate_program(
        &self,
        program_id: Option<&str>,
        current: &ValidatorContext,
    ) -> ValidatorResult {
        let mut result = ValidatorResult::new();
        let Some(program_id) = require_id(program_id, "program", current, &mut result) else {
            return result;
        };

        let context = current.with(format!("programs[{}]", program_id));
        let Some(program) =
            resolve_or_report_missing(&self.document.programs, program_id, &context, &mut result)
        else {
            return result;
        };

        result.merge(self.validate_shader_of_type(
            program.vertex_shader.as_deref(),
            Some(GL_VERTEX_SHADER),
            &context.with("vertexShader"),
        ));
        if result.has_errors() {
            return result;
        }

        result.merge(self.validate_shader_of_type(
            program.fragment_shader.as_deref(),
            Some(GL_FRAGMENT_SHADER),
            &context.with("fragmentShader"),
        ));
        if result.has_errors() {
            return result;
        }

        let attributes = program.attributes.as_deref().unwrap_or(&[]);
        for (index, symbol) in attributes.iter().enumerate() {
            if attributes[..index].contains(symbol) {
                result.add_warning(
                    DiagnosticKind::InvalidValue,
                    format!("The attribute {} is listed more than once", symbol),
                    &context,
                );
            }
        }

        result
    }

    /// Validate the shader with the given ID
    pub fn validate_shader(
        &self,
        shader_id: Option<&str>,
        current: &ValidatorContext,
    ) -> ValidatorResult {
        self.validate_shader_of_type(shader_id, None, current)
    }

    fn validate_shader_of_type(
        &self,
        shader_id: Option<&str>,
        expected_type: Option<u32>,
        current: &ValidatorContext,
    ) -> ValidatorResult {
        let mut result = ValidatorResult::new();
        let Some(shader_id) = require_id(shader_id, "shader", current, &mut result) else {
            return result;
        };

        let context = current.with(format!("shaders[{}]", shader_id));
        let Some(shader) =
            resolve_or_report_missing(&self.document.shaders, shader_id, &context, &mut result)
        else {
            return result;
        };

        let Some(shader_type) = shader.shader_type else {
            result.add_error(
                DiagnosticKind::MissingRequiredField,
                "The shader type is null",
                &context,
            );
            return result;
        };
        if shader_type != GL_VERTEX_SHADER && shader_type != GL_FRAGMENT_SHADER {
            result.add_error(
                DiagnosticKind::InvalidValue,
                format!(
                    "The shader type {} is neither VERTEX_SHADER ({}) nor FRAGMENT_SHADER ({})",
                    shader_type, GL_VERTEX_SHADER, GL_FRAGMENT_SHADER
                ),
                &context,
            );
            return result;
        }
        if let Some(expected_type) = expected_type.filter(|expected| *expected != shader_type) {
            result.add_error(
                DiagnosticKind::InvalidValue,
                format!(
                    "The shader is a {}, but a {} is required here",
                    shader_type_name(shader_type),
                    shader_type_name(expected_type)
                ),
                &context,
            );
            return result;
        }

        if shader.uri.is_none() {
            result.add_error(
                DiagnosticKind::MissingRequiredField,
                "The shader uri is null",
                &context,
            );
        }
        result
    }
}
