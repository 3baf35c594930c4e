//! Image, sampler and texture validation

use crate::constants::{GL_TEXTURE_2D, MAG_FILTERS, MIN_FILTERS, WRAP_MODES};
use crate::graph::resolve_or_report_missing;

use super::{DiagnosticKind, Validator, ValidatorContext, ValidatorResult, require_id};

impl Validator<'_> {
    /// Validate the image with the given ID
    pub fn validate_image(
        &self,
        image_id: Option<&str>,
        current: &ValidatorContext,
    ) -> ValidatorResult {
        let mut result = ValidatorResult::new();
        let Some(image_id) = require_id(image_id, "image", current, &mut result) else {
            return result;
        };

        let context = current.with(format!("images[{}]", image_id));
        let Some(image) =
            resolve_or_report_missing(&self.document.images, image_id, &context, &mut result)
        else {
            return result;
        };

        if image.uri.is_none() {
            result.add_error(
                DiagnosticKind::MissingRequiredField,
                "The image uri is null",
                &context,
            );
        }
        result
    }

    /// Validate the sampler with the given ID
    ///
    /// Every property is optional, but present filters and wrap modes must be
    /// valid GL enums.
    pub fn validate_sampler(
        &self,
        sampler_id: Option<&str>,
        current: &ValidatorContext,
    ) -> ValidatorResult {
        let mut result = ValidatorResult::new();
        let Some(sampler_id) = require_id(sampler_id, "sampler", current, &mut result) else {
            return result;
        };

        let context = current.with(format!("samplers[{}]", sampler_id));
        let Some(sampler) =
            resolve_or_report_missing(&self.document.samplers, sampler_id, &context, &mut result)
        else {
            return result;
        };

        let checks: [(&str, Option<u32>, &[u32]); 4] = [
            ("magFilter", sampler.mag_filter, &MAG_FILTERS),
            ("minFilter", sampler.min_filter, &MIN_FILTERS),
            ("wrapS", sampler.wrap_s, &WRAP_MODES),
            ("wrapT", sampler.wrap_t, &WRAP_MODES),
        ];
        for (property, value, allowed) in checks {
            if let Some(value) = value.filter(|value| !allowed.contains(value)) {
                result.add_error(
                    DiagnosticKind::InvalidValue,
                    format!(
                        "The {} {} is not one of {:?}",
                        property, value, allowed
                    ),
                    &context,
                );
            }
        }
        result
    }

    /// Validate the texture with the given ID, its image and its sampler
    pub fn validate_texture(
        &self,
        texture_id: Option<&str>,
        current: &ValidatorContext,
    ) -> ValidatorResult {
        let mut result = ValidatorResult::new();
        let Some(texture_id) = require_id(texture_id, "texture", current, &mut result) else {
            return result;
        };

        let context = current.with(format!("textures[{}]", texture_id));
        let Some(texture) =
            resolve_or_report_missing(&self.document.textures, texture_id, &context, &mut result)
        else {
            return result;
        };

        result.merge(self.validate_image(texture.source.as_deref(), &context));
        if result.has_errors() {
            return result;
        }

        result.merge(self.validate_sampler(texture.sampler.as_deref(), &context));
        if result.has_errors() {
            return result;
        }

        if let Some(target) = texture.target.filter(|target| *target != GL_TEXTURE_2D) {
            result.add_warning(
                DiagnosticKind::InvalidValue,
                format!(
                    "The texture target {} is not TEXTURE_2D ({})",
                    target, GL_TEXTURE_2D
                ),
                &context,
            );
        }
        result
    }
}
