//! Animation validation

use std::collections::BTreeMap;

use crate::graph::{resolve_named_or_report_missing, resolve_or_report_missing};
use crate::model::{ANIMATION_TARGET_PATHS, Animation, AnimationChannel, AnimationSampler};

use super::{DiagnosticKind, Validator, ValidatorContext, ValidatorResult, require_id};

/// Interpolation modes glTF 1.0 defines
const INTERPOLATIONS: [&str; 1] = ["LINEAR"];

impl Validator<'_> {
    /// Validate the animation with the given ID
    ///
    /// Parameters are checked first, then samplers (which name parameters),
    /// then channels (which name samplers and nodes).
    pub fn validate_animation(
        &self,
        animation_id: Option<&str>,
        current: &ValidatorContext,
    ) -> ValidatorResult {
        let mut result = ValidatorResult::new();
        let Some(animation_id) = require_id(animation_id, "animation", current, &mut result)
        else {
            return result;
        };

        let context = current.with(format!("animations[{}]", animation_id));
        let Some(animation) = resolve_or_report_missing(
            &self.document.animations,
            animation_id,
            &context,
            &mut result,
        ) else {
            return result;
        };

        result.merge(self.validate_animation_parameters(animation, &context));
        if result.has_errors() {
            return result;
        }

        for (sampler_id, sampler) in animation.samplers.iter().flatten() {
            let sampler_context = context.with(format!("samplers[{}]", sampler_id));
            result.merge(validate_animation_sampler(
                animation,
                sampler,
                &sampler_context,
            ));
            if result.has_errors() {
                return result;
            }
        }

        for (index, channel) in animation.channels.iter().flatten().enumerate() {
            let channel_context = context.with(format!("channels[{}]", index));
            result.merge(self.validate_animation_channel(animation, channel, &channel_context));
            if result.has_errors() {
                return result;
            }
        }
        result
    }

    fn validate_animation_parameters(
        &self,
        animation: &Animation,
        context: &ValidatorContext,
    ) -> ValidatorResult {
        let mut result = ValidatorResult::new();
        let Some(parameters) = animation.parameters.as_ref() else {
            return result;
        };

        if let Some(parameter) = parameters
            .iter()
            .find_map(|(parameter, target)| target.is_none().then_some(parameter))
        {
            result.add_error(
                DiagnosticKind::MalformedMapping,
                format!("The accessor ID is null for parameter {}", parameter),
                context,
            );
            return result;
        }

        for (parameter, accessor_id) in parameters {
            result.merge(self.validate_accessor(
                accessor_id.as_deref(),
                &context.with(format!("parameter {}", parameter)),
            ));
            if result.has_errors() {
                return result;
            }
        }
        result
    }

    fn validate_animation_channel(
        &self,
        animation: &Animation,
        channel: &AnimationChannel,
        context: &ValidatorContext,
    ) -> ValidatorResult {
        let mut result = ValidatorResult::new();

        let Some(sampler_id) = require_id(
            channel.sampler.as_deref(),
            "animation sampler",
            context,
            &mut result,
        ) else {
            return result;
        };
        let empty = BTreeMap::new();
        let samplers = animation.samplers.as_ref().unwrap_or(&empty);
        if resolve_or_report_missing(samplers, sampler_id, context, &mut result).is_none() {
            return result;
        }

        let Some(target) = channel.target.as_ref() else {
            result.add_error(
                DiagnosticKind::MissingRequiredField,
                "The channel target is null",
                context,
            );
            return result;
        };

        let Some(path) = target.path.as_deref() else {
            result.add_error(
                DiagnosticKind::MissingRequiredField,
                "The channel target path is null",
                context,
            );
            return result;
        };
        if !ANIMATION_TARGET_PATHS.contains(&path) {
            result.add_error(
                DiagnosticKind::InvalidValue,
                format!(
                    "The channel target path {} is not one of {:?}",
                    path, ANIMATION_TARGET_PATHS
                ),
                context,
            );
            return result;
        }

        result.merge(self.validate_node(target.id.as_deref(), context));
        result
    }
}

/// Check that a sampler names parameters of its animation
fn validate_animation_sampler(
    animation: &Animation,
    sampler: &AnimationSampler,
    context: &ValidatorContext,
) -> ValidatorResult {
    let mut result = ValidatorResult::new();
    let empty = BTreeMap::new();
    let parameters = animation.parameters.as_ref().unwrap_or(&empty);

    for (slot, parameter) in [("input", &sampler.input), ("output", &sampler.output)] {
        let Some(parameter) = parameter.as_deref() else {
            result.add_error(
                DiagnosticKind::MissingRequiredField,
                format!("The sampler {} is null", slot),
                context,
            );
            return result;
        };
        if resolve_named_or_report_missing(
            parameters,
            parameter,
            "animation parameter",
            &context.with(slot),
            &mut result,
        )
        .is_none()
        {
            return result;
        }
    }

    if let Some(interpolation) = sampler.interpolation.as_deref() {
        if !INTERPOLATIONS.contains(&interpolation) {
            result.add_error(
                DiagnosticKind::InvalidValue,
                format!(
                    "The interpolation {} is not one of {:?}",
                    interpolation, INTERPOLATIONS
                ),
                context,
            );
        }
    }
    result
}
