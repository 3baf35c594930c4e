//! Buffer, buffer view and accessor validation
//!
//! Byte ranges are only compared when both sides declare a length; arithmetic
//! on declared sizes is checked so hostile documents cannot overflow it.

use crate::constants::{
    ACCESSOR_COMPONENT_TYPES, ACCESSOR_TYPES, GL_ARRAY_BUFFER, GL_ELEMENT_ARRAY_BUFFER,
    MAX_BYTE_STRIDE, component_count, component_size,
};
use crate::graph::resolve_or_report_missing;

use super::{DiagnosticKind, Validator, ValidatorContext, ValidatorResult, require_id};

/// Buffer types glTF 1.0 defines
const BUFFER_TYPES: [&str; 2] = ["arraybuffer", "text"];

impl Validator<'_> {
    /// Validate the buffer with the given ID
    pub fn validate_buffer(
        &self,
        buffer_id: Option<&str>,
        current: &ValidatorContext,
    ) -> ValidatorResult {
        let mut result = ValidatorResult::new();
        let Some(buffer_id) = require_id(buffer_id, "buffer", current, &mut result) else {
            return result;
        };

        let context = current.with(format!("buffers[{}]", buffer_id));
        let Some(buffer) =
            resolve_or_report_missing(&self.document.buffers, buffer_id, &context, &mut result)
        else {
            return result;
        };

        if buffer.uri.is_none() {
            result.add_error(
                DiagnosticKind::MissingRequiredField,
                "The buffer uri is null",
                &context,
            );
            return result;
        }

        if let Some(buffer_type) = buffer.buffer_type.as_deref() {
            if !BUFFER_TYPES.contains(&buffer_type) {
                result.add_error(
                    DiagnosticKind::InvalidValue,
                    format!(
                        "The buffer type {} is not one of {:?}",
                        buffer_type, BUFFER_TYPES
                    ),
                    &context,
                );
            }
        }
        result
    }

    /// Validate the buffer view with the given ID and its buffer
    pub fn validate_buffer_view(
        &self,
        buffer_view_id: Option<&str>,
        current: &ValidatorContext,
    ) -> ValidatorResult {
        let mut result = ValidatorResult::new();
        let Some(buffer_view_id) = require_id(buffer_view_id, "bufferView", current, &mut result)
        else {
            return result;
        };

        let context = current.with(format!("bufferViews[{}]", buffer_view_id));
        let Some(buffer_view) = resolve_or_report_missing(
            &self.document.buffer_views,
            buffer_view_id,
            &context,
            &mut result,
        ) else {
            return result;
        };

        if let Some(target) = buffer_view.target {
            if target != GL_ARRAY_BUFFER && target != GL_ELEMENT_ARRAY_BUFFER {
                result.add_error(
                    DiagnosticKind::InvalidValue,
                    format!(
                        "The target {} is neither ARRAY_BUFFER ({}) nor ELEMENT_ARRAY_BUFFER ({})",
                        target, GL_ARRAY_BUFFER, GL_ELEMENT_ARRAY_BUFFER
                    ),
                    &context,
                );
                return result;
            }
        }

        result.merge(self.validate_buffer(buffer_view.buffer.as_deref(), &context));
        if result.has_errors() {
            return result;
        }

        // The buffer resolved above, so this lookup cannot miss
        let buffer_length = buffer_view
            .buffer
            .as_deref()
            .and_then(|id| self.document.buffers.get(id))
            .and_then(|buffer| buffer.byte_length);
        if let (Some(buffer_length), Some(view_length)) = (buffer_length, buffer_view.byte_length)
        {
            let offset = buffer_view.byte_offset.unwrap_or(0);
            match offset.checked_add(view_length) {
                Some(end) if end <= buffer_length => {}
                _ => result.add_error(
                    DiagnosticKind::InvalidValue,
                    format!(
                        "The byteOffset {} plus byteLength {} exceeds the buffer byteLength {}",
                        offset, view_length, buffer_length
                    ),
                    &context,
                ),
            }
        }
        result
    }

    /// Validate the accessor with the given ID and its buffer view
    pub fn validate_accessor(
        &self,
        accessor_id: Option<&str>,
        current: &ValidatorContext,
    ) -> ValidatorResult {
        let mut result = ValidatorResult::new();
        let Some(accessor_id) = require_id(accessor_id, "accessor", current, &mut result) else {
            return result;
        };

        let context = current.with(format!("accessors[{}]", accessor_id));
        let Some(accessor) =
            resolve_or_report_missing(&self.document.accessors, accessor_id, &context, &mut result)
        else {
            return result;
        };

        let Some(component_type) = accessor.component_type else {
            result.add_error(
                DiagnosticKind::MissingRequiredField,
                "The componentType is null",
                &context,
            );
            return result;
        };
        if !ACCESSOR_COMPONENT_TYPES.contains(&component_type) {
            result.add_error(
                DiagnosticKind::InvalidValue,
                format!(
                    "The componentType {} is not one of {:?}",
                    component_type, ACCESSOR_COMPONENT_TYPES
                ),
                &context,
            );
            return result;
        }

        let Some(count) = accessor.count else {
            result.add_error(
                DiagnosticKind::MissingRequiredField,
                "The count is null",
                &context,
            );
            return result;
        };

        let Some(accessor_type) = accessor.accessor_type.as_deref() else {
            result.add_error(
                DiagnosticKind::MissingRequiredField,
                "The type is null",
                &context,
            );
            return result;
        };
        let Some(components) = component_count(accessor_type) else {
            result.add_error(
                DiagnosticKind::InvalidValue,
                format!(
                    "The type {} is not one of {:?}",
                    accessor_type, ACCESSOR_TYPES
                ),
                &context,
            );
            return result;
        };

        if let Some(stride) = accessor.byte_stride.filter(|stride| *stride > MAX_BYTE_STRIDE) {
            result.add_error(
                DiagnosticKind::InvalidValue,
                format!(
                    "The byteStride {} is larger than {}",
                    stride, MAX_BYTE_STRIDE
                ),
                &context,
            );
            return result;
        }

        result.merge(self.validate_buffer_view(accessor.buffer_view.as_deref(), &context));
        if result.has_errors() {
            return result;
        }

        for (property, values) in [("min", &accessor.min), ("max", &accessor.max)] {
            if let Some(values) = values {
                if values.len() as u64 != components {
                    result.add_error(
                        DiagnosticKind::InvalidValue,
                        format!(
                            "The {} array has {} elements, but type {} has {} components",
                            property,
                            values.len(),
                            accessor_type,
                            components
                        ),
                        &context,
                    );
                }
            }
        }
        if result.has_errors() || count == 0 {
            return result;
        }

        let view_length = accessor
            .buffer_view
            .as_deref()
            .and_then(|id| self.document.buffer_views.get(id))
            .and_then(|view| view.byte_length);
        let Some(view_length) = view_length else {
            return result;
        };

        // The component type was checked against the enumeration above
        let element_size = component_size(component_type).unwrap_or(1) * components;
        let stride = match accessor.byte_stride {
            Some(stride) if stride > 0 => u64::from(stride),
            _ => element_size,
        };
        let offset = accessor.byte_offset.unwrap_or(0);
        let required = stride
            .checked_mul(count - 1)
            .and_then(|span| span.checked_add(element_size))
            .and_then(|span| span.checked_add(offset));
        match required {
            Some(required) if required <= view_length => {}
            _ => result.add_error(
                DiagnosticKind::InvalidValue,
                format!(
                    "The accessor needs {} bytes starting at byteOffset {}, but the buffer view has byteLength {}",
                    required.map_or_else(|| "more than u64::MAX".to_string(), |r| r.to_string()),
                    offset,
                    view_length
                ),
                &context,
            ),
        }
        result
    }
}
