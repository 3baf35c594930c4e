//! Camera, node and scene validation

use std::collections::HashSet;

use crate::graph::resolve_or_report_missing;
use crate::model::Node;

use super::{DiagnosticKind, Validator, ValidatorContext, ValidatorResult, require_id};

impl Validator<'_> {
    /// Validate the camera with the given ID
    pub fn validate_camera(
        &self,
        camera_id: Option<&str>,
        current: &ValidatorContext,
    ) -> ValidatorResult {
        let mut result = ValidatorResult::new();
        let Some(camera_id) = require_id(camera_id, "camera", current, &mut result) else {
            return result;
        };

        let context = current.with(format!("cameras[{}]", camera_id));
        let Some(camera) =
            resolve_or_report_missing(&self.document.cameras, camera_id, &context, &mut result)
        else {
            return result;
        };

        let (camera_type, projection) = match camera.camera_type.as_deref() {
            None => {
                result.add_error(
                    DiagnosticKind::MissingRequiredField,
                    "The camera type is null",
                    &context,
                );
                return result;
            }
            Some("perspective") => (
                "perspective",
                camera.perspective.as_ref().map(|p| {
                    (vec![("yfov", p.yfov), ("zfar", p.zfar), ("znear", p.znear)], p.znear, p.zfar)
                }),
            ),
            Some("orthographic") => (
                "orthographic",
                camera.orthographic.as_ref().map(|o| {
                    (
                        vec![
                            ("xmag", o.xmag),
                            ("ymag", o.ymag),
                            ("zfar", o.zfar),
                            ("znear", o.znear),
                        ],
                        o.znear,
                        o.zfar,
                    )
                }),
            ),
            Some(other) => {
                result.add_error(
                    DiagnosticKind::InvalidValue,
                    format!(
                        "The camera type {} is neither perspective nor orthographic",
                        other
                    ),
                    &context,
                );
                return result;
            }
        };

        let Some((required, znear, zfar)) = projection else {
            result.add_error(
                DiagnosticKind::MissingRequiredField,
                format!("The camera has type {}, but no {} object", camera_type, camera_type),
                &context,
            );
            return result;
        };
        for (property, value) in required {
            if value.is_none() {
                result.add_error(
                    DiagnosticKind::MissingRequiredField,
                    format!("The {} {} is null", camera_type, property),
                    &context,
                );
            }
        }
        if result.has_errors() {
            return result;
        }

        if let (Some(znear), Some(zfar)) = (znear, zfar) {
            if zfar <= znear {
                result.add_error(
                    DiagnosticKind::InvalidValue,
                    format!("The zfar {} is not greater than znear {}", zfar, znear),
                    &context,
                );
            }
        }
        result
    }

    /// Validate the node with the given ID
    ///
    /// Children are only resolved, not validated; the top-level pass visits
    /// every node on its own. A node that can reach itself through its
    /// children is reported with the cycle path.
    pub fn validate_node(
        &self,
        node_id: Option<&str>,
        current: &ValidatorContext,
    ) -> ValidatorResult {
        let mut result = ValidatorResult::new();
        let Some(node_id) = require_id(node_id, "node", current, &mut result) else {
            return result;
        };

        let context = current.with(format!("nodes[{}]", node_id));
        let Some(node) =
            resolve_or_report_missing(&self.document.nodes, node_id, &context, &mut result)
        else {
            return result;
        };

        result.merge(validate_transform(node, &context));
        if result.has_errors() {
            return result;
        }

        if let Some(camera_id) = node.camera.as_deref() {
            result.merge(self.validate_camera(Some(camera_id), &context));
            if result.has_errors() {
                return result;
            }
        }

        for child_id in node.child_ids() {
            resolve_or_report_missing(
                &self.document.nodes,
                child_id,
                &context.with(format!("nodes[{}]", child_id)),
                &mut result,
            );
        }
        if result.has_errors() {
            return result;
        }

        for mesh_id in node.meshes.iter().flatten() {
            result.merge(self.validate_mesh(Some(mesh_id), &context));
            if result.has_errors() {
                return result;
            }
        }

        if let Some(cycle) = self.find_cycle_through(node_id) {
            result.add_error(
                DiagnosticKind::CircularReference,
                format!("Circular node hierarchy: {}", cycle.join(" → ")),
                &context,
            );
        }
        result
    }

    /// Validate the scene with the given ID and its root nodes
    pub fn validate_scene(
        &self,
        scene_id: Option<&str>,
        current: &ValidatorContext,
    ) -> ValidatorResult {
        let mut result = ValidatorResult::new();
        let Some(scene_id) = require_id(scene_id, "scene", current, &mut result) else {
            return result;
        };

        let context = current.with(format!("scenes[{}]", scene_id));
        let Some(scene) =
            resolve_or_report_missing(&self.document.scenes, scene_id, &context, &mut result)
        else {
            return result;
        };

        for node_id in scene.nodes.iter().flatten() {
            result.merge(self.validate_node(Some(node_id), &context));
            if result.has_errors() {
                return result;
            }
        }
        result
    }

    /// Find a path of child links leading from `start` back to `start`
    ///
    /// Returns the node IDs along the cycle, starting and ending with `start`.
    /// Children are followed in declaration order.
    fn find_cycle_through(&self, start: &str) -> Option<Vec<String>> {
        let candidates = self.cycle_candidates();
        let node = self.document.nodes.get(start)?;
        if !candidates.contains(start) {
            return None;
        }

        // Nodes explored without reaching `start` can never reach it
        let mut explored: HashSet<&str> = HashSet::from([start]);
        let mut path = vec![start];
        let mut pending = vec![node.child_ids().iter()];

        while let Some(children) = pending.last_mut() {
            let Some(child_id) = children.next() else {
                pending.pop();
                path.pop();
                continue;
            };
            let child_id = child_id.as_str();
            if child_id == start {
                path.push(child_id);
                return Some(path.into_iter().map(str::to_string).collect());
            }
            if !candidates.contains(child_id) || !explored.insert(child_id) {
                continue;
            }
            if let Some(child) = self.document.nodes.get(child_id) {
                path.push(child_id);
                pending.push(child.child_ids().iter());
            }
        }
        None
    }
}

/// Check the lengths of the local transform arrays
fn validate_transform(node: &Node, context: &ValidatorContext) -> ValidatorResult {
    let mut result = ValidatorResult::new();
    let arrays = [
        ("matrix", &node.matrix, 16),
        ("rotation", &node.rotation, 4),
        ("scale", &node.scale, 3),
        ("translation", &node.translation, 3),
    ];
    for (property, values, expected) in arrays {
        if let Some(values) = values.as_ref().filter(|values| values.len() != expected) {
            result.add_error(
                DiagnosticKind::InvalidValue,
                format!(
                    "The {} has {} elements, but should have {}",
                    property,
                    values.len(),
                    expected
                ),
                context,
            );
        }
    }
    if result.has_errors() {
        return result;
    }

    let has_trs = node.rotation.is_some() || node.scale.is_some() || node.translation.is_some();
    if node.matrix.is_some() && has_trs {
        result.add_warning(
            DiagnosticKind::InvalidValue,
            "The node defines both a matrix and translation/rotation/scale; the matrix takes precedence",
            context,
        );
    }
    result
}
