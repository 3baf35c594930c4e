//! Dangling references and the context paths they are reported at

use gltf_validator::DiagnosticKind;
use serde_json::json;

use crate::common::{box_json, contexts, document_from};

#[test]
fn test_missing_texture_named_by_material_value() {
    let mut json = box_json();
    json["textures"].as_object_mut().unwrap().remove("tex");

    let result = document_from(json).validate();
    let mesh_path = "meshes[boxMesh].primitives[0].materials[mat].value diffuse.textures[tex]";
    assert_eq!(
        contexts(&result),
        vec![
            "materials[mat].value diffuse.textures[tex]".to_string(),
            mesh_path.to_string(),
            format!("animations[spin].channels[0].nodes[boxNode].{}", mesh_path),
            format!("nodes[boxNode].{}", mesh_path),
        ]
    );
}

#[test]
fn test_missing_buffer_view_below_accessors() {
    let mut json = box_json();
    json["bufferViews"].as_object_mut().unwrap().remove("animView");

    let result = document_from(json).validate();
    // Animation parameters are checked in key order and stop at the first error
    assert_eq!(
        contexts(&result),
        vec![
            "accessors[rotations].bufferViews[animView]",
            "accessors[times].bufferViews[animView]",
            "animations[spin].parameter TIME.accessors[times].bufferViews[animView]",
        ]
    );
}

#[test]
fn test_missing_attribute_accessor_on_every_path() {
    let mut json = box_json();
    json["meshes"]["boxMesh"]["primitives"][0]["attributes"]["TEXCOORD_0"] = json!("uvs");

    let result = document_from(json).validate();
    let suffix = "meshes[boxMesh].primitives[0].attribute TEXCOORD_0.accessors[uvs]";
    assert_eq!(
        contexts(&result),
        vec![
            suffix.to_string(),
            format!("animations[spin].channels[0].nodes[boxNode].{}", suffix),
            format!("nodes[boxNode].{}", suffix),
        ]
    );
}

#[test]
fn test_byte_range_overrun_reported_at_view() {
    let mut json = box_json();
    json["bufferViews"]["attributesView"]["byteLength"] = json!(800);

    let result = document_from(json).validate();
    assert_eq!(result.diagnostics()[0].context, "bufferViews[attributesView]");
    assert!(result.diagnostics()[0].message.contains("exceeds"));
    assert!(
        result
            .diagnostics()
            .iter()
            .all(|d| d.kind == DiagnosticKind::InvalidValue
                && d.context.ends_with("bufferViews[attributesView]"))
    );
}

#[test]
fn test_missing_child_node() {
    let mut json = box_json();
    json["nodes"]["root"]["children"] = json!(["boxNode", "ghost"]);

    let result = document_from(json).validate();
    assert_eq!(
        contexts(&result),
        vec!["nodes[root].nodes[ghost]", "scenes[main].nodes[root].nodes[ghost]"]
    );
}

#[test]
fn test_node_cycle_reported_for_members_only() {
    let mut json = box_json();
    json["nodes"]["light"]["children"] = json!(["root"]);

    let result = document_from(json).validate();
    let cycles: Vec<(&str, &str)> = result
        .of_kind(DiagnosticKind::CircularReference)
        .map(|d| (d.context.as_str(), d.message.as_str()))
        .collect();
    assert!(cycles.contains(&(
        "nodes[light]",
        "Circular node hierarchy: light → root → light"
    )));
    assert!(cycles.contains(&(
        "nodes[root]",
        "Circular node hierarchy: root → light → root"
    )));
    assert!(cycles.iter().all(|(context, _)| !context.ends_with("nodes[boxNode]")));
    assert!(cycles.iter().all(|(context, _)| !context.ends_with("nodes[cameraNode]")));
}

#[test]
fn test_camera_problem_reported_directly_and_through_node() {
    let mut json = box_json();
    json["cameras"]["cam"]["perspective"]
        .as_object_mut()
        .unwrap()
        .remove("zfar");

    let result = document_from(json).validate();
    assert_eq!(
        contexts(&result),
        vec!["cameras[cam]", "nodes[cameraNode].cameras[cam]"]
    );
    assert_eq!(result.diagnostics()[0].message, "The perspective zfar is null");
}

#[test]
fn test_animation_sampler_names_unknown_parameter() {
    let mut json = box_json();
    json["animations"]["spin"]["samplers"]["s"]["output"] = json!("scale");

    let result = document_from(json).validate();
    assert_eq!(contexts(&result), vec!["animations[spin].samplers[s].output"]);
    assert!(result.diagnostics()[0].message.contains("animation parameter"));
}

#[test]
fn test_animation_target_names_missing_node() {
    let mut json = box_json();
    json["animations"]["spin"]["channels"][0]["target"]["id"] = json!("ghost");

    let result = document_from(json).validate();
    assert_eq!(contexts(&result), vec!["animations[spin].channels[0].nodes[ghost]"]);
}

#[test]
fn test_scene_names_missing_node() {
    let mut json = box_json();
    json["scenes"]["main"]["nodes"] = json!(["root", "phantom"]);

    let result = document_from(json).validate();
    assert_eq!(contexts(&result), vec!["scenes[main].nodes[phantom]"]);
    assert_eq!(result.diagnostics()[0].kind, DiagnosticKind::MissingReference);
}
