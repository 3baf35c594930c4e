//! Techniques, programs and materials loaded from JSON

use gltf_validator::{DiagnosticKind, EntityKind, Validator, ValidatorContext};
use serde_json::json;

use crate::common::{box_json, contexts, document_from};

#[test]
fn test_technique_stops_at_first_failing_mapping() {
    let mut json = box_json();
    json["techniques"]["tech"]["uniforms"]["u_extra"] = json!("nope");
    json["techniques"]["tech"]["program"] = json!("gone");
    let document = document_from(json);

    let result =
        Validator::new(&document).validate_technique(Some("tech"), &ValidatorContext::root());
    assert_eq!(
        contexts(&result),
        vec!["techniques[tech].uniform u_extra.parameters[nope]"]
    );
}

#[test]
fn test_swapped_shaders_in_program() {
    let mut json = box_json();
    json["programs"]["prog"]["vertexShader"] = json!("fs");
    json["programs"]["prog"]["fragmentShader"] = json!("vs");
    let document = document_from(json);

    let result = Validator::new(&document).validate_entity(
        EntityKind::Program,
        "prog",
        &ValidatorContext::root(),
    );
    assert_eq!(contexts(&result), vec!["programs[prog].vertexShader.shaders[fs]"]);
    assert_eq!(
        result.diagnostics()[0].message,
        "The shader is a FRAGMENT_SHADER, but a VERTEX_SHADER is required here"
    );

    let result = document.validate();
    assert!(result.errors().any(|d| d.context
        == "meshes[boxMesh].primitives[0].materials[mat].techniques[tech].programs[prog].vertexShader.shaders[fs]"));
}

#[test]
fn test_attribute_mapped_to_sampler() {
    let mut json = box_json();
    json["techniques"]["tech"]["attributes"]["a_texcoord0"] = json!("diffuse");
    let document = document_from(json);

    let result =
        Validator::new(&document).validate_technique(Some("tech"), &ValidatorContext::root());
    assert_eq!(contexts(&result), vec!["techniques[tech].attribute a_texcoord0"]);
    assert!(result.diagnostics()[0].message.contains("SAMPLER_2D"));
}

#[test]
fn test_unmapped_program_attribute_warns() {
    let mut json = box_json();
    json["programs"]["prog"]["attributes"] =
        json!(["a_position", "a_normal", "a_texcoord0", "a_joint"]);
    let document = document_from(json);

    let result =
        Validator::new(&document).validate_technique(Some("tech"), &ValidatorContext::root());
    assert!(!result.has_errors());
    assert_eq!(result.warning_count(), 1);
    assert_eq!(result.diagnostics()[0].context, "techniques[tech]");
    assert!(result.diagnostics()[0].message.contains("a_joint"));
}

#[test]
fn test_technique_parameter_value_names_texture() {
    let mut json = box_json();
    json["techniques"]["tech"]["parameters"]["diffuse"]["value"] = json!("tex");
    assert!(document_from(json.clone()).validate().is_empty());

    json["techniques"]["tech"]["parameters"]["diffuse"]["value"] = json!("nope");
    let document = document_from(json);
    let result =
        Validator::new(&document).validate_technique(Some("tech"), &ValidatorContext::root());
    assert_eq!(
        contexts(&result),
        vec!["techniques[tech].uniform u_diffuse.parameters[diffuse].textures[nope]"]
    );
}

#[test]
fn test_non_string_material_sampler_value() {
    let mut json = box_json();
    json["materials"]["mat"]["values"]["diffuse"] = json!(7);
    let document = document_from(json);

    let result =
        Validator::new(&document).validate_material(Some("mat"), &ValidatorContext::root());
    let diagnostics = result.diagnostics();
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0].kind, DiagnosticKind::TypeShapeWarning);
    assert_eq!(diagnostics[0].context, "materials[mat].value diffuse");
    assert!(diagnostics[0].message.contains("number"));
    assert_eq!(diagnostics[1].kind, DiagnosticKind::MissingReference);
    assert_eq!(diagnostics[1].context, "materials[mat].value diffuse.textures[7]");
}

#[test]
fn test_material_without_technique() {
    let mut json = box_json();
    json["materials"]["mat"]
        .as_object_mut()
        .unwrap()
        .remove("technique");
    let document = document_from(json);

    let result = document.validate();
    let unsupported: Vec<&str> = result
        .of_kind(DiagnosticKind::UnsupportedDefault)
        .map(|d| d.context.as_str())
        .collect();
    assert_eq!(
        unsupported,
        vec![
            "materials[mat]",
            "meshes[boxMesh].primitives[0].materials[mat]",
            "animations[spin].channels[0].nodes[boxNode].meshes[boxMesh].primitives[0].materials[mat]",
            "nodes[boxNode].meshes[boxMesh].primitives[0].materials[mat]",
        ]
    );
}

#[test]
fn test_material_value_without_parameter_warns() {
    let mut json = box_json();
    json["materials"]["mat"]["values"]["emission"] = json!([1.0, 0.0, 0.0, 1.0]);
    let document = document_from(json);

    let result =
        Validator::new(&document).validate_material(Some("mat"), &ValidatorContext::root());
    assert!(!result.has_errors());
    assert_eq!(contexts(&result), vec!["materials[mat]"]);
    assert!(result.diagnostics()[0].message.contains("emission"));
}

#[test]
fn test_parameter_node_drawing_with_same_technique() {
    // tech -> light parameter -> boxNode -> boxMesh -> mat -> tech
    let mut json = box_json();
    json["techniques"]["tech"]["parameters"]["light"]["node"] = json!("boxNode");
    let document = document_from(json);

    let result = document.validate();
    assert!(result.is_empty(), "{}", result);

    let result =
        Validator::new(&document).validate_technique(Some("tech"), &ValidatorContext::root());
    assert!(result.is_empty());
}

#[test]
fn test_missing_parameter_node() {
    let mut json = box_json();
    json["techniques"]["tech"]["parameters"]["light"]["node"] = json!("ghost");
    let document = document_from(json);

    let result =
        Validator::new(&document).validate_technique(Some("tech"), &ValidatorContext::root());
    assert_eq!(
        contexts(&result),
        vec!["techniques[tech].uniform u_light.parameters[light].nodes[ghost]"]
    );
}
