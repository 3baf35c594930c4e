//! Whole-document validation, loading and configured checks

use std::io::Cursor;
use std::sync::Arc;

use gltf_validator::check::DocumentCheck;
use gltf_validator::checks::{PayloadCheck, UsageCheck};
use gltf_validator::payload::PayloadKind;
use gltf_validator::{
    Document, DiagnosticKind, EntityKind, Error, Result, ValidatorConfig, ValidatorResult,
};
use serde_json::json;

use crate::common::{BOX_GLTF, box_document, box_json, box_payloads, contexts, document_from};

#[test]
fn test_box_fixture_is_valid() {
    let result = box_document().validate();
    assert!(result.is_empty(), "{}", result);
    assert_eq!(result.to_string(), "No errors or warnings");
}

#[test]
fn test_load_from_reader() {
    let document = Document::from_reader(Cursor::new(BOX_GLTF.as_bytes())).unwrap();
    assert_eq!(document, box_document());
    assert_eq!(document.scene.as_deref(), Some("main"));
    assert_eq!(document.collection_len(EntityKind::Accessor), 6);
}

#[test]
fn test_malformed_json_is_a_load_error() {
    let err = Document::from_json_str(r#"{"techniques": {"#).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
    assert!(err.to_string().starts_with("[E2001]"));
}

#[test]
fn test_wrongly_typed_field_is_a_load_error() {
    let mut json = box_json();
    json["accessors"]["indices"]["count"] = json!("36");
    let err = serde_json::from_value::<Document>(json)
        .map_err(Error::from)
        .unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn test_one_root_cause_reported_along_each_path() {
    let mut json = box_json();
    json["programs"].as_object_mut().unwrap().remove("prog");

    let result = document_from(json).validate();
    assert_eq!(result.error_count(), 5);
    assert!(
        result
            .diagnostics()
            .iter()
            .all(|d| d.kind == DiagnosticKind::MissingReference)
    );
    let mesh_path = "meshes[boxMesh].primitives[0].materials[mat].techniques[tech].programs[prog]";
    assert_eq!(
        contexts(&result),
        vec![
            "techniques[tech].programs[prog]".to_string(),
            "materials[mat].techniques[tech].programs[prog]".to_string(),
            mesh_path.to_string(),
            format!("animations[spin].channels[0].nodes[boxNode].{}", mesh_path),
            format!("nodes[boxNode].{}", mesh_path),
        ]
    );
}

#[test]
fn test_null_mapping_entry_from_json() {
    let mut json = box_json();
    json["techniques"]["tech"]["uniforms"]["u_shininess"] = json!(null);

    let result = document_from(json).validate();
    assert_eq!(result.error_count(), 5);
    assert_eq!(
        result.of_kind(DiagnosticKind::MalformedMapping).count(),
        5
    );
    assert_eq!(result.diagnostics()[0].context, "techniques[tech]");
    assert!(result.diagnostics()[0].message.contains("uniform u_shininess"));
}

#[test]
fn test_missing_default_scene() {
    let mut json = box_json();
    json["scene"] = json!("other");

    let result = document_from(json).validate();
    assert_eq!(contexts(&result), vec!["scene"]);
}

#[test]
fn test_independent_roots_all_reported() {
    let mut json = box_json();
    json["samplers"]["smp"]["magFilter"] = json!(1);
    json["shaders"]["vs"]["uri"] = json!(null);

    let result = document_from(json).validate();
    let roots: Vec<&str> = result
        .errors()
        .map(|d| d.context.split('.').next().unwrap_or_default())
        .collect();
    assert!(roots.contains(&"shaders[vs]"));
    assert!(roots.contains(&"samplers[smp]"));
    assert!(roots.contains(&"textures[tex]"));
}

#[test]
fn test_config_selects_root_collections() {
    let mut json = box_json();
    json["programs"].as_object_mut().unwrap().remove("prog");
    let document = document_from(json);

    let config = ValidatorConfig::new().with_kinds([EntityKind::Mesh]);
    let result = document.validate_with_config(&config).unwrap();
    assert_eq!(
        contexts(&result),
        vec!["meshes[boxMesh].primitives[0].materials[mat].techniques[tech].programs[prog]"]
    );

    let config = ValidatorConfig::new()
        .without_kind(EntityKind::Technique)
        .without_kind(EntityKind::Material)
        .without_kind(EntityKind::Mesh);
    assert!(document.validate_with_config(&config).unwrap().is_empty());
}

#[test]
fn test_payload_and_usage_checks_pass_on_fixture() {
    let config = ValidatorConfig::new()
        .with_check(Arc::new(PayloadCheck::new(Arc::new(box_payloads()))))
        .with_check(Arc::new(UsageCheck));
    let result = box_document().validate_with_config(&config).unwrap();
    assert!(result.is_empty(), "{}", result);
}

#[test]
fn test_missing_payload_is_reported_after_graph_checks() {
    let mut json = box_json();
    json["samplers"]["smp"]["wrapS"] = json!(0);
    let document = document_from(json);

    let mut store = box_payloads();
    store.remove(PayloadKind::Shader, "fs");
    let config =
        ValidatorConfig::new().with_check(Arc::new(PayloadCheck::new(Arc::new(store))));

    let result = document.validate_with_config(&config).unwrap();
    let last = result.diagnostics().last().unwrap();
    assert_eq!(last.context, "shaders[fs]");
    assert_eq!(last.kind, DiagnosticKind::MissingReference);
    assert!(result.error_count() > 1);
}

#[test]
fn test_unreferenced_image_warns() {
    let mut json = box_json();
    json["images"]["spare"] = json!({ "uri": "spare.png" });
    let document = document_from(json);

    let config = ValidatorConfig::new().with_check(Arc::new(UsageCheck));
    let result = document.validate_with_config(&config).unwrap();
    assert!(!result.has_errors());
    assert_eq!(contexts(&result), vec!["images[spare]"]);
}

struct RequireAsset;

impl DocumentCheck for RequireAsset {
    fn name(&self) -> &'static str {
        "require-asset"
    }

    fn validate(&self, document: &Document) -> Result<ValidatorResult> {
        match document.asset {
            Some(_) => Ok(ValidatorResult::new()),
            None => Err(Error::check_failed(self.name(), "the document has no asset")),
        }
    }
}

#[test]
fn test_aborting_check_fails_the_pass() {
    let config = ValidatorConfig::new().with_check(Arc::new(RequireAsset));
    assert!(box_document().validate_with_config(&config).is_ok());

    let mut document = box_document();
    document.asset = None;
    let err = document.validate_with_config(&config).unwrap_err();
    assert!(err.to_string().starts_with("[E4001]"));
    assert!(err.to_string().contains("require-asset"));
}

#[test]
fn test_display_lists_codes_and_paths() {
    let mut json = box_json();
    json["textures"]["tex"]["target"] = json!(34067);
    json["techniques"]["tech"]["program"] = json!("gone");

    let display = document_from(json).validate().to_string();
    assert!(display.contains("[G101] error at techniques[tech].programs[gone]"));
    assert!(display.contains("[G106] warning at textures[tex]"));
    let error_at = display.find("[G101]").unwrap();
    let warning_at = display.find("[G106] warning").unwrap();
    assert!(error_at < warning_at);
}

#[test]
fn test_validation_under_trace_subscriber() {
    // Another test may have installed a subscriber already
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("gltf_validator=trace"))
        .with_test_writer()
        .try_init();

    let config = ValidatorConfig::new().with_check(Arc::new(UsageCheck));
    let result = box_document().validate_with_config(&config).unwrap();
    assert!(result.is_empty());
}
