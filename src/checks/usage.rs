//! Unreferenced entity check

use std::borrow::Cow;
use std::collections::HashSet;

use crate::check::DocumentCheck;
use crate::error::Result;
use crate::model::{Document, EntityKind, ParameterType, TechniqueParameters};
use crate::validator::{DiagnosticKind, ValidatorContext, ValidatorResult, texture_id};

/// Warns about entities that nothing in the document references
///
/// Covers shaders, programs, techniques, textures, images, samplers and
/// accessors. Buffers, buffer views, materials, meshes, cameras, nodes,
/// scenes and animations may legitimately stand alone and are not reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsageCheck;

/// IDs referenced from somewhere in a document, by kind
#[derive(Debug, Default)]
struct References<'d> {
    ids: HashSet<(EntityKind, Cow<'d, str>)>,
}

impl<'d> References<'d> {
    fn add(&mut self, kind: EntityKind, id: Option<impl Into<Cow<'d, str>>>) {
        if let Some(id) = id {
            self.ids.insert((kind, id.into()));
        }
    }

    fn contains(&self, kind: EntityKind, id: &str) -> bool {
        self.ids.contains(&(kind, Cow::Borrowed(id)))
    }

    fn collect(document: &'d Document) -> Self {
        let mut references = Self::default();

        for program in document.programs.values() {
            references.add(EntityKind::Shader, program.vertex_shader.as_deref());
            references.add(EntityKind::Shader, program.fragment_shader.as_deref());
        }
        for technique in document.techniques.values() {
            references.add(EntityKind::Program, technique.program.as_deref());
            for parameter in technique.parameters.iter().flat_map(|p| p.values()) {
                if is_sampler(parameter) {
                    references.add(
                        EntityKind::Texture,
                        parameter.value.as_ref().map(texture_id),
                    );
                }
            }
        }
        for material in document.materials.values() {
            references.add(EntityKind::Technique, material.technique.as_deref());
            let parameters = material
                .technique
                .as_deref()
                .and_then(|id| document.techniques.get(id))
                .and_then(|technique| technique.parameters.as_ref());
            for (name, value) in material.values.iter().flatten() {
                let sampler = parameters
                    .and_then(|parameters| parameters.get(name))
                    .is_some_and(is_sampler);
                if sampler {
                    references.add(EntityKind::Texture, Some(texture_id(value)));
                }
            }
        }
        for texture in document.textures.values() {
            references.add(EntityKind::Image, texture.source.as_deref());
            references.add(EntityKind::Sampler, texture.sampler.as_deref());
        }
        for mesh in document.meshes.values() {
            for primitive in mesh.primitives.iter().flatten() {
                references.add(EntityKind::Accessor, primitive.indices.as_deref());
                for accessor in primitive.attributes.iter().flat_map(|a| a.values()) {
                    references.add(EntityKind::Accessor, accessor.as_deref());
                }
            }
        }
        for animation in document.animations.values() {
            for accessor in animation.parameters.iter().flat_map(|p| p.values()) {
                references.add(EntityKind::Accessor, accessor.as_deref());
            }
        }
        references
    }
}

fn is_sampler(parameter: &TechniqueParameters) -> bool {
    parameter
        .parameter_type
        .and_then(ParameterType::from_code)
        .is_some_and(|parameter_type| parameter_type.is_sampler())
}

impl UsageCheck {
    /// Kinds whose unreferenced entities are reported
    pub const CHECKED_KINDS: [EntityKind; 7] = [
        EntityKind::Image,
        EntityKind::Shader,
        EntityKind::Program,
        EntityKind::Technique,
        EntityKind::Accessor,
        EntityKind::Texture,
        EntityKind::Sampler,
    ];
}

impl DocumentCheck for UsageCheck {
    fn name(&self) -> &'static str {
        "usage"
    }

    fn validate(&self, document: &Document) -> Result<ValidatorResult> {
        let references = References::collect(document);
        let root = ValidatorContext::root();
        let mut result = ValidatorResult::new();

        for kind in Self::CHECKED_KINDS {
            for id in document.ids(kind) {
                if !references.contains(kind, id) {
                    let segment = format!("{}[{}]", kind.collection_name(), id);
                    result.add_warning(
                        DiagnosticKind::InvalidValue,
                        format!("The entity {} is not referenced", segment),
                        &root.with(segment),
                    );
                }
            }
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::model::{Image, Material, Program, Sampler, Shader, Technique, Texture};
    use serde_json::json;

    fn document() -> Document {
        let mut document = Document::new();
        document
            .shaders
            .insert("vs".to_string(), Shader::vertex("vs.glsl"));
        document
            .shaders
            .insert("fs".to_string(), Shader::fragment("fs.glsl"));
        document
            .programs
            .insert("p0".to_string(), Program::new("vs", "fs"));
        document.techniques.insert(
            "t0".to_string(),
            Technique::new("p0")
                .with_parameter("diffuse", TechniqueParameters::new(GL_SAMPLER_2D))
                .with_uniform("u_diffuse", "diffuse"),
        );
        document.materials.insert(
            "m0".to_string(),
            Material::new("t0").with_value("diffuse", json!("tex")),
        );
        document
            .images
            .insert("img".to_string(), Image::new("diffuse.png"));
        document
            .samplers
            .insert("smp".to_string(), Sampler::default());
        document
            .textures
            .insert("tex".to_string(), Texture::new("img", "smp"));
        document
    }

    #[test]
    fn test_fully_referenced_document() {
        let result = UsageCheck.validate(&document()).unwrap();
        assert!(result.is_empty(), "{}", result);
    }

    #[test]
    fn test_unreferenced_entities_warn() {
        let mut document = document();
        document
            .shaders
            .insert("unused_vs".to_string(), Shader::vertex("other.glsl"));
        document.materials.clear();

        let result = UsageCheck.validate(&document).unwrap();
        assert!(!result.has_errors());
        let contexts: Vec<&str> = result
            .diagnostics()
            .iter()
            .map(|d| d.context.as_str())
            .collect();
        // Without the material, the technique and the texture are unused
        assert_eq!(
            contexts,
            vec!["shaders[unused_vs]", "techniques[t0]", "textures[tex]"]
        );
    }

    #[test]
    fn test_numeric_sampler_values_reference_textures() {
        let mut document = document();
        for id in ["7", "42"] {
            document
                .textures
                .insert(id.to_string(), Texture::new("img", "smp"));
        }
        document.techniques.insert(
            "t1".to_string(),
            Technique::new("p0")
                .with_parameter(
                    "detail",
                    TechniqueParameters::new(GL_SAMPLER_2D).value(json!(7)),
                )
                .with_uniform("u_detail", "detail"),
        );
        document.materials.insert(
            "m1".to_string(),
            Material::new("t0").with_value("diffuse", json!(42)),
        );
        document
            .materials
            .insert("m2".to_string(), Material::new("t1"));

        let result = UsageCheck.validate(&document).unwrap();
        assert!(result.is_empty(), "{}", result);
    }
}
