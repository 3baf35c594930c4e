//! Synthesis of default techniques
//!
//! Converters that produce glTF 1.0 from formats without shaders (OBJ, STL,
//! point clouds) need a technique for every material they emit. The
//! [`TechniqueFactory`] adds one simple Blinn-Phong style technique per
//! combination of "has texture coordinates" and "has normals", together with
//! its program and shaders, and hands out the technique ID.

use tracing::debug;

use crate::constants::{
    GL_FLOAT, GL_FLOAT_MAT3, GL_FLOAT_MAT4, GL_FLOAT_VEC2, GL_FLOAT_VEC3, GL_FLOAT_VEC4,
    GL_SAMPLER_2D,
};
use crate::error::{Error, Result};
use crate::graph::{generate_id, get_size};
use crate::model::{Document, Program, Shader, Technique, TechniqueParameters};
use crate::validator::{Validator, ValidatorContext};

/// Name of the ambient color parameter of synthesized techniques
pub const AMBIENT_PARAMETER: &str = "ambient";
/// Name of the diffuse color or texture parameter of synthesized techniques
pub const DIFFUSE_PARAMETER: &str = "diffuse";
/// Name of the specular color parameter of synthesized techniques
pub const SPECULAR_PARAMETER: &str = "specular";
/// Name of the shininess parameter of synthesized techniques
pub const SHININESS_PARAMETER: &str = "shininess";

/// The four technique variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Variant {
    with_texture: bool,
    with_normals: bool,
}

impl Variant {
    fn technique_id(&self) -> &'static str {
        match (self.with_texture, self.with_normals) {
            (true, true) => "techniqueTextureNormals",
            (true, false) => "techniqueTexture",
            (false, true) => "techniqueNormals",
            (false, false) => "techniqueNone",
        }
    }

    fn shader_suffix(&self) -> &'static str {
        match (self.with_texture, self.with_normals) {
            (true, true) => "texture_normals",
            (true, false) => "texture",
            (false, true) => "normals",
            (false, false) => "none",
        }
    }
}

/// Adds default techniques to a document
///
/// # Example
///
/// ```
/// use gltf_validator::Document;
/// use gltf_validator::synthesis::TechniqueFactory;
///
/// let mut document = Document::new();
/// let technique_id = TechniqueFactory::new(&mut document)
///     .technique_id(true, false)
///     .unwrap();
/// assert_eq!(technique_id, "techniqueTexture");
/// assert!(document.validate().is_empty());
/// ```
#[derive(Debug)]
pub struct TechniqueFactory<'a> {
    document: &'a mut Document,
}

impl<'a> TechniqueFactory<'a> {
    /// Create a factory that adds entities to `document`
    pub fn new(document: &'a mut Document) -> Self {
        Self { document }
    }

    /// The ID of the technique for the given vertex layout
    ///
    /// The technique, its program and its shaders are created on first use;
    /// later calls for the same layout return the existing technique.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Internal`] if the synthesized entities do not
    /// validate, which happens when conflicting entities already occupy the
    /// technique ID.
    pub fn technique_id(&mut self, with_texture: bool, with_normals: bool) -> Result<String> {
        let variant = Variant {
            with_texture,
            with_normals,
        };
        let technique_id = variant.technique_id();
        if !self.document.techniques.contains_key(technique_id) {
            self.create_technique(variant);
        }

        let validation = Validator::new(&*self.document)
            .validate_technique(Some(technique_id), &ValidatorContext::root());
        if validation.has_errors() {
            return Err(Error::internal(format!(
                "synthesized technique {} is invalid: {}",
                technique_id, validation
            )));
        }
        Ok(technique_id.to_string())
    }

    fn create_technique(&mut self, variant: Variant) {
        let technique_id = variant.technique_id();
        let program_counter = get_size(Some(&self.document.programs));
        let suffix = variant.shader_suffix();

        let vertex_shader_id = generate_id(
            &format!("vertexShader{}", program_counter),
            &self.document.shaders,
        );
        self.document.shaders.insert(
            vertex_shader_id.clone(),
            Shader::vertex(format!("vs_{}.glsl", suffix)),
        );
        let fragment_shader_id = generate_id(
            &format!("fragmentShader{}", program_counter),
            &self.document.shaders,
        );
        self.document.shaders.insert(
            fragment_shader_id.clone(),
            Shader::fragment(format!("fs_{}.glsl", suffix)),
        );

        let mut program = Program::new(vertex_shader_id, fragment_shader_id);
        let mut program_attributes = vec!["a_position".to_string()];
        if variant.with_texture {
            program_attributes.push("a_texcoord0".to_string());
        }
        if variant.with_normals {
            program_attributes.push("a_normal".to_string());
        }
        program.attributes = Some(program_attributes);
        let program_id = generate_id(
            &format!("program{}", program_counter),
            &self.document.programs,
        );
        self.document.programs.insert(program_id.clone(), program);

        let mut technique = Technique::new(program_id.clone())
            .with_attribute("a_position", "position")
            .with_parameter(
                "position",
                TechniqueParameters::with_semantic(GL_FLOAT_VEC3, "POSITION"),
            )
            .with_parameter(
                "modelViewMatrix",
                TechniqueParameters::with_semantic(GL_FLOAT_MAT4, "MODELVIEW"),
            )
            .with_parameter(
                "projectionMatrix",
                TechniqueParameters::with_semantic(GL_FLOAT_MAT4, "PROJECTION"),
            )
            .with_parameter(AMBIENT_PARAMETER, TechniqueParameters::new(GL_FLOAT_VEC4))
            .with_parameter(SPECULAR_PARAMETER, TechniqueParameters::new(GL_FLOAT_VEC4))
            .with_parameter(SHININESS_PARAMETER, TechniqueParameters::new(GL_FLOAT))
            .with_uniform("u_ambient", AMBIENT_PARAMETER)
            .with_uniform("u_diffuse", DIFFUSE_PARAMETER)
            .with_uniform("u_specular", SPECULAR_PARAMETER)
            .with_uniform("u_shininess", SHININESS_PARAMETER)
            .with_uniform("u_modelViewMatrix", "modelViewMatrix")
            .with_uniform("u_projectionMatrix", "projectionMatrix");

        let diffuse_type = if variant.with_texture {
            GL_SAMPLER_2D
        } else {
            GL_FLOAT_VEC4
        };
        technique = technique.with_parameter(DIFFUSE_PARAMETER, TechniqueParameters::new(diffuse_type));

        if variant.with_texture {
            technique = technique
                .with_attribute("a_texcoord0", "texcoord0")
                .with_parameter(
                    "texcoord0",
                    TechniqueParameters::with_semantic(GL_FLOAT_VEC2, "TEXCOORD_0"),
                );
        }
        if variant.with_normals {
            technique = technique
                .with_attribute("a_normal", "normal")
                .with_parameter(
                    "normal",
                    TechniqueParameters::with_semantic(GL_FLOAT_VEC3, "NORMAL"),
                )
                .with_parameter(
                    "normalMatrix",
                    TechniqueParameters::with_semantic(GL_FLOAT_MAT3, "MODELVIEWINVERSETRANSPOSE"),
                )
                .with_uniform("u_normalMatrix", "normalMatrix");
        }

        debug!(
            technique = technique_id,
            program = %program_id,
            "Synthesized default technique"
        );
        self.document
            .techniques
            .insert(technique_id.to_string(), technique);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ParameterType;

    #[test]
    fn test_each_variant_validates() {
        let mut document = Document::new();
        let mut factory = TechniqueFactory::new(&mut document);
        let ids = [
            factory.technique_id(false, false).unwrap(),
            factory.technique_id(true, false).unwrap(),
            factory.technique_id(false, true).unwrap(),
            factory.technique_id(true, true).unwrap(),
        ];
        assert_eq!(
            ids,
            [
                "techniqueNone",
                "techniqueTexture",
                "techniqueNormals",
                "techniqueTextureNormals"
            ]
        );
        assert_eq!(document.techniques.len(), 4);
        assert_eq!(document.programs.len(), 4);
        assert_eq!(document.shaders.len(), 8);
        assert!(document.validate().is_empty());
    }

    #[test]
    fn test_technique_is_created_once() {
        let mut document = Document::new();
        let mut factory = TechniqueFactory::new(&mut document);
        factory.technique_id(false, true).unwrap();
        factory.technique_id(false, true).unwrap();
        assert_eq!(document.programs.len(), 1);
        assert!(document.programs.contains_key("program0"));
        assert!(document.shaders.contains_key("vertexShader0"));
        assert!(document.shaders.contains_key("fragmentShader0"));
    }

    #[test]
    fn test_generated_ids_avoid_existing_entities() {
        let mut document = Document::new();
        document
            .shaders
            .insert("vertexShader0".to_string(), Shader::vertex("user.glsl"));
        TechniqueFactory::new(&mut document)
            .technique_id(false, false)
            .unwrap();
        let program = &document.programs["program0"];
        assert_eq!(program.vertex_shader.as_deref(), Some("vertexShader00"));
        assert_eq!(document.shaders["vertexShader0"].uri.as_deref(), Some("user.glsl"));
    }

    #[test]
    fn test_texture_variant_has_sampler_diffuse() {
        let mut document = Document::new();
        TechniqueFactory::new(&mut document)
            .technique_id(true, true)
            .unwrap();
        let technique = &document.techniques["techniqueTextureNormals"];
        let diffuse = &technique.parameters.as_ref().unwrap()[DIFFUSE_PARAMETER];
        assert_eq!(diffuse.parameter_type, Some(ParameterType::Sampler2D.code()));
        let uniforms = technique.uniforms.as_ref().unwrap();
        assert_eq!(uniforms.len(), 7);
    }

    #[test]
    fn test_conflicting_technique_is_internal_error() {
        let mut document = Document::new();
        document
            .techniques
            .insert("techniqueNone".to_string(), Technique::new("missing"));
        let err = TechniqueFactory::new(&mut document)
            .technique_id(false, false)
            .unwrap_err();
        assert!(err.is_internal());
    }
}
