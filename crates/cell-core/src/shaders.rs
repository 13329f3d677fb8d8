//! Composable WGSL library for the hero programs.
//!
//! Shared pieces (noise, palette, surface IO) are registered once as
//! `naga_oil` modules; each program pulls them in with `#import` and is
//! composed straight to `naga` IR, so nothing is pasted together as text.

use crate::error::HeroError;
use naga_oil::compose::{
    ComposableModuleDescriptor, Composer, NagaModuleDescriptor, ShaderLanguage, ShaderType,
};

// Shaders bundled as string constants
pub static NOISE_WGSL: &str = include_str!("../../../shaders/noise.wgsl");
pub static PALETTE_WGSL: &str = include_str!("../../../shaders/palette.wgsl");
pub static SURFACE_WGSL: &str = include_str!("../../../shaders/surface.wgsl");
pub static MEMBRANE_WGSL: &str = include_str!("../../../shaders/membrane.wgsl");
pub static INNER_GLOW_WGSL: &str = include_str!("../../../shaders/inner_glow.wgsl");
pub static NUCLEUS_WGSL: &str = include_str!("../../../shaders/nucleus.wgsl");
pub static PARTICLES_WGSL: &str = include_str!("../../../shaders/particles.wgsl");

/// Vertex entry point shared by every program.
pub const VERTEX_ENTRY: &str = "vs_main";
/// Fragment entry point shared by every program.
pub const FRAGMENT_ENTRY: &str = "fs_main";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShaderProgram {
    Membrane,
    InnerGlow,
    Nucleus,
    Particles,
}

impl ShaderProgram {
    pub const ALL: [ShaderProgram; 4] = [
        ShaderProgram::Membrane,
        ShaderProgram::InnerGlow,
        ShaderProgram::Nucleus,
        ShaderProgram::Particles,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShaderProgram::Membrane => "membrane",
            ShaderProgram::InnerGlow => "inner_glow",
            ShaderProgram::Nucleus => "nucleus",
            ShaderProgram::Particles => "particles",
        }
    }

    fn source(self) -> &'static str {
        match self {
            ShaderProgram::Membrane => MEMBRANE_WGSL,
            ShaderProgram::InnerGlow => INNER_GLOW_WGSL,
            ShaderProgram::Nucleus => NUCLEUS_WGSL,
            ShaderProgram::Particles => PARTICLES_WGSL,
        }
    }

    fn file_path(self) -> &'static str {
        match self {
            ShaderProgram::Membrane => "membrane.wgsl",
            ShaderProgram::InnerGlow => "inner_glow.wgsl",
            ShaderProgram::Nucleus => "nucleus.wgsl",
            ShaderProgram::Particles => "particles.wgsl",
        }
    }
}

pub struct ShaderLibrary {
    composer: Composer,
}

impl ShaderLibrary {
    pub fn new() -> Result<Self, HeroError> {
        let mut composer = Composer::default();

        // Dependency order: surface and palette stand alone, noise too.
        let modules: [(&'static str, &'static str); 3] = [
            (NOISE_WGSL, "noise.wgsl"),
            (PALETTE_WGSL, "palette.wgsl"),
            (SURFACE_WGSL, "surface.wgsl"),
        ];
        for (source, file_path) in modules {
            composer
                .add_composable_module(ComposableModuleDescriptor {
                    source,
                    file_path,
                    language: ShaderLanguage::Wgsl,
                    ..Default::default()
                })
                .map_err(|e| HeroError::ShaderCompose {
                    program: file_path,
                    message: e.to_string(),
                })?;
        }
        Ok(Self { composer })
    }

    /// Resolve a program's imports into a standalone, validated module.
    pub fn compose(&mut self, program: ShaderProgram) -> Result<naga::Module, HeroError> {
        let module = self
            .composer
            .make_naga_module(NagaModuleDescriptor {
                source: program.source(),
                file_path: program.file_path(),
                shader_type: ShaderType::Wgsl,
                ..Default::default()
            })
            .map_err(|e| HeroError::ShaderCompose {
                program: program.name(),
                message: e.to_string(),
            })?;
        log::debug!(
            "[gpu] composed {} ({} functions)",
            program.name(),
            module.functions.len()
        );
        Ok(module)
    }
}
