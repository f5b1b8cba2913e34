//! # Interface — Named Attributes and Uniforms
//!
//! wgpu binds vertex attributes by location and uniforms by byte offset, while
//! the shader sources address them by name. [`ATTRIBUTES`] and [`UNIFORMS`]
//! fix each name to the location or offset the Rust side uploads to.
//!
//! [`ShaderInterface::reflect`] parses a stage with naga and reads back where
//! every name actually landed. [`ShaderInterface::check`] compares that against
//! the tables, so a stage that renames, relocates or reorders anything is
//! rejected as a link failure instead of drawing with shuffled inputs.

use crate::error::{Error, Result, ShaderStage};

/// A vertex attribute resolved to its shader location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSlot {
    pub name: &'static str,
    pub location: u32,
}

/// A uniform resolved to its byte offset inside the uniform block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformSlot {
    pub name: &'static str,
    pub offset: u64,
}

pub const ATTRIBUTES: [AttributeSlot; 2] = [
    AttributeSlot {
        name: "aPosition",
        location: 0,
    },
    AttributeSlot {
        name: "aNormal",
        location: 1,
    },
];

pub const UNIFORMS: [UniformSlot; 8] = [
    UniformSlot {
        name: "uModelViewMatrix",
        offset: 0,
    },
    UniformSlot {
        name: "uProjectionMatrix",
        offset: 64,
    },
    UniformSlot {
        name: "uLightDirection",
        offset: 128,
    },
    UniformSlot {
        name: "uUseDirectionalLight",
        offset: 140,
    },
    UniformSlot {
        name: "uLightPosition",
        offset: 144,
    },
    UniformSlot {
        name: "uUsePositionalLight",
        offset: 156,
    },
    UniformSlot {
        name: "uLightColor",
        offset: 160,
    },
    UniformSlot {
        name: "uAmbientColor",
        offset: 176,
    },
];

/// Where the uniform block is bound.
pub const UNIFORM_GROUP: u32 = 0;
pub const UNIFORM_BINDING: u32 = 0;

/// Names one stage declares, and where they landed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShaderInterface {
    /// Located inputs of the entry point (vertex stage only).
    attributes: Vec<(String, u32)>,
    /// Members of the uniform block, or `None` if the stage declares none.
    uniforms: Option<Vec<(String, u64)>>,
}

impl ShaderInterface {
    /// Parse `source` and collect its named interface.
    ///
    /// Fails with [`Error::ShaderCompile`] if the source does not parse and
    /// with [`Error::ShaderLink`] if `entry_point` is not a `stage` entry point.
    pub fn reflect(stage: ShaderStage, source: &str, entry_point: &str) -> Result<Self> {
        let module =
            naga::front::wgsl::parse_str(source).map_err(|err| Error::ShaderCompile {
                stage,
                diagnostics: err.emit_to_string(source),
            })?;

        let naga_stage = match stage {
            ShaderStage::Vertex => naga::ShaderStage::Vertex,
            ShaderStage::Fragment => naga::ShaderStage::Fragment,
        };
        let entry = module
            .entry_points
            .iter()
            .find(|ep| ep.name == entry_point && ep.stage == naga_stage)
            .ok_or_else(|| Error::ShaderLink {
                diagnostics: format!("{stage} stage has no entry point `{entry_point}`"),
            })?;

        let mut attributes = Vec::new();
        if stage == ShaderStage::Vertex {
            for arg in &entry.function.arguments {
                match (&arg.binding, &arg.name) {
                    (Some(binding), Some(name)) => {
                        if let Some(location) = location_of(binding) {
                            attributes.push((name.clone(), location));
                        }
                    }
                    // An input struct: its members carry the locations.
                    (None, _) => {
                        for member in struct_members(&module, arg.ty) {
                            if let (Some(binding), Some(name)) = (&member.binding, &member.name) {
                                if let Some(location) = location_of(binding) {
                                    attributes.push((name.clone(), location));
                                }
                            }
                        }
                    }
                    _ => {}
                }
            }
        }

        let uniforms: Option<Vec<(String, u64)>> =
            module.global_variables.iter().find_map(|(_, var)| {
                let binding = var.binding.as_ref()?;
                let is_block = var.space == naga::AddressSpace::Uniform
                    && binding.group == UNIFORM_GROUP
                    && binding.binding == UNIFORM_BINDING;
                is_block.then(|| {
                    struct_members(&module, var.ty)
                        .iter()
                        .filter_map(|m| Some((m.name.clone()?, u64::from(m.offset))))
                        .collect()
                })
            });

        Ok(Self {
            attributes,
            uniforms,
        })
    }

    /// Location of a named vertex input.
    pub fn attribute_location(&self, name: &str) -> Option<u32> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, location)| *location)
    }

    /// Byte offset of a named member of the uniform block.
    pub fn uniform_offset(&self, name: &str) -> Option<u64> {
        self.uniforms
            .as_ref()?
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, offset)| *offset)
    }

    pub fn declares_uniforms(&self) -> bool {
        self.uniforms.is_some()
    }

    /// Compare against [`ATTRIBUTES`] and [`UNIFORMS`]. Every mismatch is
    /// listed in the returned [`Error::ShaderLink`].
    pub fn check(&self, stage: ShaderStage) -> Result<()> {
        let mut problems = Vec::new();

        if stage == ShaderStage::Vertex {
            for slot in ATTRIBUTES {
                match self.attribute_location(slot.name) {
                    None => problems.push(format!("vertex input `{}` is not declared", slot.name)),
                    Some(location) if location != slot.location => problems.push(format!(
                        "vertex input `{}` is at location {location}, expected {}",
                        slot.name, slot.location
                    )),
                    Some(_) => {}
                }
            }
        }

        if self.declares_uniforms() {
            for slot in UNIFORMS {
                match self.uniform_offset(slot.name) {
                    None => problems.push(format!(
                        "uniform `{}` is missing from the uniform block",
                        slot.name
                    )),
                    Some(offset) if offset != slot.offset => problems.push(format!(
                        "uniform `{}` is at byte offset {offset}, expected {}",
                        slot.name, slot.offset
                    )),
                    Some(_) => {}
                }
            }
        }

        if problems.is_empty() {
            return Ok(());
        }
        let diagnostics = problems
            .iter()
            .map(|p| format!("{stage} stage: {p}"))
            .collect::<Vec<_>>()
            .join("\n");
        Err(Error::ShaderLink { diagnostics })
    }
}

fn location_of(binding: &naga::Binding) -> Option<u32> {
    match binding {
        naga::Binding::Location { location, .. } => Some(*location),
        _ => None,
    }
}

fn struct_members(module: &naga::Module, ty: naga::Handle<naga::Type>) -> &[naga::StructMember] {
    match &module.types[ty].inner {
        naga::TypeInner::Struct { members, .. } => members,
        _ => &[],
    }
}
