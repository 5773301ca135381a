use glam::Vec3;

/// Which faces of a mesh can be hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    /// Faces whose normal points toward the viewer
    #[default]
    Front,
    /// Faces whose normal points away from the viewer, e.g. the inside of a room
    Back,
    Double,
}

/// Shading description of a surface.
///
/// Each hook returns `None` when the material has no such lobe, and the
/// integrator skips the matching computation.
pub trait Material: Send + Sync {
    fn side(&self) -> Side;

    /// Linear diffuse albedo
    fn diffuse(&self) -> Option<Vec3> {
        None
    }

    /// Linear specular color and Blinn-Phong exponent
    fn specular(&self) -> Option<(Vec3, f32)> {
        None
    }

    /// Fraction of the light passing straight through the surface
    fn transmission(&self) -> Option<f32> {
        None
    }

    fn transparent(&self) -> bool {
        false
    }
}

pub struct MaterialDescriptor {
    pub label: Option<String>,
    pub material: Box<dyn Material>,
}

impl MaterialDescriptor {
    pub fn new(label: &str, material: impl Material + 'static) -> Self {
        Self {
            label: Some(label.to_owned()),
            material: Box::new(material),
        }
    }
}

impl std::fmt::Debug for MaterialDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaterialDescriptor")
            .field("label", &self.label)
            .field("side", &self.material.side())
            .finish()
    }
}
