use std::{f32::consts::PI, sync::Arc};

use glam::Vec3;
use rand::Rng;

use crate::{geometry::BoxGeometry, material::MaterialDescriptor, scene::Mesh};

/// One cube of the cloud
#[derive(Debug, Clone)]
pub struct BoxEntity {
    pub index: usize,
    /// `index * PI / 50`, carried along but not used for placement
    pub angle: f32,
    pub mesh: Mesh,
}

/// Build the `index`-th cube of the cloud at a uniformly random position in `[-0.5, 0.5]^3`.
///
/// Geometry and material are shared, not copied.
pub fn place(
    geometry: &Arc<BoxGeometry>,
    material: &Arc<MaterialDescriptor>,
    index: usize,
    rng: &mut impl Rng,
) -> BoxEntity {
    let angle = index as f32 * PI / 50.0;

    let mut mesh = Mesh::new(geometry.clone(), material.clone());
    mesh.label = Some(format!("box #{index}"));
    mesh.position = Vec3::new(
        rng.gen::<f32>() - 0.5,
        rng.gen::<f32>() - 0.5,
        rng.gen::<f32>() - 0.5,
    );
    mesh.cast_shadow = true;
    mesh.receive_shadow = true;

    log::debug!("Placed box #{index} at {}", mesh.position);

    BoxEntity { index, angle, mesh }
}
