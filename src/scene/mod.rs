//! Flat collection of everything that gets rendered.

mod mesh;

pub use mesh::{Intersection, Mesh};

use crate::{light::PointLight, placement::BoxEntity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub usize);

#[derive(Debug, Clone)]
pub enum Entity {
    Mesh(Mesh),
    Box(BoxEntity),
    PointLight(PointLight),
}

impl Entity {
    pub fn mesh(&self) -> Option<&Mesh> {
        match self {
            Entity::Mesh(mesh) => Some(mesh),
            Entity::Box(entity) => Some(&entity.mesh),
            Entity::PointLight(_) => None,
        }
    }
}

impl From<Mesh> for Entity {
    fn from(mesh: Mesh) -> Self {
        Entity::Mesh(mesh)
    }
}

impl From<BoxEntity> for Entity {
    fn from(entity: BoxEntity) -> Self {
        Entity::Box(entity)
    }
}

impl From<PointLight> for Entity {
    fn from(light: PointLight) -> Self {
        Entity::PointLight(light)
    }
}

#[derive(Debug, Default)]
pub struct SceneGraph {
    entities: Vec<Entity>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entity: impl Into<Entity>) -> EntityId {
        self.entities.push(entity.into());
        EntityId(self.entities.len() - 1)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Every renderable mesh, boxes included
    pub fn meshes(&self) -> impl Iterator<Item = &Mesh> {
        self.entities.iter().filter_map(Entity::mesh)
    }

    /// Standalone meshes, i.e. not part of the cloud
    pub fn plain_meshes(&self) -> impl Iterator<Item = &Mesh> {
        self.entities.iter().filter_map(|e| match e {
            Entity::Mesh(mesh) => Some(mesh),
            _ => None,
        })
    }

    pub fn boxes(&self) -> impl Iterator<Item = &BoxEntity> {
        self.entities.iter().filter_map(|e| match e {
            Entity::Box(entity) => Some(entity),
            _ => None,
        })
    }

    pub fn point_lights(&self) -> impl Iterator<Item = &PointLight> {
        self.entities.iter().filter_map(|e| match e {
            Entity::PointLight(light) => Some(light),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use glam::Vec3;

    use super::*;
    use crate::{
        config::PointLightConfig,
        geometry::BoxGeometry,
        material::{MaterialDescriptor, Phong, Side},
    };

    #[test]
    fn add_and_query() {
        let mut scene = SceneGraph::new();
        assert!(scene.is_empty());

        let light = scene.add(PointLight::new(&PointLightConfig {
            color: 0xffffff,
            intensity: 1.0,
            distance: 0.0,
            decay: 2.0,
            position: Vec3::ZERO,
            cast_shadow: false,
        }));
        let room = scene.add(Mesh::new(
            Arc::new(BoxGeometry::cube(1.0)),
            Arc::new(MaterialDescriptor::new("room", Phong::new(0xffffff, Side::Back))),
        ));

        assert_eq!(scene.len(), 2);
        assert_eq!((light, room), (EntityId(0), EntityId(1)));
        assert!(matches!(scene.get(light), Some(Entity::PointLight(_))));
        assert!(scene.get(EntityId(2)).is_none());
        assert_eq!(scene.meshes().count(), 1);
        assert_eq!(scene.plain_meshes().count(), 1);
        assert_eq!(scene.point_lights().count(), 1);
        assert_eq!(scene.boxes().count(), 0);
    }
}
