//! Assembly of the cube cloud scene and its one-shot rendering.

use std::sync::Arc;

use rand::Rng;

use crate::{
    camera::PerspectiveCamera,
    config::Config,
    geometry::BoxGeometry,
    host::{Container, SurfaceHandle, Viewport},
    light::PointLight,
    material::{MaterialDescriptor, Phong, Physical},
    placement,
    renderer::{FrameRenderer, RendererOptions},
    scene::{EntityId, Mesh, SceneGraph},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Built,
    Rendered,
}

/// A room seen from above, with a cloud of small transparent cubes floating around a light.
///
/// Everything is created by [CubeCloudApp::build] and stays untouched afterwards.
pub struct CubeCloudApp {
    config: Config,
    renderer: FrameRenderer,
    scene: SceneGraph,
    camera: PerspectiveCamera,
    box_geometry: Arc<BoxGeometry>,
    box_material: Arc<MaterialDescriptor>,
    room: EntityId,
    light: EntityId,
    boxes: Vec<EntityId>,
    stage: Stage,
}

impl CubeCloudApp {
    pub fn build(host: &mut Container, viewport: Viewport) -> anyhow::Result<Self> {
        Self::build_with_rng(host, viewport, &mut rand::thread_rng())
    }

    pub fn build_with_rng(
        host: &mut Container,
        viewport: Viewport,
        rng: &mut impl Rng,
    ) -> anyhow::Result<Self> {
        Self::build_with_config(host, Config::new(viewport), rng)
    }

    pub fn build_with_config(
        host: &mut Container,
        config: Config,
        rng: &mut impl Rng,
    ) -> anyhow::Result<Self> {
        log::info!(
            "Building scene for {}x{} under `{}`",
            config.surface.width,
            config.surface.height,
            host.id()
        );

        let mut renderer =
            FrameRenderer::new(&config.surface, RendererOptions::from(&config.render))?;
        renderer.set_shadow_map_enabled(true);
        host.append_child(renderer.surface());

        let mut scene = SceneGraph::new();
        let camera = PerspectiveCamera::from_config(&config.camera);

        let light = scene.add(PointLight::new(&config.point_light));

        let room = {
            let mut mesh = Mesh::new(
                Arc::new(BoxGeometry::cube(config.room.size)),
                Arc::new(MaterialDescriptor::new(
                    "room",
                    Phong::new(config.room.color, config.room.side),
                )),
            );
            mesh.label = Some("room".to_owned());
            mesh.receive_shadow = config.room.receive_shadow;
            scene.add(mesh)
        };

        let box_geometry = Arc::new(BoxGeometry::cube(config.cloud.box_size));
        let box_material = Arc::new(MaterialDescriptor::new(
            "cloud",
            Physical::from_config(&config.material),
        ));

        let boxes = (0..config.cloud.count)
            .map(|index| {
                let entity = placement::place(&box_geometry, &box_material, index, &mut *rng);
                scene.add(entity)
            })
            .collect::<Vec<_>>();
        log::info!("Scene ready: {} entities, {} boxes", scene.len(), boxes.len());

        Ok(Self {
            config,
            renderer,
            scene,
            camera,
            box_geometry,
            box_material,
            room,
            light,
            boxes,
            stage: Stage::Built,
        })
    }

    /// Draw the scene once more on the mounted surface
    pub fn render(&mut self) -> anyhow::Result<()> {
        self.renderer.render(&self.scene, &self.camera)?;
        self.stage = Stage::Rendered;
        Ok(())
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn renderer(&self) -> &FrameRenderer {
        &self.renderer
    }

    pub fn surface(&self) -> SurfaceHandle {
        self.renderer.surface()
    }

    pub fn box_geometry(&self) -> &Arc<BoxGeometry> {
        &self.box_geometry
    }

    pub fn box_material(&self) -> &Arc<MaterialDescriptor> {
        &self.box_material
    }

    pub fn room(&self) -> EntityId {
        self.room
    }

    pub fn light(&self) -> EntityId {
        self.light
    }

    pub fn boxes(&self) -> &[EntityId] {
        &self.boxes
    }
}

/// Build the scene under `host` and render it once
pub fn run(host: &mut Container, viewport: Viewport) -> anyhow::Result<CubeCloudApp> {
    run_with_config(host, Config::new(viewport))
}

pub fn run_with_config(host: &mut Container, config: Config) -> anyhow::Result<CubeCloudApp> {
    let mut app = CubeCloudApp::build_with_config(host, config, &mut rand::thread_rng())?;
    app.render()?;
    Ok(app)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::scene::Entity;

    fn viewport() -> Viewport {
        Viewport {
            width: 16,
            height: 12,
        }
    }

    #[test]
    fn build_mounts_one_surface() {
        let mut host = Container::new("webgl");
        let app = CubeCloudApp::build_with_rng(&mut host, viewport(), &mut StdRng::seed_from_u64(1))
            .unwrap();

        assert_eq!(host.children().len(), 1);
        assert!(std::rc::Rc::ptr_eq(&host.children()[0], &app.surface()));
        assert_eq!(app.stage(), Stage::Built);
        assert!(app.surface().borrow().shadow_map_enabled);
    }

    #[test]
    fn ids_point_at_their_entities() {
        let mut host = Container::new("webgl");
        let app = CubeCloudApp::build_with_rng(&mut host, viewport(), &mut StdRng::seed_from_u64(2))
            .unwrap();

        assert!(matches!(app.scene().get(app.light()), Some(Entity::PointLight(_))));
        assert!(matches!(app.scene().get(app.room()), Some(Entity::Mesh(_))));
        assert_eq!(app.boxes().len(), 100);
        for (i, id) in app.boxes().iter().enumerate() {
            let Some(Entity::Box(entity)) = app.scene().get(*id) else {
                panic!("{id:?} is not a box");
            };
            assert_eq!(entity.index, i);
        }
    }

    #[test]
    fn render_moves_to_rendered() {
        let mut host = Container::new("webgl");
        let mut app =
            CubeCloudApp::build_with_rng(&mut host, viewport(), &mut StdRng::seed_from_u64(3))
                .unwrap();
        app.render().unwrap();
        assert_eq!(app.stage(), Stage::Rendered);
        app.render().unwrap();
        assert_eq!(app.stage(), Stage::Rendered);
        assert_eq!(app.renderer().frames_rendered(), 2);
    }

    #[test]
    fn zero_viewport_fails_before_mounting() {
        let mut host = Container::new("webgl");
        let res = CubeCloudApp::build(
            &mut host,
            Viewport {
                width: 0,
                height: 0,
            },
        );
        assert!(res.is_err());
        assert!(host.children().is_empty());
    }
}
