//! Offline raytracing backend drawing a [SceneGraph] onto a [Surface].

mod bvh;
mod integrator;
mod surface;

pub use bvh::BVH;
pub use integrator::{Integrator, SceneView, WhittedIntegrator};
pub use surface::Surface;

use std::{cell::RefCell, rc::Rc};

use image::RgbImage;
use rand::distributions::{Distribution, Uniform};
use rayon::iter::{ParallelBridge, ParallelIterator};

use crate::{
    camera::PerspectiveCamera,
    color,
    config::{RenderConfig, SurfaceConfig},
    host::SurfaceHandle,
    math::vec::{RgbAsVec3Ext, Vec3, Vec3AsRgbExt},
    scene::SceneGraph,
    utils::timer::timed_scope_log,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RendererOptions {
    pub samples_per_pixel: u32,
    pub max_depth: u32,
}

impl From<&RenderConfig> for RendererOptions {
    fn from(config: &RenderConfig) -> Self {
        Self {
            samples_per_pixel: config.samples_per_pixel,
            max_depth: config.max_depth,
        }
    }
}

pub struct FrameRenderer {
    surface: SurfaceHandle,
    options: RendererOptions,
    integrator: Box<dyn Integrator>,
    frames_rendered: u32,
}

impl FrameRenderer {
    pub fn new(config: &SurfaceConfig, options: RendererOptions) -> anyhow::Result<Self> {
        let surface = Surface::new(config)?;
        log::info!(
            "Drawing surface ready: {}x{}, {} spp",
            surface.width,
            surface.height,
            options.samples_per_pixel
        );

        Ok(Self {
            surface: Rc::new(RefCell::new(surface)),
            options,
            integrator: Box::new(WhittedIntegrator {
                max_depth: options.max_depth,
            }),
            frames_rendered: 0,
        })
    }

    pub fn set_shadow_map_enabled(&mut self, enabled: bool) {
        self.surface.borrow_mut().shadow_map_enabled = enabled;
    }

    pub fn surface(&self) -> SurfaceHandle {
        self.surface.clone()
    }

    pub fn options(&self) -> RendererOptions {
        self.options
    }

    pub fn frames_rendered(&self) -> u32 {
        self.frames_rendered
    }

    /// Draw `scene` as seen by `camera` and present it on the surface.
    ///
    /// Neither the scene nor the camera are modified.
    pub fn render(&mut self, scene: &SceneGraph, camera: &PerspectiveCamera) -> anyhow::Result<()> {
        let (width, height, shadows, clear_color) = {
            let surface = self.surface.borrow();
            (
                surface.width,
                surface.height,
                surface.shadow_map_enabled,
                surface.clear_color,
            )
        };

        let view = SceneView {
            objects: BVH::new(scene.meshes().collect()),
            lights: scene.point_lights().copied().collect(),
            shadows,
            clear_color: clear_color.vec(),
        };

        let spp = self.options.samples_per_pixel.max(1);
        let integrator = &*self.integrator;
        let jitter = Uniform::new(0.0f32, 1.0);

        let mut frame = RgbImage::new(width, height);
        timed_scope_log("render", || {
            frame
                .enumerate_pixels_mut()
                .par_bridge()
                .for_each(|(x, y, p)| {
                    let mut rng = rand::thread_rng();
                    let mut sum = Vec3::ZERO;
                    for _ in 0..spp {
                        let (dx, dy) = if spp == 1 {
                            (0.5, 0.5)
                        } else {
                            (jitter.sample(&mut rng), jitter.sample(&mut rng))
                        };
                        // pixels in the image crate are from left to right, top to bottom
                        let vx = 2. * ((x as f32 + dx) / width as f32) - 1.;
                        let vy = 1. - 2. * ((y as f32 + dy) / height as f32);
                        sum += integrator.ray_cast(&view, camera.ray(vx, vy), 0);
                    }
                    *p = color::to_srgb8((sum / spp as f32).rgb());
                });
        });

        self.surface.borrow_mut().present(frame)?;
        self.frames_rendered += 1;
        Ok(())
    }
}
