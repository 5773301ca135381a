//! Parameter groups the scene is assembled from.
//!
//! Every group is a plain value built by [Config::new]; nothing here is shared
//! mutably and vectors are copied into the objects that use them.

use glam::Vec3;

use crate::{host::Viewport, material::Side};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    pub fov_y_deg: f32,
    /// Width over height of the viewport, fixed at construction
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub look_at: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceConfig {
    /// sRGB, `0xRRGGBB`
    pub clear_color: u32,
    pub width: u32,
    pub height: u32,
}

/// Appearance of the cubes of the cloud
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialConfig {
    pub color: u32,
    pub transparent: bool,
    pub side: Side,
    pub transmission: f32,
    pub roughness: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLightConfig {
    pub color: u32,
    pub intensity: f32,
    /// 0 means unbounded range
    pub distance: f32,
    pub decay: f32,
    pub position: Vec3,
    pub cast_shadow: bool,
}

/// Never added to the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLightConfig {
    pub color: u32,
    pub intensity: f32,
    pub position: Vec3,
}

/// Never added to the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLightConfig {
    pub color: u32,
    pub intensity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomConfig {
    pub size: f32,
    pub color: u32,
    pub side: Side,
    pub receive_shadow: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudConfig {
    pub count: usize,
    pub box_size: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    pub samples_per_pixel: u32,
    pub max_depth: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub camera: CameraConfig,
    pub surface: SurfaceConfig,
    pub material: MaterialConfig,
    pub point_light: PointLightConfig,
    pub directional_light: DirectionalLightConfig,
    pub ambient_light: AmbientLightConfig,
    pub room: RoomConfig,
    pub cloud: CloudConfig,
    pub render: RenderConfig,
}

impl Config {
    pub fn new(viewport: Viewport) -> Self {
        let Viewport { width, height } = viewport;

        Self {
            camera: CameraConfig {
                fov_y_deg: 100.0,
                aspect: width as f32 / height as f32,
                near: 0.1,
                far: 15.0,
                position: Vec3::new(0.0, 1.0, 0.0),
                look_at: Vec3::ZERO,
            },
            surface: SurfaceConfig {
                clear_color: 0x666666,
                width,
                height,
            },
            material: MaterialConfig {
                color: 0xffffff,
                transparent: true,
                side: Side::Double,
                transmission: 0.93,
                roughness: 0.1,
            },
            point_light: PointLightConfig {
                color: 0x779999,
                intensity: 10.0,
                distance: 0.0,
                decay: 2.5,
                position: Vec3::ZERO,
                cast_shadow: true,
            },
            directional_light: DirectionalLightConfig {
                color: 0xffffff,
                intensity: 1.0,
                position: Vec3::ONE,
            },
            ambient_light: AmbientLightConfig {
                color: 0xffffff,
                intensity: 0.1,
            },
            room: RoomConfig {
                size: 6.0,
                color: 0xffffff,
                side: Side::Back,
                receive_shadow: true,
            },
            cloud: CloudConfig {
                count: 100,
                box_size: 0.1,
            },
            render: RenderConfig {
                samples_per_pixel: 1,
                max_depth: 8,
            },
        }
    }
}
