pub mod app;
pub mod camera;
pub mod color;
pub mod config;
pub mod geometry;
pub mod host;
pub mod light;
pub mod material;
pub mod math;
pub mod placement;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod utils;

pub use app::{run, CubeCloudApp, Stage};
pub use config::Config;
pub use host::{Container, Viewport};
