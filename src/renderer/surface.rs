use std::path::Path;

use image::{Rgb, RgbImage};

use crate::{
    color::{self, Color},
    config::SurfaceConfig,
};

/// Drawable surface a frame ends up on, sized once at creation
#[derive(Debug)]
pub struct Surface {
    pub width: u32,
    pub height: u32,
    pub clear_color: Color,
    pub shadow_map_enabled: bool,
    pub frame: RgbImage,
    pub frames_presented: u32,
}

impl Surface {
    pub fn new(config: &SurfaceConfig) -> anyhow::Result<Self> {
        let SurfaceConfig {
            clear_color,
            width,
            height,
        } = *config;
        if width == 0 || height == 0 {
            anyhow::bail!("Cannot create a drawing surface of size {width}x{height}");
        }

        let mut surface = Self {
            width,
            height,
            clear_color: color::from_hex(clear_color),
            shadow_map_enabled: false,
            frame: RgbImage::new(width, height),
            frames_presented: 0,
        };
        surface.clear();
        Ok(surface)
    }

    pub fn clear(&mut self) {
        let clear = color::to_srgb8(self.clear_color);
        self.frame.pixels_mut().for_each(|p| *p = clear);
    }

    /// Replace the displayed frame
    pub fn present(&mut self, frame: RgbImage) -> anyhow::Result<()> {
        anyhow::ensure!(
            frame.dimensions() == self.dimensions(),
            "Frame of size {:?} does not fit a {}x{} surface",
            frame.dimensions(),
            self.width,
            self.height
        );
        self.frame = frame;
        self.frames_presented += 1;
        Ok(())
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb<u8>> {
        (x < self.width && y < self.height).then(|| *self.frame.get_pixel(x, y))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        self.frame.save(path)?;
        log::info!("Surface saved to {}", path.display());
        Ok(())
    }
}
