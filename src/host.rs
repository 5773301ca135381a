//! What the hosting environment hands to the app: a place to mount the drawable
//! surface and the size of the viewport.

use std::{cell::RefCell, fmt::Display, rc::Rc};

use crate::renderer::Surface;

/// Drawable surface, shared between its mount point and the renderer drawing on it
pub type SurfaceHandle = Rc<RefCell<Surface>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl std::str::FromStr for Viewport {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut split_it = s.split('x');
        let (Some(a), Some(b), None) = (split_it.next(), split_it.next(), split_it.next()) else {
            return Err(anyhow::anyhow!("Incorrect format, expected `width`x`height`"));
        };
        let width: u32 = a.trim().parse()?;
        let height: u32 = b.trim().parse()?;

        Ok(Viewport { width, height })
    }
}

impl Display for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}x{}", self.width, self.height))
    }
}

/// Mount point for drawable surfaces
#[derive(Debug)]
pub struct Container {
    id: String,
    children: Vec<SurfaceHandle>,
}

impl Container {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn append_child(&mut self, surface: SurfaceHandle) {
        log::debug!("Mounting a surface under `{}`", self.id);
        self.children.push(surface);
    }

    pub fn children(&self) -> &[SurfaceHandle] {
        &self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_viewport() {
        let v: Viewport = "1024x768".parse().unwrap();
        assert_eq!(
            v,
            Viewport {
                width: 1024,
                height: 768
            }
        );
        assert_eq!(v.to_string(), "1024x768");
    }

    #[test]
    fn reject_malformed_viewport() {
        assert!("1024".parse::<Viewport>().is_err());
        assert!("1024x".parse::<Viewport>().is_err());
        assert!("axb".parse::<Viewport>().is_err());
        assert!("1x2x3".parse::<Viewport>().is_err());
    }

    #[test]
    fn empty_container() {
        let container = Container::new("webgl");
        assert_eq!(container.id(), "webgl");
        assert!(container.children().is_empty());
    }
}
