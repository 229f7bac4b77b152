//! Icon registry
//!
//! Maps symbolic icon names to opaque image handles. Hosts own the pixels;
//! apps only need a handle to draw and a size to hit-test.

use crate::error::{CoreError, Result};
use crate::types::Vec2;
use std::collections::HashMap;

/// Name of the exit hot-corner icon
pub const CROSS_ICON: &str = "cross";

/// Opaque handle to an image registered with the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(usize);

/// Registered images and their sizes
#[derive(Debug, Clone, Default)]
pub struct Assets {
    sizes: Vec<Vec2>,
    names: HashMap<String, ImageId>,
}

impl Assets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in watch icons
    pub fn watch_default() -> Self {
        let mut assets = Self::new();
        assets.register(CROSS_ICON, Vec2::new(16.0, 16.0));
        assets
    }

    /// Register an image under `name`, replacing any previous binding
    pub fn register(&mut self, name: &str, size: Vec2) -> ImageId {
        let id = ImageId(self.sizes.len());
        self.sizes.push(size);
        self.names.insert(name.to_string(), id);
        id
    }

    pub fn icon(&self, name: &str) -> Result<ImageId> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| CoreError::UnknownIcon(name.to_string()))
    }

    pub fn image_size(&self, image: ImageId) -> Option<Vec2> {
        self.sizes.get(image.0).copied()
    }
}
