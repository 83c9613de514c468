//! Image asset drawn by the platform.

use glam::Vec2;
use miette::Result;

use super::{loader::png::PngLoader, source::AssetSource, Id, Loadable};

/// Reference to a loaded image and its size in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    /// ID the image was loaded from, the platform resolves the pixels with it.
    id: Id,
    /// Horizontal pixels.
    width: f32,
    /// Vertical pixels.
    height: f32,
}

impl Texture {
    /// Describe an image that's already known to the platform.
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<Id>, width: f32, height: f32) -> Self {
        Self {
            id: id.into(),
            width,
            height,
        }
    }

    /// ID of the image.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> &Id {
        &self.id
    }

    /// Horizontal pixels.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Vertical pixels.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// Size in pixels.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

impl Loadable for Texture {
    #[inline]
    fn load_if_exists(id: &Id, source: &AssetSource) -> Result<Option<Self>> {
        let Some((width, height)) = source.load_if_exists::<PngLoader, _>(id)? else {
            return Ok(None);
        };

        Ok(Some(Self::new(id.clone(), width as f32, height as f32)))
    }
}
