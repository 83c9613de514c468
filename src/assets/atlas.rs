//! Multiple images packed into a single texture.

use miette::Result;
use serde::Deserialize;

use super::{loader::toml::TomlLoader, source::AssetSource, Id, Loadable, Texture};
use crate::math::Rect;

/// Texture containing named frames.
///
/// Loaded from a PNG with a TOML file next to it describing the frames:
///
/// ```toml
/// [[frames]]
/// name = "flame"
/// index = 0
/// x = 0
/// y = 0
/// width = 64
/// height = 128
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Atlas {
    /// Image with all frames.
    texture: Texture,
    /// All frames in the order they are described.
    frames: Vec<AtlasFrame>,
}

impl Atlas {
    /// Image with all frames.
    #[inline]
    #[must_use]
    pub const fn texture(&self) -> &Texture {
        &self.texture
    }

    /// All frames with a name, sorted by their index.
    ///
    /// # Errors
    ///
    /// - When no frame has the name.
    pub fn frames(&self, name: &str) -> Result<Vec<AtlasFrame>> {
        let mut frames = self
            .frames
            .iter()
            .filter(|frame| frame.name.as_str() == name)
            .cloned()
            .collect::<Vec<_>>();

        if frames.is_empty() {
            miette::bail!(
                "Atlas '{}' does not contain frames named '{name}'",
                self.texture.id()
            );
        }

        frames.sort_by_key(|frame| frame.index);

        Ok(frames)
    }
}

impl Loadable for Atlas {
    fn load_if_exists(id: &Id, source: &AssetSource) -> Result<Option<Self>> {
        let Some(texture) = Texture::load_if_exists(id, source)? else {
            return Ok(None);
        };

        let Some(metadata) = source.load_if_exists::<TomlLoader, AtlasMetadata>(id)? else {
            miette::bail!("Atlas '{id}' is missing the TOML file describing its frames");
        };

        let bounds = Rect::from_size(texture.width(), texture.height());
        let frames = metadata
            .frames
            .into_iter()
            .map(|frame| {
                let frame = AtlasFrame {
                    name: Id::from(frame.name),
                    index: frame.index,
                    bounds: Rect::new(
                        frame.x as f32,
                        frame.y as f32,
                        frame.width as f32,
                        frame.height as f32,
                    ),
                };

                if bounds.contains_rect(&frame.bounds) {
                    Ok(frame)
                } else {
                    Err(miette::miette!(
                        "Frame '{}' #{} of atlas '{id}' lies outside of the texture",
                        frame.name,
                        frame.index
                    ))
                }
            })
            .collect::<Result<Vec<_>>>()?;

        log::debug!("Loaded atlas '{id}' with {} frames", frames.len());

        Ok(Some(Self { texture, frames }))
    }
}

/// Region of a single frame in an [`Atlas`].
#[derive(Debug, Clone, PartialEq)]
pub struct AtlasFrame {
    /// Name shared by all frames of an animation.
    pub name: Id,
    /// Position in the animation.
    pub index: u32,
    /// Pixels of the frame in the atlas texture.
    pub bounds: Rect,
}

/// Atlas metadata to load from TOML.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct AtlasMetadata {
    /// All frames.
    frames: Vec<FrameMetadata>,
}

/// Single frame in the TOML.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct FrameMetadata {
    /// Name of the animation.
    name: String,
    /// Position in the animation.
    #[serde(default)]
    index: u32,
    /// Left edge.
    x: u32,
    /// Top edge.
    y: u32,
    /// Horizontal size.
    width: u32,
    /// Vertical size.
    height: u32,
}
