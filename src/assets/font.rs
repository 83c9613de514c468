//! Split a horizontal image of equal size glyphs into a font.

use glam::Vec2;
use miette::Result;
use serde::Deserialize;

use super::{loader::toml::TomlLoader, source::AssetSource, Id, Loadable, Texture};

/// Amount of glyphs a tab advances the cursor.
const TAB_WIDTH: f32 = 4.0;

/// Bitmap font, a texture with all glyphs next to each other.
///
/// Loaded from a PNG with a TOML file next to it:
///
/// ```toml
/// glyph_size = { width = 8, height = 12 }
/// first_char = "!"
/// last_char = "~"
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    /// Image with all glyphs.
    texture: Texture,
    /// Size of a single glyph.
    glyph_size: Vec2,
}

impl Font {
    /// Image with all glyphs.
    #[inline]
    #[must_use]
    pub const fn texture(&self) -> &Texture {
        &self.texture
    }

    /// Size of a single glyph.
    #[inline]
    #[must_use]
    pub const fn glyph_size(&self) -> Vec2 {
        self.glyph_size
    }

    /// Size of the text when drawn.
    ///
    /// The width is the width of the longest line.
    #[must_use]
    pub fn measure(&self, text: &str) -> Vec2 {
        if text.is_empty() {
            return Vec2::ZERO;
        }

        let mut width = 0.0_f32;
        self.walk(text, |position, advance| {
            width = width.max(position.x + advance);
        });

        let lines = text.chars().filter(|ch| *ch == '\n').count() + 1;

        Vec2::new(width, lines as f32 * self.glyph_size.y)
    }

    /// Move a cursor over the text, calling `visit` with the top-left and width of every character taking up space.
    fn walk(&self, text: &str, mut visit: impl FnMut(Vec2, f32)) {
        let Vec2 {
            x: glyph_width,
            y: glyph_height,
        } = self.glyph_size;

        // Put the start position back 1 glyph since the first action is to move the cursor
        let mut position = Vec2::new(-glyph_width, 0.0);

        for ch in text.chars() {
            // Move the cursor
            position.x += glyph_width;

            match ch {
                '\n' => {
                    position.x = -glyph_width;
                    position.y += glyph_height;
                }
                '\t' => {
                    visit(position, glyph_width * TAB_WIDTH);
                    position.x += glyph_width * (TAB_WIDTH - 1.0);
                }
                _ => visit(position, glyph_width),
            }
        }
    }
}

impl Loadable for Font {
    fn load_if_exists(id: &Id, source: &AssetSource) -> Result<Option<Self>> {
        // Load the base texture
        let Some(texture) = Texture::load_if_exists(id, source)? else {
            return Ok(None);
        };

        // Load the metadata
        let Some(FontMetadata {
            glyph_size,
            first_char,
            last_char,
        }) = source.load_if_exists::<TomlLoader, FontMetadata>(id)?
        else {
            miette::bail!("Font '{id}' is missing the TOML file describing its glyphs");
        };

        if glyph_size.width == 0 || glyph_size.height == 0 {
            miette::bail!("Font '{id}' has an empty glyph size");
        }
        if last_char < first_char {
            miette::bail!("Font '{id}' ends at '{last_char}' before it starts at '{first_char}'");
        }

        // The image must contain exactly one glyph per char
        let glyphs_in_image = texture.width() as u32 / u32::from(glyph_size.width);
        let glyphs_defined = last_char as u32 - first_char as u32 + 1;
        if glyphs_in_image != glyphs_defined {
            miette::bail!(
                "Font '{id}' not properly defined, image contains {glyphs_in_image} glyphs but '{first_char}'..='{last_char}' requires {glyphs_defined}"
            );
        }

        Ok(Some(Self {
            texture,
            glyph_size: Vec2::new(
                f32::from(glyph_size.width),
                f32::from(glyph_size.height),
            ),
        }))
    }
}

/// Font metadata to load from TOML.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct FontMetadata {
    /// Width and height of a single character.
    glyph_size: GlyphSize,
    /// First character in the image.
    #[serde(default = "FontMetadata::default_first_char")]
    first_char: char,
    /// Last character in the image.
    #[serde(default = "FontMetadata::default_last_char")]
    last_char: char,
}

impl FontMetadata {
    /// Default for the `first_char` field.
    #[inline]
    const fn default_first_char() -> char {
        '!'
    }

    /// Default for the `last_char` field.
    #[inline]
    const fn default_last_char() -> char {
        '~'
    }
}

/// Size of a glyph in the TOML.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct GlyphSize {
    /// Horizontal pixels.
    width: u16,
    /// Vertical pixels.
    height: u16,
}
