//! Draw commands queued by [`crate::Game::render`].
//!
//! Nothing is rasterized here, every draw call becomes a [`DrawCommand`] in the [`crate::Frame`] returned by the runtime.
//! Commands on a higher layer are shown on top of lower layers, within a layer the last command drawn is on top.

use glam::Vec2;
use rgb::RGBA8;

use crate::{
    assets::{Font, Id, Texture},
    color,
    math::Rect,
    Context,
};

/// Mirror a texture when drawing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Flip {
    /// Draw as is.
    #[default]
    None,
    /// Mirror around the vertical axis.
    Horizontal,
}

/// Single queued draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Draw (a part of) an image.
    Texture(TextureCommand),
    /// Draw a string with a bitmap font.
    Text(TextCommand),
}

impl DrawCommand {
    /// Layer the command is drawn on.
    #[inline]
    #[must_use]
    pub const fn layer(&self) -> i32 {
        match self {
            Self::Texture(texture) => texture.layer,
            Self::Text(text) => text.layer,
        }
    }

    /// Inner texture command if this draws a texture.
    #[inline]
    #[must_use]
    pub const fn as_texture(&self) -> Option<&TextureCommand> {
        match self {
            Self::Texture(texture) => Some(texture),
            Self::Text(_) => None,
        }
    }

    /// Inner text command if this draws text.
    #[inline]
    #[must_use]
    pub const fn as_text(&self) -> Option<&TextCommand> {
        match self {
            Self::Text(text) => Some(text),
            Self::Texture(_) => None,
        }
    }
}

/// Draw (a part of) an image.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureCommand {
    /// Image to draw.
    pub texture: Id,
    /// Pixels of the image to draw, `None` draws the whole image.
    pub region: Option<Rect>,
    /// Center of the image on the screen.
    pub position: Vec2,
    /// Size multiplier.
    pub scale: f32,
    /// Clockwise rotation around the center in degrees.
    pub rotation: f32,
    /// Multiplied with every pixel, white keeps the image as is.
    pub tint: RGBA8,
    /// Mirroring.
    pub flip: Flip,
    /// Z-order.
    pub layer: i32,
}

impl TextureCommand {
    /// Size of the drawn image on the screen, ignoring rotation.
    #[inline]
    #[must_use]
    pub fn size(&self, texture: &Texture) -> Vec2 {
        self.region.map_or_else(|| texture.size(), |region| region.size()) * self.scale
    }
}

/// Draw a string with a bitmap font.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCommand {
    /// Font to draw the glyphs with.
    pub font: Id,
    /// Characters to draw.
    pub text: String,
    /// Top-left of the text on the screen.
    pub position: Vec2,
    /// Size of the text on the screen.
    pub size: Vec2,
    /// Color of the glyphs.
    pub color: RGBA8,
    /// Z-order.
    pub layer: i32,
}

/// Specify how a texture should be drawn.
///
/// Must call [`Self::draw`] to finish drawing.
///
/// Used by [`crate::Context::draw_texture`].
#[must_use = "the texture is only drawn after calling `draw`"]
pub struct TextureDraw<'ctx> {
    /// Reference to the context the texture will draw in when finished.
    ctx: &'ctx Context,
    /// Command being built.
    command: TextureCommand,
}

impl<'ctx> TextureDraw<'ctx> {
    /// Start drawing the whole texture, centered on the top-left of the screen.
    pub(crate) fn new(ctx: &'ctx Context, texture: &Texture) -> Self {
        let command = TextureCommand {
            texture: texture.id().clone(),
            region: None,
            position: Vec2::ZERO,
            scale: 1.0,
            rotation: 0.0,
            tint: color::WHITE,
            flip: Flip::None,
            layer: 0,
        };

        Self { ctx, command }
    }

    /// Move the center of the texture.
    ///
    /// # Arguments
    ///
    /// * `position` - Offset in pixels added to the current position.
    #[inline(always)]
    pub fn translate(mut self, position: impl Into<Vec2>) -> Self {
        self.command.position += position.into();

        self
    }

    /// Only draw a part of the texture.
    ///
    /// # Arguments
    ///
    /// * `region` - Pixels of the texture to draw.
    #[inline(always)]
    pub const fn region(mut self, region: Rect) -> Self {
        self.command.region = Some(region);

        self
    }

    /// Scale the texture around its center.
    #[inline(always)]
    pub fn scale(mut self, scale: f32) -> Self {
        self.command.scale *= scale;

        self
    }

    /// Rotate the texture around its center.
    ///
    /// # Arguments
    ///
    /// * `degrees` - Clockwise rotation added to the current rotation.
    #[inline(always)]
    pub fn rotate(mut self, degrees: f32) -> Self {
        self.command.rotation += degrees;

        self
    }

    /// Multiply every pixel with a color.
    #[inline(always)]
    pub const fn tint(mut self, tint: RGBA8) -> Self {
        self.command.tint = tint;

        self
    }

    /// Mirror the texture.
    #[inline(always)]
    pub const fn flip(mut self, flip: Flip) -> Self {
        self.command.flip = flip;

        self
    }

    /// Draw on a different layer.
    ///
    /// Higher layers are drawn on top of lower layers.
    #[inline(always)]
    pub const fn layer(mut self, layer: i32) -> Self {
        self.command.layer = layer;

        self
    }

    /// Draw the texture.
    ///
    /// Textures drawn last on the same layer are shown on top of textures drawn earlier.
    #[inline(always)]
    pub fn draw(self) {
        let Self { ctx, command } = self;

        ctx.write(|ctx| ctx.commands.push(DrawCommand::Texture(command)));
    }
}

/// Specify how text should be drawn.
///
/// Must call [`Self::draw`] to finish drawing.
///
/// Used by [`crate::Context::draw_text`].
#[must_use = "the text is only drawn after calling `draw`"]
pub struct TextDraw<'ctx> {
    /// Reference to the context the text will draw in when finished.
    ctx: &'ctx Context,
    /// Command being built.
    command: TextCommand,
}

impl<'ctx> TextDraw<'ctx> {
    /// Start drawing white text at the top-left of the screen.
    pub(crate) fn new(ctx: &'ctx Context, font: &Font, text: &str) -> Self {
        let command = TextCommand {
            font: font.texture().id().clone(),
            text: text.to_owned(),
            position: Vec2::ZERO,
            size: font.measure(text),
            color: color::WHITE,
            layer: 0,
        };

        Self { ctx, command }
    }

    /// Move the top-left of the text.
    ///
    /// # Arguments
    ///
    /// * `position` - Offset in pixels added to the current position.
    #[inline(always)]
    pub fn translate(mut self, position: impl Into<Vec2>) -> Self {
        self.command.position += position.into();

        self
    }

    /// Place the center of the text on a position.
    ///
    /// # Arguments
    ///
    /// * `center` - Absolute position in pixels.
    #[inline(always)]
    pub fn centered_at(mut self, center: impl Into<Vec2>) -> Self {
        self.command.position = center.into() - self.command.size / 2.0;

        self
    }

    /// Color of the glyphs.
    #[inline(always)]
    pub const fn color(mut self, color: RGBA8) -> Self {
        self.command.color = color;

        self
    }

    /// Draw on a different layer.
    ///
    /// Higher layers are drawn on top of lower layers.
    #[inline(always)]
    pub const fn layer(mut self, layer: i32) -> Self {
        self.command.layer = layer;

        self
    }

    /// Size the text takes on the screen.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> Vec2 {
        self.command.size
    }

    /// Draw the text.
    #[inline(always)]
    pub fn draw(self) {
        let Self { ctx, command } = self;

        ctx.write(|ctx| ctx.commands.push(DrawCommand::Text(command)));
    }
}
