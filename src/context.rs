//! Main interface with the platform.

use std::{cell::RefCell, rc::Rc};

use glam::Vec2;
use miette::{Result, WrapErr};

use crate::{
    assets::{source::AssetSource, AssetManager, Atlas, Font, Sound, Texture},
    audio::{Mixer, Music},
    config::Config,
    graphics::{DrawCommand, TextDraw, TextureDraw},
    input::{KeyCode, Keyboard},
};

/// Context containing all functionality for interfacing with the platform.
///
/// Exposed in every hook of [`crate::Game`].
///
/// [`Context`] is safe and cheap to clone due to being a `Rc<RefCell<..>>` under the hood.
///
/// See [`crate::assets`] for how the asset IDs passed to the loading methods map to files.
#[derive(Clone)]
pub struct Context {
    /// Implementation of all non-primitive parts.
    inner: Rc<RefCell<ContextInner>>,
}

/// Window methods.
impl Context {
    /// Size of the drawable part of the window in pixels.
    ///
    /// Zero when the window is minimized.
    #[inline]
    #[must_use]
    pub fn size(&self) -> Vec2 {
        self.read(|ctx| ctx.size)
    }

    /// Width of the drawable part of the window in pixels.
    #[inline]
    #[must_use]
    pub fn width(&self) -> f32 {
        self.size().x
    }

    /// Height of the drawable part of the window in pixels.
    #[inline]
    #[must_use]
    pub fn height(&self) -> f32 {
        self.size().y
    }

    /// Center of the drawable part of the window.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.size() / 2.0
    }

    /// Text in the title bar of the window.
    #[inline]
    #[must_use]
    pub fn title(&self) -> String {
        self.read(|ctx| ctx.title.clone())
    }

    /// Change the text in the title bar of the window.
    #[inline]
    pub fn set_title(&self, title: impl Into<String>) {
        let title = title.into();

        self.write(|ctx| ctx.title = title);
    }

    /// Close the window after the current tick.
    #[inline]
    pub fn exit(&self) {
        log::debug!("Game requested exit");

        self.write(|ctx| ctx.exit = true);
    }
}

/// Game state methods.
impl Context {
    /// Get the delta time in seconds for the update tick.
    ///
    /// This is a constant set by [`Config::with_update_delta_time`].
    #[inline]
    #[must_use]
    pub fn delta_time(&self) -> f32 {
        self.read(|ctx| ctx.config.update_delta_time)
    }

    /// Amount of assets loaded and cached.
    #[inline]
    #[must_use]
    pub fn loaded_asset_count(&self) -> usize {
        self.read(|ctx| ctx.assets.len())
    }
}

/// Input methods.
impl Context {
    /// Whether the key went down since the previous update tick.
    #[inline]
    #[must_use]
    pub fn key_pressed(&self, key: KeyCode) -> bool {
        self.read(|ctx| ctx.keyboard.key_pressed(key))
    }

    /// Whether the key went up since the previous update tick.
    #[inline]
    #[must_use]
    pub fn key_released(&self, key: KeyCode) -> bool {
        self.read(|ctx| ctx.keyboard.key_released(key))
    }

    /// Whether the key is being held down.
    #[inline]
    #[must_use]
    pub fn key_held(&self, key: KeyCode) -> bool {
        self.read(|ctx| ctx.keyboard.key_held(key))
    }
}

/// Asset methods.
impl Context {
    /// Load a PNG image.
    ///
    /// Cached after the first load.
    ///
    /// # Errors
    ///
    /// - When the image doesn't exist or is not a valid PNG.
    #[inline]
    pub fn texture(&self, id: &str) -> Result<Texture> {
        self.write(|ctx| ctx.assets.get_or_load(id))
            .wrap_err_with(|| format!("Error loading texture '{id}'"))
    }

    /// Load a PNG image with a TOML file describing its frames.
    ///
    /// Cached after the first load.
    ///
    /// # Errors
    ///
    /// - When either file doesn't exist or one of the frames falls outside of the image.
    #[inline]
    pub fn atlas(&self, id: &str) -> Result<Atlas> {
        self.write(|ctx| ctx.assets.get_or_load(id))
            .wrap_err_with(|| format!("Error loading texture atlas '{id}'"))
    }

    /// Load a PNG image of glyphs with a TOML file describing them.
    ///
    /// Cached after the first load.
    ///
    /// # Errors
    ///
    /// - When either file doesn't exist or the glyphs don't match the image.
    #[inline]
    pub fn font(&self, id: &str) -> Result<Font> {
        self.write(|ctx| ctx.assets.get_or_load(id))
            .wrap_err_with(|| format!("Error loading font '{id}'"))
    }

    /// Load an OGG or WAV file as music with playback controls.
    ///
    /// The decoded audio is cached, every call returns a new independent handle.
    ///
    /// # Errors
    ///
    /// - When neither file exists or the audio can't be decoded.
    #[inline]
    pub fn music(&self, id: &str) -> Result<Music> {
        self.write(|ctx| {
            let sound = ctx.assets.get_or_load::<Sound>(id)?;

            Ok::<_, miette::Report>(ctx.mixer.music(sound))
        })
        .wrap_err_with(|| format!("Error loading music '{id}'"))
    }
}

/// Render methods.
impl Context {
    /// Handle to draw a texture.
    ///
    /// # Example
    ///
    /// ```
    /// use arcade_samples::{assets::Texture, Context};
    ///
    /// # fn render(ctx: Context, gear: &Texture) {
    /// // Draw the gear at the center of the window, rotated a quarter clockwise
    /// ctx.draw_texture(gear)
    ///     .translate(ctx.center())
    ///     .rotate(90.0)
    ///     .draw();
    /// # }
    /// ```
    #[inline(always)]
    pub fn draw_texture<'ctx>(&'ctx self, texture: &Texture) -> TextureDraw<'ctx> {
        TextureDraw::new(self, texture)
    }

    /// Handle to draw text.
    ///
    /// # Example
    ///
    /// ```
    /// use arcade_samples::{assets::Font, color, Context};
    ///
    /// # fn render(ctx: Context, font: &Font) {
    /// ctx.draw_text(font, "Hello World!!")
    ///     .centered_at(ctx.center())
    ///     .color(color::ORANGE)
    ///     .draw();
    /// # }
    /// ```
    #[inline(always)]
    pub fn draw_text<'ctx>(&'ctx self, font: &Font, text: &str) -> TextDraw<'ctx> {
        TextDraw::new(self, font, text)
    }
}

/// Internally used methods.
impl Context {
    /// Create a new context with an empty asset cache.
    pub(crate) fn new(config: Config, asset_source: AssetSource) -> Self {
        // Setup the inner context
        let context_inner = ContextInner::new(config, asset_source);

        // Wrap in a reference counted refcell so it can safely be passed to any of the user functions
        let inner = Rc::new(RefCell::new(context_inner));

        Self { inner }
    }

    /// Get a read-only reference to the inner struct.
    ///
    /// # Panics
    ///
    /// - When the inner struct is already mutably borrowed.
    #[inline]
    pub(crate) fn read<R>(&self, reader: impl FnOnce(&ContextInner) -> R) -> R {
        reader(&self.inner.borrow())
    }

    /// Get a mutable reference to the inner struct.
    ///
    /// # Panics
    ///
    /// - When the inner struct is already borrowed.
    #[inline]
    pub(crate) fn write<R>(&self, writer: impl FnOnce(&mut ContextInner) -> R) -> R {
        writer(&mut self.inner.borrow_mut())
    }
}

/// Internal wrapped implementation for [`Context`].
pub(crate) struct ContextInner {
    /// User supplied game configuration.
    pub(crate) config: Config,
    /// Drawable part of the window.
    pub(crate) size: Vec2,
    /// Text in the title bar.
    pub(crate) title: String,
    /// Draw calls of the current render tick.
    pub(crate) commands: Vec<DrawCommand>,
    /// Keyboard state.
    pub(crate) keyboard: Keyboard,
    /// Audio mixer.
    pub(crate) mixer: Mixer,
    /// Set when the game asks to close.
    pub(crate) exit: bool,
    /// Loaded assets.
    assets: AssetManager,
}

impl ContextInner {
    /// Initialize the inner context.
    fn new(config: Config, asset_source: AssetSource) -> Self {
        let size = Vec2::new(config.buffer_width, config.buffer_height);
        let title = config.title.clone();
        let commands = Vec::new();
        let keyboard = Keyboard::default();
        let mixer = Mixer::new();
        let exit = false;
        let assets = AssetManager::new(asset_source);

        Self {
            config,
            size,
            title,
            commands,
            keyboard,
            mixer,
            exit,
            assets,
        }
    }
}
