#![forbid(unsafe_code)]

//! Small sample games showing how a game is put together from lifecycle hooks.
//!
//! Every sample is a single type implementing [`Game`], it loads its content in [`Game::load`], mutates its state in [`Game::update`] and queues draw commands in [`Game::render`].
//! Everything that would normally be done by an engine, rasterizing text, batching sprites on the GPU, decoding and mixing audio, is reached through the [`Context`].
//!
//! # Samples
//!
//! | Sample | Shows |
//! | --- | --- |
//! | [`samples::EmptyProject`] | All lifecycle hooks without any behavior. |
//! | [`samples::HelloWorld`] | Text with a color changing every second. |
//! | [`samples::AtlasTextures`] | Animating frames from a texture atlas. |
//! | [`samples::KeyboardInput`] | Moving a ship and firing pooled lasers with the keyboard. |
//! | [`samples::RenderingText`] | Text bouncing off the edges of the window. |
//! | [`samples::RenderingTextures`] | Drawing a single texture. |
//! | [`samples::RotatingTextures`] | Rotating a texture with a constant speed. |
//! | [`samples::Sounds`] | Music playback controls. |
//! | [`samples::SpaceShooter`] | A ship, its weapon and a weapon selection UI talking through signals. |
//!
//! # Running
//!
//! Games are driven by a [`Runtime`], a fixed timestep loop that feeds keyboard events into the context and collects a [`Frame`] of draw commands every time it renders.
//! The runtime is headless, a platform layer presenting the frames takes its place on a desktop.
//!
//! ```no_run
//! use arcade_samples::{samples::RotatingTextures, AssetSource, Game, Script};
//!
//! # fn try_main() -> miette::Result<()> {
//! // Simulate three seconds of the game
//! let script = Script::from_toml("duration = 3.0")?;
//!
//! RotatingTextures::default().replay(
//!     AssetSource::from_dir("assets"),
//!     RotatingTextures::config(),
//!     &script,
//! )?;
//! # Ok(())
//! # }
//! ```

pub mod assets;
pub mod audio;
pub mod color;
pub mod config;
pub mod context;
pub mod graphics;
pub mod input;
pub mod math;
pub mod pool;
pub mod random;
pub mod replay;
pub mod runtime;
pub mod samples;
pub mod signal;

pub use assets::source::AssetSource;
pub use config::Config;
pub use context::Context;
pub use glam::Vec2;
pub use input::KeyCode;
use miette::{Result, WrapErr};
pub use replay::Script;
pub use rgb::RGBA8;
pub use runtime::{Frame, Runtime};

/// Main entrypoint containing game state for running the game.
///
/// See [`Context`] for all functions interfacing with the platform from the hooks.
pub trait Game: Sized
where
    Self: 'static,
{
    /// Load the content of the game.
    ///
    /// Called once before the first update tick.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Game context, used to load assets.
    ///
    /// # Errors
    ///
    /// - When any of the content could not be loaded, this stops the game from starting.
    ///
    /// # Example
    ///
    /// ```
    /// use arcade_samples::{assets::Texture, Context, Game};
    ///
    /// #[derive(Default)]
    /// struct MyGame {
    ///     ship: Option<Texture>,
    /// }
    ///
    /// impl Game for MyGame {
    ///     fn load(&mut self, ctx: Context) -> miette::Result<()> {
    ///         self.ship = Some(ctx.texture("ship")?);
    ///
    ///         Ok(())
    ///     }
    ///
    ///     fn update(&mut self, ctx: Context) {
    ///         // ..
    ///     }
    ///
    ///     fn render(&mut self, ctx: Context) {
    ///         // ..
    ///     }
    /// }
    /// ```
    #[inline(always)]
    #[allow(unused_variables)]
    fn load(&mut self, ctx: Context) -> Result<()> {
        Ok(())
    }

    /// A single update tick in the game loop.
    ///
    /// Runs at the fixed rate of [`Config::update_delta_time`], independent of how often the game renders.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Game context, used to obtain input and mutate the window state.
    fn update(&mut self, ctx: Context);

    /// A single render tick in the game loop.
    ///
    /// Must only queue draw commands, mutating game state here makes it depend on the render rate.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Game context, used to queue draw commands.
    fn render(&mut self, ctx: Context);

    /// The drawable area of the window changed.
    ///
    /// Also called when the window is minimized, with a size of zero.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Game context, already reflecting the new size.
    /// * `width` - New width in pixels.
    /// * `height` - New height in pixels.
    #[inline(always)]
    #[allow(unused_variables)]
    fn resize(&mut self, ctx: Context, width: f32, height: f32) {}

    /// The game is shutting down.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Game context.
    #[inline(always)]
    #[allow(unused_variables)]
    fn unload(&mut self, ctx: Context) {}

    /// Run the game headless following a script of keyboard events.
    ///
    /// <div class="warning">
    ///
    /// Don't implement/override this method.
    ///
    /// </div>
    ///
    /// # Arguments
    ///
    /// * `asset_source` - Where the assets are loaded from.
    /// * `config` - Window size, title and update rate.
    /// * `script` - Timed keyboard events and the amount of time to simulate.
    ///
    /// # Returns
    ///
    /// - The last frame rendered.
    ///
    /// # Errors
    ///
    /// - When the game fails to load its content.
    /// - When the script doesn't render a single frame.
    fn replay(self, asset_source: AssetSource, config: Config, script: &Script) -> Result<Frame> {
        // The logger might already be set by the caller
        if env_logger::try_init().is_err() {
            log::debug!("Logger already initialized");
        }

        let mut runtime =
            Runtime::new(self, asset_source, config).wrap_err("Error starting game")?;

        let frame = script.play(&mut runtime);

        runtime.shutdown();

        frame
    }
}
