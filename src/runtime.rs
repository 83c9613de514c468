//! Headless game loop with a fixed update rate.

use std::time::Duration;

use glam::Vec2;
use miette::{Result, WrapErr};

use crate::{
    assets::source::AssetSource,
    graphics::{DrawCommand, TextCommand, TextureCommand},
    input::KeyCode,
    Config, Context, Game,
};

/// How many update calls a single render call may trigger.
///
/// Stops the game from freezing when updates take longer than the update delta time.
const MAX_UPDATE_CALLS_PER_RENDER: f32 = 20.0;

/// Everything drawn in a single render tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Draw commands sorted by layer, the order of commands on the same layer is kept.
    pub commands: Vec<DrawCommand>,
    /// Text in the title bar when the frame was rendered.
    pub title: String,
    /// Size of the drawable area.
    pub size: Vec2,
    /// Total amount of update ticks since the game started.
    pub ticks: u64,
}

impl Frame {
    /// All texture draw commands.
    pub fn textures(&self) -> impl Iterator<Item = &TextureCommand> {
        self.commands.iter().filter_map(DrawCommand::as_texture)
    }

    /// All text draw commands.
    pub fn texts(&self) -> impl Iterator<Item = &TextCommand> {
        self.commands.iter().filter_map(DrawCommand::as_text)
    }
}

/// Drives a game, normally the platform layer calls this from its event loop.
///
/// # Example
///
/// ```
/// use arcade_samples::{samples::EmptyProject, AssetSource, Config, KeyCode, Runtime};
///
/// # fn try_main() -> miette::Result<()> {
/// let mut runtime = Runtime::new(EmptyProject, AssetSource::new(), Config::default())?;
///
/// runtime.key_down(KeyCode::Space);
/// let frame = runtime.step();
/// assert_eq!(frame.ticks, 1);
///
/// runtime.shutdown();
/// # Ok(())
/// # }
/// # try_main().unwrap();
/// ```
pub struct Runtime<G: Game> {
    /// User game state.
    game: G,
    /// Context shared with every hook of the game.
    ctx: Context,
    /// Time not yet consumed by update ticks.
    accumulator: f32,
    /// Update ticks done.
    ticks: u64,
    /// Whether the game didn't ask to exit.
    running: bool,
}

impl<G: Game> Runtime<G> {
    /// Set up the context and load the game.
    ///
    /// # Errors
    ///
    /// - When the update delta time is not a positive amount of seconds.
    /// - When [`Game::load`] fails.
    pub fn new(mut game: G, asset_source: AssetSource, config: Config) -> Result<Self> {
        // A tick of zero seconds would never drain the accumulator
        if config.update_delta_time <= 0.0 || config.update_delta_time.is_nan() {
            miette::bail!(
                "Update delta time must be positive, got {}",
                config.update_delta_time
            );
        }

        log::info!(
            "Starting '{}' with a {}x{} window",
            config.title,
            config.buffer_width,
            config.buffer_height
        );

        let ctx = Context::new(config, asset_source);

        game.load(ctx.clone())
            .wrap_err("Error loading game content")?;

        log::debug!("Loaded {} assets", ctx.loaded_asset_count());

        Ok(Self {
            game,
            ctx,
            accumulator: 0.0,
            ticks: 0,
            running: true,
        })
    }

    /// Context the game receives in its hooks.
    #[inline]
    #[must_use]
    pub const fn context(&self) -> &Context {
        &self.ctx
    }

    /// Game state.
    #[inline]
    #[must_use]
    pub const fn game(&self) -> &G {
        &self.game
    }

    /// Mutable game state.
    #[inline]
    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    /// Whether the game hasn't asked to exit.
    #[inline]
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// A key went down.
    #[inline]
    pub fn key_down(&mut self, key: KeyCode) {
        self.ctx.write(|ctx| ctx.keyboard.handle_event(key, true));
    }

    /// A key went up.
    #[inline]
    pub fn key_up(&mut self, key: KeyCode) {
        self.ctx.write(|ctx| ctx.keyboard.handle_event(key, false));
    }

    /// The drawable area of the window changed.
    ///
    /// A size of zero means the window is minimized, nothing is rendered until it's restored.
    pub fn resize(&mut self, width: f32, height: f32) {
        log::debug!("Window resized to {width}x{height}");

        self.ctx.write(|ctx| ctx.size = Vec2::new(width, height));

        self.game.resize(self.ctx.clone(), width, height);
    }

    /// Run the update ticks that fit in the elapsed time and render once.
    ///
    /// # Arguments
    ///
    /// * `elapsed` - Wall clock time since the previous frame.
    pub fn frame(&mut self, elapsed: Duration) -> Frame {
        self.advance(elapsed.as_secs_f32())
    }

    /// Run exactly a single update tick and render once.
    pub fn step(&mut self) -> Frame {
        let update_delta_time = self.ctx.delta_time();

        self.advance(update_delta_time)
    }

    /// Unload the game, returning its final state.
    pub fn shutdown(mut self) -> G {
        log::info!("Shutting down after {} update ticks", self.ticks);

        self.game.unload(self.ctx.clone());

        self.game
    }

    /// Consume time in seconds with update ticks and render.
    pub(crate) fn advance(&mut self, frame_time: f32) -> Frame {
        let (update_delta_time, max_frame_time_secs) = self.ctx.read(|ctx| {
            (
                ctx.config.update_delta_time,
                ctx.config.max_frame_time_secs,
            )
        });

        // Time doesn't pass for a game that exited
        if !self.running {
            return self.render();
        }

        self.accumulator += frame_time
            // Ensure the update loop can't take forever
            .min(MAX_UPDATE_CALLS_PER_RENDER * update_delta_time)
            // Ensure the frametime will never surpass this amount
            .min(max_frame_time_secs);

        // Call the user update function with the context
        while self.running && self.accumulator >= update_delta_time {
            self.game.update(self.ctx.clone());

            // Mark this tick as executed
            self.accumulator -= update_delta_time;
            self.ticks += 1;

            self.running = self.ctx.write(|ctx| {
                // Update the input so pressed and released events can be handled
                ctx.keyboard.update();

                // Move the music forward
                ctx.mixer.advance(update_delta_time);

                !ctx.exit
            });
        }

        self.render()
    }

    /// Call the render hook and collect the queued draw commands.
    fn render(&mut self) -> Frame {
        // Only call render loop when the window is not minimized
        let not_minimized = self.ctx.size().cmpgt(Vec2::ZERO).all();
        if not_minimized {
            self.game.render(self.ctx.clone());
        }

        let ticks = self.ticks;
        self.ctx.write(|ctx| {
            let mut commands = std::mem::take(&mut ctx.commands);
            if !not_minimized {
                commands.clear();
            }

            // Stable so the draw order within a layer is kept
            commands.sort_by_key(DrawCommand::layer);

            Frame {
                commands,
                title: ctx.title.clone(),
                size: ctx.size,
                ticks,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::Runtime;
    use crate::{AssetSource, Config, Context, Game, KeyCode};

    /// Counts the hooks called.
    #[derive(Default)]
    struct Counter {
        updates: u32,
        renders: u32,
        space_released: u32,
    }

    impl Game for Counter {
        fn update(&mut self, ctx: Context) {
            self.updates += 1;

            if ctx.key_released(KeyCode::Space) {
                self.space_released += 1;
            }
            if ctx.key_released(KeyCode::Escape) {
                ctx.exit();
            }
        }

        fn render(&mut self, _ctx: Context) {
            self.renders += 1;
        }
    }

    fn runtime() -> Runtime<Counter> {
        Runtime::new(
            Counter::default(),
            AssetSource::new(),
            Config::default().with_update_delta_time(0.25),
        )
        .unwrap()
    }

    #[test]
    fn updates_follow_elapsed_time() {
        let mut runtime = runtime();

        let frame = runtime.frame(Duration::from_millis(1000));
        assert_eq!(frame.ticks, 1);

        // The remainder carries over
        runtime.frame(Duration::from_millis(100));
        runtime.frame(Duration::from_millis(200));
        assert_eq!(runtime.game().updates, 2);
        assert_eq!(runtime.game().renders, 3);
    }

    #[test]
    fn frame_time_is_clamped() {
        let mut runtime = Runtime::new(
            Counter::default(),
            AssetSource::new(),
            Config::default()
                .with_update_delta_time(0.01)
                .with_max_frame_time(1.0),
        )
        .unwrap();

        runtime.frame(Duration::from_secs(60));

        // At most twenty updates per render
        assert!(runtime.game().updates <= 20);
    }

    #[test]
    fn minimized_window_does_not_render() {
        let mut runtime = runtime();

        runtime.resize(0.0, 0.0);
        runtime.step();
        assert_eq!(runtime.game().renders, 0);
        assert_eq!(runtime.game().updates, 1);

        runtime.resize(100.0, 100.0);
        runtime.step();
        assert_eq!(runtime.game().renders, 1);
    }

    #[test]
    fn release_is_seen_for_a_single_tick() {
        let mut runtime = runtime();

        runtime.key_down(KeyCode::Space);
        runtime.step();
        runtime.key_up(KeyCode::Space);
        runtime.step();
        runtime.step();

        assert_eq!(runtime.game().space_released, 1);
    }

    #[test]
    fn exit_stops_updates() {
        let mut runtime = runtime();

        runtime.key_down(KeyCode::Escape);
        runtime.step();
        runtime.key_up(KeyCode::Escape);
        runtime.step();
        assert!(!runtime.is_running());

        runtime.step();
        assert_eq!(runtime.shutdown().updates, 2);
    }

    #[test]
    fn exited_game_does_not_accumulate_time() {
        let mut runtime = runtime();

        runtime.key_down(KeyCode::Escape);
        runtime.step();
        runtime.key_up(KeyCode::Escape);
        runtime.step();

        for _ in 0..10 {
            let frame = runtime.frame(Duration::from_millis(100));
            assert_eq!(frame.ticks, 2);
        }
        assert!(runtime.accumulator.abs() < f32::EPSILON);
        assert_eq!(runtime.game().renders, 12);
    }

    #[test]
    fn non_positive_update_rate_is_rejected() {
        for update_delta_time in [0.0, -1.0, f32::NAN] {
            assert!(Runtime::new(
                Counter::default(),
                AssetSource::new(),
                Config::default().with_update_delta_time(update_delta_time),
            )
            .is_err());
        }
    }
}
