//! Animating a flame with frames from a texture atlas.

use fastrand::Rng;
use miette::{Result, WrapErr};

use crate::{
    assets::{Atlas, AtlasFrame},
    color,
    graphics::Flip,
    random, Config, Context, Game,
};

/// Milliseconds each frame is shown.
const FRAME_TIME_MS: f32 = 124.0;
/// First frame after the flame has grown to its full size.
const FULL_SIZE_FRAME: usize = 8;
/// Size multiplier of the drawn frame.
const SCALE: f32 = 0.25;

/// Plays the growing flame animation, then loops the frames of the full size flame.
#[derive(Debug, Default)]
pub struct AtlasTextures {
    /// Chooses the flipping.
    rng: Rng,
    /// Image with all frames.
    atlas: Option<Atlas>,
    /// Flame frames ordered by index.
    frames: Vec<AtlasFrame>,
    /// Milliseconds since the last frame change.
    elapsed_ms: f32,
    /// Index into the frames.
    current_frame: usize,
    /// Whether the growing part of the animation is done.
    is_full_size: bool,
    /// Mirroring of the current frame.
    flip: Flip,
}

impl AtlasTextures {
    /// Use a fixed seed for the random flipping.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Rng::with_seed(seed),
            ..Self::default()
        }
    }

    /// Window settings.
    #[must_use]
    pub fn config() -> Config {
        Config::default()
            .with_title("Atlas Textures")
            .with_buffer_size(500.0, 500.0)
    }

    /// Index of the frame shown.
    #[must_use]
    pub const fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Whether the flame reached its full size.
    #[must_use]
    pub const fn is_full_size(&self) -> bool {
        self.is_full_size
    }

    /// Move to the next frame.
    fn next_frame(&mut self) {
        if self.current_frame >= FULL_SIZE_FRAME {
            self.is_full_size = true;
        }

        // Loop the full size flame without growing again
        let start_frame = if self.is_full_size { FULL_SIZE_FRAME } else { 0 };

        self.current_frame = if self.current_frame + 1 >= self.frames.len() {
            start_frame
        } else {
            self.current_frame + 1
        };

        self.flip = if random::coin_flip(&mut self.rng) {
            Flip::Horizontal
        } else {
            Flip::None
        };
    }
}

impl Game for AtlasTextures {
    fn load(&mut self, ctx: Context) -> Result<()> {
        let atlas = ctx.atlas("atlas")?;
        self.frames = atlas
            .frames("flame")
            .wrap_err("Atlas is missing the flame animation")?;
        self.atlas = Some(atlas);

        log::debug!("Loaded {} flame frames", self.frames.len());

        Ok(())
    }

    fn update(&mut self, ctx: Context) {
        self.elapsed_ms += ctx.delta_time() * 1000.0;

        if self.elapsed_ms >= FRAME_TIME_MS {
            self.next_frame();

            self.elapsed_ms = 0.0;
        }
    }

    fn render(&mut self, ctx: Context) {
        let (Some(atlas), Some(frame)) = (&self.atlas, self.frames.get(self.current_frame)) else {
            return;
        };

        ctx.draw_texture(atlas.texture())
            .region(frame.bounds)
            .translate(ctx.center())
            .scale(SCALE)
            .tint(color::WHITE)
            .flip(self.flip)
            .layer(1)
            .draw();
    }
}
