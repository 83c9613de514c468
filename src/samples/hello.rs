//! Text with a color changing every second.

use fastrand::Rng;
use miette::Result;
use rgb::RGBA8;

use crate::{assets::Font, color, random, Config, Context, Game};

/// Milliseconds between color changes.
const COLOR_CHANGE_MS: f32 = 1000.0;
/// Text shown.
const TEXT: &str = "Hello World!!";

/// Draws a greeting in the center of the window.
#[derive(Debug, Default)]
pub struct HelloWorld {
    /// Source of the colors.
    rng: Rng,
    /// Font the text is drawn with.
    font: Option<Font>,
    /// Current color of the text.
    text_color: RGBA8,
    /// Milliseconds since the last color change.
    elapsed_ms: f32,
}

impl HelloWorld {
    /// Use a fixed seed for the random colors.
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
        Config::default().with_title("Hello World")
    }

    /// Current color of the text.
    #[must_use]
    pub const fn text_color(&self) -> RGBA8 {
        self.text_color
    }
}

impl Game for HelloWorld {
    fn load(&mut self, ctx: Context) -> Result<()> {
        self.font = Some(ctx.font("font")?);
        self.text_color = color::WHITE;

        Ok(())
    }

    fn update(&mut self, ctx: Context) {
        self.elapsed_ms += ctx.delta_time() * 1000.0;

        if self.elapsed_ms >= COLOR_CHANGE_MS {
            // Restart the timer
            self.elapsed_ms = 0.0;

            self.text_color = random::random_color(&mut self.rng);
        }
    }

    fn render(&mut self, ctx: Context) {
        let Some(font) = &self.font else {
            return;
        };

        ctx.draw_text(font, TEXT)
            .centered_at(ctx.center())
            .color(self.text_color)
            .draw();
    }
}
