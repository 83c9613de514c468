//! Text bouncing off the edges of the window.

use fastrand::Rng;
use glam::Vec2;
use miette::Result;
use rgb::RGBA8;

use crate::{assets::Font, color, random, Config, Context, Game};

/// Text bouncing around.
const TEXT: &str = "Hello World!";

/// Moves text diagonally, changing its color when it hits an edge.
#[derive(Debug)]
pub struct RenderingText {
    /// Source of the colors.
    rng: Rng,
    /// Font the text is drawn with.
    font: Option<Font>,
    /// Center of the text.
    position: Vec2,
    /// Pixels per second.
    velocity: Vec2,
    /// Current color of the text.
    text_color: RGBA8,
}

impl RenderingText {
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
        Config::default()
            .with_title("Render Text Guide")
            .with_buffer_size(800.0, 800.0)
    }

    /// Center of the text.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Pixels per second.
    #[must_use]
    pub const fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Current color of the text.
    #[must_use]
    pub const fn text_color(&self) -> RGBA8 {
        self.text_color
    }

    /// Bounce off every edge the text touches and move it back inside the window.
    fn process_collision(&mut self, window_size: Vec2) {
        let Some(font) = &self.font else {
            return;
        };

        let half_size = font.measure(TEXT) / 2.0;
        let top_left = self.position - half_size;
        let bottom_right = self.position + half_size;

        // Every edge hit flips and recolors on its own, hitting both sides cancels the flip
        if top_left.x <= 0.0 {
            self.bounce_x();
        }
        if top_left.y <= 0.0 {
            self.bounce_y();
        }
        if bottom_right.x >= window_size.x {
            self.bounce_x();
        }
        if bottom_right.y >= window_size.y {
            self.bounce_y();
        }

        // Push back by the amount it went past the edges
        if top_left.x <= 0.0 {
            self.position.x -= top_left.x;
        }
        if bottom_right.x >= window_size.x {
            self.position.x -= bottom_right.x - window_size.x;
        }
        if top_left.y <= 0.0 {
            self.position.y -= top_left.y;
        }
        if bottom_right.y >= window_size.y {
            self.position.y -= bottom_right.y - window_size.y;
        }
    }

    /// Reverse the horizontal direction with a new color.
    fn bounce_x(&mut self) {
        self.velocity.x = -self.velocity.x;
        self.text_color = random::random_color(&mut self.rng);
    }

    /// Reverse the vertical direction with a new color.
    fn bounce_y(&mut self) {
        self.velocity.y = -self.velocity.y;
        self.text_color = random::random_color(&mut self.rng);
    }
}

impl Default for RenderingText {
    fn default() -> Self {
        Self {
            rng: Rng::new(),
            font: None,
            position: Vec2::new(400.0, 400.0),
            velocity: Vec2::new(200.0, 200.0),
            text_color: color::WHITE,
        }
    }
}

impl Game for RenderingText {
    fn load(&mut self, ctx: Context) -> Result<()> {
        self.font = Some(ctx.font("font")?);

        Ok(())
    }

    fn update(&mut self, ctx: Context) {
        self.process_collision(ctx.size());

        self.position += self.velocity * ctx.delta_time();
    }

    fn render(&mut self, ctx: Context) {
        let Some(font) = &self.font else {
            return;
        };

        ctx.draw_text(font, TEXT)
            .centered_at(self.position)
            .color(self.text_color)
            .draw();
    }
}
