//! Rotating a texture with a constant speed.

use miette::Result;

use crate::{assets::Texture, Config, Context, Game};

/// Degrees per second.
const ANGULAR_SPEED: f32 = 50.0;

/// Spins a gear with a label on top of it.
#[derive(Debug, Default)]
pub struct RotatingTextures {
    /// Image rotated.
    gear: Option<Texture>,
    /// Label drawn over the gear.
    text: Option<Texture>,
    /// Current rotation in degrees.
    angle: f32,
}

impl RotatingTextures {
    /// Window settings.
    #[must_use]
    pub fn config() -> Config {
        Config::default().with_title("Rotating Textures")
    }

    /// Current rotation in degrees.
    #[must_use]
    pub const fn angle(&self) -> f32 {
        self.angle
    }
}

impl Game for RotatingTextures {
    fn load(&mut self, ctx: Context) -> Result<()> {
        self.text = Some(ctx.texture("text")?);
        self.gear = Some(ctx.texture("gear")?);

        Ok(())
    }

    fn update(&mut self, ctx: Context) {
        self.angle += ANGULAR_SPEED * ctx.delta_time();
    }

    fn render(&mut self, ctx: Context) {
        let (Some(gear), Some(text)) = (&self.gear, &self.text) else {
            return;
        };

        let center = ctx.center();

        ctx.draw_texture(gear)
            .translate(center)
            .rotate(self.angle)
            .draw();

        // Label always stays on top
        ctx.draw_texture(text).translate(center).layer(2).draw();
    }
}
