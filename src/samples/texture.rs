//! Drawing a single texture.

use miette::Result;

use crate::{assets::Texture, Config, Context, Game};

/// Draws the mascot in the center of the window.
#[derive(Debug, Default)]
pub struct RenderingTextures {
    /// Image drawn.
    mascot: Option<Texture>,
}

impl RenderingTextures {
    /// Window settings.
    #[must_use]
    pub fn config() -> Config {
        Config::default().with_title("Render Textures")
    }
}

impl Game for RenderingTextures {
    fn load(&mut self, ctx: Context) -> Result<()> {
        self.mascot = Some(ctx.texture("mascot")?);

        Ok(())
    }

    fn update(&mut self, _ctx: Context) {}

    fn render(&mut self, ctx: Context) {
        if let Some(mascot) = &self.mascot {
            ctx.draw_texture(mascot).translate(ctx.center()).draw();
        }
    }
}
