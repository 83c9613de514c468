//! Starting point for a new game.

use miette::Result;

use crate::{Config, Context, Game};

/// Game overriding every hook without doing anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyProject;

impl EmptyProject {
    /// Window settings.
    #[must_use]
    pub fn config() -> Config {
        Config::default().with_title("Empty Project")
    }
}

impl Game for EmptyProject {
    fn load(&mut self, _ctx: Context) -> Result<()> {
        Ok(())
    }

    fn update(&mut self, _ctx: Context) {}

    fn render(&mut self, _ctx: Context) {}

    fn resize(&mut self, _ctx: Context, _width: f32, _height: f32) {}

    fn unload(&mut self, _ctx: Context) {}
}
