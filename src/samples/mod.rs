//! Sample games, each showing a single feature.
//!
//! Every sample has a `config()` function returning the window settings it's meant to run with.

mod atlas;
mod empty;
mod flight;
mod hello;
mod keyboard;
mod rotation;
mod sounds;
pub mod space_shooter;
mod text;
mod texture;

pub use self::{
    atlas::AtlasTextures,
    empty::EmptyProject,
    hello::HelloWorld,
    keyboard::{KeyboardInput, Laser},
    rotation::RotatingTextures,
    sounds::Sounds,
    space_shooter::SpaceShooter,
    text::RenderingText,
    texture::RenderingTextures,
};
