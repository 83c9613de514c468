//! Draw the mascot.
//!
//! Input is replayed from `demos/scripts/rendering_textures.toml`, run with `RUST_LOG=debug` to follow along.

use arcade_samples::{samples::RenderingTextures, AssetSource, Game, Script};
use miette::Result;

fn main() -> Result<()> {
    let asset_source = AssetSource::from_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"));
    let script = Script::from_file(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/demos/scripts/rendering_textures.toml"
    ))?;

    let frame = RenderingTextures::default().replay(asset_source, RenderingTextures::config(), &script)?;

    log::info!(
        "Finished after {} update ticks with {} draw commands in the last frame",
        frame.ticks,
        frame.commands.len()
    );

    Ok(())
}
