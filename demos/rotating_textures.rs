//! Spin the gear for a few seconds.
//!
//! Input is replayed from `demos/scripts/rotating_textures.toml`, run with `RUST_LOG=debug` to follow along.

use arcade_samples::{samples::RotatingTextures, AssetSource, Game, Script};
use miette::Result;

fn main() -> Result<()> {
    let asset_source = AssetSource::from_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"));
    let script = Script::from_file(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/demos/scripts/rotating_textures.toml"
    ))?;

    let frame = RotatingTextures::default().replay(asset_source, RotatingTextures::config(), &script)?;

    log::info!(
        "Finished after {} update ticks with {} draw commands in the last frame",
        frame.ticks,
        frame.commands.len()
    );

    Ok(())
}
