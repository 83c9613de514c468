//! Play the flame animation until it loops at full size.
//!
//! Input is replayed from `demos/scripts/atlas_textures.toml`, run with `RUST_LOG=debug` to follow along.

use arcade_samples::{samples::AtlasTextures, AssetSource, Game, Script};
use miette::Result;

fn main() -> Result<()> {
    let asset_source = AssetSource::from_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"));
    let script = Script::from_file(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/demos/scripts/atlas_textures.toml"
    ))?;

    let frame = AtlasTextures::default().replay(asset_source, AtlasTextures::config(), &script)?;

    log::info!(
        "Finished after {} update ticks with {} draw commands in the last frame",
        frame.ticks,
        frame.commands.len()
    );

    Ok(())
}
