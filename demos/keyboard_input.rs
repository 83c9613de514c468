//! Fly the ship around while firing lasers.
//!
//! Input is replayed from `demos/scripts/keyboard_input.toml`, run with `RUST_LOG=debug` to follow along.

use arcade_samples::{samples::KeyboardInput, AssetSource, Game, Script};
use miette::Result;

fn main() -> Result<()> {
    let asset_source = AssetSource::from_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"));
    let script = Script::from_file(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/demos/scripts/keyboard_input.toml"
    ))?;

    let frame = KeyboardInput::default().replay(asset_source, KeyboardInput::config(), &script)?;

    log::info!(
        "Finished after {} update ticks with {} draw commands in the last frame",
        frame.ticks,
        frame.commands.len()
    );

    Ok(())
}
