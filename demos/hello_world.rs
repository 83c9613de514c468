//! Show the greeting long enough to see the color change a few times.
//!
//! Input is replayed from `demos/scripts/hello_world.toml`, run with `RUST_LOG=debug` to follow along.

use arcade_samples::{samples::HelloWorld, AssetSource, Game, Script};
use miette::Result;

fn main() -> Result<()> {
    let asset_source = AssetSource::from_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"));
    let script = Script::from_file(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/demos/scripts/hello_world.toml"
    ))?;

    let frame = HelloWorld::default().replay(asset_source, HelloWorld::config(), &script)?;

    log::info!(
        "Finished after {} update ticks with {} draw commands in the last frame",
        frame.ticks,
        frame.commands.len()
    );

    Ok(())
}
