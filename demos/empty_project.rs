//! Run the empty project for a second.
//!
//! Input is replayed from `demos/scripts/empty_project.toml`, run with `RUST_LOG=debug` to follow along.

use arcade_samples::{samples::EmptyProject, AssetSource, Game, Script};
use miette::Result;

fn main() -> Result<()> {
    let asset_source = AssetSource::from_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"));
    let script = Script::from_file(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/demos/scripts/empty_project.toml"
    ))?;

    let frame = EmptyProject::default().replay(asset_source, EmptyProject::config(), &script)?;

    log::info!(
        "Finished after {} update ticks with {} draw commands in the last frame",
        frame.ticks,
        frame.commands.len()
    );

    Ok(())
}
