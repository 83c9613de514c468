//! Play, seek and pause the music.
//!
//! Input is replayed from `demos/scripts/sounds.toml`, run with `RUST_LOG=debug` to follow along.

use arcade_samples::{samples::Sounds, AssetSource, Game, Script};
use miette::Result;

fn main() -> Result<()> {
    let asset_source = AssetSource::from_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"));
    let script = Script::from_file(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/demos/scripts/sounds.toml"
    ))?;

    let frame = Sounds::default().replay(asset_source, Sounds::config(), &script)?;

    // The title shows where the music ended up
    log::info!("{}", frame.title);

    Ok(())
}
