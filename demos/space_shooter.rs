//! Fire every weapon of the space shooter.
//!
//! Input is replayed from `demos/scripts/space_shooter.toml`, run with `RUST_LOG=debug` to follow along.

use arcade_samples::{samples::SpaceShooter, AssetSource, Game, Script};
use miette::Result;

fn main() -> Result<()> {
    let asset_source = AssetSource::from_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"));
    let script = Script::from_file(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/demos/scripts/space_shooter.toml"
    ))?;

    let frame = SpaceShooter::default().replay(asset_source, SpaceShooter::config(), &script)?;

    let bullets = frame
        .textures()
        .filter(|texture| texture.texture == "laser")
        .count();
    log::info!("{bullets} bullets and weapon icons on screen at the end");

    Ok(())
}
