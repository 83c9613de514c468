//! Create in-memory assets for running the samples without any files on disk.

use arcade_samples::{AssetSource, Config, Game, KeyCode, Runtime};

/// Horizontal pixels of a single flame frame.
pub const FLAME_FRAME_SIZE: u32 = 64;
/// Amount of flame frames in the atlas.
pub const FLAME_FRAMES: u32 = 12;
/// Length of the music in seconds.
pub const MUSIC_SECONDS: u32 = 10;

/// Encode an empty RGBA image.
pub fn png(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = Vec::new();

    {
        let mut encoder = png::Encoder::new(&mut bytes, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header().unwrap();
        writer
            .write_image_data(&vec![0; (width * height * 4) as usize])
            .unwrap();
    }

    bytes
}

/// Encode a silent mono 16-bit WAV file.
pub fn wav(seconds: u32) -> Vec<u8> {
    const SAMPLE_RATE: u32 = 8000;

    let data_size = SAMPLE_RATE * seconds * 2;

    let mut bytes = Vec::with_capacity(44 + data_size as usize);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_size).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");

    // Format chunk
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16_u32.to_le_bytes());
    // PCM
    bytes.extend_from_slice(&1_u16.to_le_bytes());
    // Channels
    bytes.extend_from_slice(&1_u16.to_le_bytes());
    bytes.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    // Byte rate
    bytes.extend_from_slice(&(SAMPLE_RATE * 2).to_le_bytes());
    // Block align
    bytes.extend_from_slice(&2_u16.to_le_bytes());
    // Bits per sample
    bytes.extend_from_slice(&16_u16.to_le_bytes());

    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_size.to_le_bytes());
    bytes.resize(bytes.len() + data_size as usize, 0);

    bytes
}

/// Every asset used by the samples.
pub fn asset_source() -> AssetSource {
    let atlas_toml = (0..FLAME_FRAMES)
        .map(|index| {
            format!(
                "[[frames]]\nname = \"flame\"\nindex = {index}\nx = {}\ny = 0\nwidth = {FLAME_FRAME_SIZE}\nheight = {FLAME_FRAME_SIZE}\n",
                index * FLAME_FRAME_SIZE
            )
        })
        .collect::<String>();

    AssetSource::new()
        .with_embedded_asset("ship", "png", png(48, 48))
        .with_embedded_asset("orange-lazer", "png", png(8, 24))
        .with_embedded_asset("laser", "png", png(8, 24))
        .with_embedded_asset("weapon-selection", "png", png(32, 32))
        .with_embedded_asset("gear", "png", png(128, 128))
        .with_embedded_asset("text", "png", png(84, 32))
        .with_embedded_asset("mascot", "png", png(128, 128))
        .with_embedded_asset(
            "atlas",
            "png",
            png(FLAME_FRAMES * FLAME_FRAME_SIZE, FLAME_FRAME_SIZE),
        )
        .with_embedded_asset("atlas", "toml", atlas_toml.into_bytes())
        // 94 glyphs from '!' to '~'
        .with_embedded_asset("font", "png", png(94 * 8, 12))
        .with_embedded_asset(
            "font",
            "toml",
            b"glyph_size = { width = 8, height = 12 }".as_slice(),
        )
        .with_embedded_asset("deep-consistency", "wav", wav(MUSIC_SECONDS))
}

/// Start a sample with all assets available.
pub fn start<G: Game>(game: G, config: Config) -> Runtime<G> {
    Runtime::new(game, asset_source(), config).unwrap()
}

/// Run a fixed amount of update ticks.
pub fn steps<G: Game>(runtime: &mut Runtime<G>, amount: usize) {
    for _ in 0..amount {
        runtime.step();
    }
}

/// Press and release a key, the release is seen by the second update tick.
pub fn tap<G: Game>(runtime: &mut Runtime<G>, key: KeyCode) {
    runtime.key_down(key);
    runtime.step();
    runtime.key_up(key);
    runtime.step();
}
