//! Asset loader helpers.

pub mod ogg;
pub mod png;
pub mod toml;
pub mod wav;

use std::io::Cursor;

use kira::sound::static_sound::StaticSoundData;
use miette::Result;

use super::Id;

/// How an asset should be loaded from the bytes of a single file.
pub trait Loader<T> {
    /// Extension for the file that this loader loads.
    const EXTENSION: &'static str;

    /// Load an asset from raw bytes.
    ///
    /// # Arguments
    ///
    /// * `bytes` - Contents of the file.
    /// * `id` - ID of the asset, used for error messages.
    ///
    /// # Errors
    ///
    /// - When anything went wrong with parsing the asset.
    fn load(bytes: &[u8], id: &Id) -> Result<T>;
}

/// Decode any audio file format kira supports.
///
/// # Errors
///
/// - When the bytes are not a supported audio file.
pub(crate) fn decode_audio(bytes: &[u8], id: &Id) -> Result<StaticSoundData> {
    // Allocate the bytes into a cursor
    let bytes = Cursor::new(bytes.to_vec());

    // Parse the sound file
    StaticSoundData::from_cursor(bytes)
        .map_err(|err| miette::miette!("Error decoding audio of asset '{id}': {err}"))
}
