//! WAV asset loading.

use kira::sound::static_sound::StaticSoundData;
use miette::Result;

use super::Loader;
use crate::assets::Id;

/// WAV audio asset loader.
#[non_exhaustive]
pub struct WavLoader;

impl Loader<StaticSoundData> for WavLoader {
    const EXTENSION: &'static str = "wav";

    #[inline]
    fn load(bytes: &[u8], id: &Id) -> Result<StaticSoundData> {
        super::decode_audio(bytes, id)
    }
}
