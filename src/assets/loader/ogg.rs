//! OGG asset loading.

use kira::sound::static_sound::StaticSoundData;
use miette::Result;

use super::Loader;
use crate::assets::Id;

/// OGG audio asset loader.
#[non_exhaustive]
pub struct OggLoader;

impl Loader<StaticSoundData> for OggLoader {
    const EXTENSION: &'static str = "ogg";

    #[inline]
    fn load(bytes: &[u8], id: &Id) -> Result<StaticSoundData> {
        super::decode_audio(bytes, id)
    }
}
