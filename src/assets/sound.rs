//! Audio asset for playing sounds and music.

use std::time::Duration;

use kira::sound::static_sound::StaticSoundData;
use miette::Result;

use super::{
    loader::{ogg::OggLoader, wav::WavLoader},
    source::AssetSource,
    Id, Loadable,
};

/// Decoded audio, cheap to clone because the samples are reference counted.
#[derive(Debug, Clone)]
pub struct Sound {
    /// Decoded samples.
    data: StaticSoundData,
}

impl Sound {
    /// Length of the audio.
    #[inline]
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.data.duration()
    }

    /// Decoded samples for the mixer.
    #[inline]
    pub(crate) const fn data(&self) -> &StaticSoundData {
        &self.data
    }
}

impl Loadable for Sound {
    fn load_if_exists(id: &Id, source: &AssetSource) -> Result<Option<Self>> {
        // Prefer the compressed format
        let data = match source.load_if_exists::<OggLoader, _>(id)? {
            Some(data) => Some(data),
            None => source.load_if_exists::<WavLoader, _>(id)?,
        };

        Ok(data.map(|data| Self { data }))
    }
}
