//! Play sounds and music files.
//!
//! Sounds are mixed by kira, with the `audio-device` feature on the default output device of the machine, otherwise on kira's mock backend that never opens a device.
//! The transport of music, whether it's playing and where it is, is tracked by the mixer itself so it behaves the same with or without a device.

use std::{
    cell::RefCell,
    fmt::{Debug, Formatter},
    rc::{Rc, Weak},
    time::Duration,
};

use kira::{
    manager::{backend::DefaultBackend, AudioManager, AudioManagerSettings},
    sound::static_sound::StaticSoundHandle,
    tween::Tween,
};
use smallvec::SmallVec;

use crate::assets::Sound;

/// Shared audio manager.
type Manager = Rc<RefCell<AudioManager<DefaultBackend>>>;

/// Whether music is audible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// At the start, not playing.
    Stopped,
    /// Moving forward.
    Playing,
    /// Halted somewhere, resumes from there.
    Paused,
}

/// Mixes all sounds of the game.
pub(crate) struct Mixer {
    /// Audio manager, `None` when it could not be started.
    manager: Option<Manager>,
    /// Transport of every music handle given out.
    tracks: SmallVec<[Weak<RefCell<Track>>; 4]>,
}

impl Mixer {
    /// Start the audio backend.
    ///
    /// Failing to start it is not fatal, the game continues without sound.
    pub(crate) fn new() -> Self {
        let manager = match AudioManager::<DefaultBackend>::new(AudioManagerSettings::default()) {
            Ok(manager) => Some(Rc::new(RefCell::new(manager))),
            Err(err) => {
                log::warn!("Error setting up audio manager, continuing without sound: {err:?}");

                None
            }
        };
        let tracks = SmallVec::new();

        Self { manager, tracks }
    }

    /// Create a music handle, stopped at the start.
    pub(crate) fn music(&mut self, sound: Sound) -> Music {
        let track = Rc::new(RefCell::new(Track {
            duration: sound.duration().as_secs_f64(),
            sound,
            state: PlaybackState::Stopped,
            position: 0.0,
            handle: None,
            manager: self.manager.clone(),
        }));

        self.tracks.push(Rc::downgrade(&track));

        Music { track }
    }

    /// Move the transport of every playing track forward.
    pub(crate) fn advance(&mut self, delta_time: f32) {
        // Forget tracks of music that has been dropped
        self.tracks.retain(|track| track.strong_count() > 0);

        self.tracks
            .iter()
            .filter_map(Weak::upgrade)
            .for_each(|track| track.borrow_mut().advance(f64::from(delta_time)));
    }
}

/// Transport state of a single piece of music.
struct Track {
    /// Audio played.
    sound: Sound,
    /// Length in seconds.
    duration: f64,
    /// Whether it's playing.
    state: PlaybackState,
    /// Seconds from the start.
    position: f64,
    /// Sound playing on the manager, `None` when stopped.
    handle: Option<StaticSoundHandle>,
    /// Manager to play the sound on.
    manager: Option<Manager>,
}

impl Track {
    /// Start playing from the current position.
    fn play(&mut self) {
        match (self.state, &mut self.handle) {
            (PlaybackState::Playing, _) => return,
            (PlaybackState::Paused, Some(handle)) => handle.resume(Tween::default()),
            _ => self.handle = self.start_sound(),
        }

        self.state = PlaybackState::Playing;
    }

    /// Halt at the current position.
    fn pause(&mut self) {
        if self.state != PlaybackState::Playing {
            return;
        }

        if let Some(handle) = &mut self.handle {
            handle.pause(Tween::default());
        }

        self.state = PlaybackState::Paused;
    }

    /// Stop and rewind to the start.
    fn reset(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.stop(Tween::default());
        }

        self.state = PlaybackState::Stopped;
        self.position = 0.0;
    }

    /// Move the position, clamped to the length.
    fn seek_by(&mut self, seconds: f64) {
        self.position = (self.position + seconds).clamp(0.0, self.duration);

        if let Some(handle) = &mut self.handle {
            handle.seek_to(self.position);
        }
    }

    /// Move the clock forward when playing.
    fn advance(&mut self, seconds: f64) {
        if self.state != PlaybackState::Playing {
            return;
        }

        self.position += seconds;

        // Reaching the end stops the music
        if self.position >= self.duration {
            log::debug!("Music reached the end after {:.1} seconds", self.duration);

            self.reset();
        }
    }

    /// Play the sound on the manager from the current position.
    fn start_sound(&self) -> Option<StaticSoundHandle> {
        let manager = self.manager.as_ref()?;

        let sound_data = self.sound.data().clone();
        match manager.borrow_mut().play(sound_data) {
            Ok(mut handle) => {
                handle.seek_to(self.position);

                Some(handle)
            }
            Err(err) => {
                log::warn!("Error playing music: {err:?}");

                None
            }
        }
    }
}

/// Handle to a piece of music with transport controls.
///
/// Created by [`crate::Context::music`].
pub struct Music {
    /// Shared with the mixer, which moves the position forward.
    track: Rc<RefCell<Track>>,
}

impl Music {
    /// Whether the music is playing, paused or stopped.
    #[inline]
    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.track.borrow().state
    }

    /// Time from the start.
    #[inline]
    #[must_use]
    pub fn position(&self) -> Duration {
        Duration::from_secs_f64(self.track.borrow().position)
    }

    /// Length of the music.
    #[inline]
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.track.borrow().duration)
    }

    /// Start playing from the current position.
    ///
    /// Does nothing when already playing.
    #[inline]
    pub fn play(&mut self) {
        self.track.borrow_mut().play();
    }

    /// Halt at the current position.
    ///
    /// Does nothing when not playing.
    #[inline]
    pub fn pause(&mut self) {
        self.track.borrow_mut().pause();
    }

    /// Stop playing and go back to the start.
    #[inline]
    pub fn reset(&mut self) {
        self.track.borrow_mut().reset();
    }

    /// Move the position back, stopping at the start.
    #[inline]
    pub fn rewind(&mut self, seconds: f64) {
        self.track.borrow_mut().seek_by(-seconds);
    }

    /// Move the position forward, stopping at the end.
    #[inline]
    pub fn fast_forward(&mut self, seconds: f64) {
        self.track.borrow_mut().seek_by(seconds);
    }
}

impl Debug for Music {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let track = self.track.borrow();

        f.debug_struct("Music")
            .field("state", &track.state)
            .field("position", &track.position)
            .field("duration", &track.duration)
            .finish()
    }
}
