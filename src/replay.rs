//! Timed keyboard events for running a game without a window.
//!
//! Scripts are TOML files:
//!
//! ```toml
//! # Seconds to simulate
//! duration = 4.0
//! # Seconds between rendered frames, defaults to 60 frames per second
//! frame_time = 0.016666668
//!
//! [[events]]
//! at = 0.5
//! key = "Space"
//! state = "down"
//!
//! [[events]]
//! at = 0.6
//! key = "Space"
//! state = "up"
//! ```

use std::path::Path;

use miette::{IntoDiagnostic, Result, WrapErr};
use serde::Deserialize;

use crate::{input::KeyCode, Frame, Game, Runtime};

/// Whether a key goes down or up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyState {
    /// Key is pressed.
    Down,
    /// Key is released.
    Up,
}

/// Single keyboard event at a moment in the script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptEvent {
    /// Seconds since the start.
    pub at: f32,
    /// Key changing state.
    pub key: KeyCode,
    /// New state of the key.
    pub state: KeyState,
}

/// Timed keyboard events with the amount of time to simulate.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    /// Seconds to simulate.
    pub duration: f32,
    /// Seconds between rendered frames.
    #[serde(default = "Script::default_frame_time")]
    pub frame_time: f32,
    /// Keyboard events, doesn't have to be ordered.
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

impl Script {
    /// Simulate a duration without any input.
    #[inline]
    #[must_use]
    pub fn idle(duration: f32) -> Self {
        Self {
            duration,
            frame_time: Self::default_frame_time(),
            events: Vec::new(),
        }
    }

    /// Press and release a key, keeping it down for a single frame.
    #[must_use]
    pub fn with_key_tap(mut self, at: f32, key: KeyCode) -> Self {
        self.events.push(ScriptEvent {
            at,
            key,
            state: KeyState::Down,
        });
        self.events.push(ScriptEvent {
            at: at + self.frame_time,
            key,
            state: KeyState::Up,
        });

        self
    }

    /// Parse a script from a TOML string.
    ///
    /// # Errors
    ///
    /// - When the TOML is invalid or contains unknown fields or keys.
    /// - When the frame time is not positive.
    pub fn from_toml(source: &str) -> Result<Self> {
        let script: Self = toml::from_str(source)
            .into_diagnostic()
            .wrap_err("Error parsing replay script")?;

        if script.frame_time <= 0.0 {
            miette::bail!(
                "Replay script frame time must be positive, got {}",
                script.frame_time
            );
        }

        Ok(script)
    }

    /// Read a script from a TOML file.
    ///
    /// # Errors
    ///
    /// - When the file can't be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let source = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Error reading replay script '{}'", path.display()))?;

        Self::from_toml(&source)
    }

    /// Amount of frames rendered.
    #[inline]
    #[must_use]
    pub fn frames(&self) -> u32 {
        (self.duration / self.frame_time).ceil().max(0.0) as u32
    }

    /// Feed the events into the runtime and render frames until the duration has passed or the game exits.
    ///
    /// # Errors
    ///
    /// - When not a single frame is rendered.
    pub(crate) fn play<G: Game>(&self, runtime: &mut Runtime<G>) -> Result<Frame> {
        let mut events = self.events.clone();
        // Stable so events at the same moment keep their order
        events.sort_by(|a, b| a.at.total_cmp(&b.at));
        let mut events = events.into_iter().peekable();

        let frames_per_second = self.frame_time.recip().round().max(1.0) as u32;

        let mut last_frame = None;
        for frame_index in 0..self.frames() {
            if !runtime.is_running() {
                log::info!("Game exited after {frame_index} frames");

                break;
            }

            // Send all events that happened before this frame
            let now = frame_index as f32 * self.frame_time;
            while let Some(event) = events.next_if(|event| event.at <= now) {
                match event.state {
                    KeyState::Down => runtime.key_down(event.key),
                    KeyState::Up => runtime.key_up(event.key),
                }
            }

            let frame = runtime.advance(self.frame_time);

            if frame_index % frames_per_second == 0 {
                log::debug!(
                    "Second {}: {} draw commands, title '{}'",
                    frame_index / frames_per_second,
                    frame.commands.len(),
                    frame.title
                );
            }

            last_frame = Some(frame);
        }

        last_frame.ok_or_else(|| miette::miette!("Replay script didn't render a single frame"))
    }

    /// Default for the `frame_time` field.
    #[inline]
    const fn default_frame_time() -> f32 {
        1.0 / 60.0
    }
}
