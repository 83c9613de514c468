//! Handle keyboard input events.

use hashbrown::HashSet;
use serde::Deserialize;

/// Physical keyboard keys the samples respond to.
///
/// Named after the position of the key on a US keyboard, like the platform reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[non_exhaustive]
pub enum KeyCode {
    /// `←`.
    ArrowLeft,
    /// `→`.
    ArrowRight,
    /// `↑`.
    ArrowUp,
    /// `↓`.
    ArrowDown,
    /// Space bar.
    Space,
    /// `Esc`.
    Escape,
    /// `Tab`.
    Tab,
}

/// Keys that are down now and keys that were down when the previous update tick ended.
///
/// Comparing both gives the edges: a key in `down` but not in `down_previous_tick` was just pressed, the other way around it was just released.
#[derive(Debug, Default)]
pub(crate) struct Keyboard {
    /// Keys held down right now, changed by platform events between ticks.
    down: HashSet<KeyCode>,
    /// Snapshot of `down` taken at the end of the previous update tick.
    down_previous_tick: HashSet<KeyCode>,
}

impl Keyboard {
    /// Handle a key going up or down.
    #[inline]
    pub(crate) fn handle_event(&mut self, key: KeyCode, is_down: bool) {
        if is_down {
            self.down.insert(key);
        } else {
            self.down.remove(&key);
        }
    }

    /// Remember which keys are down, must be called once at the end of every update tick.
    #[inline]
    pub(crate) fn update(&mut self) {
        self.down_previous_tick.clone_from(&self.down);
    }

    /// Whether the key went down since the previous update tick.
    #[inline]
    #[must_use]
    pub(crate) fn key_pressed(&self, key: KeyCode) -> bool {
        self.down.contains(&key) && !self.down_previous_tick.contains(&key)
    }

    /// Whether the key went up since the previous update tick.
    #[inline]
    #[must_use]
    pub(crate) fn key_released(&self, key: KeyCode) -> bool {
        !self.down.contains(&key) && self.down_previous_tick.contains(&key)
    }

    /// Whether the key is being held down.
    #[inline]
    #[must_use]
    pub(crate) fn key_held(&self, key: KeyCode) -> bool {
        self.down.contains(&key)
    }
}
