//! Controlling music playback with the keyboard.

use miette::Result;

use crate::{
    audio::{Music, PlaybackState},
    Config, Context, Game, KeyCode,
};

/// Seconds skipped with the arrow keys.
const SEEK_SECONDS: f64 = 5.0;
/// Controls shown in the title.
const INSTRUCTIONS: &str =
    "Instructions: Space(play/pause) Esc(restart) Left(-5s) - Right(+5s)";

/// Music player showing its state in the window title.
#[derive(Debug, Default)]
pub struct Sounds {
    /// Song controlled.
    music: Option<Music>,
}

impl Sounds {
    /// Window settings.
    #[must_use]
    pub fn config() -> Config {
        Config::default()
            .with_title("Sounds")
            .with_buffer_size(900.0, 600.0)
    }

    /// Song controlled.
    #[must_use]
    pub const fn music(&self) -> Option<&Music> {
        self.music.as_ref()
    }

    /// Window title describing the state of the music.
    fn title(music: &Music) -> String {
        let state = match music.state() {
            PlaybackState::Stopped => "Stopped",
            PlaybackState::Playing => "Playing",
            PlaybackState::Paused => "Paused",
        };

        let seconds = music.position().as_secs();
        let (minutes, seconds) = (seconds / 60, seconds % 60);

        format!("{state} - {minutes:02}:{seconds:02} | {INSTRUCTIONS}")
    }
}

impl Game for Sounds {
    fn load(&mut self, ctx: Context) -> Result<()> {
        let music = ctx.music("deep-consistency")?;

        log::info!("Loaded music of {:.1} seconds", music.duration().as_secs_f32());

        ctx.set_title(Self::title(&music));
        self.music = Some(music);

        Ok(())
    }

    fn update(&mut self, ctx: Context) {
        let Some(music) = &mut self.music else {
            return;
        };

        // Only a single control is handled per tick
        if ctx.key_released(KeyCode::Space) {
            match music.state() {
                PlaybackState::Stopped | PlaybackState::Paused => music.play(),
                PlaybackState::Playing => music.pause(),
            }
        } else if ctx.key_released(KeyCode::Escape) {
            music.reset();
        } else if ctx.key_released(KeyCode::ArrowLeft) {
            music.rewind(SEEK_SECONDS);
        } else if ctx.key_released(KeyCode::ArrowRight) {
            music.fast_forward(SEEK_SECONDS);
        }

        ctx.set_title(Self::title(music));
    }

    fn render(&mut self, _ctx: Context) {}
}
