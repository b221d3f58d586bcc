//! Sound cues driven by game events.
//!
//! Playback goes through an injected [`SoundPlayer`]; nothing here owns a
//! global audio handle. Cues are fire-and-forget.

use super::event::{GameEvent, GameObserver};
use tracing::trace;

/// A sound effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SoundCue {
    /// A board with at least one mark was shown.
    #[display("click")]
    Click,
    /// The game was won or drawn.
    #[display("game over")]
    GameOver,
}

/// Plays a cue at a volume in `0.0..=1.0` without blocking.
pub trait SoundPlayer {
    /// Starts playback; must not wait for it to finish.
    fn play(&self, cue: SoundCue, volume: f32);
}

/// Player that plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentPlayer;

impl SoundPlayer for SilentPlayer {
    fn play(&self, cue: SoundCue, volume: f32) {
        trace!(%cue, volume, "Sound muted");
    }
}

/// Per-cue volumes.
#[derive(Debug, Clone, Copy, PartialEq, derive_new::new)]
pub struct SoundVolumes {
    /// Volume for [`SoundCue::Click`].
    pub click: f32,
    /// Volume for [`SoundCue::GameOver`].
    pub game_over: f32,
}

impl Default for SoundVolumes {
    fn default() -> Self {
        Self::new(0.5, 0.2)
    }
}

impl SoundVolumes {
    /// Volume for `cue`.
    pub fn for_cue(&self, cue: SoundCue) -> f32 {
        match cue {
            SoundCue::Click => self.click,
            SoundCue::GameOver => self.game_over,
        }
    }
}

/// Observer that turns game events into sound cues.
pub struct SoundEffects {
    player: Box<dyn SoundPlayer>,
    volumes: SoundVolumes,
}

impl SoundEffects {
    /// Creates the observer around an injected player.
    pub fn new(player: Box<dyn SoundPlayer>, volumes: SoundVolumes) -> Self {
        Self { player, volumes }
    }

    /// Cue implied by `event`, if any.
    pub fn cue_for(event: &GameEvent) -> Option<SoundCue> {
        match event {
            GameEvent::BoardChanged { board, .. } if !board.is_blank() => Some(SoundCue::Click),
            GameEvent::StatusChanged { status, .. } if status.is_over() => {
                Some(SoundCue::GameOver)
            }
            _ => None,
        }
    }
}

impl std::fmt::Debug for SoundEffects {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoundEffects")
            .field("volumes", &self.volumes)
            .finish_non_exhaustive()
    }
}

impl GameObserver for SoundEffects {
    fn on_event(&mut self, event: &GameEvent) {
        if let Some(cue) = Self::cue_for(event) {
            self.player.play(cue, self.volumes.for_cue(cue));
        }
    }
}
