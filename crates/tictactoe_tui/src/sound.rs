//! Terminal sound output.

use crate::config::SoundConfig;
use std::io::Write;
use tictactoe_core::{SilentPlayer, SoundCue, SoundPlayer};
use tracing::{debug, trace};

/// Rings the terminal bell for each cue.
///
/// The bell has no volume control, so any positive volume rings it and
/// zero stays silent.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalBell;

impl SoundPlayer for TerminalBell {
    fn play(&self, cue: SoundCue, volume: f32) {
        if volume <= 0.0 {
            trace!(%cue, "Volume is zero, skipping bell");
            return;
        }

        let mut stdout = std::io::stdout();
        let result = stdout
            .write_all(b"\x07")
            .and_then(|()| stdout.flush());
        if let Err(e) = result {
            // Sound never interrupts play.
            debug!(%cue, error = %e, "Failed to ring bell");
        }
    }
}

/// Picks the player for the configured sound settings.
pub fn player_for(config: &SoundConfig) -> Box<dyn SoundPlayer> {
    if *config.enabled() {
        Box::new(TerminalBell)
    } else {
        Box::new(SilentPlayer)
    }
}
