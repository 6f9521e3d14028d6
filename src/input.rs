//! Keyboard mapping
//!
//! The platform layer polls its own device API and hands us portable [`Key`]
//! values; this module turns them into the per-frame [`TickInput`] snapshot
//! and the two key-press transitions of the match.

use crate::sim::{GameEvent, Match, MatchPhase, TickInput};

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Player 1 up
    W,
    /// Player 1 down
    S,
    /// Player 2 up
    ArrowUp,
    /// Player 2 down
    ArrowDown,
    /// Restart from the end screen
    Space,
    /// Anything else (still starts the match)
    Other,
}

impl TickInput {
    /// Build the snapshot from the set of keys currently held
    pub fn from_held(keys: &[Key]) -> Self {
        let mut input = Self::default();
        for key in keys {
            match key {
                Key::W => input.p1_up = true,
                Key::S => input.p1_down = true,
                Key::ArrowUp => input.p2_up = true,
                Key::ArrowDown => input.p2_down = true,
                Key::Space | Key::Other => {}
            }
        }
        input
    }
}

/// Apply a key-down event: any key leaves the title screen, Space leaves the
/// end screen.
pub fn handle_key_press(game: &mut Match, key: Key) -> Option<GameEvent> {
    match game.phase() {
        MatchPhase::Start => {
            game.request_start();
            None
        }
        MatchPhase::End if key == Key::Space => game.request_restart(),
        MatchPhase::Running | MatchPhase::End => None,
    }
}
