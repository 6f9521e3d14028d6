//! Retro Pong - a two-player paddle-and-ball simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, match state machine)
//! - `config`: Construction-time match configuration
//! - `input`: Key mapping into per-frame input snapshots
//! - `audio`: Sound cue dispatch driven by simulation events
//! - `scene`: Draw-list geometry for an external renderer

pub mod audio;
pub mod config;
pub mod error;
pub mod input;
pub mod scene;
pub mod sim;

pub use config::MatchConfig;
pub use error::{AudioError, ConfigError};
pub use sim::{GameEvent, Match, MatchPhase, Side, TickInput};

/// Default configuration constants (classic 1024x768 layout)
pub mod consts {
    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 1024.0;
    pub const FIELD_HEIGHT: f32 = 768.0;

    /// Shared unit for paddle thickness, ball size and anti-tunneling nudges
    pub const ELEMENT_WIDTH: f32 = FIELD_WIDTH / 75.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = ELEMENT_WIDTH;
    pub const PADDLE_HEIGHT: f32 = FIELD_HEIGHT / 10.0;
    /// Paddle travel speed (units/s)
    pub const PADDLE_SPEED: f32 = FIELD_HEIGHT * 0.7;
    /// Distance from the field edge to the paddle, in element widths
    pub const PADDLE_INSET_ELEMENTS: f32 = 5.0;

    /// Ball defaults (the ball is a square `BALL_RADIUS` wide)
    pub const BALL_RADIUS: f32 = ELEMENT_WIDTH;
    /// Maximum horizontal ball speed (units/s)
    pub const BALL_BASE_SPEED: f32 = FIELD_WIDTH * 0.7;
    /// Serve velocity fractions of the base speed
    pub const SERVE_SPEED_X: f32 = 0.75;
    pub const SERVE_SPEED_Y: f32 = 0.25;

    /// Top/bottom border thickness
    pub const BORDER_THICKNESS: f32 = ELEMENT_WIDTH * 2.0;
    /// Pixels shaved off the lower paddle bound so paddles rest on the border
    pub const PADDLE_BOTTOM_MARGIN: f32 = 1.0;

    /// Seconds the ball waits after a (re)serve
    pub const SERVE_DELAY_SECONDS: f32 = 1.0;
    /// First side to this score wins
    pub const WINNING_SCORE: u32 = 10;
}
