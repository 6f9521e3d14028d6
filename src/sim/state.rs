//! Match state and core simulation types
//!
//! Paddles and the ball are created once per match and reset in place; the
//! phase and winner live in [`MatchState`] and are only changed by the state
//! machine in `phase.rs` and the goal rules in `collision.rs`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::config::MatchConfig;
use crate::consts::{SERVE_SPEED_X, SERVE_SPEED_Y};

/// A player's side of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Player 1, defends the left goal
    Left,
    /// Player 2, defends the right goal
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    /// 1-based player number
    pub fn index(self) -> u8 {
        match self {
            Side::Left => 1,
            Side::Right => 2,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Idle title screen, waiting for any key
    Start,
    /// Rally in progress, physics active
    Running,
    /// A side reached the winning score, waiting for restart
    End,
}

/// Discrete notifications for audio/visual side effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off a border or a paddle
    BallHit,
    /// The given side scored without winning
    Goal(Side),
    /// The given side won the match
    MatchEnd(Side),
    /// End screen dismissed, back to the title screen
    MatchRestart,
}

/// A player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Left edge, fixed at setup
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub score: u32,
}

impl Paddle {
    pub fn new(side: Side, config: &MatchConfig) -> Self {
        Self {
            side,
            x: config.paddle_x(side),
            y: config.paddle_center_y(),
            score: 0,
        }
    }

    /// Recenter and clear the score; `x` is kept
    pub fn reset(&mut self, config: &MatchConfig) {
        self.y = config.paddle_center_y();
        self.score = 0;
    }

    pub fn rect(&self, config: &MatchConfig) -> Rect {
        Rect::new(self.x, self.y, config.paddle_width, config.paddle_height)
    }

    /// Vertical centre in world units
    #[inline]
    pub fn center_y(&self, config: &MatchConfig) -> f32 {
        self.y + config.paddle_height / 2.0
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner of the ball's square
    pub pos: Vec2,
    pub vel: Vec2,
    /// False while the serve delay runs; position is frozen until set
    pub in_play: bool,
}

impl Ball {
    pub fn new(config: &MatchConfig, rng: &mut Pcg32) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            in_play: false,
        };
        ball.reset(config, rng);
        ball
    }

    /// Recenter, pick a random diagonal serve and wait for the serve delay
    pub fn reset(&mut self, config: &MatchConfig, rng: &mut Pcg32) {
        let half = config.ball_radius / 2.0;
        self.pos = Vec2::new(
            config.field_width / 2.0 - half,
            config.field_height / 2.0 - half,
        );

        let speed = config.ball_base_speed;
        let vel_x = if rng.random_bool(0.5) {
            -speed * SERVE_SPEED_X
        } else {
            speed * SERVE_SPEED_X
        };
        let vel_y = if rng.random_bool(0.5) {
            -speed * SERVE_SPEED_Y
        } else {
            speed * SERVE_SPEED_Y
        };
        self.vel = Vec2::new(vel_x, vel_y);
        self.in_play = false;
    }

    /// Square hit box
    pub fn rect(&self, config: &MatchConfig) -> Rect {
        Rect::new(self.pos.x, self.pos.y, config.ball_radius, config.ball_radius)
    }

    #[inline]
    pub fn center_y(&self, config: &MatchConfig) -> f32 {
        self.pos.y + config.ball_radius / 2.0
    }

    /// Explicit Euler step
    #[inline]
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}

/// Phase, serve timer and result of the match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    pub(crate) phase: MatchPhase,
    /// Seconds since the last serve or return to Start
    pub(crate) timer: f32,
    pub(crate) winner: Option<Side>,
    /// Scores at the moment the last match was won (left, right)
    pub(crate) final_score: Option<(u32, u32)>,
}

impl Default for MatchState {
    fn default() -> Self {
        Self {
            phase: MatchPhase::Start,
            timer: 0.0,
            winner: None,
            final_score: None,
        }
    }
}

impl MatchState {
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn timer(&self) -> f32 {
        self.timer
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// 0 = no winner, otherwise the winning player number
    pub fn winner_index(&self) -> u8 {
        self.winner.map_or(0, Side::index)
    }

    pub fn final_score(&self) -> Option<(u32, u32)> {
        self.final_score
    }
}

/// The match aggregate: configuration, entities, state and serve RNG
#[derive(Debug, Clone)]
pub struct Match {
    pub(crate) config: MatchConfig,
    pub(crate) left: Paddle,
    pub(crate) right: Paddle,
    pub(crate) ball: Ball,
    pub(crate) state: MatchState,
    pub(crate) rng: Pcg32,
}

impl Match {
    /// Set up a match in the Start phase; `seed` drives serve directions
    pub fn new(config: MatchConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let ball = Ball::new(&config, &mut rng);
        Self {
            left: Paddle::new(Side::Left, &config),
            right: Paddle::new(Side::Right, &config),
            ball,
            state: MatchState::default(),
            rng,
            config,
        }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn phase(&self) -> MatchPhase {
        self.state.phase
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    /// Direct ball access for drivers and test setups
    pub fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Direct paddle access for drivers and test setups
    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Current (left, right) scores
    pub fn scores(&self) -> (u32, u32) {
        (self.left.score, self.right.score)
    }

    /// Reinitialize the ball with a fresh random serve
    pub(crate) fn reset_ball(&mut self) {
        self.ball.reset(&self.config, &mut self.rng);
    }
}
