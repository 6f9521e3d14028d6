//! Per-frame simulation step
//!
//! One call per rendered frame. Motion scales with `dt`, so a zero or negative
//! `dt` moves nothing.

use super::collision::resolve_collisions;
use super::state::{GameEvent, Match, MatchPhase, Paddle, Side};
use crate::config::MatchConfig;

/// Held directions for this frame, already resolved from the input device
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub p1_up: bool,
    pub p1_down: bool,
    pub p2_up: bool,
    pub p2_down: bool,
}

impl TickInput {
    /// (up, down) held for a side
    pub fn held(&self, side: Side) -> (bool, bool) {
        match side {
            Side::Left => (self.p1_up, self.p1_down),
            Side::Right => (self.p2_up, self.p2_down),
        }
    }
}

/// Move a paddle for the held directions.
///
/// Up and down are applied independently, so holding both partially cancels.
/// The result never leaves the paddle's travel range.
pub fn move_paddle(paddle: &mut Paddle, up: bool, down: bool, dt: f32, config: &MatchConfig) {
    let step = config.paddle_speed * dt;
    if up && paddle.y > config.paddle_min_y() {
        paddle.y -= step;
    }
    if down && paddle.y < config.paddle_max_y() {
        paddle.y += step;
    }
    paddle.y = config.clamp_paddle_y(paddle.y);
}

impl Match {
    /// Advance the match by `dt` seconds and return what happened.
    ///
    /// Does nothing outside the Running phase.
    pub fn step(&mut self, dt: f32, input: &TickInput) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.state.phase != MatchPhase::Running {
            return events;
        }

        // Non-finite and negative frame times collapse to a no-op frame
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        self.state.timer += dt;

        for side in Side::BOTH {
            let (up, down) = input.held(side);
            let paddle = match side {
                Side::Left => &mut self.left,
                Side::Right => &mut self.right,
            };
            move_paddle(paddle, up, down, dt, &self.config);
        }

        resolve_collisions(self, &mut events);

        if self.ball.in_play {
            self.ball.integrate(dt);
        } else if self.state.timer > self.config.serve_delay_seconds {
            self.ball.in_play = true;
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    const DT: f32 = 1.0 / 60.0;

    fn running_match() -> Match {
        let mut m = Match::new(MatchConfig::default(), 12345);
        m.request_start();
        m
    }

    #[test]
    fn test_step_noop_outside_running() {
        let mut m = Match::new(MatchConfig::default(), 12345);
        let ball = m.ball().clone();
        let input = TickInput {
            p1_up: true,
            p2_down: true,
            ..Default::default()
        };
        let events = m.step(0.5, &input);
        assert!(events.is_empty());
        assert_eq!(m.ball().pos, ball.pos);
        assert_eq!(m.state().timer(), 0.0);
        assert_eq!(m.paddle(Side::Left).y, m.config().paddle_center_y());
    }

    #[test]
    fn test_serve_delay() {
        let mut m = running_match();
        let start = m.ball().pos;

        // Just under a second: still waiting
        for _ in 0..59 {
            m.step(DT, &TickInput::default());
        }
        assert!(!m.ball().in_play);
        assert_eq!(m.ball().pos, start);

        // Past the delay: released this frame, moves on the next
        m.step(DT, &TickInput::default());
        m.step(DT, &TickInput::default());
        assert!(m.ball().in_play);
        m.step(DT, &TickInput::default());
        assert_ne!(m.ball().pos, start);
    }

    #[test]
    fn test_ball_integrates_with_dt() {
        let mut m = running_match();
        m.ball_mut().in_play = true;
        m.ball_mut().vel = Vec2::new(120.0, -60.0);
        let start = m.ball().pos;

        m.step(0.5, &TickInput::default());

        assert!((m.ball().pos.x - (start.x + 60.0)).abs() < 1e-3);
        assert!((m.ball().pos.y - (start.y - 30.0)).abs() < 1e-3);
    }

    #[test]
    fn test_paddle_moves_up_and_down() {
        let mut m = running_match();
        let y0 = m.paddle(Side::Left).y;
        let speed = m.config().paddle_speed;

        let up = TickInput {
            p1_up: true,
            ..Default::default()
        };
        m.step(0.1, &up);
        assert!((m.paddle(Side::Left).y - (y0 - speed * 0.1)).abs() < 1e-3);
        assert_eq!(m.paddle(Side::Right).y, y0);

        let down = TickInput {
            p2_down: true,
            ..Default::default()
        };
        m.step(0.1, &down);
        assert!((m.paddle(Side::Right).y - (y0 + speed * 0.1)).abs() < 1e-3);
    }

    #[test]
    fn test_both_directions_cancel() {
        let mut m = running_match();
        let y0 = m.paddle(Side::Right).y;
        let both = TickInput {
            p2_up: true,
            p2_down: true,
            ..Default::default()
        };
        m.step(0.05, &both);
        assert!((m.paddle(Side::Right).y - y0).abs() < 1e-3);
    }

    #[test]
    fn test_paddle_clamped_at_top() {
        let mut m = running_match();
        let up = TickInput {
            p1_up: true,
            ..Default::default()
        };
        for _ in 0..200 {
            m.step(DT, &up);
        }
        assert_eq!(m.paddle(Side::Left).y, m.config().paddle_min_y());
    }

    #[test]
    fn test_paddle_clamped_at_bottom() {
        let mut m = running_match();
        let down = TickInput {
            p2_down: true,
            ..Default::default()
        };
        m.step(10.0, &down);
        assert_eq!(m.paddle(Side::Right).y, m.config().paddle_max_y());
    }

    #[test]
    fn test_negative_dt_is_noop() {
        let mut m = running_match();
        m.ball_mut().in_play = true;
        let ball = m.ball().clone();
        let y = m.paddle(Side::Left).y;
        let input = TickInput {
            p1_down: true,
            ..Default::default()
        };

        m.step(-1.0, &input);
        m.step(f32::NAN, &input);

        assert_eq!(m.ball().pos, ball.pos);
        assert_eq!(m.paddle(Side::Left).y, y);
        assert_eq!(m.state().timer(), 0.0);
    }

    #[test]
    fn test_infinite_dt_is_noop() {
        let mut m = running_match();
        m.ball_mut().in_play = true;
        let ball = m.ball().clone();
        let y = m.paddle(Side::Left).y;
        let both = TickInput {
            p1_up: true,
            p1_down: true,
            ..Default::default()
        };

        m.step(f32::INFINITY, &both);

        assert_eq!(m.ball().pos, ball.pos);
        assert_eq!(m.paddle(Side::Left).y, y);
        assert_eq!(m.state().timer(), 0.0);
    }

    #[test]
    fn test_overflowing_move_stays_in_range() {
        let config = MatchConfig::default();
        let mut paddle = Paddle::new(Side::Left, &config);

        // speed * dt overflows to infinity; up then down would give NaN
        move_paddle(&mut paddle, true, true, f32::MAX, &config);

        assert!(paddle.y >= config.paddle_min_y() && paddle.y <= config.paddle_max_y());
    }

    #[test]
    fn test_unvalidated_config_does_not_panic() {
        let config = MatchConfig {
            paddle_height: 2000.0,
            ..Default::default()
        };
        let mut m = Match::new(config, 7);
        m.request_start();
        let input = TickInput {
            p1_up: true,
            p2_down: true,
            ..Default::default()
        };
        for _ in 0..10 {
            m.step(DT, &input);
        }
        assert_eq!(m.phase(), MatchPhase::Running);
    }

    #[test]
    fn test_goal_during_step_resets_timer() {
        let mut m = running_match();
        for _ in 0..30 {
            m.step(DT, &TickInput::default());
        }
        let width = m.config().field_width;
        m.ball_mut().pos.x = width + 1.0;

        let events = m.step(DT, &TickInput::default());

        assert_eq!(events, vec![GameEvent::Goal(Side::Left)]);
        assert_eq!(m.scores(), (1, 0));
        assert_eq!(m.state().timer(), 0.0);
        assert!(!m.ball().in_play);
    }

    #[test]
    fn test_determinism() {
        let mut a = Match::new(MatchConfig::default(), 99999);
        let mut b = Match::new(MatchConfig::default(), 99999);
        a.request_start();
        b.request_start();

        let inputs = [
            TickInput {
                p1_up: true,
                ..Default::default()
            },
            TickInput {
                p2_down: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for i in 0..2000 {
            let input = &inputs[i % inputs.len()];
            assert_eq!(a.step(DT, input), b.step(DT, input));
        }
        assert_eq!(a.scores(), b.scores());
        assert_eq!(a.ball().pos, b.ball().pos);
    }
}
