//! Collision detection and response
//!
//! Resolution order per frame is borders, goals, then paddles. A goal ends
//! resolution for the frame, and only the first overlapping paddle (left
//! before right) is resolved.

use super::state::{Ball, GameEvent, Match, Paddle, Side};
use crate::config::MatchConfig;

/// Bounce the ball off the top or bottom border.
///
/// The ball is nudged one element width back into the field so the same
/// border cannot trigger again on the next frame. Returns true on a bounce.
pub fn collide_borders(ball: &mut Ball, config: &MatchConfig) -> bool {
    let top = config.border_top_y();
    let bottom = config.border_bottom_y();
    let nudge = config.element_width();

    if ball.pos.y <= top {
        ball.vel.y = -ball.vel.y;
        ball.pos.y += nudge;
        true
    } else if ball.pos.y >= bottom {
        ball.vel.y = -ball.vel.y;
        ball.pos.y -= nudge;
        true
    } else {
        false
    }
}

/// Side that scores if the ball has crossed a goal line
pub fn goal_scorer(ball: &Ball, config: &MatchConfig) -> Option<Side> {
    if ball.pos.x >= config.field_width {
        Some(Side::Left)
    } else if ball.pos.x <= 0.0 {
        Some(Side::Right)
    } else {
        None
    }
}

/// Reflect the ball off a paddle it overlaps.
///
/// Horizontal speed is reversed and pushed to `ball_base_speed`; vertical speed
/// is set from where the ball struck, relative to the paddle's centre.
pub fn deflect_off_paddle(ball: &mut Ball, paddle: &Paddle, config: &MatchConfig) {
    let speed = config.ball_base_speed;

    let reversed = -ball.vel.x;
    let mut boost = speed - ball.vel.x.abs();
    if reversed < 0.0 {
        boost = -boost;
    }
    ball.vel.x = reversed + boost;

    // Push the ball clear of the paddle face
    let nudge = config.element_width() * 2.0;
    let mid = config.field_width / 2.0;
    if paddle.x < mid {
        ball.pos.x = paddle.x + nudge;
    } else if paddle.x > mid {
        ball.pos.x = paddle.x - nudge;
    }

    let offset = ball.center_y(config) - paddle.center_y(config);
    ball.vel.y = speed * (offset / config.paddle_height);
}

/// First paddle whose rectangle overlaps the ball, left side first
pub fn overlapping_paddle(m: &Match) -> Option<Side> {
    let ball_box = m.ball.rect(&m.config);
    Side::BOTH
        .into_iter()
        .find(|&side| m.paddle(side).rect(&m.config).overlaps(&ball_box))
}

/// Run every collision rule for one frame, appending the resulting events
pub fn resolve_collisions(m: &mut Match, events: &mut Vec<GameEvent>) {
    if collide_borders(&mut m.ball, &m.config) {
        events.push(GameEvent::BallHit);
    }

    if let Some(scorer) = goal_scorer(&m.ball, &m.config) {
        events.push(m.award_point(scorer));
        return;
    }

    if let Some(side) = overlapping_paddle(m) {
        let paddle = match side {
            Side::Left => &m.left,
            Side::Right => &m.right,
        };
        deflect_off_paddle(&mut m.ball, paddle, &m.config);
        events.push(GameEvent::BallHit);
    }
}
