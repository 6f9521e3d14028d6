//! Match state machine
//!
//! Start -> Running on any key, Running -> End when a side reaches the winning
//! score, End -> Start on the restart key. There are no other transitions.

use super::state::{GameEvent, Match, MatchPhase, Side};

impl Match {
    /// Any key pressed on the title screen starts the rally.
    ///
    /// Returns true if the phase changed.
    pub fn request_start(&mut self) -> bool {
        if self.state.phase != MatchPhase::Start {
            return false;
        }
        self.state.phase = MatchPhase::Running;
        log::debug!("Match started");
        true
    }

    /// Restart key on the end screen returns to the title screen.
    pub fn request_restart(&mut self) -> Option<GameEvent> {
        if self.state.phase != MatchPhase::End {
            return None;
        }
        self.state.phase = MatchPhase::Start;
        self.state.winner = None;
        self.state.timer = 0.0;
        log::info!("Match restarted");
        Some(GameEvent::MatchRestart)
    }

    /// Credit a goal to `scorer` and serve again.
    ///
    /// Reaching the winning score ends the match and resets both paddles so the
    /// next match starts from zero; the final score is kept for the end screen.
    pub(crate) fn award_point(&mut self, scorer: Side) -> GameEvent {
        let score = {
            let paddle = self.paddle_mut(scorer);
            paddle.score += 1;
            paddle.score
        };

        let event = if score >= self.config.winning_score {
            let (left, right) = self.scores();
            self.state.final_score = Some((left, right));
            self.state.phase = MatchPhase::End;
            self.state.winner = Some(scorer);
            self.left.reset(&self.config);
            self.right.reset(&self.config);
            log::info!("Player {} wins {}-{}", scorer.index(), left, right);
            GameEvent::MatchEnd(scorer)
        } else {
            log::debug!("Player {} scores ({:?})", scorer.index(), self.scores());
            GameEvent::Goal(scorer)
        };

        self.reset_ball();
        self.state.timer = 0.0;
        event
    }
}

#[cfg(test)]
mod tests {
    use crate::config::MatchConfig;
    use crate::sim::{GameEvent, Match, MatchPhase, Side};

    fn running_match() -> Match {
        let mut m = Match::new(MatchConfig::default(), 1);
        assert!(m.request_start());
        m
    }

    #[test]
    fn test_start_only_from_start() {
        let mut m = running_match();
        assert_eq!(m.phase(), MatchPhase::Running);
        assert!(!m.request_start());
        assert_eq!(m.phase(), MatchPhase::Running);
    }

    #[test]
    fn test_restart_ignored_outside_end() {
        let mut m = Match::new(MatchConfig::default(), 1);
        assert_eq!(m.request_restart(), None);
        assert_eq!(m.phase(), MatchPhase::Start);

        m.request_start();
        assert_eq!(m.request_restart(), None);
        assert_eq!(m.phase(), MatchPhase::Running);
    }

    #[test]
    fn test_goal_below_winning_score() {
        let mut m = running_match();
        m.paddle_mut(Side::Right).score = 8;
        let event = m.award_point(Side::Right);
        assert_eq!(event, GameEvent::Goal(Side::Right));
        assert_eq!(m.scores(), (0, 9));
        assert_eq!(m.phase(), MatchPhase::Running);
        assert_eq!(m.state().winner(), None);
    }

    #[test]
    fn test_winning_goal_ends_match() {
        let mut m = running_match();
        m.paddle_mut(Side::Left).score = 9;
        m.paddle_mut(Side::Right).score = 4;
        m.paddle_mut(Side::Left).y = 100.0;

        let event = m.award_point(Side::Left);

        assert_eq!(event, GameEvent::MatchEnd(Side::Left));
        assert_eq!(m.phase(), MatchPhase::End);
        assert_eq!(m.state().winner_index(), 1);
        assert_eq!(m.state().final_score(), Some((10, 4)));
        assert_eq!(m.scores(), (0, 0));
        assert_eq!(m.paddle(Side::Left).y, m.config().paddle_center_y());
        assert_eq!(m.state().timer(), 0.0);
        assert!(!m.ball().in_play);
    }

    #[test]
    fn test_restart_clears_winner() {
        let mut m = running_match();
        m.paddle_mut(Side::Right).score = 9;
        m.award_point(Side::Right);
        assert_eq!(m.state().winner_index(), 2);

        assert_eq!(m.request_restart(), Some(GameEvent::MatchRestart));
        assert_eq!(m.phase(), MatchPhase::Start);
        assert_eq!(m.state().winner_index(), 0);
        assert_eq!(m.scores(), (0, 0));
        assert_eq!(m.state().timer(), 0.0);
    }
}
