//! Frame driver
//!
//! One call to [`Game::frame`] per animation frame. While RUNNING it clears,
//! simulates and draws; the first frame that sees the death flag draws the
//! game-over screen and tells the host to stop scheduling frames.

use crate::input::InputState;
use crate::render::{self, Surface};
use crate::sim::{self, GamePhase, GameState};
use crate::tuning::Tuning;

/// Whether the host should request another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

pub struct Game {
    pub state: GameState,
    /// Held keys, written by the host's key listeners
    pub input: InputState,
    /// Demo mode: the autopilot replaces keyboard input
    pub idle_mode: bool,
}

impl Game {
    pub fn new(seed: u64, tuning: Tuning, start_ms: f64) -> Self {
        log::info!("New game (seed {})", seed);
        Self {
            state: GameState::new(seed, tuning, start_ms),
            input: InputState::default(),
            idle_mode: false,
        }
    }

    pub fn frame(&mut self, now_ms: f64, surface: &mut impl Surface) -> LoopControl {
        match self.state.phase {
            GamePhase::GameOver => return LoopControl::Stop,
            GamePhase::Running if self.state.dead => {
                self.state.phase = GamePhase::GameOver;
                log::info!("Game over, final score {}", self.state.score.display());
                render::draw_game_over(surface, &self.state);
                return LoopControl::Stop;
            }
            GamePhase::Running => {}
        }

        render::clear(surface, &self.state);

        let input = if self.idle_mode {
            sim::autopilot(&self.state)
        } else {
            self.input
        };
        sim::tick(&mut self.state, &input, now_ms);

        render::draw_world(surface, &self.state);
        LoopControl::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Recorder;

    #[test]
    fn test_running_frame_draws_world() {
        let mut game = Game::new(11, Tuning::default(), 0.0);
        let mut rec = Recorder::new();
        assert_eq!(game.frame(16.0, &mut rec), LoopControl::Continue);
        assert_eq!(game.state.frame, 1);

        let rects = rec.rects();
        assert_eq!(rects[0].0, crate::palette::BACKGROUND);
        // Background, two platforms (start + first spawn), player
        assert_eq!(rects.len(), 4);
        assert_eq!(rec.texts()[0].0, "Score: 0.02");
    }

    #[test]
    fn test_death_ends_loop_with_last_score() {
        let mut game = Game::new(11, Tuning::default(), 0.0);
        let mut rec = Recorder::new();

        // Push the player out of the bottom of the view
        game.state.player.body.pos.y = 10_000.0;
        assert_eq!(game.frame(2_500.0, &mut rec), LoopControl::Continue);
        assert!(game.state.dead);
        assert_eq!(game.state.phase, GamePhase::Running);
        let last_score = game.state.score.display();
        assert_eq!(last_score, "2.50");

        // Next frame latches GAME_OVER and doesn't advance the score
        rec.clear();
        assert_eq!(game.frame(9_000.0, &mut rec), LoopControl::Stop);
        assert_eq!(game.state.phase, GamePhase::GameOver);
        assert_eq!(game.state.score.display(), last_score);
        let texts = rec.texts();
        assert_eq!(texts[0].0, "GAME OVER");
        assert_eq!(texts[1].0, format!("Final score: {}", last_score));

        // Terminal: nothing else happens
        rec.clear();
        let frame = game.state.frame;
        assert_eq!(game.frame(10_000.0, &mut rec), LoopControl::Stop);
        assert!(rec.calls.is_empty());
        assert_eq!(game.state.frame, frame);
    }

    #[test]
    fn test_idle_mode_uses_autopilot() {
        let mut game = Game::new(11, Tuning::default(), 0.0);
        game.idle_mode = true;
        // Keyboard says left, but the autopilot is in charge
        game.input.left = true;
        let expected = sim::autopilot(&game.state);
        let x0 = game.state.player.body.pos.x;
        game.frame(0.0, &mut Recorder::new());

        let mut dx = 0.0;
        if expected.left {
            dx -= 7.0;
        }
        if expected.right {
            dx += 7.0;
        }
        assert_eq!(game.state.player.body.pos.x, x0 + dx);
    }
}
