use crate::{FsmState, Game, Playfield};

/// What the start control did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    Restarted,
    Ignored,
}

/// Holds the match once the player presses start
#[derive(Default)]
pub struct Session {
    game: Option<Game>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// First press builds the game; later presses only restart a finished match
    pub fn start_or_restart<F>(&mut self, factory: F) -> StartOutcome
    where
        F: FnOnce() -> Game,
    {
        match self.game.as_mut() {
            None => {
                self.game = Some(factory());
                StartOutcome::Started
            }
            Some(game) => {
                if game.reset_game() {
                    StartOutcome::Restarted
                } else {
                    StartOutcome::Ignored
                }
            }
        }
    }

    pub fn state(&self) -> FsmState {
        self.game.as_ref().map_or(FsmState::Idle, Game::state)
    }

    pub fn is_started(&self) -> bool {
        self.game.is_some()
    }

    pub fn frame(&mut self, dt: f32) {
        if let Some(game) = self.game.as_mut() {
            game.frame(dt);
        }
    }

    pub fn resize(&mut self, field: Playfield) {
        if let Some(game) = self.game.as_mut() {
            game.resize(field);
        }
    }

    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    pub fn game_mut(&mut self) -> Option<&mut Game> {
        self.game.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, DrawCommand, InputEvent, InputSource, OutputSink, Side, SilentEnv};

    struct NullSink;

    impl OutputSink for NullSink {
        fn draw(&mut self, _command: DrawCommand) {}
        fn set_score(&mut self, _side: Side, _score: u8) {}
    }

    struct NoInput;

    impl InputSource for NoInput {
        fn poll(&mut self) -> Vec<InputEvent> {
            Vec::new()
        }
    }

    fn new_game() -> Game {
        Game::new(
            Playfield::new(600.0, 400.0),
            Config::new(),
            1,
            Box::new(NoInput),
            Box::new(NullSink),
            Box::new(SilentEnv),
        )
    }

    #[test]
    fn test_session_starts_idle() {
        let mut session = Session::new();
        assert_eq!(session.state(), FsmState::Idle);
        session.frame(0.016); // no game yet, nothing happens
        assert!(!session.is_started());
    }

    #[test]
    fn test_first_press_starts() {
        let mut session = Session::new();
        assert_eq!(session.start_or_restart(new_game), StartOutcome::Started);
        assert_eq!(session.state(), FsmState::Running);
    }

    #[test]
    fn test_press_while_running_is_ignored() {
        let mut session = Session::new();
        session.start_or_restart(new_game);
        let outcome = session.start_or_restart(|| panic!("must not rebuild a running game"));
        assert_eq!(outcome, StartOutcome::Ignored);
    }

    #[test]
    fn test_press_after_game_over_restarts() {
        let mut session = Session::new();
        session.start_or_restart(new_game);
        let game = session.game_mut().unwrap();
        for (_e, paddle) in game.world.query_mut::<&mut crate::Paddle>() {
            if paddle.side == Side::Right {
                paddle.score = 5;
            }
        }
        game.update(0.016);
        assert_eq!(session.state(), FsmState::GameOver);

        assert_eq!(session.start_or_restart(new_game), StartOutcome::Restarted);
        assert_eq!(session.state(), FsmState::Running);
        assert_eq!(session.game().unwrap().score().right, 0);
    }
}
