use crate::render::{compose_frame, game_over_panel};
use crate::systems::*;
use crate::{
    create_ball, create_paddle, Ball, Config, Environment, Events, FsmState, GameAction, GameFsm,
    GameRng, InputEvent, InputSource, OutputSink, Paddle, Playfield, Score, Side, Time,
};
use glam::Vec2;
use hecs::World;

/// One match: two paddles, one ball, and the ports they are shown through
pub struct Game {
    pub world: World,
    pub field: Playfield,
    pub config: Config,
    pub time: Time,
    pub rng: GameRng,
    pub events: Events,
    fsm: GameFsm,
    winner: Option<Side>,
    input: Box<dyn InputSource>,
    sink: Box<dyn OutputSink>,
    env: Box<dyn Environment>,
}

impl Game {
    pub fn new(
        field: Playfield,
        config: Config,
        seed: u64,
        input: Box<dyn InputSource>,
        sink: Box<dyn OutputSink>,
        env: Box<dyn Environment>,
    ) -> Self {
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, &field, &config);
        create_paddle(&mut world, Side::Right, &field, &config);
        create_ball(&mut world, field.center(), Vec2::ZERO, &config);
        reset_ball(&mut world, &field, &config);

        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::Start);

        let mut game = Self {
            world,
            field,
            config,
            time: Time::new(0.0, 0.0),
            rng: GameRng::new(seed),
            events: Events::new(),
            fsm,
            winner: None,
            input,
            sink,
            env,
        };
        game.publish_scores();
        game.env.log(format!(
            "Match started on {}x{} field (seed {})",
            field.width, field.height, seed
        ));
        game
    }

    /// One iteration of the frame loop: input, simulation, drawing
    pub fn frame(&mut self, dt: f32) {
        for event in self.input.poll() {
            self.handle_input(event);
        }
        self.update(dt);
        self.draw();
    }

    /// Advance the simulation by one frame. Does nothing once the match is over.
    pub fn update(&mut self, dt: f32) {
        if self.fsm.is_game_over() {
            return;
        }

        self.events.clear();
        self.time.advance(dt, self.config.max_dt);

        tick_serve(
            &mut self.world,
            &self.time,
            &mut self.rng,
            &self.config,
            &mut self.events,
        );
        steer_opponent(&mut self.world, &self.config);
        move_paddles(&mut self.world, &self.field);

        if let Some(scorer) = update_ball(&mut self.world, &self.field, &self.config, &mut self.events)
        {
            let score = self.score();
            let points = match scorer {
                Side::Left => score.left,
                Side::Right => score.right,
            };
            self.sink.set_score(scorer, points);
            self.env.log(format!(
                "{} scores ({} - {})",
                scorer.label(),
                score.left,
                score.right
            ));
        }

        if let Some(winner) = self.score().has_winner(self.config.win_score) {
            if self.fsm.transition(GameAction::Win).success {
                self.winner = Some(winner);
                self.env.log(format!("Game over: {} wins", winner.label()));
            }
        }
    }

    /// Emit the whole frame to the output sink
    pub fn draw(&mut self) {
        let paddles = [self.left_paddle(), self.right_paddle()];
        let paddles: Vec<Paddle> = paddles.into_iter().flatten().collect();
        let ball = self.ball();
        let frame = compose_frame(&self.field, &paddles, ball.as_ref(), self.game_over_winner());
        for command in frame {
            self.sink.draw(command);
        }
    }

    /// Apply one player intent
    pub fn handle_input(&mut self, event: InputEvent) {
        let speed = self.config.paddle_speed;
        match event {
            InputEvent::Up => set_paddle_velocity(&mut self.world, Side::Left, -speed),
            InputEvent::Down => set_paddle_velocity(&mut self.world, Side::Left, speed),
            InputEvent::Release => set_paddle_velocity(&mut self.world, Side::Left, 0.0),
            InputEvent::Restart => {
                self.reset_game();
            }
        }
    }

    /// Start a new match after game over. Returns false if the match is still running.
    ///
    /// The right paddle keeps its position; the heuristic brings it back.
    pub fn reset_game(&mut self) -> bool {
        if !self.fsm.transition(GameAction::Restart).success {
            return false;
        }

        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.score = 0;
        }
        self.publish_scores();
        self.winner = None;
        recenter_paddle(&mut self.world, Side::Left, &self.field);
        reset_ball(&mut self.world, &self.field, &self.config);

        self.env.log("Match restarted".to_string());
        true
    }

    /// Follow a new host size. Redraws the game-over panel at once, since the
    /// next frame may be late while the host is still resizing.
    pub fn resize(&mut self, field: Playfield) {
        self.field = field;
        let right_x = self.config.paddle_x(Side::Right, &field);
        set_paddle_x(&mut self.world, Side::Right, right_x);
        self.env
            .log(format!("Resized to {}x{}", field.width, field.height));

        if let Some(winner) = self.game_over_winner() {
            for command in game_over_panel(&self.field, winner) {
                self.sink.draw(command);
            }
        }
    }

    pub fn state(&self) -> FsmState {
        self.fsm.state()
    }

    pub fn is_game_over(&self) -> bool {
        self.fsm.is_game_over()
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn winner_label(&self) -> Option<&'static str> {
        self.winner.map(|side| side.label())
    }

    pub fn score(&self) -> Score {
        Score {
            left: self.left_paddle().map_or(0, |p| p.score),
            right: self.right_paddle().map_or(0, |p| p.score),
        }
    }

    pub fn playfield(&self) -> Playfield {
        self.field
    }

    pub fn left_paddle(&self) -> Option<Paddle> {
        find_paddle(&self.world, Side::Left)
    }

    pub fn right_paddle(&self) -> Option<Paddle> {
        find_paddle(&self.world, Side::Right)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    fn game_over_winner(&self) -> Option<Side> {
        if self.fsm.is_game_over() {
            self.winner
        } else {
            None
        }
    }

    fn publish_scores(&mut self) {
        let score = self.score();
        self.sink.set_score(Side::Left, score.left);
        self.sink.set_score(Side::Right, score.right);
    }
}
