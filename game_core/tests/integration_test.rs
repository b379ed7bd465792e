use game_core::*;
use glam::Vec2;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

#[derive(Default)]
struct Surface {
    commands: Vec<DrawCommand>,
    scores: Vec<(Side, u8)>,
    pending_input: VecDeque<InputEvent>,
    log: Vec<String>,
}

struct MockInput(Rc<RefCell<Surface>>);

impl InputSource for MockInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        self.0.borrow_mut().pending_input.drain(..).collect()
    }
}

struct MockSink(Rc<RefCell<Surface>>);

impl OutputSink for MockSink {
    fn draw(&mut self, command: DrawCommand) {
        self.0.borrow_mut().commands.push(command);
    }

    fn set_score(&mut self, side: Side, score: u8) {
        self.0.borrow_mut().scores.push((side, score));
    }
}

struct MockEnv(Rc<RefCell<Surface>>);

impl Environment for MockEnv {
    fn log(&self, msg: String) {
        self.0.borrow_mut().log.push(msg);
    }
}

const FRAME: f32 = 1.0 / 60.0;

fn setup_game(seed: u64) -> (Game, Rc<RefCell<Surface>>) {
    let surface = Rc::new(RefCell::new(Surface::default()));
    let game = Game::new(
        Playfield::new(600.0, 400.0),
        Config::new(),
        seed,
        Box::new(MockInput(surface.clone())),
        Box::new(MockSink(surface.clone())),
        Box::new(MockEnv(surface.clone())),
    );
    (game, surface)
}

fn set_scores(game: &mut Game, left: u8, right: u8) {
    for (_e, paddle) in game.world.query_mut::<&mut Paddle>() {
        paddle.score = match paddle.side {
            Side::Left => left,
            Side::Right => right,
        };
    }
}

fn place_ball(game: &mut Game, pos: Vec2, vel: Vec2) {
    for (_e, ball) in game.world.query_mut::<&mut Ball>() {
        ball.serve.cancel();
        ball.pos = pos;
        ball.vel = vel;
    }
}

fn panel_count(surface: &Surface) -> usize {
    surface
        .commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::Text { text, .. } if text == "Game Over"))
        .count()
}

#[test]
fn test_ball_serves_after_half_second() {
    let (mut game, _surface) = setup_game(7);

    // 29 frames ≈ 0.483 s
    for _ in 0..29 {
        game.frame(FRAME);
    }
    assert_eq!(game.ball().unwrap().vel, Vec2::ZERO);
    assert_eq!(game.ball().unwrap().pos, game.playfield().center());

    game.frame(FRAME);
    game.frame(FRAME);
    let vel = game.ball().unwrap().vel;
    assert_eq!(vel.x.abs(), 3.0, "Serve speed is 3 either way");
    assert!(vel.y >= -2.0 && vel.y < 2.0);
}

#[test]
fn test_paddles_stay_in_field_for_long_rally() {
    let (mut game, surface) = setup_game(11);
    let field = game.playfield();

    for i in 0..3000 {
        let event = if (i / 90) % 2 == 0 {
            InputEvent::Up
        } else {
            InputEvent::Down
        };
        surface.borrow_mut().pending_input.push_back(event);
        game.frame(FRAME);

        for paddle in [game.left_paddle().unwrap(), game.right_paddle().unwrap()] {
            assert!(paddle.y >= 0.0, "paddle above field at frame {}", i);
            assert!(
                paddle.y <= field.height - paddle.height,
                "paddle below field at frame {}",
                i
            );
        }
        if game.is_game_over() {
            break;
        }
    }
}

#[test]
fn test_scoring_is_exclusive_per_frame() {
    let (mut game, _surface) = setup_game(3);
    let mut last = game.score();

    for _ in 0..5000 {
        game.frame(FRAME);
        let now = game.score();
        let gained = (now.left - last.left) + (now.right - last.right);
        assert!(gained <= 1, "both sides scored in one frame");
        last = now;
        if game.is_game_over() {
            break;
        }
    }
}

#[test]
fn test_left_reaches_five_player_one_wins() {
    let (mut game, surface) = setup_game(5);
    set_scores(&mut game, 4, 3);
    place_ball(&mut game, Vec2::new(593.0, 20.0), Vec2::new(3.0, 0.0));

    game.frame(FRAME);

    assert!(game.is_game_over());
    assert_eq!(game.score(), Score { left: 5, right: 3 });
    assert_eq!(game.winner_label(), Some("Player 1"));
    assert_eq!(panel_count(&surface.borrow()), 1);
    assert!(surface
        .borrow()
        .commands
        .iter()
        .any(|c| matches!(c, DrawCommand::Text { text, .. } if text == "Player 1 wins!")));
}

#[test]
fn test_right_reaches_five_cpu_wins() {
    let (mut game, surface) = setup_game(5);
    set_scores(&mut game, 4, 4);
    place_ball(&mut game, Vec2::new(7.0, 380.0), Vec2::new(-3.0, 0.0));

    game.frame(FRAME);

    assert!(game.is_game_over());
    assert_eq!(game.score(), Score { left: 4, right: 5 });
    assert_eq!(game.winner(), Some(Side::Right));
    assert_eq!(game.winner_label(), Some("CPU"));
    assert_eq!(surface.borrow().scores.last(), Some(&(Side::Right, 5)));
}

#[test]
fn test_restart_key_resets_match() {
    let (mut game, surface) = setup_game(9);
    set_scores(&mut game, 4, 1);
    place_ball(&mut game, Vec2::new(593.0, 20.0), Vec2::new(3.0, 0.0));
    game.frame(FRAME);
    assert!(game.is_game_over());

    surface.borrow_mut().pending_input.push_back(InputEvent::Restart);
    game.frame(FRAME);

    assert!(!game.is_game_over());
    assert_eq!(game.state(), FsmState::Running);
    assert_eq!(game.score(), Score { left: 0, right: 0 });
    assert_eq!(game.winner(), None);
    assert!(surface
        .borrow()
        .log
        .iter()
        .any(|line| line == "Match restarted"));
}

#[test]
fn test_frames_keep_drawing_after_game_over() {
    let (mut game, surface) = setup_game(9);
    set_scores(&mut game, 0, 4);
    place_ball(&mut game, Vec2::new(7.0, 380.0), Vec2::new(-3.0, 0.0));
    game.frame(FRAME);
    let ball = game.ball().unwrap();

    game.frame(FRAME);
    game.frame(FRAME);

    assert_eq!(panel_count(&surface.borrow()), 3, "Overlay drawn every frame");
    assert_eq!(game.ball().unwrap().pos, ball.pos, "Simulation frozen");
}

#[test]
fn test_resize_during_game_over_redraws_immediately() {
    let (mut game, surface) = setup_game(13);
    set_scores(&mut game, 4, 0);
    place_ball(&mut game, Vec2::new(593.0, 20.0), Vec2::new(3.0, 0.0));
    game.frame(FRAME);
    let panels_before = panel_count(&surface.borrow());

    game.resize(Playfield::new(900.0, 500.0));

    assert_eq!(game.right_paddle().unwrap().x, 900.0 - 5.0 - 10.0);
    assert_eq!(panel_count(&surface.borrow()), panels_before + 1);
    let overlay = surface
        .borrow()
        .commands
        .iter()
        .rev()
        .find_map(|c| match c {
            DrawCommand::Rect { width, height, color, .. } if *color == Color::OVERLAY => {
                Some((*width, *height))
            }
            _ => None,
        });
    assert_eq!(overlay, Some((900.0, 500.0)), "Overlay uses the new size");
}

#[test]
fn test_left_paddle_returns_ball() {
    let (mut game, _surface) = setup_game(21);
    // Left paddle spans y 175..225 and its face is at x = 15
    place_ball(&mut game, Vec2::new(22.0, 200.0), Vec2::new(-3.0, 0.0));

    game.frame(FRAME);

    let ball = game.ball().unwrap();
    assert!((ball.vel.x - 3.3).abs() < 1e-5, "Reversed and 10% faster");
    assert_eq!(ball.pos.x, 20.0);
    assert_eq!(game.score(), Score::new());
}

#[test]
fn test_opponent_tracks_ball() {
    let (mut game, _surface) = setup_game(17);
    place_ball(&mut game, Vec2::new(300.0, 380.0), Vec2::ZERO);
    let start = game.right_paddle().unwrap().y;

    for _ in 0..30 {
        game.frame(FRAME);
    }

    let right = game.right_paddle().unwrap();
    assert!(right.y > start, "Opponent should follow the ball down");
    assert!(right.y <= 350.0);
}

#[test]
fn test_session_start_then_restart() {
    let surface = Rc::new(RefCell::new(Surface::default()));
    let factory = || {
        Game::new(
            Playfield::default(),
            Config::new(),
            1,
            Box::new(MockInput(surface.clone())),
            Box::new(MockSink(surface.clone())),
            Box::new(MockEnv(surface.clone())),
        )
    };
    let mut session = Session::new();
    assert_eq!(session.state(), FsmState::Idle);

    assert_eq!(session.start_or_restart(factory), StartOutcome::Started);
    assert_eq!(session.start_or_restart(factory), StartOutcome::Ignored);

    let game = session.game_mut().unwrap();
    set_scores(game, 5, 0);
    session.frame(FRAME);
    assert_eq!(session.state(), FsmState::GameOver);

    assert_eq!(session.start_or_restart(factory), StartOutcome::Restarted);
    assert_eq!(session.state(), FsmState::Running);
}
