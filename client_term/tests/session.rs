use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use client_term::input::{spawn_input_thread, KeySource, Keystroke};
use client_term::{run_session, Screen, SessionEnd};
use game_core::{Ball, Config, Game, Score};
use glam::Vec2;

/// Keys fed from the test thread
struct ChannelKeys(Receiver<char>);

impl KeySource for ChannelKeys {
    fn next_key(&mut self) -> io::Result<Option<Keystroke>> {
        Ok(self.0.recv().ok().map(Keystroke::Char))
    }
}

/// Ball bouncing between the walls in the middle column, so it never
/// reaches either paddle.
fn endless_rally() -> Game {
    let ball = Ball::new(Vec2::new(50.0, 15.0), Vec2::new(0.0, 0.5));
    Game::with_ball(Config::new(), ball, Score::new())
}

#[test]
fn test_quit_key_ends_running_session() {
    let mut game = endless_rally();
    let controls = game.controls();
    let (key_tx, key_rx) = mpsc::channel();
    let (quit_tx, quit_rx) = mpsc::channel();

    let input = spawn_input_thread(ChannelKeys(key_rx), controls.clone(), Config::new(), move || {
        quit_tx.send(()).unwrap()
    })
    .unwrap();

    let session = thread::spawn(move || {
        let mut screen = Screen::new(Vec::new());
        run_session(&mut game, &mut screen, Duration::from_millis(1)).unwrap()
    });

    for key in ['s', 's', 'x', 's'] {
        key_tx.send(key).unwrap();
    }
    thread::sleep(Duration::from_millis(20));
    key_tx.send('q').unwrap();

    input.join().unwrap();
    let end = session.join().unwrap();

    assert_eq!(end, SessionEnd::Quit);
    assert!(quit_rx.try_recv().is_ok(), "Quit handler ran on the input thread");
    assert_eq!(controls.row(), 18);
}

#[test]
fn test_quit_before_session_renders_nothing() {
    let mut game = endless_rally();
    let (key_tx, key_rx) = mpsc::channel();
    key_tx.send('q').unwrap();

    let input = spawn_input_thread(ChannelKeys(key_rx), game.controls(), Config::new(), || {})
        .unwrap();
    input.join().unwrap();

    let mut screen = Screen::new(Vec::new());
    let end = run_session(&mut game, &mut screen, Duration::ZERO).unwrap();

    assert_eq!(end, SessionEnd::Quit);
    assert!(screen.into_inner().is_empty());
}

#[test]
fn test_wall_bounces_are_silent_and_ball_stays_on_board() {
    let mut game = endless_rally();
    let controls = game.controls();
    let config = Config::new();

    for _ in 0..500 {
        game.tick();
        let (x, y) = game.ball().unwrap().cell();
        assert_eq!(x, 50);
        assert!((0..config.board_height).contains(&y));
        assert_eq!(game.events().paddle_hits(), 0);
    }

    controls.request_quit();
    let mut screen = Screen::new(Vec::new());
    assert_eq!(
        run_session(&mut game, &mut screen, Duration::ZERO).unwrap(),
        SessionEnd::Quit
    );
}
