//! The single owner of all mutable game state.

use std::sync::Arc;

use hecs::World;

use crate::{
    create_ball, create_paddle, scene, step, Ball, Board, Config, Events, PaddleControls, Scene,
    Score, Side, TickOutcome,
};

pub struct Game {
    world: World,
    config: Config,
    score: Score,
    events: Events,
    controls: Arc<PaddleControls>,
    board: Board,
    tick: u64,
}

impl Game {
    /// Serve from the centre toward the player with both paddles centred
    pub fn new(config: Config) -> Self {
        let ball = Ball::new(config.ball_spawn(), config.initial_ball_velocity());
        Self::with_ball(config, ball, Score::new())
    }

    /// Start from an arbitrary ball and score, paddles centred
    pub fn with_ball(config: Config, ball: Ball, score: Score) -> Self {
        let mut world = World::new();
        let center = config.center_row();

        create_paddle(&mut world, Side::Player, center);
        create_paddle(&mut world, Side::Opponent, center);
        create_ball(&mut world, ball.pos, ball.vel);

        Self {
            board: Board::new(&config),
            controls: Arc::new(PaddleControls::new(center)),
            world,
            config,
            score,
            events: Events::new(),
            tick: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Events raised by the most recent tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Handle for the input thread
    pub fn controls(&self) -> Arc<PaddleControls> {
        Arc::clone(&self.controls)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.query::<&Ball>().iter().next().map(|(_e, b)| *b)
    }

    pub fn scene(&self) -> Option<Scene> {
        scene(&self.world, self.score)
    }

    pub fn tick(&mut self) -> TickOutcome {
        self.tick += 1;
        step(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.events,
            &self.controls,
        )
    }

    /// Redraw the board for the current state and return it
    pub fn render(&mut self) -> &Board {
        if let Some(scene) = scene(&self.world, self.score) {
            self.board.draw(&scene);
        }
        &self.board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_new_game_initial_state() {
        let game = Game::new(Config::new());
        let scene = game.scene().unwrap();
        assert_eq!(scene.ball, Vec2::new(50.0, 15.0));
        assert_eq!(scene.player_row, 15);
        assert_eq!(scene.opponent_row, 15);
        assert_eq!(game.score().value(), 0);
        assert_eq!(game.controls().row(), 15);
    }

    #[test]
    fn test_tick_moves_ball_toward_player() {
        let mut game = Game::new(Config::new());
        assert_eq!(game.tick(), TickOutcome::Continue);
        let ball = game.ball().unwrap();
        assert!(ball.pos.x < 50.0);
        assert_eq!(ball.pos.y, 15.0);
        assert_eq!(game.tick_count(), 1);
    }

    #[test]
    fn test_controls_reach_player_paddle() {
        let mut game = Game::new(Config::new());
        let controls = game.controls();
        controls.nudge(-3, game.config());

        game.tick();

        assert_eq!(game.scene().unwrap().player_row, 12);
    }

    #[test]
    fn test_render_draws_every_object() {
        let mut game = Game::new(Config::new());
        let text = game.render().to_string();
        assert_eq!(text.matches('O').count(), 1);
        assert_eq!(text.matches('|').count(), 6);
    }
}
