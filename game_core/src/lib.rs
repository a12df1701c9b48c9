pub mod board;
pub mod components;
pub mod config;
pub mod game;
pub mod params;
pub mod resources;
pub mod systems;

pub use board::*;
pub use components::*;
pub use config::*;
pub use game::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// How a tick ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    PlayerMissed,
}

/// Advance the simulation by one tick
pub fn step(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    controls: &PaddleControls,
) -> TickOutcome {
    // Clear events at start of tick
    events.clear();

    // 1. Pick up the latest paddle row from the input thread
    ingest_inputs(world, controls, config);

    // 2. Resolve paddle and wall contacts against the next cell
    check_collisions(world, config, score, events);
    if events.player_missed {
        return TickOutcome::PlayerMissed;
    }

    // 3. Move ball from its real-valued position
    move_ball(world);

    TickOutcome::Continue
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, row: i32) -> hecs::Entity {
    world.spawn((Paddle::new(side, row),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}

/// Collect what the renderer needs from the world
pub fn scene(world: &World, score: Score) -> Option<Scene> {
    let ball = world.query::<&Ball>().iter().next().map(|(_e, b)| b.pos)?;

    let mut player_row = None;
    let mut opponent_row = None;
    for (_e, paddle) in world.query::<&Paddle>().iter() {
        match paddle.side {
            Side::Player => player_row = Some(paddle.row),
            Side::Opponent => opponent_row = Some(paddle.row),
        }
    }

    Some(Scene {
        ball,
        player_row: player_row?,
        opponent_row: opponent_row?,
        score,
    })
}
