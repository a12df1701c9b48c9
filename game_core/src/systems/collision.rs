use crate::systems::{register_return, return_deflection};
use crate::{Ball, Config, Events, Paddle, Score, Side};
use hecs::World;

/// Resolve paddle and wall contacts for the cell the ball is about to enter.
///
/// Only the snapped next cell is tested, so a ball moving more than one cell
/// per tick can pass through a paddle or wall. Sets `events.player_missed`
/// and leaves the ball untouched when the player fails to return it.
pub fn check_collisions(world: &mut World, config: &Config, score: &mut Score, events: &mut Events) {
    let ball_data = {
        let mut ball_query = world.query::<&Ball>();
        ball_query.iter().next().map(|(_e, ball)| *ball)
    };

    let Some(ball) = ball_data else {
        return; // No ball in world
    };

    let player_row = world
        .query::<&Paddle>()
        .iter()
        .find(|(_e, p)| p.side == Side::Player)
        .map(|(_e, p)| p.row)
        .unwrap_or_else(|| config.center_row());

    let (next_x, next_y) = ball.tentative_cell();
    let mut vel = ball.vel;

    if next_x == config.player_edge() {
        let offset = player_row - next_y;
        if offset.abs() <= config.paddle_reach() {
            vel.y += return_deflection(next_y, player_row, *score, config);
            vel.x = -vel.x;
            register_return(score, events);
            tracing::debug!(score = score.value(), offset, vy = vel.y, "player returned ball");
        } else {
            events.player_missed = true;
            tracing::debug!(score = score.value(), offset, "player missed ball");
            return;
        }
    } else if next_x == config.opponent_edge() {
        // The opponent cannot lose
        vel.x = -vel.x;
        events.opponent_returned = true;
    }

    if next_y == config.top_wall() || next_y == config.bottom_wall() {
        vel.y = -vel.y;
        events.ball_hit_wall = true;
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.vel = vel;
    }
}
