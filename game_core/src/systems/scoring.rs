use crate::{Config, Events, Score};

/// Vertical nudge for a ball struck dead centre.
///
/// Depends only on the score, so a perfect hit still changes the angle a
/// little without a random source.
pub fn center_nudge(score: Score, config: &Config) -> f32 {
    let n = score.value();
    let base = if n % 2 == 0 {
        config.center_nudge
    } else {
        -config.center_nudge
    };
    if n % 3 == 0 {
        base * 2.0
    } else {
        base * 3.0
    }
}

/// Change in vertical velocity when the player's paddle meets the ball at
/// `ball_row`. Bottom half pushes down, top half pushes up.
pub fn return_deflection(ball_row: i32, paddle_row: i32, score: Score, config: &Config) -> f32 {
    if ball_row > paddle_row {
        config.paddle_edge_deflection
    } else if ball_row < paddle_row {
        -config.paddle_edge_deflection
    } else {
        center_nudge(score, config)
    }
}

/// Credit the player with a successful return
pub fn register_return(score: &mut Score, events: &mut Events) {
    score.increment();
    events.player_returned = true;
}
