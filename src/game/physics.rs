use crate::config::PhysicsConfig;

use super::input::InputState;
use super::state::{Ball, Paddle, Round};

/// What one simulation tick concluded about the rally.
///
/// The quit variants are produced by the play loop from input events;
/// the simulation itself only ever yields `Continuing` or a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Continuing,
    FirstPlayerScored,
    SecondPlayerScored,
    QuitToMenu,
    QuitGame,
}

/// Advance the round by one fixed-timestep tick: acceleration, paddle
/// integration, ball integration with collision, then the round-end check.
pub fn tick(round: &mut Round, physics: &PhysicsConfig) -> RoundOutcome {
    if round.first.is_human {
        accelerate_human(&mut round.first, &round.first_input, physics.max_velocity);
    } else {
        accelerate_computer(&mut round.first, &round.ball, physics.max_velocity);
    }
    if round.second.is_human {
        accelerate_human(&mut round.second, &round.second_input, physics.max_velocity);
    } else {
        accelerate_computer(&mut round.second, &round.ball, physics.max_velocity);
    }

    integrate_paddle(&mut round.first, physics.screen_height);
    integrate_paddle(&mut round.second, physics.screen_height);

    integrate_ball(
        &mut round.ball,
        &round.first,
        &round.second,
        physics.screen_height,
    );

    round_outcome(&round.ball, physics.screen_width)
}

/// Accelerate a human paddle from held keys, one unit per tick.
/// Up wins when both keys are held.
pub fn accelerate_human(paddle: &mut Paddle, input: &InputState, max_velocity: i32) {
    if input.up_held {
        if paddle.velocity > -max_velocity {
            paddle.velocity -= 1;
        }
    } else if input.down_held {
        if paddle.velocity < max_velocity {
            paddle.velocity += 1;
        }
    }
}

/// Reactive computer paddle: chase the ball whenever it is entirely
/// above or entirely below the paddle. No look-ahead, so the paddle
/// lags a fast ball.
pub fn accelerate_computer(paddle: &mut Paddle, ball: &Ball, max_velocity: i32) {
    if ball.y + ball.diameter <= paddle.y && paddle.velocity > -max_velocity {
        paddle.velocity -= 1;
    } else if ball.y >= paddle.y + paddle.height && paddle.velocity < max_velocity {
        paddle.velocity += 1;
    }
}

/// Move a paddle by its velocity, clamping to the vertical extent.
/// Hitting either edge also zeroes the velocity; paddles stop dead
/// at the walls rather than bouncing.
pub fn integrate_paddle(paddle: &mut Paddle, screen_height: i32) {
    paddle.y += paddle.velocity;
    if paddle.y + paddle.height >= screen_height {
        paddle.velocity = 0;
        paddle.y = screen_height - paddle.height;
    } else if paddle.y <= 0 {
        paddle.velocity = 0;
        paddle.y = 0;
    }
}

/// Move the ball, then resolve paddle and wall collisions against the
/// just-moved position.
///
/// The paddle test matches the ball's reference x as a point inside the
/// paddle's horizontal band, and the ball's vertical span against the
/// paddle's. The two paddle checks are mutually exclusive, and a hit
/// forces the horizontal velocity outward rather than negating it.
/// Wall reflection looks one tick ahead on y so the ball never leaves
/// the vertical extent.
pub fn integrate_ball(ball: &mut Ball, first: &Paddle, second: &Paddle, screen_height: i32) {
    ball.x += ball.velocity_x;
    ball.y += ball.velocity_y;

    if hits_paddle(ball, first) {
        ball.velocity_x = ball.velocity_x.abs();
    } else if hits_paddle(ball, second) {
        ball.velocity_x = -ball.velocity_x.abs();
    }

    if ball.y + ball.diameter + ball.velocity_y >= screen_height
        || ball.y + ball.velocity_y <= 0
    {
        ball.velocity_y = -ball.velocity_y;
    }
}

fn hits_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.x <= paddle.x + paddle.width
        && ball.x >= paddle.x
        && ball.y <= paddle.y + paddle.height
        && ball.y + ball.diameter >= paddle.y
}

/// Round-end check, run after movement. Exiting past the right edge
/// means the first (left) player won the rally; exiting past the left
/// edge means the second player won.
pub fn round_outcome(ball: &Ball, screen_width: i32) -> RoundOutcome {
    if ball.x + ball.diameter >= screen_width {
        RoundOutcome::FirstPlayerScored
    } else if ball.x <= 0 {
        RoundOutcome::SecondPlayerScored
    } else {
        RoundOutcome::Continuing
    }
}
