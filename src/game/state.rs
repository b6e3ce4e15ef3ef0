use rand::Rng;

use crate::config::PhysicsConfig;

use super::input::{InputState, RawInput, ResolvedBindings};

/// Which side of the field a paddle defends. First is the left paddle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerSide {
    First,
    Second,
}

#[derive(Debug, Clone)]
pub struct Paddle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Signed vertical speed in virtual units per tick
    pub velocity: i32,
    pub side: PlayerSide,
    pub is_human: bool,
}

impl Paddle {
    /// Spawn a paddle vertically centered at its side's x offset.
    pub fn new(physics: &PhysicsConfig, side: PlayerSide, is_human: bool) -> Self {
        let x = match side {
            PlayerSide::First => physics.x_offset,
            PlayerSide::Second => {
                physics.screen_width - physics.x_offset - physics.paddle_width
            }
        };

        Self {
            x,
            y: (physics.screen_height - physics.paddle_height) / 2,
            width: physics.paddle_width,
            height: physics.paddle_height,
            velocity: 0,
            side,
            is_human,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Ball {
    pub x: i32,
    pub y: i32,
    pub diameter: i32,
    pub velocity_x: i32,
    pub velocity_y: i32,
}

impl Ball {
    /// Spawn the ball at field center with a randomized serve.
    ///
    /// Both velocity components land in [max_velocity/2 + 1, max_velocity]
    /// with independently random signs, so every serve is fast enough to
    /// reach a paddle and all four directions occur.
    pub fn spawn(physics: &PhysicsConfig, rng: &mut impl Rng) -> Self {
        Self {
            x: (physics.screen_width - physics.ball_diameter) / 2,
            y: (physics.screen_height - physics.ball_diameter) / 2,
            diameter: physics.ball_diameter,
            velocity_x: serve_velocity(physics.max_velocity, rng),
            velocity_y: serve_velocity(physics.max_velocity, rng),
        }
    }
}

fn serve_velocity(max_velocity: i32, rng: &mut impl Rng) -> i32 {
    let half = max_velocity / 2;
    let magnitude = rng.gen_range(1..=half.max(1)) + half;
    if rng.gen_bool(0.5) {
        magnitude
    } else {
        -magnitude
    }
}

/// Everything owned by one rally: both paddles, the ball, and the
/// held-key state feeding each paddle. Rebuilt from scratch at the
/// start of every round.
#[derive(Debug, Clone)]
pub struct Round {
    pub first: Paddle,
    pub second: Paddle,
    pub ball: Ball,
    pub first_input: InputState,
    pub second_input: InputState,
}

impl Round {
    pub fn new(
        physics: &PhysicsConfig,
        single_player: bool,
        keys: &ResolvedBindings,
        rng: &mut impl Rng,
    ) -> Self {
        Self {
            first: Paddle::new(physics, PlayerSide::First, true),
            second: Paddle::new(physics, PlayerSide::Second, !single_player),
            ball: Ball::spawn(physics, rng),
            first_input: InputState::new(keys.first_up, keys.first_down),
            second_input: InputState::new(keys.second_up, keys.second_down),
        }
    }

    /// Route one raw input event to the paddles that listen for keys.
    /// The computer-driven paddle never reads key state.
    pub fn apply_input(&mut self, input: &RawInput) {
        self.first_input.apply(input);
        if self.second.is_human {
            self.second_input.apply(input);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    fn bindings() -> ResolvedBindings {
        ResolvedBindings {
            first_up: KeyCode::Char('w'),
            first_down: KeyCode::Char('s'),
            second_up: KeyCode::Up,
            second_down: KeyCode::Down,
        }
    }

    #[test]
    fn test_paddles_spawn_centered_at_their_offsets() {
        let physics = PhysicsConfig::default();
        let first = Paddle::new(&physics, PlayerSide::First, true);
        let second = Paddle::new(&physics, PlayerSide::Second, false);

        assert_eq!(first.x, physics.x_offset);
        assert_eq!(
            second.x,
            physics.screen_width - physics.x_offset - physics.paddle_width
        );
        assert_eq!(first.y, (physics.screen_height - physics.paddle_height) / 2);
        assert_eq!(first.velocity, 0);
        assert_eq!(second.velocity, 0);
    }

    #[test]
    fn test_serve_velocity_range_and_sign_coverage() {
        let physics = PhysicsConfig::default();
        let mut rng = rand::thread_rng();

        let lower = physics.max_velocity / 2 + 1;
        let mut seen_signs = [false; 4];

        for _ in 0..1000 {
            let ball = Ball::spawn(&physics, &mut rng);
            assert!(
                (lower..=physics.max_velocity).contains(&ball.velocity_x.abs()),
                "vx {} outside serve range",
                ball.velocity_x
            );
            assert!(
                (lower..=physics.max_velocity).contains(&ball.velocity_y.abs()),
                "vy {} outside serve range",
                ball.velocity_y
            );

            let idx = ((ball.velocity_x > 0) as usize) << 1 | (ball.velocity_y > 0) as usize;
            seen_signs[idx] = true;
        }

        assert!(
            seen_signs.iter().all(|&s| s),
            "all four serve directions should occur in 1000 spawns"
        );
    }

    #[test]
    fn test_successive_spawns_resample_velocity() {
        let physics = PhysicsConfig::default();
        let mut rng = rand::thread_rng();

        // A fresh round must not inherit the previous serve; across 100
        // spawns the (vx, vy) pairs cannot all collapse to one value
        let mut distinct = std::collections::HashSet::new();
        for _ in 0..100 {
            let ball = Ball::spawn(&physics, &mut rng);
            distinct.insert((ball.velocity_x, ball.velocity_y));
        }
        assert!(distinct.len() > 1);
    }

    #[test]
    fn test_single_player_round_has_computer_second_paddle() {
        let physics = PhysicsConfig::default();
        let mut rng = rand::thread_rng();

        let round = Round::new(&physics, true, &bindings(), &mut rng);
        assert!(round.first.is_human);
        assert!(!round.second.is_human);

        let round = Round::new(&physics, false, &bindings(), &mut rng);
        assert!(round.second.is_human);
    }

    #[test]
    fn test_computer_paddle_ignores_key_events() {
        let physics = PhysicsConfig::default();
        let mut rng = rand::thread_rng();
        let mut round = Round::new(&physics, true, &bindings(), &mut rng);

        round.apply_input(&RawInput::KeyDown(KeyCode::Up));
        assert!(!round.second_input.up_held);

        // Same event reaches the second paddle when it is human
        let mut round = Round::new(&physics, false, &bindings(), &mut rng);
        round.apply_input(&RawInput::KeyDown(KeyCode::Up));
        assert!(round.second_input.up_held);
    }
}
