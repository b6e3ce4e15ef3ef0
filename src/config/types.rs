// Termpong configuration types
// All settings with sensible defaults matching the classic tuning values

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub physics: PhysicsConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Startup validation. Every dimension must be positive, the paddles
    /// must fit on the field, and a match must be winnable.
    pub fn validate(&self) -> Result<()> {
        let p = &self.physics;
        if p.paddle_width <= 0
            || p.paddle_height <= 0
            || p.ball_diameter <= 0
            || p.screen_width <= 0
            || p.screen_height <= 0
        {
            bail!("physics dimensions must all be positive");
        }
        if p.x_offset < 0 {
            bail!("x_offset must not be negative");
        }
        if p.max_velocity <= 0 {
            bail!("max_velocity must be positive");
        }
        if p.max_points == 0 {
            bail!("max_points must be at least 1");
        }
        if p.paddle_height >= p.screen_height {
            bail!("paddle_height must be smaller than screen_height");
        }
        if self.display.target_fps == 0 {
            bail!("target_fps must be positive");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct KeyBindings {
    // First player paddle (left side)
    pub first_paddle_up: String,
    pub first_paddle_down: String,

    // Second player paddle (right side, human only in two-player mode)
    pub second_paddle_up: String,
    pub second_paddle_down: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            first_paddle_up: "W".to_string(),
            first_paddle_down: "S".to_string(),
            second_paddle_up: "Up".to_string(),
            second_paddle_down: "Down".to_string(),
        }
    }
}

// Container-level default so a partial table fills the missing fields
// instead of failing the whole parse
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PhysicsConfig {
    // Paddle size in virtual units
    pub paddle_width: i32,
    pub paddle_height: i32,

    // Horizontal gap between a paddle and its screen edge
    pub x_offset: i32,

    // Speed cap for paddles, and the upper bound for serve speed
    pub max_velocity: i32,

    // Ball is square, same extent on both axes
    pub ball_diameter: i32,

    // Points required to win a match
    pub max_points: u8,

    // Virtual field dimensions the simulation runs in
    pub screen_width: i32,
    pub screen_height: i32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            paddle_width: 20,
            paddle_height: 80,
            x_offset: 10,
            max_velocity: 10,
            ball_diameter: 20,
            max_points: 1,
            screen_width: 960,
            screen_height: 720,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    // Target frames per second; also the simulation tick rate
    pub target_fps: u64,

    // Menu/result text color (RGB values 0-255)
    pub content_color: [u8; 3],

    // Highlight color for the selected menu option
    pub selected_color: [u8; 3],

    // Blank rows between menu options
    pub menu_options_gap: u16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            content_color: [255, 255, 255],
            selected_color: [0, 255, 0],
            menu_options_gap: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let mut config = Config::default();
        config.physics.paddle_height = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_max_velocity_rejected() {
        let mut config = Config::default();
        config.physics.max_velocity = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unwinnable_match_rejected() {
        let mut config = Config::default();
        config.physics.max_points = 0;
        assert!(config.validate().is_err());
    }
}
