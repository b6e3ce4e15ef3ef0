use anyhow::{anyhow, bail, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use crate::config::KeyBindings;

/// One event from the input collaborator, already stripped down to what
/// the simulation cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RawInput {
    /// Terminal-level quit request (Ctrl-C)
    Quit,
    KeyDown(KeyCode),
    KeyUp(KeyCode),
}

/// Drain every pending terminal event without blocking.
///
/// Key repeat is reported as another key-down; the held-key state in
/// [`InputState`] is level-triggered so the duplicate is harmless.
/// Non-key events (resize, mouse) are dropped.
pub fn drain_input() -> Result<Vec<RawInput>, io::Error> {
    let mut inputs = Vec::new();

    while event::poll(Duration::from_millis(0))? {
        if let Event::Key(key) = event::read()? {
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                inputs.push(RawInput::Quit);
                continue;
            }
            match key.kind {
                KeyEventKind::Press | KeyEventKind::Repeat => {
                    inputs.push(RawInput::KeyDown(normalize(key.code)));
                }
                KeyEventKind::Release => {
                    inputs.push(RawInput::KeyUp(normalize(key.code)));
                }
            }
        }
    }

    Ok(inputs)
}

/// Case-fold character keys so a held Shift cannot wedge a paddle.
fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

/// Resolve a config key name ("W", "Up", ...) to a key code.
pub fn parse_key_name(name: &str) -> Option<KeyCode> {
    match name {
        "Up" => Some(KeyCode::Up),
        "Down" => Some(KeyCode::Down),
        "Left" => Some(KeyCode::Left),
        "Right" => Some(KeyCode::Right),
        _ => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(normalize(KeyCode::Char(c))),
                _ => None,
            }
        }
    }
}

/// Paddle key bindings resolved from config strings to key codes.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedBindings {
    pub first_up: KeyCode,
    pub first_down: KeyCode,
    pub second_up: KeyCode,
    pub second_down: KeyCode,
}

impl ResolvedBindings {
    pub fn from_config(bindings: &KeyBindings) -> Result<Self> {
        let resolve = |name: &str| {
            parse_key_name(name).ok_or_else(|| anyhow!("unknown key name in config: {name:?}"))
        };
        let resolved = Self {
            first_up: resolve(&bindings.first_paddle_up)?,
            first_down: resolve(&bindings.first_paddle_down)?,
            second_up: resolve(&bindings.second_paddle_up)?,
            second_down: resolve(&bindings.second_paddle_down)?,
        };

        // Checked on the resolved codes so "W" and "w" count as the
        // same key. A shared binding would drive both paddles at once.
        let codes = [
            resolved.first_up,
            resolved.first_down,
            resolved.second_up,
            resolved.second_down,
        ];
        for (i, a) in codes.iter().enumerate() {
            if codes[i + 1..].contains(a) {
                bail!("paddle key bindings must be distinct, {a:?} is bound twice");
            }
        }

        Ok(resolved)
    }
}

/// Held-key state for one paddle.
///
/// Level-triggered: a key-down latches the flag until the matching
/// key-up arrives. Events for other keys are ignored entirely.
#[derive(Debug, Clone)]
pub struct InputState {
    up_key: KeyCode,
    down_key: KeyCode,
    pub up_held: bool,
    pub down_held: bool,
}

impl InputState {
    pub fn new(up_key: KeyCode, down_key: KeyCode) -> Self {
        Self {
            up_key,
            down_key,
            up_held: false,
            down_held: false,
        }
    }

    pub fn apply(&mut self, input: &RawInput) {
        match *input {
            RawInput::KeyDown(code) => {
                if code == self.up_key {
                    self.up_held = true;
                } else if code == self.down_key {
                    self.down_held = true;
                }
            }
            RawInput::KeyUp(code) => {
                if code == self.up_key {
                    self.up_held = false;
                } else if code == self.down_key {
                    self.down_held = false;
                }
            }
            RawInput::Quit => {}
        }
    }
}
