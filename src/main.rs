mod config;
mod debug;
mod flow;
mod game;
mod game_modes;
mod menu;
mod ui;

use anyhow::Context;
use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use config::Config;
use flow::{after_round, AppState, MatchScore};
use game::ResolvedBindings;
use menu::{MenuAction, MenuState, ResultAction, ResultState};

fn main() -> anyhow::Result<()> {
    debug::init(std::env::var_os("TERMPONG_DEBUG").is_some())
        .context("failed to initialize debug logging")?;
    debug::log("SESSION_START", "termpong starting");

    // All of this runs before the TUI starts, so failures still print
    // to a usable terminal
    let config = config::load_config().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;
    let keys = ResolvedBindings::from_config(&config.keybindings)
        .context("invalid key bindings in configuration")?;

    // Setup terminal
    enable_raw_mode().context("failed to enable raw terminal mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;

    // Key-release events only arrive under the enhanced keyboard
    // protocol; on terminals without it, paddles coast until the key
    // auto-repeat stream matches the held state
    let enhanced_keys = supports_keyboard_enhancement().unwrap_or(false);
    if enhanced_keys {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )
        .context("failed to enable keyboard enhancement")?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    // Run the screen flow
    let result = run_app(&mut terminal, &config, &keys);

    // Restore terminal in reverse-acquisition order
    if enhanced_keys {
        let _ = execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags);
    }
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = disable_raw_mode();
    let _ = terminal.show_cursor();

    debug::log("SESSION_END", "termpong exiting");
    result
}

/// Drive the Menu -> Play -> Result state machine until an exit edge.
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
    keys: &ResolvedBindings,
) -> anyhow::Result<()> {
    let mut app_state = AppState::Menu;
    let mut menu_state = MenuState::new();
    let mut result_state = ResultState::new();
    let mut score = MatchScore::new();

    loop {
        match app_state {
            AppState::Menu => {
                terminal.draw(|f| menu::render_menu(f, &menu_state, &config.display))?;
                match menu::handle_menu_input(&mut menu_state)? {
                    MenuAction::StartGame(mode) => {
                        debug::log("SCREEN", &format!("Menu -> Play ({:?})", mode));
                        score.reset();
                        app_state = AppState::Play(mode);
                    }
                    MenuAction::Quit => app_state = AppState::Exiting,
                    MenuAction::None => {}
                }
            }
            AppState::Play(mode) => {
                let outcome = game_modes::run_round(terminal, config, mode, keys, &score)?;
                app_state = after_round(outcome, mode, &mut score, config.physics.max_points);
                if let AppState::Result(_) = app_state {
                    debug::log(
                        "SCREEN",
                        &format!("Play -> Result ({}:{})", score.first, score.second),
                    );
                    result_state = ResultState::new();
                }
            }
            AppState::Result(mode) => {
                terminal.draw(|f| {
                    menu::render_result(f, &result_state, score.winner_message(), &config.display)
                })?;
                match menu::handle_result_input(&mut result_state)? {
                    ResultAction::PlayAgain => {
                        debug::log("SCREEN", "Result -> Play (rematch)");
                        score.reset();
                        app_state = AppState::Play(mode);
                    }
                    ResultAction::MainMenu => {
                        menu_state = MenuState::new();
                        app_state = AppState::Menu;
                    }
                    ResultAction::Quit => app_state = AppState::Exiting,
                    ResultAction::None => {}
                }
            }
            AppState::Exiting => return Ok(()),
        }
    }
}
