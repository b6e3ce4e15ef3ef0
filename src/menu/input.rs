// Menu and result screen input handling

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::state::{GameMode, MenuItem, MenuState, ResultItem, ResultState};

/// Menu action result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Continue in menu
    None,
    /// Start a game mode
    StartGame(GameMode),
    /// Exit application
    Quit,
}

/// Result screen action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultAction {
    /// Continue on the result screen
    None,
    /// Restart the match in the same mode
    PlayAgain,
    /// Back to the main menu
    MainMenu,
    /// Exit application
    Quit,
}

/// Handle menu input and return the next action
pub fn handle_menu_input(menu_state: &mut MenuState) -> Result<MenuAction, io::Error> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(MenuAction::Quit);
            }
            if key.kind == KeyEventKind::Press {
                return Ok(handle_menu_key(menu_state, key.code));
            }
        }
    }

    Ok(MenuAction::None)
}

fn handle_menu_key(menu_state: &mut MenuState, key_code: KeyCode) -> MenuAction {
    match key_code {
        KeyCode::Up => {
            menu_state.select_previous();
            MenuAction::None
        }
        KeyCode::Down => {
            menu_state.select_next();
            MenuAction::None
        }
        KeyCode::Enter | KeyCode::Char(' ') => match menu_state.selected_item() {
            MenuItem::SinglePlayer => MenuAction::StartGame(GameMode::SinglePlayer),
            MenuItem::MultiPlayer => MenuAction::StartGame(GameMode::TwoPlayer),
            MenuItem::Exit => MenuAction::Quit,
        },
        _ => MenuAction::None,
    }
}

/// Handle result screen input and return the next action
pub fn handle_result_input(result_state: &mut ResultState) -> Result<ResultAction, io::Error> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(ResultAction::Quit);
            }
            if key.kind == KeyEventKind::Press {
                return Ok(handle_result_key(result_state, key.code));
            }
        }
    }

    Ok(ResultAction::None)
}

fn handle_result_key(result_state: &mut ResultState, key_code: KeyCode) -> ResultAction {
    match key_code {
        KeyCode::Up => {
            result_state.select_previous();
            ResultAction::None
        }
        KeyCode::Down => {
            result_state.select_next();
            ResultAction::None
        }
        KeyCode::Esc => ResultAction::MainMenu,
        KeyCode::Enter | KeyCode::Char(' ') => match result_state.selected_item() {
            ResultItem::PlayAgain => ResultAction::PlayAgain,
            ResultItem::MainMenu => ResultAction::MainMenu,
        },
        _ => ResultAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_confirm_maps_options_to_modes() {
        let mut menu = MenuState::new();
        assert_eq!(
            handle_menu_key(&mut menu, KeyCode::Enter),
            MenuAction::StartGame(GameMode::SinglePlayer)
        );

        menu.select_next();
        assert_eq!(
            handle_menu_key(&mut menu, KeyCode::Char(' ')),
            MenuAction::StartGame(GameMode::TwoPlayer)
        );

        menu.select_next();
        assert_eq!(handle_menu_key(&mut menu, KeyCode::Enter), MenuAction::Quit);
    }

    #[test]
    fn test_menu_navigation_keys() {
        let mut menu = MenuState::new();
        assert_eq!(handle_menu_key(&mut menu, KeyCode::Down), MenuAction::None);
        assert_eq!(menu.selected_item(), MenuItem::MultiPlayer);
        assert_eq!(handle_menu_key(&mut menu, KeyCode::Up), MenuAction::None);
        assert_eq!(menu.selected_item(), MenuItem::SinglePlayer);

        // Unbound keys do nothing
        assert_eq!(
            handle_menu_key(&mut menu, KeyCode::Char('x')),
            MenuAction::None
        );
        assert_eq!(menu.selected_item(), MenuItem::SinglePlayer);
    }

    #[test]
    fn test_result_confirm_and_escape() {
        let mut result = ResultState::new();
        assert_eq!(
            handle_result_key(&mut result, KeyCode::Enter),
            ResultAction::PlayAgain
        );

        result.select_next();
        assert_eq!(
            handle_result_key(&mut result, KeyCode::Enter),
            ResultAction::MainMenu
        );

        assert_eq!(
            handle_result_key(&mut result, KeyCode::Esc),
            ResultAction::MainMenu
        );
    }
}
