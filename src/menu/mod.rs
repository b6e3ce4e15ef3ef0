// Menu module for Termpong
// Handles main menu and result screen UI, navigation, and mode selection

pub mod input;
pub mod render;
pub mod state;

pub use input::{handle_menu_input, handle_result_input, MenuAction, ResultAction};
pub use render::{render_menu, render_result};
pub use state::{GameMode, MenuItem, MenuState, ResultItem, ResultState};
