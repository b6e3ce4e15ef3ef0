// Menu and result screen state, plus the game mode carried into Play

/// Mode chosen on the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Left paddle human, right paddle computer-driven
    SinglePlayer,
    /// Both paddles on the same keyboard
    TwoPlayer,
}

/// Main menu items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    SinglePlayer,
    MultiPlayer,
    Exit,
}

impl MenuItem {
    /// Get display text for menu item
    pub fn display_text(&self) -> &str {
        match self {
            MenuItem::SinglePlayer => "SINGLE PLAYER",
            MenuItem::MultiPlayer => "MULTI PLAYER",
            MenuItem::Exit => "EXIT",
        }
    }

    /// Get all menu items in order
    pub fn all() -> Vec<MenuItem> {
        vec![MenuItem::SinglePlayer, MenuItem::MultiPlayer, MenuItem::Exit]
    }
}

/// Main menu state
pub struct MenuState {
    /// Currently selected menu item index
    pub selected_index: usize,
    /// All menu items
    pub items: Vec<MenuItem>,
}

impl MenuState {
    pub fn new() -> Self {
        Self {
            selected_index: 0,
            items: MenuItem::all(),
        }
    }

    /// Get currently selected menu item
    pub fn selected_item(&self) -> MenuItem {
        self.items[self.selected_index]
    }

    /// Move selection up, wrapping to the bottom
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = self.items.len() - 1;
        }
    }

    /// Move selection down, wrapping to the top
    pub fn select_next(&mut self) {
        if self.selected_index < self.items.len() - 1 {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}

/// Result screen items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultItem {
    PlayAgain,
    MainMenu,
}

impl ResultItem {
    pub fn display_text(&self) -> &str {
        match self {
            ResultItem::PlayAgain => "PLAY AGAIN",
            ResultItem::MainMenu => "MAIN MENU",
        }
    }

    pub fn all() -> Vec<ResultItem> {
        vec![ResultItem::PlayAgain, ResultItem::MainMenu]
    }
}

/// Result screen state. Rebuilt with the selection on "Play Again"
/// every time the match ends.
pub struct ResultState {
    pub selected_index: usize,
    pub items: Vec<ResultItem>,
}

impl ResultState {
    pub fn new() -> Self {
        Self {
            selected_index: 0,
            items: ResultItem::all(),
        }
    }

    pub fn selected_item(&self) -> ResultItem {
        self.items[self.selected_index]
    }

    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = self.items.len() - 1;
        }
    }

    pub fn select_next(&mut self) {
        if self.selected_index < self.items.len() - 1 {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }
    }
}

impl Default for ResultState {
    fn default() -> Self {
        Self::new()
    }
}
