// Screen flow: which top-level loop runs next, and the match score
// tallied across rounds.

use crate::game::RoundOutcome;
use crate::menu::GameMode;

/// Application state machine driven from the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Main menu
    Menu,
    /// Playing rounds until someone reaches max_points
    Play(GameMode),
    /// Showing the winner and the play-again choice
    Result(GameMode),
    /// Tear down the terminal and exit
    Exiting,
}

/// Points won per player in the current match. Reset to zero every time
/// Play is entered from the menu or from "Play Again".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchScore {
    pub first: u8,
    pub second: u8,
}

impl MatchScore {
    pub fn new() -> Self {
        Self { first: 0, second: 0 }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Winner banner for the result screen. A tie credits the first
    /// player, though ties cannot arise from normal match flow.
    pub fn winner_message(&self) -> &'static str {
        if self.first >= self.second {
            "FIRST PLAYER WINS"
        } else {
            "SECOND PLAYER WINS"
        }
    }
}

impl Default for MatchScore {
    fn default() -> Self {
        Self::new()
    }
}

/// Fold one finished round into the match and pick the next screen.
///
/// Scores accumulate until either player reaches max_points, which ends
/// the match; otherwise another round starts in the same mode. Escaping
/// to the menu abandons the match score.
pub fn after_round(
    outcome: RoundOutcome,
    mode: GameMode,
    score: &mut MatchScore,
    max_points: u8,
) -> AppState {
    match outcome {
        RoundOutcome::QuitGame => AppState::Exiting,
        RoundOutcome::QuitToMenu => AppState::Menu,
        RoundOutcome::FirstPlayerScored => {
            score.first += 1;
            play_or_result(mode, score, max_points)
        }
        RoundOutcome::SecondPlayerScored => {
            score.second += 1;
            play_or_result(mode, score, max_points)
        }
        RoundOutcome::Continuing => AppState::Play(mode),
    }
}

fn play_or_result(mode: GameMode, score: &MatchScore, max_points: u8) -> AppState {
    if score.first >= max_points || score.second >= max_points {
        AppState::Result(mode)
    } else {
        AppState::Play(mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_reaching_max_points_ends_match() {
        let mut score = MatchScore::new();
        let next = after_round(
            RoundOutcome::SecondPlayerScored,
            GameMode::SinglePlayer,
            &mut score,
            1,
        );
        assert_eq!(score, MatchScore { first: 0, second: 1 });
        assert_eq!(next, AppState::Result(GameMode::SinglePlayer));
        assert_eq!(score.winner_message(), "SECOND PLAYER WINS");
    }

    #[test]
    fn test_match_continues_below_max_points() {
        let mut score = MatchScore::new();
        let next = after_round(
            RoundOutcome::FirstPlayerScored,
            GameMode::TwoPlayer,
            &mut score,
            3,
        );
        assert_eq!(score, MatchScore { first: 1, second: 0 });
        assert_eq!(next, AppState::Play(GameMode::TwoPlayer));

        score.first = 2;
        let next = after_round(
            RoundOutcome::FirstPlayerScored,
            GameMode::TwoPlayer,
            &mut score,
            3,
        );
        assert_eq!(next, AppState::Result(GameMode::TwoPlayer));
        assert_eq!(score.winner_message(), "FIRST PLAYER WINS");
    }

    #[test]
    fn test_quit_edges() {
        let mut score = MatchScore { first: 2, second: 1 };
        assert_eq!(
            after_round(
                RoundOutcome::QuitToMenu,
                GameMode::SinglePlayer,
                &mut score,
                3
            ),
            AppState::Menu
        );
        assert_eq!(
            after_round(RoundOutcome::QuitGame, GameMode::SinglePlayer, &mut score, 3),
            AppState::Exiting
        );
        // Quitting never touches the tally itself
        assert_eq!(score, MatchScore { first: 2, second: 1 });
    }

    #[test]
    fn test_tie_credits_first_player() {
        let score = MatchScore { first: 0, second: 0 };
        assert_eq!(score.winner_message(), "FIRST PLAYER WINS");
    }
}
