//! Wire types for the game server's HTTP+JSON API.
//!
//! New-game and reset responses carry the bare [`GameState`]; move responses
//! wrap it in a success envelope. The asymmetry is the server's, preserved
//! here exactly.

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::domain::{Board, Cell, Coord, GameId, Mark, Outcome};

/// Snapshot of a game as adjudicated by the server. Replaced wholesale on
/// every successful response; the client never mutates one locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    /// Whose turn is next; meaningful only while the game is active.
    pub current_player: Mark,
    pub game_over: bool,
    /// Winning mark once the game is over. `null`, `""`, and a missing field
    /// all decode to `None`; with `game_over` set that means a draw.
    #[serde(default, deserialize_with = "winner_from_wire")]
    pub winner: Option<Mark>,
}

impl GameState {
    pub fn cell(&self, coord: Coord) -> Cell {
        self.board[coord.row()][coord.col()]
    }

    pub fn outcome(&self) -> Outcome {
        if !self.game_over {
            Outcome::InProgress(self.current_player)
        } else {
            match self.winner {
                Some(mark) => Outcome::Won(mark),
                None => Outcome::Draw,
            }
        }
    }
}

fn winner_from_wire<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Mark>, D::Error> {
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(text) => match text.as_str() {
            "" => Ok(None),
            "X" => Ok(Some(Mark::X)),
            "O" => Ok(Some(Mark::O)),
            other => Err(de::Error::custom(format!("invalid winner mark: {other:?}"))),
        },
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGameRequest {
    pub game_id: GameId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRequest {
    pub game_id: GameId,
    pub row: usize,
    pub col: usize,
}

impl MoveRequest {
    pub fn new(game_id: GameId, coord: Coord) -> Self {
        Self {
            game_id,
            row: coord.row(),
            col: coord.col(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetRequest {
    pub game_id: GameId,
}

/// Envelope around move adjudication. `success: false` means the server
/// rejected the move (occupied cell, finished game); any state it still
/// carries is advisory and the client ignores it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveResponse {
    pub success: bool,
    #[serde(default)]
    pub state: Option<GameState>,
}
