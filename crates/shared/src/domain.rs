use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Side length of the playing grid.
pub const BOARD_SIZE: usize = 3;

/// Session identifier a game is played under. The client uses exactly one
/// per process.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub String);

impl GameId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self("default".to_string())
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A player's mark. Serializes as `"X"` / `"O"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn glyph(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// One board cell, either empty or claimed by a mark. The server encodes
/// cells as the strings `""`, `"X"`, and `"O"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell(pub Option<Mark>);

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0.map(Mark::glyph).unwrap_or(""))
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        match text.as_str() {
            "" => Ok(Cell(None)),
            "X" => Ok(Cell(Some(Mark::X))),
            "O" => Ok(Cell(Some(Mark::O))),
            other => Err(de::Error::custom(format!("invalid cell mark: {other:?}"))),
        }
    }
}

/// Fixed 3x3 grid of cells in row-major order, serialized as a 2D array.
pub type Board = [[Cell; BOARD_SIZE]; BOARD_SIZE];

/// A grid coordinate with both axes guaranteed in `0..BOARD_SIZE` by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some(Self { row, col })
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// All board coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord { row, col }))
    }
}

/// How a game state reads: still in progress, won, or drawn. Interpreting
/// the server's flags, not evaluating any rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress(Mark),
    Won(Mark),
    Draw,
}
