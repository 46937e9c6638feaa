//! Backend commands queued from UI to backend worker.

use shared::domain::Coord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendCommand {
    /// Start a fresh game for the configured session. Queued once at launch.
    NewGame,
    /// Submit a move at the clicked cell.
    SubmitMove { coord: Coord },
    /// Reset the session's game.
    Reset,
}
