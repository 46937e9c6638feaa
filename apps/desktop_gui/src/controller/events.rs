//! UI events emitted by the backend worker.

use shared::protocol::GameState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A fresh server-confirmed state to paint over the current board.
    StateUpdated(GameState),
    /// A reset round trip succeeded. The board is force-cleared before the
    /// new state is painted, so no stale marks survive.
    ResetCompleted(GameState),
    /// The initial connection to the server failed; the status line shows a
    /// fixed error message.
    ConnectionFailed,
}
