//! HTTP session client for the remote tic-tac-toe server.
//!
//! [`GameClient`] owns the single process-wide [`GameState`] snapshot. Every
//! operation is one JSON round trip with no retry and no timeout; on success
//! the held snapshot is replaced wholesale with whatever the server returned.
//! The client never advances a board locally — turn order, legality, and
//! win/draw detection are all adjudicated server-side.

use reqwest::Client;
use serde::Serialize;
use shared::{
    domain::{Coord, GameId},
    protocol::{GameState, MoveRequest, MoveResponse, NewGameRequest, ResetRequest},
};
use tracing::{debug, info};
use url::Url;

pub mod error;

pub use error::ClientError;

/// What became of a move submission, from the client's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The server accepted the move and returned a fresh state.
    Applied,
    /// The server adjudicated the move as illegal; the held state is
    /// unchanged and nothing is repainted.
    Rejected,
    /// No request was issued: there is no active game, or it is already over.
    Suppressed,
}

#[derive(Serialize)]
struct StateQuery<'a> {
    game_id: &'a str,
}

#[derive(Debug)]
pub struct GameClient {
    http: Client,
    server_url: String,
    game_id: GameId,
    state: Option<GameState>,
}

impl GameClient {
    pub fn new(server_url: &str, game_id: GameId) -> Result<Self, ClientError> {
        Url::parse(server_url).map_err(|source| ClientError::InvalidServerUrl {
            url: server_url.to_string(),
            source,
        })?;
        Ok(Self {
            http: Client::new(),
            server_url: server_url.trim_end_matches('/').to_string(),
            game_id,
            state: None,
        })
    }

    pub fn game_id(&self) -> &GameId {
        &self.game_id
    }

    /// The latest server-confirmed state, if any round trip has succeeded.
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    /// Start a fresh game for the session. On failure the held state is left
    /// untouched.
    pub async fn new_game(&mut self) -> Result<&GameState, ClientError> {
        let state: GameState = self
            .http
            .post(format!("{}/api/new_game", self.server_url))
            .json(&NewGameRequest {
                game_id: self.game_id.clone(),
            })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        info!(game_id = %self.game_id, "new game started");
        Ok(self.state.insert(state))
    }

    /// Submit a move for the session's current player. Issues no request at
    /// all when there is nothing sensible to move on; see [`MoveOutcome`].
    pub async fn submit_move(&mut self, coord: Coord) -> Result<MoveOutcome, ClientError> {
        match &self.state {
            None => {
                debug!("move suppressed: no active game");
                return Ok(MoveOutcome::Suppressed);
            }
            Some(state) if state.game_over => {
                debug!("move suppressed: game already over");
                return Ok(MoveOutcome::Suppressed);
            }
            Some(_) => {}
        }

        let response: MoveResponse = self
            .http
            .post(format!("{}/api/move", self.server_url))
            .json(&MoveRequest::new(self.game_id.clone(), coord))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if !response.success {
            debug!(
                row = coord.row(),
                col = coord.col(),
                "server rejected move"
            );
            return Ok(MoveOutcome::Rejected);
        }

        let state = response.state.ok_or(ClientError::MissingState)?;
        debug!(row = coord.row(), col = coord.col(), "move applied");
        self.state = Some(state);
        Ok(MoveOutcome::Applied)
    }

    /// Reset the session's game to a fresh board. On failure the held state
    /// (and whatever the caller has painted from it) is left as-is.
    pub async fn reset(&mut self) -> Result<&GameState, ClientError> {
        let state: GameState = self
            .http
            .post(format!("{}/api/reset", self.server_url))
            .json(&ResetRequest {
                game_id: self.game_id.clone(),
            })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        info!(game_id = %self.game_id, "game reset");
        Ok(self.state.insert(state))
    }

    /// Fetch the current state without changing it server-side.
    pub async fn fetch_state(&mut self) -> Result<&GameState, ClientError> {
        let state: GameState = self
            .http
            .get(format!("{}/api/state", self.server_url))
            .query(&StateQuery {
                game_id: self.game_id.as_str(),
            })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(self.state.insert(state))
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
