//! Backend worker: owns the network client on its own thread and bridges
//! the UI command queue to session operations.
//!
//! Commands are processed strictly one at a time in queue order, so two
//! in-flight round trips can never race on the held state.

use std::thread;

use client_core::{GameClient, MoveOutcome};
use crossbeam_channel::{Receiver, Sender};
use shared::domain::GameId;
use tracing::error;

use crate::backend_bridge::commands::BackendCommand;
use crate::config::Settings;
use crate::controller::events::UiEvent;

pub fn launch(settings: Settings, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::ConnectionFailed);
                return;
            }
        };

        runtime.block_on(async move {
            let mut client =
                match GameClient::new(&settings.server_url, GameId(settings.game_id)) {
                    Ok(client) => client,
                    Err(err) => {
                        error!("failed to construct game client: {err}");
                        let _ = ui_tx.try_send(UiEvent::ConnectionFailed);
                        return;
                    }
                };

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::NewGame => match client.new_game().await {
                        Ok(state) => {
                            let _ = ui_tx.try_send(UiEvent::StateUpdated(state.clone()));
                        }
                        Err(err) => {
                            error!("failed to start game: {err}");
                            let _ = ui_tx.try_send(UiEvent::ConnectionFailed);
                        }
                    },
                    BackendCommand::SubmitMove { coord } => {
                        match client.submit_move(coord).await {
                            Ok(MoveOutcome::Applied) => {
                                if let Some(state) = client.state() {
                                    let _ =
                                        ui_tx.try_send(UiEvent::StateUpdated(state.clone()));
                                }
                            }
                            // A rejected or suppressed move paints nothing; the
                            // unchanged board is the only feedback.
                            Ok(MoveOutcome::Rejected | MoveOutcome::Suppressed) => {}
                            Err(err) => error!("failed to submit move: {err}"),
                        }
                    }
                    BackendCommand::Reset => match client.reset().await {
                        Ok(state) => {
                            let _ = ui_tx.try_send(UiEvent::ResetCompleted(state.clone()));
                        }
                        Err(err) => error!("failed to reset game: {err}"),
                    },
                }
            }
        });
    });
}
