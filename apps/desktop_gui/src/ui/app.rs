//! App shell: widget tree, input wiring, and backend event pumping.

use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::{Coord, Mark, BOARD_SIZE};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::view::{BoardView, CellView};

pub struct BoardApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    view: BoardView,
}

/// The input-binder guard: a taken cell ignores clicks entirely.
fn cell_click_command(cell: CellView, coord: Coord) -> Option<BackendCommand> {
    (!cell.taken).then_some(BackendCommand::SubmitMove { coord })
}

fn mark_color(mark: Mark) -> egui::Color32 {
    match mark {
        Mark::X => egui::Color32::from_rgb(231, 76, 60),
        Mark::O => egui::Color32::from_rgb(52, 152, 219),
    }
}

impl BoardApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        let app = Self {
            cmd_tx,
            ui_rx,
            view: BoardView::new(),
        };
        // The session starts as soon as the window does, the desktop
        // counterpart of initializing on page load.
        app.queue_command(BackendCommand::NewGame);
        app
    }

    fn queue_command(&self, command: BackendCommand) {
        if let Err(err) = self.cmd_tx.try_send(command) {
            tracing::warn!("backend command not queued: {err}");
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::StateUpdated(state) => self.view.apply(&state),
                UiEvent::ResetCompleted(state) => {
                    self.view.clear();
                    self.view.apply(&state);
                }
                UiEvent::ConnectionFailed => self.view.show_connection_error(),
            }
        }
    }

    fn show_status(&self, ui: &mut egui::Ui) {
        let status = self.view.status();
        let color = if status.winner {
            egui::Color32::from_rgb(39, 174, 96)
        } else if status.draw {
            egui::Color32::from_rgb(243, 156, 18)
        } else {
            ui.visuals().strong_text_color()
        };
        ui.label(egui::RichText::new(&status.text).size(18.0).color(color));
    }

    fn show_board(&mut self, ui: &mut egui::Ui) {
        let mut clicked = None;
        egui::Grid::new("board_grid")
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for coord in Coord::all() {
                    let cell = self.view.cell(coord);
                    let mut text = egui::RichText::new(
                        cell.mark.map(Mark::glyph).unwrap_or(" "),
                    )
                    .size(36.0)
                    .strong();
                    if let Some(mark) = cell.mark {
                        text = text.color(mark_color(mark));
                    }
                    let response = ui.add(egui::Button::new(text).min_size(egui::vec2(84.0, 84.0)));
                    if response.clicked() {
                        clicked = cell_click_command(cell, coord);
                    }
                    if coord.col() + 1 == BOARD_SIZE {
                        ui.end_row();
                    }
                }
            });
        if let Some(command) = clicked {
            self.queue_command(command);
        }
    }
}

impl eframe::App for BoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.heading("Tic-Tac-Toe");
                ui.add_space(8.0);
                self.show_status(ui);
                ui.add_space(12.0);
                self.show_board(ui);
                ui.add_space(16.0);
                if ui.button("Reset Game").clicked() {
                    self.queue_command(BackendCommand::Reset);
                }
            });
        });

        // Backend events arrive on their own thread; keep repainting so they
        // are picked up promptly.
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;
    use shared::domain::Cell;
    use shared::protocol::GameState;

    fn fresh_state() -> GameState {
        GameState {
            board: Default::default(),
            current_player: Mark::X,
            game_over: false,
            winner: None,
        }
    }

    fn coord(row: usize, col: usize) -> Coord {
        Coord::new(row, col).expect("coordinate in range")
    }

    fn test_app() -> (
        BoardApp,
        Receiver<BackendCommand>,
        Sender<UiEvent>,
    ) {
        let (cmd_tx, cmd_rx) = bounded(16);
        let (ui_tx, ui_rx) = bounded(16);
        (BoardApp::new(cmd_tx, ui_rx), cmd_rx, ui_tx)
    }

    #[test]
    fn queues_a_new_game_at_startup() {
        let (_app, cmd_rx, _ui_tx) = test_app();
        assert_eq!(cmd_rx.try_recv(), Ok(BackendCommand::NewGame));
        assert!(cmd_rx.try_recv().is_err());
    }

    #[test]
    fn taken_cells_produce_no_move_command() {
        let cell = CellView {
            mark: Some(Mark::X),
            taken: true,
        };
        assert_eq!(cell_click_command(cell, coord(0, 0)), None);

        assert_eq!(
            cell_click_command(CellView::default(), coord(1, 2)),
            Some(BackendCommand::SubmitMove {
                coord: coord(1, 2)
            })
        );
    }

    #[test]
    fn reset_event_force_clears_stale_marks_before_painting() {
        let (mut app, _cmd_rx, ui_tx) = test_app();

        let mut full = fresh_state();
        full.board[0][0] = Cell(Some(Mark::X));
        full.board[2][2] = Cell(Some(Mark::O));
        ui_tx.send(UiEvent::StateUpdated(full)).expect("send");
        app.process_ui_events();
        assert!(app.view.cell(coord(0, 0)).taken);

        ui_tx
            .send(UiEvent::ResetCompleted(fresh_state()))
            .expect("send");
        app.process_ui_events();

        for coord in Coord::all() {
            assert_eq!(app.view.cell(coord), CellView::default());
        }
        assert_eq!(app.view.status().text, "Current player: X");
    }

    #[test]
    fn connection_failure_shows_the_fixed_error_status() {
        let (mut app, _cmd_rx, ui_tx) = test_app();
        ui_tx.send(UiEvent::ConnectionFailed).expect("send");
        app.process_ui_events();
        assert_eq!(
            app.view.status().text,
            crate::ui::view::CONNECTION_ERROR_STATUS
        );
    }
}
