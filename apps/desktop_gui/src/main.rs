use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;

mod backend_bridge;
mod config;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::app::BoardApp;

#[derive(Parser, Debug)]
#[command(author, version, about = "Desktop client for the networked tic-tac-toe server")]
struct Args {
    /// Base URL of the game server.
    #[arg(long)]
    server_url: Option<String>,
    /// Session identifier to play under.
    #[arg(long)]
    game_id: Option<String>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    let settings = config::load_settings().with_overrides(args.server_url, args.game_id);
    tracing::info!(
        server_url = %settings.server_url,
        game_id = %settings.game_id,
        "starting desktop client"
    );

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(settings, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Tic-Tac-Toe")
            .with_inner_size([420.0, 540.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(move |_cc| Ok(Box::new(BoardApp::new(cmd_tx, ui_rx)))),
    )
}
