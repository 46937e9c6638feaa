use anyhow::Result;
use clap::{Parser, Subcommand};
use client_core::{GameClient, MoveOutcome};
use shared::domain::{Coord, GameId, Mark, Outcome, BOARD_SIZE};
use shared::protocol::GameState;

#[derive(Parser, Debug)]
#[command(author, version, about = "Command-line probe for the tic-tac-toe server")]
struct Args {
    /// Base URL of the game server.
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    server_url: String,
    /// Session identifier to play under.
    #[arg(long, default_value = "default")]
    game_id: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start a fresh game for the session.
    NewGame,
    /// Submit a move at the given coordinates.
    Move { row: usize, col: usize },
    /// Reset the session's game.
    Reset,
    /// Fetch and print the current state without changing it.
    State,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let mut client = GameClient::new(&args.server_url, GameId(args.game_id))?;
    match args.command {
        Command::NewGame => {
            let state = client.new_game().await?;
            print_state(state);
        }
        Command::Move { row, col } => {
            let coord = Coord::new(row, col)
                .ok_or_else(|| anyhow::anyhow!("coordinates must be in 0..{BOARD_SIZE}"))?;
            // Each invocation is a fresh process, so sync the held state first.
            client.fetch_state().await?;
            match client.submit_move(coord).await? {
                MoveOutcome::Applied => {
                    if let Some(state) = client.state() {
                        print_state(state);
                    }
                }
                MoveOutcome::Rejected => println!("Move rejected by server."),
                MoveOutcome::Suppressed => println!("Game is already over; reset to play again."),
            }
        }
        Command::Reset => {
            let state = client.reset().await?;
            print_state(state);
        }
        Command::State => {
            let state = client.fetch_state().await?;
            print_state(state);
        }
    }

    Ok(())
}

fn print_state(state: &GameState) {
    for (index, row) in state.board.iter().enumerate() {
        let cells: Vec<&str> = row
            .iter()
            .map(|cell| cell.0.map(Mark::glyph).unwrap_or(" "))
            .collect();
        println!(" {} ", cells.join(" | "));
        if index + 1 < BOARD_SIZE {
            println!("---+---+---");
        }
    }
    match state.outcome() {
        Outcome::Won(mark) => println!("Player {mark} wins!"),
        Outcome::Draw => println!("It's a draw!"),
        Outcome::InProgress(mark) => println!("Current player: {mark}"),
    }
}
