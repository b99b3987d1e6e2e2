//! Terminal chess against the greedy opponent.
//!
//! Reads one command per line from stdin. Anything that is not a command
//! is treated as a move (`e2e4`, `Nf3` or `e4`).

use chess_engine::MoveOutcome;
use chess_lobby::{ConnectionId, Lobby, LobbyConfig, SessionView};
use clap::Parser;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

const CONNECTION: ConnectionId = 0;

/// Play chess against the computer.
#[derive(Parser)]
#[command(name = "chess")]
#[command(about = "Play chess against a greedy computer opponent")]
struct Args {
    /// Path to the lobby configuration
    #[arg(long, default_value = "chess.toml")]
    config: PathBuf,

    /// Player slot; even slots play White, odd slots play Black
    #[arg(long, default_value = "0")]
    slot: usize,

    /// Override the computer's thinking delay in milliseconds
    #[arg(long)]
    thinking_delay_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut config = LobbyConfig::load(&args.config)?;
    if let Some(delay) = args.thinking_delay_ms {
        config.thinking_delay_ms = delay;
    }
    tracing::info!("Config: {:?}", config);

    let room = config.game_room;
    let lobby = Lobby::new(config);
    let view = lobby.start_game(CONNECTION, args.slot, room).await?;
    print_help();
    print_view(&view);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        match input.to_ascii_lowercase().as_str() {
            "" => continue,
            "help" => print_help(),
            "board" => {
                if let Some(view) = lobby.view(CONNECTION).await {
                    print_view(&view);
                }
            }
            "new" => {
                let view = lobby.start_game(CONNECTION, args.slot, room).await?;
                print_view(&view);
            }
            "resign" => match lobby.resign(CONNECTION).await {
                Ok(reason) => println!("Game over: {}. Type 'new' to play again.", reason),
                Err(e) => println!("{}", e),
            },
            "quit" | "exit" => {
                if lobby.quit(CONNECTION).await.is_ok() {
                    println!("Game abandoned.");
                }
                break;
            }
            _ => {
                println!("Thinking...");
                match lobby.submit_move(CONNECTION, input).await {
                    Ok(outcome) => {
                        if let Some(view) = lobby.view(CONNECTION).await {
                            print_view(&view);
                        }
                        if let MoveOutcome::GameEnded { reason, .. } = outcome {
                            println!("Game over: {}. Type 'new' to play again.", reason);
                        }
                    }
                    Err(e) => println!("{}", e),
                }
            }
        }
    }

    Ok(())
}

fn print_help() {
    println!("Moves: e2e4, Nf3 or e4. Commands: board, new, resign, quit, help.");
}

fn print_view(view: &SessionView) {
    println!();
    println!("{}", view.diagram);
    println!(
        "You play {}. Moves made: {}. Clock: {}",
        if view.human_is_white { "White" } else { "Black" },
        view.ply_count,
        view.elapsed
    );
    if let Some(mv) = &view.last_human_move {
        println!("Your last move: {}", mv);
    }
    if let Some(mv) = &view.last_opponent_move {
        println!("Computer's last move: {}", mv);
    }
    if !view.ended {
        println!("{} to move.", if view.black_to_move { "Black" } else { "White" });
    }
}
