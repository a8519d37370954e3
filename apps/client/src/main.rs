use std::sync::Arc;

use clap::Parser;
use client::input::Command;
use client::{
    ClientConfig, ClientError, GameApi, GameId, GameSession, HttpGameApi, PacingConfig, PlayerId,
    SessionHandle, TracingPresenter,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

mod telemetry;

#[derive(Parser)]
#[command(name = "client")]
#[command(about = "Terminal table for a Love Letter game server")]
struct Args {
    /// Game server base URL (overrides LOVELETTER_SERVER_URL)
    #[arg(long)]
    server_url: Option<String>,

    /// Local player id (overrides LOVELETTER_PLAYER_ID)
    #[arg(long)]
    player_id: Option<String>,

    /// Join an existing game instead of starting one
    #[arg(long)]
    game_id: Option<String>,

    /// CPU opponents for a new game
    #[arg(long, default_value = "3", value_parser = clap::value_parser!(u8).range(1..=3))]
    cpu_count: u8,

    /// Skip all narrative delays
    #[arg(long)]
    fast: bool,
}

#[tokio::main]
async fn main() {
    telemetry::init_tracing();
    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), ClientError> {
    let mut config = ClientConfig::from_env()?;
    if let Some(url) = args.server_url.as_deref() {
        config = config.with_server_url(url)?;
    }
    if let Some(id) = args.player_id {
        config.player_id = PlayerId::from(id);
    }
    if args.fast {
        config.pacing = PacingConfig::zero();
    }

    let api = Arc::new(HttpGameApi::new(&config.server_url, config.request_timeout)?);
    let game_id = match args.game_id {
        Some(id) => GameId::from(id),
        None => {
            let snapshot = api.start_game(args.cpu_count).await?;
            snapshot
                .game_id
                .ok_or_else(|| ClientError::integrity("started game has no id"))?
        }
    };
    info!(
        server = %config.server_url,
        game_id = %game_id,
        player_id = %config.player_id,
        "joining table"
    );

    let session = GameSession::new(&config, api, Arc::new(TracingPresenter), game_id);
    let reader = tokio::spawn(read_commands(session.handle()));
    let outcome = session.run().await;
    reader.abort();
    outcome
}

/// Feed stdin line commands to the session until quit or end of input.
async fn read_commands(handle: SessionHandle) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warn!(error = %e, "stdin closed");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => {
                if !command.apply(&handle) {
                    warn!(command = %line.trim(), phase = ?handle.phase(), "not accepted now");
                }
            }
            Err(_) => warn!(command = %line.trim(), "unknown command"),
        }
    }
    handle.teardown();
}
