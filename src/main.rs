use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use quoridor::ai::Difficulty;
use quoridor::config::AppConfig;
use quoridor::error::ServerError;
use quoridor::server;
use quoridor::ui::App;

/// Play Quoridor in the terminal or host the two-player relay.
#[derive(Parser)]
#[command(name = "quoridor", about = "Quoridor: terminal game and relay server")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play locally in the terminal
    Play {
        /// Opponent: easy, medium, hard, or human
        #[arg(long, default_value = "hard")]
        opponent: String,
    },
    /// Run the websocket relay server
    Serve {
        /// Bind address, overriding the config file (host:port)
        #[arg(long)]
        addr: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Play { opponent } => play(&config, &opponent),
        Command::Serve { addr } => serve(&config, addr.as_deref()),
    }
}

fn play(config: &AppConfig, opponent: &str) -> Result<()> {
    let agent = match opponent {
        "human" => None,
        "easy" => Some(Difficulty::Easy.agent(&config.ai)),
        "medium" => Some(Difficulty::Medium.agent(&config.ai)),
        "hard" => Some(Difficulty::Hard.agent(&config.ai)),
        other => anyhow::bail!("unknown opponent '{other}' (easy, medium, hard, human)"),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(agent);
    let res = app.run(&mut terminal);

    // Restore terminal, even when the app loop errored
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res?;
    Ok(())
}

fn serve(config: &AppConfig, addr_override: Option<&str>) -> Result<()> {
    tracing_subscriber::fmt::init();

    let addr_str = match addr_override {
        Some(addr) => addr.to_string(),
        None => format!("{}:{}", config.server.host, config.server.port),
    };
    let addr: SocketAddr = addr_str
        .parse()
        .map_err(|_| ServerError::InvalidAddr(addr_str.clone()))?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server::run(addr))?;
    Ok(())
}
