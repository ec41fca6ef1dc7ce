//! linekv CLI
//!
//! Interactive shell over an in-memory linekv database.

use std::io;
use std::sync::Arc;

use clap::Parser;
use linekv::engine::MemoryEngine;
use linekv::protocol;
use linekv::repl::Session;
use linekv::storage::StorageManager;
use linekv::{Config, Context, Database};
use tracing_subscriber::{fmt, EnvFilter};

/// linekv CLI
#[derive(Parser, Debug)]
#[command(name = "linekv-cli")]
#[command(about = "Interactive in-memory key-value store")]
#[command(version)]
struct Args {
    /// Log filter used when RUST_LOG is unset
    #[arg(short, long, default_value = "info")]
    log_filter: String,

    /// Prompt shown before each command
    #[arg(short, long, default_value = "> ")]
    prompt: String,

    /// Line that ends the session
    #[arg(short, long, default_value = "exit")]
    exit_command: String,

    /// Skip the welcome banner
    #[arg(long)]
    no_banner: bool,
}

fn main() {
    let args = Args::parse();

    let config = Config::builder()
        .log_filter(&args.log_filter)
        .prompt(&args.prompt)
        .exit_command(&args.exit_command)
        .show_banner(!args.no_banner)
        .build();

    // Logs go to stderr so stdout only carries responses
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    tracing::info!("linekv v{}", linekv::VERSION);

    let engine = Arc::new(MemoryEngine::new());
    tracing::info!("Storage engine initialized");

    let storage = Arc::new(StorageManager::new(engine));
    tracing::info!("Storage layer initialized");

    let compute = Arc::new(protocol::Parser::new());
    tracing::info!("Compute layer initialized");

    let database = Arc::new(Database::new(compute, storage));
    tracing::info!("Database initialized");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), database, config);

    if let Err(e) = session.run(&Context::background()) {
        tracing::error!("Session error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Session closed");
}
