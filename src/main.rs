use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tokio::sync::mpsc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use nhl_replay::data_provider::SnapshotProvider;
use nhl_replay::{background, commands, config, tui};

// Channel Constants
/// Buffer size for manual refresh trigger channel
const REFRESH_CHANNEL_BUFFER_SIZE: usize = 10;

/// Buffer size for snapshots delivered to the TUI
const SNAPSHOT_CHANNEL_BUFFER_SIZE: usize = 4;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "nhl-replay")]
#[command(about = "Replay an evening of NHL games on one shared clock", long_about = "Replay an evening of NHL games on one shared clock\n\nIf no command is specified, the program starts in interactive mode.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    #[command(flatten)]
    source: SourceArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Clone)]
struct SourceArgs {
    /// Scores snapshot JSON file
    #[arg(short, long, global = true, value_name = "FILE")]
    snapshot: Option<PathBuf>,

    /// Use built-in demo games instead of a snapshot file
    #[arg(long, global = true)]
    demo: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the replay timeline built from a snapshot
    Timeline {
        /// Print events as JSON, pauses included
        #[arg(long)]
        json: bool,
    },
    /// List goals in replay order and where each game stops
    Goals,
    /// Play the replay in the terminal without the interactive UI
    Play,
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command() {
    let cfg = config::read();

    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("refresh_interval: {} seconds", cfg.refresh_interval);
    println!("tick_interval_ms: {}", cfg.tick_interval_ms);
    println!();
    println!("[pacing]");
    println!("start_pause: {}", cfg.pacing.start_pause);
    println!("period_end_pause: {}", cfg.pacing.period_end_pause);
    println!("pre_summary_pause: {}", cfg.pacing.pre_summary_pause);
    println!("summary_pause: {}", cfg.pacing.summary_pause);
    println!("goal_pauses: {:?}", cfg.pacing.goal_pauses);
    match cfg.pacing.clock_advance_step {
        Some(step) => println!("clock_advance_step: {}", step),
        None => println!("clock_advance_step: auto (by game count)"),
    }
    println!();
    println!("[theme]");
    println!("highlight_fg: {:?}", cfg.theme.highlight_fg);
    println!("dimmed_fg: {:?}{}",
        cfg.theme.dimmed_fg(),
        if cfg.theme.dimmed_fg.is_none() { " (auto: 50% darker)" } else { "" }
    );
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Run TUI mode with background snapshot refresh
async fn run_tui_mode(config: config::Config, provider: Arc<dyn SnapshotProvider>) -> Result<(), tui::TuiError> {
    // Create channels for manual refresh triggers and delivered snapshots
    let (refresh_tx, refresh_rx) = mpsc::channel::<()>(REFRESH_CHANNEL_BUFFER_SIZE);
    let (snapshot_tx, snapshot_rx) = mpsc::channel(SNAPSHOT_CHANNEL_BUFFER_SIZE);

    // Spawn background task to re-read the snapshot
    let source = provider.describe();
    let refresh_interval = config.refresh_interval as u64;
    tokio::spawn(async move {
        background::refresh_loop(provider, refresh_interval, snapshot_tx, refresh_rx).await;
    });

    tui::run(config, source, snapshot_rx, refresh_tx).await
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(
    provider: &dyn SnapshotProvider,
    config: &config::Config,
    command: Commands,
) -> anyhow::Result<()> {
    match command {
        Commands::Config => unreachable!("Config command should be handled before execute_command"),
        Commands::Timeline { json } => commands::timeline::run(provider, &config.pacing, json).await,
        Commands::Goals => commands::goals::run(provider).await,
        Commands::Play => commands::play::run(provider, &config.pacing, config.tick_interval_ms).await,
    }
}

fn exit_with_error(e: anyhow::Error) -> ! {
    eprintln!("Error: {:#}", e);
    tracing::error!("Command failed: {:#}", e);
    std::process::exit(1);
}

#[tokio::main]
async fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    // Handle Config command separately (doesn't need a snapshot)
    if let Some(Commands::Config) = cli.command {
        handle_config_command();
        return;
    }

    let provider = match commands::snapshot_provider(cli.source.snapshot.clone(), cli.source.demo) {
        Ok(provider) => provider,
        Err(e) => exit_with_error(e),
    };

    match cli.command {
        // If no subcommand, run TUI
        None => {
            if let Err(e) = run_tui_mode(config, provider).await {
                eprintln!("Error running TUI: {}", e);
                std::process::exit(1);
            }
        }
        Some(command) => {
            if let Err(e) = execute_command(provider.as_ref(), &config, command).await {
                exit_with_error(e);
            }
        }
    }
}
