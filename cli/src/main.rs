mod script;

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter};

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use zoomable::config::ViewportConfig;
use zoomable::error::ConfigError;

use crate::script::{Replay, ScriptError};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Script(#[from] ScriptError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "zoomable", about = "Headless viewport camera replay")]
struct Cli {
    #[arg(long, env = "ZOOMABLE_CONFIG", help = "JSON config file; ZOOMABLE_* variables are used when absent")]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a JSON-lines gesture script and print each published frame.
    Replay(ReplayArgs),
    /// Print the effective configuration as JSON.
    Config,
}

#[derive(Args, Debug)]
struct ReplayArgs {
    #[arg(default_value = "-", help = "Script file path, or - for stdin")]
    input: String,

    #[arg(long, default_value_t = 10_000, help = "Frame cap for each settle command")]
    max_frames: usize,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Replay(args) => run_replay(&config, &args),
        Command::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

fn load_config(path: Option<&str>) -> Result<ViewportConfig, CliError> {
    let Some(path) = path else {
        return Ok(ViewportConfig::from_env()?);
    };
    let raw = fs::read_to_string(path).map_err(|source| CliError::Read { path: path.to_owned(), source })?;
    Ok(ViewportConfig::from_json_str(&raw)?)
}

fn run_replay(config: &ViewportConfig, args: &ReplayArgs) -> Result<(), CliError> {
    let reader: Box<dyn BufRead> = if args.input == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = File::open(&args.input).map_err(|source| CliError::Read { path: args.input.clone(), source })?;
        Box::new(BufReader::new(file))
    };

    let stdout = io::stdout();
    let mut replay = Replay::new(config, args.max_frames, BufWriter::new(stdout.lock()));
    let summary = replay.run(reader)?;

    let values = replay.viewport().values();
    tracing::info!(
        commands = summary.commands,
        frames = summary.frames,
        zoom = values.zoom_factor,
        center_x = values.center_x,
        center_y = values.center_y,
        "replay complete"
    );
    Ok(())
}
