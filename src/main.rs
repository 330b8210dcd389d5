use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use runqueue::script::{self, Command};
use runqueue::{RunqueueConfig, RunqueueKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "runqueue", about = "Drive process runqueues with command scripts")]
struct Cli {
    /// Log structural events (growth, splices, duplicate rejects) to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a script against one implementation and print its transcript.
    Run {
        /// Script file (reads stdin when omitted).
        script: Option<PathBuf>,
        #[command(flatten)]
        queue: QueueArgs,
    },
    /// Run a script against every implementation and compare transcripts.
    Check {
        /// Script file (reads stdin when omitted).
        script: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct QueueArgs {
    /// Implementation: tree, array or list.
    #[arg(long = "impl", default_value = "tree")]
    kind: RunqueueKind,
    /// Initial slot count for the array implementation.
    #[arg(long, default_value_t = 10)]
    initial_capacity: usize,
    /// Capacity multiplier when the array grows.
    #[arg(long, default_value_t = 1.5)]
    growth_factor: f64,
    /// Fill fraction at which the array grows.
    #[arg(long, default_value_t = 0.8)]
    load_factor: f64,
}

impl QueueArgs {
    fn config(&self) -> RunqueueConfig {
        RunqueueConfig::new(self.kind)
            .with_initial_capacity(self.initial_capacity)
            .with_growth_factor(self.growth_factor)
            .with_load_factor(self.load_factor)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run { script, queue } => run(script, queue)?,
        Commands::Check { script } => check(script)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_commands(path: Option<&PathBuf>) -> Result<Vec<Command>> {
    let source = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read script from stdin")?;
            buffer
        }
    };
    script::parse(&source).context("invalid script")
}

fn run(path: Option<PathBuf>, args: QueueArgs) -> Result<()> {
    let commands = load_commands(path.as_ref())?;
    let config = args.config();
    let mut queue = config
        .build()
        .context("invalid runqueue configuration")?;
    info!(kind = %config.kind, commands = commands.len(), "running script");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    script::execute(&commands, queue.as_mut(), &mut out).context("script execution failed")?;
    out.flush()?;
    Ok(())
}

fn check(path: Option<PathBuf>) -> Result<()> {
    let commands = load_commands(path.as_ref())?;

    let mut transcripts = Vec::with_capacity(RunqueueKind::ALL.len());
    for kind in RunqueueKind::ALL {
        let mut queue = kind.build();
        let output = script::transcript(&commands, queue.as_mut())
            .with_context(|| format!("script failed on {kind}"))?;
        transcripts.push((kind, output));
    }

    script::compare_transcripts(&transcripts)?;

    let lines = transcripts.first().map_or(0, |(_, out)| out.lines().count());
    println!(
        "all {} implementations agree ({} commands, {} output lines)",
        transcripts.len(),
        commands.len(),
        lines
    );
    Ok(())
}
