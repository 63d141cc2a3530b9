use anyhow::{Context, Result};
use city_pathfinder::{Config, Session};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "route_explorer")]
#[command(about = "Build a city graph and search it with BFS, DFS or UCS", long_about = None)]
struct Args {
    /// Read commands from a file instead of stdin
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Layout seed (overrides LAYOUT_SEED)
    #[arg(long)]
    seed: Option<u64>,

    /// Canvas width (overrides CANVAS_WIDTH)
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height (overrides CANVAS_HEIGHT)
    #[arg(long)]
    height: Option<u32>,

    /// Never print the "> " prompt
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let mut config = Config::from_env()?;
    if let Some(seed) = args.seed {
        config.layout.seed = Some(seed);
    }
    if let Some(width) = args.width {
        config.layout.width = width;
    }
    if let Some(height) = args.height {
        config.layout.height = height;
    }

    // Initialize logging
    init_logging(&config)?;

    tracing::info!("Starting route explorer {}", city_pathfinder::VERSION);
    tracing::debug!("Configuration: {:?}", config);

    let mut session = Session::new(config.layout);
    let stdout = io::stdout();

    let stats = match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open script {}", path.display()))?;
            session.run(BufReader::new(file), stdout.lock(), false)?
        }
        None => {
            let stdin = io::stdin();
            let prompt = !args.quiet && stdin.is_terminal();
            session.run(stdin.lock(), stdout.lock(), prompt)?
        }
    };

    tracing::info!(
        commands = stats.commands,
        rejected = stats.rejected,
        cities = session.store().city_count(),
        "session finished"
    );

    Ok(())
}

fn init_logging(config: &Config) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    // Logs go to stderr so that command output on stdout stays clean
    match config.logging.format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().pretty().with_writer(io::stderr))
                .init();
        }
    }

    Ok(())
}
