// Sortty: Sorting and Searching Algorithm Visualizer

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::{Terminal, backend::CrosstermBackend};

use sortty::algorithms::{self, Algorithm};
use sortty::error::VisualizerError;
use sortty::playback::{self, PlaybackConfig, Visualizer};
use sortty::sequence::{self, DEFAULT_LEN, MAX_LEN};
use sortty::ui::App;

/// Animate sorting and searching algorithms in the terminal
#[derive(Debug, Parser)]
#[command(name = "sortty", version, about)]
struct Cli {
    /// Algorithm selected at startup
    #[arg(short, long, value_enum, default_value = "bubble-sort")]
    algorithm: Algorithm,

    /// Length of randomly generated inputs
    #[arg(short = 'n', long, default_value_t = DEFAULT_LEN as u16,
          value_parser = clap::value_parser!(u16).range(1..=MAX_LEN as i64))]
    len: u16,

    /// Comma-separated input values instead of a random sequence, e.g. 5,3,8,1
    #[arg(long, allow_hyphen_values = true)]
    values: Option<String>,

    /// Search target for linear/binary search
    #[arg(short, long, allow_hyphen_values = true)]
    target: Option<String>,

    /// Milliseconds between animation steps (50-1000)
    #[arg(short, long, default_value_t = 500)]
    speed: u64,

    /// Seed for reproducible random inputs
    #[arg(long)]
    seed: Option<u64>,

    /// Print the algorithm table and exit
    #[arg(long)]
    list: bool,

    /// Write logs to this file (filtered by RUST_LOG, default info)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> Result<(), VisualizerError> {
    let file = File::create(path)?;
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn print_algorithm_table() {
    println!(
        "{:<16} {:<7} {:<12} {:<12} {:<12} {:<10}",
        "ALGORITHM", "KIND", "BEST", "AVERAGE", "WORST", "SPACE"
    );
    for algorithm in Algorithm::ALL {
        let info = algorithm.info();
        println!(
            "{:<16} {:<7} {:<12} {:<12} {:<12} {:<10}",
            info.name,
            if algorithm.is_search() { "search" } else { "sort" },
            info.time.best,
            info.time.average,
            info.time.worst,
            info.space.worst,
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.list {
        print_algorithm_table();
        return Ok(());
    }

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    // Validate everything before touching the terminal
    let interval = playback::validate_interval(Duration::from_millis(cli.speed))?;
    let mut rng = match cli.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let input = match &cli.values {
        Some(text) => algorithms::parse_values(text)?,
        None => sequence::random_sequence(&mut rng, usize::from(cli.len)),
    };

    let config = PlaybackConfig {
        interval,
        ..PlaybackConfig::default()
    };
    let mut visualizer = Visualizer::new(cli.algorithm, input, config);
    if let Some(target) = cli.target {
        visualizer.set_target_text(target);
    }
    tracing::info!(
        algorithm = cli.algorithm.name(),
        len = visualizer.input().len(),
        "starting visualizer"
    );

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(visualizer, rng, usize::from(cli.len));
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "terminal loop failed");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
