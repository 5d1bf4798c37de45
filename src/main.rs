//! Olympiika - CLI
//!
//! Word-association puzzle with TUI and CLI modes.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::info;
use olympiika::{
    associations::{PairTable, loader::load_from_file},
    commands::{GenerateConfig, associate_word, generate_puzzle, run_benchmark, run_simple},
    core::{Orientation, check_steps},
    game::GameSession,
    generator::{Difficulty, Generator, GeneratorConfig, StartWord},
    output::{print_association_result, print_benchmark_result, print_generate_result},
    store::JsonFileStore,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "olympiika",
    about = "Word-association puzzle: uncover a binary tree of associations",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Depth of the association tree
    #[arg(long, global = true, default_value = "4")]
    steps: u32,

    /// Difficulty: easy (default) or hard
    #[arg(short, long, global = true, default_value = "easy")]
    difficulty: String,

    /// Association table CSV (default: built-in table)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Maximum generation attempts per puzzle (0 = unbounded)
    #[arg(long, global = true, default_value = "10000")]
    max_attempts: usize,

    /// Layout: root-first (default) or leaves-first
    #[arg(short, long, global = true, default_value = "root-first")]
    orientation: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode with a saved session
    Simple {
        /// Directory holding saved sessions
        #[arg(long, default_value = ".olympiika")]
        session_dir: PathBuf,

        /// Session id to resume or create
        #[arg(long, default_value = "default")]
        id: String,
    },

    /// Generate a puzzle and print its solution
    Generate {
        /// Start word (default: random)
        #[arg(long)]
        start: Option<String>,

        /// Seed for reproducible puzzles
        #[arg(long)]
        seed: Option<u64>,

        /// Also list the words of each level
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show the usable associations of a word
    Associate {
        /// Word to look up
        word: String,

        /// Number of associations to sample (default: 2)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Generate a puzzle and export it as an HTML table
    Html {
        /// Show the full solution instead of the starting board
        #[arg(long)]
        solution: bool,

        /// Output file (default: stdout)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Seed for reproducible puzzles
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Benchmark puzzle generation
    Benchmark {
        /// Number of puzzles to generate
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Base seed
        #[arg(long, default_value = "0")]
        seed: u64,
    },
}

/// Load the association table from the --data flag
fn load_table(data: Option<&PathBuf>) -> Result<PairTable> {
    match data {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to load associations from {}", path.display())),
        None => Ok(PairTable::embedded()),
    }
}

fn build_config(cli: &Cli) -> Result<GeneratorConfig> {
    let Some(difficulty) = Difficulty::from_name(&cli.difficulty) else {
        bail!("Unknown difficulty '{}' (expected easy or hard)", cli.difficulty);
    };
    let max_attempts = (cli.max_attempts > 0).then_some(cli.max_attempts);
    Ok(GeneratorConfig::new(difficulty).with_max_attempts(max_attempts))
}

fn parse_orientation(name: &str) -> Result<Orientation> {
    Orientation::from_name(name).with_context(|| {
        format!("Unknown orientation '{name}' (expected root-first or leaves-first)")
    })
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(
        || StdRng::from_rng(&mut rand::rng()),
        StdRng::seed_from_u64,
    )
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    check_steps(cli.steps).context("Invalid --steps")?;

    let table = load_table(cli.data.as_ref())?;
    info!(
        "Association table: {} pairs, {} words",
        table.len(),
        table.vocabulary_size()
    );

    let config = build_config(&cli)?;
    let orientation = parse_orientation(&cli.orientation)?;
    let generator = Generator::new(&table, config);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(generator, cli.steps, orientation),
        Commands::Simple { session_dir, id } => {
            let mut store = JsonFileStore::new(session_dir)?;
            let mut rng = make_rng(None);
            run_simple(&generator, &mut store, &id, cli.steps, orientation, &mut rng)
                .map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Generate {
            start,
            seed,
            verbose,
        } => {
            let config = GenerateConfig {
                steps: cli.steps,
                start: start.map_or(StartWord::Random, |w| StartWord::from_name(&w)),
                orientation,
            };
            let result = generate_puzzle(&generator, &config, &mut make_rng(seed))?;
            print_generate_result(&result, verbose);
            Ok(())
        }
        Commands::Associate { word, count } => {
            let generator = match count {
                Some(n) => Generator::new(&table, generator.config().clone().with_quantity(n)),
                None => generator,
            };
            let result = associate_word(&generator, &word, &mut make_rng(None))
                .map_err(|e| anyhow::anyhow!(e))?;
            print_association_result(&result);
            Ok(())
        }
        Commands::Html {
            solution,
            output,
            seed,
        } => {
            let config = GenerateConfig {
                orientation,
                ..GenerateConfig::new(cli.steps)
            };
            let result = generate_puzzle(&generator, &config, &mut make_rng(seed))?;
            let html = result.to_html(solution);
            match output {
                Some(path) => fs::write(&path, html)
                    .with_context(|| format!("Failed to write {}", path.display()))?,
                None => print!("{html}"),
            }
            Ok(())
        }
        Commands::Benchmark { count, seed } => {
            println!(
                "Generating {count} puzzles of {} steps ({} mode)...",
                cli.steps,
                generator.config().difficulty.name()
            );
            let result = run_benchmark(&generator, cli.steps, count, seed, true);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(
    generator: Generator<'_, PairTable>,
    steps: u32,
    orientation: Orientation,
) -> Result<()> {
    use olympiika::interactive::{App, run_tui};

    let mut rng = make_rng(None);
    let session = GameSession::generate(&generator, steps, orientation, &mut rng)?;
    let app = App::new(generator, session, rng);
    run_tui(app)
}
