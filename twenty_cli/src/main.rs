//! `twenty` - play twenty questions in the terminal.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use noun_ontology::{BucketIndex, Ontology};
use question_core::GameEngine;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use twenty_cli::{
    check_noun_universe, check_property_universe, play_game, summarize, Console, GameConfig,
    GameReport,
};

#[derive(Parser)]
#[command(name = "twenty")]
#[command(about = "Think of something - I'll guess it in twenty questions", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (defaults to ./twenty.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Ontology JSON file (overrides [data] ontology)
    #[arg(long, global = true)]
    ontology: Option<PathBuf>,

    /// Directory of bucket noun lists (overrides [data] buckets_dir)
    #[arg(long, global = true)]
    buckets: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game (default)
    Play {
        /// Question budget (overrides [engine] question_budget)
        #[arg(long)]
        budget: Option<u32>,

        /// RNG seed for reproducible guesses
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Summarize the loaded ontology and buckets
    Inspect {
        /// Noun universe file to check (overrides [data] noun_universe)
        #[arg(long)]
        nouns: Option<PathBuf>,

        /// Property universe file to check (overrides [data] property_universe)
        #[arg(long)]
        properties: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = GameConfig::load(cli.config.as_deref())?;
    if let Some(path) = cli.ontology {
        config.data.ontology = path;
    }
    if let Some(dir) = cli.buckets {
        config.data.buckets_dir = dir;
    }

    let ontology = Ontology::load_json(&config.data.ontology).context("failed to load ontology")?;
    let buckets = BucketIndex::load_dir(&config.data.buckets_dir).context("failed to load buckets")?;
    info!(
        nouns = ontology.len(),
        buckets = buckets.len(),
        "game data loaded"
    );

    match cli.command.unwrap_or(Commands::Play {
        budget: None,
        seed: None,
    }) {
        Commands::Inspect { nouns, properties } => {
            let engine = GameEngine::new(&ontology, &buckets, config.engine);
            let mut summary = summarize(&ontology, &buckets, engine.tree());

            if let Some(path) = nouns.or(config.data.noun_universe) {
                summary = summary.with_universe(check_noun_universe(&ontology, &path)?);
            }
            if let Some(path) = properties.or(config.data.property_universe) {
                summary = summary.with_universe(check_property_universe(&ontology, &path)?);
            }
            print!("{}", summary.render());
        }
        Commands::Play { budget, seed } => {
            if let Some(budget) = budget {
                config.engine.question_budget = budget;
            }
            config
                .engine
                .validate()
                .map_err(anyhow::Error::msg)?;

            let mut rng = match seed.or(config.seed) {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };

            let engine = GameEngine::new(&ontology, &buckets, config.engine);
            let stdin = io::stdin();
            let mut console = Console::new(stdin.lock(), io::stdout());

            match play_game(&engine, &mut console, &mut rng)? {
                GameReport::Aborted { questions_asked } => {
                    info!(questions_asked, "game aborted");
                    console.say("Bye!")?;
                }
                GameReport::Finished {
                    engine_won,
                    questions_asked,
                    ..
                } => {
                    info!(?engine_won, questions_asked, "game over");
                }
            }
        }
    }

    Ok(())
}
