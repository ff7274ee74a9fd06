//! Command line driver for the Game of Life processor

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use life_processor::{
    config::{CliOverrides, OutputFormat, Settings, Speed},
    game_of_life::{
        classify, load_state_from_file, next_generation, survey, GameState, LifeLikeRule, Pattern,
    },
    seed_from_settings, simulate,
    utils::{ColorOutput, GridRenderer, StateFormatter},
};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "life-processor")]
#[command(about = "Sparse Game of Life simulator")]
#[command(version = "0.1.0")]
struct Cli {
    /// Verbose logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Advance a pattern and print the final state
    Run {
        #[command(flatten)]
        sim: SimulationArgs,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Animate a pattern generation by generation
    Play {
        #[command(flatten)]
        sim: SimulationArgs,

        /// Autoplay speed (overrides config)
        #[arg(short, long, value_enum)]
        speed: Option<Speed>,
    },

    /// Classify the eventual behaviour of a pattern
    Analyze {
        #[command(flatten)]
        sim: SimulationArgs,
    },

    /// Classify many random grids in parallel
    Survey {
        #[command(flatten)]
        sim: SimulationArgs,

        /// Number of random grids to sample
        #[arg(short = 'n', long, default_value_t = 16)]
        samples: usize,
    },

    /// Print the default configuration as YAML
    Config,
}

#[derive(Args)]
struct SimulationArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.yaml")]
    config: PathBuf,

    /// Built-in pattern name or pattern file; a random grid when omitted
    #[arg(short, long)]
    pattern: Option<String>,

    /// Grid rows (overrides config)
    #[arg(long)]
    rows: Option<usize>,

    /// Grid columns (overrides config)
    #[arg(long)]
    cols: Option<usize>,

    /// Number of generations (overrides config)
    #[arg(short, long)]
    generations: Option<usize>,

    /// Rule in B/S notation, e.g. B36/S23 (overrides config)
    #[arg(short, long)]
    rule: Option<LifeLikeRule>,

    /// Random generator seed (overrides config)
    #[arg(long)]
    rng_seed: Option<u64>,
}

impl SimulationArgs {
    fn settings(&self, speed: Option<Speed>, format: Option<OutputFormat>) -> Result<Settings> {
        let mut settings = if self.config.exists() {
            Settings::from_file(&self.config)
                .with_context(|| format!("Failed to load config from {}", self.config.display()))?
        } else {
            log::info!("config file {} not found, using defaults", self.config.display());
            Settings::default()
        };

        settings.merge_with_cli(&CliOverrides {
            rows: self.rows,
            cols: self.cols,
            generations: self.generations,
            rule: self.rule,
            rng_seed: self.rng_seed,
            speed,
            format,
        });
        settings
            .validate()
            .context("Configuration validation failed")?;

        Ok(settings)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Commands::Run { sim, format } => run_command(&sim.settings(None, format)?, sim.pattern.as_deref()),
        Commands::Play { sim, speed } => play_command(&sim.settings(speed, None)?, sim.pattern.as_deref()),
        Commands::Analyze { sim } => analyze_command(&sim.settings(None, None)?, sim.pattern.as_deref()),
        Commands::Survey { sim, samples } => survey_command(&sim.settings(None, None)?, samples),
        Commands::Config => {
            print!("{}", Settings::default().to_yaml()?);
            Ok(())
        }
    }
}

/// Resolve the starting state: a built-in pattern, a pattern file, or a random grid
fn initial_state(settings: &Settings, pattern: Option<&str>) -> Result<GameState> {
    let options = settings.parse_options();
    match pattern {
        Some(source) => match source.parse::<Pattern>() {
            Ok(pattern) => pattern
                .state(&options)
                .with_context(|| format!("Pattern {} does not fit the grid", pattern)),
            Err(_) => load_state_from_file(Path::new(source), &options),
        },
        None => Ok(seed_from_settings(settings)),
    }
}

fn run_command(settings: &Settings, pattern: Option<&str>) -> Result<()> {
    let initial = initial_state(settings, pattern)?;

    let start_time = Instant::now();
    let last = simulate(&initial, settings).context("Simulation failed")?;

    log::debug!(
        "{} generations in {:.3}s",
        settings.simulation.generations,
        start_time.elapsed().as_secs_f64()
    );
    eprintln!(
        "{}",
        ColorOutput::info(&StateFormatter::summary(settings.simulation.generations, &last))
    );
    print!("{}", StateFormatter::format(&last, settings.output.format)?);

    Ok(())
}

fn play_command(settings: &Settings, pattern: Option<&str>) -> Result<()> {
    let rule = &settings.simulation.rule;
    let interval = settings.autoplay.speed.interval();
    let mut state = initial_state(settings, pattern)?;

    for generation in 0..=settings.simulation.generations {
        if generation > 0 {
            std::thread::sleep(interval);
            state = next_generation(&state, rule)
                .with_context(|| format!("Failed to advance to generation {}", generation))?;
        }

        // Clear the terminal and redraw
        print!("\x1b[2J\x1b[H");
        println!("{}", ColorOutput::info(&StateFormatter::summary(generation, &state)));
        print!("{}", GridRenderer::render_state(&state));

        if state.population.is_empty() {
            println!("{}", ColorOutput::warning("Population died out"));
            break;
        }
    }

    Ok(())
}

fn analyze_command(settings: &Settings, pattern: Option<&str>) -> Result<()> {
    let state = initial_state(settings, pattern)?;
    let kind = classify(&state, &settings.simulation.rule, settings.simulation.generations)
        .context("Analysis failed")?;

    println!("{}", GridRenderer::render_with_coords(&state));
    println!("Living cells: {}", state.living_count());
    println!("Density: {:.1}%", state.density() * 100.0);
    println!("Rule: {}", settings.simulation.rule);
    println!(
        "{}",
        ColorOutput::success(&format!(
            "Behaviour within {} generations: {}",
            settings.simulation.generations, kind
        ))
    );

    Ok(())
}

fn survey_command(settings: &Settings, samples: usize) -> Result<()> {
    let base_seed = settings.seed.rng_seed.unwrap_or_else(rand::random);

    let start_time = Instant::now();
    let results = survey(
        settings.simulation.rows,
        settings.simulation.cols,
        samples,
        base_seed,
        settings.simulation.generations,
        &settings.simulation.rule,
    )
    .context("Survey failed")?;

    println!("{}", StateFormatter::survey_table(&results));
    println!(
        "{}",
        ColorOutput::success(&format!(
            "Surveyed {} grids in {:.3}s",
            results.len(),
            start_time.elapsed().as_secs_f64()
        ))
    );

    Ok(())
}
