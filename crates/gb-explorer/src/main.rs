//! GB Explorer CLI.
//!
//! Commands:
//! - sequence: Print the space/time labelling of the dimensions
//! - levels: Print level properties and their relations
//! - metrics: Print level metrics
//! - interval: Squared interval of a displacement in a level's metric
//! - relation: Check whether one level's time is another's space
//! - paradox: Analyse a level whose time lies outside the sequence
//! - demo: Run the full demonstration
//! - report: Save a JSON report
//! - charts: Write SVG charts

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use gb_explorer::charts::write_charts;
use gb_explorer::config::resolve_config;
use gb_explorer::display;
use gb_explorer::report::{timestamped_path, Report};
use gb_sequence::{SequenceCalculator, DEFAULT_DIMENSIONS};

#[derive(Parser)]
#[command(name = "gb-explorer")]
#[command(version)]
#[command(about = "García-Barbosa sequence and perceptual level explorer")]
struct Cli {
    /// Number of dimensions in the sequence
    #[arg(long, env = "GB_DIMS", default_value_t = DEFAULT_DIMENSIONS)]
    dims: usize,

    /// JSON configuration file (overrides --dims)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the dimension sequence
    Sequence,

    /// Print level properties
    Levels {
        /// First level
        #[arg(long, default_value = "2")]
        from: u32,

        /// Last level
        #[arg(long, default_value = "6")]
        to: u32,
    },

    /// Print level metrics
    Metrics {
        /// First level
        #[arg(long, default_value = "2")]
        from: u32,

        /// Last level
        #[arg(long, default_value = "4")]
        to: u32,
    },

    /// Squared interval of a displacement in a level's metric
    Interval {
        /// Level whose metric to use
        #[arg(long, default_value = "2")]
        level: u32,

        /// Displacement components, one per dimension (comma-separated)
        #[arg(value_delimiter = ',', allow_negative_numbers = true)]
        components: Vec<i32>,
    },

    /// Check whether the time of one level is space for another
    Relation {
        /// Lower level
        lower: u32,

        /// Upper level
        upper: u32,
    },

    /// Analyse the temporal paradox of a level
    Paradox {
        /// Level to analyse
        #[arg(long, default_value = "6")]
        level: u32,
    },

    /// Run the full demonstration
    Demo,

    /// Save a JSON report
    Report {
        /// Output file for the report
        #[arg(long, default_value = "report.json")]
        output: PathBuf,

        /// First level
        #[arg(long, default_value = "2")]
        from: u32,

        /// Last level
        #[arg(long, default_value = "6")]
        to: u32,
    },

    /// Write SVG charts
    Charts {
        /// Directory for the chart files
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,

        /// First level
        #[arg(long, default_value = "2")]
        from: u32,

        /// Last level
        #[arg(long, default_value = "6")]
        to: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .init();

    let config = resolve_config(cli.config.as_deref(), cli.dims)?;
    let calculator = SequenceCalculator::new(config)?;

    match cli.command {
        Commands::Sequence => {
            println!("{}", display::sequence_table(calculator.sequence()));
        }

        Commands::Levels { from, to } => {
            println!("{}", display::level_table(&calculator, from..=to)?);
        }

        Commands::Metrics { from, to } => {
            println!("{}", display::metric_table(&calculator, from..=to)?);
        }

        Commands::Interval { level, components } => {
            println!("{}", display::interval_line(&calculator, level, &components)?);
        }

        Commands::Relation { lower, upper } => {
            let relation = calculator.time_space_relation(lower, upper)?;
            println!("{}", relation);
        }

        Commands::Paradox { level } => match calculator.temporal_paradox(level)? {
            Some(paradox) => println!("{}", display::paradox_block(&paradox)),
            None => {
                let props = calculator.level_properties(level)?;
                println!(
                    "{}: time D{} lies inside the {}-dimension sequence, no paradox.",
                    props.name,
                    props.temporal_dim,
                    calculator.n_dims()
                );
            }
        },

        Commands::Demo => {
            println!("{}", display::demo(&calculator)?);
        }

        Commands::Report { output, from, to } => {
            info!(from = from, to = to, n_dims = calculator.n_dims(), "Building report");

            let report = Report::build(&calculator, from..=to)?;
            let output_path = timestamped_path(&output);
            report.save(&output_path)?;

            println!("\n=== Report Complete ===");
            println!("Report saved to: {}", output_path.display());
            println!("Levels: {}", report.levels.len());
            println!("Relations: {}", report.relations.len());
            println!("Paradoxes: {}", report.paradoxes.len());
        }

        Commands::Charts { out_dir, from, to } => {
            let written = write_charts(&out_dir, &calculator, from..=to)?;

            println!("\n=== Charts Complete ===");
            for path in written {
                println!("  {}", path.display());
            }
        }
    }

    Ok(())
}
