#![forbid(unsafe_code)]
//! uiselect command line interface

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use console::style;

use uiselect::commands::{
    execute_compare, execute_evaluate, execute_export, execute_recommend, CompareOptions,
    EvaluateOptions, ExportOptions, RecommendOptions,
};
use uiselect::dataset::{Loader, DEFAULT_DATA_FILE, DEFAULT_SEED_FILE};
use uiselect::error::SelectorError;
use uiselect::selector::OutputFormat;

#[derive(Parser)]
#[command(name = "uiselect")]
#[command(about = "Recommend, evaluate, and compare UI component libraries")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Primary data file (TypeScript source with exported arrays)
    #[arg(long, global = true, default_value = DEFAULT_DATA_FILE)]
    data: PathBuf,

    /// Seed fallback (plain JSON)
    #[arg(long, global = true, default_value = DEFAULT_SEED_FILE)]
    seed: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank catalog libraries against project preferences
    Recommend {
        /// Target framework (react|vue|angular|svelte|universal|other)
        #[arg(long)]
        framework: Option<String>,

        /// Use-case id describing the project
        #[arg(long)]
        project_type: Option<String>,

        /// Priority tag: performance|accessibility|customization|ecosystem|dx|enterprise
        /// (repeatable, comma lists accepted)
        #[arg(long = "priority")]
        priorities: Vec<String>,

        /// Preferred design-style tag
        #[arg(long)]
        design_style: Option<String>,

        /// Team size (small|medium|large)
        #[arg(long)]
        team_size: Option<String>,

        /// Number of results to keep
        #[arg(long, default_value_t = 5)]
        top: usize,

        /// Output format
        #[arg(long, value_enum, default_value = "markdown")]
        format: OutputFormat,
    },

    /// Score libraries on weighted evaluation dimensions
    Evaluate {
        /// Library ids (comma-separated)
        #[arg(long)]
        libraries: Option<String>,

        /// Dimension ids (comma-separated; default all)
        #[arg(long)]
        dimensions: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "markdown")]
        format: OutputFormat,
    },

    /// List attributes of named libraries side by side
    Compare {
        /// Library ids (comma-separated)
        #[arg(long)]
        libraries: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "markdown")]
        format: OutputFormat,
    },

    /// Dump the loaded dataset
    Export {
        /// Output format
        #[arg(long, value_enum, default_value = "markdown")]
        format: OutputFormat,
    },

    #[command(external_subcommand)]
    External(Vec<OsString>),
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("{} {}", style("Error:").red().bold(), err);
        eprintln!();
        eprintln!("{}", Cli::command().render_help());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let loader = Loader::new(cli.data, cli.seed);

    let command = match cli.command {
        Some(command) => command,
        None => {
            // Bare invocation prints usage and succeeds.
            Cli::command().print_help()?;
            return Ok(());
        }
    };

    match command {
        Commands::Recommend {
            framework,
            project_type,
            priorities,
            design_style,
            team_size,
            top,
            format,
        } => {
            let options = RecommendOptions {
                framework,
                project_type,
                priorities,
                design_style,
                team_size,
                top,
                format,
            };
            execute_recommend(options, &loader)?;
        }

        Commands::Evaluate {
            libraries,
            dimensions,
            format,
        } => {
            let options = EvaluateOptions {
                libraries,
                dimensions,
                format,
            };
            execute_evaluate(options, &loader)?;
        }

        Commands::Compare { libraries, format } => {
            let options = CompareOptions { libraries, format };
            execute_compare(options, &loader)?;
        }

        Commands::Export { format } => {
            let options = ExportOptions { format };
            execute_export(options, &loader)?;
        }

        Commands::External(args) => {
            let name = args
                .first()
                .map(|arg| arg.to_string_lossy().into_owned())
                .unwrap_or_default();
            return Err(SelectorError::Usage(format!("Unknown command: {name}")).into());
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
