// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Stackyard CLI - health checks for your business tool stack

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use stackyard::commands::{self, export::ExportFormat, Output};
use stackyard::config;
use stackyard::types::{Category, Position};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stackyard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file path
    #[arg(short, long, env = "STACKYARD_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", global = true, value_parser = clap::builder::FalseyValueParser::new())]
    no_color: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a saved stack and print its health report
    Analyze {
        /// Session file (JSON with tools and connections)
        session: PathBuf,
    },

    /// List the tool catalog
    Catalog {
        /// Only show one category (e.g. crm, email-marketing)
        #[arg(long)]
        category: Option<Category>,
    },

    /// Browse industry scenarios
    Scenario {
        #[command(subcommand)]
        action: ScenarioAction,
    },

    /// Compute node positions
    Layout {
        #[command(subcommand)]
        action: LayoutAction,
    },

    /// Export a saved stack to various formats
    Export {
        /// Session file (JSON with tools and connections)
        session: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Dot)]
        format: ExportFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish)
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum ScenarioAction {
    /// List all scenarios
    List,
    /// Show a scenario's starting stack and target architecture
    Show {
        /// Scenario ID
        id: String,
    },
    /// Analyze a scenario's starting stack against its solution
    Analyze {
        /// Scenario ID
        id: String,
    },
}

#[derive(Subcommand)]
enum LayoutAction {
    /// Grid layout grouped by category
    Grid {
        /// Catalog tool IDs
        tools: Vec<String>,

        /// Canvas width (defaults to the configured width)
        #[arg(long)]
        width: Option<f64>,
    },
    /// Hub-and-satellite layout
    Hub {
        /// Number of satellites
        #[arg(long)]
        satellites: usize,

        /// Ring radius (defaults to the configured radius)
        #[arg(long)]
        radius: Option<f64>,

        /// Hub center X
        #[arg(long, default_value_t = 600.0)]
        cx: f64,

        /// Hub center Y
        #[arg(long, default_value_t = 400.0)]
        cy: f64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref())?;

    // Initialize logging; RUST_LOG wins over flags and config
    let log_level = match cli.verbose {
        0 if cli.quiet => "error",
        0 => config.log_level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let out = Output {
        json: cli.json,
        color: config.color && !cli.no_color,
    };

    // Execute command
    match cli.command {
        Commands::Analyze { session } => commands::analyze::run(&session, out),
        Commands::Catalog { category } => commands::catalog::run(category, out),
        Commands::Scenario { action } => match action {
            ScenarioAction::List => commands::scenario::list(out),
            ScenarioAction::Show { id } => commands::scenario::show(&id, out),
            ScenarioAction::Analyze { id } => {
                commands::scenario::analyze(&id, config.canvas_width, out)
            }
        },
        Commands::Layout { action } => match action {
            LayoutAction::Grid { tools, width } => {
                commands::layout::grid(&tools, width.unwrap_or(config.canvas_width))
            }
            LayoutAction::Hub { satellites, radius, cx, cy } => commands::layout::hub(
                satellites,
                Position::new(cx, cy),
                radius.unwrap_or(config.hub_radius),
            ),
        },
        Commands::Export { session, format, output } => {
            commands::export::run(&session, format, output)
        }
        Commands::Completions { shell } => commands::completions::run(shell, &mut Cli::command()),
    }
}
