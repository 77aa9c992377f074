use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use graft_core::graph::Deduplicate;
use graft_core::{
    candidate_grafts_for, candidate_grafts_in, graft_report, Config, Graph, ReportOptions,
};

mod render;
mod source;

#[derive(Parser)]
#[command(name = "graft")]
#[command(
    about = "Find where package fields could be grafted onto the ECS field taxonomy",
    long_about = None
)]
struct Cli {
    /// Config file to use instead of graft.toml or the user config
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Inputs {
    /// Read the nested taxonomy from a file instead of git
    #[arg(long)]
    taxonomy: Option<PathBuf>,

    /// Path to the root of the ECS repository
    #[arg(long)]
    ecs_root: Option<PathBuf>,

    /// ECS version to read (tag, branch or sha)
    #[arg(long)]
    ecs_version: Option<String>,

    /// Read package fields from a file instead of stdin
    #[arg(long)]
    package: Option<PathBuf>,

    /// Print statement counts to stderr
    #[arg(long)]
    stats: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Flatten the taxonomy and package fields and print the statements
    Statements {
        #[command(flatten)]
        inputs: Inputs,
    },
    /// Report graft candidates for package fields
    Candidates {
        #[command(flatten)]
        inputs: Inputs,

        /// Load a statement dump instead of flattening
        #[arg(long, conflicts_with_all = ["taxonomy", "package", "ecs_root", "ecs_version"])]
        graph: Option<PathBuf>,

        /// Query a single field by its full path
        #[arg(long)]
        field: Option<String>,

        /// Type to match; the field need not be in the graph
        #[arg(long = "type", value_name = "TYPE", requires = "field")]
        field_type: Option<String>,

        /// Include group fields in the report
        #[arg(long)]
        include_groups: bool,

        /// Include externally defined fields in the report
        #[arg(long)]
        include_external: bool,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the default configuration
    Config,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };
    init_tracing(&config.log.filter);

    match cli.command {
        Commands::Statements { inputs } => {
            let graph = load_graph(&mut config, &inputs)?;
            let mut out = BufWriter::new(std::io::stdout().lock());
            for statement in graph.statements() {
                writeln!(out, "{}", statement)?;
            }
            out.flush()?;
        }
        Commands::Candidates {
            inputs,
            graph,
            field,
            field_type,
            include_groups,
            include_external,
            json,
        } => {
            let graph = match graph {
                Some(path) => {
                    let text = std::fs::read_to_string(&path)
                        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
                    Graph::from_nquads(&text)
                        .wrap_err_with(|| format!("Invalid statement dump {}", path.display()))?
                }
                None => load_graph(&mut config, &inputs)?,
            };

            let mut out = BufWriter::new(std::io::stdout().lock());
            match field {
                Some(field) => {
                    let outcome = match field_type {
                        Some(t) => candidate_grafts_for(&graph, &field, &t),
                        None => candidate_grafts_in(&graph, &field),
                    };
                    render::field(&mut out, &field, &outcome, json)?;
                }
                None => {
                    let mut options = ReportOptions::from(&config.report);
                    options.skip_groups &= !include_groups;
                    options.skip_external &= !include_external;
                    let reports = graft_report(&graph, options);
                    render::report(&mut out, &reports, json)?;
                }
            }
            out.flush()?;
        }
        Commands::Config => {
            print!("{}", Config::default_config_string());
        }
    }

    Ok(())
}

fn init_tracing(filter: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn load_graph(config: &mut Config, inputs: &Inputs) -> Result<Graph> {
    if let Some(root) = &inputs.ecs_root {
        config.taxonomy.root = root.clone();
    }
    if let Some(version) = &inputs.ecs_version {
        config.taxonomy.version = version.clone();
    }

    let taxonomy = source::taxonomy_text(&config.taxonomy, inputs.taxonomy.as_deref())?;
    let packages = source::package_text(inputs.package.as_deref())?;
    let result = source::flatten(&taxonomy, &packages)?;

    if inputs.stats {
        eprint!("{}", result.stats());
    }
    if !result.warnings.is_empty() {
        warn!(count = result.warnings.len(), "Some statements were skipped");
    }

    let graph = result.into_graph(&Deduplicate);
    info!(statements = graph.len(), "Loaded graph");
    Ok(graph)
}
