use std::io::{self, Write};

use anyhow::Context;
use clap::{Parser, Subcommand};

use ragrec_cli::interactive::Session;
use ragrec_cli::logging::init_logging;
use ragrec_cli::render::renderer_for;
use ragrec_core::config::{Config, OutputFormat};
use ragrec_core::error::Error;
use ragrec_selector::form::{self as selector, Selection};
use ragrec_selector::reference::reference_blocks;
use ragrec_selector::{SimilarityMetric, UseCase, VectorStore};

#[derive(Parser)]
#[command(name = "ragrec")]
#[command(author, version, about = "Recommend a RAG setup from a description or a set of choices", long_about = None)]
struct Cli {
    /// Path to the base configuration file (default: ./config.toml)
    #[arg(short, long)]
    config: Option<String>,

    /// Output format, overriding `output.format` from the configuration
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend a vector store, metric and embedding model from free text
    Describe {
        /// Description of the use case; words are joined with spaces
        text: Vec<String>,
    },

    /// Recommend a generative model from the three dropdown choices
    Select {
        #[arg(long, default_value = "Question Answering")]
        use_case: String,

        #[arg(long, default_value = "FAISS")]
        store: String,

        #[arg(long, default_value = "Cosine")]
        metric: String,
    },

    /// Show the metric guide and comparison table
    Metrics,

    /// List the selectable use cases, vector stores and metrics
    Options,

    /// Prompt for descriptions and selections until /quit
    Interactive,
}

fn labels<T: ToString>(options: &[T]) -> String {
    options.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

fn report_bad_selection(err: &Error) {
    eprintln!("❌ {err}");
    eprintln!("   use cases:     {}", labels(UseCase::ALL));
    eprintln!("   vector stores: {}", labels(VectorStore::ALL));
    eprintln!("   metrics:       {}", labels(SimilarityMetric::ALL));
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load_from(cli.config.as_deref()).map_err(|e| {
        eprintln!("Error loading config: {}", e);
        e
    })?;
    let app = config.app()?;
    init_logging(&app.logging, cli.verbose);
    tracing::debug!(env = config.env_name(), "configuration loaded");

    let format = cli.format.unwrap_or(app.output.format);
    let mut renderer = renderer_for(format, app.output.color, Box::new(io::stdout()));

    match cli.command {
        Commands::Describe { text } => {
            let blocks = ragrec_freetext::form::present(&text.join(" "));
            renderer.render_page(&app.ui.freetext, &blocks)?;
        }
        Commands::Select { use_case, store, metric } => {
            match Selection::parse(&use_case, &store, &metric) {
                Ok(selection) => {
                    let blocks = selector::present(Some(&selection));
                    renderer.render_page(&app.ui.selector, &blocks)?;
                }
                Err(e) => {
                    report_bad_selection(&e);
                    std::process::exit(2);
                }
            }
        }
        Commands::Metrics => renderer.render_page(&app.ui.selector, &reference_blocks())?,
        Commands::Options => renderer.render_page(&app.ui.selector, &selector::options_blocks())?,
        Commands::Interactive => {
            // Keep prompts out of machine-readable output.
            let prompts: Box<dyn Write> = match format {
                OutputFormat::Text => Box::new(io::stdout()),
                OutputFormat::Json => Box::new(io::stderr()),
            };
            let stdin = io::stdin();
            Session::new(stdin.lock(), prompts, renderer.as_mut(), &app.ui)
                .run()
                .context("interactive session failed")?;
        }
    }
    Ok(())
}
