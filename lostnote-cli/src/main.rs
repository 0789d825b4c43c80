//! Lost Note CLI - read, render and export the storybook from a terminal

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse and validate jobs argument (must be at least 1)
fn parse_jobs(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if n < 1 {
        Err("jobs must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

#[derive(Parser)]
#[command(name = "lostnote")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON content file to use instead of the bundled story
    #[arg(long, global = true)]
    content: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read the story interactively
    Read {
        /// Enable the about overlay
        #[arg(long)]
        show_about: bool,
    },

    /// Render a single page
    Render {
        /// Page number, starting at 1
        page: usize,

        /// Output format (html, json, text)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Export every page to a directory
    Export {
        /// Output directory
        #[arg(short, long)]
        output_dir: String,

        /// Output format (html, json, text)
        #[arg(short, long, default_value = "html")]
        format: String,

        /// Number of parallel jobs (must be at least 1)
        #[arg(short, long, default_value = "4", value_parser = parse_jobs)]
        jobs: usize,
    },

    /// Display information about the story
    Info {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate story content
    Validate {
        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; logs go to stderr so rendered output stays clean
    let filter = if cli.verbose {
        "lostnote_cli=debug,lostnote_core=debug"
    } else {
        "lostnote_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let content = cli.content.as_deref();

    match cli.command {
        Commands::Read { show_about } => commands::read(content, show_about).await,

        Commands::Render {
            page,
            format,
            output,
        } => commands::render(page, content, &format, output.as_deref()),

        Commands::Export {
            output_dir,
            format,
            jobs,
        } => commands::export(content, &output_dir, &format, jobs),

        Commands::Info { json } => commands::info(content, json),

        Commands::Validate { strict } => commands::validate(content, strict),
    }
}
