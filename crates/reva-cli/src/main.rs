//! reva - multi-agent code review CLI
//!
//! ## Commands
//!
//! - `review`: run the analysis agent pipeline against one file
//! - `score`: compute a maintainability score for one or more files
//! - `agents`: list the registered analysis agents

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};

use reva_core::{
    init_tracing, render_report_md, write_report_json, AgentIdentity, CodeSubmission, Pipeline,
    RetryPolicy, METRICS,
};
use reva_scoring::{builtin_registry, ScoringConfig, ScoringEngine, SourceFile};

#[derive(Parser)]
#[command(name = "reva")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Multi-agent code review and maintainability scoring", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the review agent pipeline against a file
    Review {
        /// File to review
        path: PathBuf,

        /// Comma-separated agent names (default: every builtin agent)
        #[arg(short, long, value_delimiter = ',')]
        agents: Option<Vec<String>>,

        /// Maximum invocation attempts per agent
        #[arg(long, default_value = "3")]
        max_retries: u32,

        /// Write the JSON report to this path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print a Markdown summary instead of JSON
        #[arg(long)]
        markdown: bool,
    },

    /// Compute a maintainability score for one or more files
    Score {
        /// Files to score
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Write the JSON score to this path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List registered analysis agents
    Agents,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    init_tracing(cli.json, level);

    match cli.command {
        Commands::Review {
            path,
            agents,
            max_retries,
            output,
            markdown,
        } => review(path, agents, max_retries, output, markdown).await,
        Commands::Score { paths, output } => score(paths, output),
        Commands::Agents => list_agents(),
    }
}

async fn review(
    path: PathBuf,
    agents: Option<Vec<String>>,
    max_retries: u32,
    output: Option<PathBuf>,
    markdown: bool,
) -> Result<()> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("read submission {}", path.display()))?;
    let submission = CodeSubmission::new(content).with_path(path.display().to_string());

    let registry = builtin_registry()?;
    let names: Vec<String> = agents.unwrap_or_else(|| registry.names().to_vec());
    let identities: Vec<AgentIdentity> = names
        .iter()
        .enumerate()
        .map(|(i, name)| AgentIdentity::new(name.clone(), i))
        .collect();

    let policy = RetryPolicy {
        max_retries,
        base_delay: Duration::from_secs(1),
    };

    let report = Pipeline::run(&registry, &identities, &submission, &policy).await?;

    if let Some(out) = &output {
        write_report_json(out, &report)?;
        info!(path = %out.display(), "report written");
    }

    if markdown {
        println!("{}", render_report_md(&report));
    } else {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    METRICS.flush();
    Ok(())
}

fn score(paths: Vec<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let mut files = Vec::with_capacity(paths.len());
    for path in &paths {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read source file {}", path.display()))?;
        files.push(SourceFile::new(path.display().to_string(), content));
    }

    let engine = ScoringEngine::default();
    let result = engine.score(&files, &ScoringConfig::default())?;

    let json = serde_json::to_string_pretty(&result)?;
    if let Some(out) = &output {
        std::fs::write(out, &json).with_context(|| format!("write {}", out.display()))?;
        info!(path = %out.display(), "score written");
    }
    println!("{json}");

    METRICS.flush();
    Ok(())
}

fn list_agents() -> Result<()> {
    let registry = builtin_registry()?;
    for name in registry.names() {
        println!("{name}");
    }
    Ok(())
}
