//! search-view: ask the search backend from the terminal or serve the search page.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use search_view::config::{ViewConfig, DEFAULT_ENDPOINT};
use search_view::{shell, web, SearchView};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "search-view", version)]
#[command(about = "Post a question to the search backend and show the best matches")]
struct Cli {
    /// Backend search endpoint (POST, JSON).
    #[arg(long, short, global = true, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Log request lifecycle to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Submit one question and print what the view shows.
    Ask {
        /// The question.
        query: String,
    },

    /// Interactive prompt: each line is submitted as a question.
    Shell,

    /// Serve the search page over HTTP.
    Serve {
        /// Port to listen on.
        #[arg(long, short, default_value_t = 8080)]
        port: u16,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ViewConfig::new(&cli.endpoint)?;
    let rt = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    match cli.command {
        Command::Ask { query } => rt.block_on(run_ask(config, query)),
        Command::Shell => {
            rt.block_on(run_shell(config))?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Serve { port } => {
            rt.block_on(run_serve(config, port))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run_ask(config: ViewConfig, query: String) -> Result<ExitCode> {
    let mut view = SearchView::new(config);
    if !view.submit_query(query).await {
        eprintln!("Nothing to search: the question is empty.");
        return Ok(ExitCode::from(2));
    }
    print!("{}", view.screen().to_text());
    Ok(if view.state().error.is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

async fn run_shell(config: ViewConfig) -> Result<()> {
    let mut view = SearchView::new(config);
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    shell::run(&mut view, stdin, &mut stdout)
        .await
        .context("terminal I/O failed")
}

async fn run_serve(config: ViewConfig, port: u16) -> Result<()> {
    let addr = format!("127.0.0.1:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    println!("Listening on http://{}", addr);
    web::serve(listener, config).await.context("server stopped")
}
