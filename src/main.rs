use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use futures::StreamExt;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use geoassist_anthropic::AnthropicClient;
use geoassist_core::ChatModel;
use geoassist_retrieval::{Corpus, search};
use geoassist_server::{AppState, prompt, start};

#[derive(Parser)]
#[command(name = "geoassist")]
#[command(about = "Documentation-grounded Q&A assistant for the GeoGebra Calculator Suite manual", long_about = None)]
struct Cli {
    /// Path to the knowledge-base JSON corpus
    #[arg(short, long, default_value = "knowledge-base.json")]
    corpus: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP gateway
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Ask a single question from the terminal, streaming the answer to stdout
    Ask {
        /// The question to answer from the manual
        question: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "geoassist=info,tower_http=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let corpus = Arc::new(Corpus::load(&cli.corpus)?);
    tracing::info!("📚 Corpus loaded: {} documents", corpus.len());

    match cli.command {
        Command::Serve { host, port } => {
            let model: Option<Arc<dyn ChatModel>> = match AnthropicClient::from_env() {
                Ok(client) => {
                    tracing::info!("✅ Chat model ready ({})", client.model_id());
                    Some(Arc::new(client))
                }
                Err(e) => {
                    tracing::warn!(
                        "⚠️ Chat model not available: {e} — chat requests will fail until ANTHROPIC_API_KEY is set"
                    );
                    None
                }
            };

            start(&host, port, AppState::new(corpus, model)).await
        }
        Command::Ask { question } => ask(&corpus, &question).await,
    }
}

/// One-shot terminal session: same retrieval and context assembly as the
/// HTTP path, deltas printed as they arrive.
async fn ask(corpus: &Corpus, question: &str) -> Result<()> {
    if question.trim().is_empty() {
        anyhow::bail!("question must not be empty");
    }

    let client = AnthropicClient::from_env()?;

    let relevant = search(corpus, question, prompt::TOP_K);
    println!(
        "{} {} manual section(s) matched",
        "🔍".cyan(),
        relevant.len()
    );

    let system = prompt::build_system_prompt(&relevant);
    let turns = prompt::build_turns(None, question);

    let mut stream = client.stream_chat(&system, &turns).await?;
    while let Some(delta) = stream.next().await {
        match delta {
            Ok(text) => {
                print!("{}", text);
                std::io::stdout().flush()?;
            }
            Err(e) => {
                println!();
                println!("{} Stream interrupted: {}", "❌".red(), e);
                return Ok(());
            }
        }
    }
    println!();

    Ok(())
}
