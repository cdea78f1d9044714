mod render;
mod search;
mod shell;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use trendscope_core::{Sentiment, Source};

#[derive(Debug, Parser)]
#[command(name = "trendscope")]
#[command(about = "Search social media trends across Reddit, YouTube, and Twitter")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search a topic once and print insights and matching items
    Search {
        /// Topic to search for (multiple words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        topic: Vec<String>,

        /// Only show items from this platform (repeatable)
        #[arg(long = "source", value_name = "SOURCE")]
        sources: Vec<Source>,

        /// Only show items with this sentiment (repeatable)
        #[arg(long = "sentiment", value_name = "SENTIMENT")]
        sentiments: Vec<Sentiment>,

        /// Maximum number of items to print
        #[arg(long)]
        limit: Option<usize>,

        /// Print results as JSON instead of text cards
        #[arg(long)]
        json: bool,
    },
    /// Interactive session: search, adjust filters, and browse results
    Shell,
}

const SUGGESTED_TOPICS: [&str; 3] = ["IPL Match", "Climate Change", "AI Ethics"];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = trendscope_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Search {
            topic,
            sources,
            sentiments,
            limit,
            json,
        }) => {
            let options = search::SearchOptions {
                sources,
                sentiments,
                limit,
                json,
            };
            search::run_search(&config, &topic.join(" "), &options).await?;
        }
        Some(Commands::Shell) => shell::run_shell(&config).await?,
        None => {
            println!("Search for a topic to see trending discussions from Reddit and other platforms.");
            println!();
            for topic in SUGGESTED_TOPICS {
                println!("  trendscope search \"{topic}\"");
            }
        }
    }

    Ok(())
}
