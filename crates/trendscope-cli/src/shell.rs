//! Interactive `shell` command.
//!
//! Reads one command per line from stdin. Filters apply to the current
//! results immediately and carry over to later searches.

use std::io::Write as _;
use std::str::FromStr;

use tokio::io::{AsyncBufReadExt, BufReader};
use trendscope_core::{AppConfig, Sentiment, Source};
use trendscope_search::TrendSession;

use crate::render::{render_cards, render_insights};

const DEFAULT_SHOW_LIMIT: usize = 10;

const HELP: &str = "\
commands:
  search <topic>         run a new search
  sources <list>         keep only these platforms (youtube, reddit, twitter)
  sentiments <list>      keep only these sentiments (positive, neutral, negative)
  show [n]               print up to n matching items (default 10)
  insights               print insights for the current search
  help                   show this message
  quit                   leave the shell";

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ShellCommand {
    Search(String),
    Sources(Vec<Source>),
    Sentiments(Vec<Sentiment>),
    Show(Option<usize>),
    Insights,
    Help,
    Quit,
    Empty,
}

/// Parse one input line.
///
/// Lists accept commas and/or whitespace as separators.
pub(crate) fn parse_command(line: &str) -> Result<ShellCommand, String> {
    let line = line.trim();
    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

    match verb.to_ascii_lowercase().as_str() {
        "" => Ok(ShellCommand::Empty),
        "search" | "s" => {
            if rest.is_empty() {
                Err("usage: search <topic>".to_string())
            } else {
                Ok(ShellCommand::Search(rest.to_string()))
            }
        }
        "sources" => parse_list(rest).map(ShellCommand::Sources),
        "sentiments" => parse_list(rest).map(ShellCommand::Sentiments),
        "show" => {
            if rest.is_empty() {
                Ok(ShellCommand::Show(None))
            } else {
                rest.parse::<usize>()
                    .map(|n| ShellCommand::Show(Some(n)))
                    .map_err(|_| format!("not a count: {rest:?}"))
            }
        }
        "insights" => Ok(ShellCommand::Insights),
        "help" | "?" => Ok(ShellCommand::Help),
        "quit" | "exit" | "q" => Ok(ShellCommand::Quit),
        other => Err(format!("unknown command {other:?}; type `help`")),
    }
}

fn parse_list<T>(raw: &str) -> Result<Vec<T>, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<T>().map_err(|e| e.to_string()))
        .collect()
}

fn joined<T: std::fmt::Display>(values: impl Iterator<Item = T>) -> String {
    values.map(|v| v.to_string()).collect::<Vec<_>>().join(", ")
}

/// Run the interactive loop until `quit` or end of input.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or stdin/stdout fail.
/// Search failures are reported inline and the loop continues.
pub(crate) async fn run_shell(config: &AppConfig) -> anyhow::Result<()> {
    let mut session = TrendSession::from_config(config)?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("trendscope shell; type `help` for commands");
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };

        match command {
            ShellCommand::Empty => {}
            ShellCommand::Help => println!("{HELP}"),
            ShellCommand::Quit => break,
            ShellCommand::Search(topic) => match session.search(&topic).await {
                Ok(results) => println!(
                    "Found {} results for \"{}\"",
                    results.items.len(),
                    results.query
                ),
                Err(_) => {
                    println!("Search error: an error occurred while searching. Please try again.");
                }
            },
            ShellCommand::Sources(sources) => {
                if !session.set_sources(sources) {
                    println!("at least one source must stay selected");
                }
                println!("sources: {}", joined(session.filters().sources().iter()));
            }
            ShellCommand::Sentiments(sentiments) => {
                if !session.set_sentiments(sentiments) {
                    println!("at least one sentiment must stay selected");
                }
                println!(
                    "sentiments: {}",
                    joined(session.filters().sentiments().iter())
                );
            }
            ShellCommand::Insights => match session.results() {
                Some(results) => {
                    print!("{}", render_insights(&results.query, &results.insights));
                }
                None => println!("no search yet; try `search <topic>`"),
            },
            ShellCommand::Show(limit) => {
                if session.results().is_none() {
                    println!("no search yet; try `search <topic>`");
                    continue;
                }
                let filtered = session.filtered();
                print!(
                    "{}",
                    render_cards(&filtered, Some(limit.unwrap_or(DEFAULT_SHOW_LIMIT)))
                );
            }
        }
    }

    Ok(())
}
