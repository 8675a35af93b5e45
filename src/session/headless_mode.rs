//! One-shot command execution
//!
//! Each command renders into a [`RecordingSink`] and prints what ended up
//! on it once the operation finishes.

use super::{SessionData, setup_session};
use crate::cli_messages::print_event;
use crate::dashboard::html::{render_page, render_table_body};
use crate::dashboard::text::render_text;
use crate::dashboard::view::LOAD_FAILED_TEXT;
use crate::dashboard::{AddOutcome, RecordingSink, RefreshOutcome};
use crate::environment::ApiBase;
use crate::{print_cmd_error, print_cmd_info, print_cmd_success};
use reqwest::Url;
use std::error::Error;
use std::io::{BufRead, Write};
use std::sync::Arc;

/// How `show` prints the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Table body markup
    Html,
    /// Standalone HTML snapshot page
    Page,
    /// Aligned plain-text table
    #[default]
    Text,
}

fn recording_session(
    api_base: ApiBase,
    token: Option<String>,
) -> Result<(SessionData, Arc<RecordingSink>), Box<dyn Error>> {
    let sink = Arc::new(RecordingSink::new());
    let session = setup_session(api_base, sink.clone(), token)?;
    Ok((session, sink))
}

/// Refreshes once and prints the table in the requested format.
pub async fn run_show(api_base: ApiBase, format: OutputFormat) -> Result<(), Box<dyn Error>> {
    let (session, sink) = recording_session(api_base, None)?;
    let outcome = session.view_model.refresh().await;

    let table = sink.table();
    let rendered = match format {
        OutputFormat::Html => render_table_body(&table),
        OutputFormat::Page => render_page(session.api_base.as_str(), &table, None),
        OutputFormat::Text => render_text(&table),
    };
    println!("{}", rendered);

    if outcome == RefreshOutcome::Failed {
        return Err(Box::from(LOAD_FAILED_TEXT));
    }
    Ok(())
}

/// Adds a target, prints the resulting message and the refreshed table.
///
/// `token` replaces the stored API token for this request.
pub async fn run_add(
    api_base: ApiBase,
    url: &str,
    token: Option<String>,
) -> Result<(), Box<dyn Error>> {
    let (session, sink) = recording_session(api_base, token)?;
    let outcome = session.view_model.add_target(url).await;

    if let Some(message) = sink.message() {
        print_event(&message);
    }
    match outcome {
        AddOutcome::Ignored => {
            print_cmd_info!("Nothing to add", "the URL is blank");
            Ok(())
        }
        AddOutcome::Added => {
            println!("{}", render_text(&sink.table()));
            Ok(())
        }
        AddOutcome::Rejected | AddOutcome::Failed => Err(Box::from("Could not add target")),
    }
}

/// A line read by the interactive prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptInput {
    Exit,
    Blank,
    Invalid,
    Url(String),
}

/// Interprets one prompt line. A bare host gets `https://` prepended.
pub fn parse_prompt_line(line: &str) -> PromptInput {
    let line = line.trim();
    if line.is_empty() {
        return PromptInput::Blank;
    }
    if line.eq_ignore_ascii_case("exit") {
        return PromptInput::Exit;
    }

    let candidate = if line.contains("://") {
        line.to_string()
    } else {
        format!("https://{}", line)
    };
    match Url::parse(&candidate) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.host_str().is_some() => {
            PromptInput::Url(candidate)
        }
        _ => PromptInput::Invalid,
    }
}

/// Reads URLs from stdin until `exit` or end of input, adding each one.
pub async fn run_prompt(api_base: ApiBase) -> Result<(), Box<dyn Error>> {
    let (session, sink) = recording_session(api_base, None)?;
    print_cmd_info!(
        "Add targets",
        "enter one URL per line, `exit` to quit ({})",
        session.api_base
    );

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("URL> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        match parse_prompt_line(&line?) {
            PromptInput::Exit => break,
            PromptInput::Blank => continue,
            PromptInput::Invalid => print_cmd_error!("Invalid URL."),
            PromptInput::Url(url) => {
                session.view_model.add_target(&url).await;
                if let Some(message) = sink.message() {
                    print_event(&message);
                }
            }
        }
    }
    Ok(())
}

/// Checks that the API answers its health endpoint.
pub async fn run_health(api_base: ApiBase) -> Result<(), Box<dyn Error>> {
    let (session, _sink) = recording_session(api_base, None)?;
    match session.view_model.api().health().await {
        Ok(body) => {
            print_cmd_success!("API is healthy", "{}", body.trim());
            Ok(())
        }
        Err(e) => {
            print_cmd_error!("API health check failed", e.user_message().as_str());
            Err(Box::new(e))
        }
    }
}
