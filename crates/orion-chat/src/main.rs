//! A simple terminal front end for chatting with Orion.
//!
//! Configuration comes from the environment:
//!
//! - `ORION_BASE_URL`: backend to talk to (optional);
//! - `ORION_TIMEOUT_SECS`: per-request timeout in seconds (optional);
//! - `ORION_THREAD_ID`: reuse a conversation thread instead of asking the
//!   backend for a new one (optional).

#[macro_use]
extern crate tracing;

use std::env;
use std::io::Write as _;
use std::pin::pin;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use orion_chat::core::{ConversationBuilder, ErrorKind, Sender};
use orion_chat::http::{HttpConfig, HttpConfigBuilder, HttpTransport};
use orion_chat::prompt::Prompt;
use orion_chat::render::render_colored;
use owo_colors::OwoColorize;
use tokio::io::{self, BufReader};
use tokio::select;
use tokio::time::sleep;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = match http_config_from_env() {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}");
            return;
        }
    };
    let transport = HttpTransport::new(config);

    let session_id = match env::var("ORION_THREAD_ID") {
        Ok(thread_id) => thread_id,
        Err(_) => match transport.create_thread().await {
            Ok(thread_id) => thread_id,
            Err(err) => {
                eprintln!("Failed to start a conversation: {err}");
                return;
            }
        },
    };
    info!("using thread {session_id}");

    let conversation = ConversationBuilder::with_transport(transport)
        .with_session_id(session_id)
        .build();

    let progress_style = ProgressStyle::with_template("{spinner} {wide_msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");

    println!(
        "{}",
        "Orion AI can make mistakes. Check important info.".dimmed()
    );

    let mut prompt = Prompt::new(BufReader::new(io::stdin()));
    let view_rx = conversation.subscribe();
    let mut printed = 0;
    loop {
        print!("> ");
        std::io::stdout().flush().ok();

        let Some(text) = prompt.next_message().await else {
            break;
        };

        let submission = match conversation.submit(text).await {
            Ok(submission) => submission,
            Err(err) if err.kind() == ErrorKind::InvalidInput => continue,
            Err(err) => {
                error!("cannot submit: {err}");
                break;
            }
        };

        let progress_bar = ProgressBar::new_spinner();
        progress_bar.set_style(progress_style.clone());
        progress_bar.set_message("Orion is typing...");

        let mut settled = pin!(submission.settled());
        loop {
            progress_bar.inc(1);
            select! {
                _ = &mut settled => break,
                _ = sleep(Duration::from_millis(100)) => {}
            }
        }
        progress_bar.finish_and_clear();

        // The user's own line is already on screen, only print the rest.
        let view = view_rx.borrow();
        for entry in &view.transcript.entries()[printed..] {
            if entry.sender() == Sender::Bot {
                println!("{}", render_colored(entry));
            }
        }
        printed = view.transcript.len();
    }
}

fn http_config_from_env() -> Result<HttpConfig, String> {
    let mut builder = HttpConfigBuilder::new();
    if let Ok(base_url) = env::var("ORION_BASE_URL") {
        builder = builder.with_base_url(base_url);
    }
    if let Ok(raw) = env::var("ORION_TIMEOUT_SECS") {
        let secs: u64 = raw
            .trim()
            .parse()
            .map_err(|_| format!("ORION_TIMEOUT_SECS is not a number: {raw:?}"))?;
        builder = builder.with_timeout(Duration::from_secs(secs));
    }
    Ok(builder.build())
}
