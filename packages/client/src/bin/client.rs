//! Terminal chat client.
//!
//! Asks for a display name, then shows the chat and keeps it in sync with
//! the remote store by polling. Enter sends the current line.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin marathon-chat-client -- --endpoint https://example.com/chat
//! ```

use std::{sync::Arc, time::Duration};

use clap::Parser;
use marathon_chat_client::{
    ChatSession, ClientConfig,
    domain::KeyGesture,
    error::ClientError,
    infrastructure::HttpRemoteMessageStore,
    session::KeyOutcome,
    ui::{Screen, TerminalRenderer, outcome_notice},
};
use marathon_chat_shared::{logger::setup_logger, time::local_offset};
use rustyline::{DefaultEditor, ExternalPrinter, error::ReadlineError};
use tokio::sync::mpsc;

#[derive(Debug, Parser)]
#[command(version, about = "Polling chat client")]
struct Args {
    /// Remote store endpoint (GET lists messages, POST sends one)
    #[arg(long, env = "MARATHON_CHAT_ENDPOINT")]
    endpoint: String,

    /// Interval between two scheduled polls, in milliseconds
    #[arg(long, default_value_t = 3_000)]
    poll_interval_ms: u64,

    /// Timeout for each request, in milliseconds
    #[arg(long, default_value_t = 10_000)]
    request_timeout_ms: u64,

    /// Join directly with this display name
    #[arg(long)]
    name: Option<String>,

    /// Default log level when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// What the input thread hands back for one prompt
enum Input {
    Line(String),
    Quit,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    if let Err(e) = run(args).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), ClientError> {
    let config = ClientConfig::new(&args.endpoint)?
        .with_poll_interval(Duration::from_millis(args.poll_interval_ms))?
        .with_request_timeout(Duration::from_millis(args.request_timeout_ms))?;
    let remote = HttpRemoteMessageStore::from_config(&config)?;
    tracing::info!("Using remote store at {}", remote.endpoint());

    let mut session = ChatSession::new(Arc::new(remote), config.poll_interval);
    let mut updates = session.subscribe();
    let mut renderer = TerminalRenderer::new();
    let offset = local_offset();

    let mut editor = DefaultEditor::new()?;
    let mut printer = editor.create_external_printer()?;
    let (prompt_tx, prompt_rx) = std::sync::mpsc::channel::<String>();
    let (input_tx, mut input_rx) = mpsc::unbounded_channel::<Input>();
    std::thread::spawn(move || read_lines(editor, prompt_rx, input_tx));

    if let Some(name) = args.name.as_deref()
        && let Err(e) = session.confirm_identity(name).await
    {
        let outcome = KeyOutcome::IdentityRejected(e);
        print_lines(&mut printer, outcome_notice(&outcome).into_iter().collect());
    }

    'session: loop {
        let prompt = match session.screen(&offset).await {
            Screen::NameEntry { .. } => "Your name: ",
            Screen::Chat(_) => "> ",
        };
        prompt_tx
            .send(prompt.to_string())
            .map_err(|_| ClientError::InputClosed)?;

        // Keep printing updates until the line comes back.
        let input = loop {
            tokio::select! {
                input = input_rx.recv() => break input.ok_or(ClientError::InputClosed)?,
                changed = updates.changed() => {
                    if changed.is_err() {
                        break 'session;
                    }
                    if let Screen::Chat(view) = session.screen(&offset).await {
                        print_lines(&mut printer, renderer.render(&view));
                    }
                }
            }
        };

        let line = match input {
            Input::Line(line) => line,
            Input::Quit => break,
        };

        match line.trim() {
            "/quit" => break,
            "/pause" => {
                renderer.pause();
                continue;
            }
            "/resume" => {
                print_lines(&mut printer, renderer.resume());
                continue;
            }
            _ => {}
        }

        if session.display_name().await.is_none() {
            session.set_name_input(&line).await;
        } else if !line.trim().is_empty() {
            // An empty line keeps the draft of a failed send, so Enter retries it.
            session.set_draft(&line).await;
        }
        let outcome = session.handle_key(KeyGesture::Confirm).await;
        print_lines(&mut printer, outcome_notice(&outcome).into_iter().collect());
    }

    session.shutdown().await;
    tracing::info!("Left the chat");
    Ok(())
}

fn read_lines(
    mut editor: DefaultEditor,
    prompts: std::sync::mpsc::Receiver<String>,
    input_tx: mpsc::UnboundedSender<Input>,
) {
    while let Ok(prompt) = prompts.recv() {
        let input = match editor.readline(&prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
                Input::Line(line)
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Input::Quit,
            Err(e) => {
                tracing::error!("Failed to read input: {}", e);
                Input::Quit
            }
        };
        let quit = matches!(input, Input::Quit);
        if input_tx.send(input).is_err() || quit {
            break;
        }
    }
}

fn print_lines(printer: &mut impl ExternalPrinter, lines: Vec<String>) {
    for line in lines {
        if let Err(e) = printer.print(format!("{line}\n")) {
            tracing::warn!("Failed to print line: {}", e);
        }
    }
}
