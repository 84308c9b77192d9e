use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use wordnik_config::Config;
use wordnik_types::{AppEvent, UiEvent};

pub mod events;
pub mod input;
pub mod render;
pub mod state;

use events::{UiAction, handle_events};
use input::{HELP, Input, Notice, parse_line};
pub use state::{OutputFormat, UiOptions, UiState};

/// Terminal front end on stdin/stdout
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    config: Arc<RwLock<Config>>,
    options: UiOptions,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let interactive = options.word.is_none() && atty::is(atty::Stream::Stdin);

    let state = {
        let config = config.read().await;
        UiState::new(
            options.format,
            config.ui.definition_width,
            interactive.then(|| config.ui.prompt.clone()),
        )
    };

    run_ui(
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        state,
        options.word,
        app_to_ui_rx,
        ui_to_app_tx,
        cancel,
    )
    .await
}

/// Drive the UI over arbitrary input and output streams.
///
/// With `word` set, stdin is never read: the word is searched once and the
/// loop ends when the app closes it. Otherwise lines are read by a separate
/// task, so this loop keeps draining app events while that task waits for
/// room in `ui_to_app_tx`.
pub async fn run_ui<R, W>(
    input: R,
    mut output: W,
    state: UiState,
    word: Option<String>,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin + Send + 'static,
    W: AsyncWrite + Unpin,
{
    let (notice_tx, notice_rx) = kanal::unbounded_async();

    let reader = match word {
        Some(word) => {
            send(&ui_to_app_tx, UiEvent::SearchText(word)).await?;
            send(&ui_to_app_tx, UiEvent::EndOfInput).await?;
            None
        }
        None => {
            prompt(&mut output, &state).await?;
            Some(tokio::spawn(async move {
                if let Err(e) = forward_input(input, ui_to_app_tx, notice_tx).await {
                    tracing::debug!("[UI] input reader stopped: {}", e);
                }
            }))
        }
    };

    let result = drive(&mut output, state, reader.is_some(), app_to_ui_rx, notice_rx, cancel).await;

    if let Some(reader) = reader {
        reader.abort();
    }
    output.flush().await?;
    result
}

async fn drive<W: AsyncWrite + Unpin>(
    output: &mut W,
    mut state: UiState,
    mut input_open: bool,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    notice_rx: AsyncReceiver<Notice>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("UI loop stopping");
                return Ok(());
            }
            event = app_to_ui_rx.recv() => {
                let Ok(event) = event else {
                    tracing::debug!("[UI] app channel closed");
                    return Ok(());
                };

                match handle_events(event, &mut state) {
                    UiAction::Print(text) => {
                        output.write_all(text.as_bytes()).await?;
                        if input_open {
                            prompt(output, &state).await?;
                        }
                        output.flush().await?;
                    }
                    UiAction::Close => return Ok(()),
                    UiAction::Nothing => {}
                }
            }
            notice = notice_rx.recv(), if input_open => {
                match notice {
                    Ok(Notice::Help) => {
                        output.write_all(format!("{HELP}\n").as_bytes()).await?;
                        prompt(output, &state).await?;
                    }
                    Ok(Notice::Unknown(command)) => {
                        output
                            .write_all(format!("Unknown command ':{command}', try :help\n").as_bytes())
                            .await?;
                        prompt(output, &state).await?;
                    }
                    Ok(Notice::Empty) => prompt(output, &state).await?,
                    Ok(Notice::Quit) => return Ok(()),
                    Ok(Notice::Ended) | Err(_) => input_open = false,
                }
            }
        }
    }
}

/// Read lines until EOF or `:quit`, sending app-bound events straight to the
/// app and everything the terminal has to answer itself to `notice_tx`
async fn forward_input<R>(
    input: R,
    ui_to_app_tx: AsyncSender<AppEvent>,
    notice_tx: AsyncSender<Notice>,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => {
                tracing::debug!("[UI] end of input");
                break;
            }
            Err(e) => {
                tracing::error!("[UI] failed to read input: {}", e);
                break;
            }
        };

        let notice = match parse_line(&line) {
            Input::Event(UiEvent::Close) => {
                send(&ui_to_app_tx, UiEvent::Close).await?;
                notice_tx.send(Notice::Quit).await?;
                return Ok(());
            }
            Input::Event(event) => {
                send(&ui_to_app_tx, event).await?;
                continue;
            }
            Input::Help => Notice::Help,
            Input::Unknown(command) => Notice::Unknown(command),
            Input::Empty => Notice::Empty,
        };
        notice_tx.send(notice).await?;
    }

    notice_tx.send(Notice::Ended).await?;
    send(&ui_to_app_tx, UiEvent::EndOfInput).await?;
    Ok(())
}

async fn send(tx: &AsyncSender<AppEvent>, event: UiEvent) -> anyhow::Result<()> {
    tx.send(AppEvent::UiEvent(event)).await?;
    Ok(())
}

async fn prompt<W: AsyncWrite + Unpin>(output: &mut W, state: &UiState) -> anyhow::Result<()> {
    if let Some(prompt) = &state.prompt {
        output.write_all(prompt.as_bytes()).await?;
        output.flush().await?;
    }
    Ok(())
}
