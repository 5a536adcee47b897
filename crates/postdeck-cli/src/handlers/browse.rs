//! Interactive browse driver.
//!
//! Two threads, the same shape as the one-shot handlers writ live: this
//! driver owns [`BoardState`] and the async runtime; a renderer thread
//! owns the terminal. Key presses arrive as [`UiSignal`]s, completed
//! requests as [`Outcome`]s, both merged into one event stream so all
//! state transitions happen in one place. Fetches run as spawned tasks,
//! keeping the surface responsive while a call is pending; generation
//! tags let the board discard whatever a superseded fetch returns.

use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use postdeck_app::{
    Action, BoardState, BufferDiagnostics, Effect, Outcome, action_for, run_effect,
};
use postdeck_client::PostsClient;
use postdeck_types::PostDraft;

use crate::presentation::presenters;
use crate::presentation::tui::{TuiEvent, TuiRenderer, UiSignal};

/// One merged event stream for the driver loop.
enum DriverEvent {
    Ui(UiSignal),
    Net(Outcome),
}

pub fn handle(client: PostsClient) -> Result<()> {
    let (driver_tx, driver_rx) = channel::<DriverEvent>();
    let (ui_tx, ui_rx) = channel::<UiSignal>();
    let (tui_tx, tui_rx) = channel::<TuiEvent>();

    // Fold renderer signals into the driver's event stream.
    {
        let driver_tx = driver_tx.clone();
        thread::spawn(move || {
            for signal in ui_rx {
                if driver_tx.send(DriverEvent::Ui(signal)).is_err() {
                    break;
                }
            }
        });
    }

    let renderer = TuiRenderer::new(ui_tx);
    let renderer_handle = thread::spawn(move || renderer.run(tui_rx));

    let diag = BufferDiagnostics::new();
    let result = run_driver(&client, driver_tx, driver_rx, &tui_tx, &diag);

    // Dropping our sender lets the renderer notice and shut down even if
    // the driver stopped on its own.
    drop(tui_tx);
    let renderer_result = match renderer_handle.join() {
        Ok(res) => res,
        Err(_) => {
            eprintln!("renderer thread panicked");
            Ok(())
        }
    };

    // The diagnostic channel drains to stderr once the terminal is back.
    for entry in diag.entries() {
        eprintln!("{}", entry.dimmed());
    }

    result.and(renderer_result)
}

fn run_driver(
    client: &PostsClient,
    driver_tx: Sender<DriverEvent>,
    driver_rx: Receiver<DriverEvent>,
    tui_tx: &Sender<TuiEvent>,
    diag: &BufferDiagnostics,
) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;

    let mut board = BoardState::new();

    let effects = board.initial_effects();
    issue(&runtime, client, &driver_tx, effects);
    let _ = push_frame(tui_tx, &board, client.base_url());

    for event in driver_rx.iter() {
        let effects = match event {
            DriverEvent::Ui(UiSignal::Quit) => break,

            DriverEvent::Ui(signal) => board.dispatch(action_from(signal), diag),

            DriverEvent::Net(outcome) => {
                let created_ok = outcome.is_created_ok();
                let effects = board.absorb(outcome, diag);
                if created_ok && tui_tx.send(TuiEvent::ResetCreateForm).is_err() {
                    break;
                }
                effects
            }
        };

        issue(&runtime, client, &driver_tx, effects);
        if push_frame(tui_tx, &board, client.base_url()).is_err() {
            // Renderer is gone; nothing left to drive.
            break;
        }
    }

    Ok(())
}

fn action_from(signal: UiSignal) -> Action {
    match signal {
        UiSignal::Control(control) => action_for(control),
        UiSignal::SubmitEdit { title, content } => Action::SubmitEdit { title, content },
        UiSignal::SubmitCreate {
            title,
            author,
            content,
        } => Action::SubmitCreate(PostDraft::new(title, author, content)),
        // Quit is intercepted by the driver loop.
        UiSignal::Quit => Action::CancelEdit,
    }
}

fn issue(
    runtime: &tokio::runtime::Runtime,
    client: &PostsClient,
    driver_tx: &Sender<DriverEvent>,
    effects: Vec<Effect>,
) {
    for effect in effects {
        let client = client.clone();
        let driver_tx = driver_tx.clone();
        runtime.spawn(async move {
            let outcome = run_effect(&client, effect).await;
            // The driver may already be gone on shutdown.
            let _ = driver_tx.send(DriverEvent::Net(outcome));
        });
    }
}

fn push_frame(
    tui_tx: &Sender<TuiEvent>,
    board: &BoardState,
    api_url: &str,
) -> std::result::Result<(), std::sync::mpsc::SendError<TuiEvent>> {
    let frame = presenters::present_board(board, api_url);
    tui_tx.send(TuiEvent::Update(Box::new(frame)))
}
