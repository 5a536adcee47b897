mod app;
mod event;
mod ui;

use std::io;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{Event, poll, read},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use app::TuiState;
pub use event::{TuiEvent, UiSignal};

/// Owns the terminal. Draws frames pushed by the driver and turns key
/// presses into [`UiSignal`]s; domain state stays on the driver side.
pub struct TuiRenderer {
    signals: Sender<UiSignal>,
}

impl TuiRenderer {
    pub fn new(signals: Sender<UiSignal>) -> Self {
        Self { signals }
    }

    pub fn run(self, rx: Receiver<TuiEvent>) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let mut state = TuiState::new();
        let mut should_quit = false;
        let tick_rate = Duration::from_millis(250);

        while !should_quit {
            terminal.draw(|f| {
                ui::draw(f, &mut state);
            })?;

            if poll(tick_rate)? {
                if let Event::Key(key) = read()? {
                    if let Some(signal) = state.handle_key(key) {
                        let quitting = matches!(signal, UiSignal::Quit);
                        if self.signals.send(signal).is_err() || quitting {
                            should_quit = true;
                        }
                    }
                }
            }

            loop {
                match rx.try_recv() {
                    Ok(TuiEvent::Update(board)) => state.apply_update(*board),
                    Ok(TuiEvent::ResetCreateForm) => state.reset_create_form(),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        should_quit = true;
                        break;
                    }
                }
            }
        }

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }
}
