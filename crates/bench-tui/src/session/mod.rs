//! Interactive session: terminal lifecycle, background loading and the
//! event loop feeding the setup screen.

mod terminal;

pub use terminal::ensure_interactive_terminal;

use crate::app::{App, SessionEnd, SetupHooks};
use crate::input::decode_event;
use crate::ui;
use anyhow::Result;
use bench_core::Sections;
use crossterm::event::{self, Event};
use std::sync::mpsc::{self, TryRecvError};
use std::thread;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// How the user left the setup screen.
#[derive(Debug)]
pub enum SessionOutcome {
    /// Final snapshot to hand to the installer.
    Confirmed(Sections),
    Quit,
}

#[derive(Default)]
struct SessionHooks {
    dirty: bool,
    confirmed: Option<Sections>,
}

impl SetupHooks for SessionHooks {
    fn on_confirm(&mut self, sections: &Sections) {
        self.confirmed = Some(sections.clone());
    }

    fn on_quit(&mut self) {
        log::info!("Setup cancelled by user");
    }

    fn request_render(&mut self) {
        self.dirty = true;
    }
}

/// Run the setup screen until the user confirms or quits.
///
/// `loader` runs on a worker thread while the screen is already accepting
/// keys; keys pressed before it finishes are replayed afterwards. The
/// terminal is restored before this returns, on success or error.
pub fn run<F>(loader: F) -> Result<SessionOutcome>
where
    F: FnOnce() -> Result<Sections> + Send + 'static,
{
    ensure_interactive_terminal()?;

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(loader());
    });

    let mut terminal = terminal::enter()?;
    let mut app = App::new();
    let outcome = event_loop(&mut terminal, &mut app, &rx);
    terminal::restore(&mut terminal)?;
    outcome
}

fn event_loop(
    terminal: &mut terminal::SetupTerminal,
    app: &mut App,
    rx: &mpsc::Receiver<Result<Sections>>,
) -> Result<SessionOutcome> {
    let mut hooks = SessionHooks {
        dirty: true,
        confirmed: None,
    };

    loop {
        if hooks.dirty {
            terminal.draw(|f| ui::draw(f, app))?;
            hooks.dirty = false;
        }

        if app.is_loading() {
            match rx.try_recv() {
                Ok(result) => {
                    app.finish_loading(result.map_err(|e| format!("{:#}", e)), &mut hooks);
                }
                Err(TryRecvError::Disconnected) => {
                    app.finish_loading(
                        Err::<Sections, _>("component loader stopped unexpectedly"),
                        &mut hooks,
                    );
                }
                Err(TryRecvError::Empty) => {}
            }
        }

        if app.ended().is_none() && event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(input) = decode_event(&key) {
                        app.handle_key(input, &mut hooks);
                    }
                }
                Event::Resize(_, _) => hooks.dirty = true,
                _ => {}
            }
        }

        match app.ended() {
            Some(SessionEnd::Confirmed) => {
                let snapshot = hooks
                    .confirmed
                    .take()
                    .unwrap_or_else(|| app.sections().clone());
                return Ok(SessionOutcome::Confirmed(snapshot));
            }
            Some(SessionEnd::Quit) => return Ok(SessionOutcome::Quit),
            None => {}
        }
    }
}
