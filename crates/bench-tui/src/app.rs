//! Setup screen state: the loaded sections, the focused entry, and the
//! startup gate in front of the state machine.

use crate::gate::InitGate;
use crate::input::{KeyInput, NavCommand};
use crate::navigation::{InputResult, Selection};
use bench_core::Sections;
use std::fmt::Display;

/// Callbacks the screen fires while handling input.
pub trait SetupHooks {
    /// The user applied their selections; `sections` is the final snapshot.
    fn on_confirm(&mut self, sections: &Sections);
    fn on_quit(&mut self);
    /// Something visible changed.
    fn request_render(&mut self);
}

/// How the interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Confirmed,
    Quit,
}

#[derive(Debug, Default)]
pub struct App {
    sections: Sections,
    selection: Selection,
    gate: InitGate<KeyInput>,
    load_error: Option<String>,
    ended: Option<SessionEnd>,
}

impl App {
    /// A screen still waiting for its components.
    pub fn new() -> Self {
        Self::default()
    }

    /// A screen with components already loaded (used by `--dump-ui`).
    pub fn loaded(sections: Sections) -> Self {
        let mut app = Self::new();
        app.sections = sections;
        app.gate.open();
        app
    }

    pub fn sections(&self) -> &Sections {
        &self.sections
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn is_loading(&self) -> bool {
        !self.gate.is_open()
    }

    pub fn queued_inputs(&self) -> usize {
        self.gate.queued()
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn ended(&self) -> Option<SessionEnd> {
        self.ended
    }

    /// Handle one decoded key. Queued while loading; ignored once the
    /// session has ended.
    pub fn handle_key(&mut self, input: KeyInput, hooks: &mut dyn SetupHooks) -> InputResult {
        if self.ended.is_some() {
            return InputResult::Continue;
        }
        match self.gate.submit(input) {
            Some(input) => self.dispatch(input, hooks),
            None => InputResult::Continue,
        }
    }

    /// Install the loaded components (or record the failure), open the gate
    /// and replay any keys that arrived early. Returns `Confirm`/`Quit` when
    /// a replayed key ended the session.
    pub fn finish_loading<E: Display>(
        &mut self,
        result: Result<Sections, E>,
        hooks: &mut dyn SetupHooks,
    ) -> InputResult {
        match result {
            Ok(sections) => self.sections = sections,
            Err(err) => {
                log::warn!("Failed to load components: {}", err);
                self.load_error = Some(err.to_string());
                self.sections = Sections::empty();
            }
        }
        self.selection = Selection::default();
        let replay = self.gate.open();
        hooks.request_render();

        for input in replay {
            if self.ended.is_some() {
                break;
            }
            let result = self.dispatch(input, hooks);
            if result.is_terminal() {
                return result;
            }
        }
        InputResult::Continue
    }

    fn dispatch(&mut self, input: KeyInput, hooks: &mut dyn SetupHooks) -> InputResult {
        let Some(command) = NavCommand::from_input(&input) else {
            return InputResult::Continue;
        };
        let result = self.selection.apply(command, &mut self.sections);
        match result {
            InputResult::Changed => hooks.request_render(),
            InputResult::Confirm => {
                self.ended = Some(SessionEnd::Confirmed);
                hooks.on_confirm(&self.sections);
            }
            InputResult::Quit => {
                self.ended = Some(SessionEnd::Quit);
                hooks.on_quit();
            }
            InputResult::Continue => {}
        }
        result
    }
}
