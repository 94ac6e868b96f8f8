//! Selection state machine over the three sections.

use crate::input::NavCommand;
use crate::toggle::toggle;
use bench_core::{Section, Sections};

/// Result of handling input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Nothing changed (rejected move, no-op, queued or ignored key).
    Continue,
    /// Cursor or an entry changed; the screen needs a repaint.
    Changed,
    Confirm,
    Quit,
}

impl InputResult {
    pub fn is_terminal(&self) -> bool {
        matches!(self, InputResult::Confirm | InputResult::Quit)
    }
}

/// Focused position: active section plus entry index within it.
///
/// Whenever the active section is non-empty, `index` points at a
/// non-separator entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub section: Section,
    pub index: usize,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            section: Section::Benches,
            index: 0,
        }
    }
}

impl Selection {
    pub fn new(section: Section, index: usize) -> Self {
        Self { section, index }
    }

    /// Apply one command. Quit and confirm are always honoured; everything
    /// else is a no-op on an empty section.
    pub fn apply(&mut self, command: NavCommand, sections: &mut Sections) -> InputResult {
        let result = match command {
            NavCommand::Quit => return InputResult::Quit,
            NavCommand::Confirm => return InputResult::Confirm,
            _ if sections.len(self.section) == 0 => return InputResult::Continue,
            NavCommand::Up => self.step(sections, Direction::Back),
            NavCommand::Down => self.step(sections, Direction::Forward),
            NavCommand::Left => self.switch(self.section.prev()),
            NavCommand::Right => self.switch(self.section.next()),
            NavCommand::Toggle => self.toggle_focused(sections),
        };
        if result == InputResult::Changed {
            log::debug!("{:?} -> {} #{}", command, self.section, self.index);
        }
        result
    }

    /// Move to the nearest non-separator entry in `direction`; rejected
    /// (cursor unchanged) when none exists.
    fn step(&mut self, sections: &Sections, direction: Direction) -> InputResult {
        let entries = sections.entries(self.section);
        let target = match direction {
            Direction::Back => (0..self.index.min(entries.len()))
                .rev()
                .find(|&i| !entries[i].is_separator),
            Direction::Forward => {
                (self.index + 1..entries.len()).find(|&i| !entries[i].is_separator)
            }
        };
        match target {
            Some(index) => {
                self.index = index;
                InputResult::Changed
            }
            None => InputResult::Continue,
        }
    }

    fn switch(&mut self, target: Option<Section>) -> InputResult {
        match target {
            Some(section) => {
                self.section = section;
                self.index = 0;
                InputResult::Changed
            }
            None => InputResult::Continue,
        }
    }

    fn toggle_focused(&self, sections: &mut Sections) -> InputResult {
        let Some(entry) = sections.get(self.section, self.index) else {
            return InputResult::Continue;
        };
        if entry.is_separator {
            return InputResult::Continue;
        }
        let next = toggle(entry);
        match sections.replace(self.section, self.index, next) {
            Ok(_) => InputResult::Changed,
            Err(err) => {
                log::warn!("Toggle ignored: {}", err);
                InputResult::Continue
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Back,
    Forward,
}
