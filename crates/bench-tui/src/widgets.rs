//! Small, reusable row-formatting helpers shared by the live screen and the
//! text dump.

use bench_core::{ComponentAction, ComponentStatus, Entry, PendingChanges};
use ratatui::style::Color;

/// Width reserved for the entry name in a row.
pub const NAME_WIDTH: usize = 16;

/// Checkbox state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckboxState {
    Unchecked,
    Checked,
    /// Checked, but marked for removal.
    Uninstall,
}

impl CheckboxState {
    pub fn of(entry: &Entry) -> Self {
        match (entry.checked, entry.action) {
            (false, _) => CheckboxState::Unchecked,
            (true, ComponentAction::Uninstall) => CheckboxState::Uninstall,
            (true, _) => CheckboxState::Checked,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            CheckboxState::Unchecked => "[ ]",
            CheckboxState::Checked => "[✓]",
            CheckboxState::Uninstall => "[X]",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            CheckboxState::Unchecked => Color::White,
            CheckboxState::Checked => Color::Green,
            CheckboxState::Uninstall => Color::Red,
        }
    }
}

pub fn status_symbol(status: ComponentStatus) -> &'static str {
    match status {
        ComponentStatus::Installed => "✓",
        ComponentStatus::NeedsCredentials => "⚠",
        ComponentStatus::NotInstalled | ComponentStatus::Unknown => "✗",
    }
}

pub fn status_color(status: ComponentStatus) -> Color {
    match status {
        ComponentStatus::Installed => Color::Green,
        ComponentStatus::NeedsCredentials => Color::Yellow,
        ComponentStatus::NotInstalled | ComponentStatus::Unknown => Color::Red,
    }
}

/// Truncate or pad `name` to exactly `width` characters.
pub fn fit_name(name: &str, width: usize) -> String {
    let truncated: String = name.chars().take(width).collect();
    format!("{:<width$}", truncated, width = width)
}

pub fn selection_marker(focused: bool) -> &'static str {
    if focused {
        "▶ "
    } else {
        "  "
    }
}

/// Plain-text row: `▶ [✓] ✓ Name`.
pub fn format_row(entry: &Entry, focused: bool) -> String {
    format!(
        "{}{} {} {}",
        selection_marker(focused),
        CheckboxState::of(entry).symbol(),
        status_symbol(entry.status),
        fit_name(&entry.name, NAME_WIDTH)
    )
}

pub fn separator_rule(width: usize) -> String {
    "─".repeat(width)
}

/// `Changes selected: N  (+I install)  (-U uninstall)`.
pub fn changes_line(changes: &PendingChanges) -> String {
    let mut line = format!("Changes selected: {}", changes.selected);
    if changes.installs > 0 {
        line.push_str(&format!("  (+{} install)", changes.installs));
    }
    if changes.uninstalls > 0 {
        line.push_str(&format!("  (-{} uninstall)", changes.uninstalls));
    }
    line
}
