use crate::app::App;
use crate::widgets::{changes_line, format_row, separator_rule, NAME_WIDTH};
use bench_core::Section;

pub const TITLE: &str = "WorkBenches Configuration Manager";
pub const NAV_LEGEND: &str =
    "Navigation: ↑/↓ Move  ←/→ Switch Section  Space Toggle  Enter Apply Changes  Q Quit";
pub const LOADING_MESSAGE: &str = "Loading components...";

/// Marker, checkbox, status and name: `▶ [✓] ✓ ` plus the name.
pub(super) const ROW_WIDTH: usize = 8 + NAME_WIDTH;

/// Text rows of one column, separators drawn as a rule of `rule_width`.
pub(super) fn column_rows(app: &App, section: Section, rule_width: usize) -> Vec<String> {
    let selection = app.selection();
    app.sections()
        .entries(section)
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            if entry.is_separator {
                separator_rule(rule_width)
            } else {
                let focused = selection.section == section && selection.index == index;
                format_row(entry, focused)
            }
        })
        .collect()
}

pub(super) fn status_text(app: &App) -> String {
    if app.is_loading() {
        return LOADING_MESSAGE.to_string();
    }
    if let Some(err) = app.load_error() {
        return format!("Failed to load components: {}  (Q to quit)", err);
    }
    changes_line(&app.sections().pending_changes())
}
