use super::content::{column_rows, status_text, NAV_LEGEND, ROW_WIDTH, TITLE};
use crate::app::App;
use bench_core::Section;

/// Plain-text rendering of the current screen.
pub fn dump_screen(app: &App) -> String {
    let mut out = format!("{}\n{}\n", TITLE, NAV_LEGEND);
    if !app.is_loading() {
        for section in Section::ALL {
            let active = app.selection().section == section;
            out.push('\n');
            out.push_str(&format!(
                "{} {}{}\n",
                if active { "▶" } else { "-" },
                section.title(),
                if active { " (active)" } else { "" }
            ));
            let rows = column_rows(app, section, ROW_WIDTH);
            if rows.is_empty() {
                out.push_str("  (none)\n");
            }
            for row in rows {
                out.push_str(row.trim_end());
                out.push('\n');
            }
        }
    }
    out.push('\n');
    out.push_str(&status_text(app));
    out.push('\n');
    out
}
