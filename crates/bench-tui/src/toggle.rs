//! Checkbox toggle rule.
//!
//! `checked` on an installed entry means "keep it". Toggling such an entry
//! flips between keep and uninstall without ever unchecking it; toggling a
//! missing entry flips between install and nothing.

use bench_core::{ComponentAction, Entry};

/// Next state for `entry` after one toggle. Separators come back unchanged.
pub fn toggle(entry: &Entry) -> Entry {
    let mut next = entry.clone();
    if entry.is_separator {
        return next;
    }
    let installed = entry.is_installed();

    match (entry.checked, installed) {
        (false, true) => {
            next.checked = true;
            next.action = ComponentAction::None;
        }
        (false, false) => {
            next.checked = true;
            next.action = ComponentAction::Install;
        }
        (true, true) => {
            next.action = if entry.action == ComponentAction::Uninstall {
                ComponentAction::None
            } else {
                ComponentAction::Uninstall
            };
        }
        (true, false) => {
            next.checked = false;
            next.action = ComponentAction::None;
        }
    }
    next
}
