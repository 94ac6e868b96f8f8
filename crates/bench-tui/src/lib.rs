//! bench-setup TUI.
//!
//! Key decoding, the toggle rule, the selection state machine and the
//! startup gate are plain state and fully testable without a terminal;
//! `session` wires them to crossterm and ratatui.

pub mod app;
pub mod gate;
pub mod input;
pub mod navigation;
pub mod session;
pub mod toggle;
pub mod ui;
pub mod widgets;

pub use app::{App, SessionEnd, SetupHooks};
pub use input::{decode_event, Key, KeyDecoder, KeyInput, NavCommand};
pub use navigation::{InputResult, Selection};
pub use session::SessionOutcome;
pub use toggle::toggle;
pub use ui::dump_screen;
