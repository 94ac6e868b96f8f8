//! Setup screen rendering: a ratatui frame for the live session and a plain
//! text dump of the same screen.

mod content;
mod dump;
mod render;

pub use content::{LOADING_MESSAGE, NAV_LEGEND, TITLE};
pub use dump::dump_screen;
pub use render::draw;
