//! Interactive terminal interface

mod app;
mod rendering;

pub use app::{App, Control, Message, MessageStyle, control_for, run_tui};
pub use rendering::{tile_style, ui};
