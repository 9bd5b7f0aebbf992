//! UI / rendering layer: everything that touches Ratatui widgets.
//!
//! This layer takes the engine's published surface and turns it into cells
//! on the terminal.  Nothing here feeds input back into the engine.

pub mod chrome;
pub mod easing;
pub mod hud;
pub mod layout;
pub mod page;
pub mod popup;
pub mod screen;
pub mod theme;
