//! Application orchestration: state management, event loop plumbing, and
//! input handling for the terminal host.

pub mod document;
pub mod event;
pub mod handler;
pub mod scroll;
pub mod settings;
pub mod state;
