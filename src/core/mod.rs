//! Core algorithms – the elastic overscroll engine.
//!
//! Nothing in this module depends on any TUI or rendering crate, and nothing
//! reads a clock: hosts pass timestamps in and query viewport metrics through
//! the [`boundary::Viewport`] trait, so every behaviour is testable with a
//! fake viewport and synthetic time.

pub mod animator;
pub mod boundary;
pub mod config;
pub mod engine;
pub mod policy;
pub mod sampler;
pub mod surface;
pub mod throttle;
pub mod timer;

pub use boundary::{Viewport, ViewportMetrics};
pub use config::{ConfigError, Profile, PullConfig};
pub use engine::OverscrollEngine;
pub use surface::Transition;
