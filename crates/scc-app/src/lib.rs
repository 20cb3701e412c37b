//! # scc-app — Compass Page Controllers
//!
//! Explicit session objects that own page state and drive the renderers:
//!
//! - [`CompassSession`] — the compass page: slider, category filters,
//!   chart, results, legend and the sovereignty detail panel.
//! - [`CriteriaSession`] — the criteria page: score tables, the edit modal
//!   and the reset flow.
//! - [`AccessGate`] — password check and session flags for full or
//!   anonymized (public) mode.
//! - [`ThemeManager`] — persisted light/dark theme.
//! - [`CompassConfig`] — optional YAML configuration.
//!
//! Sessions are single-threaded and event-driven. Slider input goes through
//! a [`FrameScheduler`] so that a burst of input between two frames renders
//! once; everything else renders immediately.

pub mod access;
pub mod compass;
pub mod config;
pub mod criteria;
pub mod frame;
pub mod theme;

pub use access::{AccessGate, AccessMode};
pub use compass::CompassSession;
pub use config::{CompassConfig, ConfigError};
pub use criteria::{CriteriaSession, EditField};
pub use frame::{FrameScheduler, FrameToken};
pub use theme::{Theme, ThemeManager};
