//! Session support for consuming algotrace traces.
//!
//! Generators produce a complete [`Trace`] up front. This crate covers what
//! sits between a trace and whoever presents it:
//!
//! - [`player`] steps through a trace, manually or on a timer
//! - [`config`] holds validated playback settings
//! - [`input`] parses user-entered text into generator inputs
//! - [`samples`] provides default datasets and random arrays
//!
//! [`Trace`]: algotrace_core::Trace

pub mod config;
pub mod input;
pub mod player;
pub mod samples;

pub use config::{Config, ConfigError};
pub use input::InputError;
pub use player::Player;
