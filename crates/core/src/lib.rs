//! Core traits and types for algotrace.
//!
//! This crate defines the shared contract that every trace generator builds
//! on:
//!
//! - [`Element`]: A value paired with an identity that survives reordering
//! - [`TraceStep`]: A self-contained snapshot of algorithm state
//! - [`Trace`]: An ordered, non-empty sequence of steps
//! - [`Recorder`]: The append-only builder generators use to emit a trace
//! - [`Observer`]: Watches playback step by step and may ask it to pause

mod element;
mod observer;
mod trace;

pub use element::Element;
pub use observer::Observer;
pub use trace::{Recorder, Trace, TraceStep};
