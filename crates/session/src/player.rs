//! Step-by-step playback of a trace.
//!
//! A [`Player`] owns a trace and a cursor into it. The cursor moves manually
//! with [`Player::next`], [`Player::prev`], [`Player::rewind`] and
//! [`Player::seek`], or automatically: a presenter calls [`Player::tick`]
//! every [`Config::step_delay`] while the player is playing.
//!
//! [`Player::run`] drives auto-play to the end in one call, emitting an
//! [`Event`] per step to an observer that may pause it.
//!
//! # Example
//!
//! ```ignore
//! use algotrace_generators::search::linear;
//! use algotrace_session::Player;
//!
//! let mut player = Player::new(linear::generate(&[15, 7, 22], 22));
//! player.run(());
//! assert!(player.is_at_end());
//! ```

mod action;
mod event;
mod status;

pub use action::Action;
pub use event::Event;
pub use status::Status;

use algotrace_core::{Observer, Trace, TraceStep};

use crate::Config;

/// A numbered description line from the playback log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLine<'a> {
    /// One-based line number, equal to the step index plus one.
    pub number: usize,

    /// The step description.
    pub text: &'a str,
}

/// Cursor-based playback over a [`Trace`].
#[derive(Debug, Clone)]
pub struct Player<S> {
    trace: Trace<S>,
    index: usize,
    playing: bool,
    config: Config,
}

impl<S> Player<S> {
    /// Creates a paused player at the first step, with the default config.
    #[must_use]
    pub fn new(trace: Trace<S>) -> Self {
        Self::with_config(trace, Config::default())
    }

    /// Creates a paused player at the first step.
    #[must_use]
    pub fn with_config(trace: Trace<S>, config: Config) -> Self {
        Self {
            trace,
            index: 0,
            playing: false,
            config,
        }
    }

    /// Replaces the trace, for example after the input changed, and returns
    /// to the first step, paused.
    pub fn load(&mut self, trace: Trace<S>) {
        self.trace = trace;
        self.rewind();
    }

    /// Returns the step under the cursor.
    #[must_use]
    pub fn current(&self) -> &S {
        &self.trace[self.index]
    }

    /// Returns the cursor position.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the trace being played.
    #[must_use]
    pub fn trace(&self) -> &Trace<S> {
        &self.trace
    }

    /// Returns the playback config.
    #[must_use]
    pub fn config(&self) -> Config {
        self.config
    }

    /// Replaces the playback config.
    pub fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    /// Whether the cursor is on the last step.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.index == self.trace.last_index()
    }

    /// Whether auto-play is active.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Advances one step.
    ///
    /// Returns `false`, and stops playing, if the cursor is already on the
    /// last step.
    pub fn next(&mut self) -> bool {
        if self.is_at_end() {
            self.playing = false;
            return false;
        }
        self.index += 1;
        log::trace!("player advanced to step {}", self.index);
        true
    }

    /// Moves back one step. Returns `false` on the first step.
    pub fn prev(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        log::trace!("player moved back to step {}", self.index);
        true
    }

    /// Returns to the first step and pauses.
    pub fn rewind(&mut self) {
        self.index = 0;
        self.playing = false;
    }

    /// Moves the cursor to `index`, clamped to the last step.
    pub fn seek(&mut self, index: usize) {
        self.index = index.min(self.trace.last_index());
    }

    /// Pauses when playing. Otherwise starts playing, restarting from the
    /// first step if the cursor is on the last one.
    pub fn toggle_play(&mut self) {
        if self.playing {
            self.playing = false;
            log::trace!("player paused at step {}", self.index);
            return;
        }
        if self.is_at_end() {
            self.index = 0;
        }
        self.playing = true;
        log::trace!("player playing from step {}", self.index);
    }

    /// Timer callback: advances one step while playing.
    ///
    /// Playing stops once the last step is reached. Returns whether the
    /// cursor moved.
    pub fn tick(&mut self) -> bool {
        if !self.playing {
            return false;
        }
        let moved = self.next();
        if self.is_at_end() {
            self.playing = false;
        }
        moved
    }

    /// Plays to the end, emitting an event for every step reached,
    /// starting with the current one.
    ///
    /// Playback restarts from the first step when the cursor is already on
    /// the last one, whether or not the player was playing. The observer may
    /// return [`Action::Pause`] to stop on the step it just saw.
    pub fn run<Obs>(&mut self, mut observer: Obs) -> Status
    where
        S: Clone,
        Obs: Observer<Event<S>, Action>,
    {
        if self.is_at_end() {
            self.rewind();
        }
        if !self.playing {
            self.toggle_play();
        }

        loop {
            let event = Event {
                index: self.index,
                step: self.current().clone(),
            };

            if let Some(Action::Pause) = observer.observe(&event) {
                self.playing = false;
                return Status::PausedByObserver;
            }

            if !self.tick() {
                self.playing = false;
                return Status::Finished;
            }
        }
    }
}

impl<S: TraceStep> Player<S> {
    /// Returns the description of every step up to and including the
    /// cursor, numbered from 1.
    #[must_use]
    pub fn log(&self) -> Vec<LogLine<'_>> {
        self.trace
            .descriptions()
            .take(self.index + 1)
            .enumerate()
            .map(|(i, text)| LogLine { number: i + 1, text })
            .collect()
    }

    /// Returns the log as newline-separated text, ready to copy.
    #[must_use]
    pub fn log_text(&self) -> String {
        let lines: Vec<&str> = self.log().into_iter().map(|line| line.text).collect();
        lines.join("\n")
    }
}
