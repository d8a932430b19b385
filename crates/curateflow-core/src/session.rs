//! Caller-side request state: single-flight guard and stale reply detection.
//!
//! The client holds no state between calls. A front-end keeps one
//! [`CurationSession`], asks it for a [`RequestTicket`] before calling the
//! client and hands the outcome back with that ticket. Replies for a ticket
//! that is no longer the latest are dropped.

use tracing::warn;

use crate::{
    error::GenerationFailed,
    types::{CurateOptions, PlaylistResponse},
};

/// Example prompts offered before the first request
pub const SUGGESTIONS: [&str; 4] = [
    "Intro to React",
    "30m HIIT Workout",
    "History of Rome",
    "Jazz for Reading",
];

/// Snapshot of one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    pub generation: u64,
    pub prompt: String,
    pub options: CurateOptions,
}

#[derive(Debug, Default)]
pub struct CurationSession {
    options: CurateOptions,
    in_flight: bool,
    generation: u64,
    playlist: Option<PlaylistResponse>,
    error: Option<String>,
}

impl CurationSession {
    pub fn new(options: CurateOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &CurateOptions {
        &self.options
    }

    /// Replace the options; refused while a request is outstanding
    pub fn set_options(&mut self, options: CurateOptions) -> bool {
        if self.in_flight {
            return false;
        }
        self.options = options;
        true
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn playlist(&self) -> Option<&PlaylistResponse> {
        self.playlist.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start a request.
    ///
    /// Returns `None` for a blank prompt or while another request is in
    /// flight. Otherwise the previous result and error are cleared.
    pub fn begin(&mut self, prompt: &str) -> Option<RequestTicket> {
        let prompt = prompt.trim();
        if prompt.is_empty() || self.in_flight {
            return None;
        }

        self.generation += 1;
        self.in_flight = true;
        self.playlist = None;
        self.error = None;

        Some(RequestTicket {
            generation: self.generation,
            prompt: prompt.to_string(),
            options: self.options,
        })
    }

    /// Apply the outcome of `ticket`. Returns `false` if it was stale.
    pub fn finish(
        &mut self,
        ticket: &RequestTicket,
        outcome: Result<PlaylistResponse, GenerationFailed>,
    ) -> bool {
        if ticket.generation != self.generation {
            warn!(
                ticket = ticket.generation,
                latest = self.generation,
                "Dropping stale playlist reply"
            );
            return false;
        }

        self.in_flight = false;
        match outcome {
            Ok(playlist) => self.playlist = Some(playlist),
            Err(e) => self.error = Some(e.to_string()),
        }
        true
    }

    /// Give up on the outstanding request so a new one can start.
    /// Its reply, if it still arrives, is treated as stale.
    pub fn abandon(&mut self) {
        if self.in_flight {
            self.generation += 1;
            self.in_flight = false;
        }
    }
}
