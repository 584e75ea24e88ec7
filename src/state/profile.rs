//! Profile screen state driven by the mount-time fetch sequence.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::types::ProfileRecord;

/// Lifecycle phase of the profile screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProfilePhase {
    /// Initial fetch still in flight.
    #[default]
    Loading,
    /// Record fetched and on screen.
    Displaying,
    /// Fetch failed; the message is on screen.
    Error,
    /// Fetch failed and a delayed navigation to login is pending.
    Redirecting,
}

impl ProfilePhase {
    /// True once a failure message replaces the rest of the screen.
    pub fn shows_error(self) -> bool {
        matches!(self, Self::Error | Self::Redirecting)
    }

    /// True once the fetched record is ready to render.
    pub fn shows_record(self) -> bool {
        matches!(self, Self::Displaying)
    }
}

/// View state for the profile screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileState {
    pub phase: ProfilePhase,
    pub record: Option<ProfileRecord>,
    pub error: String,
}

impl ProfileState {
    /// State after a successful fetch.
    pub fn displaying(record: ProfileRecord) -> Self {
        Self {
            phase: ProfilePhase::Displaying,
            record: Some(record),
            error: String::new(),
        }
    }

    /// State after a failure, before any redirect is scheduled.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            phase: ProfilePhase::Error,
            record: None,
            error: message.into(),
        }
    }

    /// Mark that a delayed navigation away from the screen is pending.
    #[must_use]
    pub fn into_redirecting(mut self) -> Self {
        self.phase = ProfilePhase::Redirecting;
        self
    }
}
