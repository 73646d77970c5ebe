use std::fmt;

use chrono::{DateTime, Local};

use super::PingError;

/// Number of body characters kept from a response.
pub const BODY_PREVIEW_CHARS: usize = 100;

/// One ping of the target. Lives for a single loop iteration.
#[derive(Debug)]
pub struct PingAttempt {
    pub url: String,
    pub timestamp: DateTime<Local>,
    pub outcome: PingOutcome,
}

#[derive(Debug)]
pub enum PingOutcome {
    /// The server answered, whatever the status code.
    Response { status: u16, body: String },
    Failure(PingError),
}

impl PingOutcome {
    pub fn response(status: u16, body: &str) -> Self {
        PingOutcome::Response {
            status,
            body: preview(body),
        }
    }
}

impl fmt::Display for PingOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PingOutcome::Response { status, body } => write!(f, "{} - {}", status, body),
            PingOutcome::Failure(err) => write!(f, "{}", err),
        }
    }
}

/// First `BODY_PREVIEW_CHARS` characters of `body`, cut on char boundaries.
fn preview(body: &str) -> String {
    body.chars().take(BODY_PREVIEW_CHARS).collect()
}
