pub mod attempt;
pub mod probe;

pub mod prelude {
    pub use super::PingError;
    pub use super::attempt::{PingAttempt, PingOutcome};
}

use std::fmt::Write;

use thiserror::Error;

/// The only runtime failure of a ping: the request did not produce a readable response.
#[derive(Debug, Error)]
pub enum PingError {
    #[error("{}", report(.0))]
    Network(#[from] reqwest::Error),
}

/// Flatten an error and its sources into a single line.
fn report(mut err: &(dyn std::error::Error + 'static)) -> String {
    let mut s = format!("{}", err);
    while let Some(src) = err.source() {
        let _ = write!(s, ": {}", src);
        err = src;
    }
    s
}
