use std::time::Duration;

use super::args::{Args, DEFAULT_URL};

/// The resolved configuration of the keep-alive service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// The URL that is pinged every cycle.
    pub url: String,

    /// Minutes to sleep after each ping.
    pub interval_minutes: u64,
}

impl AppConfig {
    /// Resolve the parsed command line into the effective configuration,
    /// substituting the default URL when none was given.
    pub fn from_args(args: Args) -> Self {
        let url = match args.url {
            Some(url) => url,
            None => {
                log::info!("No URL provided, using default: {}", DEFAULT_URL);
                DEFAULT_URL.to_string()
            }
        };

        AppConfig {
            url,
            interval_minutes: args.interval_minutes,
        }
    }

    /// The sleep between two pings.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_minutes.saturating_mul(60))
    }
}
