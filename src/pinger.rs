use std::time::Duration;

use chrono::{DateTime, Local, TimeDelta};
use log::Level;
use reqwest::Client;
use tokio::time::sleep;

use crate::config::AppConfig;
use crate::ping::prelude::*;
use crate::ping::probe::ping_url;

/// Keeps a service awake by pinging it forever, one request at a time.
pub struct Pinger {
    client: Client,
    config: AppConfig,
}

impl Pinger {
    pub fn new(client: Client, config: AppConfig) -> Self {
        Pinger { client, config }
    }

    /// Ping, log, sleep, repeat. Only returns if the process is killed.
    pub async fn run(&self) {
        self.run_with(|_| {}).await
    }

    /// Like `run`, handing every finished attempt to `on_attempt` before sleeping.
    pub async fn run_with<F>(&self, mut on_attempt: F)
    where
        F: FnMut(PingAttempt),
    {
        log::info!("Starting keep-alive service for {}", self.config.url);
        log::info!("Will ping every {} minutes", self.config.interval_minutes);

        let interval = self.config.interval();
        loop {
            on_attempt(self.cycle().await);
            sleep(interval).await;
        }
    }

    /// One iteration without the sleep. The attempt is handed back for inspection only.
    pub async fn cycle(&self) -> PingAttempt {
        log::info!("Pinging {}", self.config.url);
        let attempt = ping_url(&self.client, &self.config.url).await;

        let (level, line) = outcome_line(&attempt);
        log::log!(level, "{}", line);
        log::debug!(
            "Ping took {} ms",
            (Local::now() - attempt.timestamp).num_milliseconds()
        );

        // Taken after the request; the sleep starts right after this.
        match next_ping_at(Local::now(), self.config.interval()) {
            Some(next) => log::info!("Next ping at {}", next.format("%H:%M:%S")),
            None => log::info!("Next ping in {} minutes", self.config.interval_minutes),
        }

        attempt
    }
}

/// Level and message logged for the outcome of `attempt`.
pub fn outcome_line(attempt: &PingAttempt) -> (Level, String) {
    match &attempt.outcome {
        PingOutcome::Response { .. } => (Level::Info, format!("Response: {}", attempt.outcome)),
        PingOutcome::Failure(e) => (
            Level::Error,
            format!("Failed to ping {}: {}", attempt.url, e),
        ),
    }
}

/// Wall-clock time of the next ping, or `None` if it is not representable.
pub fn next_ping_at(now: DateTime<Local>, interval: Duration) -> Option<DateTime<Local>> {
    let delta = TimeDelta::from_std(interval).ok()?;
    now.checked_add_signed(delta)
}
