use std::io::Write;

use chrono::{DateTime, Local};
use env_logger::{Builder, Env, Target};
use log::Level;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Install the process-wide logger. Must be called once, before anything logs.
/// Lines go to stdout at `info` unless `RUST_LOG` says otherwise.
pub fn init() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stdout)
        .format(|buf, record| {
            writeln!(
                buf,
                "{}",
                format_line(Local::now(), record.target(), record.level(), record.args())
            )
        })
        .init();
}

/// `<timestamp> - <logger> - <LEVEL> - <message>`
fn format_line(
    timestamp: DateTime<Local>,
    logger: &str,
    level: Level,
    message: &std::fmt::Arguments<'_>,
) -> String {
    format!(
        "{} - {} - {} - {}",
        timestamp.format(TIMESTAMP_FORMAT),
        logger,
        level,
        message
    )
}
