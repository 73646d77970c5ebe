use clap::Parser;

/// Fallback target when no URL is given on the command line.
pub const DEFAULT_URL: &str = "https://relay-server-nzhu.onrender.com/health";

/// Minutes between pings when no interval is given.
pub const DEFAULT_INTERVAL_MINUTES: u64 = 4;

/// Command line of the keep-alive service.
/// Both arguments are positional: `keep-alive [url] [interval_minutes]`.
#[derive(Debug, Parser)]
#[command(name = "keep-alive", version, about = "Ping a URL periodically to keep a service awake")]
pub struct Args {
    /// The URL to ping. Falls back to the built-in default when omitted.
    pub url: Option<String>,

    /// How often to ping, in whole minutes.
    #[arg(
        default_value_t = DEFAULT_INTERVAL_MINUTES,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub interval_minutes: u64,
}
