use clap::Parser;

pub mod config;
use config::{AppConfig, Args};
pub mod logging;
pub mod ping;
use ping::probe::build_client;
pub mod pinger;
use pinger::Pinger;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Bad arguments exit here, before the logger or any request exists.
    let args = Args::parse();

    logging::init();

    let config = AppConfig::from_args(args);
    let client = build_client()?;

    Pinger::new(client, config).run().await;
    Ok(())
}
