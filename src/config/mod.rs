pub mod args;
pub mod app_config;

pub use app_config::AppConfig;
pub use args::Args;
