//! Command-line and environment configuration.
//!
//! Every setting can be given as a flag or an environment variable (a `.env`
//! file is loaded first by `main`). Flags win over the environment, which
//! wins over the defaults below.

use clap::{Parser, ValueEnum};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=info";
pub const DEFAULT_TITLE: &str = "Phase0 Template";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per event
    Json,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "backend", version)]
#[command(about = "Phase0 template service")]
pub struct Config {
    /// Host name or IP address to bind
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Log filter directives (e.g. "backend=debug,tower_http=info")
    #[arg(long, env = "RUST_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_level: String,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Application title. Only used to label the startup log line
    #[arg(long, env = "APP_TITLE", default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Enable development mode (flagged loudly in the startup log)
    #[arg(long)]
    pub dev_mode: bool,
}

impl Config {
    /// The `"host:port"` bind string. Hostnames are resolved when binding.
    pub fn addr(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}
