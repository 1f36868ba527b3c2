//! Session logging settings
//!
//! Logs go to stderr so they never interleave with session output. The default level is `warn`
//! so an interactive session stays quiet unless something fails.

use clap::{Args, ValueEnum};

/// Crates whose logs are capped at `warn` whatever the requested level.
const QUIET_TARGETS: [&str; 3] = ["hyper", "hyper_util", "reqwest"];

/// How log lines are rendered on stderr.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// One short line per event
    Compact,

    /// One JSON object per event
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Filter directive applied to pawmate's own events, e.g. `debug` or `pawmate_app=info`
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Rendering of log lines on stderr
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl LoggingConfig {
    /// The requested level followed by a `warn` cap on the HTTP stack.
    pub fn filter_directives(&self) -> String {
        QUIET_TARGETS
            .iter()
            .fold(self.log_level.clone(), |directives, target| {
                format!("{directives},{target}=warn")
            })
    }
}
