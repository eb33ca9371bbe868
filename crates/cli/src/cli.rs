//! CLI argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// gps-exporter - NMEA GPS receiver metrics exporter
#[derive(Parser, Debug)]
#[command(
    name = "gps-exporter",
    author,
    version,
    about = "Prometheus exporter for NMEA GPS receivers",
    long_about = "Reads NMEA 0183 sentences from a serial device, file or pipe and\n\
                  exposes the decoded GPS state (position, speed, altitude, satellite\n\
                  count, dilution of precision) as gauges on an HTTP endpoint."
)]
pub struct Cli {
    /// Device or file to read sentences from (can be /dev/stdin)
    #[arg(
        short,
        long,
        default_value = "/dev/ttyUSB0",
        env = "GPS_EXPORTER_INPUT"
    )]
    pub input: PathBuf,

    /// Address on which to expose metrics (a bare `:port` listens on all interfaces)
    #[arg(
        long,
        default_value = "0.0.0.0:9156",
        env = "GPS_EXPORTER_WEB_LISTEN_ADDRESS",
        value_parser = parse_listen_address
    )]
    pub web_listen_address: String,

    /// Path under which to expose metrics
    #[arg(
        long,
        default_value = "/metrics",
        env = "GPS_EXPORTER_WEB_TELEMETRY_PATH",
        value_parser = parse_telemetry_path
    )]
    pub web_telemetry_path: String,

    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, env = "GPS_EXPORTER_VERBOSE")]
    pub verbose: u8,

    /// Suppress all output except warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format
    #[arg(
        long,
        value_enum,
        default_value = "pretty",
        env = "GPS_EXPORTER_LOG_FORMAT"
    )]
    pub log_format: LogFormat,
}

/// Log output format
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum LogFormat {
    /// JSON structured logging
    Json,
    /// Human-readable pretty format
    #[default]
    Pretty,
    /// Compact single-line format
    Compact,
}

impl From<LogFormat> for observability::LogFormat {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Json => Self::Json,
            LogFormat::Pretty => Self::Pretty,
            LogFormat::Compact => Self::Compact,
        }
    }
}

/// Normalize the listen address, accepting the bare `:port` shorthand
///
/// Hostname resolution is left to the listener bind, which fails fast at
/// startup on anything unresolvable.
fn parse_listen_address(raw: &str) -> Result<String, String> {
    match raw.strip_prefix(':') {
        Some("") => Err(format!("invalid listen address {raw:?}: missing port")),
        Some(port) => Ok(format!("0.0.0.0:{port}")),
        None if raw.is_empty() => Err("listen address is empty".to_string()),
        None => Ok(raw.to_string()),
    }
}

/// Require an absolute URL path for the telemetry endpoint
fn parse_telemetry_path(raw: &str) -> Result<String, String> {
    if raw.starts_with('/') {
        Ok(raw.to_string())
    } else {
        Err(format!("telemetry path must start with '/', got {raw:?}"))
    }
}
