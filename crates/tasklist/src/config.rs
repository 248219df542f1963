//! Server configuration.
//!
//! Every option can be given as a flag or through its environment variable.

use clap::{Parser, ValueEnum};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Default listening port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default request body limit in bytes.
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// In-memory task list HTTP server.
#[derive(Debug, Clone, Parser)]
#[command(name = "tasklist-server")]
#[command(about = "Serve an in-memory task list over HTTP")]
#[command(version)]
pub struct Config {
    /// Address to bind (or set `TASKLIST_HOST`)
    #[arg(long, env = "TASKLIST_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on (or set `TASKLIST_PORT`)
    #[arg(long, short, env = "TASKLIST_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Start with an empty task list instead of the three seed tasks
    #[arg(long, env = "TASKLIST_NO_SEED")]
    pub no_seed: bool,

    /// Log output format
    #[arg(long, env = "TASKLIST_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Largest accepted request body, in bytes
    #[arg(long, env = "TASKLIST_MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            no_seed: false,
            log_format: LogFormat::Text,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl Config {
    /// Socket address the server binds to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_defaults_match_default_impl() {
        let parsed = Config::try_parse_from(["tasklist-server"]).unwrap();
        let default = Config::default();
        assert_eq!(parsed.host, default.host);
        assert_eq!(parsed.port, 8080);
        assert!(!parsed.no_seed);
        assert_eq!(parsed.log_format, LogFormat::Text);
        assert_eq!(parsed.max_body_bytes, default.max_body_bytes);
    }

    #[test]
    fn test_flags_override() {
        let parsed = Config::try_parse_from([
            "tasklist-server",
            "--host",
            "127.0.0.1",
            "--port",
            "9090",
            "--no-seed",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(
            parsed.bind_addr(),
            "127.0.0.1:9090".parse::<SocketAddr>().unwrap()
        );
        assert!(parsed.no_seed);
        assert_eq!(parsed.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_host_rejected() {
        assert!(Config::try_parse_from(["tasklist-server", "--host", "not an ip"]).is_err());
    }

    #[test]
    fn test_ipv6_bind_addr() {
        let config = Config {
            host: "::1".parse().unwrap(),
            port: 8081,
            ..Config::default()
        };
        assert_eq!(config.bind_addr().to_string(), "[::1]:8081");
    }
}
