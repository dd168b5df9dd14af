use clap::Parser;

use crate::telemetry::LogFormat;

/// Startup configuration for the starchart server.
#[derive(Debug, Clone, Parser)]
#[command(name = "starchart-server", about = "Starchart HTTP API server")]
pub struct ServerConfig {
    /// Interface to bind
    #[arg(long, env = "STARCHART_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "STARCHART_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Log output format
    #[arg(
        long,
        env = "STARCHART_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Text
    )]
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ServerConfig::try_parse_from(["starchart-server"]).unwrap();
        assert_eq!(config.addr(), "0.0.0.0:3000");
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "starchart-server",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(config.addr(), "127.0.0.1:8080");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn rejects_unknown_log_format() {
        let result =
            ServerConfig::try_parse_from(["starchart-server", "--log-format", "xml"]);
        assert!(result.is_err());
    }
}
