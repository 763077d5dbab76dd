//! Runtime configuration, read once at startup and passed into the router.

use std::net::SocketAddr;

use shopfront_observability::{LogFormat, UnknownLogFormat};

pub const BIND_VAR: &str = "SHOPFRONT_BIND";
pub const CORS_VAR: &str = "SHOPFRONT_CORS";
pub const LOG_FORMAT_VAR: &str = "SHOPFRONT_LOG_FORMAT";

const DEFAULT_BIND: &str = "0.0.0.0:8080";

/// Cross-origin policy applied to every route.
///
/// `AllowAny` accepts any origin, method and header. It is a development
/// posture, not a security boundary.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum CorsPolicy {
    #[default]
    AllowAny,
    Disabled,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("SHOPFRONT_BIND=`{value}` is not a socket address: {source}")]
    InvalidBind {
        value: String,
        source: std::net::AddrParseError,
    },
    #[error("SHOPFRONT_CORS=`{0}` is not recognized (expected `any` or `off`)")]
    InvalidCors(String),
    #[error(transparent)]
    LogFormat(#[from] UnknownLogFormat),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub cors: CorsPolicy,
    pub log_format: LogFormat,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            cors: CorsPolicy::AllowAny,
            log_format: LogFormat::Json,
        }
    }
}

impl ApiConfig {
    /// Read `SHOPFRONT_*` variables, falling back to defaults for unset ones.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind = lookup(BIND_VAR).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr = bind
            .parse()
            .map_err(|source| ConfigError::InvalidBind {
                value: bind.clone(),
                source,
            })?;

        let cors = match lookup(CORS_VAR) {
            None => CorsPolicy::default(),
            Some(v) => match v.trim().to_ascii_lowercase().as_str() {
                "any" | "*" => CorsPolicy::AllowAny,
                "off" | "none" => CorsPolicy::Disabled,
                _ => return Err(ConfigError::InvalidCors(v)),
            },
        };

        let log_format = match lookup(LOG_FORMAT_VAR) {
            None => LogFormat::default(),
            Some(v) => v.parse()?,
        };

        Ok(Self {
            bind_addr,
            cors,
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = ApiConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg, ApiConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let cfg = ApiConfig::from_lookup(lookup_from(&[
            (BIND_VAR, "127.0.0.1:9000"),
            (CORS_VAR, "off"),
            (LOG_FORMAT_VAR, "pretty"),
        ]))
        .unwrap();

        assert_eq!(cfg.bind_addr, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(cfg.cors, CorsPolicy::Disabled);
        assert_eq!(cfg.log_format, LogFormat::Pretty);
    }

    #[test]
    fn rejects_bad_values() {
        let err = ApiConfig::from_lookup(lookup_from(&[(BIND_VAR, "nope")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBind { .. }));

        let err = ApiConfig::from_lookup(lookup_from(&[(CORS_VAR, "sometimes")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCors(_)));

        let err = ApiConfig::from_lookup(lookup_from(&[(LOG_FORMAT_VAR, "xml")])).unwrap_err();
        assert!(matches!(err, ConfigError::LogFormat(_)));
    }
}
