//! Configuration Module
//!
//! Handles loading the cache TTL and logging options from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{Error, Result};

// == Log Output ==
/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogOutput {
    /// Standard output
    Terminal,
    /// Append to the file at this path
    File(PathBuf),
}

impl FromStr for LogOutput {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "" => Err(Error::InvalidConfig("log output must not be empty".to_string())),
            "terminal" => Ok(LogOutput::Terminal),
            path => Ok(LogOutput::File(PathBuf::from(path))),
        }
    }
}

// == Log Scope ==
/// Most verbose level that still gets logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogScope {
    Error,
    Warning,
    Info,
    Debug,
}

impl LogScope {
    /// Filter directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogScope::Error => "error",
            LogScope::Warning => "warn",
            LogScope::Info => "info",
            LogScope::Debug => "debug",
        }
    }
}

impl FromStr for LogScope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(LogScope::Error),
            "warning" | "warn" => Ok(LogScope::Warning),
            "info" => Ok(LogScope::Info),
            "debug" => Ok(LogScope::Debug),
            other => Err(Error::InvalidConfig(format!("unknown log scope: {}", other))),
        }
    }
}

// == TTL Parsing ==
/// Converts a TTL given in (possibly fractional) seconds into a `Duration`.
///
/// Negative, NaN and infinite values are rejected rather than coerced.
pub fn ttl_from_secs_f64(secs: f64) -> Result<Duration> {
    if !secs.is_finite() || secs < 0.0 {
        return Err(Error::InvalidConfig(format!(
            "ttl must be a finite, non-negative number of seconds, got {}",
            secs
        )));
    }
    Duration::try_from_secs_f64(secs)
        .map_err(|e| Error::InvalidConfig(format!("ttl out of range: {}", e)))
}

/// Library configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Delay before the process cache clears itself, zero = never
    pub cache_ttl: Duration,
    /// Log destination
    pub log_output: LogOutput,
    /// Log verbosity
    pub log_scope: LogScope,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL` - Cache TTL in seconds, fractions allowed (default: 0)
    /// - `LOG_OUTPUT` - `terminal` or a file path (default: terminal)
    /// - `LOG_SCOPE` - `error`, `warning`, `info` or `debug` (default: info)
    ///
    /// Unlike unset variables, malformed ones are reported as `InvalidConfig`.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let cache_ttl = match env::var("CACHE_TTL") {
            Ok(raw) => {
                let secs: f64 = raw.trim().parse().map_err(|_| {
                    Error::InvalidConfig(format!("CACHE_TTL is not a number: {}", raw))
                })?;
                ttl_from_secs_f64(secs)?
            }
            Err(_) => defaults.cache_ttl,
        };

        let log_output = match env::var("LOG_OUTPUT") {
            Ok(raw) => raw.parse()?,
            Err(_) => defaults.log_output,
        };

        let log_scope = match env::var("LOG_SCOPE") {
            Ok(raw) => raw.parse()?,
            Err(_) => defaults.log_scope,
        };

        Ok(Self {
            cache_ttl,
            log_output,
            log_scope,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl: Duration::ZERO,
            log_output: LogOutput::Terminal,
            log_scope: LogScope::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.cache_ttl, Duration::ZERO);
        assert_eq!(config.log_output, LogOutput::Terminal);
        assert_eq!(config.log_scope, LogScope::Info);
    }

    #[test]
    fn test_config_from_env() {
        // Single test touching the process environment to avoid races
        env::remove_var("CACHE_TTL");
        env::remove_var("LOG_OUTPUT");
        env::remove_var("LOG_SCOPE");

        let config = Config::from_env().unwrap();
        assert_eq!(config.cache_ttl, Duration::ZERO);
        assert_eq!(config.log_output, LogOutput::Terminal);
        assert_eq!(config.log_scope, LogScope::Info);

        env::set_var("CACHE_TTL", "1.5");
        env::set_var("LOG_OUTPUT", "/tmp/extension.log");
        env::set_var("LOG_SCOPE", "warning");
        let config = Config::from_env().unwrap();
        assert_eq!(config.cache_ttl, Duration::from_millis(1500));
        assert_eq!(
            config.log_output,
            LogOutput::File(PathBuf::from("/tmp/extension.log"))
        );
        assert_eq!(config.log_scope, LogScope::Warning);

        env::set_var("CACHE_TTL", "-3");
        assert!(matches!(Config::from_env(), Err(Error::InvalidConfig(_))));

        env::set_var("CACHE_TTL", "soon");
        assert!(matches!(Config::from_env(), Err(Error::InvalidConfig(_))));

        env::remove_var("CACHE_TTL");
        env::remove_var("LOG_OUTPUT");
        env::remove_var("LOG_SCOPE");
    }

    #[test]
    fn test_ttl_from_secs_rejects_negative() {
        assert!(matches!(
            ttl_from_secs_f64(-0.5),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            ttl_from_secs_f64(f64::NAN),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            ttl_from_secs_f64(f64::INFINITY),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_ttl_from_secs_accepts_zero_and_fractions() {
        assert_eq!(ttl_from_secs_f64(0.0).unwrap(), Duration::ZERO);
        assert_eq!(ttl_from_secs_f64(0.1).unwrap(), Duration::from_millis(100));
    }

    #[test]
    fn test_log_scope_parsing() {
        assert_eq!("ERROR".parse::<LogScope>().unwrap(), LogScope::Error);
        assert_eq!("warn".parse::<LogScope>().unwrap(), LogScope::Warning);
        assert_eq!("debug".parse::<LogScope>().unwrap().as_directive(), "debug");
        assert!("verbose".parse::<LogScope>().is_err());
    }

    #[test]
    fn test_log_output_parsing() {
        assert_eq!("terminal".parse::<LogOutput>().unwrap(), LogOutput::Terminal);
        assert_eq!(
            "app.log".parse::<LogOutput>().unwrap(),
            LogOutput::File(PathBuf::from("app.log"))
        );
        assert!("  ".parse::<LogOutput>().is_err());
    }
}
