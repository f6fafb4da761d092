//! Logging setup using `tracing` + `tracing-subscriber`.
//!
//! Priority for determining the log level:
//! 1. `level` argument (if provided)
//! 2. `U_GANTT_LOG` environment variable (e.g. "info", "debug")
//! 3. default to `info`

use tracing::Level;
use tracing_subscriber::fmt;

use crate::error::{Result, ScheduleError};

/// Environment variable consulted when no level is passed.
pub const LOG_ENV: &str = "U_GANTT_LOG";

/// Installs a global fmt subscriber.
///
/// Returns `ScheduleError::Logging` if a global subscriber is already set
/// or if `level` is not a recognised level name.
pub fn init_logging(level: Option<&str>) -> Result<()> {
    let level = resolve_level(level, std::env::var(LOG_ENV).ok().as_deref())?;

    fmt()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .try_init()
        .map_err(|e| ScheduleError::Logging(e.to_string()))
}

fn resolve_level(explicit: Option<&str>, env: Option<&str>) -> Result<Level> {
    if let Some(s) = explicit {
        return parse_level_str(s)
            .ok_or_else(|| ScheduleError::Logging(format!("unknown log level '{s}'")));
    }
    Ok(env.and_then(parse_level_str).unwrap_or(Level::INFO))
}

fn parse_level_str(s: &str) -> Option<Level> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" | "warning" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level_str("DEBUG"), Some(Level::DEBUG));
        assert_eq!(parse_level_str(" warning "), Some(Level::WARN));
        assert_eq!(parse_level_str("loud"), None);
    }

    #[test]
    fn test_explicit_level_wins() {
        let level = resolve_level(Some("trace"), Some("error")).unwrap();
        assert_eq!(level, Level::TRACE);
    }

    #[test]
    fn test_env_then_default() {
        assert_eq!(resolve_level(None, Some("debug")).unwrap(), Level::DEBUG);
        assert_eq!(resolve_level(None, Some("bogus")).unwrap(), Level::INFO);
        assert_eq!(resolve_level(None, None).unwrap(), Level::INFO);
    }

    #[test]
    fn test_unknown_explicit_level() {
        let err = resolve_level(Some("loud"), None).unwrap_err();
        assert!(matches!(err, ScheduleError::Logging(_)));
    }
}
