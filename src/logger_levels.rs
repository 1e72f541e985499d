use std::{fmt, str::FromStr};
use thiserror::Error;

/// Severity of a log record. Ordering follows the numeric severity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    #[default]
    Debug = 10,
    Info = 20,
    Warning = 30,
    Error = 40,
    Critical = 50,
}

/// The only level names recognized when resolving a level from a string.
pub const LOG_LEVELS: [(&str, Level); 5] = [
    ("DEBUG", Level::Debug),
    ("INFO", Level::Info),
    ("WARNING", Level::Warning),
    ("ERROR", Level::Error),
    ("CRITICAL", Level::Critical),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level `{0}`, expected one of DEBUG, INFO, WARNING, ERROR, CRITICAL")]
pub struct ParseLevelError(pub String);

impl Level {
    /// Looks up a level by name, ignoring case.
    pub fn from_name(name: &str) -> Option<Level> {
        let upper = name.to_uppercase();
        LOG_LEVELS
            .iter()
            .find(|(key, _)| *key == upper)
            .map(|(_, level)| *level)
    }

    /// Resolves a level by name, ignoring case. Unknown names resolve to
    /// [`Level::Debug`] instead of failing.
    ///
    /// Use `str::parse::<Level>()` to reject unknown names instead.
    pub fn resolve(name: &str) -> Level {
        Self::from_name(name).unwrap_or(Level::Debug)
    }

    pub fn severity(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::from_name(s).ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_names_resolve() {
        assert_eq!(Level::resolve("DEBUG"), Level::Debug);
        assert_eq!(Level::resolve("INFO"), Level::Info);
        assert_eq!(Level::resolve("WARNING"), Level::Warning);
        assert_eq!(Level::resolve("ERROR"), Level::Error);
        assert_eq!(Level::resolve("CRITICAL"), Level::Critical);
    }

    #[test]
    fn test_resolve_ignores_case() {
        for name in ["info", "INFO", "InFo", "iNFO"] {
            assert_eq!(Level::resolve(name), Level::Info);
        }
    }

    #[test]
    fn test_unknown_names_fall_back_to_debug() {
        for name in ["verbose", "", "9", "warn", " INFO", "fatal"] {
            assert_eq!(Level::resolve(name), Level::Debug, "name: {:?}", name);
        }
    }

    #[test]
    fn test_severities_are_ordered() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warning);
        assert!(Level::Warning < Level::Error);
        assert!(Level::Error < Level::Critical);
        assert_eq!(Level::Warning.severity(), 30);
        assert_eq!(Level::Critical.severity(), 50);
    }

    #[test]
    fn test_strict_parse_rejects_unknown() {
        assert_eq!("error".parse::<Level>(), Ok(Level::Error));
        let err = "verbose".parse::<Level>().unwrap_err();
        assert_eq!(err, ParseLevelError("verbose".to_string()));
        assert!(err.to_string().contains("verbose"));
    }

    #[test]
    fn test_display_uses_upper_case_name() {
        assert_eq!(Level::Warning.to_string(), "WARNING");
        assert_eq!(format!("{}", Level::Debug), "DEBUG");
    }
}
