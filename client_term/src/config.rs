use std::env;
use std::path::PathBuf;

use crate::banner::Pacing;

// Runtime settings (not gameplay tuning).

pub const LOG_FILE_VAR: &str = "PONG_LOG_FILE";
pub const LOG_FORMAT_VAR: &str = "PONG_LOG_FORMAT";
pub const SKIP_INTRO_VAR: &str = "PONG_SKIP_INTRO";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Stdout is the game display, so logs only go to a file
    pub log_file: Option<PathBuf>,
    pub log_format: LogFormat,
    pub skip_intro: bool,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_file = lookup(LOG_FILE_VAR)
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);
        let log_format = match lookup(LOG_FORMAT_VAR).as_deref().map(str::trim) {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Compact,
        };
        let skip_intro = lookup(SKIP_INTRO_VAR).is_some_and(|raw| is_truthy(&raw));

        Self {
            log_file,
            log_format,
            skip_intro,
        }
    }

    pub fn pacing(&self) -> Pacing {
        if self.skip_intro {
            Pacing::Instant
        } else {
            Pacing::RealTime
        }
    }
}

fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Settings {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let s = settings(&[]);
        assert_eq!(s.log_file, None);
        assert_eq!(s.log_format, LogFormat::Compact);
        assert!(!s.skip_intro);
        assert_eq!(s.pacing(), Pacing::RealTime);
    }

    #[test]
    fn reads_all_variables() {
        let s = settings(&[
            (LOG_FILE_VAR, "/tmp/pong.log"),
            (LOG_FORMAT_VAR, "json"),
            (SKIP_INTRO_VAR, " YES "),
        ]);
        assert_eq!(s.log_file, Some(PathBuf::from("/tmp/pong.log")));
        assert_eq!(s.log_format, LogFormat::Json);
        assert!(s.skip_intro);
        assert_eq!(s.pacing(), Pacing::Instant);
    }

    #[test]
    fn blank_log_file_is_ignored() {
        let s = settings(&[(LOG_FILE_VAR, "  ")]);
        assert_eq!(s.log_file, None);
    }

    #[test]
    fn truthy_values() {
        assert!(is_truthy("1"));
        assert!(is_truthy("TRUE"));
        assert!(!is_truthy("0"));
        assert!(!is_truthy("on"));
        assert!(!is_truthy(""));
    }
}
