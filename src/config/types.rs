//! Configuration types for punch reconciliation.
//!
//! The engine deliberately takes its operational timezone, output time
//! format, and break-fill policy as injected configuration rather than
//! module-level constants, so a deployment in a different locale needs a
//! config change rather than a source edit.

use chrono_tz::Tz;
use serde::Deserialize;

/// The default operational timezone name.
pub const DEFAULT_TIMEZONE: &str = "Asia/Manila";

/// The default output pattern for formatted slot values (`h:mm A`).
pub const DEFAULT_TIME_FORMAT: &str = "%-I:%M %p";

/// Runtime configuration for the reconciliation engine.
///
/// All classification and normalization is interpreted as local wall-clock
/// time in [`EngineConfig::timezone`]. The format pattern only affects the
/// formatted output projection, never classification.
///
/// # Example
///
/// ```
/// use attendance_engine::config::EngineConfig;
///
/// let cfg = EngineConfig::default();
/// assert_eq!(cfg.timezone.name(), "Asia/Manila");
/// assert!(cfg.default_break_fill);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// The operational timezone all punches are interpreted in.
    #[serde(default = "default_timezone")]
    pub timezone: Tz,
    /// chrono format pattern for formatted slot output.
    #[serde(default = "default_time_format")]
    pub time_format: String,
    /// When true, a standard 12:00/13:00 lunch is synthesized for days with
    /// a Time In and Time Out but no observed break punches. This is a
    /// business policy assumption, not a detected fact; the classifier
    /// reports when it was applied.
    #[serde(default = "default_break_fill")]
    pub default_break_fill: bool,
}

fn default_timezone() -> Tz {
    chrono_tz::Asia::Manila
}

fn default_time_format() -> String {
    DEFAULT_TIME_FORMAT.to_string()
}

fn default_break_fill() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            time_format: default_time_format(),
            default_break_fill: default_break_fill(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.timezone.name(), DEFAULT_TIMEZONE);
        assert_eq!(cfg.time_format, DEFAULT_TIME_FORMAT);
        assert!(cfg.default_break_fill);
    }

    #[test]
    fn test_deserialize_full_config() {
        let yaml = r#"
timezone: "Australia/Sydney"
time_format: "%H:%M"
default_break_fill: false
"#;
        let cfg: EngineConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.timezone.name(), "Australia/Sydney");
        assert_eq!(cfg.time_format, "%H:%M");
        assert!(!cfg.default_break_fill);
    }

    #[test]
    fn test_deserialize_empty_config_uses_defaults() {
        let cfg: EngineConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(cfg.timezone.name(), DEFAULT_TIMEZONE);
        assert!(cfg.default_break_fill);
    }

    #[test]
    fn test_deserialize_unknown_timezone_fails() {
        let result: Result<EngineConfig, _> =
            serde_yaml::from_str("timezone: \"Mars/Olympus_Mons\"");
        assert!(result.is_err());
    }
}
