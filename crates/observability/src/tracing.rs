//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "GILDEDROSE_LOG_FORMAT";

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Human-readable multi-line output.
    Pretty,
}

impl LogFormat {
    /// Parse a format name; `None` for anything unrecognized.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Some(LogFormat::Json),
            "pretty" => Some(LogFormat::Pretty),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directive string, e.g. `info,gildedrose_inventory=trace`.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    /// Read `RUST_LOG` and `GILDEDROSE_LOG_FORMAT`.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(),
            std::env::var(LOG_FORMAT_ENV).ok().as_deref(),
        )
    }

    fn from_vars(filter: Option<&str>, format: Option<&str>) -> Self {
        let filter = filter
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .unwrap_or(DEFAULT_FILTER)
            .to_string();

        let format = match format {
            None => LogFormat::default(),
            Some(raw) => LogFormat::parse(raw).unwrap_or_else(|| {
                // No subscriber is installed yet, so this goes to stderr directly.
                eprintln!("unknown {LOG_FORMAT_ENV}={raw:?}; falling back to json");
                LogFormat::default()
            }),
        };

        Self { filter, format }
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init_with(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let _ = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = ObservabilityConfig::from_vars(None, None);
        assert_eq!(config, ObservabilityConfig::default());
        assert_eq!(config.filter, "info");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn reads_filter_and_format() {
        let config = ObservabilityConfig::from_vars(Some("gildedrose_inventory=trace"), Some("Pretty"));
        assert_eq!(config.filter, "gildedrose_inventory=trace");
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn blank_filter_and_unknown_format_fall_back() {
        let config = ObservabilityConfig::from_vars(Some("  "), Some("xml"));
        assert_eq!(config, ObservabilityConfig::default());
    }

    #[test]
    fn init_is_idempotent() {
        init_with(&ObservabilityConfig::default());
        init_with(&ObservabilityConfig {
            filter: "not a [valid filter".to_string(),
            format: LogFormat::Pretty,
        });
    }
}
