use log::{LevelFilter, warn};
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_PAIR_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct AppSettings {
    pub full_screen: bool,
    pub log_level: LevelFilter,
    /// Pause between picking the second bracket player and opening head-to-head.
    pub pair_delay: Duration,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            full_screen: false,
            log_level: DEFAULT_LOG_LEVEL,
            pair_delay: DEFAULT_PAIR_DELAY,
        }
    }
}

impl AppSettings {
    /// Read overrides from `ATPTUI_LOG` and `ATPTUI_PAIR_DELAY_MS`.
    pub fn load() -> Self {
        Self::from_vars(
            std::env::var("ATPTUI_LOG").ok().as_deref(),
            std::env::var("ATPTUI_PAIR_DELAY_MS").ok().as_deref(),
        )
    }

    fn from_vars(log_level: Option<&str>, pair_delay_ms: Option<&str>) -> Self {
        let mut settings = Self::default();

        if let Some(raw) = log_level.map(str::trim).filter(|s| !s.is_empty()) {
            match LevelFilter::from_str(raw) {
                Ok(level) => settings.log_level = level,
                Err(_) => warn!("ignoring ATPTUI_LOG={raw:?}, using {DEFAULT_LOG_LEVEL}"),
            }
        }

        if let Some(raw) = pair_delay_ms.map(str::trim).filter(|s| !s.is_empty()) {
            match raw.parse::<u64>() {
                Ok(ms) => settings.pair_delay = Duration::from_millis(ms),
                Err(e) => warn!("ignoring ATPTUI_PAIR_DELAY_MS={raw:?}: {e}"),
            }
        }

        settings
    }
}
