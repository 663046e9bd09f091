use std::time::Duration;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const TIMEOUT_ENV: &str = "VTRACER_GUI_TIMEOUT_SECS";
pub const PATH_PRECISION_ENV: &str = "VTRACER_GUI_PATH_PRECISION";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Seconds to wait for a terminal event before abandoning a task; `None` waits forever
    pub conversion_timeout_secs: Option<u64>,
    /// Decimal places for coordinates in the SVG output
    pub path_precision: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            conversion_timeout_secs: Some(300),
            path_precision: 8,
        }
    }
}

impl AppConfig {
    /// Defaults overridden by `VTRACER_GUI_TIMEOUT_SECS` (0 disables the
    /// timeout) and `VTRACER_GUI_PATH_PRECISION`. Unparseable values are
    /// logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(0) => config.conversion_timeout_secs = None,
                Ok(secs) => config.conversion_timeout_secs = Some(secs),
                Err(e) => warn!("Ignoring {}={:?}: {}", TIMEOUT_ENV, raw, e),
            }
        }

        if let Some(raw) = lookup(PATH_PRECISION_ENV) {
            match raw.trim().parse::<u32>() {
                Ok(precision) => config.path_precision = precision,
                Err(e) => warn!("Ignoring {}={:?}: {}", PATH_PRECISION_ENV, raw, e),
            }
        }

        config
    }

    pub fn conversion_timeout(&self) -> Option<Duration> {
        self.conversion_timeout_secs.map(Duration::from_secs)
    }
}
