use std::env;
use tracing::warn;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Process configuration read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: String,
    pub use_real_name: bool, // Seeds the UI_Use_Real_Name setting
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            use_real_name: false,
        }
    }
}

impl AppConfig {
    /// Reads `BIND_ADDR` and `UI_USE_REAL_NAME`, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let bind_addr = lookup("BIND_ADDR").unwrap_or(defaults.bind_addr);
        let use_real_name = match lookup("UI_USE_REAL_NAME") {
            Some(raw) => parse_bool(&raw).unwrap_or_else(|| {
                warn!(value = %raw, "Invalid UI_USE_REAL_NAME, using default");
                defaults.use_real_name
            }),
            None => defaults.use_real_name,
        };

        Self {
            bind_addr,
            use_real_name,
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
