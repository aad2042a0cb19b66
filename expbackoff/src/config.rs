use serde::{Deserialize, Serialize};

/// Backoff policy settings, embeddable in a host application's config file.
///
/// Only policy parameters live here; runtime failure state is never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackoffConfig {
    /// Delay in seconds for the first failure (default: 0.5)
    #[serde(default = "default_base_seconds")]
    pub base_seconds: f64,
    /// Failure count at which growth saturates (default: 5)
    #[serde(default = "default_max_failures")]
    pub max_failures: u32,
}

fn default_base_seconds() -> f64 {
    0.5
}

fn default_max_failures() -> u32 {
    5
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            base_seconds: default_base_seconds(),
            max_failures: default_max_failures(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let cfg: BackoffConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, BackoffConfig::default());
    }

    #[test]
    fn test_explicit_values_win() {
        let cfg: BackoffConfig =
            serde_json::from_str(r#"{"base_seconds": 2.0, "max_failures": 3}"#).unwrap();
        assert_eq!(cfg.base_seconds, 2.0);
        assert_eq!(cfg.max_failures, 3);
    }
}
