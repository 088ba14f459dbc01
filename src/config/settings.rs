//! User settings for spendlog
//!
//! This is the scalar preference store: a small JSON file holding single
//! settings values, most importantly the monthly budget limit. It is read
//! once at startup and rewritten synchronously on every change.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::paths::SpendlogPaths;
use crate::error::SpendlogError;
use crate::models::Money;
use crate::storage::write_json_atomic;

/// User settings for spendlog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Monthly budget limit, stored as cents
    #[serde(default = "default_monthly_limit")]
    pub monthly_limit: Money,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_monthly_limit() -> Money {
    Money::from_cents(50_000) // 500.00
}

fn default_currency() -> String {
    "₹".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            monthly_limit: default_monthly_limit(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk
    ///
    /// Returns `None` when there is no usable file: a missing file is
    /// silent, an unreadable or unparseable one is logged at warn. The
    /// caller falls back to defaults and decides when to persist them.
    pub fn load(paths: &SpendlogPaths) -> Option<Self> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return None;
        }

        let contents = match std::fs::read_to_string(&settings_path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!(
                    "failed to read {}, using defaults: {}",
                    settings_path.display(),
                    e
                );
                return None;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(settings) => Some(settings),
            Err(e) => {
                warn!(
                    "failed to parse {}, using defaults: {}",
                    settings_path.display(),
                    e
                );
                None
            }
        }
    }

    /// Save settings to disk with the same atomic rewrite as the record file
    pub fn save(&self, paths: &SpendlogPaths) -> Result<(), SpendlogError> {
        write_json_atomic(paths.settings_file(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.monthly_limit, Money::from_cents(50_000));
        assert_eq!(settings.currency_symbol, "₹");
    }

    #[test]
    fn test_load_without_file_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendlogPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(Settings::load(&paths).is_none());
        // Nothing was written
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_load_corrupt_file_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendlogPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.settings_file(), "not json").unwrap();

        assert!(Settings::load(&paths).is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendlogPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.monthly_limit = Money::from_cents(120_000);

        settings.save(&paths).unwrap();

        let loaded = Settings::load(&paths).unwrap();
        assert_eq!(loaded.monthly_limit, Money::from_cents(120_000));
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendlogPaths::with_base_dir(temp_dir.path().to_path_buf());

        Settings::default().save(&paths).unwrap();

        assert!(paths.settings_file().exists());
        assert!(!paths.settings_file().with_extension("json.tmp").exists());
    }

    #[test]
    fn test_serde_round_trip() {
        let settings = Settings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings.monthly_limit, deserialized.monthly_limit);
    }
}
