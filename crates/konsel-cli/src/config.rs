use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

/// Overrides `data_dir` for one run. Never written to the config file.
pub const DATA_DIR_ENV: &str = "KONSEL_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KonselConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Where records are stored.
    pub data_dir: PathBuf,
    /// `tracing` filter used when `RUST_LOG` is unset. Added in v1.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for KonselConfig {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .map(|d| d.join("konsel"))
            .unwrap_or_else(|| PathBuf::from("konsel-data"));
        Self {
            config_version: CURRENT_VERSION,
            data_dir,
            log_filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "info".to_string()
}

/// Result of [`load_config`]. Loading happens before logging is set up, so
/// what happened is reported back instead of logged.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: KonselConfig,
    /// On-disk version when a migration ran.
    pub migrated_from: Option<u32>,
    /// No file existed; defaults were written.
    pub created: bool,
}

pub fn config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("konsel").join("config.json"))
}

/// Load the config at `path`, creating it with defaults when missing and
/// writing it back when a migration ran. `data_dir_override` is applied to
/// the returned config only, after anything is written.
pub fn load_config(path: &Path, data_dir_override: Option<PathBuf>) -> eyre::Result<LoadedConfig> {
    let mut loaded = if path.exists() {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;
        let (config, migrated_from) = parse_config(&contents)?;
        if migrated_from.is_some() {
            save_config(path, &config)?;
        }
        LoadedConfig {
            config,
            migrated_from,
            created: false,
        }
    } else {
        let config = KonselConfig::default();
        save_config(path, &config)?;
        LoadedConfig {
            config,
            migrated_from: None,
            created: true,
        }
    };

    if let Some(dir) = data_dir_override {
        loaded.config.data_dir = dir;
    }
    Ok(loaded)
}

/// Parse config JSON, migrating older versions first. Returns the on-disk
/// version alongside the config when a migration ran.
pub fn parse_config(contents: &str) -> eyre::Result<(KonselConfig, Option<u32>)> {
    let json: serde_json::Value = serde_json::from_str(contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: KonselConfig = serde_json::from_value(migrated)?;
    let migrated_from = (on_disk_version < CURRENT_VERSION).then_some(on_disk_version);
    Ok((config, migrated_from))
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update konsel."
        ));
    }

    // v0 → v1: add log_filter
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("log_filter")
            .or_insert(serde_json::Value::String(default_log_filter()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &KonselConfig) -> eyre::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn v0_config_gains_log_filter() {
        let (config, migrated_from) = parse_config(r#"{"data_dir":"/tmp/konsel"}"#).unwrap();
        assert_eq!(migrated_from, Some(0));
        assert_eq!(config.config_version, 1);
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/konsel"));
    }

    #[test]
    fn current_config_is_not_migrated() {
        let (_, migrated_from) =
            parse_config(r#"{"config_version":1,"data_dir":"/tmp","log_filter":"warn"}"#).unwrap();
        assert_eq!(migrated_from, None);
    }

    #[test]
    fn future_version_is_rejected() {
        assert!(parse_config(r#"{"config_version":9,"data_dir":"/tmp"}"#).is_err());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("konsel").join("config.json");
        let config = KonselConfig {
            config_version: 0,
            data_dir: dir.path().join("data"),
            log_filter: "debug".to_string(),
        };
        save_config(&path, &config).unwrap();

        let loaded = load_config(&path, None).unwrap();
        assert!(!loaded.created);
        assert_eq!(loaded.migrated_from, None);
        assert_eq!(loaded.config.config_version, 1);
        assert_eq!(loaded.config.log_filter, "debug");
    }

    #[test]
    fn first_run_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let loaded = load_config(&path, None).unwrap();
        assert!(loaded.created);
        assert!(path.exists());
        assert_eq!(loaded.config, KonselConfig::default());
    }

    #[test]
    fn data_dir_override_is_not_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let one_off = dir.path().join("one-off");

        let first = load_config(&path, Some(one_off.clone())).unwrap();
        assert!(first.created);
        assert_eq!(first.config.data_dir, one_off);

        let second = load_config(&path, None).unwrap();
        assert_ne!(second.config.data_dir, one_off);
        assert_eq!(second.config.data_dir, KonselConfig::default().data_dir);
    }

    #[test]
    fn migrated_config_is_written_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"data_dir":"/tmp/konsel"}"#).unwrap();

        let loaded = load_config(&path, None).unwrap();
        assert_eq!(loaded.migrated_from, Some(0));

        let on_disk = std::fs::read_to_string(&path).unwrap();
        let (config, migrated_from) = parse_config(&on_disk).unwrap();
        assert_eq!(migrated_from, None);
        assert_eq!(config.log_filter, "info");
    }
}
