use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use gridfit_app::ports::{SizingStore, SizingStoreError};
use gridfit_domain::overrides::{OverrideMap, PersistedSizing};

const SIZING_FILE_NAME: &str = "column-sizing.toml";
pub const CURRENT_VERSION: u32 = 1;

/// Versioned on-disk form. Loading deserializes the columns table through
/// [`PersistedSizing`], so files written by the legacy preference model
/// still parse; saving always writes the canonical override shape.
#[derive(Debug, Deserialize)]
struct SizingFileIn {
    version: u32,
    #[serde(default)]
    columns: Option<PersistedSizing>,
}

#[derive(Debug, Serialize)]
struct SizingFileOut<'a> {
    version: u32,
    columns: &'a OverrideMap,
}

/// Durable sizing store: one TOML file under the platform config dir.
pub struct TomlSizingStore {
    config_dir: PathBuf,
}

impl TomlSizingStore {
    pub fn new() -> Result<Self, SizingStoreError> {
        let config_dir = default_config_dir()?;
        Ok(Self { config_dir })
    }

    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    fn sizing_file_path(&self) -> PathBuf {
        self.config_dir.join(SIZING_FILE_NAME)
    }
}

impl SizingStore for TomlSizingStore {
    fn load(&self) -> Result<Option<PersistedSizing>, SizingStoreError> {
        let path = self.sizing_file_path();

        if !path.exists() {
            return Ok(None);
        }

        let content =
            fs::read_to_string(&path).map_err(|e| SizingStoreError::Read(e.to_string()))?;

        let file: SizingFileIn =
            toml::from_str(&content).map_err(|e| SizingStoreError::InvalidFormat(e.to_string()))?;

        if file.version != CURRENT_VERSION {
            return Err(SizingStoreError::VersionMismatch {
                found: file.version,
                expected: CURRENT_VERSION,
            });
        }

        debug!(path = %path.display(), "loaded column sizing");
        Ok(file.columns)
    }

    fn save(&self, overrides: &OverrideMap) -> Result<(), SizingStoreError> {
        if !self.config_dir.exists() {
            fs::create_dir_all(&self.config_dir)
                .map_err(|e| SizingStoreError::Io(e.to_string()))?;
        }

        let file = SizingFileOut {
            version: CURRENT_VERSION,
            columns: overrides,
        };
        let content =
            toml::to_string_pretty(&file).map_err(|e| SizingStoreError::Write(e.to_string()))?;

        let content_with_header = format!(
            "# gridfit column sizing\n# Written on every committed resize; delete to reset all columns.\n\n{content}"
        );

        let path = self.sizing_file_path();
        fs::write(&path, content_with_header)
            .map_err(|e| SizingStoreError::Write(e.to_string()))?;

        debug!(path = %path.display(), columns = overrides.len(), "saved column sizing");
        Ok(())
    }

    fn storage_path(&self) -> PathBuf {
        self.sizing_file_path()
    }
}

fn default_config_dir() -> Result<PathBuf, SizingStoreError> {
    let config_base = dirs::config_dir()
        .ok_or_else(|| SizingStoreError::Io("could not find config directory".into()))?;
    Ok(config_base.join("gridfit"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridfit_domain::overrides::ColumnOverride;
    use tempfile::TempDir;

    fn sample_overrides() -> OverrideMap {
        OverrideMap::from([
            (
                "name".to_string(),
                ColumnOverride {
                    min_width_px: 180.0,
                    share: 0.0,
                },
            ),
            (
                "status".to_string(),
                ColumnOverride {
                    min_width_px: 80.0,
                    share: 1.0,
                },
            ),
        ])
    }

    mod load {
        use super::*;

        #[test]
        fn returns_none_when_no_file_exists() {
            let temp_dir = TempDir::new().unwrap();
            let store = TomlSizingStore::with_config_dir(temp_dir.path().to_path_buf());

            let result = store.load().unwrap();

            assert!(result.is_none());
        }

        #[rstest::rstest]
        #[case(0)]
        #[case(2)]
        #[case(99)]
        fn rejects_an_unknown_version(#[case] version: u32) {
            let temp_dir = TempDir::new().unwrap();
            let path = temp_dir.path().join(SIZING_FILE_NAME);
            let content = format!(
                "version = {version}\n\n[columns.name]\nminWidthPx = 180.0\nshare = 0.0\n"
            );
            fs::write(&path, content).unwrap();
            let store = TomlSizingStore::with_config_dir(temp_dir.path().to_path_buf());

            let result = store.load();

            assert!(matches!(
                result,
                Err(SizingStoreError::VersionMismatch { found, expected: 1 }) if found == version
            ));
        }

        #[test]
        fn rejects_malformed_toml() {
            let temp_dir = TempDir::new().unwrap();
            let path = temp_dir.path().join(SIZING_FILE_NAME);
            fs::write(&path, "not toml {{{{").unwrap();
            let store = TomlSizingStore::with_config_dir(temp_dir.path().to_path_buf());

            let result = store.load();

            assert!(matches!(result, Err(SizingStoreError::InvalidFormat(_))));
        }

        #[test]
        fn accepts_the_legacy_preference_shape() {
            let temp_dir = TempDir::new().unwrap();
            let path = temp_dir.path().join(SIZING_FILE_NAME);
            let content = r#"
version = 1

[columns.name]
mode = "no-truncate"
width = 220.0
"#;
            fs::write(&path, content).unwrap();
            let store = TomlSizingStore::with_config_dir(temp_dir.path().to_path_buf());

            let result = store.load().unwrap();

            assert!(matches!(result, Some(PersistedSizing::Preferences(_))));
        }

        #[test]
        fn missing_columns_table_loads_as_none() {
            let temp_dir = TempDir::new().unwrap();
            let path = temp_dir.path().join(SIZING_FILE_NAME);
            fs::write(&path, "version = 1\n").unwrap();
            let store = TomlSizingStore::with_config_dir(temp_dir.path().to_path_buf());

            let result = store.load().unwrap();

            assert!(result.is_none());
        }
    }

    mod save {
        use super::*;

        #[test]
        fn creates_the_config_directory_on_demand() {
            let temp_dir = TempDir::new().unwrap();
            let config_dir = temp_dir.path().join("nested").join("config");
            let store = TomlSizingStore::with_config_dir(config_dir.clone());

            store.save(&sample_overrides()).unwrap();

            assert!(config_dir.exists());
            assert!(store.storage_path().exists());
        }

        #[test]
        fn an_empty_set_still_writes_a_valid_file() {
            let temp_dir = TempDir::new().unwrap();
            let store = TomlSizingStore::with_config_dir(temp_dir.path().to_path_buf());

            store.save(&OverrideMap::new()).unwrap();

            let result = store.load().unwrap();
            assert!(matches!(
                result,
                Some(PersistedSizing::Overrides(map)) if map.is_empty()
            ));
        }
    }

    mod roundtrip {
        use super::*;

        #[test]
        fn save_then_load_reproduces_the_override_set() {
            let temp_dir = TempDir::new().unwrap();
            let store = TomlSizingStore::with_config_dir(temp_dir.path().to_path_buf());
            let overrides = sample_overrides();

            store.save(&overrides).unwrap();
            let loaded = store.load().unwrap();

            assert_eq!(loaded, Some(PersistedSizing::Overrides(overrides)));
        }

        #[test]
        fn a_second_save_replaces_the_first() {
            let temp_dir = TempDir::new().unwrap();
            let store = TomlSizingStore::with_config_dir(temp_dir.path().to_path_buf());
            store.save(&sample_overrides()).unwrap();

            let replacement = OverrideMap::from([(
                "pool".to_string(),
                ColumnOverride {
                    min_width_px: 96.0,
                    share: 1.0,
                },
            )]);
            store.save(&replacement).unwrap();

            let loaded = store.load().unwrap();
            assert_eq!(loaded, Some(PersistedSizing::Overrides(replacement)));
        }
    }

    mod storage_path {
        use super::*;

        #[test]
        fn points_at_the_sizing_file() {
            let temp_dir = TempDir::new().unwrap();
            let store = TomlSizingStore::with_config_dir(temp_dir.path().to_path_buf());

            assert_eq!(
                store.storage_path(),
                temp_dir.path().join(SIZING_FILE_NAME)
            );
        }
    }
}
