use crate::fs::{FileSystem, default_fs};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = ".modbound.toml";
pub const DEFAULT_MODULE_MARKER: &str = "modules";
pub const DEFAULT_PUBLIC_SUBPACKAGES: [&str; 2] = ["api", "configuration"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Module marker segment must not be empty")]
    EmptyMarker,
    #[error("Module marker '{0}' is not a single identifier segment")]
    InvalidMarker(String),
    #[error("Public subpackage '{0}' is not a valid identifier")]
    InvalidSubpackage(String),
}

/// Settings threaded into the classifier and the public-surface policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path segment after which the module name follows.
    pub module_marker: String,
    /// Lower-cased first-level subpackages that form a module's public surface.
    pub public_subpackages: BTreeSet<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    modules: Option<RawModules>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawModules {
    marker: Option<String>,
    public: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            module_marker: DEFAULT_MODULE_MARKER.to_string(),
            public_subpackages: DEFAULT_PUBLIC_SUBPACKAGES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Config {
    pub fn new<I, S>(module_marker: impl Into<String>, public_subpackages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            module_marker: module_marker.into(),
            public_subpackages: public_subpackages
                .into_iter()
                .map(|s| s.as_ref().trim().to_lowercase())
                .collect(),
        }
    }

    /// Load `.modbound.toml` from `project_path`, falling back to defaults when absent.
    pub fn load(project_path: &Path) -> Result<Self, ConfigError> {
        Self::load_with_fs(project_path, default_fs())
    }

    pub fn load_with_fs(project_path: &Path, fs: &dyn FileSystem) -> Result<Self, ConfigError> {
        let config_path = project_path.join(CONFIG_FILE_NAME);

        if !fs.exists(&config_path) {
            return Ok(Self::default());
        }

        Self::load_file_with_fs(&config_path, fs)
    }

    /// Load an explicit config file; missing files are an error here.
    pub fn load_file(config_path: &Path) -> Result<Self, ConfigError> {
        Self::load_file_with_fs(config_path, default_fs())
    }

    pub fn load_file_with_fs(config_path: &Path, fs: &dyn FileSystem) -> Result<Self, ConfigError> {
        let content = fs.read_to_string(config_path)?;
        Self::from_toml(&content)
    }

    /// Parse a config file. Values are not validated here: overrides may still
    /// replace them, so call [`Config::validate`] once they have been applied.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(content)?;
        let defaults = Self::default();

        Ok(match raw.modules {
            Some(m) => Self {
                module_marker: m.marker.unwrap_or(defaults.module_marker),
                public_subpackages: match m.public {
                    Some(list) => list.iter().map(|s| s.trim().to_lowercase()).collect(),
                    None => defaults.public_subpackages,
                },
            },
            None => defaults,
        })
    }

    /// Apply command-line overrides on top of file/default values.
    pub fn with_overrides(mut self, marker: Option<&str>, public: Option<&[String]>) -> Self {
        if let Some(marker) = marker {
            self.module_marker = marker.to_string();
        }
        if let Some(public) = public {
            self.public_subpackages = public.iter().map(|s| s.trim().to_lowercase()).collect();
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let marker = self.module_marker.trim();
        if marker.is_empty() {
            return Err(ConfigError::EmptyMarker);
        }
        if !is_identifier(marker) {
            return Err(ConfigError::InvalidMarker(self.module_marker.clone()));
        }

        for name in &self.public_subpackages {
            if !is_identifier(name) {
                return Err(ConfigError::InvalidSubpackage(name.clone()));
            }
        }

        if self.public_subpackages.is_empty() {
            tracing::warn!("public subpackage list is empty; no module has a public surface");
        }

        Ok(())
    }
}

/// Letters, digits and underscores only, at least one character.
pub fn is_identifier(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

pub fn generate_config_template() -> String {
    format!(
        r#"# modbound configuration
#
# Code units whose namespace contains the marker segment belong to a module;
# the segment right after the marker is the module name and the next one is
# the module's first-level subpackage.
#
#   se.shop.modules.warehouse.api.WarehouseService
#               ^marker ^module   ^subpackage

[modules]
marker = "{}"

# Subpackages that form the public surface of every module. Everything else
# inside a module is internal to it.
public = [{}]
"#,
        DEFAULT_MODULE_MARKER,
        DEFAULT_PUBLIC_SUBPACKAGES
            .iter()
            .map(|s| format!("\"{}\"", s))
            .collect::<Vec<_>>()
            .join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::mock::MockFs;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.module_marker, "modules");
        assert!(config.public_subpackages.contains("api"));
        assert!(config.public_subpackages.contains("configuration"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_template_round_trips_to_defaults() {
        let config = Config::from_toml(&generate_config_template()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_keeps_default_allow_list() {
        let config = Config::from_toml("[modules]\nmarker = \"components\"\n").unwrap();
        assert_eq!(config.module_marker, "components");
        assert_eq!(config.public_subpackages, Config::default().public_subpackages);
    }

    #[test]
    fn test_allow_list_is_lower_cased() {
        let config = Config::from_toml("[modules]\npublic = [\"API\", \"Spi\"]\n").unwrap();
        assert!(config.public_subpackages.contains("api"));
        assert!(config.public_subpackages.contains("spi"));
    }

    #[test]
    fn test_empty_marker_rejected() {
        let config = Config::from_toml("[modules]\nmarker = \"  \"\n").unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::EmptyMarker)));
    }

    #[test]
    fn test_dotted_marker_rejected() {
        let config = Config::new("app.modules", ["api"]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMarker(_))
        ));
    }

    #[test]
    fn test_blank_subpackage_rejected() {
        let config = Config::new("modules", ["api", ""]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSubpackage(_))
        ));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let err = Config::from_toml("[modules]\nmarkers = \"x\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let fs = MockFs::new();
        let config = Config::load_with_fs(Path::new("/project"), &fs).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_project_dir() {
        let fs = MockFs::with_files([(
            Path::new("/project/.modbound.toml"),
            "[modules]\nmarker = \"features\"\npublic = [\"api\"]\n",
        )]);
        let config = Config::load_with_fs(Path::new("/project"), &fs).unwrap();
        assert_eq!(config.module_marker, "features");
        assert_eq!(config.public_subpackages.len(), 1);
    }

    #[test]
    fn test_overrides_win() {
        let config = Config::default()
            .with_overrides(Some("parts"), Some(&["Facade".to_string()]));
        assert_eq!(config.module_marker, "parts");
        assert!(config.public_subpackages.contains("facade"));
        assert!(!config.public_subpackages.contains("api"));
    }

    #[test]
    fn test_overrides_replace_invalid_file_values() {
        let fs = MockFs::with_files([(
            Path::new("/project/.modbound.toml"),
            "[modules]\nmarker = \"a.b\"\npublic = [\"api-v1\"]\n",
        )]);
        let loaded = Config::load_with_fs(Path::new("/project"), &fs).unwrap();
        assert!(matches!(
            loaded.validate(),
            Err(ConfigError::InvalidMarker(_))
        ));

        let config = loaded.with_overrides(Some("modules"), Some(&["api".to_string()]));
        assert!(config.validate().is_ok());
        assert_eq!(config, Config::default().with_overrides(None, Some(&["api".to_string()])));
    }
}
