use crate::config::{Config, is_identifier};
use crate::model::{ModuleDescriptor, ModuleName};

/// Extracts module and first-level subpackage from a unit's namespace path.
///
/// The first segment equal to the marker (ignoring case) starts the module part;
/// the next segment is the module name, the one after it the subpackage.
#[derive(Debug, Clone)]
pub struct ModulePathClassifier {
    marker: String,
}

impl ModulePathClassifier {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into().trim().to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.module_marker.clone())
    }

    pub fn classify<S: AsRef<str>>(&self, path: &[S]) -> Option<ModuleDescriptor> {
        let marker_pos = path
            .iter()
            .position(|s| s.as_ref().eq_ignore_ascii_case(&self.marker))?;

        let module = path.get(marker_pos + 1).map(|s| s.as_ref())?;
        if !is_identifier(module) {
            return None;
        }

        let subpackage = path
            .get(marker_pos + 2)
            .map(|s| s.as_ref())
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Some(ModuleDescriptor {
            module: ModuleName::new(module),
            subpackage,
        })
    }

    /// Classify a dotted package string such as `se.shop.modules.cart.api`.
    pub fn classify_package(&self, package: &str) -> Option<ModuleDescriptor> {
        self.classify(&crate::model::split_package(package))
    }
}

impl Default for ModulePathClassifier {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
