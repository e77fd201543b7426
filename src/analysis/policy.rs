use crate::config::Config;
use std::collections::BTreeSet;

/// Decides which first-level subpackages form a module's public surface.
#[derive(Debug, Clone)]
pub struct PublicSurfacePolicy {
    allowlist: BTreeSet<String>,
}

impl PublicSurfacePolicy {
    pub fn new<I, S>(allowlist: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            allowlist: allowlist
                .into_iter()
                .map(|s| s.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.public_subpackages)
    }

    pub fn is_public(&self, subpackage: Option<&str>) -> bool {
        subpackage.is_some_and(|s| self.allowlist.contains(&s.to_lowercase()))
    }
}

impl Default for PublicSurfacePolicy {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
