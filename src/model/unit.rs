use serde::{Deserialize, Serialize};

/// A named static code element (class, type or module-level function).
///
/// Units are immutable once added to a [`DependencyGraph`](crate::graph::DependencyGraph);
/// their outgoing edges live in the graph, not on the unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeUnit {
    pub name: String,
    pub path: Vec<String>,
}

impl CodeUnit {
    pub fn new(name: impl Into<String>, path: Vec<String>) -> Self {
        Self {
            name: name.into(),
            path,
        }
    }

    /// Build a unit whose path is the dotted package string, e.g. `se.x.modules.a.api`.
    pub fn with_package(name: impl Into<String>, package: &str) -> Self {
        Self::new(name, split_package(package))
    }

    /// Build a unit whose path is derived from its qualified name by dropping the last segment.
    pub fn from_qualified_name(name: impl Into<String>) -> Self {
        let name = name.into();
        let path = derive_path(&name);
        Self { name, path }
    }

    /// Short name (last segment of the qualified name).
    pub fn simple_name(&self) -> &str {
        let separator = if self.name.contains("::") { "::" } else { "." };
        self.name.rsplit(separator).next().unwrap_or(&self.name)
    }

    /// True when the unit carries no namespace at all.
    pub fn is_malformed(&self) -> bool {
        self.path.iter().all(|s| s.is_empty())
    }

    pub fn package(&self) -> String {
        self.path.join(".")
    }
}

pub fn split_package(package: &str) -> Vec<String> {
    package
        .split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn derive_path(name: &str) -> Vec<String> {
    let separator = if name.contains("::") { "::" } else { "." };
    let mut segments: Vec<String> = name
        .split(separator)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    segments.pop();
    segments
}
