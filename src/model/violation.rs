use crate::model::{Layer, ModuleName};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Violation {
    pub rule: RuleKind,
    pub source: String,
    pub target: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleKind {
    /// Non-public parts of modules must not depend on each other.
    SliceEncapsulation,
    /// Dependency direction between PublicModule, NonPublicModule and NonModule code.
    LayeredAccess,
    /// Public surface of a module must not reach into another module's internals.
    CrossModuleInternals,
}

impl RuleKind {
    pub const ALL: [RuleKind; 3] = [
        RuleKind::SliceEncapsulation,
        RuleKind::LayeredAccess,
        RuleKind::CrossModuleInternals,
    ];

    pub fn description(self) -> &'static str {
        match self {
            RuleKind::SliceEncapsulation => "non-public parts of modules must not depend on each other",
            RuleKind::LayeredAccess => "dependencies must follow the module layering",
            RuleKind::CrossModuleInternals => {
                "public surface of one module must not reach into the non-public internals of a different module"
            }
        }
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleKind::SliceEncapsulation => write!(f, "slice-encapsulation"),
            RuleKind::LayeredAccess => write!(f, "layered-access"),
            RuleKind::CrossModuleInternals => write!(f, "cross-module-internals"),
        }
    }
}

impl std::str::FromStr for RuleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        RuleKind::ALL
            .into_iter()
            .find(|kind| kind.to_string() == wanted)
            .ok_or_else(|| format!("Unknown rule: {}", s))
    }
}

impl Violation {
    pub fn slice_encapsulation(
        source: &str,
        source_module: &ModuleName,
        target: &str,
        target_module: &ModuleName,
    ) -> Self {
        Self {
            rule: RuleKind::SliceEncapsulation,
            source: source.to_string(),
            target: target.to_string(),
            message: format!(
                "{} (slice '{}') depends on {} (slice '{}'): {}",
                source,
                source_module,
                target,
                target_module,
                RuleKind::SliceEncapsulation.description()
            ),
        }
    }

    pub fn layered_access(
        source: &str,
        source_layer: Layer,
        target: &str,
        target_layer: Layer,
    ) -> Self {
        let allowed: Vec<String> = target_layer
            .allowed_dependents()
            .iter()
            .map(|l| l.to_string())
            .collect();
        let access = if allowed.is_empty() {
            "may not be accessed by any layer".to_string()
        } else {
            format!("may only be accessed by {}", allowed.join(", "))
        };

        Self {
            rule: RuleKind::LayeredAccess,
            source: source.to_string(),
            target: target.to_string(),
            message: format!(
                "{} in layer '{}' depends on {} in layer '{}', which {}",
                source, source_layer, target, target_layer, access
            ),
        }
    }

    pub fn cross_module_internals(
        source: &str,
        source_module: &ModuleName,
        target: &str,
        target_module: &ModuleName,
    ) -> Self {
        Self {
            rule: RuleKind::CrossModuleInternals,
            source: source.to_string(),
            target: target.to_string(),
            message: format!(
                "The class {} in the module '{}' has a dependency to the class {} in the module '{}', \
                which is a non-public class in another module",
                source, source_module, target, target_module
            ),
        }
    }
}
