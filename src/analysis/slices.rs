use super::{ModulePathClassifier, PublicSurfacePolicy};
use crate::config::Config;
use crate::graph::{DependencyGraph, UnitId};
use crate::model::{CodeUnit, Layer, ModuleDescriptor, ModuleName, SliceIdentifier};
use std::collections::HashMap;

/// Everything the rules need to know about one unit, computed once per run.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub descriptor: Option<ModuleDescriptor>,
    pub layer: Layer,
    pub slice: SliceIdentifier,
}

impl Classification {
    fn non_module() -> Self {
        Self {
            descriptor: None,
            layer: Layer::NonModule,
            slice: SliceIdentifier::Ignored,
        }
    }

    pub fn module(&self) -> Option<&ModuleName> {
        self.descriptor.as_ref().map(|d| &d.module)
    }

    pub fn subpackage(&self) -> Option<&str> {
        self.descriptor.as_ref().and_then(|d| d.subpackage.as_deref())
    }
}

/// Maps units to slices: the module name for non-public module code, `Ignored` otherwise.
#[derive(Debug, Clone, Default)]
pub struct SliceAssigner {
    classifier: ModulePathClassifier,
    policy: PublicSurfacePolicy,
}

impl SliceAssigner {
    pub fn new(classifier: ModulePathClassifier, policy: PublicSurfacePolicy) -> Self {
        Self { classifier, policy }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            ModulePathClassifier::from_config(config),
            PublicSurfacePolicy::from_config(config),
        )
    }

    pub fn assign(&self, unit: &CodeUnit) -> SliceIdentifier {
        self.classify_unit(unit).slice
    }

    pub fn layer(&self, unit: &CodeUnit) -> Layer {
        self.classify_unit(unit).layer
    }

    pub fn classify_unit(&self, unit: &CodeUnit) -> Classification {
        if unit.is_malformed() {
            tracing::warn!("code unit '{}' has no namespace path; treating it as non-modular", unit.name);
            return Classification::non_module();
        }
        self.classify_path(&unit.path)
    }

    pub fn classify_path<S: AsRef<str>>(&self, path: &[S]) -> Classification {
        let Some(descriptor) = self.classifier.classify(path) else {
            return Classification::non_module();
        };

        if self.policy.is_public(descriptor.subpackage.as_deref()) {
            Classification {
                descriptor: Some(descriptor),
                layer: Layer::PublicModule,
                slice: SliceIdentifier::Ignored,
            }
        } else {
            let slice = SliceIdentifier::Named(descriptor.module.clone());
            Classification {
                descriptor: Some(descriptor),
                layer: Layer::NonPublicModule,
                slice,
            }
        }
    }
}

/// Classification of every unit in a graph, indexed by unit id.
#[derive(Debug, Clone)]
pub struct ClassificationTable {
    entries: Vec<Classification>,
}

impl ClassificationTable {
    /// Classify each unit once; units sharing a path share one computation.
    pub fn build(graph: &DependencyGraph, assigner: &SliceAssigner) -> Self {
        let mut by_path: HashMap<&[String], Classification> = HashMap::new();
        let mut entries = Vec::with_capacity(graph.unit_count());

        for (_, unit) in graph.units() {
            let classification = if unit.is_malformed() {
                assigner.classify_unit(unit)
            } else {
                by_path
                    .entry(unit.path.as_slice())
                    .or_insert_with(|| assigner.classify_path(&unit.path))
                    .clone()
            };
            tracing::debug!("{} -> slice {}", unit.name, classification.slice);
            entries.push(classification);
        }

        Self { entries }
    }

    pub fn get(&self, id: UnitId) -> &Classification {
        &self.entries[id.index()]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
