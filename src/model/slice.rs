use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Name of a module as it appears in the code base.
///
/// Comparison, ordering and hashing ignore ASCII case; display keeps the original spelling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleName(String);

impl ModuleName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn key(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.bytes().map(|b| b.to_ascii_lowercase())
    }
}

impl PartialEq for ModuleName {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for ModuleName {}

impl Hash for ModuleName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for b in self.key() {
            state.write_u8(b);
        }
        state.write_u8(0xff);
    }
}

impl PartialOrd for ModuleName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ModuleName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(other.key())
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Module and first-level subpackage a unit's path resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    pub module: ModuleName,
    pub subpackage: Option<String>,
}

/// Coarse partition used by the layered-access rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Layer {
    PublicModule,
    NonPublicModule,
    NonModule,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Layer::PublicModule, Layer::NonPublicModule, Layer::NonModule];

    /// Layers allowed to depend on units of `self`.
    ///
    /// Same-layer access is handled separately by the layered rule.
    pub fn allowed_dependents(self) -> &'static [Layer] {
        match self {
            Layer::PublicModule => &[Layer::NonModule, Layer::NonPublicModule],
            Layer::NonPublicModule => &[Layer::PublicModule],
            Layer::NonModule => &[],
        }
    }

    pub fn may_be_accessed_by(self, source: Layer) -> bool {
        self.allowed_dependents().contains(&source)
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layer::PublicModule => write!(f, "PublicModule"),
            Layer::NonPublicModule => write!(f, "NonPublicModule"),
            Layer::NonModule => write!(f, "NonModule"),
        }
    }
}

impl std::str::FromStr for Layer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "publicmodule" | "public" => Ok(Layer::PublicModule),
            "nonpublicmodule" | "nonpublic" | "internal" => Ok(Layer::NonPublicModule),
            "nonmodule" | "nonmodular" => Ok(Layer::NonModule),
            _ => Err(format!("Unknown layer: {}", s)),
        }
    }
}

/// Slice a unit belongs to: the non-public part of one module, or none.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SliceIdentifier {
    Ignored,
    Named(ModuleName),
}

impl fmt::Display for SliceIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliceIdentifier::Ignored => write!(f, "ignored"),
            SliceIdentifier::Named(m) => write!(f, "{}", m),
        }
    }
}
