use super::NodeKind;
use crate::error::FlowError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Recommendation strategy for an AI-Personalization node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    #[default]
    Default,
    Collaborative,
    Content,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Default,
        Algorithm::Collaborative,
        Algorithm::Content,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Algorithm::Default => "default",
            Algorithm::Collaborative => "collaborative",
            Algorithm::Content => "content",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Default => "Default",
            Algorithm::Collaborative => "Collaborative Filtering",
            Algorithm::Content => "Content-Based",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.id() == s)
            .ok_or_else(|| FlowError::UnknownAlgorithm(s.to_string()))
    }
}

/// The type-specific data attached to a node.
///
/// The variant is fixed by the node's [`NodeKind`] at creation time; only the
/// contents change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Properties {
    Empty,
    Catalogue { products: Vec<String> },
    AiPersonalization { algorithm: Algorithm },
    MultiPath { paths: Vec<String> },
}

impl Properties {
    /// The default bag for a freshly created node of `kind`.
    pub fn for_kind(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Catalogue => Properties::Catalogue {
                products: Vec::new(),
            },
            NodeKind::AiPersonalization => Properties::AiPersonalization {
                algorithm: Algorithm::default(),
            },
            NodeKind::MultiPath => Properties::MultiPath { paths: Vec::new() },
            _ => Properties::Empty,
        }
    }

    /// Whether this bag has the shape `kind` expects.
    pub fn matches(&self, kind: NodeKind) -> bool {
        match (self, kind) {
            (Properties::Catalogue { .. }, NodeKind::Catalogue)
            | (Properties::AiPersonalization { .. }, NodeKind::AiPersonalization)
            | (Properties::MultiPath { .. }, NodeKind::MultiPath) => true,
            (Properties::Empty, kind) => Properties::for_kind(kind) == Properties::Empty,
            _ => false,
        }
    }

    pub fn products(&self) -> Option<&[String]> {
        match self {
            Properties::Catalogue { products } => Some(products.as_slice()),
            _ => None,
        }
    }

    pub fn paths(&self) -> Option<&[String]> {
        match self {
            Properties::MultiPath { paths } => Some(paths.as_slice()),
            _ => None,
        }
    }

    pub fn algorithm(&self) -> Option<Algorithm> {
        match self {
            Properties::AiPersonalization { algorithm } => Some(*algorithm),
            _ => None,
        }
    }
}
