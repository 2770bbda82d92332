use serde::{Deserialize, Serialize};

use crate::errors::GraphError;

/// Node identifier: the record's position in the input collection.
pub type NodeId = usize;

/// Attributes carried by a graph node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeAttrs {
    /// Display label.
    pub label: String,
    /// Trimmed action text, when the record had one.
    pub action: Option<String>,
    /// Community index assigned by the clustering pass.
    pub group: Option<usize>,
}

impl NodeAttrs {
    /// Node labelled by its action text, falling back to the node id.
    pub fn for_action(id: NodeId, action: Option<&str>) -> Self {
        let action = action.map(str::trim).filter(|a| !a.is_empty());
        Self {
            label: action.map_or_else(|| id.to_string(), str::to_string),
            action: action.map(str::to_string),
            group: None,
        }
    }
}

/// The three edge types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Relatedness only.
    Rst,
    /// Causal only.
    Causal,
    /// Both a relatedness and a causal edge joined this pair.
    Both,
}

impl EdgeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rst => "rst",
            Self::Causal => "causal",
            Self::Both => "both",
        }
    }

    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "rst" => Some(Self::Rst),
            "causal" => Some(Self::Causal),
            "both" => Some(Self::Both),
            _ => None,
        }
    }
}

impl std::fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Edge attributes, tagged by type.
///
/// `Both` always carries both weights; `Rst` never carries a causal weight
/// and `Causal` never carries a relatedness weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EdgeAttrs {
    Rst { weight: f64 },
    Causal { causal_weight: f64 },
    Both { weight: f64, causal_weight: f64 },
}

impl EdgeAttrs {
    pub fn rst(weight: f64) -> Result<Self, GraphError> {
        check_weight("weight", weight)?;
        Ok(Self::Rst { weight })
    }

    pub fn causal(causal_weight: f64) -> Result<Self, GraphError> {
        check_weight("causal_weight", causal_weight)?;
        Ok(Self::Causal { causal_weight })
    }

    pub fn both(weight: f64, causal_weight: f64) -> Result<Self, GraphError> {
        check_weight("weight", weight)?;
        check_weight("causal_weight", causal_weight)?;
        Ok(Self::Both {
            weight,
            causal_weight,
        })
    }

    pub fn kind(&self) -> EdgeKind {
        match self {
            Self::Rst { .. } => EdgeKind::Rst,
            Self::Causal { .. } => EdgeKind::Causal,
            Self::Both { .. } => EdgeKind::Both,
        }
    }

    /// Relatedness strength; present for `rst` and `both`.
    pub fn weight(&self) -> Option<f64> {
        match *self {
            Self::Rst { weight } | Self::Both { weight, .. } => Some(weight),
            Self::Causal { .. } => None,
        }
    }

    /// Causal strength; present for `causal` and `both`.
    pub fn causal_weight(&self) -> Option<f64> {
        match *self {
            Self::Causal { causal_weight } | Self::Both { causal_weight, .. } => {
                Some(causal_weight)
            }
            Self::Rst { .. } => None,
        }
    }

    /// Strongest weight on the edge, whichever field carries it.
    pub fn strength(&self) -> f64 {
        match *self {
            Self::Rst { weight } => weight,
            Self::Causal { causal_weight } => causal_weight,
            Self::Both {
                weight,
                causal_weight,
            } => weight.max(causal_weight),
        }
    }

    /// Attach a causal weight to a relatedness edge.
    ///
    /// `rst -> both` is the only legal upgrade. `both` is terminal, and a
    /// causal edge cannot absorb a second causal insertion.
    pub fn with_causal(
        self,
        source_id: NodeId,
        target_id: NodeId,
        causal_weight: f64,
    ) -> Result<Self, GraphError> {
        match self {
            Self::Rst { weight } => Self::both(weight, causal_weight),
            other => Err(GraphError::InvalidTransition {
                source_id,
                target_id,
                from: other.kind(),
                to: EdgeKind::Both,
            }),
        }
    }
}

fn check_weight(field: &'static str, value: f64) -> Result<(), GraphError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GraphError::InvalidWeight { field, value })
    }
}
