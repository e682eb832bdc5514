// ─────────────────────────────────────────────────────────────────────
// Neurosphere — Node Model
// ─────────────────────────────────────────────────────────────────────
//! Typed node taxonomy for the semantic graph.
//!
//! Node kinds are a closed tagged variant; visual-feature families get
//! an explicit `Other` extension point instead of open-ended string
//! prefixes, so the resonance lookup table stays type-checked.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Concentric structural ring assigned by the centrality classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ring {
    Inner,
    Middle,
    Outer,
}

impl fmt::Display for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ring::Inner => write!(f, "inner"),
            Ring::Middle => write!(f, "middle"),
            Ring::Outer => write!(f, "outer"),
        }
    }
}

/// Visual-feature family taxonomy.
///
/// `Other` is the extension point for feature families introduced by
/// downstream extractors without touching this enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualFamily {
    Subject,
    Composition,
    Lighting,
    Mood,
    Style,
    Texture,
    Perspective,
    Depth,
    Motion,
    Detail,
    Contrast,
    Color,
    Other(String),
}

impl VisualFamily {
    /// Short tag without the `visual:` prefix.
    pub fn tag(&self) -> &str {
        match self {
            VisualFamily::Subject => "subject",
            VisualFamily::Composition => "composition",
            VisualFamily::Lighting => "lighting",
            VisualFamily::Mood => "mood",
            VisualFamily::Style => "style",
            VisualFamily::Texture => "texture",
            VisualFamily::Perspective => "perspective",
            VisualFamily::Depth => "depth",
            VisualFamily::Motion => "motion",
            VisualFamily::Detail => "detail",
            VisualFamily::Contrast => "contrast",
            VisualFamily::Color => "color",
            VisualFamily::Other(tag) => tag,
        }
    }
}

impl fmt::Display for VisualFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "visual:{}", self.tag())
    }
}

/// Node kind — closed tagged variant over the graph's node taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Concept,
    Action,
    Relation,
    Visual(VisualFamily),
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Concept => write!(f, "concept"),
            NodeKind::Action => write!(f, "action"),
            NodeKind::Relation => write!(f, "relation"),
            NodeKind::Visual(family) => write!(f, "{family}"),
        }
    }
}

/// Node on the spherical manifold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique id within a graph.
    pub id: String,
    pub kind: NodeKind,
    /// Human-readable value (term or feature value).
    pub value: String,
    /// Unit vector on S^(D-1).
    pub position: Vec<f64>,
    /// Transient importance; decays geometrically each cycle.
    pub activation: f64,
    pub ring: Ring,
    /// Open provenance map (e.g. `is_input`, `subgraph`, `confidence`).
    pub metadata: HashMap<String, String>,
}

impl Node {
    pub fn new(
        id: impl Into<String>,
        kind: NodeKind,
        value: impl Into<String>,
        position: Vec<f64>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            value: value.into(),
            position,
            activation: 0.0,
            ring: Ring::Middle,
            metadata: HashMap::new(),
        }
    }

    pub fn with_ring(mut self, ring: Ring) -> Self {
        self.ring = ring;
        self
    }

    /// Whether this node was flagged as a raw input by its producer.
    ///
    /// Only the exact metadata value `"true"` counts, so a caller can
    /// record `"false"` without changing classification.
    pub fn is_input(&self) -> bool {
        self.metadata.get("is_input").is_some_and(|v| v == "true")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(NodeKind::Concept.to_string(), "concept");
        assert_eq!(
            NodeKind::Visual(VisualFamily::Lighting).to_string(),
            "visual:lighting"
        );
        assert_eq!(
            NodeKind::Visual(VisualFamily::Other("halo".into())).to_string(),
            "visual:halo"
        );
    }

    #[test]
    fn test_ring_display() {
        assert_eq!(Ring::Inner.to_string(), "inner");
        assert_eq!(Ring::Outer.to_string(), "outer");
    }

    #[test]
    fn test_node_defaults() {
        let node = Node::new("concept:moody", NodeKind::Concept, "moody", vec![1.0, 0.0]);
        assert_eq!(node.ring, Ring::Middle);
        assert_eq!(node.activation, 0.0);
        assert!(!node.is_input());
    }

    #[test]
    fn test_is_input_exact_value() {
        let mut node = Node::new("n", NodeKind::Concept, "n", vec![1.0]);
        node.metadata.insert("is_input".into(), "false".into());
        assert!(!node.is_input());
        node.metadata.insert("is_input".into(), "true".into());
        assert!(node.is_input());
    }
}
