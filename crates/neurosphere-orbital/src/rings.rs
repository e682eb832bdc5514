// ─────────────────────────────────────────────────────────────────────
// Neurosphere — Three-Ring Classifier
// ─────────────────────────────────────────────────────────────────────
//! Post-hoc centrality partition of nodes into three concentric rings:
//!
//! - Inner: high centrality, dense connections (executive core)
//! - Middle: moderate centrality (fusion zone)
//! - Outer: low centrality or raw inputs (sensory horizon)
//!
//! Ring labels are assigned by this classifier, never by propagation.

use serde::{Deserialize, Serialize};

use neurosphere_graph::{Node, Ring, SemanticGraph};
use neurosphere_types::{NeurosphereResult, RingConfig};

/// Fixed presentational styling per ring. Purely descriptive; nothing
/// downstream branches on these values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RingStyle {
    pub color: String,
    pub luminosity: String,
    pub signature: String,
}

/// Nodes grouped under one ring with its styling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RingBand {
    pub node_ids: Vec<String>,
    pub style: RingStyle,
}

/// Full grouping of a graph's nodes by ring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RingReport {
    pub inner: RingBand,
    pub middle: RingBand,
    pub outer: RingBand,
}

fn style_for(ring: Ring) -> RingStyle {
    match ring {
        Ring::Inner => RingStyle {
            color: "white/gold".into(),
            luminosity: "intense".into(),
            signature: "Intense white/gold luminosity; stable, low-drift nodes".into(),
        },
        Ring::Middle => RingStyle {
            color: "violet/blue".into(),
            luminosity: "pulsing".into(),
            signature: "Pulsing violet/blue gradients; high orbital velocity".into(),
        },
        Ring::Outer => RingStyle {
            color: "faint".into(),
            luminosity: "low".into(),
            signature: "Fainter, transient nodes; high turnover".into(),
        },
    }
}

/// Centrality-based ring classifier.
pub struct RingClassifier {
    cfg: RingConfig,
}

impl RingClassifier {
    pub fn new(cfg: RingConfig) -> NeurosphereResult<Self> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    pub fn default_params() -> Self {
        Self {
            cfg: RingConfig::default(),
        }
    }

    /// Classify one node. Centrality is the incident-edge count over
    /// the total node count; priority is inner, then outer, then
    /// middle.
    pub fn classify(&self, graph: &SemanticGraph, node: &Node) -> Ring {
        let node_count = graph.node_count();
        if node_count == 0 {
            return node.ring;
        }
        let edge_count = graph.neighbors(&node.id).len();
        let centrality = edge_count as f64 / node_count as f64;

        if centrality > self.cfg.inner_centrality_threshold
            && edge_count > self.cfg.inner_edge_threshold
        {
            return Ring::Inner;
        }
        if centrality < self.cfg.outer_centrality_threshold || node.is_input() {
            return Ring::Outer;
        }
        Ring::Middle
    }

    /// Relabel every node in place. No-op on an empty graph.
    pub fn classify_all(&self, graph: &mut SemanticGraph) {
        if graph.is_empty() {
            return;
        }
        let rings: Vec<Ring> = graph
            .nodes()
            .iter()
            .map(|node| self.classify(graph, node))
            .collect();
        for (node, ring) in graph.nodes_mut().zip(rings) {
            node.ring = ring;
        }
    }

    /// Group the graph's current ring labels into a styled report.
    pub fn ring_report(&self, graph: &SemanticGraph) -> RingReport {
        let ids_for = |ring: Ring| -> Vec<String> {
            graph
                .nodes()
                .iter()
                .filter(|n| n.ring == ring)
                .map(|n| n.id.clone())
                .collect()
        };
        RingReport {
            inner: RingBand {
                node_ids: ids_for(Ring::Inner),
                style: style_for(Ring::Inner),
            },
            middle: RingBand {
                node_ids: ids_for(Ring::Middle),
                style: style_for(Ring::Middle),
            },
            outer: RingBand {
                node_ids: ids_for(Ring::Outer),
                style: style_for(Ring::Outer),
            },
        }
    }
}
