// ─────────────────────────────────────────────────────────────────────
// Neurosphere — Multimodal Bridge Manager
// ─────────────────────────────────────────────────────────────────────
//! Bridged subgraph topology.
//!
//! Concept and visual subgraphs stay disjoint; explicit resonance
//! bridges connect them across the modality boundary. The resonance
//! weight table is owned per graph, so concurrent sessions with
//! different tuning (amplified vs muted) cannot interfere.

use serde::{Deserialize, Serialize};

use neurosphere_types::NeurosphereResult;

use crate::edge::{Edge, EdgeKind};
use crate::graph::SemanticGraph;
use crate::node::{Node, NodeKind, VisualFamily};

/// One cross-modal association: concept term × visual family → weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResonanceRule {
    /// Concept term matched by containment against `concept:<term>` ids.
    pub concept: String,
    /// Visual family matched exactly against the node kind.
    pub family: VisualFamily,
    /// Bridge weight in [0, 1].
    pub weight: f64,
}

impl ResonanceRule {
    pub fn new(concept: impl Into<String>, family: VisualFamily, weight: f64) -> Self {
        Self {
            concept: concept.into(),
            family,
            weight,
        }
    }
}

/// Cross-modal resonance lookup table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResonanceTable {
    pub rules: Vec<ResonanceRule>,
}

impl Default for ResonanceTable {
    fn default() -> Self {
        Self {
            rules: vec![
                ResonanceRule::new("moody", VisualFamily::Lighting, 0.85),
                ResonanceRule::new("dramatic", VisualFamily::Lighting, 0.80),
                ResonanceRule::new("serene", VisualFamily::Lighting, 0.75),
                ResonanceRule::new("urban", VisualFamily::Composition, 0.80),
                ResonanceRule::new("portrait", VisualFamily::Composition, 0.85),
                ResonanceRule::new("landscape", VisualFamily::Composition, 0.85),
                ResonanceRule::new("shallow", VisualFamily::Depth, 0.80),
                ResonanceRule::new("bokeh", VisualFamily::Depth, 0.85),
                ResonanceRule::new("dynamic", VisualFamily::Motion, 0.80),
                ResonanceRule::new("static", VisualFamily::Motion, 0.75),
            ],
        }
    }
}

/// Bridged concept/visual graph pair.
#[derive(Debug, Clone)]
pub struct MultimodalGraph {
    dim: usize,
    concept_subgraph: SemanticGraph,
    visual_subgraph: SemanticGraph,
    resonance_bridges: Vec<Edge>,
    table: ResonanceTable,
}

impl MultimodalGraph {
    pub fn new(dim: usize, table: ResonanceTable) -> Self {
        Self {
            dim,
            concept_subgraph: SemanticGraph::new(dim),
            visual_subgraph: SemanticGraph::new(dim),
            resonance_bridges: Vec::new(),
            table,
        }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn concept_subgraph(&self) -> &SemanticGraph {
        &self.concept_subgraph
    }

    pub fn concept_subgraph_mut(&mut self) -> &mut SemanticGraph {
        &mut self.concept_subgraph
    }

    pub fn visual_subgraph(&self) -> &SemanticGraph {
        &self.visual_subgraph
    }

    pub fn visual_subgraph_mut(&mut self) -> &mut SemanticGraph {
        &mut self.visual_subgraph
    }

    pub fn resonance_bridges(&self) -> &[Edge] {
        &self.resonance_bridges
    }

    pub fn add_concept_node(&mut self, mut node: Node) -> NeurosphereResult<()> {
        node.metadata.insert("subgraph".into(), "concept".into());
        self.concept_subgraph.add_node(node)
    }

    pub fn add_visual_node(&mut self, mut node: Node) -> NeurosphereResult<()> {
        node.metadata.insert("subgraph".into(), "visual".into());
        self.visual_subgraph.add_node(node)
    }

    /// Create one explicit resonance bridge between a concept node and
    /// a visual node.
    pub fn add_resonance_bridge(
        &mut self,
        concept_id: impl Into<String>,
        visual_id: impl Into<String>,
        weight: f64,
    ) {
        self.resonance_bridges
            .push(Edge::new(concept_id, visual_id, weight, EdgeKind::Resonance));
    }

    /// Apply the resonance table: one bridge per (concept, visual) node
    /// pair matching a rule. All-pairs within a matching family, not a
    /// 1:1 pairing.
    pub fn connect_resonances(&mut self) {
        let mut bridges = Vec::new();
        for rule in &self.table.rules {
            let concept_tag = format!("concept:{}", rule.concept);
            for concept_node in self.concept_subgraph.nodes() {
                if !concept_node.id.contains(&concept_tag) {
                    continue;
                }
                for visual_node in self.visual_subgraph.nodes() {
                    if visual_node.kind == NodeKind::Visual(rule.family.clone()) {
                        bridges.push((concept_node.id.clone(), visual_node.id.clone(), rule.weight));
                    }
                }
            }
        }
        log::debug!("resonance table produced {} bridges", bridges.len());
        for (concept_id, visual_id, weight) in bridges {
            self.add_resonance_bridge(concept_id, visual_id, weight);
        }
    }

    /// Bias reasoning toward visual signal by scaling every bridge.
    pub fn amplify_visual_cortex(&mut self, factor: f64) {
        for bridge in self.resonance_bridges.iter_mut() {
            bridge.weight *= factor;
        }
    }

    /// Zero every bridge weight to save compute on pure-text tasks.
    pub fn mute_visual_cortex(&mut self) {
        for bridge in self.resonance_bridges.iter_mut() {
            bridge.weight = 0.0;
        }
    }

    /// Flatten both subgraphs and the bridges into one propagation
    /// input. The merge is a derived, disposable view: mutating it does
    /// not write back to this graph.
    pub fn merge_for_propagation(&self) -> NeurosphereResult<SemanticGraph> {
        let mut merged = SemanticGraph::new(self.dim);

        for node in self.concept_subgraph.nodes() {
            merged.add_node(node.clone())?;
        }
        for node in self.visual_subgraph.nodes() {
            merged.add_node(node.clone())?;
        }

        for edge in self.concept_subgraph.edges() {
            merged.add_edge(
                edge.source_id.clone(),
                edge.target_id.clone(),
                edge.weight,
                edge.kind,
            );
        }
        for edge in self.visual_subgraph.edges() {
            merged.add_edge(
                edge.source_id.clone(),
                edge.target_id.clone(),
                edge.weight,
                edge.kind,
            );
        }
        for bridge in &self.resonance_bridges {
            merged.add_edge(
                bridge.source_id.clone(),
                bridge.target_id.clone(),
                bridge.weight,
                EdgeKind::Resonance,
            );
        }

        Ok(merged)
    }
}
