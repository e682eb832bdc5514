// ─────────────────────────────────────────────────────────────────────
// Neurosphere — Semantic Graph
// ─────────────────────────────────────────────────────────────────────
//! Graph structure for orbital propagation.
//!
//! Nodes are insertion-ordered; row `i` of the position matrix always
//! belongs to the `i`-th inserted node. A graph instance is owned by a
//! single logical call — there is no internal locking.

use std::collections::HashMap;

use neurosphere_types::{NeurosphereError, NeurosphereResult};

use crate::edge::{Edge, EdgeArena, EdgeKind};
use crate::node::Node;

/// Semantic graph: nodes on S^(dim-1) plus a kind-indexed edge arena.
#[derive(Debug, Clone)]
pub struct SemanticGraph {
    dim: usize,
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
    edges: EdgeArena,
}

impl SemanticGraph {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            nodes: Vec::new(),
            index: HashMap::new(),
            edges: EdgeArena::new(),
        }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a node. An id collision is a programming error and aborts
    /// the operation rather than silently overwriting.
    pub fn add_node(&mut self, node: Node) -> NeurosphereResult<()> {
        if self.index.contains_key(&node.id) {
            log::error!("duplicate node id rejected: {}", node.id);
            return Err(NeurosphereError::DuplicateNode(node.id));
        }
        self.index.insert(node.id.clone(), self.nodes.len());
        self.nodes.push(node);
        Ok(())
    }

    /// Add an edge. Endpoint existence is not validated eagerly;
    /// dangling edges are tolerated structurally and caught by
    /// `check_edges` before any computation dereferences them.
    pub fn add_edge(
        &mut self,
        source_id: impl Into<String>,
        target_id: impl Into<String>,
        weight: f64,
        kind: EdgeKind,
    ) {
        self.edges
            .push(Edge::new(source_id, target_id, weight, kind));
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        let i = *self.index.get(id)?;
        Some(&mut self.nodes[i])
    }

    /// Row index of a node in the position matrix.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.nodes.iter_mut()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    pub fn edges_of_kind(&self, kind: EdgeKind) -> impl Iterator<Item = &Edge> {
        self.edges.iter_kind(kind)
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge_count_of_kind(&self, kind: EdgeKind) -> usize {
        self.edges.kind_len(kind)
    }

    /// Drop every semantic edge (per-cycle rewiring entry point).
    pub fn clear_semantic_edges(&mut self) {
        self.edges.clear_semantic();
    }

    /// Neighbors of a node across both edge directions, one entry per
    /// incident edge (multi-edges yield multiple entries). Endpoints
    /// missing from the graph are skipped here; computations that must
    /// not skip use `check_edges` first.
    pub fn neighbors(&self, node_id: &str) -> Vec<(&Node, f64)> {
        let mut out = Vec::new();
        for edge in self.edges.iter() {
            if edge.source_id == node_id {
                if let Some(node) = self.node(&edge.target_id) {
                    out.push((node, edge.weight));
                }
            } else if edge.target_id == node_id {
                if let Some(node) = self.node(&edge.source_id) {
                    out.push((node, edge.weight));
                }
            }
        }
        out
    }

    /// Verify that every edge endpoint resolves to a node.
    ///
    /// Guarded precondition for propagation and energy computation:
    /// these must fail with a typed error instead of crashing on a
    /// missing lookup.
    pub fn check_edges(&self) -> NeurosphereResult<()> {
        for edge in self.edges.iter() {
            let missing = if !self.index.contains_key(&edge.source_id) {
                Some(&edge.source_id)
            } else if !self.index.contains_key(&edge.target_id) {
                Some(&edge.target_id)
            } else {
                None
            };
            if let Some(missing) = missing {
                log::error!(
                    "dangling edge {} -> {}: unknown node {missing}",
                    edge.source_id,
                    edge.target_id
                );
                return Err(NeurosphereError::DanglingEdge {
                    from: edge.source_id.clone(),
                    target: edge.target_id.clone(),
                    missing: missing.clone(),
                });
            }
        }
        Ok(())
    }

    /// All node positions as a row-major N×dim matrix.
    pub fn positions(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.nodes.len() * self.dim);
        for node in &self.nodes {
            out.extend_from_slice(&node.position);
        }
        out
    }

    /// Bulk position replacement from a row-major N×dim matrix.
    pub fn set_positions(&mut self, positions: &[f64]) -> NeurosphereResult<()> {
        let expected = self.nodes.len() * self.dim;
        if positions.len() != expected {
            return Err(NeurosphereError::Dimension(format!(
                "expected {expected} position values ({} nodes x {}), got {}",
                self.nodes.len(),
                self.dim,
                positions.len()
            )));
        }
        for (i, node) in self.nodes.iter_mut().enumerate() {
            node.position
                .copy_from_slice(&positions[i * self.dim..(i + 1) * self.dim]);
        }
        Ok(())
    }
}
