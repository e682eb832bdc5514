// ─────────────────────────────────────────────────────────────────────
// Neurosphere — Edge Arena
// ─────────────────────────────────────────────────────────────────────
//! Edges indexed by kind.
//!
//! The kernel rewrites the entire semantic layer every cycle, so
//! semantic edges get their own vector: rewiring clears one arena
//! instead of scanning and filtering the full edge list, keeping a
//! cycle's cost at O(N²).

use serde::{Deserialize, Serialize};

/// Edge kind. Semantic edges are rewritten each propagation cycle;
/// structural and resonance edges are stable unless explicitly mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Structural,
    Semantic,
    Resonance,
}

/// Weighted connection between two nodes.
///
/// Directed by construction; traversal treats both directions alike.
/// Multi-edges between the same pair are allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source_id: String,
    pub target_id: String,
    pub weight: f64,
    pub kind: EdgeKind,
}

impl Edge {
    pub fn new(
        source_id: impl Into<String>,
        target_id: impl Into<String>,
        weight: f64,
        kind: EdgeKind,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            target_id: target_id.into(),
            weight,
            kind,
        }
    }
}

/// Edge storage indexed by kind, insertion-ordered within a kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EdgeArena {
    structural: Vec<Edge>,
    semantic: Vec<Edge>,
    resonance: Vec<Edge>,
}

impl EdgeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, edge: Edge) {
        match edge.kind {
            EdgeKind::Structural => self.structural.push(edge),
            EdgeKind::Semantic => self.semantic.push(edge),
            EdgeKind::Resonance => self.resonance.push(edge),
        }
    }

    /// Drop every semantic edge, keeping structural and resonance.
    pub fn clear_semantic(&mut self) {
        self.semantic.clear();
    }

    /// All edges: structural, then semantic, then resonance.
    pub fn iter(&self) -> impl Iterator<Item = &Edge> {
        self.structural
            .iter()
            .chain(self.semantic.iter())
            .chain(self.resonance.iter())
    }

    pub fn iter_kind(&self, kind: EdgeKind) -> impl Iterator<Item = &Edge> {
        match kind {
            EdgeKind::Structural => self.structural.iter(),
            EdgeKind::Semantic => self.semantic.iter(),
            EdgeKind::Resonance => self.resonance.iter(),
        }
    }

    pub fn len(&self) -> usize {
        self.structural.len() + self.semantic.len() + self.resonance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind_len(&self, kind: EdgeKind) -> usize {
        match kind {
            EdgeKind::Structural => self.structural.len(),
            EdgeKind::Semantic => self.semantic.len(),
            EdgeKind::Resonance => self.resonance.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena_with_one_of_each() -> EdgeArena {
        let mut arena = EdgeArena::new();
        arena.push(Edge::new("a", "b", 1.0, EdgeKind::Structural));
        arena.push(Edge::new("b", "c", 0.7, EdgeKind::Semantic));
        arena.push(Edge::new("a", "c", 0.85, EdgeKind::Resonance));
        arena
    }

    #[test]
    fn test_push_routes_by_kind() {
        let arena = arena_with_one_of_each();
        assert_eq!(arena.kind_len(EdgeKind::Structural), 1);
        assert_eq!(arena.kind_len(EdgeKind::Semantic), 1);
        assert_eq!(arena.kind_len(EdgeKind::Resonance), 1);
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn test_clear_semantic_keeps_others() {
        let mut arena = arena_with_one_of_each();
        arena.clear_semantic();
        assert_eq!(arena.kind_len(EdgeKind::Semantic), 0);
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_iter_order() {
        let arena = arena_with_one_of_each();
        let kinds: Vec<EdgeKind> = arena.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![EdgeKind::Structural, EdgeKind::Semantic, EdgeKind::Resonance]
        );
    }

    #[test]
    fn test_multi_edges_allowed() {
        let mut arena = EdgeArena::new();
        arena.push(Edge::new("a", "b", 0.5, EdgeKind::Semantic));
        arena.push(Edge::new("a", "b", 0.9, EdgeKind::Semantic));
        assert_eq!(arena.kind_len(EdgeKind::Semantic), 2);
    }
}
