// ─────────────────────────────────────────────────────────────────────
// Neurosphere — Concept Extraction
// ─────────────────────────────────────────────────────────────────────
//! Candidate-term extraction from raw text.
//!
//! Tokenize, drop stopwords and short terms, cap at a fixed count.
//! Each surviving term becomes one concept node with a deterministic
//! random unit-vector position.

use serde::{Deserialize, Serialize};

use neurosphere_graph::{EdgeKind, Node, NodeKind, Ring, SemanticGraph, TextEmbedder};
use neurosphere_types::NeurosphereResult;

/// Seed weight for the all-pairs starting topology of a plain graph;
/// the kernel's own rewiring takes over from the first cycle.
const SEED_EDGE_WEIGHT: f64 = 0.5;

const DEFAULT_STOPWORDS: &[&str] = &[
    "that", "this", "with", "from", "have", "were", "been", "they", "their", "them", "then",
    "than", "when", "what", "where", "which", "while", "will", "would", "could", "should",
    "about", "into", "over", "under", "after", "before", "between", "through", "during",
    "again", "very", "just", "also", "some", "such", "only", "other", "more", "most", "each",
    "because", "does", "doing", "until", "above", "below", "both", "these", "those", "here",
    "there",
];

/// Concept extraction tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConceptConfig {
    /// Terms shorter than this are dropped.
    pub min_term_len: usize,
    /// At most this many terms survive, in order of first appearance.
    pub max_terms: usize,
    pub stopwords: Vec<String>,
}

impl Default for ConceptConfig {
    fn default() -> Self {
        Self {
            min_term_len: 4,
            max_terms: 10,
            stopwords: DEFAULT_STOPWORDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Text → concept-node adapter.
pub struct ConceptExtractor {
    config: ConceptConfig,
}

impl Default for ConceptExtractor {
    fn default() -> Self {
        Self::new(ConceptConfig::default())
    }
}

impl ConceptExtractor {
    pub fn new(config: ConceptConfig) -> Self {
        Self { config }
    }

    /// Extract the candidate-term list from raw text.
    ///
    /// Terms are lowercased, deduplicated preserving first appearance,
    /// and capped at `max_terms`.
    pub fn extract_terms(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        let mut terms: Vec<String> = Vec::new();
        for token in lower.split(|c: char| !c.is_alphanumeric()) {
            if token.len() < self.config.min_term_len {
                continue;
            }
            if self.config.stopwords.iter().any(|s| s == token) {
                continue;
            }
            if terms.iter().any(|t| t == token) {
                continue;
            }
            terms.push(token.to_string());
            if terms.len() == self.config.max_terms {
                break;
            }
        }
        terms
    }

    /// One concept node per term, id `concept:<term>`, middle ring.
    pub fn nodes(&self, text: &str, embedder: &TextEmbedder) -> NeurosphereResult<Vec<Node>> {
        let mut nodes = Vec::new();
        for term in self.extract_terms(text) {
            let position = embedder.embed(&term)?;
            nodes.push(
                Node::new(format!("concept:{term}"), NodeKind::Concept, term, position)
                    .with_ring(Ring::Middle),
            );
        }
        Ok(nodes)
    }

    /// Build a plain (non-multimodal) concept graph: every pair of
    /// concept nodes is linked once with a semantic seed edge.
    pub fn build_graph(
        &self,
        text: &str,
        embedder: &TextEmbedder,
    ) -> NeurosphereResult<SemanticGraph> {
        let mut graph = SemanticGraph::new(embedder.dim());
        let nodes = self.nodes(text, embedder)?;
        let ids: Vec<String> = nodes.iter().map(|n| n.id.clone()).collect();
        for node in nodes {
            graph.add_node(node)?;
        }
        for i in 0..ids.len() {
            for j in (i + 1)..ids.len() {
                graph.add_edge(
                    ids[i].clone(),
                    ids[j].clone(),
                    SEED_EDGE_WEIGHT,
                    EdgeKind::Semantic,
                );
            }
        }
        log::debug!(
            "concept graph: {} nodes, {} seed edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedder() -> TextEmbedder {
        TextEmbedder::new(16).unwrap()
    }

    #[test]
    fn test_short_terms_dropped() {
        let extractor = ConceptExtractor::default();
        let terms = extractor.extract_terms("a fox ran far away");
        assert_eq!(terms, vec!["away"]);
    }

    #[test]
    fn test_stopwords_dropped() {
        let extractor = ConceptExtractor::default();
        let terms = extractor.extract_terms("this scene with those shadows");
        assert_eq!(terms, vec!["scene", "shadows"]);
    }

    #[test]
    fn test_dedupe_preserves_first_appearance() {
        let extractor = ConceptExtractor::default();
        let terms = extractor.extract_terms("neon rain, neon glow");
        assert_eq!(terms, vec!["neon", "rain", "glow"]);
    }

    #[test]
    fn test_cap_at_max_terms() {
        let extractor = ConceptExtractor::new(ConceptConfig {
            max_terms: 2,
            ..ConceptConfig::default()
        });
        let terms = extractor.extract_terms("misty harbor lights flicker");
        assert_eq!(terms.len(), 2);
        assert_eq!(terms, vec!["misty", "harbor"]);
    }

    #[test]
    fn test_tokenizer_splits_punctuation() {
        let extractor = ConceptExtractor::default();
        let terms = extractor.extract_terms("moody,urban/running");
        assert_eq!(terms, vec!["moody", "urban", "running"]);
    }

    #[test]
    fn test_nodes_shape() {
        let extractor = ConceptExtractor::default();
        let nodes = extractor.nodes("moody urban running", &embedder()).unwrap();
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0].id, "concept:moody");
        assert_eq!(nodes[0].kind, NodeKind::Concept);
        assert_eq!(nodes[0].ring, Ring::Middle);
        let norm: f64 = nodes[0].position.iter().map(|x| x * x).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_plain_graph_all_pairs_seeded() {
        let extractor = ConceptExtractor::default();
        let graph = extractor
            .build_graph("moody urban running scene", &embedder())
            .unwrap();
        assert_eq!(graph.node_count(), 4);
        // C(4, 2) seed edges, all semantic, all weight 0.5.
        assert_eq!(graph.edge_count_of_kind(EdgeKind::Semantic), 6);
        assert!(graph.edges().all(|e| (e.weight - 0.5).abs() < 1e-12));
    }

    #[test]
    fn test_empty_text_empty_graph() {
        let extractor = ConceptExtractor::default();
        let graph = extractor.build_graph("", &embedder()).unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }
}
