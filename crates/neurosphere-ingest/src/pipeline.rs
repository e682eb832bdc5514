// ─────────────────────────────────────────────────────────────────────
// Neurosphere — Scene Pipeline
// ─────────────────────────────────────────────────────────────────────
//! Assembles propagation-ready graphs from raw inputs.
//!
//! One pipeline instance owns its extractors, embedder and resonance
//! table; two pipelines with different tuning are fully independent.

use neurosphere_graph::{MultimodalGraph, ResonanceTable, SemanticGraph, TextEmbedder};
use neurosphere_types::NeurosphereResult;

use crate::concepts::ConceptExtractor;
use crate::visual::VisualFeatureExtractor;

/// End-to-end graph assembly: text (and optional image description)
/// in, graph out.
pub struct ScenePipeline {
    concepts: ConceptExtractor,
    visual: VisualFeatureExtractor,
    embedder: TextEmbedder,
    table: ResonanceTable,
}

impl ScenePipeline {
    pub fn new(
        concepts: ConceptExtractor,
        visual: VisualFeatureExtractor,
        embedder: TextEmbedder,
        table: ResonanceTable,
    ) -> Self {
        Self {
            concepts,
            visual,
            embedder,
            table,
        }
    }

    /// Pipeline with default extractors and resonance table.
    pub fn with_dim(dim: usize) -> NeurosphereResult<Self> {
        Ok(Self::new(
            ConceptExtractor::default(),
            VisualFeatureExtractor::default(),
            TextEmbedder::new(dim)?,
            ResonanceTable::default(),
        ))
    }

    pub fn embedder(&self) -> &TextEmbedder {
        &self.embedder
    }

    /// Plain concept graph with the all-pairs seed topology.
    pub fn concept_graph(&self, text: &str) -> NeurosphereResult<SemanticGraph> {
        self.concepts.build_graph(text, &self.embedder)
    }

    /// Bridged multimodal graph; visual subgraph stays empty when no
    /// image description is supplied.
    pub fn multimodal_graph(
        &self,
        text: &str,
        image_description: Option<&str>,
    ) -> NeurosphereResult<MultimodalGraph> {
        let mut mm = MultimodalGraph::new(self.embedder.dim(), self.table.clone());

        for node in self.concepts.nodes(text, &self.embedder)? {
            mm.add_concept_node(node)?;
        }
        if let Some(description) = image_description {
            for node in self.visual.nodes(description, &self.embedder)? {
                mm.add_visual_node(node)?;
            }
        }
        mm.connect_resonances();

        log::debug!(
            "multimodal graph: {} concept, {} visual, {} bridges",
            mm.concept_subgraph().node_count(),
            mm.visual_subgraph().node_count(),
            mm.resonance_bridges().len()
        );
        Ok(mm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neurosphere_graph::EdgeKind;
    use neurosphere_orbital::{OrbitalEngine, RingClassifier};
    use neurosphere_types::{OrbitalConfig, RingConfig};

    fn pipeline() -> ScenePipeline {
        ScenePipeline::with_dim(32).unwrap()
    }

    #[test]
    fn test_concept_graph_seeded() {
        let graph = pipeline().concept_graph("moody urban running scene").unwrap();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count_of_kind(EdgeKind::Semantic), 6);
    }

    #[test]
    fn test_multimodal_without_image() {
        let mm = pipeline()
            .multimodal_graph("moody urban running scene", None)
            .unwrap();
        assert_eq!(mm.visual_subgraph().node_count(), 0);
        assert!(mm.resonance_bridges().is_empty());
    }

    #[test]
    fn test_multimodal_bridged_scene() {
        let mm = pipeline()
            .multimodal_graph(
                "moody urban running scene",
                Some("dusk, shallow DOF, 50mm lens"),
            )
            .unwrap();
        assert_eq!(mm.concept_subgraph().node_count(), 4);
        // dusk → lighting, shallow → depth, 50mm → perspective.
        assert_eq!(mm.visual_subgraph().node_count(), 3);
        // Only the moody × lighting rule finds both endpoints.
        assert_eq!(mm.resonance_bridges().len(), 1);
        assert_eq!(mm.resonance_bridges()[0].source_id, "concept:moody");
    }

    #[test]
    fn test_end_to_end_propagation_and_rings() {
        let pipeline = pipeline();
        let mm = pipeline
            .multimodal_graph(
                "moody urban running scene",
                Some("dusk, shallow DOF, 50mm lens"),
            )
            .unwrap();
        let mut merged = mm.merge_for_propagation().unwrap();

        let config = OrbitalConfig {
            dim: 32,
            cycles: 8,
            ..OrbitalConfig::default()
        };
        let mut engine = OrbitalEngine::new(config).unwrap();
        let metrics = engine.propagate(&mut merged).unwrap();

        assert_eq!(metrics.energy_history.len(), metrics.cycles_run());
        assert!(metrics.final_energy >= 0.0);
        for node in merged.nodes() {
            let norm: f64 = node.position.iter().map(|x| x * x).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < 1e-5);
        }

        let classifier = RingClassifier::new(RingConfig::default()).unwrap();
        classifier.classify_all(&mut merged);
        let report = classifier.ring_report(&merged);
        let total =
            report.inner.node_ids.len() + report.middle.node_ids.len() + report.outer.node_ids.len();
        assert_eq!(total, merged.node_count());
    }
}
