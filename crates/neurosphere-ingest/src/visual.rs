// ─────────────────────────────────────────────────────────────────────
// Neurosphere — Visual Feature Extraction
// ─────────────────────────────────────────────────────────────────────
//! Visual primitives extracted from free-text image descriptions.
//!
//! Fixed keyword families for lighting, mood, composition, depth and
//! perspective; first matching entry wins per family, at most one node
//! per family. A production deployment would put a vision model behind
//! the same surface; the keyword lexicon gives deterministic output
//! for testing and text-only operation.

use serde::{Deserialize, Serialize};

use neurosphere_graph::{Node, NodeKind, Ring, TextEmbedder, VisualFamily};
use neurosphere_types::NeurosphereResult;

/// One keyword family: canonical values with their trigger keywords.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordFamily {
    pub family: VisualFamily,
    /// Extraction confidence recorded for every match in this family.
    pub confidence: f64,
    /// `(canonical value, trigger keywords)` in priority order.
    pub entries: Vec<(String, Vec<String>)>,
}

impl KeywordFamily {
    fn entry(value: &str, keywords: &[&str]) -> (String, Vec<String>) {
        (
            value.to_string(),
            keywords.iter().map(|k| k.to_string()).collect(),
        )
    }
}

/// Keyword families used by the extractor — explicit configuration,
/// not a module global.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualLexicon {
    pub families: Vec<KeywordFamily>,
}

impl Default for VisualLexicon {
    fn default() -> Self {
        Self {
            families: vec![
                KeywordFamily {
                    family: VisualFamily::Lighting,
                    confidence: 0.85,
                    entries: vec![
                        KeywordFamily::entry(
                            "golden hour",
                            &["dusk", "sunset", "golden", "warm light"],
                        ),
                        KeywordFamily::entry("blue hour", &["twilight", "blue hour", "pre-dawn"]),
                        KeywordFamily::entry("harsh", &["midday", "harsh", "direct sun"]),
                        KeywordFamily::entry("soft", &["overcast", "diffused", "soft light"]),
                        KeywordFamily::entry(
                            "dramatic",
                            &["dramatic", "high contrast", "chiaroscuro"],
                        ),
                    ],
                },
                KeywordFamily {
                    family: VisualFamily::Mood,
                    confidence: 0.80,
                    entries: vec![
                        KeywordFamily::entry("moody", &["moody", "atmospheric", "brooding"]),
                        KeywordFamily::entry("serene", &["serene", "calm", "peaceful"]),
                        KeywordFamily::entry("energetic", &["energetic", "vibrant", "dynamic"]),
                        KeywordFamily::entry(
                            "melancholic",
                            &["melancholic", "somber", "wistful"],
                        ),
                    ],
                },
                KeywordFamily {
                    family: VisualFamily::Composition,
                    confidence: 0.85,
                    entries: vec![
                        KeywordFamily::entry("urban", &["urban", "city", "street", "architecture"]),
                        KeywordFamily::entry(
                            "portrait",
                            &["portrait", "face", "person", "subject"],
                        ),
                        KeywordFamily::entry("landscape", &["landscape", "nature", "scenery"]),
                        KeywordFamily::entry("abstract", &["abstract", "geometric", "pattern"]),
                    ],
                },
                KeywordFamily {
                    family: VisualFamily::Depth,
                    confidence: 0.80,
                    entries: vec![
                        KeywordFamily::entry(
                            "shallow DOF",
                            &["shallow", "dof", "bokeh", "blurred background"],
                        ),
                        KeywordFamily::entry(
                            "deep focus",
                            &["deep focus", "everything sharp", "f/16"],
                        ),
                    ],
                },
                KeywordFamily {
                    family: VisualFamily::Perspective,
                    confidence: 0.75,
                    entries: vec![
                        KeywordFamily::entry("50mm lens", &["50mm", "normal lens"]),
                        KeywordFamily::entry("wide angle", &["wide", "24mm", "16mm", "fisheye"]),
                        KeywordFamily::entry(
                            "telephoto",
                            &["telephoto", "85mm", "200mm", "compressed"],
                        ),
                    ],
                },
            ],
        }
    }
}

/// One extracted visual feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualFeature {
    pub family: VisualFamily,
    pub value: String,
    pub confidence: f64,
}

/// Description → visual-primitive adapter.
pub struct VisualFeatureExtractor {
    lexicon: VisualLexicon,
}

impl Default for VisualFeatureExtractor {
    fn default() -> Self {
        Self::new(VisualLexicon::default())
    }
}

impl VisualFeatureExtractor {
    pub fn new(lexicon: VisualLexicon) -> Self {
        Self { lexicon }
    }

    /// Extract visual features from a text description.
    ///
    /// First match wins per family; at most one feature per family.
    pub fn extract(&self, description: &str) -> Vec<VisualFeature> {
        let desc_lower = description.to_lowercase();
        let mut features = Vec::new();

        for family in &self.lexicon.families {
            for (value, keywords) in &family.entries {
                if keywords.iter().any(|kw| desc_lower.contains(kw.as_str())) {
                    features.push(VisualFeature {
                        family: family.family.clone(),
                        value: value.clone(),
                        confidence: family.confidence,
                    });
                    break;
                }
            }
        }
        features
    }

    /// One visual node per extracted feature, id
    /// `visual:<family>:<value>`, outer ring.
    pub fn nodes(
        &self,
        description: &str,
        embedder: &TextEmbedder,
    ) -> NeurosphereResult<Vec<Node>> {
        let mut nodes = Vec::new();
        for feature in self.extract(description) {
            let id = format!("visual:{}:{}", feature.family.tag(), feature.value);
            let position = embedder.embed(&id)?;
            let mut node = Node::new(
                id,
                NodeKind::Visual(feature.family.clone()),
                feature.value.clone(),
                position,
            )
            .with_ring(Ring::Outer);
            node.metadata
                .insert("confidence".into(), format!("{:.2}", feature.confidence));
            node.metadata
                .insert("source".into(), "text_description".into());
            nodes.push(node);
        }
        Ok(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_golden_hour() {
        let extractor = VisualFeatureExtractor::default();
        let features = extractor.extract("city at dusk");
        assert!(features.contains(&VisualFeature {
            family: VisualFamily::Lighting,
            value: "golden hour".into(),
            confidence: 0.85,
        }));
    }

    #[test]
    fn test_one_feature_per_family() {
        let extractor = VisualFeatureExtractor::default();
        // Both "dusk" (golden hour) and "twilight" (blue hour) present;
        // first entry wins.
        let features = extractor.extract("dusk fading into twilight");
        let lighting: Vec<&VisualFeature> = features
            .iter()
            .filter(|f| f.family == VisualFamily::Lighting)
            .collect();
        assert_eq!(lighting.len(), 1);
        assert_eq!(lighting[0].value, "golden hour");
    }

    #[test]
    fn test_full_scene_families() {
        let extractor = VisualFeatureExtractor::default();
        let features = extractor.extract("moody urban scene at dusk, shallow DOF, 50mm lens");
        let families: Vec<&VisualFamily> = features.iter().map(|f| &f.family).collect();
        assert!(families.contains(&&VisualFamily::Lighting));
        assert!(families.contains(&&VisualFamily::Mood));
        assert!(families.contains(&&VisualFamily::Composition));
        assert!(families.contains(&&VisualFamily::Depth));
        assert!(families.contains(&&VisualFamily::Perspective));
    }

    #[test]
    fn test_no_match_empty() {
        let extractor = VisualFeatureExtractor::default();
        assert!(extractor.extract("xyzzy plugh").is_empty());
    }

    #[test]
    fn test_nodes_shape() {
        let extractor = VisualFeatureExtractor::default();
        let embedder = TextEmbedder::new(16).unwrap();
        let nodes = extractor.nodes("dusk over the city", &embedder).unwrap();
        assert_eq!(nodes.len(), 2); // lighting + composition
        let lighting = nodes
            .iter()
            .find(|n| n.id == "visual:lighting:golden hour")
            .unwrap();
        assert_eq!(lighting.kind, NodeKind::Visual(VisualFamily::Lighting));
        assert_eq!(lighting.ring, Ring::Outer);
        assert_eq!(lighting.metadata.get("confidence").unwrap(), "0.85");
        assert_eq!(lighting.metadata.get("source").unwrap(), "text_description");
    }

    #[test]
    fn test_custom_lexicon() {
        let lexicon = VisualLexicon {
            families: vec![KeywordFamily {
                family: VisualFamily::Other("halo".into()),
                confidence: 0.5,
                entries: vec![KeywordFamily::entry("ring glow", &["halo"])],
            }],
        };
        let extractor = VisualFeatureExtractor::new(lexicon);
        let features = extractor.extract("a halo around the moon");
        assert_eq!(features.len(), 1);
        assert_eq!(features[0].family, VisualFamily::Other("halo".into()));
    }
}
