// ─────────────────────────────────────────────────────────────────────
// Neurosphere — Feature Ingestion Adapters
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Pure, side-effect-free adapters turning raw text and image
//! descriptions into typed graph nodes with random unit-vector
//! initial positions.
//!
//! All lookup tables (stopwords, keyword families, resonance rules)
//! are explicit configuration values, not module globals, so
//! concurrent sessions with different tuning never interfere.

pub mod concepts;
pub mod pipeline;
pub mod visual;

pub use concepts::{ConceptConfig, ConceptExtractor};
pub use pipeline::ScenePipeline;
pub use visual::{KeywordFamily, VisualFeature, VisualFeatureExtractor, VisualLexicon};
