// ─────────────────────────────────────────────────────────────────────
// Neurosphere — Manifold Graph Model
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Graph substrate for orbital propagation.
//!
//! Nodes live on the unit hypersphere S^(D-1); edges come in three
//! kinds (structural, semantic, resonance) and are stored in a
//! per-kind arena so the kernel's per-cycle semantic rewiring is a
//! bulk clear rather than a full-list filter.
//!
//! The `MultimodalGraph` keeps a concept subgraph and a visual
//! subgraph disjoint, joined only by explicit resonance bridges, and
//! flattens them into a disposable `SemanticGraph` for propagation.

pub mod edge;
pub mod embed;
pub mod graph;
pub mod multimodal;
pub mod node;

pub use edge::{Edge, EdgeArena, EdgeKind};
pub use embed::{SphereRng, TextEmbedder};
pub use graph::SemanticGraph;
pub use multimodal::{MultimodalGraph, ResonanceRule, ResonanceTable};
pub use node::{Node, NodeKind, Ring, VisualFamily};
