// ─────────────────────────────────────────────────────────────────────
// Neurosphere — Orbital Propagation Kernel
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Iterative embedding propagation on the unit hypersphere.
//!
//! Per cycle:
//!   1. Sigmoid annealing schedule (temperature → rewiring threshold)
//!   2. Gravitational message passing: S = P·Pᵗ, G = S·P
//!   3. Tangential velocity: tangent-plane projection of G
//!   4. Position update + L2 reprojection onto the sphere
//!   5. Dynamic rewiring of semantic edges above the threshold
//!   6. Activation decay
//!   7. Energy recording + plateau detection (Attractor Well)
//!
//! # Invariants
//!
//! 1. **Unit sphere**: every position row has L2 norm 1 after every
//!    cycle; a row that cannot be reprojected is a typed degeneracy
//!    error, never a NaN.
//! 2. **Typed structural failures**: an edge referencing an unknown
//!    node id fails the run with a `DanglingEdge` error before any
//!    lookup is dereferenced.
//! 3. **Self-consistent report**: `converged` is true iff
//!    `convergence_cycle < cycles`.
//!
//! All computation is synchronous and lock-free; one graph instance
//! has one owner per run.

pub mod engine;
pub mod manifold;
pub mod rings;
pub mod validate;

pub use engine::{
    clustering_coefficient, rewire_semantic_edges, rewire_threshold, system_energy, temperature,
    CycleLog, OrbitalEngine,
};
pub use manifold::{
    gravity_field, max_norm_deviation, normalize_rows, pairwise_uplift, similarity_matrix,
    tangent_project,
};
pub use rings::{RingBand, RingClassifier, RingReport, RingStyle};
pub use validate::validate_dynamics;
