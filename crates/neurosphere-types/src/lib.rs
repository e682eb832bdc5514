// ─────────────────────────────────────────────────────────────────────
// Neurosphere — Orbital Engine Types
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Type definitions, configuration, and error hierarchy for the
//! Neurosphere orbital engine — spherical-manifold embedding
//! propagation with adaptive annealing and dynamic rewiring.

pub mod config;
pub mod error;
pub mod metrics;

pub use config::{OrbitalConfig, RingConfig};
pub use error::{NeurosphereError, NeurosphereResult};
pub use metrics::{PropagationMetrics, ValidationReport};
