// ─────────────────────────────────────────────────────────────────────
// Neurosphere — Regime Validation
// ─────────────────────────────────────────────────────────────────────
//! Checks a finished run against the optimal operating regime.
//!
//! Every check is an independent boolean; a failed check is a
//! diagnostic, not an abort.

use neurosphere_graph::SemanticGraph;
use neurosphere_types::{PropagationMetrics, ValidationReport};

use crate::manifold::max_norm_deviation;

/// Gentle-fusion band for pairwise uplift (exclusive bounds).
const UPLIFT_MIN: f64 = 0.00001;
const UPLIFT_MAX: f64 = 0.001;

/// Structure-formation floor for the clustering coefficient.
const CLUSTERING_MIN: f64 = 0.3;

/// Unit-sphere tolerance on per-row norms.
const NORM_TOLERANCE: f64 = 1e-5;

/// Validate final positions and kernel metrics against the fixed
/// regime bands.
pub fn validate_dynamics(
    positions: &[f64],
    graph: &SemanticGraph,
    metrics: &PropagationMetrics,
) -> ValidationReport {
    let n = graph.node_count();
    let dim = graph.dim();

    let on_unit_sphere = positions.len() == n * dim
        && max_norm_deviation(positions, n, dim) <= NORM_TOLERANCE;

    ValidationReport {
        uplift_in_range: metrics.pairwise_uplift > UPLIFT_MIN
            && metrics.pairwise_uplift < UPLIFT_MAX,
        clustering_sufficient: metrics.clustering_coefficient > CLUSTERING_MIN,
        converged: metrics.converged,
        on_unit_sphere,
    }
}
