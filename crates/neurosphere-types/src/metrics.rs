// ─────────────────────────────────────────────────────────────────────
// Neurosphere — Propagation Metrics & Regime Reports
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

/// Summary record produced by one propagation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropagationMetrics {
    /// Cycle at which the energy plateau was detected; equals the cycle
    /// cap when the run never converged.
    pub convergence_cycle: usize,
    /// Last recorded system energy (0.0 for an empty run).
    pub final_energy: f64,
    /// System energy after every executed cycle.
    pub energy_history: Vec<f64>,
    /// Mean cosine similarity over all off-diagonal node pairs.
    pub pairwise_uplift: f64,
    /// Average local clustering coefficient over all nodes.
    pub clustering_coefficient: f64,
    /// True iff the run stopped before the cycle cap.
    pub converged: bool,
}

impl PropagationMetrics {
    /// Number of cycles actually executed.
    pub fn cycles_run(&self) -> usize {
        self.energy_history.len()
    }
}

/// Independent pass/fail checks against the optimal operating regime.
///
/// Diagnostic only — a failed check never aborts processing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Pairwise uplift inside the gentle-fusion band (1e-5, 1e-3).
    pub uplift_in_range: bool,
    /// Clustering coefficient above 0.3 (structure formed).
    pub clustering_sufficient: bool,
    /// Run stopped before the cycle cap.
    pub converged: bool,
    /// Every position row has unit L2 norm within 1e-5.
    pub on_unit_sphere: bool,
}

impl ValidationReport {
    pub fn all_passed(&self) -> bool {
        self.uplift_in_range && self.clustering_sufficient && self.converged && self.on_unit_sphere
    }
}
