// ─────────────────────────────────────────────────────────────────────
// Neurosphere — Configuration
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::error::{NeurosphereError, NeurosphereResult};

/// Runtime configuration for the orbital propagation kernel.
///
/// Defaults are the canonical values from the parameter sweeps:
/// eta 0.06, 24 cycles, 512-dimensional embeddings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrbitalConfig {
    /// Embedding dimension D; positions live on S^(D-1).
    pub dim: usize,

    /// Gravitational step size.
    pub eta: f64,

    /// Hard cap on propagation cycles.
    pub cycles: usize,

    /// Energy-plateau tolerance for early stopping.
    pub convergence_threshold: f64,

    /// Per-cycle geometric decay applied to node activations.
    pub activation_decay: f64,

    /// Centre of the sigmoid cooling schedule (in cycles).
    pub anneal_midpoint: f64,

    /// Rewiring threshold at full temperature.
    pub rewire_floor: f64,

    /// Additional threshold gained as the system cools; the bar rises
    /// from `rewire_floor` toward `rewire_floor + rewire_span`.
    pub rewire_span: f64,

    /// Number of trailing energies inspected for a plateau.
    pub convergence_window: usize,

    /// Convergence is not checked before this many cycles have run.
    pub convergence_warmup: usize,
}

impl Default for OrbitalConfig {
    fn default() -> Self {
        Self {
            dim: 512,
            eta: 0.06,
            cycles: 24,
            convergence_threshold: 0.001,
            activation_decay: 0.95,
            anneal_midpoint: 12.0,
            rewire_floor: 0.6,
            rewire_span: 0.3,
            convergence_window: 3,
            convergence_warmup: 5,
        }
    }
}

impl OrbitalConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> NeurosphereResult<()> {
        if self.dim == 0 {
            return Err(NeurosphereError::Config(
                "dim must be >= 1".to_string(),
            ));
        }
        if self.eta <= 0.0 || !self.eta.is_finite() {
            return Err(NeurosphereError::Config(format!(
                "eta must be > 0, got {}",
                self.eta
            )));
        }
        if self.cycles == 0 {
            return Err(NeurosphereError::Config(
                "cycles must be >= 1".to_string(),
            ));
        }
        if self.convergence_threshold <= 0.0 || !self.convergence_threshold.is_finite() {
            return Err(NeurosphereError::Config(format!(
                "convergence_threshold must be > 0, got {}",
                self.convergence_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.activation_decay) {
            return Err(NeurosphereError::Config(format!(
                "activation_decay must be in [0, 1], got {}",
                self.activation_decay
            )));
        }
        if !(0.0..=1.0).contains(&self.rewire_floor) {
            return Err(NeurosphereError::Config(format!(
                "rewire_floor must be in [0, 1], got {}",
                self.rewire_floor
            )));
        }
        if self.rewire_span < 0.0 || self.rewire_floor + self.rewire_span > 1.0 {
            return Err(NeurosphereError::Config(format!(
                "rewire_floor + rewire_span must stay in [0, 1], got {} + {}",
                self.rewire_floor, self.rewire_span
            )));
        }
        if self.convergence_window < 2 {
            return Err(NeurosphereError::Config(format!(
                "convergence_window must be >= 2, got {}",
                self.convergence_window
            )));
        }
        Ok(())
    }

    /// Load from JSON string.
    pub fn from_json(json: &str) -> NeurosphereResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| NeurosphereError::Config(format!("JSON parse error: {e}")))
    }
}

/// Thresholds for the three-ring centrality classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RingConfig {
    /// Inner ring requires centrality strictly above this.
    pub inner_centrality_threshold: f64,

    /// Inner ring additionally requires more incident edges than this.
    pub inner_edge_threshold: usize,

    /// Outer ring catches centrality strictly below this.
    pub outer_centrality_threshold: f64,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            inner_centrality_threshold: 0.8,
            inner_edge_threshold: 10,
            outer_centrality_threshold: 0.3,
        }
    }
}

impl RingConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> NeurosphereResult<()> {
        if !(0.0..=1.0).contains(&self.inner_centrality_threshold) {
            return Err(NeurosphereError::Config(format!(
                "inner_centrality_threshold must be in [0, 1], got {}",
                self.inner_centrality_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.outer_centrality_threshold) {
            return Err(NeurosphereError::Config(format!(
                "outer_centrality_threshold must be in [0, 1], got {}",
                self.outer_centrality_threshold
            )));
        }
        if self.outer_centrality_threshold > self.inner_centrality_threshold {
            return Err(NeurosphereError::Config(format!(
                "outer_centrality_threshold ({}) must not exceed inner_centrality_threshold ({})",
                self.outer_centrality_threshold, self.inner_centrality_threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── OrbitalConfig ─────────────────────────────────────────────

    #[test]
    fn test_default_valid() {
        assert!(OrbitalConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_dim_rejected() {
        let cfg = OrbitalConfig {
            dim: 0,
            ..OrbitalConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_non_positive_eta_rejected() {
        let cfg = OrbitalConfig {
            eta: 0.0,
            ..OrbitalConfig::default()
        };
        assert!(cfg.validate().is_err());
        let cfg = OrbitalConfig {
            eta: -0.1,
            ..OrbitalConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_zero_cycles_rejected() {
        let cfg = OrbitalConfig {
            cycles: 0,
            ..OrbitalConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_non_positive_convergence_threshold_rejected() {
        let cfg = OrbitalConfig {
            convergence_threshold: 0.0,
            ..OrbitalConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_rewire_band_must_fit_unit_interval() {
        let cfg = OrbitalConfig {
            rewire_floor: 0.8,
            rewire_span: 0.3,
            ..OrbitalConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_from_json_roundtrip() {
        let cfg = OrbitalConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let parsed = OrbitalConfig::from_json(&json).unwrap();
        assert_eq!(parsed.dim, 512);
        assert!((parsed.eta - 0.06).abs() < 1e-12);
        assert_eq!(parsed.cycles, 24);
    }

    #[test]
    fn test_from_json_garbage() {
        assert!(OrbitalConfig::from_json("not json").is_err());
    }

    // ── RingConfig ────────────────────────────────────────────────

    #[test]
    fn test_ring_default_valid() {
        assert!(RingConfig::default().validate().is_ok());
    }

    #[test]
    fn test_ring_thresholds_out_of_range() {
        let cfg = RingConfig {
            inner_centrality_threshold: 1.5,
            ..RingConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_ring_inverted_thresholds_rejected() {
        let cfg = RingConfig {
            inner_centrality_threshold: 0.2,
            outer_centrality_threshold: 0.4,
            ..RingConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
