// ─────────────────────────────────────────────────────────────────────
// Neurosphere — Orbital Engine (Propagation Loop)
// ─────────────────────────────────────────────────────────────────────
//! Per-cycle loop: annealing schedule, gravitational message passing,
//! tangential velocity, reprojection, dynamic rewiring, activation
//! decay, and energy-plateau convergence detection.

use serde::{Deserialize, Serialize};

use neurosphere_graph::{EdgeKind, SemanticGraph};
use neurosphere_types::{NeurosphereError, NeurosphereResult, OrbitalConfig, PropagationMetrics};

use crate::manifold::{
    gravity_field, normalize_rows, pairwise_uplift, similarity_matrix, tangent_project,
};

/// Sigmoid cooling schedule: high early, low late, 0.5 at the midpoint.
pub fn temperature(cycle: usize, midpoint: f64) -> f64 {
    1.0 / (1.0 + (cycle as f64 - midpoint).exp())
}

/// Rewiring bar for a cycle; rises from the floor toward
/// floor + span as the system cools.
pub fn rewire_threshold(cycle: usize, config: &OrbitalConfig) -> f64 {
    config.rewire_floor + config.rewire_span * (1.0 - temperature(cycle, config.anneal_midpoint))
}

/// Drop all semantic edges and relink every unordered node pair whose
/// similarity strictly exceeds the threshold, with the similarity as
/// weight. Structural and resonance edges are untouched.
pub fn rewire_semantic_edges(graph: &mut SemanticGraph, sims: &[f64], threshold: f64) {
    graph.clear_semantic_edges();
    let n = graph.node_count();
    debug_assert_eq!(sims.len(), n * n);

    let mut new_edges = Vec::new();
    {
        let nodes = graph.nodes();
        for i in 0..n {
            for j in (i + 1)..n {
                let sim = sims[i * n + j];
                if sim > threshold {
                    new_edges.push((nodes[i].id.clone(), nodes[j].id.clone(), sim));
                }
            }
        }
    }
    for (source, target, weight) in new_edges {
        graph.add_edge(source, target, weight, EdgeKind::Semantic);
    }
}

/// Total system energy: Σ over all current edges of
/// `weight × (1 − cos)` between endpoint rows.
///
/// Rows are unit by invariant, so the cosine is the plain dot product.
/// An edge endpoint missing from the graph is a typed error, never a
/// panicking lookup.
pub fn system_energy(graph: &SemanticGraph, positions: &[f64]) -> NeurosphereResult<f64> {
    let n = graph.node_count();
    let dim = graph.dim();
    if positions.len() != n * dim {
        return Err(NeurosphereError::Dimension(format!(
            "energy: expected {} position values, got {}",
            n * dim,
            positions.len()
        )));
    }

    let mut total = 0.0;
    for edge in graph.edges() {
        let si = graph.index_of(&edge.source_id).ok_or_else(|| {
            NeurosphereError::DanglingEdge {
                from: edge.source_id.clone(),
                target: edge.target_id.clone(),
                missing: edge.source_id.clone(),
            }
        })?;
        let ti = graph.index_of(&edge.target_id).ok_or_else(|| {
            NeurosphereError::DanglingEdge {
                from: edge.source_id.clone(),
                target: edge.target_id.clone(),
                missing: edge.target_id.clone(),
            }
        })?;
        let row_s = &positions[si * dim..(si + 1) * dim];
        let row_t = &positions[ti * dim..(ti + 1) * dim];
        let cos: f64 = row_s.iter().zip(row_t.iter()).map(|(a, b)| a * b).sum();
        total += edge.weight * (1.0 - cos);
    }
    Ok(total)
}

/// Average local clustering coefficient over all nodes.
///
/// Per node: fraction of distinct-neighbor pairs connected by any
/// edge; nodes with fewer than two neighbors contribute 0. Graphs
/// below three nodes score 0.
pub fn clustering_coefficient(graph: &SemanticGraph) -> f64 {
    let n = graph.node_count();
    if n < 3 {
        return 0.0;
    }

    // Normalized adjacency set: one membership test per neighbor pair.
    let mut adjacency = std::collections::HashSet::new();
    for edge in graph.edges() {
        if let (Some(a), Some(b)) = (
            graph.index_of(&edge.source_id),
            graph.index_of(&edge.target_id),
        ) {
            adjacency.insert((a.min(b), a.max(b)));
        }
    }

    let mut total = 0.0;
    for (i, node) in graph.nodes().iter().enumerate() {
        let mut neighbor_idx: Vec<usize> = graph
            .neighbors(&node.id)
            .iter()
            .filter_map(|(neighbor, _)| graph.index_of(&neighbor.id))
            .filter(|&j| j != i)
            .collect();
        neighbor_idx.sort_unstable();
        neighbor_idx.dedup();

        let k = neighbor_idx.len();
        if k < 2 {
            continue;
        }
        let mut triangles = 0usize;
        for a in 0..k {
            for b in (a + 1)..k {
                let (lo, hi) = (neighbor_idx[a], neighbor_idx[b]);
                if adjacency.contains(&(lo.min(hi), lo.max(hi))) {
                    triangles += 1;
                }
            }
        }
        total += triangles as f64 / (k * (k - 1) / 2) as f64;
    }
    total / n as f64
}

/// Log entry for one propagation cycle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CycleLog {
    pub cycle: usize,
    pub temperature: f64,
    pub threshold: f64,
    pub energy: f64,
    pub semantic_edges: usize,
}

/// Orbital propagation engine.
///
/// Holds the validated configuration and the per-cycle log of the last
/// run; all per-run state lives on the stack of `propagate`.
pub struct OrbitalEngine {
    pub cfg: OrbitalConfig,
    pub log: Vec<CycleLog>,
}

impl OrbitalEngine {
    pub fn new(cfg: OrbitalConfig) -> NeurosphereResult<Self> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            log: Vec::new(),
        })
    }

    pub fn default_params() -> Self {
        Self {
            cfg: OrbitalConfig::default(),
            log: Vec::new(),
        }
    }

    /// Run propagation to convergence (or the cycle cap) on a graph,
    /// updating positions, semantic edges and activations in place.
    pub fn propagate(&mut self, graph: &mut SemanticGraph) -> NeurosphereResult<PropagationMetrics> {
        if graph.dim() != self.cfg.dim {
            return Err(NeurosphereError::Dimension(format!(
                "engine dim {} != graph dim {}",
                self.cfg.dim,
                graph.dim()
            )));
        }
        graph.check_edges()?;
        self.log.clear();

        let n = graph.node_count();
        let dim = self.cfg.dim;
        if n == 0 {
            return Ok(PropagationMetrics {
                convergence_cycle: 0,
                converged: true,
                ..Default::default()
            });
        }

        let mut positions = graph.positions();
        normalize_rows(&mut positions, n, dim)?;

        let mut sims = vec![0.0; n * n];
        let mut gravity = vec![0.0; n * dim];
        let mut velocity = vec![0.0; n * dim];
        let mut energy_history: Vec<f64> = Vec::with_capacity(self.cfg.cycles);
        let mut convergence_cycle = self.cfg.cycles;

        for cycle in 0..self.cfg.cycles {
            let temp = temperature(cycle, self.cfg.anneal_midpoint);
            let threshold = rewire_threshold(cycle, &self.cfg);

            // Gravitational message passing + tangential velocity.
            similarity_matrix(&positions, n, dim, &mut sims);
            gravity_field(&sims, &positions, n, dim, &mut gravity);
            tangent_project(&positions, &gravity, n, dim, &mut velocity);

            // Position update and reprojection onto the sphere.
            for ((p, g), v) in positions.iter_mut().zip(gravity.iter()).zip(velocity.iter()) {
                *p += self.cfg.eta * (g + v);
            }
            normalize_rows(&mut positions, n, dim)?;

            // Rewiring uses similarities of the new positions.
            similarity_matrix(&positions, n, dim, &mut sims);
            rewire_semantic_edges(graph, &sims, threshold);

            for node in graph.nodes_mut() {
                node.activation *= self.cfg.activation_decay;
            }

            let energy = system_energy(graph, &positions)?;
            energy_history.push(energy);
            self.log.push(CycleLog {
                cycle,
                temperature: temp,
                threshold,
                energy,
                semantic_edges: graph.edge_count_of_kind(EdgeKind::Semantic),
            });

            // Attractor Well: energy plateau over the trailing window.
            if cycle > self.cfg.convergence_warmup
                && energy_history.len() >= self.cfg.convergence_window
            {
                let recent = &energy_history[energy_history.len() - self.cfg.convergence_window..];
                let hi = recent.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                let lo = recent.iter().copied().fold(f64::INFINITY, f64::min);
                if hi - lo < self.cfg.convergence_threshold {
                    convergence_cycle = cycle;
                    log::debug!(
                        "attractor well at cycle {cycle}: energy {energy:.6}, delta {:.2e}",
                        hi - lo
                    );
                    break;
                }
            }
        }

        graph.set_positions(&positions)?;

        let metrics = PropagationMetrics {
            convergence_cycle,
            final_energy: energy_history.last().copied().unwrap_or(0.0),
            pairwise_uplift: pairwise_uplift(&sims, n),
            clustering_coefficient: clustering_coefficient(graph),
            converged: convergence_cycle < self.cfg.cycles,
            energy_history,
        };
        if !metrics.converged {
            log::warn!(
                "no attractor well within {} cycles (final energy {:.6})",
                self.cfg.cycles,
                metrics.final_energy
            );
        }
        Ok(metrics)
    }
}
