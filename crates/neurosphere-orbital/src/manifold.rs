// ─────────────────────────────────────────────────────────────────────
// Neurosphere — Manifold Operations
// ─────────────────────────────────────────────────────────────────────
//! Dense operations over row-major N×D position matrices.
//!
//! Rows are unit vectors on S^(D-1), so the Gram matrix P·Pᵗ is the
//! pairwise cosine-similarity matrix. Callers provide output buffers;
//! the engine pre-allocates them once per run.

use neurosphere_types::{NeurosphereError, NeurosphereResult};

/// Project every row onto the unit sphere.
///
/// A row with (near-)zero norm cannot be projected and is rejected as
/// a precondition violation instead of producing NaN positions.
pub fn normalize_rows(positions: &mut [f64], n: usize, dim: usize) -> NeurosphereResult<()> {
    debug_assert_eq!(positions.len(), n * dim);
    for i in 0..n {
        let row = &mut positions[i * dim..(i + 1) * dim];
        let norm = row.iter().map(|x| x * x).sum::<f64>().sqrt();
        if !norm.is_finite() || norm < 1e-12 {
            log::error!("row {i} cannot be projected onto the sphere (norm {norm:.3e})");
            return Err(NeurosphereError::Degenerate(format!(
                "position row {i} has norm {norm:.3e}"
            )));
        }
        for x in row.iter_mut() {
            *x /= norm;
        }
    }
    Ok(())
}

/// Pairwise similarity matrix S = P·Pᵗ (N×N, symmetric, unit diagonal
/// for unit rows).
pub fn similarity_matrix(positions: &[f64], n: usize, dim: usize, out: &mut [f64]) {
    debug_assert_eq!(positions.len(), n * dim);
    debug_assert_eq!(out.len(), n * n);
    for i in 0..n {
        let row_i = &positions[i * dim..(i + 1) * dim];
        for j in i..n {
            let row_j = &positions[j * dim..(j + 1) * dim];
            let dot: f64 = row_i.iter().zip(row_j.iter()).map(|(a, b)| a * b).sum();
            out[i * n + j] = dot;
            out[j * n + i] = dot;
        }
    }
}

/// Gravity field G = S·P: each node is pulled toward a
/// similarity-weighted blend of all positions (self-term included,
/// acting as inertia).
pub fn gravity_field(sims: &[f64], positions: &[f64], n: usize, dim: usize, out: &mut [f64]) {
    debug_assert_eq!(sims.len(), n * n);
    debug_assert_eq!(positions.len(), n * dim);
    debug_assert_eq!(out.len(), n * dim);
    out.fill(0.0);
    for i in 0..n {
        for j in 0..n {
            let s = sims[i * n + j];
            let row_j = &positions[j * dim..(j + 1) * dim];
            let out_i = &mut out[i * dim..(i + 1) * dim];
            for (o, &p) in out_i.iter_mut().zip(row_j.iter()) {
                *o += s * p;
            }
        }
    }
}

/// Tangential velocity: per-row projection of the gravity pull onto
/// the tangent plane at the node's position, v_i = g_i − (g_i·x_i)·x_i.
///
/// Removes the normal component of the pull so movement stays along
/// the sphere's surface.
pub fn tangent_project(positions: &[f64], gravity: &[f64], n: usize, dim: usize, out: &mut [f64]) {
    debug_assert_eq!(positions.len(), n * dim);
    debug_assert_eq!(gravity.len(), n * dim);
    debug_assert_eq!(out.len(), n * dim);
    for i in 0..n {
        let x = &positions[i * dim..(i + 1) * dim];
        let g = &gravity[i * dim..(i + 1) * dim];
        let radial: f64 = g.iter().zip(x.iter()).map(|(a, b)| a * b).sum();
        let out_i = &mut out[i * dim..(i + 1) * dim];
        for k in 0..dim {
            out_i[k] = g[k] - radial * x[k];
        }
    }
}

/// Mean cosine similarity over all off-diagonal pairs — the global
/// cohesion diagnostic. 0.0 below two nodes.
pub fn pairwise_uplift(sims: &[f64], n: usize) -> f64 {
    if n < 2 {
        return 0.0;
    }
    debug_assert_eq!(sims.len(), n * n);
    let mut sum = 0.0;
    for i in 0..n {
        for j in 0..n {
            if i != j {
                sum += sims[i * n + j];
            }
        }
    }
    sum / (n * (n - 1)) as f64
}

/// Largest per-row deviation of the L2 norm from 1.
pub fn max_norm_deviation(positions: &[f64], n: usize, dim: usize) -> f64 {
    debug_assert_eq!(positions.len(), n * dim);
    let mut worst = 0.0f64;
    for i in 0..n {
        let row = &positions[i * dim..(i + 1) * dim];
        let norm = row.iter().map(|x| x * x).sum::<f64>().sqrt();
        worst = worst.max((norm - 1.0).abs());
    }
    worst
}
