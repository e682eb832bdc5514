// ─────────────────────────────────────────────────────────────────────
// Neurosphere — Sphere Embedder
// ─────────────────────────────────────────────────────────────────────
//! Deterministic unit-vector generation on S^(dim-1).
//!
//! Text is hashed (FNV-1a) into a seed for a xorshift generator; the
//! sampled Gaussian vector is projected onto the unit sphere. The same
//! text therefore always embeds to the same point, which keeps every
//! adapter run a pure function of its input.

use std::collections::HashMap;

use parking_lot::Mutex;

use neurosphere_types::{NeurosphereError, NeurosphereResult};

/// Deterministic xorshift64 generator with Box-Muller normals.
pub struct SphereRng {
    state: u64,
}

impl SphereRng {
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 0xDEAD_BEEF_CAFE_BABE } else { seed },
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Approximate standard normal via Box-Muller.
    pub fn next_normal(&mut self) -> f64 {
        let u1 = self.next_f64().max(1e-300);
        let u2 = self.next_f64();
        (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
    }
}

/// FNV-1a hash of a byte string.
fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for &b in bytes {
        hash ^= b as u64;
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

/// Text-to-unit-vector embedder.
///
/// Thread-safe: the text cache is guarded by a `parking_lot::Mutex`
/// so one embedder can serve concurrent reasoning sessions.
pub struct TextEmbedder {
    dim: usize,
    cache: Mutex<HashMap<String, Vec<f64>>>,
}

impl TextEmbedder {
    pub fn new(dim: usize) -> NeurosphereResult<Self> {
        if dim == 0 {
            return Err(NeurosphereError::Config(
                "embedding dim must be >= 1".to_string(),
            ));
        }
        Ok(Self {
            dim,
            cache: Mutex::new(HashMap::new()),
        })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Embed text as a unit vector on S^(dim-1).
    pub fn embed(&self, text: &str) -> NeurosphereResult<Vec<f64>> {
        if let Some(hit) = self.cache.lock().get(text) {
            return Ok(hit.clone());
        }

        let mut rng = SphereRng::new(fnv1a(text.as_bytes()));
        let mut v: Vec<f64> = (0..self.dim).map(|_| rng.next_normal()).collect();

        let norm = v.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm < 1e-12 {
            return Err(NeurosphereError::Degenerate(format!(
                "embedding for {text:?} has zero norm"
            )));
        }
        for x in v.iter_mut() {
            *x /= norm;
        }

        self.cache.lock().insert(text.to_string(), v.clone());
        Ok(v)
    }

    pub fn cache_len(&self) -> usize {
        self.cache.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── SphereRng ─────────────────────────────────────────────────

    #[test]
    fn test_rng_zero_seed_guard() {
        let mut a = SphereRng::new(0);
        let mut b = SphereRng::new(0xDEAD_BEEF_CAFE_BABE);
        assert_eq!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn test_rng_uniform_range() {
        let mut rng = SphereRng::new(7);
        for _ in 0..1000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_rng_normal_finite() {
        let mut rng = SphereRng::new(11);
        assert!((0..1000).all(|_| rng.next_normal().is_finite()));
    }

    // ── TextEmbedder ──────────────────────────────────────────────

    #[test]
    fn test_zero_dim_rejected() {
        assert!(TextEmbedder::new(0).is_err());
    }

    #[test]
    fn test_embed_unit_norm() {
        let embedder = TextEmbedder::new(64).unwrap();
        let v = embedder.embed("moody urban scene").unwrap();
        assert_eq!(v.len(), 64);
        let norm: f64 = v.iter().map(|x| x * x).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-9, "norm = {norm}");
    }

    #[test]
    fn test_embed_deterministic() {
        let embedder = TextEmbedder::new(32).unwrap();
        let a = embedder.embed("golden hour").unwrap();
        let b = embedder.embed("golden hour").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_embed_distinct_texts_differ() {
        let embedder = TextEmbedder::new(32).unwrap();
        let a = embedder.embed("dusk").unwrap();
        let b = embedder.embed("dawn").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_cache_grows_once_per_text() {
        let embedder = TextEmbedder::new(16).unwrap();
        embedder.embed("a").unwrap();
        embedder.embed("a").unwrap();
        embedder.embed("b").unwrap();
        assert_eq!(embedder.cache_len(), 2);
    }
}
