// ─────────────────────────────────────────────────────────────────────
// Neurosphere — PyO3 FFI Bindings
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
// Note: #[deny(unsafe_code)] not applied — PyO3 proc macros generate
// unsafe blocks internally. All hand-written code in this crate is safe.
//! Python-callable wrappers around the Rust orbital engine.
//!
//! Exposes `OrbitalConfig` and `Neurosphere` to Python. `Neurosphere`
//! covers the three core operations: `embed`, `propagate` (via
//! `reason`), and `classify_rings` — graph assembly included, so the
//! Python caller only ever handles strings and dicts.
//!
//! # FFI Safety
//!
//! - No Python callbacks cross into the hot path; every call is a
//!   plain data exchange.
//! - All config validated before storage (`OrbitalConfig::validate()`).
//! - `NeurosphereError` maps to `ValueError` with the original message.
//!
//! Install: `pip install -e crates/neurosphere-ffi` (requires maturin).
//!
//! Usage from Python:
//! ```python
//! from neurosphere_kernel import Neurosphere
//!
//! ns = Neurosphere(dim=512)
//! result = ns.reason(
//!     "moody urban running scene",
//!     image_description="dusk, shallow DOF, 50mm lens",
//! )
//! print(result["metrics"]["convergence_cycle"])
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use neurosphere_graph::SemanticGraph;
use neurosphere_ingest::ScenePipeline;
use neurosphere_orbital::{validate_dynamics, OrbitalEngine, RingClassifier, RingReport};
use neurosphere_types::{
    NeurosphereError, OrbitalConfig, PropagationMetrics, RingConfig, ValidationReport,
};

fn to_py_err(e: NeurosphereError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

// ─── PyOrbitalConfig ────────────────────────────────────────────────

/// Python-visible configuration for the orbital engine.
#[pyclass(name = "OrbitalConfig")]
#[derive(Clone)]
struct PyOrbitalConfig {
    inner: OrbitalConfig,
}

#[pymethods]
impl PyOrbitalConfig {
    #[new]
    #[pyo3(signature = (
        dim = 512,
        eta = 0.06,
        cycles = 24,
        convergence_threshold = 0.001,
        activation_decay = 0.95,
        anneal_midpoint = 12.0,
        rewire_floor = 0.6,
        rewire_span = 0.3,
    ))]
    #[allow(clippy::too_many_arguments)]
    fn new(
        dim: usize,
        eta: f64,
        cycles: usize,
        convergence_threshold: f64,
        activation_decay: f64,
        anneal_midpoint: f64,
        rewire_floor: f64,
        rewire_span: f64,
    ) -> PyResult<Self> {
        let config = OrbitalConfig {
            dim,
            eta,
            cycles,
            convergence_threshold,
            activation_decay,
            anneal_midpoint,
            rewire_floor,
            rewire_span,
            ..OrbitalConfig::default()
        };
        config.validate().map_err(to_py_err)?;
        Ok(Self { inner: config })
    }

    /// Construct from JSON string.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        let config = OrbitalConfig::from_json(json).map_err(to_py_err)?;
        config.validate().map_err(to_py_err)?;
        Ok(Self { inner: config })
    }

    fn __repr__(&self) -> String {
        format!(
            "OrbitalConfig(dim={}, eta={}, cycles={})",
            self.inner.dim, self.inner.eta, self.inner.cycles
        )
    }
}

// ─── Dict conversion helpers ────────────────────────────────────────

fn metrics_to_dict<'py>(
    py: Python<'py>,
    metrics: &PropagationMetrics,
) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("convergence_cycle", metrics.convergence_cycle)?;
    dict.set_item("final_energy", metrics.final_energy)?;
    dict.set_item("energy_history", metrics.energy_history.clone())?;
    dict.set_item("pairwise_uplift", metrics.pairwise_uplift)?;
    dict.set_item("clustering_coefficient", metrics.clustering_coefficient)?;
    dict.set_item("converged", metrics.converged)?;
    Ok(dict)
}

fn rings_to_dict<'py>(py: Python<'py>, report: &RingReport) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    for (name, band) in [
        ("inner", &report.inner),
        ("middle", &report.middle),
        ("outer", &report.outer),
    ] {
        let band_dict = PyDict::new(py);
        band_dict.set_item("nodes", band.node_ids.clone())?;
        band_dict.set_item("color", band.style.color.clone())?;
        band_dict.set_item("luminosity", band.style.luminosity.clone())?;
        band_dict.set_item("visual_signature", band.style.signature.clone())?;
        dict.set_item(name, band_dict)?;
    }
    Ok(dict)
}

fn validation_to_dict<'py>(
    py: Python<'py>,
    report: &ValidationReport,
) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("uplift_in_range", report.uplift_in_range)?;
    dict.set_item("clustering_sufficient", report.clustering_sufficient)?;
    dict.set_item("converged", report.converged)?;
    dict.set_item("on_unit_sphere", report.on_unit_sphere)?;
    Ok(dict)
}

// ─── Neurosphere ────────────────────────────────────────────────────

/// Orbital reasoning session factory exposed to Python.
#[pyclass(name = "Neurosphere")]
struct PyNeurosphere {
    config: OrbitalConfig,
    pipeline: ScenePipeline,
    classifier: RingClassifier,
}

impl PyNeurosphere {
    fn run(&self, graph: &mut SemanticGraph) -> PyResult<(PropagationMetrics, ValidationReport)> {
        let mut engine = OrbitalEngine::new(self.config.clone()).map_err(to_py_err)?;
        let metrics = engine.propagate(graph).map_err(to_py_err)?;
        let validation = validate_dynamics(&graph.positions(), graph, &metrics);
        Ok((metrics, validation))
    }

    fn package<'py>(
        &self,
        py: Python<'py>,
        graph: &mut SemanticGraph,
        metrics: &PropagationMetrics,
        validation: &ValidationReport,
    ) -> PyResult<Bound<'py, PyDict>> {
        self.classifier.classify_all(graph);
        let rings = self.classifier.ring_report(graph);

        let result = PyDict::new(py);
        result.set_item("metrics", metrics_to_dict(py, metrics)?)?;
        result.set_item("rings", rings_to_dict(py, &rings)?)?;
        result.set_item("validation", validation_to_dict(py, validation)?)?;
        Ok(result)
    }
}

#[pymethods]
impl PyNeurosphere {
    #[new]
    #[pyo3(signature = (config = None, dim = None))]
    fn new(config: Option<PyOrbitalConfig>, dim: Option<usize>) -> PyResult<Self> {
        let mut inner = config.map(|c| c.inner).unwrap_or_default();
        if let Some(dim) = dim {
            inner.dim = dim;
        }
        inner.validate().map_err(to_py_err)?;
        let pipeline = ScenePipeline::with_dim(inner.dim).map_err(to_py_err)?;
        let classifier = RingClassifier::new(RingConfig::default()).map_err(to_py_err)?;
        Ok(Self {
            config: inner,
            pipeline,
            classifier,
        })
    }

    /// Embed text as a unit vector on S^(dim-1).
    fn embed(&self, text: &str) -> PyResult<Vec<f64>> {
        self.pipeline.embedder().embed(text).map_err(to_py_err)
    }

    /// Build a plain concept graph from text, run propagation, and
    /// return `{metrics, rings, validation}`.
    fn propagate_text<'py>(&self, py: Python<'py>, text: &str) -> PyResult<Bound<'py, PyDict>> {
        let mut graph = self.pipeline.concept_graph(text).map_err(to_py_err)?;
        let (metrics, validation) = self.run(&mut graph)?;
        self.package(py, &mut graph, &metrics, &validation)
    }

    /// Full multimodal reasoning: concept + visual subgraphs bridged
    /// by resonance, merged, propagated, classified.
    ///
    /// Args:
    ///     text: Text input.
    ///     image_description: Optional visual description.
    ///     amplify_visual: Optional factor applied to resonance weights.
    ///     mute_visual: Zero all resonance weights before propagation.
    #[pyo3(signature = (text, image_description = None, amplify_visual = None, mute_visual = false))]
    fn reason<'py>(
        &self,
        py: Python<'py>,
        text: &str,
        image_description: Option<&str>,
        amplify_visual: Option<f64>,
        mute_visual: bool,
    ) -> PyResult<Bound<'py, PyDict>> {
        let mut mm = self
            .pipeline
            .multimodal_graph(text, image_description)
            .map_err(to_py_err)?;
        if let Some(factor) = amplify_visual {
            mm.amplify_visual_cortex(factor);
        }
        if mute_visual {
            mm.mute_visual_cortex();
        }

        let mut merged = mm.merge_for_propagation().map_err(to_py_err)?;
        let (metrics, validation) = self.run(&mut merged)?;
        let result = self.package(py, &mut merged, &metrics, &validation)?;
        result.set_item("resonance_bridges", mm.resonance_bridges().len())?;
        Ok(result)
    }

    fn __repr__(&self) -> String {
        format!(
            "Neurosphere(dim={}, eta={}, cycles={})",
            self.config.dim, self.config.eta, self.config.cycles
        )
    }
}

// ─── Module ─────────────────────────────────────────────────────────

#[pymodule]
fn neurosphere_kernel(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyOrbitalConfig>()?;
    m.add_class::<PyNeurosphere>()?;
    Ok(())
}
