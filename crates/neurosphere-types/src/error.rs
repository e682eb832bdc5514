// ─────────────────────────────────────────────────────────────────────
// Neurosphere — Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for all Neurosphere failures.
#[derive(Error, Debug)]
pub enum NeurosphereError {
    /// A node id was inserted twice into the same graph.
    #[error("duplicate node id: {0}")]
    DuplicateNode(String),

    /// An edge references a node id absent from the graph.
    #[error("dangling edge {from} -> {target}: unknown node {missing}")]
    DanglingEdge {
        from: String,
        target: String,
        missing: String,
    },

    /// A vector cannot be projected onto the unit sphere.
    #[error("numerical degeneracy: {0}")]
    Degenerate(String),

    /// Position matrix shape does not match the graph.
    #[error("dimension mismatch: {0}")]
    Dimension(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),
}

pub type NeurosphereResult<T> = Result<T, NeurosphereError>;
