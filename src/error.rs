use thiserror::Error;

/// Top-level error type for the panaero kernel.
#[derive(Debug, Error)]
pub enum PanaeroError {
    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Body(#[from] BodyError),
}

/// Errors related to panel-mesh construction and queries.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("panel {panel} has {count} vertices; at least 3 are required")]
    DegeneratePanel { panel: usize, count: usize },

    #[error("panel {panel} references node {node}, but the surface has {n_nodes} nodes")]
    NodeOutOfRange {
        panel: usize,
        node: usize,
        n_nodes: usize,
    },

    #[error("edge between nodes {node_a} and {node_b} is shared by more than two panels")]
    NonManifoldEdge { node_a: usize, node_b: usize },

    #[error("panel {panel} is degenerate: cannot compute a normal")]
    DegenerateNormal { panel: usize },

    #[error("trailing edge references node {node}, but the surface has {n_nodes} nodes")]
    TrailingEdgeOutOfRange { node: usize, n_nodes: usize },

    #[error("trailing edge needs at least 2 nodes, got {0}")]
    TrailingEdgeTooShort(usize),

    #[error("grid must have at least one panel in each direction")]
    EmptyGrid,
}

/// Errors related to body-level lookups.
#[derive(Debug, Error)]
pub enum BodyError {
    #[error("surface not found in body")]
    SurfaceNotFound,

    #[error("surface is not a lifting surface")]
    NotLifting,
}

/// Convenience type alias for results using [`PanaeroError`].
pub type Result<T> = std::result::Result<T, PanaeroError>;
