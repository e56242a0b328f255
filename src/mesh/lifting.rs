use crate::error::{MeshError, Result};
use crate::math::Point3;

use super::Surface;

/// A surface that generates circulation and therefore trails a wake.
///
/// Wraps a plain [`Surface`] and marks the ordered spanwise node indices of
/// the trailing edge, which wake construction consumes.
#[derive(Debug, Clone)]
pub struct LiftingSurface {
    /// The underlying panel mesh.
    pub surface: Surface,
    trailing_edge_nodes: Vec<usize>,
}

impl LiftingSurface {
    /// Creates a lifting surface from a mesh and its trailing-edge node
    /// indices, ordered along the span.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two trailing-edge nodes are given or
    /// if any index is out of range for the mesh.
    pub fn new(surface: Surface, trailing_edge_nodes: Vec<usize>) -> Result<Self> {
        if trailing_edge_nodes.len() < 2 {
            return Err(MeshError::TrailingEdgeTooShort(trailing_edge_nodes.len()).into());
        }
        for &node in &trailing_edge_nodes {
            if node >= surface.n_nodes() {
                return Err(MeshError::TrailingEdgeOutOfRange {
                    node,
                    n_nodes: surface.n_nodes(),
                }
                .into());
            }
        }

        Ok(Self {
            surface,
            trailing_edge_nodes,
        })
    }

    /// Number of trailing-edge nodes.
    #[must_use]
    pub fn n_trailing_edge_nodes(&self) -> usize {
        self.trailing_edge_nodes.len()
    }

    /// Mesh node indices of the trailing edge, in spanwise order.
    #[must_use]
    pub fn trailing_edge_nodes(&self) -> &[usize] {
        &self.trailing_edge_nodes
    }

    /// Coordinates of the `i`-th trailing-edge node.
    #[must_use]
    pub fn trailing_edge_node(&self, i: usize) -> Point3 {
        self.surface.node(self.trailing_edge_nodes[i])
    }
}
