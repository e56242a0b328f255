use crate::math::{Point3, Transform3, Vector3};
use crate::mesh::LiftingSurface;

/// Trailing vortex sheet shed from a lifting surface.
///
/// Nodes are stored oldest-first in spanwise rows; the final row is the
/// live trailing edge, coincident with the lifting surface's trailing-edge
/// nodes. Body motion moves only that live row; earlier rows model
/// vorticity already convected into the flow and stay fixed in the world
/// frame.
#[derive(Debug, Clone)]
pub struct Wake {
    nodes: Vec<Point3>,
    panel_nodes: Vec<[usize; 4]>,
    n_trailing_edge_nodes: usize,
}

impl Wake {
    /// Creates a wake bound to the given lifting surface's trailing edge.
    ///
    /// The initial sheet consists of the trailing-edge row alone; it grows
    /// as layers are shed.
    #[must_use]
    pub fn new(lifting_surface: &LiftingSurface) -> Self {
        let nodes = (0..lifting_surface.n_trailing_edge_nodes())
            .map(|i| lifting_surface.trailing_edge_node(i))
            .collect();

        Self {
            nodes,
            panel_nodes: Vec::new(),
            n_trailing_edge_nodes: lifting_surface.n_trailing_edge_nodes(),
        }
    }

    /// Number of nodes in the sheet, shed rows included.
    #[must_use]
    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of wake panels.
    #[must_use]
    pub fn n_panels(&self) -> usize {
        self.panel_nodes.len()
    }

    /// Number of spanwise node rows, the live trailing edge included.
    #[must_use]
    pub fn n_layers(&self) -> usize {
        self.nodes.len() / self.n_trailing_edge_nodes
    }

    /// Coordinates of the given wake node.
    #[must_use]
    pub fn node(&self, node: usize) -> Point3 {
        self.nodes[node]
    }

    /// All wake node coordinates, oldest row first.
    #[must_use]
    pub fn nodes(&self) -> &[Point3] {
        &self.nodes
    }

    /// Node indices of the given wake panel, counter-clockwise.
    #[must_use]
    pub fn panel_nodes(&self, panel: usize) -> [usize; 4] {
        self.panel_nodes[panel]
    }

    /// Sheds the live trailing-edge row into the sheet.
    ///
    /// A copy of the current trailing-edge row is appended and becomes the
    /// new live row; one spanwise strip of quad panels is created between
    /// the two. Convecting the frozen rows downstream is the solver's job.
    pub fn add_layer(&mut self) {
        let n = self.n_trailing_edge_nodes;
        let old_first = self.nodes.len() - n;

        for i in 0..n {
            let node = self.nodes[old_first + i];
            self.nodes.push(node);
        }

        let new_first = old_first + n;
        for i in 0..n - 1 {
            self.panel_nodes.push([
                old_first + i,
                old_first + i + 1,
                new_first + i + 1,
                new_first + i,
            ]);
        }
    }

    /// Translates the live trailing-edge row only.
    pub fn translate_trailing_edge(&mut self, displacement: &Vector3) {
        let first = self.nodes.len() - self.n_trailing_edge_nodes;
        for node in &mut self.nodes[first..] {
            *node += *displacement;
        }
    }

    /// Applies a rigid transform to the live trailing-edge row only.
    pub fn transform_trailing_edge(&mut self, transformation: &Transform3) {
        let first = self.nodes.len() - self.n_trailing_edge_nodes;
        for node in &mut self.nodes[first..] {
            *node = transformation.transform_point(node);
        }
    }

    /// Translates the whole sheet, shed rows included.
    ///
    /// Intended for initial placement before any time stepping; the body
    /// never calls this during motion.
    pub fn translate(&mut self, displacement: &Vector3) {
        for node in &mut self.nodes {
            *node += *displacement;
        }
    }

    /// Applies a rigid transform to the whole sheet, shed rows included.
    pub fn transform(&mut self, transformation: &Transform3) {
        for node in &mut self.nodes {
            *node = transformation.transform_point(node);
        }
    }
}
