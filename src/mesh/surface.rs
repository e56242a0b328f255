use std::collections::{BTreeMap, HashMap};

use crate::error::{MeshError, Result};
use crate::math::{Point3, Transform3, Vector3, TOLERANCE};

/// Distance by which a refined collocation point is pulled below the
/// panel surface, against the normal.
const COLLOCATION_INSET: f64 = 1e3 * TOLERANCE;

/// A panel mesh: flat panels spanned between shared nodes.
///
/// Panels list their nodes counter-clockwise when viewed from the outside;
/// edge `i` of a panel runs from vertex `i` to vertex `i + 1` (wrapping).
/// The in-surface neighbor map is derived at construction time by matching
/// the node pairs of panel edges.
#[derive(Debug, Clone)]
pub struct Surface {
    nodes: Vec<Point3>,
    panel_nodes: Vec<Vec<usize>>,
    panel_neighbors: Vec<BTreeMap<usize, usize>>,
    collocation_points: Vec<Point3>,
    normals: Vec<Vector3>,
}

impl Surface {
    /// Creates a surface from node coordinates and per-panel node index lists.
    ///
    /// # Errors
    ///
    /// Returns an error if a panel has fewer than 3 vertices, references a
    /// node out of range, is too degenerate to carry a normal, or if an
    /// edge is shared by more than two panels.
    pub fn new(nodes: Vec<Point3>, panel_nodes: Vec<Vec<usize>>) -> Result<Self> {
        for (panel, vertices) in panel_nodes.iter().enumerate() {
            if vertices.len() < 3 {
                return Err(MeshError::DegeneratePanel {
                    panel,
                    count: vertices.len(),
                }
                .into());
            }
            for &node in vertices {
                if node >= nodes.len() {
                    return Err(MeshError::NodeOutOfRange {
                        panel,
                        node,
                        n_nodes: nodes.len(),
                    }
                    .into());
                }
            }
        }

        let panel_neighbors = derive_neighbors(&panel_nodes)?;

        let mut surface = Self {
            nodes,
            panel_nodes,
            panel_neighbors,
            collocation_points: Vec::new(),
            normals: Vec::new(),
        };
        surface.compute_panel_geometry()?;

        Ok(surface)
    }

    /// Number of nodes in this surface.
    #[must_use]
    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of panels in this surface.
    #[must_use]
    pub fn n_panels(&self) -> usize {
        self.panel_nodes.len()
    }

    /// Coordinates of the given node.
    #[must_use]
    pub fn node(&self, node: usize) -> Point3 {
        self.nodes[node]
    }

    /// All node coordinates, in index order.
    #[must_use]
    pub fn nodes(&self) -> &[Point3] {
        &self.nodes
    }

    /// Node indices of the given panel, counter-clockwise.
    #[must_use]
    pub fn panel_nodes(&self, panel: usize) -> &[usize] {
        &self.panel_nodes[panel]
    }

    /// The in-surface neighbor of the given panel across the given edge,
    /// if the edge is not on the surface boundary.
    #[must_use]
    pub fn panel_neighbor(&self, panel: usize, edge: usize) -> Option<usize> {
        self.panel_neighbors[panel].get(&edge).copied()
    }

    /// Outward normal of the given panel.
    #[must_use]
    pub fn panel_normal(&self, panel: usize) -> Vector3 {
        self.normals[panel]
    }

    /// Collocation point of the given panel.
    ///
    /// With `below_surface` set, the point is pulled slightly inside the
    /// body, against the panel normal; Dirichlet boundary conditions are
    /// evaluated there. The unrefined point is the panel centroid.
    #[must_use]
    pub fn panel_collocation_point(&self, panel: usize, below_surface: bool) -> Point3 {
        let point = self.collocation_points[panel];
        if below_surface {
            point - COLLOCATION_INSET * self.normals[panel]
        } else {
            point
        }
    }

    /// Translates the surface in place.
    pub fn translate(&mut self, displacement: &Vector3) {
        for node in &mut self.nodes {
            *node += *displacement;
        }
        for point in &mut self.collocation_points {
            *point += *displacement;
        }
    }

    /// Applies a rigid transform to the surface in place.
    ///
    /// Normals rotate with the transform but do not translate.
    pub fn transform(&mut self, transformation: &Transform3) {
        for node in &mut self.nodes {
            *node = transformation.transform_point(node);
        }
        for point in &mut self.collocation_points {
            *point = transformation.transform_point(point);
        }
        for normal in &mut self.normals {
            *normal = transformation.transform_vector(normal);
        }
    }

    /// Recomputes per-panel centroids and Newell normals.
    fn compute_panel_geometry(&mut self) -> Result<()> {
        self.collocation_points.clear();
        self.normals.clear();

        for (panel, vertices) in self.panel_nodes.iter().enumerate() {
            let n = vertices.len();

            let mut centroid = Vector3::zeros();
            for &node in vertices {
                centroid += self.nodes[node].coords;
            }
            #[allow(clippy::cast_precision_loss)]
            let centroid = Point3::from(centroid / n as f64);

            let mut normal = Vector3::zeros();
            for i in 0..n {
                let curr = &self.nodes[vertices[i]];
                let next = &self.nodes[vertices[(i + 1) % n]];
                normal.x += (curr.y - next.y) * (curr.z + next.z);
                normal.y += (curr.z - next.z) * (curr.x + next.x);
                normal.z += (curr.x - next.x) * (curr.y + next.y);
            }
            let len = normal.norm();
            if len < TOLERANCE {
                return Err(MeshError::DegenerateNormal { panel }.into());
            }

            self.collocation_points.push(centroid);
            self.normals.push(normal / len);
        }

        Ok(())
    }
}

/// Derives the per-panel edge-to-neighbor map by matching shared node pairs.
fn derive_neighbors(panel_nodes: &[Vec<usize>]) -> Result<Vec<BTreeMap<usize, usize>>> {
    let mut edge_panels: HashMap<(usize, usize), Vec<(usize, usize)>> = HashMap::new();
    for (panel, vertices) in panel_nodes.iter().enumerate() {
        let n = vertices.len();
        for edge in 0..n {
            let a = vertices[edge];
            let b = vertices[(edge + 1) % n];
            let key = (a.min(b), a.max(b));
            edge_panels.entry(key).or_default().push((panel, edge));
        }
    }

    let mut neighbors = vec![BTreeMap::new(); panel_nodes.len()];
    for ((node_a, node_b), sharers) in edge_panels {
        match sharers.as_slice() {
            [_] => {}
            [(panel_a, edge_a), (panel_b, edge_b)] => {
                neighbors[*panel_a].insert(*edge_a, *panel_b);
                neighbors[*panel_b].insert(*edge_b, *panel_a);
            }
            _ => return Err(MeshError::NonManifoldEdge { node_a, node_b }.into()),
        }
    }

    Ok(neighbors)
}
