use crate::error::{MeshError, Result};
use crate::math::{Point3, Vector3};

use super::{LiftingSurface, Surface};

/// Builds a planar structured quad-grid surface.
///
/// Nodes are laid out row-major: `(nu + 1) * (nv + 1)` nodes, node
/// `j * (nu + 1) + i` at `origin + i * u_dir + j * v_dir`, giving
/// `nu * nv` counter-clockwise quad panels.
///
/// # Errors
///
/// Returns an error if either panel count is zero or the directions span a
/// degenerate plane.
pub fn planar_grid(
    origin: Point3,
    u_dir: Vector3,
    v_dir: Vector3,
    nu: usize,
    nv: usize,
) -> Result<Surface> {
    if nu == 0 || nv == 0 {
        return Err(MeshError::EmptyGrid.into());
    }

    let mut nodes = Vec::with_capacity((nu + 1) * (nv + 1));
    for j in 0..=nv {
        for i in 0..=nu {
            #[allow(clippy::cast_precision_loss)]
            nodes.push(origin + u_dir * i as f64 + v_dir * j as f64);
        }
    }

    let mut panel_nodes = Vec::with_capacity(nu * nv);
    for j in 0..nv {
        for i in 0..nu {
            let sw = j * (nu + 1) + i;
            panel_nodes.push(vec![sw, sw + 1, sw + nu + 2, sw + nu + 1]);
        }
    }

    Surface::new(nodes, panel_nodes)
}

/// Builds a planar quad-grid lifting surface whose trailing edge is the
/// last node row (highest `v`).
///
/// # Errors
///
/// Returns an error under the same conditions as [`planar_grid`].
pub fn planar_lifting_grid(
    origin: Point3,
    u_dir: Vector3,
    v_dir: Vector3,
    nu: usize,
    nv: usize,
) -> Result<LiftingSurface> {
    let surface = planar_grid(origin, u_dir, v_dir, nu, nv)?;
    let first = nv * (nu + 1);
    let trailing_edge_nodes = (first..first + nu + 1).collect();
    LiftingSurface::new(surface, trailing_edge_nodes)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn grid_has_expected_counts() {
        let surface = planar_grid(
            Point3::origin(),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            3,
            2,
        )
        .unwrap();
        assert_eq!(surface.n_nodes(), 12);
        assert_eq!(surface.n_panels(), 6);
    }

    #[test]
    fn lifting_grid_marks_last_row_as_trailing_edge() {
        let lifting = planar_lifting_grid(
            Point3::origin(),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            3,
            2,
        )
        .unwrap();
        assert_eq!(lifting.trailing_edge_nodes(), &[8, 9, 10, 11]);
        let node = lifting.trailing_edge_node(0);
        assert!((node - Point3::new(0.0, 2.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn rejects_empty_grid() {
        let result = planar_grid(
            Point3::origin(),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            0,
            2,
        );
        assert!(result.is_err());
    }
}
