use std::fmt::Debug;

use crate::math::Vector3;
use crate::mesh::Surface;

/// Pluggable viscous-correction model attached to a surface.
///
/// The solver queries these per panel when assembling boundary conditions;
/// the topology/kinematics core itself never evaluates them.
pub trait BoundaryLayer: Debug {
    /// Transpiration (blowing) velocity through the given panel.
    fn blowing_velocity(&self, surface: &Surface, panel: usize) -> f64;

    /// Surface friction force per unit area on the given panel.
    fn friction(&self, surface: &Surface, panel: usize) -> Vector3;
}

/// Inviscid no-op boundary layer, used when none is supplied.
#[derive(Debug, Default)]
pub struct DummyBoundaryLayer;

impl BoundaryLayer for DummyBoundaryLayer {
    fn blowing_velocity(&self, _surface: &Surface, _panel: usize) -> f64 {
        0.0
    }

    fn friction(&self, _surface: &Surface, _panel: usize) -> Vector3 {
        Vector3::zeros()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::mesh::planar_grid;

    #[test]
    fn dummy_boundary_layer_is_a_no_op() {
        let surface = planar_grid(
            Point3::origin(),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            1,
            1,
        )
        .unwrap();
        let boundary_layer = DummyBoundaryLayer::default();
        assert!(boundary_layer.blowing_velocity(&surface, 0).abs() < f64::EPSILON);
        assert!(boundary_layer.friction(&surface, 0).norm() < f64::EPSILON);
    }
}
