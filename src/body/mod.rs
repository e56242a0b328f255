mod stitch;

pub use stitch::{SurfacePanel, SurfacePanelEdge};

use std::collections::HashMap;

use slotmap::SlotMap;

use crate::boundary_layer::{BoundaryLayer, DummyBoundaryLayer};
use crate::error::{BodyError, Result};
use crate::math::{Point3, Translation3, UnitQuaternion, Vector3};
use crate::mesh::{LiftingSurface, Surface};
use crate::wake::Wake;

use stitch::Stitch;

slotmap::new_key_type! {
    /// Unique identifier for a surface attached to a body.
    pub struct SurfaceId;
}

/// Records whether an attached boundary layer or wake was allocated by the
/// body as a default, or supplied by the caller at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Allocated by the body (no-op boundary layer, auto-created wake).
    DefaultAllocated,
    /// Supplied by the caller.
    CallerSupplied,
}

/// Everything attached under one surface identity.
#[derive(Debug)]
enum SurfaceSlot {
    NonLifting {
        surface: Surface,
        boundary_layer: Box<dyn BoundaryLayer>,
        boundary_layer_provenance: Provenance,
    },
    Lifting {
        surface: LiftingSurface,
        boundary_layer: Box<dyn BoundaryLayer>,
        boundary_layer_provenance: Provenance,
        wake: Wake,
        wake_provenance: Provenance,
    },
}

impl SurfaceSlot {
    fn mesh(&self) -> &Surface {
        match self {
            Self::NonLifting { surface, .. } => surface,
            Self::Lifting { surface, .. } => &surface.surface,
        }
    }
}

/// A rigid body: one or more discretized surfaces moving as a unit.
///
/// The body aggregates (surface, boundary layer) pairs and (lifting
/// surface, boundary layer, wake) triples in a central arena, addressed by
/// [`SurfaceId`]; owns the cross-surface panel-adjacency overlay (the
/// stitch map); and owns the rigid-body kinematic state. Position and
/// attitude updates propagate differentially to every owned surface and to
/// each wake's live trailing edge. The flow solver reads body motion only
/// through the kinematic-velocity queries, since points at different
/// offsets from the reference point move at different speeds under
/// rotation.
#[derive(Debug)]
pub struct Body {
    id: String,
    position: Point3,
    attitude: UnitQuaternion,
    velocity: Vector3,
    rotational_velocity: Vector3,
    surfaces: SlotMap<SurfaceId, SurfaceSlot>,
    non_lifting: Vec<SurfaceId>,
    lifting: Vec<SurfaceId>,
    stitches: HashMap<SurfacePanel, Vec<Stitch>>,
}

impl Body {
    /// Creates a body with the given name, at rest at the origin with
    /// identity attitude.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            position: Point3::origin(),
            attitude: UnitQuaternion::identity(),
            velocity: Vector3::zeros(),
            rotational_velocity: Vector3::zeros(),
            surfaces: SlotMap::with_key(),
            non_lifting: Vec::new(),
            lifting: Vec::new(),
            stitches: HashMap::new(),
        }
    }

    /// Name of this body.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// World-frame position of the body reference point.
    #[must_use]
    pub fn position(&self) -> Point3 {
        self.position
    }

    /// World-frame attitude of the body.
    #[must_use]
    pub fn attitude(&self) -> UnitQuaternion {
        self.attitude
    }

    /// Linear velocity of the reference point.
    #[must_use]
    pub fn velocity(&self) -> Vector3 {
        self.velocity
    }

    /// Angular velocity about the reference point.
    #[must_use]
    pub fn rotational_velocity(&self) -> Vector3 {
        self.rotational_velocity
    }

    // --- Surface and wake aggregation ---

    /// Adds a non-lifting surface, allocating a no-op boundary layer for it.
    ///
    /// The surface keeps whatever pose it had when constructed; no
    /// transform is applied at registration.
    pub fn add_non_lifting_surface(&mut self, surface: Surface) -> SurfaceId {
        let id = self.surfaces.insert(SurfaceSlot::NonLifting {
            surface,
            boundary_layer: Box::new(DummyBoundaryLayer),
            boundary_layer_provenance: Provenance::DefaultAllocated,
        });
        self.non_lifting.push(id);
        id
    }

    /// Adds a non-lifting surface with a caller-supplied boundary layer.
    pub fn add_non_lifting_surface_with_boundary_layer(
        &mut self,
        surface: Surface,
        boundary_layer: Box<dyn BoundaryLayer>,
    ) -> SurfaceId {
        let id = self.surfaces.insert(SurfaceSlot::NonLifting {
            surface,
            boundary_layer,
            boundary_layer_provenance: Provenance::CallerSupplied,
        });
        self.non_lifting.push(id);
        id
    }

    /// Adds a lifting surface, allocating a no-op boundary layer and a wake
    /// bound to its trailing edge.
    pub fn add_lifting_surface(&mut self, surface: LiftingSurface) -> SurfaceId {
        let wake = Wake::new(&surface);
        let id = self.surfaces.insert(SurfaceSlot::Lifting {
            surface,
            boundary_layer: Box::new(DummyBoundaryLayer),
            boundary_layer_provenance: Provenance::DefaultAllocated,
            wake,
            wake_provenance: Provenance::DefaultAllocated,
        });
        self.lifting.push(id);
        id
    }

    /// Adds a lifting surface with a caller-supplied boundary layer and
    /// wake.
    ///
    /// This is the advanced-caller arity: custom viscous models and wake
    /// implementations go through here, while the common inviscid case
    /// stays a single [`add_lifting_surface`](Self::add_lifting_surface)
    /// call.
    pub fn add_lifting_surface_with_wake(
        &mut self,
        surface: LiftingSurface,
        boundary_layer: Box<dyn BoundaryLayer>,
        wake: Wake,
    ) -> SurfaceId {
        let id = self.surfaces.insert(SurfaceSlot::Lifting {
            surface,
            boundary_layer,
            boundary_layer_provenance: Provenance::CallerSupplied,
            wake,
            wake_provenance: Provenance::CallerSupplied,
        });
        self.lifting.push(id);
        id
    }

    // --- Lookup ---

    /// Returns the panel mesh registered under the given identity,
    /// lifting or not.
    ///
    /// # Errors
    ///
    /// Returns an error if no surface is registered under the identity.
    pub fn surface(&self, id: SurfaceId) -> Result<&Surface> {
        self.slot(id).map(SurfaceSlot::mesh)
    }

    /// Returns the lifting surface registered under the given identity.
    ///
    /// # Errors
    ///
    /// Returns an error if the identity is unknown or names a non-lifting
    /// surface.
    pub fn lifting_surface(&self, id: SurfaceId) -> Result<&LiftingSurface> {
        match self.slot(id)? {
            SurfaceSlot::Lifting { surface, .. } => Ok(surface),
            SurfaceSlot::NonLifting { .. } => Err(BodyError::NotLifting.into()),
        }
    }

    /// Returns the boundary layer attached to the given surface.
    ///
    /// # Errors
    ///
    /// Returns an error if no surface is registered under the identity.
    pub fn boundary_layer(&self, id: SurfaceId) -> Result<&dyn BoundaryLayer> {
        match self.slot(id)? {
            SurfaceSlot::NonLifting { boundary_layer, .. }
            | SurfaceSlot::Lifting { boundary_layer, .. } => Ok(boundary_layer.as_ref()),
        }
    }

    /// Returns the wake trailed by the given lifting surface.
    ///
    /// # Errors
    ///
    /// Returns an error if the identity is unknown or names a non-lifting
    /// surface.
    pub fn wake(&self, id: SurfaceId) -> Result<&Wake> {
        match self.slot(id)? {
            SurfaceSlot::Lifting { wake, .. } => Ok(wake),
            SurfaceSlot::NonLifting { .. } => Err(BodyError::NotLifting.into()),
        }
    }

    /// Mutable access to the wake trailed by the given lifting surface,
    /// for wake shedding and convection by the solver.
    ///
    /// # Errors
    ///
    /// Returns an error if the identity is unknown or names a non-lifting
    /// surface.
    pub fn wake_mut(&mut self, id: SurfaceId) -> Result<&mut Wake> {
        match self
            .surfaces
            .get_mut(id)
            .ok_or(BodyError::SurfaceNotFound)?
        {
            SurfaceSlot::Lifting { wake, .. } => Ok(wake),
            SurfaceSlot::NonLifting { .. } => Err(BodyError::NotLifting.into()),
        }
    }

    /// Provenance of the boundary layer attached to the given surface.
    ///
    /// # Errors
    ///
    /// Returns an error if no surface is registered under the identity.
    pub fn boundary_layer_provenance(&self, id: SurfaceId) -> Result<Provenance> {
        match self.slot(id)? {
            SurfaceSlot::NonLifting {
                boundary_layer_provenance,
                ..
            }
            | SurfaceSlot::Lifting {
                boundary_layer_provenance,
                ..
            } => Ok(*boundary_layer_provenance),
        }
    }

    /// Provenance of the wake trailed by the given lifting surface.
    ///
    /// # Errors
    ///
    /// Returns an error if the identity is unknown or names a non-lifting
    /// surface.
    pub fn wake_provenance(&self, id: SurfaceId) -> Result<Provenance> {
        match self.slot(id)? {
            SurfaceSlot::Lifting {
                wake_provenance, ..
            } => Ok(*wake_provenance),
            SurfaceSlot::NonLifting { .. } => Err(BodyError::NotLifting.into()),
        }
    }

    /// Non-lifting registrations in registration order, for solver
    /// assembly.
    pub fn non_lifting_surfaces(
        &self,
    ) -> impl Iterator<Item = (SurfaceId, &Surface, &dyn BoundaryLayer)> + '_ {
        self.non_lifting
            .iter()
            .filter_map(move |&id| match &self.surfaces[id] {
                SurfaceSlot::NonLifting {
                    surface,
                    boundary_layer,
                    ..
                } => Some((id, surface, boundary_layer.as_ref())),
                SurfaceSlot::Lifting { .. } => None,
            })
    }

    /// Lifting registrations in registration order, for solver assembly.
    pub fn lifting_surfaces(
        &self,
    ) -> impl Iterator<Item = (SurfaceId, &LiftingSurface, &dyn BoundaryLayer, &Wake)> + '_ {
        self.lifting
            .iter()
            .filter_map(move |&id| match &self.surfaces[id] {
                SurfaceSlot::Lifting {
                    surface,
                    boundary_layer,
                    wake,
                    ..
                } => Some((id, surface, boundary_layer.as_ref(), wake)),
                SurfaceSlot::NonLifting { .. } => None,
            })
    }

    // --- Panel stitching ---

    /// Declares an across-surface neighbor relationship between two panel
    /// edges, also known as stitching.
    ///
    /// The adjacency is registered symmetrically: panel A learns about
    /// (B, `panel_b`, `edge_b`) and panel B learns about (A, `panel_a`,
    /// `edge_a`). No deduplication is performed; registering the same edge
    /// pair twice yields duplicate neighbor entries.
    pub fn stitch_panels(
        &mut self,
        surface_a: SurfaceId,
        panel_a: usize,
        edge_a: usize,
        surface_b: SurfaceId,
        panel_b: usize,
        edge_b: usize,
    ) {
        self.stitches
            .entry(SurfacePanel {
                surface: surface_a,
                panel: panel_a,
            })
            .or_default()
            .push(Stitch {
                edge: edge_a,
                neighbor: SurfacePanelEdge {
                    surface: surface_b,
                    panel: panel_b,
                    edge: edge_b,
                },
            });

        self.stitches
            .entry(SurfacePanel {
                surface: surface_b,
                panel: panel_b,
            })
            .or_default()
            .push(Stitch {
                edge: edge_b,
                neighbor: SurfacePanelEdge {
                    surface: surface_a,
                    panel: panel_a,
                    edge: edge_a,
                },
            });
    }

    /// Lists both in-surface and across-surface (stitched) neighbors of
    /// the given panel.
    ///
    /// In-surface neighbors come first, in edge-index order, each tagged
    /// with the edge they sit across; stitched neighbors follow in
    /// registration order, whatever edge they were declared on. Entries
    /// are not deduplicated.
    ///
    /// # Errors
    ///
    /// Returns an error if no surface is registered under the identity.
    pub fn panel_neighbors(
        &self,
        surface: SurfaceId,
        panel: usize,
    ) -> Result<Vec<SurfacePanelEdge>> {
        let mesh = self.surface(surface)?;

        let mut neighbors = Vec::new();
        for edge in 0..mesh.panel_nodes(panel).len() {
            if let Some(neighbor_panel) = mesh.panel_neighbor(panel, edge) {
                neighbors.push(SurfacePanelEdge {
                    surface,
                    panel: neighbor_panel,
                    edge,
                });
            }
        }

        if let Some(stitched) = self.stitches.get(&SurfacePanel { surface, panel }) {
            for stitch in stitched {
                neighbors.push(stitch.neighbor);
            }
        }

        Ok(neighbors)
    }

    /// Lists the neighbor of the given panel across one specific edge.
    ///
    /// At most one entry is returned: the in-surface neighbor across that
    /// edge if the surface has one, or the stitched neighbor declared on
    /// that edge. Under valid topology the two cannot coexist.
    ///
    /// # Panics
    ///
    /// Panics if the edge resolves to more than one neighbor under the
    /// combined in-surface and stitched adjacency; this indicates
    /// malformed input topology.
    ///
    /// # Errors
    ///
    /// Returns an error if no surface is registered under the identity.
    pub fn panel_neighbors_for_edge(
        &self,
        surface: SurfaceId,
        panel: usize,
        edge: usize,
    ) -> Result<Vec<SurfacePanelEdge>> {
        let mesh = self.surface(surface)?;

        let mut neighbors = Vec::new();
        if let Some(neighbor_panel) = mesh.panel_neighbor(panel, edge) {
            neighbors.push(SurfacePanelEdge {
                surface,
                panel: neighbor_panel,
                edge,
            });
        }

        if let Some(stitched) = self.stitches.get(&SurfacePanel { surface, panel }) {
            for stitch in stitched {
                if stitch.edge == edge {
                    neighbors.push(stitch.neighbor);
                }
            }
        }

        assert!(
            neighbors.len() <= 1,
            "panel edge has more than one neighbor: malformed topology"
        );

        Ok(neighbors)
    }

    // --- Kinematics ---

    /// Sets the position of the body reference point.
    ///
    /// The differential translation is applied to every owned surface and
    /// to each wake's live trailing edge. Previously shed wake geometry
    /// stays fixed in the world frame.
    pub fn set_position(&mut self, position: Point3) {
        let translation = position - self.position;

        for slot in self.surfaces.values_mut() {
            match slot {
                SurfaceSlot::NonLifting { surface, .. } => surface.translate(&translation),
                SurfaceSlot::Lifting { surface, wake, .. } => {
                    surface.surface.translate(&translation);
                    wake.translate_trailing_edge(&translation);
                }
            }
        }

        self.position = position;
    }

    /// Sets the attitude of the body.
    ///
    /// Child geometry is never re-derived from the absolute pose; instead
    /// the differential transform
    /// `translate(position) * attitude * old_attitude^-1 * translate(-position)`
    /// rotates everything about the current reference point, surfaces and
    /// wake trailing edges alike. Shed wake geometry stays fixed.
    pub fn set_attitude(&mut self, attitude: UnitQuaternion) {
        let transformation = Translation3::from(self.position.coords)
            * (attitude * self.attitude.inverse())
            * Translation3::from(-self.position.coords);

        for slot in self.surfaces.values_mut() {
            match slot {
                SurfaceSlot::NonLifting { surface, .. } => surface.transform(&transformation),
                SurfaceSlot::Lifting { surface, wake, .. } => {
                    surface.surface.transform(&transformation);
                    wake.transform_trailing_edge(&transformation);
                }
            }
        }

        self.attitude = attitude;
    }

    /// Sets the linear velocity of the reference point. No geometric side
    /// effects; feeds the kinematic-velocity queries only.
    pub fn set_velocity(&mut self, velocity: Vector3) {
        self.velocity = velocity;
    }

    /// Sets the angular velocity about the reference point. No geometric
    /// side effects.
    pub fn set_rotational_velocity(&mut self, rotational_velocity: Vector3) {
        self.rotational_velocity = rotational_velocity;
    }

    /// Rigid-body velocity at the given panel's unrefined collocation
    /// point: `v + w x (x - position)`.
    ///
    /// # Errors
    ///
    /// Returns an error if no surface is registered under the identity.
    pub fn panel_kinematic_velocity(&self, surface: SurfaceId, panel: usize) -> Result<Vector3> {
        let mesh = self.surface(surface)?;
        let r = mesh.panel_collocation_point(panel, false) - self.position;
        Ok(self.velocity + self.rotational_velocity.cross(&r))
    }

    /// Rigid-body velocity at the given node's coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error if no surface is registered under the identity.
    pub fn node_kinematic_velocity(&self, surface: SurfaceId, node: usize) -> Result<Vector3> {
        let mesh = self.surface(surface)?;
        let r = mesh.node(node) - self.position;
        Ok(self.velocity + self.rotational_velocity.cross(&r))
    }

    fn slot(&self, id: SurfaceId) -> Result<&SurfaceSlot> {
        self.surfaces
            .get(id)
            .ok_or_else(|| BodyError::SurfaceNotFound.into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::mesh::{planar_grid, planar_lifting_grid};

    /// An `nu` x 1 strip of quad panels in the XY plane.
    fn strip(nu: usize) -> Surface {
        planar_grid(
            Point3::origin(),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            nu,
            1,
        )
        .unwrap()
    }

    fn wing() -> LiftingSurface {
        planar_lifting_grid(
            Point3::origin(),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            2,
            1,
        )
        .unwrap()
    }

    fn edge(surface: SurfaceId, panel: usize, edge: usize) -> SurfacePanelEdge {
        SurfacePanelEdge {
            surface,
            panel,
            edge,
        }
    }

    #[test]
    fn new_body_is_at_rest_at_the_origin() {
        let body = Body::new("test-body");
        assert_eq!(body.id(), "test-body");
        assert_eq!(body.position(), Point3::origin());
        assert_eq!(body.attitude(), UnitQuaternion::identity());
        assert_eq!(body.velocity(), Vector3::zeros());
        assert_eq!(body.rotational_velocity(), Vector3::zeros());
    }

    #[test]
    fn unstitched_panel_has_only_in_surface_neighbors() {
        let mut body = Body::new("b");
        let grid = planar_grid(
            Point3::origin(),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            2,
            2,
        )
        .unwrap();
        let s = body.add_non_lifting_surface(grid);

        let neighbors = body.panel_neighbors(s, 0).unwrap();
        assert_eq!(neighbors, vec![edge(s, 1, 1), edge(s, 2, 2)]);
    }

    #[test]
    fn stitching_is_symmetric() {
        let mut body = Body::new("b");
        let s1 = body.add_non_lifting_surface(strip(2));
        let s2 = body.add_non_lifting_surface(strip(6));

        body.stitch_panels(s1, 0, 2, s2, 5, 0);

        assert_eq!(
            body.panel_neighbors_for_edge(s1, 0, 2).unwrap(),
            vec![edge(s2, 5, 0)]
        );
        assert_eq!(
            body.panel_neighbors_for_edge(s2, 5, 0).unwrap(),
            vec![edge(s1, 0, 2)]
        );
    }

    #[test]
    fn panel_neighbors_unions_in_surface_and_stitched_entries() {
        let mut body = Body::new("b");
        let s1 = body.add_non_lifting_surface(strip(2));
        let s2 = body.add_non_lifting_surface(strip(6));

        // Two stitches on different edges of the same panel share one
        // bucket; registration order is preserved after the in-surface
        // entries.
        body.stitch_panels(s1, 0, 2, s2, 5, 0);
        body.stitch_panels(s1, 0, 0, s2, 0, 2);

        let neighbors = body.panel_neighbors(s1, 0).unwrap();
        assert_eq!(
            neighbors,
            vec![edge(s1, 1, 1), edge(s2, 5, 0), edge(s2, 0, 2)]
        );

        // The general query is exactly the union of the per-edge queries.
        let mut union = Vec::new();
        for e in 0..4 {
            union.extend(body.panel_neighbors_for_edge(s1, 0, e).unwrap());
        }
        assert_eq!(union.len(), neighbors.len());
        for entry in &union {
            assert!(neighbors.contains(entry));
        }
    }

    #[test]
    fn double_registration_duplicates_neighbor_entries() {
        let mut body = Body::new("b");
        let s1 = body.add_non_lifting_surface(strip(2));
        let s2 = body.add_non_lifting_surface(strip(6));

        body.stitch_panels(s1, 0, 2, s2, 5, 0);
        body.stitch_panels(s1, 0, 2, s2, 5, 0);

        let neighbors = body.panel_neighbors(s1, 0).unwrap();
        assert_eq!(
            neighbors,
            vec![edge(s1, 1, 1), edge(s2, 5, 0), edge(s2, 5, 0)]
        );
    }

    #[test]
    #[should_panic(expected = "more than one neighbor")]
    fn stitching_an_interior_edge_trips_the_contract_check() {
        let mut body = Body::new("b");
        let s1 = body.add_non_lifting_surface(strip(2));
        let s2 = body.add_non_lifting_surface(strip(6));

        // Edge 1 of panel 0 already has an in-surface neighbor.
        body.stitch_panels(s1, 0, 1, s2, 5, 0);
        let _ = body.panel_neighbors_for_edge(s1, 0, 1);
    }

    #[test]
    fn set_position_translates_surfaces_and_trailing_edges_only() {
        let mut body = Body::new("b");
        let s = body.add_non_lifting_surface(strip(1));
        let w = body.add_lifting_surface(wing());

        body.wake_mut(w).unwrap().add_layer();
        let shed = body.wake(w).unwrap().node(0);

        body.set_position(Point3::new(1.0, 0.0, 0.0));
        body.set_position(Point3::new(3.0, -1.0, 2.0));

        // Surfaces moved cumulatively by the final position.
        let node = body.surface(s).unwrap().node(0);
        assert!((node - Point3::new(3.0, -1.0, 2.0)).norm() < 1e-12);

        // The shed wake row is bit-identical; only the live row moved.
        let wake = body.wake(w).unwrap();
        assert_eq!(wake.node(0), shed);
        assert!((wake.node(3) - Point3::new(3.0, 0.0, 2.0)).norm() < 1e-12);
    }

    #[test]
    fn set_attitude_rotates_about_the_reference_point() {
        let mut body = Body::new("b");
        let s = body.add_non_lifting_surface(strip(1));

        body.set_position(Point3::new(1.0, 0.0, 0.0));
        body.set_attitude(UnitQuaternion::from_axis_angle(
            &Vector3::z_axis(),
            std::f64::consts::PI,
        ));

        // Node 1 sat at (2, 0, 0) after the translation; a half-turn
        // about (1, 0, 0) brings it to the origin. Node 0 lies on the
        // rotation axis and stays put.
        let surface = body.surface(s).unwrap();
        assert!((surface.node(1) - Point3::new(0.0, 0.0, 0.0)).norm() < 1e-12);
        assert!((surface.node(0) - Point3::new(1.0, 0.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn attitude_round_trip_restores_node_coordinates() {
        let mut body = Body::new("b");
        let s = body.add_non_lifting_surface(strip(2));
        let w = body.add_lifting_surface(wing());
        let original: Vec<Point3> = body.surface(s).unwrap().nodes().to_vec();
        let original_te: Vec<Point3> = body.wake(w).unwrap().nodes().to_vec();

        let axis = nalgebra::Unit::new_normalize(Vector3::new(1.0, 2.0, 3.0));
        let q = UnitQuaternion::from_axis_angle(&axis, 0.7);
        body.set_attitude(q);
        body.set_attitude(UnitQuaternion::identity());

        for (node, expected) in body.surface(s).unwrap().nodes().iter().zip(&original) {
            assert!((node - expected).norm() < 1e-12);
        }
        for (node, expected) in body.wake(w).unwrap().nodes().iter().zip(&original_te) {
            assert!((node - expected).norm() < 1e-12);
        }
    }

    #[test]
    fn kinematic_velocity_under_pure_translation() {
        let mut body = Body::new("b");
        let s = body.add_non_lifting_surface(strip(1));

        body.set_velocity(Vector3::new(1.0, 2.0, 3.0));

        let v = body.panel_kinematic_velocity(s, 0).unwrap();
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
        let v = body.node_kinematic_velocity(s, 0).unwrap();
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn kinematic_velocity_under_pure_rotation() {
        let mut body = Body::new("b");
        // Collocation point of the single panel lands at (1, 0, 0).
        let grid = planar_grid(
            Point3::new(0.5, -0.5, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            1,
            1,
        )
        .unwrap();
        let s = body.add_non_lifting_surface(grid);

        body.set_rotational_velocity(Vector3::new(0.0, 0.0, 1.0));

        let v = body.panel_kinematic_velocity(s, 0).unwrap();
        assert!((v - Vector3::new(0.0, 1.0, 0.0)).norm() < 1e-15);

        // Node 0 sits at (0.5, -0.5, 0).
        let v = body.node_kinematic_velocity(s, 0).unwrap();
        assert!((v - Vector3::new(0.5, 0.5, 0.0)).norm() < 1e-15);
    }

    #[test]
    fn default_registration_allocates_dummy_layer_and_wake() {
        let mut body = Body::new("b");
        let s = body.add_non_lifting_surface(strip(1));
        let w = body.add_lifting_surface(wing());

        assert_eq!(
            body.boundary_layer_provenance(s).unwrap(),
            Provenance::DefaultAllocated
        );
        assert_eq!(
            body.wake_provenance(w).unwrap(),
            Provenance::DefaultAllocated
        );

        // The auto-created wake starts on the trailing edge.
        let lifting = body.lifting_surface(w).unwrap();
        let te: Vec<Point3> = (0..lifting.n_trailing_edge_nodes())
            .map(|i| lifting.trailing_edge_node(i))
            .collect();
        assert_eq!(body.wake(w).unwrap().nodes(), te.as_slice());
    }

    #[test]
    fn caller_supplied_attachments_keep_their_provenance() {
        let mut body = Body::new("b");
        let lifting = wing();
        let wake = Wake::new(&lifting);
        let w = body.add_lifting_surface_with_wake(
            lifting,
            Box::new(DummyBoundaryLayer),
            wake,
        );

        assert_eq!(
            body.boundary_layer_provenance(w).unwrap(),
            Provenance::CallerSupplied
        );
        assert_eq!(body.wake_provenance(w).unwrap(), Provenance::CallerSupplied);
    }

    #[test]
    fn surfaces_iterate_in_registration_order() {
        let mut body = Body::new("b");
        let s1 = body.add_non_lifting_surface(strip(1));
        let s2 = body.add_non_lifting_surface(strip(2));
        let w = body.add_lifting_surface(wing());

        let non_lifting: Vec<SurfaceId> =
            body.non_lifting_surfaces().map(|(id, _, _)| id).collect();
        assert_eq!(non_lifting, vec![s1, s2]);

        let lifting: Vec<SurfaceId> =
            body.lifting_surfaces().map(|(id, _, _, _)| id).collect();
        assert_eq!(lifting, vec![w]);
    }

    #[test]
    fn foreign_surface_id_is_reported_as_not_found() {
        let mut other = Body::new("other");
        let foreign = other.add_non_lifting_surface(strip(1));

        let body = Body::new("b");
        assert!(body.surface(foreign).is_err());
        assert!(body.panel_neighbors(foreign, 0).is_err());
        assert!(body.panel_kinematic_velocity(foreign, 0).is_err());
    }

    #[test]
    fn wake_queries_reject_non_lifting_surfaces() {
        let mut body = Body::new("b");
        let s = body.add_non_lifting_surface(strip(1));
        assert!(body.wake(s).is_err());
        assert!(body.wake_mut(s).is_err());
        assert!(body.lifting_surface(s).is_err());
    }
}
