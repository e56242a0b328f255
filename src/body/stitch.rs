use super::SurfaceId;

/// Identity of a panel within a body: which surface, which panel.
///
/// This is the stitch-map key. It deliberately carries no edge field, so
/// every stitched edge of one panel lands in the same bucket; records are
/// disambiguated by edge only when a query filters on one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfacePanel {
    /// Surface identity.
    pub surface: SurfaceId,
    /// Panel index within the surface.
    pub panel: usize,
}

/// A specific edge of a specific panel on a specific surface.
///
/// Pure lookup data; carries no ownership of the surface it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfacePanelEdge {
    /// Surface identity.
    pub surface: SurfaceId,
    /// Panel index within the surface.
    pub panel: usize,
    /// Edge index within the panel.
    pub edge: usize,
}

/// One registered stitch: the local edge it was declared on, and the
/// neighbor across it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Stitch {
    pub edge: usize,
    pub neighbor: SurfacePanelEdge,
}
