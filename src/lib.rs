pub mod body;
pub mod boundary_layer;
pub mod error;
pub mod math;
pub mod mesh;
pub mod wake;

pub use body::{Body, SurfaceId, SurfacePanel, SurfacePanelEdge};
pub use error::{PanaeroError, Result};
