pub mod grid;
pub mod lifting;
pub mod surface;

pub use grid::{planar_grid, planar_lifting_grid};
pub use lifting::LiftingSurface;
pub use surface::Surface;
