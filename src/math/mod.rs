/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Unit quaternion, used for body attitude.
pub type UnitQuaternion = nalgebra::UnitQuaternion<f64>;

/// 3D translation.
pub type Translation3 = nalgebra::Translation3<f64>;

/// Rigid transform (rotation + translation).
pub type Transform3 = nalgebra::Isometry3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
