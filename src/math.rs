//! Mathematical structs and functions.

use cgmath::{Point3, Vector3};
pub use arc::{Arc, Circle};
pub use curve::{sample_count, CurveSamples, ParametricCurve3d, MAX_CURVE_SAMPLES};
pub use lemniscate::Lemniscate;
pub use line::Line;
pub use util::*;

mod arc;
mod curve;
mod lemniscate;
mod line;
mod util;

/// A 3D point
pub type Point3d = Point3<f64>;

/// A 3D vector
pub type Vector3d = Vector3<f64>;
