use super::{ParametricCurve3d, Point3d, Vector3d};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// A lemniscate of Bernoulli (a figure-eight) lying in a horizontal plane.
///
/// The curve starts at the rightmost tip and completes one full loop.
/// Derivatives and curvature use the numerical defaults of [ParametricCurve3d].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Lemniscate {
    center: Point3d,
    width: f64,
}

impl Lemniscate {
    /// Creates a lemniscate whose tips are `width` units from the centre.
    pub const fn new(center: Point3d, width: f64) -> Self {
        Self { center, width }
    }
}

impl ParametricCurve3d for Lemniscate {
    fn pd(&self, u: f64) -> Point3d {
        let (sin, cos) = (TAU * u).sin_cos();
        let scale = self.width / (1.0 + sin * sin);
        self.center + Vector3d::new(cos, sin * cos, 0.0) * scale
    }

    fn section_type(&self) -> &'static str {
        "lemniscate"
    }

    fn torsion(&self, _u: f64) -> f64 {
        0.0
    }
}
