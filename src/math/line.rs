use super::{ParametricCurve3d, Point3d, Vector3d};
use cgmath::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A straight line segment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Line {
    start: Point3d,
    end: Point3d,
}

impl Line {
    /// Creates a line segment between two points.
    pub const fn from_ends(start: Point3d, end: Point3d) -> Self {
        Self { start, end }
    }

    /// The start point of the segment.
    pub fn start(&self) -> Point3d {
        self.start
    }

    /// The end point of the segment.
    pub fn end(&self) -> Point3d {
        self.end
    }

    /// The length of the segment.
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

impl ParametricCurve3d for Line {
    fn pd(&self, u: f64) -> Point3d {
        self.start + (self.end - self.start) * u
    }

    fn section_type(&self) -> &'static str {
        "line"
    }

    fn d_pd(&self, _u: f64) -> Vector3d {
        self.end - self.start
    }

    fn dd_pd(&self, _u: f64) -> Vector3d {
        Vector3d::zero()
    }

    fn ddd_pd(&self, _u: f64) -> Vector3d {
        Vector3d::zero()
    }

    fn curvature(&self, _u: f64) -> f64 {
        0.0
    }

    fn torsion(&self, _u: f64) -> f64 {
        0.0
    }
}
