use super::{ParametricCurve3d, Point3d, Vector3d};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// A circular arc lying in a horizontal plane.
///
/// The arc sweeps from `start_angle` to `end_angle` (in radians, measured
/// from the positive x-axis) as `u` goes from 0 to 1. An end angle smaller
/// than the start angle sweeps clockwise.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Arc {
    center: Point3d,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
}

impl Arc {
    /// Creates an arc from its centre, radius and angular range.
    pub const fn new(center: Point3d, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Self {
            center,
            radius,
            start_angle,
            end_angle,
        }
    }

    /// Creates the arc around `center` that starts at `start` and ends at the
    /// angle of `end`, turning in the given direction.
    ///
    /// The radius is taken from `start`, and the arc lies at the height of `center`.
    /// If `start` and `end` share the same angle, the arc is a full turn.
    pub fn from_points(start: Point3d, end: Point3d, center: Point3d, clockwise: bool) -> Self {
        let (sx, sy) = (start.x - center.x, start.y - center.y);
        let (ex, ey) = (end.x - center.x, end.y - center.y);
        let radius = sx.hypot(sy);
        let start_angle = f64::atan2(sy, sx);
        let mut end_angle = f64::atan2(ey, ex);
        if clockwise {
            while end_angle >= start_angle {
                end_angle -= TAU;
            }
        } else {
            while end_angle <= start_angle {
                end_angle += TAU;
            }
        }
        Self::new(center, radius, start_angle, end_angle)
    }

    /// The centre of the arc.
    pub fn center(&self) -> Point3d {
        self.center
    }

    /// The radius of the arc.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The signed angle swept by the arc; negative when clockwise.
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// The length of the arc.
    pub fn length(&self) -> f64 {
        self.radius * self.sweep().abs()
    }

    fn angle(&self, u: f64) -> f64 {
        self.start_angle + u * self.sweep()
    }
}

impl ParametricCurve3d for Arc {
    fn pd(&self, u: f64) -> Point3d {
        let (sin, cos) = self.angle(u).sin_cos();
        self.center + Vector3d::new(cos, sin, 0.0) * self.radius
    }

    fn section_type(&self) -> &'static str {
        "arc"
    }

    fn d_pd(&self, u: f64) -> Vector3d {
        let (sin, cos) = self.angle(u).sin_cos();
        Vector3d::new(-sin, cos, 0.0) * (self.radius * self.sweep())
    }

    fn dd_pd(&self, u: f64) -> Vector3d {
        let (sin, cos) = self.angle(u).sin_cos();
        Vector3d::new(cos, sin, 0.0) * (-self.radius * self.sweep().powi(2))
    }

    fn ddd_pd(&self, u: f64) -> Vector3d {
        let (sin, cos) = self.angle(u).sin_cos();
        Vector3d::new(sin, -cos, 0.0) * (self.radius * self.sweep().powi(3))
    }

    fn curvature(&self, _u: f64) -> f64 {
        if self.radius > 0.0 && self.sweep() != 0.0 {
            1.0 / self.radius
        } else {
            0.0
        }
    }

    fn torsion(&self, _u: f64) -> f64 {
        0.0
    }

    fn derivative_norm(&self, _u: f64) -> f64 {
        self.length()
    }
}

/// A full circle lying in a horizontal plane, starting on the positive x-axis.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Circle {
    arc: Arc,
}

impl Circle {
    /// Creates a circle which is travelled counter-clockwise, or clockwise if `clockwise` is set.
    pub fn new(center: Point3d, radius: f64, clockwise: bool) -> Self {
        let end_angle = if clockwise { -TAU } else { TAU };
        Self {
            arc: Arc::new(center, radius, 0.0, end_angle),
        }
    }

    /// The centre of the circle.
    pub fn center(&self) -> Point3d {
        self.arc.center()
    }

    /// The radius of the circle.
    pub fn radius(&self) -> f64 {
        self.arc.radius()
    }
}

impl ParametricCurve3d for Circle {
    fn pd(&self, u: f64) -> Point3d {
        self.arc.pd(u)
    }

    fn section_type(&self) -> &'static str {
        "circle"
    }

    fn d_pd(&self, u: f64) -> Vector3d {
        self.arc.d_pd(u)
    }

    fn dd_pd(&self, u: f64) -> Vector3d {
        self.arc.dd_pd(u)
    }

    fn ddd_pd(&self, u: f64) -> Vector3d {
        self.arc.ddd_pd(u)
    }

    fn curvature(&self, u: f64) -> f64 {
        self.arc.curvature(u)
    }

    fn torsion(&self, u: f64) -> f64 {
        self.arc.torsion(u)
    }

    fn derivative_norm(&self, u: f64) -> f64 {
        self.arc.derivative_norm(u)
    }
}
