use super::{
    curvature_from_derivatives, planar_angle, torsion_from_derivatives, Point3d, Vector3d,
};
use cgmath::prelude::*;

/// The parametric step used by the finite difference derivatives.
const DERIVATIVE_DELTA: f64 = 1e-4;

/// Absorbs rounding when computing how many samples fit in `[0, 1]`,
/// so a step of `0.1` still reaches `u = 1`.
const SAMPLE_COUNT_TOLERANCE: f64 = 1e-9;

/// The most samples a single curve may be split into.
pub const MAX_CURVE_SAMPLES: usize = 1 << 24;

/// The number of samples a step fits into `[0, 1]`, counting both `u = 0`
/// and the last sample at or before `u = 1`.
///
/// Returns `None` for a step which isn't strictly positive and finite, or
/// which is so small it would need more than [MAX_CURVE_SAMPLES] samples.
pub fn sample_count(step: f64) -> Option<usize> {
    if !(step > 0.0 && step.is_finite()) {
        return None;
    }
    let intervals = (1.0 / step + SAMPLE_COUNT_TOLERANCE).floor();
    if intervals >= MAX_CURVE_SAMPLES as f64 {
        return None;
    }
    Some(intervals as usize + 1)
}

/// A parametric curve in 3D space, normalized to the local parameter `u` in `[0, 1]`.
///
/// Only [`pd`](Self::pd) and [`section_type`](Self::section_type) are required.
/// Everything else has a generic default built on top of the derivatives,
/// which implementors should override whenever a closed form exists.
pub trait ParametricCurve3d {
    /// Samples the position of the curve.
    fn pd(&self, u: f64) -> Point3d;

    /// A stable tag identifying the kind of curve, such as `"line"` or `"arc"`.
    fn section_type(&self) -> &'static str;

    /// Samples the derivative of the curve with respect to `u`.
    ///
    /// The default implementation approximates the derivative with a
    /// central difference around `u`.
    fn d_pd(&self, u: f64) -> Vector3d {
        let p1 = self.pd(u - DERIVATIVE_DELTA);
        let p2 = self.pd(u + DERIVATIVE_DELTA);
        (p2 - p1) / (2.0 * DERIVATIVE_DELTA)
    }

    /// Samples the second derivative of the curve with respect to `u`.
    ///
    /// The default implementation approximates the derivative with a
    /// central difference of [`d_pd`](Self::d_pd).
    fn dd_pd(&self, u: f64) -> Vector3d {
        let d1 = self.d_pd(u - DERIVATIVE_DELTA);
        let d2 = self.d_pd(u + DERIVATIVE_DELTA);
        (d2 - d1) / (2.0 * DERIVATIVE_DELTA)
    }

    /// Samples the third derivative of the curve with respect to `u`.
    /// Only used to compute the torsion.
    fn ddd_pd(&self, u: f64) -> Vector3d {
        let dd1 = self.dd_pd(u - DERIVATIVE_DELTA);
        let dd2 = self.dd_pd(u + DERIVATIVE_DELTA);
        (dd2 - dd1) / (2.0 * DERIVATIVE_DELTA)
    }

    /// The curvature of the curve, `|d_pd x dd_pd| / |d_pd|^3`.
    fn curvature(&self, u: f64) -> f64 {
        curvature_from_derivatives(self.d_pd(u), self.dd_pd(u))
    }

    /// The torsion of the curve, `((d_pd x dd_pd) . ddd_pd) / |d_pd x dd_pd|^2`.
    fn torsion(&self, u: f64) -> f64 {
        torsion_from_derivatives(self.d_pd(u), self.dd_pd(u), self.ddd_pd(u))
    }

    /// The heading of the tangent projected onto the XY plane, in radians.
    fn tangent_angle(&self, u: f64) -> f64 {
        planar_angle(self.d_pd(u))
    }

    /// The norm of the first derivative, relating parametric speed to arclength speed.
    fn derivative_norm(&self, u: f64) -> f64 {
        self.d_pd(u).magnitude()
    }
}

/// Evenly spaced samples of a curve, taken at a fixed parametric step from `u = 0`.
///
/// The iterator is lazy and cheap to clone, so a sequence can be restarted
/// by cloning it before consuming.
pub struct CurveSamples<'a, C: ?Sized> {
    curve: &'a C,
    step: f64,
    index: usize,
    count: usize,
}

impl<'a, C: ParametricCurve3d + ?Sized> CurveSamples<'a, C> {
    /// Creates a sample sequence.
    ///
    /// A step rejected by [sample_count] produces no samples.
    pub fn new(curve: &'a C, step: f64) -> Self {
        let count = sample_count(step).unwrap_or(0);
        Self {
            curve,
            step,
            index: 0,
            count,
        }
    }
}

impl<'a, C: ?Sized> Clone for CurveSamples<'a, C> {
    fn clone(&self) -> Self {
        Self {
            curve: self.curve,
            step: self.step,
            index: self.index,
            count: self.count,
        }
    }
}

impl<'a, C: ParametricCurve3d + ?Sized> Iterator for CurveSamples<'a, C> {
    type Item = Point3d;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.count {
            return None;
        }
        let u = f64::min(self.index as f64 * self.step, 1.0);
        self.index += 1;
        Some(self.curve.pd(u))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl<'a, C: ParametricCurve3d + ?Sized> ExactSizeIterator for CurveSamples<'a, C> {}
