use super::Speed;
use crate::math::{magnitude_with_derivative, ParametricCurve3d};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A speed law which keeps the vehicle at a constant physical speed.
///
/// The progress speed is scaled by the inverse of the derivative norm, so
/// the vehicle covers the same distance per second regardless of how the
/// section is parametrised.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArcLengthSpeed {
    /// The vehicle speed in m/s.
    speed: f64,
}

impl ArcLengthSpeed {
    pub const fn new(speed: f64) -> Self {
        Self { speed }
    }
}

impl Speed for ArcLengthSpeed {
    fn vd(&self, u: f64, curve: &dyn ParametricCurve3d) -> f64 {
        let norm = curve.derivative_norm(u);
        if norm > 0.0 {
            self.speed / norm
        } else {
            0.0
        }
    }

    fn d_vd(&self, u: f64, curve: &dyn ParametricCurve3d) -> f64 {
        let (norm, d_norm) = magnitude_with_derivative(curve.d_pd(u), curve.dd_pd(u));
        if norm > 0.0 {
            -self.speed * d_norm / (norm * norm)
        } else {
            0.0
        }
    }

    fn vehicle_speed(&self, _u: f64, _curve: &dyn ParametricCurve3d) -> f64 {
        self.speed
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::{Line, ParametricCurve3d, Point3d, Vector3d};
    use assert_approx_eq::assert_approx_eq;

    /// A line whose parametric speed grows along it: p(u) = (u^2, 0, 0).
    struct Accelerating;

    impl ParametricCurve3d for Accelerating {
        fn pd(&self, u: f64) -> Point3d {
            Point3d::new(u * u, 0.0, 0.0)
        }

        fn section_type(&self) -> &'static str {
            "accelerating"
        }

        fn d_pd(&self, u: f64) -> Vector3d {
            Vector3d::new(2.0 * u, 0.0, 0.0)
        }

        fn dd_pd(&self, _u: f64) -> Vector3d {
            Vector3d::new(2.0, 0.0, 0.0)
        }
    }

    #[test]
    fn scales_by_line_length() {
        let speed = ArcLengthSpeed::new(3.0);
        let line = Line::from_ends(Point3d::new(0.0, 0.0, 0.0), Point3d::new(0.0, 6.0, 8.0));
        assert_approx_eq!(speed.vd(0.4, &line), 0.3);
        assert_approx_eq!(speed.d_vd(0.4, &line), 0.0);
        assert_approx_eq!(speed.vehicle_speed(0.4, &line), 3.0);
    }

    #[test]
    fn derivative_follows_parametrisation() {
        // vd = v / 2u, so d_vd = -v / 2u^2
        let speed = ArcLengthSpeed::new(2.0);
        for u in [0.25, 0.5, 1.0] {
            assert_approx_eq!(speed.vd(u, &Accelerating), 1.0 / u);
            assert_approx_eq!(speed.d_vd(u, &Accelerating), -1.0 / (u * u));
        }
    }

    #[test]
    fn degenerate_curve_stops() {
        let speed = ArcLengthSpeed::new(2.0);
        assert_eq!(speed.vd(0.0, &Accelerating), 0.0);
        assert_eq!(speed.d_vd(0.0, &Accelerating), 0.0);
    }
}
