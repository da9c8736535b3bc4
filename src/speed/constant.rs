use super::Speed;
use crate::math::ParametricCurve3d;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The default speed of a section, in m/s.
const DEFAULT_SPEED: f64 = 1.0;

/// A speed law which always returns the same progress speed.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConstSpeed {
    speed: f64,
}

impl ConstSpeed {
    pub const fn new(speed: f64) -> Self {
        Self { speed }
    }

    /// The configured speed.
    pub fn speed(&self) -> f64 {
        self.speed
    }
}

impl Default for ConstSpeed {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED)
    }
}

impl Speed for ConstSpeed {
    fn vd(&self, _u: f64, _curve: &dyn ParametricCurve3d) -> f64 {
        self.speed
    }

    fn d_vd(&self, _u: f64, _curve: &dyn ParametricCurve3d) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::{Arc, Line, Point3d};

    #[test]
    fn constant_everywhere() {
        let speed = ConstSpeed::new(2.5);
        let line = Line::from_ends(Point3d::new(0.0, 0.0, 0.0), Point3d::new(10.0, 0.0, 0.0));
        let arc = Arc::new(Point3d::new(0.0, 0.0, 0.0), 0.1, 0.0, 3.0);
        let curves: [&dyn ParametricCurve3d; 2] = [&line, &arc];
        for i in 0..=20 {
            let u = 0.05 * i as f64;
            for curve in curves {
                assert_eq!(speed.vd(u, curve), 2.5);
                assert_eq!(speed.d_vd(u, curve), 0.0);
                assert_eq!(speed.vehicle_speed(u, curve), 2.5);
            }
        }
    }

    #[test]
    fn default_speed() {
        assert_eq!(ConstSpeed::default().speed(), 1.0);
    }
}
