use crate::math::{
    Arc, Circle, CurveSamples, Lemniscate, Line, ParametricCurve3d, Point3d, Vector3d,
};
use crate::speed::{ArcLengthSpeed, ConstSpeed, Speed};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single segment of a path: a normalized curve paired with the speed law
/// used to traverse it.
///
/// Sections are immutable once built. Every query takes the local
/// parameter `u`, which must already lie within `[0, 1]`.
pub struct Section {
    /// The geometry of the section.
    curve: Box<dyn ParametricCurve3d>,
    /// The speed assignment along the section.
    speed: Box<dyn Speed>,
}

/// The attributes of a section.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "type", rename_all = "snake_case")
)]
pub enum SectionAttributes {
    /// A straight line between two points.
    Line {
        start: Point3d,
        end: Point3d,
        #[cfg_attr(feature = "serde", serde(default))]
        speed: SpeedAttributes,
    },
    /// An arc around `center` from `start` to the angle of `end`.
    Arc {
        start: Point3d,
        end: Point3d,
        center: Point3d,
        clockwise: bool,
        #[cfg_attr(feature = "serde", serde(default))]
        speed: SpeedAttributes,
    },
    /// A full circle starting on the positive x-axis.
    Circle {
        center: Point3d,
        radius: f64,
        clockwise: bool,
        #[cfg_attr(feature = "serde", serde(default))]
        speed: SpeedAttributes,
    },
    /// A figure-eight with its tips `width` units from the centre.
    Lemniscate {
        center: Point3d,
        width: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        speed: SpeedAttributes,
    },
}

/// The attributes of a speed law.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "law", rename_all = "snake_case")
)]
pub enum SpeedAttributes {
    /// A constant progress speed, see [ConstSpeed].
    Const { speed: f64 },
    /// A constant vehicle speed in m/s, see [ArcLengthSpeed].
    ArcLength { speed: f64 },
}

impl Default for SpeedAttributes {
    fn default() -> Self {
        Self::Const {
            speed: ConstSpeed::default().speed(),
        }
    }
}

impl SpeedAttributes {
    fn build(&self) -> Box<dyn Speed> {
        match *self {
            Self::Const { speed } => Box::new(ConstSpeed::new(speed)),
            Self::ArcLength { speed } => Box::new(ArcLengthSpeed::new(speed)),
        }
    }
}

impl Section {
    /// Creates a section travelled with the default [ConstSpeed].
    pub fn new(curve: impl ParametricCurve3d + 'static) -> Self {
        Self::with_speed(curve, ConstSpeed::default())
    }

    /// Creates a section with the given speed law.
    pub fn with_speed(
        curve: impl ParametricCurve3d + 'static,
        speed: impl Speed + 'static,
    ) -> Self {
        Self {
            curve: Box::new(curve),
            speed: Box::new(speed),
        }
    }

    /// Creates a section from its attributes.
    pub fn from_attributes(attribs: &SectionAttributes) -> Self {
        let curve: Box<dyn ParametricCurve3d> = match *attribs {
            SectionAttributes::Line { start, end, .. } => Box::new(Line::from_ends(start, end)),
            SectionAttributes::Arc {
                start,
                end,
                center,
                clockwise,
                ..
            } => Box::new(Arc::from_points(start, end, center, clockwise)),
            SectionAttributes::Circle {
                center,
                radius,
                clockwise,
                ..
            } => Box::new(Circle::new(center, radius, clockwise)),
            SectionAttributes::Lemniscate { center, width, .. } => {
                Box::new(Lemniscate::new(center, width))
            }
        };
        let speed = match attribs {
            SectionAttributes::Line { speed, .. }
            | SectionAttributes::Arc { speed, .. }
            | SectionAttributes::Circle { speed, .. }
            | SectionAttributes::Lemniscate { speed, .. } => speed,
        };
        Self {
            curve,
            speed: speed.build(),
        }
    }

    /// The geometry of the section.
    pub fn curve(&self) -> &dyn ParametricCurve3d {
        &*self.curve
    }

    /// A stable tag describing the kind of section, such as `"line"` or `"circle"`.
    pub fn section_type(&self) -> &'static str {
        self.curve.section_type()
    }

    /// The position at `u`.
    pub fn pd(&self, u: f64) -> Point3d {
        self.curve.pd(u)
    }

    /// The first derivative of the position with respect to `u`.
    pub fn d_pd(&self, u: f64) -> Vector3d {
        self.curve.d_pd(u)
    }

    /// The second derivative of the position with respect to `u`.
    pub fn dd_pd(&self, u: f64) -> Vector3d {
        self.curve.dd_pd(u)
    }

    pub fn curvature(&self, u: f64) -> f64 {
        self.curve.curvature(u)
    }

    pub fn torsion(&self, u: f64) -> f64 {
        self.curve.torsion(u)
    }

    /// The heading of the tangent in the XY plane, in radians.
    pub fn tangent_angle(&self, u: f64) -> f64 {
        self.curve.tangent_angle(u)
    }

    /// The norm of the first derivative.
    pub fn derivative_norm(&self, u: f64) -> f64 {
        self.curve.derivative_norm(u)
    }

    /// The desired vehicle speed in m/s.
    pub fn vehicle_speed(&self, u: f64) -> f64 {
        self.speed.vehicle_speed(u, self.curve())
    }

    /// The desired rate of change of the progress parameter.
    pub fn vd(&self, u: f64) -> f64 {
        self.speed.vd(u, self.curve())
    }

    /// The derivative of [`vd`](Self::vd) with respect to the progress parameter.
    pub fn d_vd(&self, u: f64) -> f64 {
        self.speed.d_vd(u, self.curve())
    }

    /// Samples the section at a fixed parametric step from `u = 0` to `u = 1`.
    pub fn samples(&self, step: f64) -> CurveSamples<'_, dyn ParametricCurve3d> {
        CurveSamples::new(&*self.curve, step)
    }
}

impl fmt::Debug for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Section({})", self.section_type())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn section_delegates_to_curve_and_speed() {
        let line = Line::from_ends(Point3d::new(0.0, 0.0, 0.0), Point3d::new(4.0, 0.0, 0.0));
        let section = Section::with_speed(line, ArcLengthSpeed::new(2.0));
        assert_eq!(section.section_type(), "line");
        assert_eq!(section.pd(0.25), Point3d::new(1.0, 0.0, 0.0));
        assert_eq!(section.d_pd(0.25), Vector3d::new(4.0, 0.0, 0.0));
        assert_approx_eq!(section.derivative_norm(0.25), 4.0);
        assert_approx_eq!(section.vd(0.25), 0.5);
        assert_approx_eq!(section.d_vd(0.25), 0.0);
        assert_approx_eq!(section.vehicle_speed(0.25), 2.0);
    }

    #[test]
    fn section_defaults_to_constant_speed() {
        let section = Section::new(Circle::new(Point3d::new(0.0, 0.0, 0.0), 3.0, false));
        assert_eq!(section.vd(0.7), 1.0);
        assert_eq!(section.d_vd(0.7), 0.0);
        assert_eq!(section.vehicle_speed(0.7), 1.0);
        assert_approx_eq!(section.curvature(0.7), 1.0 / 3.0);
        assert_eq!(section.torsion(0.7), 0.0);
        assert_eq!(format!("{:?}", section), "Section(circle)");
    }

    #[test]
    fn section_samples_follow_curve() {
        let section = Section::new(Line::from_ends(
            Point3d::new(0.0, 0.0, 0.0),
            Point3d::new(0.0, 2.0, 0.0),
        ));
        let samples = section.samples(0.5).collect::<Vec<_>>();
        assert_eq!(
            samples,
            vec![
                Point3d::new(0.0, 0.0, 0.0),
                Point3d::new(0.0, 1.0, 0.0),
                Point3d::new(0.0, 2.0, 0.0),
            ]
        );
    }

    #[test]
    fn section_from_attributes() {
        let attribs = SectionAttributes::Arc {
            start: Point3d::new(2.0, 0.0, 1.0),
            end: Point3d::new(-2.0, 0.0, 1.0),
            center: Point3d::new(0.0, 0.0, 1.0),
            clockwise: false,
            speed: SpeedAttributes::ArcLength { speed: 4.0 },
        };
        let section = Section::from_attributes(&attribs);
        assert_eq!(section.section_type(), "arc");
        let end = section.pd(1.0);
        assert_approx_eq!(end.x, -2.0);
        assert_approx_eq!(end.y, 0.0);
        assert_approx_eq!(section.vehicle_speed(0.5), 4.0);
        assert_approx_eq!(section.vd(0.5), 4.0 / (2.0 * std::f64::consts::PI));
    }
}
