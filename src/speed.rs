//! Speed laws assigning a desired progress speed along a curve.

use crate::math::ParametricCurve3d;
pub use arc_length::ArcLengthSpeed;
pub use constant::ConstSpeed;

mod arc_length;
mod constant;

/// Assigns the desired speed at which the progress parameter should evolve.
///
/// A speed law is attached to a single section, which lets each segment of
/// a composite path carry its own profile. It receives the curve it is
/// evaluated against so that it can react to the local geometry.
pub trait Speed {
    /// The desired rate of change of the progress parameter.
    fn vd(&self, u: f64, curve: &dyn ParametricCurve3d) -> f64;

    /// The derivative of [`vd`](Self::vd) with respect to the progress parameter.
    fn d_vd(&self, u: f64, curve: &dyn ParametricCurve3d) -> f64;

    /// The desired physical speed of the vehicle in m/s.
    ///
    /// Defaults to [`vd`](Self::vd), which is only correct for curves whose
    /// parametrisation has unit speed.
    fn vehicle_speed(&self, u: f64, curve: &dyn ParametricCurve3d) -> f64 {
        self.vd(u, curve)
    }
}
