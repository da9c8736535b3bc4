use super::Vector3d;
use cgmath::prelude::*;

/// Below this magnitude a cross product is treated as zero.
const DEGENERATE_EPS: f64 = 1e-12;

/// Computes the curvature of a curve from its first and second derivatives.
///
/// Returns zero where the first derivative vanishes.
pub fn curvature_from_derivatives(d: Vector3d, dd: Vector3d) -> f64 {
    let speed = d.magnitude();
    if speed < DEGENERATE_EPS {
        return 0.0;
    }
    d.cross(dd).magnitude() / speed.powi(3)
}

/// Computes the torsion of a curve from its first three derivatives.
///
/// Returns zero where the curve is locally straight, as the osculating
/// plane is undefined there.
pub fn torsion_from_derivatives(d: Vector3d, dd: Vector3d, ddd: Vector3d) -> f64 {
    let binormal = d.cross(dd);
    let mag2 = binormal.magnitude2();
    if mag2 < DEGENERATE_EPS * DEGENERATE_EPS {
        return 0.0;
    }
    binormal.dot(ddd) / mag2
}

/// The angle of a vector projected onto the XY plane, in radians.
pub fn planar_angle(v: Vector3d) -> f64 {
    f64::atan2(v.y, v.x)
}

/// Normalises a vector and computes the derivative of its magnitude.
///
/// # Parameters
/// * `v` - The vector to normalize
/// * `dv` - The derivative of `v`
///
/// # Returns
/// A tuple containing the magnitude of `v`, and its derivative.
#[inline(always)]
pub fn magnitude_with_derivative(v: Vector3d, dv: Vector3d) -> (f64, f64) {
    let mag = v.magnitude();
    if mag < DEGENERATE_EPS {
        return (0.0, 0.0);
    }
    (mag, v.dot(dv) / mag)
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use cgmath::Zero;

    #[test]
    fn straight_line_has_no_curvature() {
        let d = Vector3d::new(3.0, 4.0, 0.0);
        assert_approx_eq!(curvature_from_derivatives(d, Vector3d::zero()), 0.0);
        assert_approx_eq!(torsion_from_derivatives(d, Vector3d::zero(), Vector3d::zero()), 0.0);
    }

    #[test]
    fn helix_curvature_and_torsion() {
        // r(t) = (a cos t, a sin t, b t) at t = 0
        let (a, b) = (2.0, 0.5);
        let d = Vector3d::new(0.0, a, b);
        let dd = Vector3d::new(-a, 0.0, 0.0);
        let ddd = Vector3d::new(0.0, -a, 0.0);
        let denom = a * a + b * b;
        assert_approx_eq!(curvature_from_derivatives(d, dd), a / denom);
        assert_approx_eq!(torsion_from_derivatives(d, dd, ddd), b / denom);
    }

    #[test]
    fn planar_angle_ignores_z() {
        let angle = planar_angle(Vector3d::new(0.0, 1.0, 5.0));
        assert_approx_eq!(angle, std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn degenerate_magnitude() {
        let (mag, dmag) = magnitude_with_derivative(Vector3d::zero(), Vector3d::unit_x());
        assert_eq!((mag, dmag), (0.0, 0.0));
        let (mag, dmag) =
            magnitude_with_derivative(Vector3d::new(3.0, 4.0, 0.0), Vector3d::new(1.0, 0.0, 0.0));
        assert_approx_eq!(mag, 5.0);
        assert_approx_eq!(dmag, 0.6);
    }
}
