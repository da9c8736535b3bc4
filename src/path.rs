use crate::debug::debug_polyline;
use crate::math::{sample_count, Point3d, Vector3d};
use crate::section::{Section, SectionAttributes};
use crate::util::Interval;
use cache::SampleCache;
use log::{debug, trace, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::rc::Rc;

mod cache;

/// How far below the number of sections the progress parameter is clamped.
///
/// Keeps `floor(gamma)` on the last section when `gamma` is at the very
/// end of the path, so that the final section is queried at `u` just
/// under 1 rather than a section one past the end.
pub const GAMMA_UPPER_MARGIN: f64 = 1e-10;

/// A continuous path made up of a sequence of sections.
///
/// The path is addressed by a single progress parameter `gamma` in `[0, N]`,
/// where `N` is the number of sections. Section `i` covers `[i, i + 1)` and is
/// queried with the local parameter `u = gamma - i`.
///
/// Every query on an empty path returns `None`.
#[derive(Debug, Default)]
pub struct Path {
    /// The sections of the path, in order.
    sections: Vec<Rc<Section>>,
    /// Lazily computed samples of the whole path.
    cache: SampleCache,
}

/// Every quantity of a path evaluated at a single progress value.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathData {
    /// The desired position.
    pub pd: Point3d,
    /// The derivative of the position with respect to `gamma`.
    pub d_pd: Vector3d,
    /// The second derivative of the position with respect to `gamma`.
    pub dd_pd: Vector3d,
    pub curvature: f64,
    pub torsion: f64,
    /// The heading of the tangent in the XY plane, in radians.
    pub tangent_angle: f64,
    /// The norm of `d_pd`.
    pub derivative_norm: f64,
    /// The desired vehicle speed in m/s.
    pub vehicle_speed: f64,
    /// The desired rate of change of `gamma`.
    pub vd: f64,
    /// The derivative of `vd` with respect to `gamma`.
    pub d_vd: f64,
    /// The range of valid progress values of the path.
    pub bounds: Interval<f64>,
}

impl Path {
    /// Creates an empty path.
    pub fn new() -> Self {
        Default::default()
    }

    /// Creates a path from the attributes of its sections, in order.
    pub fn from_attributes(sections: &[SectionAttributes]) -> Self {
        let mut path = Self::new();
        for attribs in sections {
            path.push_back(Section::from_attributes(attribs));
        }
        path
    }

    /// Appends a section to the end of the path.
    ///
    /// If the path has already been sampled, only the new section is sampled
    /// and its points appended, so earlier samples are left untouched.
    pub fn push_back(&mut self, section: impl Into<Rc<Section>>) {
        let section = section.into();
        let added = self.cache.extend(&section);
        if let Some(step) = self.cache.step() {
            trace!("Extended path samples by {} points at a step of {}", added, step);
        }
        self.sections.push(section);
    }

    /// Removes every section, returning the path to its initial state.
    pub fn clear(&mut self) {
        trace!("Clearing path of {} sections", self.sections.len());
        self.sections.clear();
        self.cache.clear();
    }

    /// The number of sections in the path.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns true if the path has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Iterates over the sections of the path, in order.
    pub fn sections(&self) -> impl Iterator<Item = &Rc<Section>> + '_ {
        self.sections.iter()
    }

    /// The smallest valid progress value.
    pub fn min_gamma(&self) -> f64 {
        0.0
    }

    /// The largest valid progress value, which is the number of sections.
    pub fn max_gamma(&self) -> f64 {
        self.sections.len() as f64
    }

    /// The range of valid progress values.
    pub fn gamma_bounds(&self) -> Interval<f64> {
        Interval::new(self.min_gamma(), self.max_gamma())
    }

    /// Clamps a progress value to `[0, N - GAMMA_UPPER_MARGIN]`.
    ///
    /// Out of range values are never reported as errors: a controller whose
    /// integrated progress drifts past either end simply keeps tracking the
    /// nearest end of the path. NaN is treated as the start of the path.
    pub fn bound_gamma(&self, gamma: f64) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        Interval::new(self.min_gamma(), self.max_gamma() - GAMMA_UPPER_MARGIN).clamp(gamma)
    }

    /// The index of the section containing `gamma`.
    ///
    /// A progress value on an integer boundary `i` belongs to section `i`.
    pub fn section_index(&self, gamma: f64) -> Option<usize> {
        let last = self.sections.len().checked_sub(1)?;
        let index = self.bound_gamma(gamma).floor() as usize;
        Some(usize::min(index, last))
    }

    /// The section containing `gamma`.
    pub fn section(&self, gamma: f64) -> Option<Rc<Section>> {
        self.section_index(gamma)
            .map(|index| self.sections[index].clone())
    }

    /// The type of the section containing `gamma`.
    pub fn section_type(&self, gamma: f64) -> Option<&'static str> {
        self.locate(gamma).map(|(section, _)| section.section_type())
    }

    /// The desired position.
    pub fn pd(&self, gamma: f64) -> Option<Point3d> {
        self.locate(gamma).map(|(section, u)| section.pd(u))
    }

    /// The derivative of the position with respect to `gamma`.
    pub fn d_pd(&self, gamma: f64) -> Option<Vector3d> {
        self.locate(gamma).map(|(section, u)| section.d_pd(u))
    }

    /// The second derivative of the position with respect to `gamma`.
    pub fn dd_pd(&self, gamma: f64) -> Option<Vector3d> {
        self.locate(gamma).map(|(section, u)| section.dd_pd(u))
    }

    pub fn curvature(&self, gamma: f64) -> Option<f64> {
        self.locate(gamma).map(|(section, u)| section.curvature(u))
    }

    pub fn torsion(&self, gamma: f64) -> Option<f64> {
        self.locate(gamma).map(|(section, u)| section.torsion(u))
    }

    /// The heading of the tangent in the XY plane, in radians.
    pub fn tangent_angle(&self, gamma: f64) -> Option<f64> {
        self.locate(gamma).map(|(section, u)| section.tangent_angle(u))
    }

    /// The norm of the derivative of the position.
    pub fn derivative_norm(&self, gamma: f64) -> Option<f64> {
        self.locate(gamma)
            .map(|(section, u)| section.derivative_norm(u))
    }

    /// The desired vehicle speed in m/s.
    pub fn vehicle_speed(&self, gamma: f64) -> Option<f64> {
        self.locate(gamma).map(|(section, u)| section.vehicle_speed(u))
    }

    /// The desired rate of change of `gamma`.
    pub fn vd(&self, gamma: f64) -> Option<f64> {
        self.locate(gamma).map(|(section, u)| section.vd(u))
    }

    /// The derivative of [`vd`](Self::vd) with respect to `gamma`.
    pub fn d_vd(&self, gamma: f64) -> Option<f64> {
        self.locate(gamma).map(|(section, u)| section.d_vd(u))
    }

    /// Evaluates every quantity of the path at `gamma` with a single section lookup.
    pub fn all_data(&self, gamma: f64) -> Option<PathData> {
        let (section, u) = self.locate(gamma)?;
        Some(PathData {
            pd: section.pd(u),
            d_pd: section.d_pd(u),
            dd_pd: section.dd_pd(u),
            curvature: section.curvature(u),
            torsion: section.torsion(u),
            tangent_angle: section.tangent_angle(u),
            derivative_norm: section.derivative_norm(u),
            vehicle_speed: section.vehicle_speed(u),
            vd: section.vd(u),
            d_vd: section.d_vd(u),
            bounds: self.gamma_bounds(),
        })
    }

    /// The position at the very end of the path.
    pub fn last_pd(&self) -> Option<Point3d> {
        self.sections.last().map(|section| section.pd(1.0))
    }

    /// Samples every section of the path at a fixed parametric step.
    ///
    /// The samples are cached, and only recomputed when a different step is
    /// requested. A step rejected by [sample_count] produces no points and
    /// leaves the cache untouched.
    pub fn samples(&mut self, step: f64) -> Option<&[Point3d]> {
        if self.is_empty() {
            return None;
        }
        if sample_count(step).is_none() {
            warn!("Cannot sample path with a step of {}", step);
            return Some(&[]);
        }
        if !self.cache.is_valid_for(step) {
            debug!(
                "Sampling path of {} sections with a step of {}",
                self.sections.len(),
                step
            );
            self.cache.rebuild(step, self.sections.iter().map(|s| &**s));
            debug_polyline("path_samples", self.cache.points());
        }
        Some(self.cache.points())
    }

    /// Finds the section containing `gamma` and the local parameter within it.
    fn locate(&self, gamma: f64) -> Option<(&Section, f64)> {
        let gamma = self.bound_gamma(gamma);
        let index = self.section_index(gamma)?;
        Some((&*self.sections[index], gamma - index as f64))
    }
}
