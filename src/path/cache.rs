use crate::math::Point3d;
use crate::section::Section;

/// Two step sizes closer than this are considered equal.
const STEP_TOLERANCE: f64 = 1e-10;

/// A polyline approximation of a whole path, valid for a single step size.
#[derive(Clone, Debug, Default)]
pub(crate) struct SampleCache {
    /// The step the points were sampled with, or `None` if never populated.
    step: Option<f64>,
    /// The samples of every section, in path order.
    points: Vec<Point3d>,
}

impl SampleCache {
    /// Whether the cached points were sampled with the given step.
    pub fn is_valid_for(&self, step: f64) -> bool {
        self.step
            .map_or(false, |cached| (cached - step).abs() < STEP_TOLERANCE)
    }

    /// The step of the cached points, if the cache has been populated.
    pub fn step(&self) -> Option<f64> {
        self.step
    }

    pub fn points(&self) -> &[Point3d] {
        &self.points
    }

    /// Discards the cached points and resamples every section.
    pub fn rebuild<'a>(&mut self, step: f64, sections: impl Iterator<Item = &'a Section>) {
        self.points.clear();
        self.step = Some(step);
        for section in sections {
            self.points.extend(section.samples(step));
        }
    }

    /// Appends the samples of a newly added section, if the cache is populated.
    ///
    /// Returns the number of points appended.
    pub fn extend(&mut self, section: &Section) -> usize {
        match self.step {
            Some(step) => {
                let len = self.points.len();
                self.points.extend(section.samples(step));
                self.points.len() - len
            }
            None => 0,
        }
    }

    /// Returns the cache to its unpopulated state.
    pub fn clear(&mut self) {
        self.step = None;
        self.points.clear();
    }
}
