//! Continuous paths built from analytic sections, for vehicle path following.
//!
//! A [Path] is addressed by a single progress parameter `gamma`. Each
//! [Section] of the path owns a unit interval of `gamma` and pairs a
//! normalized curve from [math] with a [Speed] law describing how fast the
//! progress parameter should evolve along it.

pub use cgmath;
#[cfg(feature = "debug")]
pub use debug::take_debug_frame;
pub use path::{Path, PathData, GAMMA_UPPER_MARGIN};
pub use section::{Section, SectionAttributes, SpeedAttributes};
pub use speed::{ArcLengthSpeed, ConstSpeed, Speed};
pub use util::Interval;

mod debug;
pub mod math;
mod path;
mod section;
pub mod speed;
mod util;
