use std::time::Instant;

use vehicle_paths::math::Point3d;
use vehicle_paths::{Path, SectionAttributes, SpeedAttributes};

fn main() {
    let cruise = SpeedAttributes::ArcLength { speed: 2.0 };
    let mut path = Path::from_attributes(&[
        SectionAttributes::Line {
            start: Point3d::new(0.0, 0.0, 2.0),
            end: Point3d::new(10.0, 0.0, 2.0),
            speed: cruise,
        },
        SectionAttributes::Arc {
            start: Point3d::new(10.0, 0.0, 2.0),
            end: Point3d::new(10.0, 10.0, 2.0),
            center: Point3d::new(10.0, 5.0, 2.0),
            clockwise: false,
            speed: SpeedAttributes::ArcLength { speed: 1.0 },
        },
        SectionAttributes::Line {
            start: Point3d::new(10.0, 10.0, 2.0),
            end: Point3d::new(0.0, 10.0, 2.0),
            speed: cruise,
        },
    ]);

    if let Some(samples) = path.samples(0.05) {
        println!("Sampled {} points along {} sections", samples.len(), path.len());
    }

    println!("Following path...");
    let dt = 0.01;
    let mut gamma = path.min_gamma();
    let mut ticks = 0u32;
    let start = Instant::now();
    while let Some(data) = path.all_data(gamma) {
        if gamma >= data.bounds.max {
            break;
        }
        gamma += data.vd * dt;
        ticks += 1;
    }
    let elapsed = start.elapsed();

    println!(
        "Reached {:?} after {} ticks ({:.1} s simulated), avg. query: {:?}",
        path.last_pd(),
        ticks,
        ticks as f64 * dt,
        elapsed / ticks.max(1),
    );
}
