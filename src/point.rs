use derive_more::Display;
use serde::Deserialize;
use serde::Serialize;

use crate::vector::Vector2;

/// Number of decimal digits kept by [`digitize`].
pub const DIGITS: i32 = 2;

/// Rounds to [`DIGITS`] decimal places, halves away from zero. Never returns
/// `-0.0`, which would print as `-0`.
pub fn digitize(z: f64) -> f64 {
    let factor = 10f64.powi(DIGITS);
    (z * factor).round() / factor + 0.0
}

/// A sample in data space. Both coordinates are digitized on construction,
/// so two points built from nearby inputs compare equal.
#[derive(Clone, Copy, Debug, PartialEq, Display, Serialize, Deserialize)]
#[display(fmt = "({},{})", u, v)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    u: f64,
    v: f64,
}

impl Point {
    pub fn new(u: f64, v: f64) -> Self {
        Point {
            u: digitize(u),
            v: digitize(v),
        }
    }

    pub fn u(&self) -> f64 {
        self.u
    }

    pub fn v(&self) -> f64 {
        self.v
    }
}

impl From<[f64; 2]> for Point {
    fn from([u, v]: [f64; 2]) -> Self {
        Point::new(u, v)
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.u, p.v]
    }
}

impl From<Point> for Vector2 {
    fn from(p: Point) -> Self {
        Vector2::new(p.u, p.v)
    }
}

impl From<Vector2> for Point {
    fn from(v: Vector2) -> Self {
        Point::new(v.x, v.y)
    }
}
