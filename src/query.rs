//! Statistics derived from the active points, recomputed on every call.

use crate::history::PointHistory;
use crate::point::Point;
use crate::stats::Moments;
use crate::vector::Vector2;

/// Correlation and least-squares line `v = a u + b`. `None` marks a value
/// that is undefined for the current points and should not be displayed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Regression {
    pub r: Option<f64>,
    pub a: Option<f64>,
    pub b: Option<f64>,
}

/// Sample mean and principal axes, `[major, minor]`, each scaled to one
/// standard deviation along its direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrincipalAxes {
    pub mean_point: Option<Vector2>,
    pub axes: [Vector2; 2],
}

fn defined(x: f64) -> Option<f64> {
    x.is_finite().then(|| x)
}

pub fn regression_snapshot(points: &[Point]) -> Regression {
    let moments = Moments::of(points);
    Regression {
        r: defined(moments.correlation()),
        a: defined(moments.slope()),
        b: defined(moments.intercept()),
    }
}

pub fn pca_snapshot(points: &[Point]) -> PrincipalAxes {
    if points.is_empty() {
        return PrincipalAxes {
            mean_point: None,
            axes: [Vector2::ZERO; 2],
        };
    }
    let moments = Moments::of(points);
    let axes = moments
        .covariance_matrix()
        .principal_axes()
        .map(|axis| if axis.is_finite() { axis } else { Vector2::ZERO });
    PrincipalAxes {
        mean_point: moments.mean.is_finite().then(|| moments.mean),
        axes,
    }
}

impl PointHistory {
    pub fn regression_snapshot(&self) -> Regression {
        regression_snapshot(self.active_points())
    }

    pub fn pca_snapshot(&self) -> PrincipalAxes {
        pca_snapshot(self.active_points())
    }
}
