use num_traits::Float;

use crate::point::Point;
use crate::vector::elem_prod;
use crate::vector::mean;
use crate::vector::sub_scalar;
use crate::vector::Vector2;

/// Population covariance (divisor `n`). `NaN` for empty input.
///
/// The samples are shifted by the first one before centering, so a constant
/// sequence has a covariance of exactly zero.
pub fn covariance<T: Float>(xs: &[T], ys: &[T]) -> T {
    assert_eq!(xs.len(), ys.len(), "covariance of unequal lengths");
    let (kx, ky) = match (xs.first(), ys.first()) {
        (Some(&kx), Some(&ky)) => (kx, ky),
        _ => return T::nan(),
    };
    let (dx, dy) = (sub_scalar(xs, kx), sub_scalar(ys, ky));
    let (mx, my) = (mean(&dx), mean(&dy));
    mean(&elem_prod(&sub_scalar(&dx, mx), &sub_scalar(&dy, my)))
}

pub fn variance<T: Float>(xs: &[T]) -> T {
    covariance(xs, xs)
}

pub fn std_dev<T: Float>(xs: &[T]) -> T {
    variance(xs).sqrt()
}

/// First and second moments of a point set.
///
/// Every derived statistic is `NaN` or infinite when undefined (fewer than two
/// points, or a constant coordinate); nothing here panics on such input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Moments {
    pub mean: Vector2,
    pub var_u: f64,
    pub var_v: f64,
    pub cov_uv: f64,
}

impl Moments {
    pub fn of(points: &[Point]) -> Self {
        let (us, vs): (Vec<f64>, Vec<f64>) = points.iter().map(|p| (p.u(), p.v())).unzip();
        Moments {
            mean: Vector2::new(mean(&us), mean(&vs)),
            var_u: variance(&us),
            var_v: variance(&vs),
            cov_uv: covariance(&us, &vs),
        }
    }

    pub fn std_u(&self) -> f64 {
        self.var_u.sqrt()
    }

    pub fn std_v(&self) -> f64 {
        self.var_v.sqrt()
    }

    /// Pearson correlation coefficient.
    pub fn correlation(&self) -> f64 {
        self.cov_uv / (self.std_u() * self.std_v())
    }

    /// Slope of the least-squares line of `v` on `u`.
    pub fn slope(&self) -> f64 {
        self.cov_uv / self.var_u
    }

    pub fn intercept(&self) -> f64 {
        self.mean.y - self.slope() * self.mean.x
    }

    pub fn covariance_matrix(&self) -> SymmetricMatrix2 {
        SymmetricMatrix2 {
            a: self.var_u,
            b: self.cov_uv,
            d: self.var_v,
        }
    }
}

/// `[[a, b], [b, d]]`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SymmetricMatrix2 {
    pub a: f64,
    pub b: f64,
    pub d: f64,
}

/// Below this fraction of the matrix magnitude both eigenvector candidates
/// are rounding noise.
const ISOTROPY_TOLERANCE: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Eigenpair {
    pub value: f64,
    /// Unit length.
    pub vector: Vector2,
}

impl SymmetricMatrix2 {
    pub fn trace(&self) -> f64 {
        self.a + self.d
    }

    pub fn det(&self) -> f64 {
        self.a * self.d - self.b * self.b
    }

    /// `sqrt(trace² - 4 det)`. The radicand is expanded to `(a - d)² + 4b²`,
    /// which cannot go negative, so a nearly repeated eigenvalue does not lose
    /// half its digits to cancellation.
    pub fn discriminant(&self) -> f64 {
        ((self.a - self.d).powi(2) + 4.0 * self.b * self.b).sqrt()
    }

    /// Eigenpairs in closed form, larger eigenvalue first.
    pub fn eigen(&self) -> [Eigenpair; 2] {
        let (trace, discriminant) = (self.trace(), self.discriminant());
        let lambda1 = (trace + discriminant) / 2.0;
        let lambda2 = (trace - discriminant) / 2.0;
        [
            Eigenpair {
                value: lambda1,
                vector: self.eigenvector(lambda1, Vector2::new(1.0, 0.0)),
            },
            Eigenpair {
                value: lambda2,
                vector: self.eigenvector(lambda2, Vector2::new(0.0, 1.0)),
            },
        ]
    }

    // Both (b, λ - a) and (λ - d, b) solve (M - λI)x = 0; the longer one is
    // the better conditioned. Both vanish, up to rounding, only for a multiple
    // of the identity, where every direction is an eigenvector.
    fn eigenvector(&self, lambda: f64, isotropic: Vector2) -> Vector2 {
        let p = Vector2::new(self.b, lambda - self.a);
        let q = Vector2::new(lambda - self.d, self.b);
        let v = if p.norm() >= q.norm() { p } else { q };
        let norm = v.norm();
        let magnitude = self.a.abs() + self.b.abs() + self.d.abs();
        if norm <= ISOTROPY_TOLERANCE * magnitude {
            isotropic
        } else {
            v.scale(norm.recip())
        }
    }

    /// Eigenvectors scaled by the square root of their eigenvalues,
    /// `[major, minor]`.
    pub fn principal_axes(&self) -> [Vector2; 2] {
        self.eigen()
            .map(|Eigenpair { value, vector }| vector * non_negative(value).sqrt())
    }
}

fn non_negative(x: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else {
        x
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;

    fn points(raw: &[[f64; 2]]) -> Vec<Point> {
        raw.iter().copied().map(Point::from).collect_vec()
    }

    fn close(x: f64, y: f64) -> bool {
        (x - y).abs() < 1e-6
    }

    #[test]
    fn test_covariance() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let ys = [2.0, 4.0, 6.0, 8.0];
        assert!(close(variance(&xs), 1.25));
        assert!(close(covariance(&xs, &ys), 2.5));
        assert!(close(std_dev(&ys), 5f64.sqrt()));
        assert!(covariance::<f64>(&[], &[]).is_nan());
    }

    #[test]
    fn test_constant_sequence_has_zero_variance() {
        assert_eq!(variance(&[0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1]), 0.0);
        assert_eq!(variance(&[33.33; 9]), 0.0);
    }

    #[test]
    fn test_moments_diagonal() {
        let m = Moments::of(&points(&[[0.0, 0.0], [10.0, 10.0]]));
        assert_eq!(m.mean, Vector2::new(5.0, 5.0));
        assert!(close(m.correlation(), 1.0));
        assert!(close(m.slope(), 1.0));
        assert!(close(m.intercept(), 0.0));
    }

    #[test]
    fn test_moments_negative_slope() {
        let m = Moments::of(&points(&[[0.0, 10.0], [10.0, 0.0], [20.0, -10.0]]));
        assert!(close(m.correlation(), -1.0));
        assert!(close(m.slope(), -1.0));
        assert!(close(m.intercept(), 10.0));
    }

    #[test]
    fn test_moments_degenerate() {
        let m = Moments::of(&points(&[[5.0, 5.0]]));
        assert_eq!(m.mean, Vector2::new(5.0, 5.0));
        assert!(m.correlation().is_nan());
        assert!(m.slope().is_nan());
        assert!(m.intercept().is_nan());

        let vertical = Moments::of(&points(&[[3.0, 1.0], [3.0, 2.0], [3.0, 9.0]]));
        assert!(!vertical.correlation().is_finite());
        assert!(!vertical.slope().is_finite());

        let horizontal = Moments::of(&points(&[[1.0, 4.0], [2.0, 4.0], [9.0, 4.0]]));
        assert!(!horizontal.correlation().is_finite());
        assert_eq!(horizontal.slope(), 0.0);
        assert_eq!(horizontal.intercept(), 4.0);
    }

    #[test]
    fn test_eigen_diagonal_matrices() {
        let wide = SymmetricMatrix2 { a: 4.0, b: 0.0, d: 1.0 };
        let [major, minor] = wide.eigen();
        assert_eq!((major.value, minor.value), (4.0, 1.0));
        assert!(close(major.vector.y, 0.0) && close(major.vector.x.abs(), 1.0));
        assert!(close(minor.vector.x, 0.0) && close(minor.vector.y.abs(), 1.0));

        let tall = SymmetricMatrix2 { a: 1.0, b: 0.0, d: 4.0 };
        let [major, minor] = tall.eigen();
        assert_eq!((major.value, minor.value), (4.0, 1.0));
        assert!(close(major.vector.x, 0.0) && close(major.vector.y.abs(), 1.0));
        assert!(close(minor.vector.y, 0.0) && close(minor.vector.x.abs(), 1.0));
    }

    #[test]
    fn test_eigen_isotropic() {
        let m = SymmetricMatrix2 { a: 2.0, b: 0.0, d: 2.0 };
        let [major, minor] = m.principal_axes();
        assert_eq!(major, Vector2::new(2f64.sqrt(), 0.0));
        assert_eq!(minor, Vector2::new(0.0, 2f64.sqrt()));
    }

    #[test]
    fn test_eigen_correlated() {
        let m = SymmetricMatrix2 { a: 2.0, b: 1.0, d: 2.0 };
        let [major, minor] = m.eigen();
        assert!(close(major.value, 3.0));
        assert!(close(minor.value, 1.0));
        assert!(close(major.vector.x, major.vector.y));
        assert!(close(minor.vector.x, -minor.vector.y));
        assert!(major.vector.inner(minor.vector).abs() < 1e-9);
    }

    #[test]
    fn test_discriminant_of_nearly_repeated_eigenvalue() {
        let m = SymmetricMatrix2 {
            a: 33.84,
            b: 0.0,
            d: 33.840000001,
        };
        assert!(m.trace().powi(2) - 4.0 * m.det() < 0.0);
        let discriminant = m.discriminant();
        assert!((0.0..1e-8).contains(&discriminant));
        let [major, minor] = m.eigen();
        assert!(major.value >= minor.value);
        assert!(major.vector.inner(minor.vector).abs() < 1e-9);
        assert!(m.principal_axes().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_rounding_noise_on_isotropic_matrix() {
        let m = SymmetricMatrix2 {
            a: 0.63025,
            b: 1.39e-17,
            d: 0.63025,
        };
        let sd = 0.63025f64.sqrt();
        let [major, minor] = m.principal_axes();
        assert!(close(major.norm(), sd));
        assert!(close(minor.norm(), sd));
        assert!(major.inner(minor).abs() < 1e-9);
    }

    #[test]
    fn test_eigenvectors_of_small_spread_are_unit() {
        // a variance of 2.5e-5, where an epsilon in the divisor would show
        let m = Moments::of(&points(&[[50.0, 50.0], [50.01, 50.0]]));
        let [major, minor] = m.covariance_matrix().eigen();
        assert!(close(major.vector.norm(), 1.0));
        assert!(close(minor.vector.norm(), 1.0));
        let [major_axis, _] = m.covariance_matrix().principal_axes();
        assert!((major_axis.norm() - 0.005).abs() < 1e-12);
    }

    #[test]
    fn test_principal_axes_of_line() {
        let m = Moments::of(&points(&[[0.0, 0.0], [10.0, 10.0]]));
        let [major, minor] = m.covariance_matrix().principal_axes();
        assert!(close(major.x, major.y));
        assert!((major.norm() - 50f64.sqrt()).abs() < 1e-6);
        assert_eq!(minor.norm(), 0.0);
    }
}
