use std::ops::Mul;

use derive_more::Add;
use derive_more::From;
use derive_more::Neg;
use derive_more::Sub;
use num_traits::Float;

/// Added to the norm before dividing, so that the zero vector normalizes to itself.
pub const NORMALIZE_EPSILON: f64 = 1e-8;

#[derive(Clone, Copy, Default, Debug, PartialEq, Add, Sub, Neg, From)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn scale(self, c: f64) -> Self {
        Self::new(self.x * c, self.y * c)
    }

    pub fn elem_prod(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }

    pub fn inner(self, rhs: Self) -> f64 {
        let p = self.elem_prod(rhs);
        p.x + p.y
    }

    pub fn norm(self) -> f64 {
        self.inner(self).sqrt()
    }

    pub fn normalize(self) -> Self {
        self.scale(1.0 / (self.norm() + NORMALIZE_EPSILON))
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

pub fn sum<T: Float>(xs: impl IntoIterator<Item = T>) -> T {
    xs.into_iter().fold(T::zero(), |acc, z| acc + z)
}

/// Arithmetic mean. `NaN` for an empty slice.
pub fn mean<T: Float>(xs: &[T]) -> T {
    let (total, n) = xs
        .iter()
        .fold((T::zero(), T::zero()), |(s, n), &z| (s + z, n + T::one()));
    total / n
}

pub fn sub_scalar<T: Float>(xs: &[T], c: T) -> Vec<T> {
    xs.iter().map(|&z| z - c).collect()
}

pub fn elem_prod<T: Float>(xs: &[T], ys: &[T]) -> Vec<T> {
    assert_eq!(xs.len(), ys.len(), "elementwise product of unequal lengths");
    xs.iter().zip(ys).map(|(&s, &t)| s * t).collect()
}

pub fn inner<T: Float>(xs: &[T], ys: &[T]) -> T {
    sum(elem_prod(xs, ys))
}
