//! Interpolation between known field samples
//!
//! Every function here is generic over the sampled type `T` (a scalar, or a
//! `nalgebra` vector) and the parameter type `F`.  Parameters are expected in
//! the `[0, 1]` range, but nothing is clamped: values outside that range
//! extrapolate.
use num_traits::Float;
use std::ops::{Add, Mul};

/// Linear interpolation between `a` (at `x = 0`) and `b` (at `x = 1`)
///
/// ```
/// # use isosurf::interpolate::linear;
/// assert_eq!(linear(2.0, 4.0, 0.25), 2.5);
/// ```
pub fn linear<T, F>(a: T, b: T, x: F) -> T
where
    T: Copy + Add<Output = T> + Mul<F, Output = T>,
    F: Float,
{
    a * (F::one() - x) + b * x
}

/// Bilinear interpolation within a unit square
///
/// Samples are ordered as follows:
/// ```text
///  2------3
///  |      |
/// y|  •   |
///  |      |
///  0------1
///     x
/// ```
pub fn bilinear<T, F>(v: &[T; 4], x: F, y: F) -> T
where
    T: Copy + Add<Output = T> + Mul<F, Output = T>,
    F: Float,
{
    let bottom = linear(v[0], v[1], x);
    let top = linear(v[2], v[3], x);
    linear(bottom, top, y)
}

/// Quadratic interpolation through three evenly spaced samples
///
/// `a`, `b`, and `c` are located at `x = 0`, `x = 0.5`, and `x = 1`:
/// ```text
/// a--•----b------c
/// 0  x   0.5     1
/// ```
pub fn quadratic<T, F>(a: T, b: T, c: T, x: F) -> T
where
    T: Copy + Add<Output = T> + Mul<F, Output = T>,
    F: Float,
{
    let one = F::one();
    let two = one + one;
    let four = two + two;
    a * ((one - x) * (one - two * x))
        + b * (four * x * (one - x))
        + c * (x * (two * x - one))
}

/// Biquadratic interpolation within a 3×3 patch of samples
///
/// Samples are stored row-major, bottom row first:
/// ```text
///  6-------7-------8
///  |       |       |
///  3-------4-------5
///  |       |       |
/// y|  •    |       |
///  0-------1-------2
///     x
/// ```
/// The patch spans `[0, 1]` on both axes, so the middle row and column sit
/// at `0.5`.
pub fn biquadratic<T, F>(v: &[T; 9], x: F, y: F) -> T
where
    T: Copy + Add<Output = T> + Mul<F, Output = T>,
    F: Float,
{
    let bottom = quadratic(v[0], v[1], v[2], x);
    let middle = quadratic(v[3], v[4], v[5], x);
    let top = quadratic(v[6], v[7], v[8], x);
    quadratic(bottom, middle, top, y)
}

/// Barycentric interpolation over a unit square split into two triangles
///
/// The square is split along the `1 → 2` diagonal:
/// ```text
///  2---------3
///  |'-.      |
///  |   -,    |
/// y|  •  -,  |
///  |       -,|
///  0---------1
///     x
/// ```
///
/// Points with `x + y >= 1` (including points exactly on the diagonal) are
/// interpolated within the `(3, 1, 2)` triangle; the rest use `(0, 1, 2)`.
pub fn barycentric<T, F>(v: &[T; 4], x: F, y: F) -> T
where
    T: Copy + Add<Output = T> + Mul<F, Output = T>,
    F: Float,
{
    let one = F::one();
    let (apex, beta, gamma) = if x + y >= one {
        (v[3], one - y, one - x)
    } else {
        (v[0], x, y)
    };
    let alpha = one - beta - gamma;
    apex * alpha + v[1] * beta + v[2] * gamma
}
