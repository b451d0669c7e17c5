// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::{
    array,
    fmt,
    ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
};

use crate::{
    error::{GeometryError, Result},
    geometry::vector::Vector,
    kernel::predicates,
    numeric::scalar::Scalar,
};

/// Coordinate tuple of fixed dimension `N` over the field `T`.
///
/// Equality is exact field equality; tolerant comparisons live in
/// [`crate::kernel::predicates::are_equal`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point<T: Scalar, const N: usize> {
    pub coords: [T; N],
}

pub type Point2<T> = Point<T, 2>;
pub type Point3<T> = Point<T, 3>;

impl<T: Scalar, const N: usize> Default for Point<T, N> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<T: Scalar, const N: usize> Point<T, N> {
    pub fn new(coords: [T; N]) -> Self {
        Self { coords }
    }

    pub fn from_vals<V>(vals: [V; N]) -> Self
    where
        V: Into<T>,
    {
        Self {
            coords: vals.map(|v| v.into()),
        }
    }

    /// Builds a point from untyped coordinates, failing when the slice does
    /// not hold exactly `N` values.
    pub fn try_from_slice(values: &[T]) -> Result<Self> {
        if values.len() != N {
            return Err(GeometryError::DimensionMismatch {
                expected: N,
                found: values.len(),
            });
        }
        Ok(Self {
            coords: array::from_fn(|i| values[i]),
        })
    }

    pub fn origin() -> Self {
        Self {
            coords: [T::zero(); N],
        }
    }

    pub fn dimension(&self) -> usize {
        N
    }

    pub fn x(&self) -> T {
        self.coords[0]
    }

    pub fn y(&self) -> T {
        self.coords[1]
    }

    pub fn z(&self) -> Result<T> {
        if N < 3 {
            return Err(GeometryError::DimensionMismatch {
                expected: 3,
                found: N,
            });
        }
        Ok(self.coords[2])
    }

    /// Squared distance, exact in `T`.
    pub fn dist2(&self, other: &Self) -> T {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .fold(T::zero(), |acc, (a, b)| {
                let d = *a - *b;
                acc + d * d
            })
    }

    pub fn dist(&self, other: &Self) -> f64 {
        self.dist2(other).to_f64_lossy().sqrt()
    }

    pub fn dist_origin(&self) -> f64 {
        self.dist(&Self::origin())
    }

    pub fn abs(&self) -> Self {
        Self {
            coords: self.coords.map(|c| c.abs()),
        }
    }

    pub fn vector_to(&self, other: &Self) -> Vector<T, N> {
        Vector(other - self)
    }

    pub fn add_vector(&self, v: &Vector<T, N>) -> Self {
        self + &v.0
    }
}

impl<T: Scalar> Point<T, 2> {
    /// Orientation of the turn `self -> a -> b`: `-1` when the signed area is
    /// positive, `+1` otherwise (collinear included).
    pub fn ccw(&self, a: &Self, b: &Self) -> i8 {
        predicates::ccw(self, a, b)
    }

    /// Cosine of the angle of `a` as seen from `self`, with `dist` the
    /// precomputed distance between both.
    ///
    /// A point straight above or below (or coincident) yields 0, a point on
    /// the same horizontal yields +1 to the right and -1 to the left.
    pub fn cos_to(&self, a: &Self, dist: f64) -> f64 {
        if a.x() == self.x() || dist == 0.0 {
            return 0.0;
        }
        if a.y() == self.y() {
            return if a.x() > self.x() { 1.0 } else { -1.0 };
        }
        (a.x() - self.x()).to_f64_lossy() / dist
    }

    /// Lifts the point onto the `z = 0` plane.
    pub fn to_3d(&self) -> Point3<T> {
        Point::new([self.x(), self.y(), T::zero()])
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Point<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.coords[i]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Point<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.coords[i]
    }
}

impl<'a, 'b, T: Scalar, const N: usize> Add<&'b Point<T, N>> for &'a Point<T, N> {
    type Output = Point<T, N>;
    fn add(self, rhs: &'b Point<T, N>) -> Self::Output {
        Point {
            coords: array::from_fn(|i| self.coords[i] + rhs.coords[i]),
        }
    }
}

impl<T: Scalar, const N: usize> Add for Point<T, N> {
    type Output = Point<T, N>;
    fn add(self, rhs: Point<T, N>) -> Self::Output {
        &self + &rhs
    }
}

impl<'a, 'b, T: Scalar, const N: usize> Sub<&'b Point<T, N>> for &'a Point<T, N> {
    type Output = Point<T, N>;
    fn sub(self, rhs: &'b Point<T, N>) -> Self::Output {
        Point {
            coords: array::from_fn(|i| self.coords[i] - rhs.coords[i]),
        }
    }
}

impl<T: Scalar, const N: usize> Sub for Point<T, N> {
    type Output = Point<T, N>;
    fn sub(self, rhs: Point<T, N>) -> Self::Output {
        &self - &rhs
    }
}

impl<T: Scalar, const N: usize> Neg for Point<T, N> {
    type Output = Point<T, N>;
    fn neg(self) -> Self::Output {
        Point {
            coords: self.coords.map(|c| -c),
        }
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Point<T, N> {
    type Output = Point<T, N>;
    fn mul(self, k: T) -> Self::Output {
        Point {
            coords: self.coords.map(|c| c * k),
        }
    }
}

impl<T: Scalar, const N: usize> Div<T> for Point<T, N> {
    type Output = Point<T, N>;
    fn div(self, k: T) -> Self::Output {
        Point {
            coords: self.coords.map(|c| c / k),
        }
    }
}

impl<T: Scalar, const N: usize> AddAssign<&Point<T, N>> for Point<T, N> {
    fn add_assign(&mut self, rhs: &Point<T, N>) {
        for i in 0..N {
            self.coords[i] = self.coords[i] + rhs.coords[i];
        }
    }
}

impl<T: Scalar, const N: usize> SubAssign<&Point<T, N>> for Point<T, N> {
    fn sub_assign(&mut self, rhs: &Point<T, N>) {
        for i in 0..N {
            self.coords[i] = self.coords[i] - rhs.coords[i];
        }
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for Point<T, N> {
    fn mul_assign(&mut self, k: T) {
        for c in self.coords.iter_mut() {
            *c = *c * k;
        }
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Point<T, N> {
    fn from(coords: [T; N]) -> Self {
        Point { coords }
    }
}

impl<T: Scalar, const N: usize> From<Point<T, N>> for [T; N] {
    fn from(p: Point<T, N>) -> Self {
        p.coords
    }
}

impl<T: Scalar, const N: usize> fmt::Display for Point<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn z_of_planar_point_is_a_dimension_error() {
        let p = Point2::<f64>::from_vals([1.0, 2.0]);
        assert!(matches!(
            p.z(),
            Err(GeometryError::DimensionMismatch {
                expected: 3,
                found: 2
            })
        ));
        assert_eq!(p.to_3d().z().ok(), Some(0.0));
    }

    #[test]
    fn slice_length_must_match_dimension() {
        assert!(Point3::<i64>::try_from_slice(&[1, 2, 3]).is_ok());
        assert!(matches!(
            Point3::<i64>::try_from_slice(&[1, 2]),
            Err(GeometryError::DimensionMismatch {
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn cosine_special_cases() {
        let pivot = Point2::<i64>::from_vals([0, 0]);
        let above = Point2::from_vals([0, 5]);
        let right = Point2::from_vals([3, 0]);
        let left = Point2::from_vals([-3, 0]);
        let diag = Point2::from_vals([3, 4]);

        assert_eq!(pivot.cos_to(&above, pivot.dist(&above)), 0.0);
        assert_eq!(pivot.cos_to(&pivot, 0.0), 0.0);
        assert_eq!(pivot.cos_to(&right, pivot.dist(&right)), 1.0);
        assert_eq!(pivot.cos_to(&left, pivot.dist(&left)), -1.0);
        assert!((pivot.cos_to(&diag, pivot.dist(&diag)) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn arithmetic_and_display() {
        let a = Point2::<i64>::from_vals([1, 2]);
        let b = Point2::<i64>::from_vals([3, -4]);
        assert_eq!(a + b, Point2::from_vals([4, -2]));
        assert_eq!(&b - &a, Point2::from_vals([2, -6]));
        assert_eq!(-a, Point2::from_vals([-1, -2]));
        assert_eq!(a * 3, Point2::from_vals([3, 6]));
        assert_eq!(a.dist2(&b), 40);
        assert_eq!(b.abs(), Point2::from_vals([3, 4]));
        assert_eq!(format!("{}", b), "(3, -4)");
    }
}
