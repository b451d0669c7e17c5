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

use crate::{
    geometry::point::{Point, Point2},
    numeric::scalar::Scalar,
};

/// Returns:
/// - >0 if counter-clockwise
/// - <0 if clockwise
/// - =0 if collinear
///
/// The value is twice the signed area of the triangle `(a, b, c)`.
pub fn orient2d<T: Scalar>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> T {
    (b.x() - a.x()) * (c.y() - a.y()) - (b.y() - a.y()) * (c.x() - a.x())
}

/// Triangle orientation for the dimensions a planar face can live in.
pub trait PlanarOrientation<T: Scalar> {
    /// Doubled signed area of `(a, b, c)` as seen from `+z`.
    fn area2(a: &Self, b: &Self, c: &Self) -> T;

    /// Doubled vector area `(b - a) x (c - a)`.
    fn area_vector(a: &Self, b: &Self, c: &Self) -> [T; 3];
}

impl<T: Scalar> PlanarOrientation<T> for Point<T, 2> {
    /// Determinant of
    /// ```text
    /// | ax ay 1 |
    /// | bx by 1 |
    /// | cx cy 1 |
    /// ```
    fn area2(a: &Self, b: &Self, c: &Self) -> T {
        a.x() * b.y() - a.y() * b.x() + a.y() * c.x() - a.x() * c.y() + b.x() * c.y()
            - c.x() * b.y()
    }

    fn area_vector(a: &Self, b: &Self, c: &Self) -> [T; 3] {
        [T::zero(), T::zero(), Self::area2(a, b, c)]
    }
}

impl<T: Scalar> PlanarOrientation<T> for Point<T, 3> {
    /// z component of `(b - a) x (c - a)`, which matches the 2D determinant
    /// for points on any `z = const` plane.
    fn area2(a: &Self, b: &Self, c: &Self) -> T {
        Self::area_vector(a, b, c)[2]
    }

    fn area_vector(a: &Self, b: &Self, c: &Self) -> [T; 3] {
        let u = b - a;
        let v = c - a;
        [
            u[1] * v[2] - u[2] * v[1],
            u[2] * v[0] - u[0] * v[2],
            u[0] * v[1] - u[1] * v[0],
        ]
    }
}
