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

use std::ops::{Add, Index, Sub};

use crate::{geometry::point::Point, numeric::scalar::Scalar};

/// Displacement between two points, stored as a point of the same dimension.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector<T: Scalar, const N: usize>(pub Point<T, N>);

pub type Vector2<T> = Vector<T, 2>;
pub type Vector3<T> = Vector<T, 3>;

impl<T: Scalar, const N: usize> Vector<T, N> {
    pub fn from_vals<V: Into<T>>(vals: [V; N]) -> Self {
        Vector(Point::from_vals(vals))
    }

    pub fn dot(&self, other: &Self) -> T {
        (0..N).fold(T::zero(), |acc, i| acc + self[i] * other[i])
    }

    pub fn norm2(&self) -> T {
        self.dot(self)
    }

    pub fn norm(&self) -> f64 {
        self.norm2().to_f64_lossy().sqrt()
    }
}

impl<T: Scalar> Vector<T, 2> {
    /// z component of the 3D cross product.
    pub fn cross(&self, other: &Self) -> T {
        self[0] * other[1] - self[1] * other[0]
    }
}

impl<T: Scalar> Vector<T, 3> {
    pub fn cross(&self, other: &Self) -> Self {
        Vector(Point::new([
            self[1] * other[2] - self[2] * other[1],
            self[2] * other[0] - self[0] * other[2],
            self[0] * other[1] - self[1] * other[0],
        ]))
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &T {
        &self.0.coords[i]
    }
}

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Vector<T, N>;
    fn add(self, rhs: Self) -> Self::Output {
        Vector(self.0 + rhs.0)
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Vector<T, N>;
    fn sub(self, rhs: Self) -> Self::Output {
        Vector(self.0 - rhs.0)
    }
}
