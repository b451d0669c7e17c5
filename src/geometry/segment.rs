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
    kernel::orientation::orient2d,
    numeric::scalar::Scalar,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<T: Scalar, const N: usize> {
    pub a: Point<T, N>,
    pub b: Point<T, N>,
}

pub type Segment2<T> = Segment<T, 2>;

impl<T: Scalar, const N: usize> Segment<T, N> {
    pub fn new(a: &Point<T, N>, b: &Point<T, N>) -> Self {
        Self { a: *a, b: *b }
    }

    pub fn length(&self) -> f64 {
        self.a.dist(&self.b)
    }

    pub fn inverse(&self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }
}

/// Side-of-line predicates, exact for integer fields.
impl<T: Scalar> Segment<T, 2> {
    /// Doubled signed area of the triangle `(a, b, c)`.
    pub fn area2(&self, c: &Point2<T>) -> T {
        orient2d(&self.a, &self.b, c)
    }

    /// `c` lies strictly to the left of `a -> b`.
    pub fn left(&self, c: &Point2<T>) -> bool {
        self.area2(c) > T::zero()
    }

    pub fn right(&self, c: &Point2<T>) -> bool {
        self.area2(c) < T::zero()
    }

    /// `c` lies on the supporting line of the segment.
    pub fn on(&self, c: &Point2<T>) -> bool {
        self.area2(c) == T::zero()
    }

    pub fn left_on(&self, c: &Point2<T>) -> bool {
        self.area2(c) >= T::zero()
    }

    pub fn right_on(&self, c: &Point2<T>) -> bool {
        self.area2(c) <= T::zero()
    }
}
