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

use std::fmt;

use crate::{
    config::POINT_TOLERANCE,
    geometry::{point::Point2, segment::Segment2},
    kernel::orientation::orient2d,
    numeric::scalar::Scalar,
};

/// Ordered, growable ring of planar points.
///
/// Used both for input boundaries and for hull results; the ring is closed
/// implicitly between the last and the first point.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon<T: Scalar> {
    points: Vec<Point2<T>>,
}

impl<T: Scalar> Polygon<T> {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn from_points(points: &[Point2<T>]) -> Self {
        Self {
            points: points.to_vec(),
        }
    }

    pub fn add_point(&mut self, p: Point2<T>) {
        self.points.push(p);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point2<T>] {
        &self.points
    }

    fn edges(&self) -> impl Iterator<Item = (&Point2<T>, &Point2<T>)> {
        let n = self.points.len();
        (0..n).map(move |i| (&self.points[i], &self.points[(i + 1) % n]))
    }

    /// Trapezoid sum `Σ (x[i+1] - x[i]) * (y[i] + y[i+1])`, negative for a
    /// counter-clockwise ring. Fewer than three points is never CCW.
    pub fn is_ccw(&self) -> bool {
        if self.points.len() < 3 {
            return false;
        }
        let sum = self.edges().fold(T::zero(), |acc, (a, b)| {
            acc + (b.x() - a.x()) * (a.y() + b.y())
        });
        sum < T::zero()
    }

    /// Signed area, positive for counter-clockwise rings.
    pub fn area(&self) -> f64 {
        let origin = Point2::origin();
        let twice = self
            .edges()
            .fold(T::zero(), |acc, (a, b)| acc + orient2d(&origin, a, b));
        twice.to_f64_lossy() * 0.5
    }

    pub fn perimeter(&self) -> f64 {
        if self.points.len() < 2 {
            return 0.0;
        }
        self.edges().map(|(a, b)| Segment2::new(a, b).length()).sum()
    }

    /// Even-odd crossing test; points on the boundary may fall either way.
    pub fn contains(&self, p: &Point2<T>) -> bool {
        let n = self.points.len();
        let mut inside = false;
        let mut j = n.wrapping_sub(1);
        for i in 0..n {
            let pi = &self.points[i];
            let pj = &self.points[j];
            if (pi.y() > p.y()) != (pj.y() > p.y()) {
                let x_cross = (pj.x() - pi.x()).to_f64_lossy() * (p.y() - pi.y()).to_f64_lossy()
                    / (pj.y() - pi.y()).to_f64_lossy()
                    + pi.x().to_f64_lossy();
                if p.x().to_f64_lossy() < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// `p` matches one of the vertices within [`POINT_TOLERANCE`] per coordinate.
    pub fn is_vertex(&self, p: &Point2<T>) -> bool {
        self.points.iter().any(|q| {
            (q.x() - p.x()).to_f64_lossy().abs() < POINT_TOLERANCE
                && (q.y() - p.y()).to_f64_lossy().abs() < POINT_TOLERANCE
        })
    }

    /// Every vertex of `self` is also a vertex of `other`.
    pub fn vertices_in(&self, other: &Polygon<T>) -> bool {
        match self.points.iter().find(|p| !other.is_vertex(p)) {
            Some(missing) => {
                tracing::debug!(point = %missing, "vertex missing from the other polygon");
                false
            }
            None => true,
        }
    }

    /// Both polygons have the same vertex set, ignoring order and rotation.
    pub fn same_vertices(&self, other: &Polygon<T>) -> bool {
        self.vertices_in(other) && other.vertices_in(self)
    }

    pub fn scale(&self, k: T) -> Self {
        Self {
            points: self.points.iter().map(|p| *p * k).collect(),
        }
    }

    pub fn reverse(&mut self) {
        self.points.reverse();
    }
}

impl<T: Scalar> From<Vec<Point2<T>>> for Polygon<T> {
    fn from(points: Vec<Point2<T>>) -> Self {
        Self { points }
    }
}

impl<T: Scalar> fmt::Display for Polygon<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, "->")?;
            }
            write!(f, "{}", p)?;
        }
        Ok(())
    }
}
