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
    error::{GeometryError, Result},
    geometry::{point::Point2, polygon::Polygon, segment::Segment2},
    numeric::scalar::Scalar,
    operations::convex_hull::{check_cloud, into_hull},
};

/// Jarvis march. Starts at the leftmost point (lowest among ties) and wraps
/// clockwise, preferring the farther point among collinear candidates.
pub fn gift_wrapping<T: Scalar>(cloud: &[Point2<T>]) -> Result<(Polygon<T>, usize)> {
    if let Some(trivial) = check_cloud(cloud, "gift wrapping")? {
        return Ok(trivial);
    }
    let n = cloud.len();

    let mut start = 0;
    for (i, p) in cloud.iter().enumerate().skip(1) {
        let s = &cloud[start];
        if p.x() < s.x() || (p.x() == s.x() && p.y() < s.y()) {
            start = i;
        }
    }

    // Work relative to the start point, which becomes the origin at slot 0.
    let offset = cloud[start];
    let mut shifted: Vec<Point2<T>> = cloud.iter().map(|p| p - &offset).collect();
    shifted.swap(0, start);
    let first = shifted[0];

    let mut hull = Vec::new();
    let mut current = first;
    loop {
        hull.push(current);
        if hull.len() > n {
            return Err(GeometryError::StructuralLimit {
                face: "gift wrapping".to_string(),
                limit: n,
            });
        }

        let mut endpoint = first;
        let mut best = current.dist2(&endpoint);
        for candidate in &shifted {
            let edge = Segment2::new(&current, &endpoint);
            if endpoint == current || edge.left(candidate) {
                endpoint = *candidate;
                best = current.dist2(candidate);
            } else if edge.on(candidate) {
                let ahead = current.vector_to(&endpoint).dot(&current.vector_to(candidate));
                let d = current.dist2(candidate);
                if ahead > T::zero() && d > best {
                    endpoint = *candidate;
                    best = d;
                }
            }
        }

        if endpoint == first {
            break;
        }
        current = endpoint;
    }

    if hull.len() < 3 {
        tracing::warn!(
            points = n,
            hull = hull.len(),
            "degenerate cloud, all points coincide or are collinear"
        );
        return Err(GeometryError::insufficient_points(hull.len()));
    }

    Ok(into_hull(hull.into_iter().map(|p| &p + &offset).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collinear_run_keeps_only_the_ends() {
        let cloud: Vec<Point2<i64>> = [[0, 0], [1, 0], [2, 0], [3, 0], [1, 2]]
            .into_iter()
            .map(Point2::from_vals)
            .collect();
        let (hull, size) = gift_wrapping(&cloud).unwrap();
        assert_eq!(size, 3);
        assert!(!hull.is_vertex(&Point2::from_vals([1, 0])));
        assert!(!hull.is_vertex(&Point2::from_vals([2, 0])));
        assert!(hull.is_ccw());
    }

    #[test]
    fn all_points_on_a_line() {
        let cloud: Vec<Point2<i64>> = (0..6).map(|i| Point2::from_vals([i, -i])).collect();
        assert!(matches!(
            gift_wrapping(&cloud),
            Err(GeometryError::InsufficientPoints { found: 2, .. })
        ));
    }
}
