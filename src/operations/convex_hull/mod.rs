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

//! Planar convex hulls of point clouds.
//!
//! Both algorithms return the hull as a [`Polygon`] together with its vertex
//! count. Hulls of more than three points are counter-clockwise; a cloud of
//! exactly three points is returned unchanged.

pub mod gift_wrapping;
pub mod graham_scan;
pub(crate) mod sorting;

pub use gift_wrapping::gift_wrapping;
pub use graham_scan::{graham_scan, graham_scan_with};

use crate::{
    error::{GeometryError, Result},
    geometry::{point::Point2, polygon::Polygon},
    numeric::scalar::Scalar,
};

/// Rejects clouds under three points and short-circuits clouds of exactly
/// three.
fn check_cloud<T: Scalar>(
    cloud: &[Point2<T>],
    algorithm: &str,
) -> Result<Option<(Polygon<T>, usize)>> {
    match cloud.len() {
        n if n < 3 => {
            tracing::warn!(algorithm, points = n, "hull needs at least 3 points");
            Err(GeometryError::insufficient_points(n))
        }
        3 => Ok(Some((Polygon::from_points(cloud), 3))),
        _ => Ok(None),
    }
}

/// Turns a clockwise sweep into the counter-clockwise result.
fn into_hull<T: Scalar>(mut clockwise: Vec<Point2<T>>) -> (Polygon<T>, usize) {
    clockwise.reverse();
    let size = clockwise.len();
    (Polygon::from(clockwise), size)
}
