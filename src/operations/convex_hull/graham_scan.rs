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
    config::{ANGLE_TOLERANCE, HullConfig, SortStrategy},
    error::{GeometryError, Result},
    geometry::{point::Point2, polygon::Polygon},
    kernel::predicates::ccw,
    numeric::scalar::Scalar,
    operations::convex_hull::{
        check_cloud, into_hull,
        sorting::{Polar, sort_polar},
    },
};

/// Graham Scan with the default [`HullConfig`].
pub fn graham_scan<T: Scalar>(cloud: &[Point2<T>]) -> Result<(Polygon<T>, usize)> {
    graham_scan_with(cloud, &HullConfig::default())
}

/// Graham Scan over `cloud`.
///
/// Clouds larger than `config.partition_threshold` are scanned partition by
/// partition first; the surviving points are then scanned once more.
pub fn graham_scan_with<T: Scalar>(
    cloud: &[Point2<T>],
    config: &HullConfig,
) -> Result<(Polygon<T>, usize)> {
    config.validate()?;
    if let Some(trivial) = check_cloud(cloud, "graham scan")? {
        return Ok(trivial);
    }

    let hull = if cloud.len() > config.partition_threshold {
        let candidates = partition_candidates(cloud, config)?;
        scan(&candidates, config.sort_strategy)?
    } else {
        scan(cloud, config.sort_strategy)?
    };
    Ok(into_hull(hull))
}

/// Lowest point, leftmost among the lowest.
fn pivot_index<T: Scalar>(points: &[Point2<T>]) -> usize {
    let mut best = 0;
    for (i, p) in points.iter().enumerate().skip(1) {
        let b = &points[best];
        if p.y() < b.y() || (p.y() == b.y() && p.x() < b.x()) {
            best = i;
        }
    }
    best
}

/// Keeps the farthest entry of every run of equal cosines.
fn farthest_per_angle(sorted: &[Polar]) -> Vec<Polar> {
    let mut kept: Vec<Polar> = Vec::with_capacity(sorted.len());
    let mut run_cos = f64::NAN;
    for entry in sorted {
        match kept.last_mut() {
            Some(last) if (entry.cos - run_cos).abs() <= ANGLE_TOLERANCE => {
                if entry.dist > last.dist {
                    *last = *entry;
                }
            }
            _ => {
                run_cos = entry.cos;
                kept.push(*entry);
            }
        }
    }
    kept
}

/// Stack sweep in clockwise order around the pivot.
fn scan<T: Scalar>(points: &[Point2<T>], strategy: SortStrategy) -> Result<Vec<Point2<T>>> {
    let pivot_idx = pivot_index(points);
    let pivot = points[pivot_idx];

    let mut polar: Vec<Polar> = points
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != pivot_idx)
        .filter_map(|(index, p)| {
            let dist = pivot.dist(p);
            // coincident with the pivot
            if dist == 0.0 {
                return None;
            }
            Some(Polar {
                index,
                cos: pivot.cos_to(p, dist),
                dist,
            })
        })
        .collect();

    sort_polar(&mut polar, strategy);
    let sorted = farthest_per_angle(&polar);

    if sorted.len() < 2 {
        tracing::warn!(
            points = points.len(),
            distinct_angles = sorted.len(),
            "degenerate cloud, all points coincide or lie on one ray"
        );
        return Err(GeometryError::insufficient_points(sorted.len() + 1));
    }

    let mut stack = Vec::with_capacity(sorted.len() + 1);
    stack.push(pivot);
    stack.push(points[sorted[0].index]);
    stack.push(points[sorted[1].index]);

    for entry in &sorted[2..] {
        let candidate = points[entry.index];
        while stack.len() >= 2
            && ccw(&stack[stack.len() - 2], &stack[stack.len() - 1], &candidate) <= 0
        {
            stack.pop();
        }
        stack.push(candidate);
    }

    Ok(stack)
}

/// Splits the cloud into `partition_threshold`-sized runs and gathers each
/// run's hull. A trailing run of fewer than 3 points takes 3 points from the
/// run before it.
fn partition_candidates<T: Scalar>(
    cloud: &[Point2<T>],
    config: &HullConfig,
) -> Result<Vec<Point2<T>>> {
    let size = config.partition_threshold;
    let mut bounds: Vec<(usize, usize)> = (0..cloud.len())
        .step_by(size)
        .map(|start| (start, (start + size).min(cloud.len())))
        .collect();

    if let [.., before, last] = bounds.as_mut_slice() {
        if last.1 - last.0 < 3 {
            before.1 -= 3;
            last.0 -= 3;
        }
    }

    let mut candidates = Vec::new();
    for &(start, end) in &bounds {
        let part = &cloud[start..end];
        match scan(part, config.sort_strategy) {
            Ok(hull) => candidates.extend(hull),
            Err(GeometryError::InsufficientPoints { .. }) => candidates.extend_from_slice(part),
            Err(err) => return Err(err),
        }
    }

    tracing::debug!(
        points = cloud.len(),
        partitions = bounds.len(),
        candidates = candidates.len(),
        "partitioned graham scan"
    );
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polar(index: usize, cos: f64, dist: f64) -> Polar {
        Polar { index, cos, dist }
    }

    #[test]
    fn pivot_is_lowest_then_leftmost() {
        let pts: Vec<Point2<i64>> = [[3, 1], [1, 0], [4, 0], [0, 2]]
            .into_iter()
            .map(Point2::from_vals)
            .collect();
        assert_eq!(pivot_index(&pts), 1);
    }

    #[test]
    fn runs_keep_the_farthest_point() {
        let sorted = [
            polar(0, -0.5, 2.0),
            polar(1, -0.5, 5.0),
            polar(2, -0.5, 1.0),
            polar(3, 0.0, 1.0),
            polar(4, 0.5 + 1e-12, 3.0),
            polar(5, 0.5, 4.0),
        ];
        let kept: Vec<_> = farthest_per_angle(&sorted).iter().map(|p| p.index).collect();
        assert_eq!(kept, [1, 3, 5]);
    }

    #[test]
    fn partitions_cover_the_whole_cloud() {
        // runs [0, 6), [6, 9), [9, 13) once the last one borrows 3 points
        let cloud: Vec<Point2<i64>> = (0..13).map(|i| Point2::from_vals([i, i * i])).collect();
        let config = HullConfig::default().with_partition_threshold(6);
        let candidates = partition_candidates(&cloud, &config).unwrap();
        assert_eq!(candidates.len(), cloud.len());
        for p in &cloud {
            assert!(candidates.contains(p), "missing {}", p);
        }
    }

    #[test]
    fn single_ray_is_degenerate() {
        let cloud: Vec<Point2<i64>> = (0..5).map(|i| Point2::from_vals([i, 2 * i])).collect();
        assert!(matches!(
            scan(&cloud, SortStrategy::BuiltinSort),
            Err(GeometryError::InsufficientPoints { found: 2, .. })
        ));
    }
}
