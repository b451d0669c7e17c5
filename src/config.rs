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

//! Tolerances, traversal limits and hull settings.

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};

/// Tolerance for floating scalar comparisons.
pub const EPS: f64 = 1e-10;

/// Maximum number of steps a face boundary walk may take before the face is
/// reported as non-closing.
pub const MAX_RECURSION_DEPTH: usize = 1000;

/// Per-coordinate tolerance used when comparing polygon vertices.
pub const POINT_TOLERANCE: f64 = 1e-5;

/// Two polar cosines closer than this are treated as the same angle.
pub const ANGLE_TOLERANCE: f64 = 1e-10;

/// Default cloud size above which Graham Scan works on partitions.
pub const GRAHAM_SCAN_PARTITION: usize = 1_000_000;

/// Smallest accepted partition size; the last partition may borrow three
/// points from the one before it, and both must keep at least three.
pub const MIN_PARTITION: usize = 6;

/// Sort used to order points by polar angle in Graham Scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortStrategy {
    /// `slice::sort_by` on (cosine, distance).
    #[default]
    BuiltinSort,
    /// In-place three-way quicksort keyed by cosine.
    QuickSort,
    /// Bottom-up stable merge sort keyed by cosine.
    MergeSort,
}

/// Settings for [`graham_scan_with`](crate::operations::convex_hull::graham_scan_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HullConfig {
    /// Clouds larger than this are split into partitions of this size.
    pub partition_threshold: usize,
    /// Ordering used for the angular sort.
    pub sort_strategy: SortStrategy,
}

impl Default for HullConfig {
    fn default() -> Self {
        Self {
            partition_threshold: GRAHAM_SCAN_PARTITION,
            sort_strategy: SortStrategy::default(),
        }
    }
}

impl HullConfig {
    /// Replaces the partition threshold.
    pub fn with_partition_threshold(mut self, threshold: usize) -> Self {
        self.partition_threshold = threshold;
        self
    }

    /// Replaces the sort strategy.
    pub fn with_sort_strategy(mut self, strategy: SortStrategy) -> Self {
        self.sort_strategy = strategy;
        self
    }

    /// Rejects thresholds below [`MIN_PARTITION`].
    pub fn validate(&self) -> Result<()> {
        if self.partition_threshold < MIN_PARTITION {
            return Err(GeometryError::invalid_argument(format!(
                "partition threshold {} is below the minimum of {}",
                self.partition_threshold, MIN_PARTITION
            )));
        }
        Ok(())
    }
}
