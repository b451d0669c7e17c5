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

use std::cmp::Ordering;

use crate::config::SortStrategy;

/// A cloud point seen from the Graham pivot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Polar {
    pub index: usize,
    pub cos: f64,
    pub dist: f64,
}

fn by_cos(a: &Polar, b: &Polar) -> Ordering {
    a.cos.partial_cmp(&b.cos).unwrap_or(Ordering::Equal)
}

/// Orders `entries` by ascending cosine. Only [`SortStrategy::BuiltinSort`]
/// also orders equal cosines by distance.
pub(crate) fn sort_polar(entries: &mut [Polar], strategy: SortStrategy) {
    match strategy {
        SortStrategy::BuiltinSort => entries.sort_by(|a, b| {
            by_cos(a, b).then(a.dist.partial_cmp(&b.dist).unwrap_or(Ordering::Equal))
        }),
        SortStrategy::QuickSort => quick_sort(entries),
        SortStrategy::MergeSort => merge_sort(entries),
    }
}

/// Three-way quicksort. Recurses into the smaller side and loops on the
/// larger one, so the stack stays logarithmic.
fn quick_sort(mut entries: &mut [Polar]) {
    while entries.len() > 1 {
        let pivot = entries[entries.len() / 2].cos;

        // [0, lt) < pivot, [lt, i) == pivot, (gt, len) > pivot
        let mut lt = 0;
        let mut i = 0;
        let mut gt = entries.len();
        while i < gt {
            match entries[i].cos.partial_cmp(&pivot).unwrap_or(Ordering::Equal) {
                Ordering::Less => {
                    entries.swap(lt, i);
                    lt += 1;
                    i += 1;
                }
                Ordering::Greater => {
                    gt -= 1;
                    entries.swap(i, gt);
                }
                Ordering::Equal => i += 1,
            }
        }

        let (low, rest) = std::mem::take(&mut entries).split_at_mut(lt);
        let high = &mut rest[gt - lt..];
        if low.len() < high.len() {
            quick_sort(low);
            entries = high;
        } else {
            quick_sort(high);
            entries = low;
        }
    }
}

/// Bottom-up stable merge sort.
fn merge_sort(entries: &mut [Polar]) {
    let n = entries.len();
    let mut buffer = entries.to_vec();
    let mut width = 1;
    while width < n {
        let mut start = 0;
        while start < n {
            let mid = (start + width).min(n);
            let end = (start + 2 * width).min(n);
            merge(&entries[start..mid], &entries[mid..end], &mut buffer[start..end]);
            start = end;
        }
        entries.copy_from_slice(&buffer);
        width *= 2;
    }
}

fn merge(left: &[Polar], right: &[Polar], out: &mut [Polar]) {
    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        let take_left = j >= right.len()
            || (i < left.len() && by_cos(&left[i], &right[j]) != Ordering::Greater);
        if take_left {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
}
