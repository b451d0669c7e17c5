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

pub fn are_equal<T: Scalar, const N: usize>(p1: &Point<T, N>, p2: &Point<T, N>, eps: &T) -> bool {
    for i in 0..N {
        if (p1.coords[i] - p2.coords[i]).abs() > *eps {
            return false;
        }
    }

    true
}

pub fn are_collinear<T: Scalar, const N: usize>(
    a: &Point<T, N>,
    b: &Point<T, N>,
    c: &Point<T, N>,
    eps: &T,
) -> bool {
    for i in 0..N {
        let ui = b.coords[i] - a.coords[i];
        let vi = c.coords[i] - a.coords[i];

        if ui.abs() > *eps {
            // cross-multiplied so integer fields stay exact
            for j in (i + 1)..N {
                let uj = b.coords[j] - a.coords[j];
                let vj = c.coords[j] - a.coords[j];
                if (vj * ui - uj * vi).abs() > *eps * ui.abs() {
                    return false;
                }
            }
            return true;
        } else if vi.abs() > *eps {
            return false; // a and b coincide on this axis, c does not
        }
    }
    // a == b, collinear iff c coincides too
    true
}

/// Turn indicator with the hull sweep convention: `-1` when the signed area
/// of `(o, a, b)` is positive, `+1` otherwise.
pub fn ccw<T: Scalar>(o: &Point2<T>, a: &Point2<T>, b: &Point2<T>) -> i8 {
    if orient2d(o, a, b) > T::zero() { -1 } else { 1 }
}
