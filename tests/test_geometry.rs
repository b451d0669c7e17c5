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

use cgkit::error::GeometryError;
use cgkit::geometry::{Point2, Point3, Segment2, Vector2};
use cgkit::kernel::{are_collinear, are_equal, ccw, orient2d};

#[test]
fn point_distances() {
    let a = Point2::<f64>::from_vals([0.0, 0.0]);
    let b = Point2::from_vals([3.0, 4.0]);
    assert_eq!(a.dist2(&b), 25.0);
    assert_eq!(a.dist(&b), 5.0);
    assert_eq!(b.dist_origin(), 5.0);
}

#[test]
fn integer_points_are_exact() {
    let a = Point2::<i32>::from_vals([1, 1]);
    let b = Point2::from_vals([4, 5]);
    assert_eq!(&b - &a, Point2::from_vals([3, 4]));
    assert_eq!(a.vector_to(&b).norm2(), 25);
    assert_eq!(a.add_vector(&Vector2::from_vals([3, 4])), b);
}

#[test]
fn mixed_dimensions() {
    let flat = Point2::<f64>::from_vals([1.0, 2.0]);
    assert!(matches!(flat.z(), Err(GeometryError::DimensionMismatch { .. })));

    let lifted = flat.to_3d();
    assert_eq!(lifted, Point3::from_vals([1.0, 2.0, 0.0]));
    assert!(Point2::<f64>::try_from_slice(&[1.0, 2.0, 3.0]).is_err());
}

#[test]
fn ccw_convention() {
    let o = Point2::<f64>::from_vals([0.0, 0.0]);
    let a = Point2::from_vals([1.0, 0.0]);
    let b = Point2::from_vals([0.0, 1.0]);

    assert!(orient2d(&o, &a, &b) > 0.0);
    assert_eq!(ccw(&o, &a, &b), -1);
    assert_eq!(o.ccw(&b, &a), 1);
    assert_eq!(o.ccw(&a, &Point2::from_vals([2.0, 0.0])), 1);
}

#[test]
fn segment_sides() {
    let s = Segment2::new(
        &Point2::<f64>::from_vals([0.0, 0.0]),
        &Point2::from_vals([2.0, 2.0]),
    );
    assert!(s.left(&Point2::from_vals([0.0, 1.0])));
    assert!(s.right(&Point2::from_vals([1.0, 0.0])));
    assert!(s.on(&Point2::from_vals([-1.0, -1.0])));
    assert_eq!(s.length(), 8.0_f64.sqrt());
}

#[test]
fn tolerant_predicates() {
    let a = Point3::<f64>::from_vals([0.0, 0.0, 0.0]);
    let b = Point3::from_vals([1.0, 1.0, 1.0]);
    let c = Point3::from_vals([2.0, 2.0, 2.0 + 1e-12]);
    assert!(are_collinear(&a, &b, &c, &1e-9));
    assert!(!are_collinear(&a, &b, &Point3::from_vals([2.0, 2.0, 2.5]), &1e-9));
    assert!(are_equal(&c, &Point3::from_vals([2.0, 2.0, 2.0]), &1e-9));
}
