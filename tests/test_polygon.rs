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

use approx::assert_relative_eq;

use cgkit::geometry::{Point2, Polygon};

fn polygon(coords: &[[f64; 2]]) -> Polygon<f64> {
    Polygon::from(coords.iter().map(|&c| Point2::new(c)).collect::<Vec<_>>())
}

#[test]
fn creation() {
    let mut poly: Polygon<f64> = Polygon::new();
    poly.add_point(Point2::from_vals([1.0, 2.0]));
    poly.add_point(Point2::from_vals([3.0, 4.0]));
    poly.add_point(Point2::from_vals([5.0, 6.0]));
    assert_eq!(poly.len(), 3);
    assert_eq!(format!("{}", poly), "(1, 2)->(3, 4)->(5, 6)");
}

#[test]
fn ccw() {
    let poly = polygon(&[[5.0, 0.0], [6.0, 4.0], [4.0, 5.0], [1.0, 5.0], [1.0, 0.0]]);
    assert!(poly.is_ccw());

    let poly = polygon(&[[0.0, 0.0], [0.0, 1.0], [1.0, 1.0]]);
    assert!(!poly.is_ccw());

    assert!(!polygon(&[[0.0, 0.0], [1.0, 0.0]]).is_ccw());
}

#[test]
fn area() {
    let square = polygon(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]).scale(2.0);
    assert_eq!(square.area(), 4.0);

    let triangle = polygon(&[[-3.0, -1.0], [5.0, -4.0], [-2.0, 6.0]]);
    assert_eq!(triangle.area(), 29.5);

    let mut clockwise = triangle.clone();
    clockwise.reverse();
    assert_eq!(clockwise.area(), -29.5);
}

#[test]
fn integer_area() {
    let triangle = Polygon::from(vec![
        Point2::<i64>::from_vals([-3, -1]),
        Point2::from_vals([5, -4]),
        Point2::from_vals([-2, 6]),
    ]);
    assert_eq!(triangle.area(), 29.5);
    assert!(triangle.is_ccw());
}

#[test]
fn point_in_square() {
    let plist = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
    let poly = polygon(&plist);

    assert!(poly.contains(&Point2::from_vals([0.5, 0.5])));
    assert!(poly.contains(&Point2::from_vals([0.2, 0.5])));
    for p in plist {
        assert!(poly.is_vertex(&Point2::new(p)));
    }

    assert!(!poly.contains(&Point2::from_vals([0.0, 1.1])));
    assert!(!poly.contains(&Point2::from_vals([1.1, 0.0])));
}

#[test]
fn point_in_arrowhead() {
    //        p3 (0.5, 0.5)
    //       /  \
    //      /p1  \        p1 = (0.5, 0.25)
    //     / /  \ \
    //    p0      p2
    let poly = polygon(&[[0.0, 0.0], [0.5, 0.25], [1.0, 0.0], [0.5, 0.5]]);
    assert_eq!(poly.area(), 0.125);

    assert!(!poly.contains(&Point2::from_vals([0.5, 0.24])));
    assert!(!poly.contains(&Point2::from_vals([0.4, 0.1])));

    assert!(poly.contains(&Point2::from_vals([0.5, 0.26])));
    assert!(poly.contains(&Point2::from_vals([0.2, 0.15])));
}

#[test]
fn perimeter_and_scaling() {
    let poly = polygon(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
    assert_eq!(poly.perimeter(), 4.0);

    let poly = poly.scale(2.0);
    assert_eq!(poly.perimeter(), 8.0);

    let poly = poly.scale(4.0);
    assert_eq!(poly.perimeter(), 32.0);
    assert_eq!(poly.area(), 64.0);
}

#[test]
fn scaling_law() {
    let poly = polygon(&[[5.0, 0.0], [6.0, 4.0], [4.0, 5.0], [1.0, 5.0], [1.0, 0.0]]);
    for k in [0.5, 3.0, 7.25] {
        let scaled = poly.scale(k);
        assert_relative_eq!(scaled.perimeter(), k * poly.perimeter(), max_relative = 1e-12);
        assert_relative_eq!(scaled.area(), k * k * poly.area(), max_relative = 1e-12);
    }
}

#[test]
fn vertex_sets() {
    let a = polygon(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]);
    let rotated = polygon(&[[1.0, 1.0], [0.0, 0.0], [1.0 + 1e-7, 0.0]]);
    let larger = polygon(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);

    assert!(a.same_vertices(&rotated));
    assert!(a.vertices_in(&larger));
    assert!(!larger.vertices_in(&a));
    assert!(!a.same_vertices(&larger));
}
