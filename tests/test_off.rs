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

use std::io::Cursor;

use approx::assert_relative_eq;

use cgkit::error::GeometryError;
use cgkit::geometry::Point;
use cgkit::io::{parse_off, read_off, write_off, write_off_to};
use cgkit::kernel::PlanarOrientation;
use cgkit::mesh::Mesh;

const TWO_SQUARES: &str = "\
# two unit squares side by side
OFF
6 2 0

0 0 0
1 0 0
2 0 0
2 1 0
1 1 0
0 1 0
4 0 1 4 5
4 1 2 3 4  # shares edge 1-4
";

fn parse<const N: usize>(text: &str) -> Result<Mesh<f64, N>, GeometryError>
where
    Point<f64, N>: PlanarOrientation<f64>,
{
    parse_off(Cursor::new(text), "inline")
}

#[test]
fn parse_two_squares() {
    let mesh = parse::<2>(TWO_SQUARES).unwrap();

    assert_eq!(mesh.vertex_count(), 6);
    assert_eq!(mesh.face_count(), 2);
    assert_eq!(mesh.faces[0].name, "F1");
    assert_eq!(mesh.faces[1].name, "F2");

    assert!(mesh.all_faces_ccw());
    assert_relative_eq!(mesh.total_area(), 2.0);
    assert_eq!(mesh.get_faces(0), [1]);
    assert_eq!(mesh.get_faces(1), [0]);

    let shared = mesh.edge_map[&(1, 4)];
    let reverse = mesh.edge_map[&(4, 1)];
    assert_eq!(mesh.half_edges[shared].pair, Some(reverse));
    assert_eq!(mesh.half_edges[reverse].pair, Some(shared));
}

#[test]
fn parse_in_space() {
    let mesh = parse::<3>(TWO_SQUARES).unwrap();
    assert_eq!(mesh.vertices[3].position.coords, [2.0, 1.0, 0.0]);
    assert_relative_eq!(mesh.get_area(1), 1.0);
}

#[test]
fn integer_mesh() {
    let mesh: Mesh<i64, 2> = parse_off(Cursor::new(TWO_SQUARES), "inline").unwrap();
    assert_eq!(mesh.get_area(0), 1.0);
    assert!(mesh.is_ccw(1));
}

#[test]
fn empty_counts_give_an_empty_mesh() {
    let mesh = parse::<2>("OFF\n0 0 0\n").unwrap();
    assert_eq!(mesh.vertex_count(), 0);
    assert_eq!(mesh.face_count(), 0);
    assert_eq!(mesh.total_area(), 0.0);
}

#[test]
fn bad_header() {
    let err = parse::<2>("# comment\nPLY\n3 1 0\n").unwrap_err();
    assert!(matches!(err, GeometryError::Parse { line: 2, .. }));
}

#[test]
fn bad_counts_and_numbers() {
    assert!(matches!(
        parse::<2>("OFF\nthree 1 0\n"),
        Err(GeometryError::Parse { line: 2, .. })
    ));
    assert!(matches!(
        parse::<2>("OFF\n3\n"),
        Err(GeometryError::Parse { line: 2, .. })
    ));
    assert!(matches!(
        parse::<2>("OFF\n3 1 0\n0 0 0\n1 x 0\n0 1 0\n3 0 1 2\n"),
        Err(GeometryError::Parse { line: 4, .. })
    ));
}

#[test]
fn truncated_file() {
    assert!(matches!(
        parse::<2>("OFF\n3 1 0\n0 0 0\n1 0 0\n"),
        Err(GeometryError::Parse { .. })
    ));
    assert!(matches!(
        parse::<2>("OFF\n3 1 0\n0 0 0\n1 0 0\n0 1 0\n3 0 1\n"),
        Err(GeometryError::Parse { line: 6, .. })
    ));
}

#[test]
fn index_out_of_range() {
    let err = parse::<2>("OFF\n3 1 0\n0 0 0\n1 0 0\n0 1 0\n3 0 1 3\n").unwrap_err();
    assert!(matches!(err, GeometryError::Parse { line: 6, .. }));
}

#[test]
fn dimension_checks() {
    assert!(matches!(
        parse::<3>("OFF\n3 1 0\n0 0\n1 0\n0 1\n3 0 1 2\n"),
        Err(GeometryError::DimensionMismatch { expected: 3, found: 2 })
    ));
    assert!(matches!(
        parse::<2>("OFF\n3 1 0\n0 0 1\n1 0 1\n0 1 1\n3 0 1 2\n"),
        Err(GeometryError::DimensionMismatch { expected: 2, found: 3 })
    ));
    assert!(parse::<2>("OFF\n3 1\n0 0\n1 0\n0 1\n3 0 1 2\n").is_ok());
}

#[test]
fn write_then_read() {
    let mesh = parse::<2>(TWO_SQUARES).unwrap();

    let mut buffer = Vec::new();
    write_off_to(&mesh, &mut buffer).unwrap();
    let text = String::from_utf8(buffer).unwrap();
    assert!(text.starts_with("OFF\n6 2 0\n"));

    let again = parse::<2>(&text).unwrap();
    assert_eq!(again.face_count(), 2);
    assert_relative_eq!(again.total_area(), mesh.total_area());
    assert_eq!(again.get_faces(0), [1]);

    let path = std::env::temp_dir().join(format!("cgkit_off_{}.off", std::process::id()));
    write_off(&mesh, &path).unwrap();
    let from_disk: Mesh<f64, 2> = read_off(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(from_disk.vertex_count(), 6);
    assert!(from_disk.all_faces_ccw());
}

#[test]
fn missing_file() {
    let result: Result<Mesh<f64, 2>, _> = read_off("/definitely/not/here.off");
    assert!(matches!(result, Err(GeometryError::Io(_))));
}
