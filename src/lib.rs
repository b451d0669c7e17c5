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

//! Planar computational geometry: points and polygons, an arena-backed
//! half-edge mesh loaded from OFF files, and two convex hull algorithms.

pub mod config;
pub mod error;
pub mod geometry;
pub mod io;
pub mod kernel;
pub mod mesh;
pub mod numeric;
pub mod operations;

pub use config::{HullConfig, SortStrategy};
pub use error::{GeometryError, Result};
pub use geometry::{Point, Point2, Point3, Polygon, Segment, Segment2, Vector, Vector2, Vector3};
pub use mesh::Mesh;
pub use numeric::Scalar;
pub use operations::{gift_wrapping, graham_scan, graham_scan_with};
