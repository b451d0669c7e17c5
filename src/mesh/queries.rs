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
    geometry::point::Point, impl_mesh, kernel::orientation::PlanarOrientation,
    numeric::scalar::Scalar,
};

impl_mesh! {
    /// Signed area of a face, positive when its boundary runs
    /// counter-clockwise as seen from `+z`. `0.0` for invalid faces.
    ///
    /// The face is fanned from the canonical edge's destination. Faces in
    /// 3D report the magnitude of the vector area with the sign of its z
    /// component.
    pub fn get_area(&self, face: usize) -> f64 {
        if !self.is_valid(face) {
            return 0.0;
        }
        let Ok(points) = self.face_points(face) else {
            return 0.0;
        };

        let p0 = &points[0];
        let mut sum = [0.0_f64; 3];
        for i in 1..points.len() - 1 {
            let v = <Point<T, N> as PlanarOrientation<T>>::area_vector(p0, &points[i], &points[i + 1]);
            for (s, c) in sum.iter_mut().zip(v.iter()) {
                *s += c.to_f64_lossy();
            }
        }

        if N == 2 {
            return 0.5 * sum[2];
        }
        let magnitude = 0.5 * (sum[0] * sum[0] + sum[1] * sum[1] + sum[2] * sum[2]).sqrt();
        if sum[2] < 0.0 { -magnitude } else { magnitude }
    }

    pub fn get_perimeter(&self, face: usize) -> f64 {
        if !self.is_valid(face) {
            return 0.0;
        }
        let Ok(points) = self.face_points(face) else {
            return 0.0;
        };
        let k = points.len();
        (0..k).map(|i| points[i].dist(&points[(i + 1) % k])).sum()
    }

    /// Every consecutive triple of boundary points turns strictly left.
    pub fn is_ccw(&self, face: usize) -> bool {
        if !self.is_valid(face) {
            return false;
        }
        let Ok(points) = self.face_points(face) else {
            return false;
        };
        let k = points.len();
        (0..k).all(|i| {
            <Point<T, N> as PlanarOrientation<T>>::area2(
                &points[i],
                &points[(i + 1) % k],
                &points[(i + 2) % k],
            ) > T::zero()
        })
    }

    /// `he` is reached walking the boundary of `face` before it closes.
    pub fn in_face(&self, face: usize, he: usize) -> bool {
        self.face_cycle(face)
            .map_while(|step| step.ok())
            .any(|h| h == he)
    }

    /// Distinct faces across the paired boundary edges, in boundary order.
    pub fn get_faces(&self, face: usize) -> Vec<usize> {
        let mut neighbors = Vec::new();
        for he in self.face_cycle(face).map_while(|step| step.ok()) {
            let Some(pair) = self.half_edges[he].pair else {
                continue;
            };
            match self.half_edges[pair].face {
                Some(other) if other != face && !neighbors.contains(&other) => {
                    neighbors.push(other)
                }
                _ => {}
            }
        }
        neighbors
    }

    /// Every boundary edge leads to its own neighbouring face.
    pub fn is_surrounded(&self, face: usize) -> bool {
        let length = self.chain_length(face, false);
        length > 0 && self.get_faces(face).len() as i64 == length
    }

    /// Checks every non-empty face, logging the ones that are not CCW.
    pub fn all_faces_ccw(&self) -> bool {
        let mut all = true;
        for (idx, face) in self.faces.iter().enumerate() {
            if face.is_empty() {
                continue;
            }
            if !self.is_ccw(idx) {
                tracing::warn!(face = %face.name, "face is not counter-clockwise");
                all = false;
            }
        }
        all
    }

    pub fn total_area(&self) -> f64 {
        self.faces
            .iter()
            .enumerate()
            .filter(|(_, face)| !face.is_empty())
            .map(|(idx, face)| {
                let area = self.get_area(idx);
                tracing::debug!(face = %face.name, area, "face area");
                area
            })
            .sum()
    }
}
