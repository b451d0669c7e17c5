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
    config::MAX_RECURSION_DEPTH,
    error::{GeometryError, Result},
    geometry::point::Point,
    impl_mesh,
    mesh::basic_types::Mesh,
    numeric::scalar::Scalar,
};

/// Lazy walk along `next` from a face's canonical half-edge.
///
/// Yields each half-edge handle once and stops when the walk returns to the
/// start. A missing `next` yields [`GeometryError::BrokenChain`]; a walk that
/// has not closed after [`MAX_RECURSION_DEPTH`] steps yields
/// [`GeometryError::StructuralLimit`]. Either error ends the iteration.
pub struct FaceCycle<'a, T: Scalar, const N: usize> {
    mesh: &'a Mesh<T, N>,
    face: usize,
    start: Option<usize>,
    current: Option<usize>,
    steps: usize,
    done: bool,
}

impl<'a, T: Scalar, const N: usize> FaceCycle<'a, T, N> {
    fn face_name(&self) -> String {
        self.mesh
            .faces
            .get(self.face)
            .map(|f| f.name.clone())
            .unwrap_or_else(|| format!("#{}", self.face))
    }

    fn fail(&mut self, err: GeometryError) -> Option<Result<usize>> {
        self.done = true;
        Some(Err(err))
    }
}

impl<'a, T: Scalar, const N: usize> Iterator for FaceCycle<'a, T, N> {
    type Item = Result<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let start = match self.start {
            Some(s) => s,
            None => {
                self.done = true;
                return None;
            }
        };

        let Some(current) = self.current else {
            self.current = Some(start);
            self.steps = 1;
            return Some(Ok(start));
        };

        let Some(next) = self.mesh.half_edges[current].next else {
            let err = GeometryError::BrokenChain {
                face: self.face_name(),
                half_edge: self.mesh.half_edges[current].name.clone(),
            };
            return self.fail(err);
        };

        if next == start {
            self.done = true;
            return None;
        }
        if self.steps >= MAX_RECURSION_DEPTH {
            let err = GeometryError::StructuralLimit {
                face: self.face_name(),
                limit: MAX_RECURSION_DEPTH,
            };
            return self.fail(err);
        }

        self.steps += 1;
        self.current = Some(next);
        Some(Ok(next))
    }
}

impl<T: Scalar, const N: usize> Mesh<T, N> {
    /// Fresh boundary walk of `face`; empty for empty or unknown faces.
    pub fn face_cycle(&self, face: usize) -> FaceCycle<'_, T, N> {
        FaceCycle {
            mesh: self,
            face,
            start: self.faces.get(face).and_then(|f| f.half_edge),
            current: None,
            steps: 0,
            done: false,
        }
    }
}

impl_mesh! {
    /// Number of half-edges on the boundary of `face`.
    ///
    /// Fails on a broken or non-closing chain and when an edge of the face
    /// is paired with another edge of the same face.
    pub fn try_chain_length(&self, face: usize) -> Result<usize> {
        self.check_face(face)?;
        let mut count = 0;
        for step in self.face_cycle(face) {
            let he = step?;
            if let Some(pair) = self.half_edges[he].pair {
                if self.half_edges[pair].face == Some(face) {
                    return Err(GeometryError::SelfPairedFace {
                        face: self.faces[face].name.clone(),
                        half_edge: self.half_edges[he].name.clone(),
                    });
                }
            }
            count += 1;
        }
        Ok(count)
    }

    /// [`Self::try_chain_length`] with `0` for an empty face and `-1` for
    /// any failure, logged when `report_errors` is set.
    pub fn chain_length(&self, face: usize, report_errors: bool) -> i64 {
        match self.try_chain_length(face) {
            Ok(n) => n as i64,
            Err(err) => {
                if report_errors {
                    tracing::warn!(face, error = %err, "invalid face boundary");
                }
                -1
            }
        }
    }

    pub fn is_valid(&self, face: usize) -> bool {
        self.chain_length(face, true) >= 3
    }

    /// Half-edge handles of a face in boundary order.
    pub fn face_half_edges(&self, face: usize) -> Result<Vec<usize>> {
        self.face_cycle(face).collect()
    }

    /// Destination points of the boundary, starting with the canonical edge.
    pub fn face_points(&self, face: usize) -> Result<Vec<Point<T, N>>> {
        self.face_cycle(face)
            .map(|step| step.map(|he| self.vertices[self.half_edges[he].vertex].position))
            .collect()
    }

    pub fn face_half_edge_names(&self, face: usize) -> Result<Vec<String>> {
        self.face_cycle(face)
            .map(|step| step.map(|he| self.half_edges[he].name.clone()))
            .collect()
    }
}
