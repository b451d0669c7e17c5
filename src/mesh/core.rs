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
    error::{GeometryError, Result},
    geometry::point::Point,
    impl_mesh,
    mesh::{face::Face, half_edge::HalfEdge, vertex::Vertex},
};

impl_mesh! {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self, position: Point<T, N>) -> usize {
        let idx = self.vertices.len();
        self.vertices.push(Vertex::new(position));
        idx
    }

    /// Adds an empty face; it receives its boundary through
    /// [`Self::add_half_edge`].
    pub fn add_face(&mut self, name: impl Into<String>) -> usize {
        let idx = self.faces.len();
        self.faces.push(Face::new(name));
        idx
    }

    /// Creates a half-edge ending at `vertex` on `face` and makes it the
    /// face's canonical edge.
    pub fn add_half_edge(
        &mut self,
        vertex: usize,
        face: usize,
        name: impl Into<String>,
    ) -> Result<usize> {
        if vertex >= self.vertices.len() {
            return Err(GeometryError::invalid_argument(format!(
                "vertex {} does not exist",
                vertex
            )));
        }
        self.check_face(face)?;

        let idx = self.half_edges.len();
        self.half_edges.push(HalfEdge::new(vertex, face, name));
        self.set_face_half_edge(face, idx)?;
        Ok(idx)
    }

    /// Points the face's traversal entry at `he`, which must already be
    /// tagged with that face.
    pub fn set_face_half_edge(&mut self, face: usize, he: usize) -> Result<()> {
        self.check_face(face)?;
        self.check_half_edge(he)?;
        if self.half_edges[he].face != Some(face) {
            return Err(GeometryError::invalid_argument(format!(
                "half-edge {} belongs to another face than {}",
                self.half_edges[he].name, self.faces[face].name
            )));
        }
        self.faces[face].half_edge = Some(he);
        Ok(())
    }

    /// Builds one face from vertex indices listed in boundary order.
    ///
    /// The half-edge ending at `indices[i]` is named `"{prev}-{i}"`, the ring
    /// is linked in list order and the canonical edge is the second one.
    /// Each new edge is paired with the reverse edge of an earlier face when
    /// `edge_map` already holds it.
    pub fn add_polygon(&mut self, indices: &[usize], name: impl Into<String>) -> Result<usize> {
        let k = indices.len();
        if k < 3 {
            return Err(GeometryError::invalid_argument(format!(
                "a face needs at least 3 vertices, got {}",
                k
            )));
        }
        if let Some(&bad) = indices.iter().find(|&&v| v >= self.vertices.len()) {
            return Err(GeometryError::invalid_argument(format!(
                "vertex index {} out of range (mesh has {} vertices)",
                bad,
                self.vertices.len()
            )));
        }
        for i in 0..k {
            if indices[i] == indices[(i + 1) % k] {
                return Err(GeometryError::invalid_argument(format!(
                    "degenerate edge {}-{}",
                    indices[i], indices[i]
                )));
            }
        }

        let face = self.add_face(name);
        let mut ring = Vec::with_capacity(k);
        for i in 0..k {
            let from = indices[(i + k - 1) % k];
            let to = indices[i];
            let he = self.add_half_edge(to, face, format!("{}-{}", from, to))?;
            if self.vertices[from].half_edge.is_none() {
                self.vertices[from].half_edge = Some(he);
            }
            ring.push(he);
        }
        for i in 0..k {
            self.set_next(ring[i], ring[(i + 1) % k])?;
        }
        self.set_face_half_edge(face, ring[1])?;

        for (i, &he) in ring.iter().enumerate() {
            let from = indices[(i + k - 1) % k];
            let to = indices[i];
            if let Some(&reverse) = self.edge_map.get(&(to, from)) {
                self.set_pair(he, reverse)?;
            }
            if let Some(previous) = self.edge_map.insert((from, to), he) {
                tracing::warn!(
                    face = %self.faces[face].name,
                    edge = %self.half_edges[previous].name,
                    "directed edge used by two faces, orientation is inconsistent"
                );
            }
        }

        Ok(face)
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub(crate) fn check_face(&self, face: usize) -> Result<()> {
        if face >= self.faces.len() {
            return Err(GeometryError::invalid_argument(format!(
                "face {} does not exist",
                face
            )));
        }
        Ok(())
    }

    /// Fails for handles that are out of range or already destroyed.
    pub(crate) fn check_half_edge(&self, he: usize) -> Result<()> {
        match self.half_edges.get(he) {
            None => Err(GeometryError::invalid_argument(format!(
                "half-edge {} does not exist",
                he
            ))),
            Some(h) if h.removed => Err(GeometryError::invalid_argument(format!(
                "half-edge {} was destroyed",
                h.name
            ))),
            Some(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{error::GeometryError, geometry::point::Point2, mesh::Mesh};

    fn square() -> Mesh<f64, 2> {
        let mut mesh = Mesh::new();
        for p in [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]] {
            mesh.add_vertex(Point2::from_vals(p));
        }
        mesh
    }

    #[test]
    fn polygon_names_and_canonical_edge() {
        let mut mesh = square();
        let f = mesh.add_polygon(&[0, 1, 2, 3], "F1").unwrap();

        let names: Vec<_> = mesh.half_edges.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["3-0", "0-1", "1-2", "2-3"]);
        assert_eq!(mesh.faces[f].half_edge, Some(1));
        assert_eq!(mesh.edge_map.get(&(0, 1)), Some(&1));
        assert_eq!(mesh.vertices[0].half_edge, Some(1));
    }

    #[test]
    fn rejects_bad_polygons() {
        let mut mesh = square();
        assert!(matches!(
            mesh.add_polygon(&[0, 1], "F1"),
            Err(GeometryError::InvalidArgument(_))
        ));
        assert!(matches!(
            mesh.add_polygon(&[0, 1, 7], "F1"),
            Err(GeometryError::InvalidArgument(_))
        ));
        assert!(matches!(
            mesh.add_polygon(&[0, 1, 1, 2], "F1"),
            Err(GeometryError::InvalidArgument(_))
        ));
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn face_only_adopts_its_own_edges() {
        let mut mesh = square();
        let f1 = mesh.add_face("F1");
        let f2 = mesh.add_face("F2");
        let he = mesh.add_half_edge(0, f1, "a").unwrap();
        assert!(mesh.set_face_half_edge(f2, he).is_err());
        assert!(mesh.faces[f2].is_empty());
        assert!(mesh.add_half_edge(9, f1, "b").is_err());
    }
}
