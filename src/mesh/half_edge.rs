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

/// Directed boundary slot of a face.
///
/// Links are arena handles into [`Mesh::half_edges`](crate::mesh::Mesh);
/// `None` stands for an unset link.
#[derive(Clone, Debug)]
pub struct HalfEdge {
    pub vertex: usize,       // points to Vertex it ends at
    pub face: Option<usize>, // cleared once destroyed
    pub next: Option<usize>,
    pub prev: Option<usize>,
    pub pair: Option<usize>,
    pub name: String,
    pub removed: bool, // marks if the half-edge is destroyed
}

impl HalfEdge {
    pub fn new(vertex: usize, face: usize, name: impl Into<String>) -> Self {
        Self {
            vertex,
            face: Some(face),
            next: None,
            prev: None,
            pair: None,
            name: name.into(),
            removed: false,
        }
    }
}
