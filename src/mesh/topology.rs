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
    impl_mesh,
};

impl_mesh! {
    /// Links `a -> b`, setting both `a.next` and `b.prev`.
    pub fn set_next(&mut self, a: usize, b: usize) -> Result<()> {
        if a == b {
            return Err(GeometryError::invalid_argument(format!(
                "half-edge {} cannot be its own next",
                a
            )));
        }
        self.check_half_edge(a)?;
        self.check_half_edge(b)?;

        self.half_edges[a].next = Some(b);
        self.half_edges[b].prev = Some(a);
        Ok(())
    }

    /// Pairs `a` and `b` symmetrically. Partners either side had before are
    /// released. On error both half-edges are left untouched.
    pub fn set_pair(&mut self, a: usize, b: usize) -> Result<()> {
        if a == b {
            return Err(GeometryError::invalid_argument(format!(
                "half-edge {} cannot be its own pair",
                a
            )));
        }
        self.check_half_edge(a)?;
        self.check_half_edge(b)?;
        if self.half_edges[a].face == self.half_edges[b].face {
            return Err(GeometryError::invalid_argument(format!(
                "half-edges {} and {} share a face",
                self.half_edges[a].name, self.half_edges[b].name
            )));
        }

        for (he, partner) in [(a, b), (b, a)] {
            if let Some(old) = self.half_edges[he].pair {
                if old != partner {
                    self.half_edges[old].pair = None;
                }
            }
        }
        self.half_edges[a].pair = Some(b);
        self.half_edges[b].pair = Some(a);
        Ok(())
    }

    /// Unlinks `he` from its ring and its pair, then retires the slot.
    ///
    /// `prev` and `next` are spliced together; when they are the same edge
    /// the survivor is left with no links at all and the face is emptied.
    /// Otherwise, if `he` was the face's canonical edge, the face moves on to
    /// `prev`, then `next`, then to nothing.
    pub fn destroy(&mut self, he: usize) -> Result<()> {
        self.check_half_edge(he)?;

        let p = self.half_edges[he].prev;
        let n = self.half_edges[he].next;

        let collapsed = matches!((p, n), (Some(p), Some(n)) if p == n && p != he);
        match (p, n) {
            (Some(p), Some(n)) if p == n => {
                self.half_edges[p].next = None;
                self.half_edges[n].prev = None;
            }
            _ => {
                if let Some(p) = p {
                    self.half_edges[p].next = n.filter(|&n| n != p);
                }
                if let Some(n) = n {
                    self.half_edges[n].prev = p.filter(|&p| p != n);
                }
            }
        }

        if let Some(pair) = self.half_edges[he].pair {
            self.half_edges[pair].pair = None;
        }

        let edge = &mut self.half_edges[he];
        edge.next = None;
        edge.prev = None;
        edge.pair = None;
        edge.name.push_str("<destroyed>");
        edge.removed = true;

        if let Some(face) = edge.face {
            if collapsed {
                // a lone edge no longer bounds anything
                self.faces[face].half_edge = None;
                self.half_edges[he].face = None;
                tracing::debug!(face = %self.faces[face].name, "face emptied");
            } else if self.faces[face].half_edge == Some(he) {
                let survivor = p.filter(|&p| p != he).or(n.filter(|&n| n != he));
                self.faces[face].half_edge = survivor;
                self.half_edges[he].face = None;
                tracing::debug!(
                    face = %self.faces[face].name,
                    canonical = ?survivor,
                    "canonical half-edge reassigned"
                );
            }
        }

        self.edge_map.retain(|_, v| *v != he);
        for vertex in self.vertices.iter_mut() {
            if vertex.half_edge == Some(he) {
                vertex.half_edge = None;
            }
        }

        Ok(())
    }
}
