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

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    error::{GeometryError, Result},
    geometry::point::Point,
    kernel::orientation::PlanarOrientation,
    mesh::basic_types::Mesh,
    numeric::scalar::Scalar,
};

/// Meaningful lines of an OFF stream with their one-based line numbers.
struct Lines<R: BufRead> {
    inner: std::io::Lines<R>,
    number: usize,
}

impl<R: BufRead> Lines<R> {
    fn new(reader: R) -> Self {
        Self {
            inner: reader.lines(),
            number: 0,
        }
    }

    /// Next line that is neither blank nor a `#` comment, trimmed.
    fn next_content(&mut self) -> Result<Option<(usize, String)>> {
        for line in self.inner.by_ref() {
            self.number += 1;
            let line = line?;
            let content = line.split('#').next().unwrap_or("").trim();
            if !content.is_empty() {
                return Ok(Some((self.number, content.to_string())));
            }
        }
        Ok(None)
    }

    fn expect_content(&mut self, what: &str) -> Result<(usize, String)> {
        self.next_content()?
            .ok_or_else(|| GeometryError::parse(self.number + 1, format!("missing {}", what)))
    }
}

fn parse_count(line: usize, token: Option<&str>, what: &str) -> Result<usize> {
    let token = token.ok_or_else(|| GeometryError::parse(line, format!("missing {}", what)))?;
    token
        .parse()
        .map_err(|_| GeometryError::parse(line, format!("bad {} '{}'", what, token)))
}

fn parse_vertex<T: Scalar, const N: usize>(line: usize, content: &str) -> Result<Point<T, N>> {
    let values = content
        .split_whitespace()
        .take(3)
        .map(|tok| {
            tok.parse::<f64>()
                .map_err(|_| GeometryError::parse(line, format!("bad coordinate '{}'", tok)))
        })
        .collect::<Result<Vec<f64>>>()?;

    if values.len() < N {
        return Err(GeometryError::DimensionMismatch {
            expected: N,
            found: values.len(),
        });
    }
    if N == 2 && values.len() == 3 && values[2] != 0.0 {
        return Err(GeometryError::DimensionMismatch {
            expected: 2,
            found: 3,
        });
    }

    let coords = values[..N]
        .iter()
        .map(|&v| {
            T::from_f64(v).ok_or_else(|| {
                GeometryError::parse(line, format!("coordinate {} does not fit the field", v))
            })
        })
        .collect::<Result<Vec<T>>>()?;
    Point::try_from_slice(&coords)
}

/// Builds a mesh from OFF text.
///
/// Format:
///   OFF
///   <numVertices> <numFaces> [<numEdges>]
///   x y [z]            one line per vertex
///   k i0 i1 ... ik-1   one line per face, zero-based indices
///
/// Faces are named `F1..Fn` in file order. `name` only tags diagnostics.
pub fn parse_off<T: Scalar, const N: usize, R: BufRead>(reader: R, name: &str) -> Result<Mesh<T, N>>
where
    Point<T, N>: PlanarOrientation<T>,
{
    let mut lines = Lines::new(reader);

    let (line, header) = lines.expect_content("OFF header")?;
    if header != "OFF" {
        tracing::warn!(source = name, line, header = %header, "not an OFF header");
        return Err(GeometryError::parse(
            line,
            format!("expected 'OFF', got '{}'", header),
        ));
    }

    let (line, counts) = lines.expect_content("element counts")?;
    let mut tokens = counts.split_whitespace();
    let vertex_count = parse_count(line, tokens.next(), "vertex count")?;
    let face_count = parse_count(line, tokens.next(), "face count")?;

    let mut mesh = Mesh::new();
    if vertex_count == 0 || face_count == 0 {
        tracing::warn!(
            source = name,
            vertex_count,
            face_count,
            "OFF file has no vertices or no faces"
        );
        return Ok(mesh);
    }

    for _ in 0..vertex_count {
        let (line, content) = lines.expect_content("vertex line")?;
        mesh.add_vertex(parse_vertex::<T, N>(line, &content)?);
    }

    for f in 0..face_count {
        let (line, content) = lines.expect_content("face line")?;
        let mut tokens = content.split_whitespace();
        let k = parse_count(line, tokens.next(), "face size")?;
        let indices = (0..k)
            .map(|_| {
                let index = parse_count(line, tokens.next(), "vertex index")?;
                if index >= vertex_count {
                    return Err(GeometryError::parse(
                        line,
                        format!("vertex index {} out of range", index),
                    ));
                }
                Ok(index)
            })
            .collect::<Result<Vec<usize>>>()?;
        mesh.add_polygon(&indices, format!("F{}", f + 1))?;
    }

    tracing::debug!(
        source = name,
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "OFF mesh loaded"
    );
    Ok(mesh)
}

pub fn read_off<T: Scalar, const N: usize, P: AsRef<Path>>(path: P) -> Result<Mesh<T, N>>
where
    Point<T, N>: PlanarOrientation<T>,
{
    let path = path.as_ref();
    let file = File::open(path)?;
    parse_off(BufReader::new(file), &path.display().to_string())
}

/// Writes every non-empty face whose boundary closes. Planar meshes get a
/// zero z column.
pub fn write_off_to<T: Scalar, const N: usize, W: Write>(mesh: &Mesh<T, N>, mut out: W) -> Result<()>
where
    Point<T, N>: PlanarOrientation<T>,
{
    let mut faces = Vec::new();
    for (idx, face) in mesh.faces.iter().enumerate() {
        if face.is_empty() {
            continue;
        }
        match mesh.face_half_edges(idx) {
            Ok(ring) => faces.push(
                ring.iter()
                    .map(|&he| mesh.half_edges[he].vertex)
                    .collect::<Vec<_>>(),
            ),
            Err(err) => tracing::warn!(face = %face.name, error = %err, "face skipped"),
        }
    }

    writeln!(out, "OFF")?;
    writeln!(out, "{} {} {}", mesh.vertices.len(), faces.len(), 0)?;

    for v in &mesh.vertices {
        let mut coords: Vec<String> = v.position.coords.iter().map(|c| c.to_string()).collect();
        coords.resize(3, "0".to_string());
        writeln!(out, "{}", coords.join(" "))?;
    }

    for ring in &faces {
        write!(out, "{}", ring.len())?;
        for v in ring {
            write!(out, " {}", v)?;
        }
        writeln!(out)?;
    }

    out.flush()?;
    Ok(())
}

pub fn write_off<T: Scalar, const N: usize, P: AsRef<Path>>(mesh: &Mesh<T, N>, path: P) -> Result<()>
where
    Point<T, N>: PlanarOrientation<T>,
{
    let file = File::create(path)?;
    write_off_to(mesh, BufWriter::new(file))
}
