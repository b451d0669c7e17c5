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

//! Error types shared by the geometry, mesh and hull modules.

use thiserror::Error;

/// Result type alias using [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;

/// Errors raised by geometric and topological operations.
#[derive(Error, Debug)]
pub enum GeometryError {
    /// A topological request that would break a mesh invariant
    /// (self-pairing, self-next, same-face pairing, dangling handle).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A hull needs at least three points, before or after filtering.
    #[error("not enough points: need at least {required}, got {found}")]
    InsufficientPoints {
        /// Minimum number of points.
        required: usize,
        /// Number of usable points.
        found: usize,
    },

    /// Coordinates handed over for a point of a different dimension.
    #[error("dimension mismatch: expected {expected}, got {found}")]
    DimensionMismatch {
        /// Dimension of the target point.
        expected: usize,
        /// Dimension of the supplied data.
        found: usize,
    },

    /// A `next` walk did not return to its start within the step limit.
    #[error("face {face}: boundary walk exceeded {limit} steps")]
    StructuralLimit {
        /// Debug name of the face.
        face: String,
        /// Step limit that was hit.
        limit: usize,
    },

    /// A `next` walk reached a half-edge with no successor.
    #[error("face {face}: half-edge {half_edge} has no next")]
    BrokenChain {
        /// Debug name of the face.
        face: String,
        /// Debug name of the half-edge without successor.
        half_edge: String,
    },

    /// A boundary half-edge is paired with another half-edge of its own face.
    #[error("face {face}: half-edge {half_edge} is paired within the same face")]
    SelfPairedFace {
        /// Debug name of the face.
        face: String,
        /// Debug name of the offending half-edge.
        half_edge: String,
    },

    /// Malformed OFF input.
    #[error("OFF line {line}: {message}")]
    Parse {
        /// One-based line number in the input.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GeometryError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Creates an OFF parse error.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Hull input with fewer than three usable points.
    pub fn insufficient_points(found: usize) -> Self {
        Self::InsufficientPoints { required: 3, found }
    }
}
