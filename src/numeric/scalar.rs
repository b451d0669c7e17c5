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

use std::fmt::{Debug, Display};

use num_traits::{Num, NumCast, Signed, ToPrimitive};

use crate::config::EPS;

/// Numeric field the geometry is generic over.
///
/// Integer instantiations keep every predicate exact; floating ones compare
/// through [`Scalar::tolerance`]. Lengths and areas that need a square root
/// are reported as `f64` regardless of `Self`.
pub trait Scalar:
    Copy + Debug + Display + Default + PartialOrd + Num + NumCast + Signed + Send + Sync + 'static
{
    /// Largest difference still considered equal by [`Scalar::approx_eq`].
    fn tolerance() -> Self;

    fn approx_eq(&self, other: &Self) -> bool {
        (*self - *other).abs() <= Self::tolerance()
    }

    /// Returns -1, 0, or +1.
    fn sign(&self) -> i8 {
        if self.is_positive() {
            1
        } else if self.is_negative() {
            -1
        } else {
            0
        }
    }

    fn to_f64_lossy(&self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }

    /// Integer fields truncate toward zero; `None` when out of range.
    fn from_f64(value: f64) -> Option<Self> {
        <Self as NumCast>::from(value)
    }
}

macro_rules! impl_scalar_float {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                fn tolerance() -> Self {
                    EPS as $t
                }
            }
        )*
    };
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                fn tolerance() -> Self {
                    0
                }
            }
        )*
    };
}

impl_scalar_float!(f32, f64);
impl_scalar_int!(i32, i64);
