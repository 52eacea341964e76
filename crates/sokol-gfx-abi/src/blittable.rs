// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Blittable primitive adapters.
//!
//! These types guarantee an identical bit representation on both sides of
//! the native call boundary. [`Bool8`] stands in wherever the native headers
//! declare a one-byte `bool`/flag byte, and [`AsciiStr`] mirrors fixed
//! inline `char[N]` buffers.

use std::fmt;

use bytemuck::{Pod, Zeroable};

/// A one-byte boolean with exactly two valid encodings: 0 and 1.
///
/// Rust's `bool` already has this representation, but the native boundary
/// must not depend on that of whatever host language sits on the other
/// side, so the byte is made explicit. Conversions from `bool` are total
/// and lossless in both directions; constructing from an arbitrary byte
/// normalizes any non-zero value to 1.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct Bool8(u8);

impl Bool8 {
    /// The canonical false value.
    pub const FALSE: Self = Self(0);
    /// The canonical true value.
    pub const TRUE: Self = Self(1);

    /// Builds a `Bool8` from a raw byte, normalizing to exactly 0 or 1.
    #[inline]
    pub const fn from_byte(byte: u8) -> Self {
        Self((byte != 0) as u8)
    }

    /// Returns the stored byte (always 0 or 1).
    #[inline]
    pub const fn as_byte(self) -> u8 {
        self.0
    }

    /// Returns the logical value.
    #[inline]
    pub const fn as_bool(self) -> bool {
        self.0 != 0
    }
}

impl From<bool> for Bool8 {
    #[inline]
    fn from(value: bool) -> Self {
        Self(value as u8)
    }
}

impl From<Bool8> for bool {
    #[inline]
    fn from(value: Bool8) -> Self {
        value.as_bool()
    }
}

/// A fixed-capacity inline ASCII buffer of `N` bytes.
///
/// Writing a longer string silently truncates to the first `N` bytes; a
/// shorter input leaves the remaining bytes zero. Truncation-on-overflow
/// mirrors how the native side treats these buffers and is not an error,
/// but it does lose data silently, so it is pinned by tests.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsciiStr<const N: usize>([u8; N]);

/// The 16-byte variant used by the native descriptor fields.
pub type AsciiStr16 = AsciiStr<16>;

impl<const N: usize> AsciiStr<N> {
    /// Builds a buffer from a string, truncating to `N` bytes.
    pub fn new(s: &str) -> Self {
        let mut data = [0u8; N];
        let len = s.len().min(N);
        data[..len].copy_from_slice(&s.as_bytes()[..len]);
        Self(data)
    }

    /// The raw bytes, including any zero tail.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    /// The stored text up to the first zero byte.
    pub fn as_str(&self) -> &str {
        let end = self.0.iter().position(|&b| b == 0).unwrap_or(N);
        // Construction only ever copies from a &str prefix.
        std::str::from_utf8(&self.0[..end]).unwrap_or("")
    }
}

impl<const N: usize> Default for AsciiStr<N> {
    fn default() -> Self {
        Self([0u8; N])
    }
}

impl<const N: usize> From<&str> for AsciiStr<N> {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl<const N: usize> fmt::Display for AsciiStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

unsafe impl<const N: usize> Zeroable for AsciiStr<N> {}
