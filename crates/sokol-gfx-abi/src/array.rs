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

//! Packed fixed-capacity array view for C inline arrays.

use std::fmt;
use std::ops::{Index, IndexMut};

use bytemuck::Zeroable;

/// A fixed-capacity inline array with C layout.
///
/// `#[repr(transparent)]` over `[T; N]`, so inside a `#[repr(C)]` struct the
/// element stride is exactly `size_of::<T>()` and the whole view occupies
/// `N * size_of::<T>()` bytes, matching a C `T field[N]`. Indexing is
/// bounds-checked; an out-of-range index panics like any slice access.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PackedArray<T, const N: usize>([T; N]);

impl<T, const N: usize> PackedArray<T, N> {
    /// Number of elements.
    pub const LEN: usize = N;

    /// Borrows the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Borrows the elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Iterates over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }
}

impl<T, const N: usize> Index<usize> for PackedArray<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for PackedArray<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

impl<T, const N: usize> From<[T; N]> for PackedArray<T, N> {
    fn from(elems: [T; N]) -> Self {
        Self(elems)
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for PackedArray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

// [T; N] is zeroable whenever T is; repr(transparent) carries it over.
unsafe impl<T: Zeroable, const N: usize> Zeroable for PackedArray<T, N> {}

impl<T: Zeroable, const N: usize> Default for PackedArray<T, N> {
    fn default() -> Self {
        Self::zeroed()
    }
}
