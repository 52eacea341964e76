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

//! Buffer creation descriptor.

use std::ffi::{c_char, c_void};

use bytemuck::Zeroable;

use crate::enums::{SgBufferType, SgUsage};
use crate::zero_default;

/// Parameters for `sg_make_buffer` / `sg_init_buffer`.
///
/// The trailing per-backend fields inject an externally created native
/// buffer instead of letting the library allocate one; they stay zero in
/// the common case.
#[repr(C)]
#[derive(Debug, Clone, Copy, Zeroable)]
pub struct SgBufferDesc {
    pub _start_canary: u32,
    pub size: i32,
    pub buffer_type: SgBufferType,
    pub usage: SgUsage,
    /// Initial data for immutable buffers; null for dynamic/stream usage.
    pub content: *const c_void,
    /// Optional debug label, NUL-terminated.
    pub label: *const c_char,
    pub gl_buffers: [u32; 2],
    pub mtl_buffers: [*const c_void; 2],
    pub d3d11_buffer: *const c_void,
    pub wgpu_buffer: *const c_void,
    pub _end_canary: u32,
}

zero_default!(SgBufferDesc);

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    #[test]
    fn buffer_desc_layout() {
        assert_eq!(size_of::<SgBufferDesc>(), 80);
        assert_eq!(offset_of!(SgBufferDesc, size), 4);
        assert_eq!(offset_of!(SgBufferDesc, buffer_type), 8);
        assert_eq!(offset_of!(SgBufferDesc, usage), 12);
        assert_eq!(offset_of!(SgBufferDesc, content), 16);
        assert_eq!(offset_of!(SgBufferDesc, label), 24);
        assert_eq!(offset_of!(SgBufferDesc, gl_buffers), 32);
        assert_eq!(offset_of!(SgBufferDesc, mtl_buffers), 40);
        assert_eq!(offset_of!(SgBufferDesc, d3d11_buffer), 56);
        assert_eq!(offset_of!(SgBufferDesc, wgpu_buffer), 64);
        assert_eq!(offset_of!(SgBufferDesc, _end_canary), 72);
    }

    #[test]
    fn default_desc_has_null_pointers() {
        let desc = SgBufferDesc::default();
        assert!(desc.content.is_null());
        assert!(desc.label.is_null());
        assert_eq!(desc.usage, SgUsage::Default);
    }
}
