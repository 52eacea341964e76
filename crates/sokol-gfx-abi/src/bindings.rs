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

//! Resource bindings applied per draw call (`sg_apply_bindings`).

use bytemuck::Zeroable;

use crate::array::PackedArray;
use crate::consts::{SG_MAX_SHADERSTAGE_BUFFERS, SG_MAX_SHADERSTAGE_IMAGES};
use crate::handles::{SgBuffer, SgImage};
use crate::zero_default;

/// Vertex/index buffers and stage images bound for the next draw.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Zeroable)]
pub struct SgBindings {
    pub _start_canary: u32,
    pub vertex_buffers: PackedArray<SgBuffer, SG_MAX_SHADERSTAGE_BUFFERS>,
    pub vertex_buffer_offsets: [i32; SG_MAX_SHADERSTAGE_BUFFERS],
    pub index_buffer: SgBuffer,
    pub index_buffer_offset: i32,
    pub vs_images: PackedArray<SgImage, SG_MAX_SHADERSTAGE_IMAGES>,
    pub fs_images: PackedArray<SgImage, SG_MAX_SHADERSTAGE_IMAGES>,
    pub _end_canary: u32,
}

zero_default!(SgBindings);

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    #[test]
    fn bindings_layout() {
        assert_eq!(size_of::<SgBindings>(), 176);
        assert_eq!(offset_of!(SgBindings, vertex_buffers), 4);
        assert_eq!(offset_of!(SgBindings, vertex_buffer_offsets), 36);
        assert_eq!(offset_of!(SgBindings, index_buffer), 68);
        assert_eq!(offset_of!(SgBindings, index_buffer_offset), 72);
        assert_eq!(offset_of!(SgBindings, vs_images), 76);
        assert_eq!(offset_of!(SgBindings, fs_images), 124);
        assert_eq!(offset_of!(SgBindings, _end_canary), 172);
    }

    #[test]
    fn slots_address_independently() {
        let mut bindings = SgBindings::default();
        bindings.vertex_buffers[3] = SgBuffer::new(7);
        assert_eq!(bindings.vertex_buffers[3].id, 7);
        assert_eq!(bindings.vertex_buffers[2].id, 0);
        assert_eq!(bindings.vertex_buffers[4].id, 0);
    }
}
