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

//! Offscreen render pass creation descriptor.

use std::ffi::c_char;
use std::fmt;

use bytemuck::Zeroable;

use crate::array::PackedArray;
use crate::consts::SG_MAX_COLOR_ATTACHMENTS;
use crate::handles::SgImage;
use crate::zero_default;

/// Which part of the attached image a pass renders into: cube face, array
/// layer, or 3D slice depending on the image type. One aliased i32, as in
/// the C header.
#[repr(C)]
#[derive(Clone, Copy)]
pub union SgAttachmentSlice {
    pub face: i32,
    pub layer: i32,
    pub slice: i32,
}

// All variants are i32; any bit pattern is valid for any name.
unsafe impl Zeroable for SgAttachmentSlice {}

impl fmt::Debug for SgAttachmentSlice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SgAttachmentSlice({})", unsafe { self.slice })
    }
}

/// One pass attachment: image, mip level and slice selector.
#[repr(C)]
#[derive(Debug, Clone, Copy, Zeroable)]
pub struct SgAttachmentDesc {
    pub image: SgImage,
    pub mip_level: i32,
    pub slice: SgAttachmentSlice,
}

impl SgAttachmentDesc {
    /// Cube face index (aliases `layer`/`slice`).
    #[inline]
    pub fn face(&self) -> i32 {
        unsafe { self.slice.face }
    }

    /// Array layer index (aliases `face`/`slice`).
    #[inline]
    pub fn layer(&self) -> i32 {
        unsafe { self.slice.layer }
    }

    /// 3D depth slice index (aliases `face`/`layer`).
    #[inline]
    pub fn slice(&self) -> i32 {
        unsafe { self.slice.slice }
    }

    #[inline]
    pub fn set_face(&mut self, face: i32) {
        self.slice.face = face;
    }

    #[inline]
    pub fn set_layer(&mut self, layer: i32) {
        self.slice.layer = layer;
    }

    #[inline]
    pub fn set_slice(&mut self, slice: i32) {
        self.slice.slice = slice;
    }
}

/// Parameters for `sg_make_pass` / `sg_init_pass`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Zeroable)]
pub struct SgPassDesc {
    pub _start_canary: u32,
    pub color_attachments: PackedArray<SgAttachmentDesc, SG_MAX_COLOR_ATTACHMENTS>,
    pub depth_stencil_attachment: SgAttachmentDesc,
    /// Optional debug label, NUL-terminated.
    pub label: *const c_char,
    pub _end_canary: u32,
}

zero_default!(SgAttachmentDesc, SgPassDesc);
