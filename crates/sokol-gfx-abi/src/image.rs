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

//! Image creation descriptor and initial pixel content.

use std::ffi::{c_char, c_void};
use std::fmt;

use bytemuck::Zeroable;

use crate::array::PackedArray;
use crate::blittable::Bool8;
use crate::consts::{SG_CUBEFACE_NUM, SG_MAX_MIPMAPS};
use crate::enums::{
    SgBorderColor, SgCubeFace, SgFilter, SgImageType, SgPixelFormat, SgUsage, SgWrap,
};
use crate::zero_default;

/// Pointer and byte size of one mip level of one face/slice.
#[repr(C)]
#[derive(Debug, Clone, Copy, Zeroable)]
pub struct SgSubimageContent {
    pub ptr: *const c_void,
    pub size: i32,
}

/// Initial pixel data for every face and mip level.
///
/// Row-major `[face][mip]` as in the C headers: faces 0..6 (cube faces, or
/// just face 0 for 2D/3D/array images), mips 0..16.
#[repr(C)]
#[derive(Debug, Clone, Copy, Zeroable)]
pub struct SgImageContent {
    pub subimage: PackedArray<PackedArray<SgSubimageContent, SG_MAX_MIPMAPS>, SG_CUBEFACE_NUM>,
}

impl SgImageContent {
    /// The subimage slot for a cube face and mip level.
    pub fn subimage(&self, face: SgCubeFace, mip_level: usize) -> &SgSubimageContent {
        &self.subimage[face as usize][mip_level]
    }

    pub fn subimage_mut(&mut self, face: SgCubeFace, mip_level: usize) -> &mut SgSubimageContent {
        &mut self.subimage[face as usize][mip_level]
    }
}

/// Third image dimension: depth for 3D images, layer count for array
/// images. The two names alias the same four bytes, as in the C header.
#[repr(C)]
#[derive(Clone, Copy)]
pub union SgImageExtent {
    pub depth: i32,
    pub layers: i32,
}

// Both variants are i32, so every bit pattern is valid for either name.
unsafe impl Zeroable for SgImageExtent {}

impl fmt::Debug for SgImageExtent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SgImageExtent({})", unsafe { self.depth })
    }
}

/// Parameters for `sg_make_image` / `sg_init_image`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Zeroable)]
pub struct SgImageDesc {
    pub _start_canary: u32,
    pub image_type: SgImageType,
    pub render_target: Bool8,
    pub width: i32,
    pub height: i32,
    pub extent: SgImageExtent,
    pub num_mipmaps: i32,
    pub usage: SgUsage,
    pub pixel_format: SgPixelFormat,
    pub sample_count: i32,
    pub min_filter: SgFilter,
    pub mag_filter: SgFilter,
    pub wrap_u: SgWrap,
    pub wrap_v: SgWrap,
    pub wrap_w: SgWrap,
    pub border_color: SgBorderColor,
    pub max_anisotropy: u32,
    pub min_lod: f32,
    pub max_lod: f32,
    pub content: SgImageContent,
    /// Optional debug label, NUL-terminated.
    pub label: *const c_char,
    pub gl_textures: [u32; 2],
    pub mtl_textures: [*const c_void; 2],
    pub d3d11_texture: *const c_void,
    pub wgpu_texture: *const c_void,
    pub _end_canary: u32,
}

impl SgImageDesc {
    /// Depth of a 3D image (aliases [`Self::layers`]).
    #[inline]
    pub fn depth(&self) -> i32 {
        unsafe { self.extent.depth }
    }

    /// Layer count of an array image (aliases [`Self::depth`]).
    #[inline]
    pub fn layers(&self) -> i32 {
        unsafe { self.extent.layers }
    }

    #[inline]
    pub fn set_depth(&mut self, depth: i32) {
        self.extent.depth = depth;
    }

    #[inline]
    pub fn set_layers(&mut self, layers: i32) {
        self.extent.layers = layers;
    }
}

zero_default!(SgSubimageContent, SgImageContent, SgImageDesc);

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    #[test]
    fn subimage_content_layout() {
        assert_eq!(size_of::<SgSubimageContent>(), 16);
        assert_eq!(offset_of!(SgSubimageContent, size), 8);
    }

    #[test]
    fn image_content_layout() {
        assert_eq!(size_of::<SgImageContent>(), 1536);
    }

    #[test]
    fn image_desc_layout() {
        assert_eq!(size_of::<SgImageDesc>(), 1672);
        assert_eq!(offset_of!(SgImageDesc, image_type), 4);
        assert_eq!(offset_of!(SgImageDesc, render_target), 8);
        assert_eq!(offset_of!(SgImageDesc, width), 12);
        assert_eq!(offset_of!(SgImageDesc, height), 16);
        assert_eq!(offset_of!(SgImageDesc, extent), 20);
        assert_eq!(offset_of!(SgImageDesc, num_mipmaps), 24);
        assert_eq!(offset_of!(SgImageDesc, usage), 28);
        assert_eq!(offset_of!(SgImageDesc, pixel_format), 32);
        assert_eq!(offset_of!(SgImageDesc, sample_count), 36);
        assert_eq!(offset_of!(SgImageDesc, min_filter), 40);
        assert_eq!(offset_of!(SgImageDesc, mag_filter), 44);
        assert_eq!(offset_of!(SgImageDesc, wrap_u), 48);
        assert_eq!(offset_of!(SgImageDesc, wrap_v), 52);
        assert_eq!(offset_of!(SgImageDesc, wrap_w), 56);
        assert_eq!(offset_of!(SgImageDesc, border_color), 60);
        assert_eq!(offset_of!(SgImageDesc, max_anisotropy), 64);
        assert_eq!(offset_of!(SgImageDesc, min_lod), 68);
        assert_eq!(offset_of!(SgImageDesc, max_lod), 72);
        assert_eq!(offset_of!(SgImageDesc, content), 80);
        assert_eq!(offset_of!(SgImageDesc, label), 1616);
        assert_eq!(offset_of!(SgImageDesc, gl_textures), 1624);
        assert_eq!(offset_of!(SgImageDesc, mtl_textures), 1632);
        assert_eq!(offset_of!(SgImageDesc, d3d11_texture), 1648);
        assert_eq!(offset_of!(SgImageDesc, wgpu_texture), 1656);
        assert_eq!(offset_of!(SgImageDesc, _end_canary), 1664);
    }

    #[test]
    fn extent_names_alias_the_same_bytes() {
        let mut desc = SgImageDesc::default();
        desc.set_depth(32);
        assert_eq!(desc.layers(), 32);
        desc.set_layers(8);
        assert_eq!(desc.depth(), 8);
    }

    #[test]
    fn subimage_slots_do_not_alias_across_faces() {
        let mut content = SgImageContent::default();
        content.subimage_mut(SgCubeFace::NegX, 7).size = 123;
        assert_eq!(content.subimage(SgCubeFace::NegX, 7).size, 123);
        // Mip levels past the face count index distinct slots.
        assert_eq!(content.subimage(SgCubeFace::PosY, 1).size, 0);
        assert_eq!(content.subimage(SgCubeFace::PosX, 7).size, 0);
    }
}
