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

//! Shader creation descriptor.

use std::ffi::c_char;

use bytemuck::Zeroable;

use crate::array::PackedArray;
use crate::consts::{
    SG_MAX_SHADERSTAGE_IMAGES, SG_MAX_SHADERSTAGE_UBS, SG_MAX_UB_MEMBERS,
    SG_MAX_VERTEX_ATTRIBUTES,
};
use crate::enums::{SgImageType, SgSamplerType, SgUniformType};
use crate::zero_default;

/// Vertex attribute name and semantic (semantics are D3D11-only).
#[repr(C)]
#[derive(Debug, Clone, Copy, Zeroable)]
pub struct SgShaderAttrDesc {
    pub name: *const c_char,
    pub sem_name: *const c_char,
    pub sem_index: i32,
}

/// One member of a uniform block.
#[repr(C)]
#[derive(Debug, Clone, Copy, Zeroable)]
pub struct SgShaderUniformDesc {
    pub name: *const c_char,
    pub uniform_type: SgUniformType,
    pub array_count: i32,
}

/// A uniform block bound to one stage slot.
#[repr(C)]
#[derive(Debug, Clone, Copy, Zeroable)]
pub struct SgShaderUniformBlockDesc {
    pub size: i32,
    pub uniforms: PackedArray<SgShaderUniformDesc, SG_MAX_UB_MEMBERS>,
}

/// An image sampled by one stage slot.
#[repr(C)]
#[derive(Debug, Clone, Copy, Zeroable)]
pub struct SgShaderImageDesc {
    pub name: *const c_char,
    pub image_type: SgImageType,
    pub sampler_type: SgSamplerType,
}

/// Source (or byte code) plus bindings for one shader stage.
#[repr(C)]
#[derive(Debug, Clone, Copy, Zeroable)]
pub struct SgShaderStageDesc {
    /// Shader source text, NUL-terminated; exclusive with `byte_code`.
    pub source: *const c_char,
    pub byte_code: *const u8,
    pub byte_code_size: i32,
    /// Entry point name; backend default when null.
    pub entry: *const c_char,
    pub uniform_blocks: PackedArray<SgShaderUniformBlockDesc, SG_MAX_SHADERSTAGE_UBS>,
    pub images: PackedArray<SgShaderImageDesc, SG_MAX_SHADERSTAGE_IMAGES>,
}

/// Parameters for `sg_make_shader` / `sg_init_shader`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Zeroable)]
pub struct SgShaderDesc {
    pub _start_canary: u32,
    pub attrs: PackedArray<SgShaderAttrDesc, SG_MAX_VERTEX_ATTRIBUTES>,
    pub vs: SgShaderStageDesc,
    pub fs: SgShaderStageDesc,
    /// Optional debug label, NUL-terminated.
    pub label: *const c_char,
    pub _end_canary: u32,
}

zero_default!(
    SgShaderAttrDesc,
    SgShaderUniformDesc,
    SgShaderUniformBlockDesc,
    SgShaderImageDesc,
    SgShaderStageDesc,
    SgShaderDesc,
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    #[test]
    fn attr_and_uniform_layouts() {
        assert_eq!(size_of::<SgShaderAttrDesc>(), 24);
        assert_eq!(offset_of!(SgShaderAttrDesc, sem_name), 8);
        assert_eq!(offset_of!(SgShaderAttrDesc, sem_index), 16);
        assert_eq!(size_of::<SgShaderUniformDesc>(), 16);
        assert_eq!(offset_of!(SgShaderUniformDesc, uniform_type), 8);
        assert_eq!(offset_of!(SgShaderUniformDesc, array_count), 12);
    }

    #[test]
    fn uniform_block_layout() {
        assert_eq!(size_of::<SgShaderUniformBlockDesc>(), 264);
        assert_eq!(offset_of!(SgShaderUniformBlockDesc, uniforms), 8);
    }

    #[test]
    fn image_desc_layout() {
        assert_eq!(size_of::<SgShaderImageDesc>(), 16);
        assert_eq!(offset_of!(SgShaderImageDesc, image_type), 8);
        assert_eq!(offset_of!(SgShaderImageDesc, sampler_type), 12);
    }

    #[test]
    fn stage_desc_layout() {
        assert_eq!(size_of::<SgShaderStageDesc>(), 1280);
        assert_eq!(offset_of!(SgShaderStageDesc, byte_code), 8);
        assert_eq!(offset_of!(SgShaderStageDesc, byte_code_size), 16);
        assert_eq!(offset_of!(SgShaderStageDesc, entry), 24);
        assert_eq!(offset_of!(SgShaderStageDesc, uniform_blocks), 32);
        assert_eq!(offset_of!(SgShaderStageDesc, images), 1088);
    }

    #[test]
    fn shader_desc_layout() {
        assert_eq!(size_of::<SgShaderDesc>(), 2968);
        assert_eq!(offset_of!(SgShaderDesc, attrs), 8);
        assert_eq!(offset_of!(SgShaderDesc, vs), 392);
        assert_eq!(offset_of!(SgShaderDesc, fs), 1672);
        assert_eq!(offset_of!(SgShaderDesc, label), 2952);
        assert_eq!(offset_of!(SgShaderDesc, _end_canary), 2960);
    }
}
