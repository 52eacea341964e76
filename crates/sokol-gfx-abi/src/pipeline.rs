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

//! Pipeline creation descriptor and its nested state blocks.

use std::ffi::c_char;

use bytemuck::Zeroable;

use crate::array::PackedArray;
use crate::blittable::Bool8;
use crate::consts::{SG_MAX_SHADERSTAGE_BUFFERS, SG_MAX_VERTEX_ATTRIBUTES};
use crate::enums::{
    SgBlendFactor, SgBlendOp, SgCompareFunc, SgCullMode, SgFaceWinding, SgIndexType,
    SgPixelFormat, SgPrimitiveType, SgStencilOp, SgVertexFormat, SgVertexStep,
};
use crate::handles::SgShader;
use crate::zero_default;

/// Per-buffer vertex layout (stride and step function).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Zeroable)]
pub struct SgBufferLayoutDesc {
    pub stride: i32,
    pub step_func: SgVertexStep,
    pub step_rate: i32,
}

/// Per-attribute vertex layout (source buffer, offset, format).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Zeroable)]
pub struct SgVertexAttrDesc {
    pub buffer_index: i32,
    pub offset: i32,
    pub format: SgVertexFormat,
}

/// Complete vertex layout of a pipeline.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Zeroable)]
pub struct SgLayoutDesc {
    pub buffers: PackedArray<SgBufferLayoutDesc, SG_MAX_SHADERSTAGE_BUFFERS>,
    pub attrs: PackedArray<SgVertexAttrDesc, SG_MAX_VERTEX_ATTRIBUTES>,
}

/// Stencil operations for one face orientation.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Zeroable)]
pub struct SgStencilState {
    pub fail_op: SgStencilOp,
    pub depth_fail_op: SgStencilOp,
    pub pass_op: SgStencilOp,
    pub compare_func: SgCompareFunc,
}

/// Depth and stencil test state.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Zeroable)]
pub struct SgDepthStencilState {
    pub stencil_front: SgStencilState,
    pub stencil_back: SgStencilState,
    pub depth_compare_func: SgCompareFunc,
    pub depth_write_enabled: Bool8,
    pub stencil_enabled: Bool8,
    pub stencil_read_mask: u8,
    pub stencil_write_mask: u8,
    pub stencil_ref: u8,
}

/// Alpha blending state.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Zeroable)]
pub struct SgBlendState {
    pub enabled: Bool8,
    pub src_factor_rgb: SgBlendFactor,
    pub dst_factor_rgb: SgBlendFactor,
    pub op_rgb: SgBlendOp,
    pub src_factor_alpha: SgBlendFactor,
    pub dst_factor_alpha: SgBlendFactor,
    pub op_alpha: SgBlendOp,
    /// [`SgColorMask`](crate::enums::SgColorMask) bits, stored as one byte.
    pub color_write_mask: u8,
    pub color_attachment_count: i32,
    pub color_format: SgPixelFormat,
    pub depth_format: SgPixelFormat,
    pub blend_color: [f32; 4],
}

/// Rasterizer state.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Zeroable)]
pub struct SgRasterizerState {
    pub alpha_to_coverage_enabled: Bool8,
    pub cull_mode: SgCullMode,
    pub face_winding: SgFaceWinding,
    pub sample_count: i32,
    pub depth_bias: f32,
    pub depth_bias_slope_scale: f32,
    pub depth_bias_clamp: f32,
}

/// Parameters for `sg_make_pipeline` / `sg_init_pipeline`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Zeroable)]
pub struct SgPipelineDesc {
    pub _start_canary: u32,
    pub layout: SgLayoutDesc,
    pub shader: SgShader,
    pub primitive_type: SgPrimitiveType,
    pub index_type: SgIndexType,
    pub depth_stencil: SgDepthStencilState,
    pub blend: SgBlendState,
    pub rasterizer: SgRasterizerState,
    /// Optional debug label, NUL-terminated.
    pub label: *const c_char,
    pub _end_canary: u32,
}

zero_default!(
    SgBufferLayoutDesc,
    SgVertexAttrDesc,
    SgLayoutDesc,
    SgStencilState,
    SgDepthStencilState,
    SgBlendState,
    SgRasterizerState,
    SgPipelineDesc,
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    #[test]
    fn layout_desc_layout() {
        assert_eq!(size_of::<SgBufferLayoutDesc>(), 12);
        assert_eq!(size_of::<SgVertexAttrDesc>(), 12);
        assert_eq!(size_of::<SgLayoutDesc>(), 288);
        assert_eq!(offset_of!(SgLayoutDesc, attrs), 96);
    }

    #[test]
    fn depth_stencil_state_layout() {
        assert_eq!(size_of::<SgStencilState>(), 16);
        assert_eq!(size_of::<SgDepthStencilState>(), 44);
        assert_eq!(offset_of!(SgDepthStencilState, stencil_back), 16);
        assert_eq!(offset_of!(SgDepthStencilState, depth_compare_func), 32);
        assert_eq!(offset_of!(SgDepthStencilState, depth_write_enabled), 36);
        assert_eq!(offset_of!(SgDepthStencilState, stencil_enabled), 37);
        assert_eq!(offset_of!(SgDepthStencilState, stencil_read_mask), 38);
        assert_eq!(offset_of!(SgDepthStencilState, stencil_write_mask), 39);
        assert_eq!(offset_of!(SgDepthStencilState, stencil_ref), 40);
    }

    #[test]
    fn blend_state_layout() {
        assert_eq!(size_of::<SgBlendState>(), 60);
        assert_eq!(offset_of!(SgBlendState, src_factor_rgb), 4);
        assert_eq!(offset_of!(SgBlendState, op_alpha), 24);
        assert_eq!(offset_of!(SgBlendState, color_write_mask), 28);
        assert_eq!(offset_of!(SgBlendState, color_attachment_count), 32);
        assert_eq!(offset_of!(SgBlendState, color_format), 36);
        assert_eq!(offset_of!(SgBlendState, depth_format), 40);
        assert_eq!(offset_of!(SgBlendState, blend_color), 44);
    }

    #[test]
    fn rasterizer_state_layout() {
        assert_eq!(size_of::<SgRasterizerState>(), 28);
        assert_eq!(offset_of!(SgRasterizerState, cull_mode), 4);
        assert_eq!(offset_of!(SgRasterizerState, depth_bias_clamp), 24);
    }

    #[test]
    fn pipeline_desc_layout() {
        assert_eq!(size_of::<SgPipelineDesc>(), 456);
        assert_eq!(offset_of!(SgPipelineDesc, layout), 4);
        assert_eq!(offset_of!(SgPipelineDesc, shader), 292);
        assert_eq!(offset_of!(SgPipelineDesc, primitive_type), 296);
        assert_eq!(offset_of!(SgPipelineDesc, index_type), 300);
        assert_eq!(offset_of!(SgPipelineDesc, depth_stencil), 304);
        assert_eq!(offset_of!(SgPipelineDesc, blend), 348);
        assert_eq!(offset_of!(SgPipelineDesc, rasterizer), 408);
        assert_eq!(offset_of!(SgPipelineDesc, label), 440);
        assert_eq!(offset_of!(SgPipelineDesc, _end_canary), 448);
    }
}
