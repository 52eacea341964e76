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

//! Library setup descriptor (`sg_setup`) and per-backend context hooks.
//!
//! The context descs carry opaque device pointers and callback pointers the
//! host window system provides; the library never dereferences the ones
//! that do not match its compiled backend.

use std::ffi::c_void;

use bytemuck::Zeroable;

use crate::blittable::Bool8;
use crate::enums::SgPixelFormat;
use crate::zero_default;

/// OpenGL context parameters.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Zeroable)]
pub struct SgGlContextDesc {
    pub force_gles2: Bool8,
}

/// Metal context parameters (device and frame callbacks).
#[repr(C)]
#[derive(Debug, Clone, Copy, Zeroable)]
pub struct SgMtlContextDesc {
    pub device: *const c_void,
    pub renderpass_descriptor_cb: *const c_void,
    pub drawable_cb: *const c_void,
}

/// Direct3D 11 context parameters.
#[repr(C)]
#[derive(Debug, Clone, Copy, Zeroable)]
pub struct SgD3d11ContextDesc {
    pub device: *const c_void,
    pub device_context: *const c_void,
    pub render_target_view_cb: *const c_void,
    pub depth_stencil_view_cb: *const c_void,
}

/// WebGPU context parameters.
#[repr(C)]
#[derive(Debug, Clone, Copy, Zeroable)]
pub struct SgWgpuContextDesc {
    pub device: *const c_void,
    pub render_view_cb: *const c_void,
    pub resolve_view_cb: *const c_void,
    pub depth_stencil_view_cb: *const c_void,
}

/// Default framebuffer formats plus the backend-specific context desc.
#[repr(C)]
#[derive(Debug, Clone, Copy, Zeroable)]
pub struct SgContextDesc {
    pub color_format: SgPixelFormat,
    pub depth_format: SgPixelFormat,
    pub sample_count: i32,
    pub gl: SgGlContextDesc,
    pub metal: SgMtlContextDesc,
    pub d3d11: SgD3d11ContextDesc,
    pub wgpu: SgWgpuContextDesc,
}

/// Parameters for `sg_setup`. Zero fields select the library defaults.
#[repr(C)]
#[derive(Debug, Clone, Copy, Zeroable)]
pub struct SgDesc {
    pub _start_canary: u32,
    pub buffer_pool_size: i32,
    pub image_pool_size: i32,
    pub shader_pool_size: i32,
    pub pipeline_pool_size: i32,
    pub pass_pool_size: i32,
    pub context_pool_size: i32,
    pub uniform_buffer_size: i32,
    pub staging_buffer_size: i32,
    pub sampler_cache_size: i32,
    pub context: SgContextDesc,
    pub _end_canary: u32,
}

zero_default!(
    SgGlContextDesc,
    SgMtlContextDesc,
    SgD3d11ContextDesc,
    SgWgpuContextDesc,
    SgContextDesc,
    SgDesc,
);
