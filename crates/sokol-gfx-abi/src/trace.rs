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

//! Trace hook table for `sg_install_trace_hooks`.
//!
//! Each hook is an untyped callback pointer; a null entry leaves the
//! previous hook untouched. `sg_install_trace_hooks` returns the table
//! that was installed before, so hooks can be chained.

use std::ffi::c_void;

use bytemuck::Zeroable;

use crate::zero_default;

/// Callback pointers invoked after each public API call, plus validation
/// error hooks.
#[repr(C)]
#[derive(Debug, Clone, Copy, Zeroable)]
pub struct SgTraceHooks {
    /// Passed back to every hook invocation.
    pub user_data: *mut c_void,
    pub reset_state_cache: *const c_void,
    pub make_buffer: *const c_void,
    pub make_image: *const c_void,
    pub make_shader: *const c_void,
    pub make_pipeline: *const c_void,
    pub make_pass: *const c_void,
    pub destroy_buffer: *const c_void,
    pub destroy_image: *const c_void,
    pub destroy_shader: *const c_void,
    pub destroy_pipeline: *const c_void,
    pub destroy_pass: *const c_void,
    pub update_buffer: *const c_void,
    pub update_image: *const c_void,
    pub append_buffer: *const c_void,
    pub begin_default_pass: *const c_void,
    pub begin_pass: *const c_void,
    pub apply_viewport: *const c_void,
    pub apply_scissor_rect: *const c_void,
    pub apply_pipeline: *const c_void,
    pub apply_bindings: *const c_void,
    pub apply_uniforms: *const c_void,
    pub draw: *const c_void,
    pub end_pass: *const c_void,
    pub commit: *const c_void,
    pub alloc_buffer: *const c_void,
    pub alloc_image: *const c_void,
    pub alloc_shader: *const c_void,
    pub alloc_pipeline: *const c_void,
    pub alloc_pass: *const c_void,
    pub init_buffer: *const c_void,
    pub init_image: *const c_void,
    pub init_shader: *const c_void,
    pub init_pipeline: *const c_void,
    pub init_pass: *const c_void,
    pub fail_buffer: *const c_void,
    pub fail_image: *const c_void,
    pub fail_shader: *const c_void,
    pub fail_pipeline: *const c_void,
    pub fail_pass: *const c_void,
    pub push_debug_group: *const c_void,
    pub pop_debug_group: *const c_void,
    pub err_buffer_pool_exhausted: *const c_void,
    pub err_image_pool_exhausted: *const c_void,
    pub err_shader_pool_exhausted: *const c_void,
    pub err_pipeline_pool_exhausted: *const c_void,
    pub err_pass_pool_exhausted: *const c_void,
    pub err_context_mismatch: *const c_void,
    pub err_pass_invalid: *const c_void,
    pub err_draw_invalid: *const c_void,
    pub err_bindings_invalid: *const c_void,
}

zero_default!(SgTraceHooks);
