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

//! Runtime resource introspection results (`sg_query_*_info`).

use bytemuck::Zeroable;

use crate::blittable::Bool8;
use crate::enums::SgResourceState;
use crate::zero_default;

/// State of one resource pool slot.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Zeroable)]
pub struct SgSlotInfo {
    pub state: SgResourceState,
    pub res_id: u32,
    pub ctx_id: u32,
}

/// Runtime details of a buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Zeroable)]
pub struct SgBufferInfo {
    pub slot: SgSlotInfo,
    pub update_frame_index: u32,
    pub append_frame_index: u32,
    pub append_pos: i32,
    pub append_overflow: Bool8,
    pub num_slots: i32,
    pub active_slot: i32,
}

/// Runtime details of an image.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Zeroable)]
pub struct SgImageInfo {
    pub slot: SgSlotInfo,
    pub upd_frame_index: u32,
    pub num_slots: i32,
    pub active_slot: i32,
}

/// Runtime details of a shader.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Zeroable)]
pub struct SgShaderInfo {
    pub slot: SgSlotInfo,
}

/// Runtime details of a pipeline.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Zeroable)]
pub struct SgPipelineInfo {
    pub slot: SgSlotInfo,
}

/// Runtime details of a pass.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Zeroable)]
pub struct SgPassInfo {
    pub slot: SgSlotInfo,
}

zero_default!(
    SgSlotInfo,
    SgBufferInfo,
    SgImageInfo,
    SgShaderInfo,
    SgPipelineInfo,
    SgPassInfo,
);
