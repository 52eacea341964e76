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

//! Capability query results (`sg_query_features` and friends).

use bytemuck::{Pod, Zeroable};

use crate::blittable::Bool8;

/// Per-pixel-format capability flags, returned by value.
///
/// Six one-byte flags, no padding.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct SgPixelformatInfo {
    pub sample: Bool8,
    pub filter: Bool8,
    pub render: Bool8,
    pub blend: Bool8,
    pub msaa: Bool8,
    pub depth: Bool8,
}

/// Optional-feature flags of the active backend.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct SgFeatures {
    pub instancing: Bool8,
    pub origin_top_left: Bool8,
    pub multiple_render_targets: Bool8,
    pub msaa_render_targets: Bool8,
    pub imagetype_3d: Bool8,
    pub imagetype_array: Bool8,
    pub image_clamp_to_border: Bool8,
}

/// Runtime limits of the active backend.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct SgLimits {
    pub max_image_size_2d: u32,
    pub max_image_size_cube: u32,
    pub max_image_size_3d: u32,
    pub max_image_size_array: u32,
    pub max_image_array_layers: u32,
    pub max_vertex_attrs: u32,
}
