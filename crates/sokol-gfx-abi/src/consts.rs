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

//! Limit constants from the native headers.
//!
//! These values size the inline arrays inside the descriptor structs, so
//! changing any of them is an ABI break.

/// Resource id value that never names a live resource.
pub const SG_INVALID_ID: u32 = 0;

/// Number of shader stages (vertex + fragment).
pub const SG_NUM_SHADER_STAGES: usize = 2;
/// Frames that can be in flight at once.
pub const SG_NUM_INFLIGHT_FRAMES: usize = 2;
/// Color attachments per pass.
pub const SG_MAX_COLOR_ATTACHMENTS: usize = 4;
/// Vertex buffer bind slots per shader stage.
pub const SG_MAX_SHADERSTAGE_BUFFERS: usize = 8;
/// Image bind slots per shader stage.
pub const SG_MAX_SHADERSTAGE_IMAGES: usize = 12;
/// Uniform blocks per shader stage.
pub const SG_MAX_SHADERSTAGE_UBS: usize = 4;
/// Members per uniform block.
pub const SG_MAX_UB_MEMBERS: usize = 16;
/// Vertex attributes per pipeline layout.
pub const SG_MAX_VERTEX_ATTRIBUTES: usize = 16;
/// Mipmap levels per image.
pub const SG_MAX_MIPMAPS: usize = 16;
/// Layers per array texture.
pub const SG_MAX_TEXTUREARRAY_LAYERS: usize = 128;

/// Faces of a cube map; outer dimension of the subimage content table.
pub const SG_CUBEFACE_NUM: usize = 6;
