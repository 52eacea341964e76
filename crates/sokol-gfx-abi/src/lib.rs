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

//! # sokol-gfx-abi
//!
//! Byte-exact mirrors of the `sokol_gfx` C structs, enums and constants.
//!
//! Every struct in this crate is a compatibility contract with the compiled
//! native headers: its total size and every field offset must match what the
//! native compiler produced, or values exchanged across the call boundary are
//! silently corrupted. All layouts assume 64-bit pointers; the loader crate
//! refuses to bind on anything else. Each module carries layout tests that
//! pin `size_of` and `offset_of` to the documented constants.
//!
//! Values are exchanged by raw memory layout, never serialized, so a
//! size/offset mismatch here is a wire-format break in all but name.

pub mod action;
pub mod array;
pub mod bindings;
pub mod blittable;
pub mod buffer;
pub mod caps;
pub mod consts;
pub mod desc;
pub mod enums;
pub mod handles;
pub mod image;
pub mod info;
pub mod pass;
pub mod pipeline;
pub mod shader;
pub mod trace;

pub use action::{
    SgColorAttachmentAction, SgDepthAttachmentAction, SgPassAction, SgStencilAttachmentAction,
};
pub use array::PackedArray;
pub use bindings::SgBindings;
pub use blittable::{AsciiStr, AsciiStr16, Bool8};
pub use buffer::SgBufferDesc;
pub use caps::{SgFeatures, SgLimits, SgPixelformatInfo};
pub use consts::*;
pub use desc::{
    SgContextDesc, SgD3d11ContextDesc, SgDesc, SgGlContextDesc, SgMtlContextDesc,
    SgWgpuContextDesc,
};
pub use enums::*;
pub use handles::{SgBuffer, SgContext, SgImage, SgPass, SgPipeline, SgShader};
pub use image::{SgImageContent, SgImageDesc, SgImageExtent, SgSubimageContent};
pub use info::{
    SgBufferInfo, SgImageInfo, SgPassInfo, SgPipelineInfo, SgShaderInfo, SgSlotInfo,
};
pub use pass::{SgAttachmentDesc, SgAttachmentSlice, SgPassDesc};
pub use pipeline::{
    SgBlendState, SgBufferLayoutDesc, SgDepthStencilState, SgLayoutDesc, SgPipelineDesc,
    SgRasterizerState, SgStencilState, SgVertexAttrDesc,
};
pub use shader::{
    SgShaderAttrDesc, SgShaderDesc, SgShaderImageDesc, SgShaderStageDesc,
    SgShaderUniformBlockDesc, SgShaderUniformDesc,
};
pub use trace::SgTraceHooks;

/// Implements `Default` as the all-zeroes value.
///
/// The native API requires descriptor structs to be zero-initialized before
/// selectively filling fields; zero is a valid state for every mirror here
/// (enums have a zero variant, pointers are null).
macro_rules! zero_default {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Default for $ty {
                fn default() -> Self {
                    bytemuck::Zeroable::zeroed()
                }
            }
        )*
    };
}
pub(crate) use zero_default;
