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

//! Opaque resource handles.
//!
//! Each handle is a single `u32` id passed by value across the native
//! boundary; id 0 ([`SG_INVALID_ID`]) never names a live resource.

use bytemuck::{Pod, Zeroable};

use crate::consts::SG_INVALID_ID;

macro_rules! handle_type {
    ($(#[$doc:meta] $name:ident),* $(,)?) => {
        $(
            #[$doc]
            #[repr(C)]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
            pub struct $name {
                pub id: u32,
            }

            impl $name {
                /// Wraps a raw resource id.
                #[inline]
                pub const fn new(id: u32) -> Self {
                    Self { id }
                }

                /// True unless this is the invalid (zero) id.
                #[inline]
                pub const fn is_valid(self) -> bool {
                    self.id != SG_INVALID_ID
                }
            }
        )*
    };
}

handle_type!(
    /// Vertex or index buffer handle.
    SgBuffer,
    /// Texture image handle.
    SgImage,
    /// Shader program handle.
    SgShader,
    /// Render pipeline state handle.
    SgPipeline,
    /// Offscreen render pass handle.
    SgPass,
    /// Per-window context handle.
    SgContext,
);
