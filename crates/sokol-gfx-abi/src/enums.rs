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

//! Enum mirrors of the native `sg_*` enums.
//!
//! All mirrors are `#[repr(u32)]` with the native discriminants spelled out.
//! The native `_NUM` / `_FORCE_U32` sentinels are omitted: they only exist
//! to pin the C enum width, which `repr(u32)` already guarantees. Every
//! enum used inside a descriptor struct has a variant with discriminant 0,
//! so the zero-initialized descriptor idiom stays valid.

use bytemuck::Zeroable;

/// Marks an enum as safely zero-initializable.
///
/// Requires a variant with discriminant 0 (the native `_DEFAULT` /
/// `INVALID` / first variant); every enum below has one.
macro_rules! zeroable_enum {
    ($($ty:ty),* $(,)?) => {
        $(
            unsafe impl Zeroable for $ty {}
        )*
    };
}

/// What to do with a render target at the start of a pass.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SgAction {
    #[default]
    Default = 0,
    Clear = 1,
    Load = 2,
    DontCare = 3,
}

/// The rendering backend the native library was compiled for.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SgBackend {
    #[default]
    Glcore33 = 0,
    Gles2 = 1,
    Gles3 = 2,
    D3d11 = 3,
    MetalIos = 4,
    MetalMacos = 5,
    MetalSimulator = 6,
    Wgpu = 7,
    Dummy = 8,
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SgBlendFactor {
    #[default]
    Default = 0,
    Zero = 1,
    One = 2,
    SrcColor = 3,
    OneMinusSrcColor = 4,
    SrcAlpha = 5,
    OneMinusSrcAlpha = 6,
    DstColor = 7,
    OneMinusDstColor = 8,
    DstAlpha = 9,
    OneMinusDstAlpha = 10,
    SrcAlphaSaturated = 11,
    BlendColor = 12,
    OneMinusBlendColor = 13,
    BlendAlpha = 14,
    OneMinusBlendAlpha = 15,
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SgBlendOp {
    #[default]
    Default = 0,
    Add = 1,
    Subtract = 2,
    ReverseSubtract = 3,
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SgBorderColor {
    #[default]
    Default = 0,
    TransparentBlack = 1,
    OpaqueBlack = 2,
    OpaqueWhite = 3,
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SgBufferType {
    #[default]
    Default = 0,
    VertexBuffer = 1,
    IndexBuffer = 2,
}

/// Color channel write mask bits.
///
/// The discriminants are a bit mask, not a sequence; `sg_blend_state`
/// stores the mask as a single byte.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SgColorMask {
    #[default]
    Default = 0,
    R = 1,
    G = 2,
    B = 4,
    Rgb = 7,
    A = 8,
    Rgba = 15,
    None = 16,
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SgCompareFunc {
    #[default]
    Default = 0,
    Never = 1,
    Less = 2,
    Equal = 3,
    LessEqual = 4,
    Greater = 5,
    NotEqual = 6,
    GreaterEqual = 7,
    Always = 8,
}

/// Cube map face index; also the outer index of the subimage table.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SgCubeFace {
    #[default]
    PosX = 0,
    NegX = 1,
    PosY = 2,
    NegY = 3,
    PosZ = 4,
    NegZ = 5,
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SgCullMode {
    #[default]
    Default = 0,
    None = 1,
    Front = 2,
    Back = 3,
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SgFaceWinding {
    #[default]
    Default = 0,
    Ccw = 1,
    Cw = 2,
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SgFilter {
    #[default]
    Default = 0,
    Nearest = 1,
    Linear = 2,
    NearestMipmapNearest = 3,
    NearestMipmapLinear = 4,
    LinearMipmapNearest = 5,
    LinearMipmapLinear = 6,
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SgImageType {
    #[default]
    Default = 0,
    Texture2d = 1,
    Cube = 2,
    Texture3d = 3,
    Array = 4,
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SgIndexType {
    #[default]
    Default = 0,
    None = 1,
    Uint16 = 2,
    Uint32 = 3,
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SgPixelFormat {
    #[default]
    Default = 0,
    None = 1,
    R8 = 2,
    R8sn = 3,
    R8ui = 4,
    R8si = 5,
    R16 = 6,
    R16sn = 7,
    R16ui = 8,
    R16si = 9,
    R16f = 10,
    Rg8 = 11,
    Rg8sn = 12,
    Rg8ui = 13,
    Rg8si = 14,
    R32ui = 15,
    R32si = 16,
    R32f = 17,
    Rg16 = 18,
    Rg16sn = 19,
    Rg16ui = 20,
    Rg16si = 21,
    Rg16f = 22,
    Rgba8 = 23,
    Rgba8sn = 24,
    Rgba8ui = 25,
    Rgba8si = 26,
    Bgra8 = 27,
    Rgb10a2 = 28,
    Rg11b10f = 29,
    Rg32ui = 30,
    Rg32si = 31,
    Rg32f = 32,
    Rgba16 = 33,
    Rgba16sn = 34,
    Rgba16ui = 35,
    Rgba16si = 36,
    Rgba16f = 37,
    Rgba32ui = 38,
    Rgba32si = 39,
    Rgba32f = 40,
    Depth = 41,
    DepthStencil = 42,
    Bc1Rgba = 43,
    Bc2Rgba = 44,
    Bc3Rgba = 45,
    Bc4R = 46,
    Bc4Rsn = 47,
    Bc5Rg = 48,
    Bc5Rgsn = 49,
    Bc6hRgbf = 50,
    Bc6hRgbuf = 51,
    Bc7Rgba = 52,
    PvrtcRgb2bpp = 53,
    PvrtcRgb4bpp = 54,
    PvrtcRgba2bpp = 55,
    PvrtcRgba4bpp = 56,
    Etc2Rgb8 = 57,
    Etc2Rgb8a1 = 58,
    Etc2Rgba8 = 59,
    Etc2Rg11 = 60,
    Etc2Rg11sn = 61,
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SgPrimitiveType {
    #[default]
    Default = 0,
    Points = 1,
    Lines = 2,
    LineStrip = 3,
    Triangles = 4,
    TriangleStrip = 5,
}

/// Lifecycle state of a resource slot.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SgResourceState {
    #[default]
    Initial = 0,
    Alloc = 1,
    Valid = 2,
    Failed = 3,
    Invalid = 4,
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SgSamplerType {
    #[default]
    Default = 0,
    Float = 1,
    Sint = 2,
    Uint = 3,
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SgShaderStage {
    #[default]
    Vs = 0,
    Fs = 1,
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SgStencilOp {
    #[default]
    Default = 0,
    Keep = 1,
    Zero = 2,
    Replace = 3,
    IncrClamp = 4,
    DecrClamp = 5,
    Invert = 6,
    IncrWrap = 7,
    DecrWrap = 8,
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SgUniformType {
    #[default]
    Invalid = 0,
    Float = 1,
    Float2 = 2,
    Float3 = 3,
    Float4 = 4,
    Mat4 = 5,
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SgUsage {
    #[default]
    Default = 0,
    Immutable = 1,
    Dynamic = 2,
    Stream = 3,
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SgVertexFormat {
    #[default]
    Invalid = 0,
    Float = 1,
    Float2 = 2,
    Float3 = 3,
    Float4 = 4,
    Byte4 = 5,
    Byte4n = 6,
    Ubyte4 = 7,
    Ubyte4n = 8,
    Short2 = 9,
    Short2n = 10,
    Ushort2n = 11,
    Short4 = 12,
    Short4n = 13,
    Ushort4n = 14,
    Uint10N2 = 15,
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SgVertexStep {
    #[default]
    Default = 0,
    PerVertex = 1,
    PerInstance = 2,
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SgWrap {
    #[default]
    Default = 0,
    Repeat = 1,
    ClampToEdge = 2,
    ClampToBorder = 3,
    MirroredRepeat = 4,
}

zeroable_enum!(
    SgAction,
    SgBackend,
    SgBlendFactor,
    SgBlendOp,
    SgBorderColor,
    SgBufferType,
    SgColorMask,
    SgCompareFunc,
    SgCubeFace,
    SgCullMode,
    SgFaceWinding,
    SgFilter,
    SgImageType,
    SgIndexType,
    SgPixelFormat,
    SgPrimitiveType,
    SgResourceState,
    SgSamplerType,
    SgShaderStage,
    SgStencilOp,
    SgUniformType,
    SgUsage,
    SgVertexFormat,
    SgVertexStep,
    SgWrap,
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn mirrors_are_four_bytes() {
        assert_eq!(size_of::<SgAction>(), 4);
        assert_eq!(size_of::<SgBackend>(), 4);
        assert_eq!(size_of::<SgPixelFormat>(), 4);
        assert_eq!(size_of::<SgVertexFormat>(), 4);
    }

    #[test]
    fn discriminants_match_native_values() {
        assert_eq!(SgAction::DontCare as u32, 3);
        assert_eq!(SgBackend::Dummy as u32, 8);
        assert_eq!(SgBlendFactor::OneMinusBlendAlpha as u32, 15);
        assert_eq!(SgColorMask::None as u32, 16);
        assert_eq!(SgColorMask::Rgba as u32, 15);
        assert_eq!(SgCubeFace::NegZ as u32, 5);
        assert_eq!(SgPixelFormat::Etc2Rg11sn as u32, 61);
        assert_eq!(SgResourceState::Invalid as u32, 4);
        assert_eq!(SgUniformType::Mat4 as u32, 5);
        assert_eq!(SgVertexFormat::Uint10N2 as u32, 15);
        assert_eq!(SgWrap::MirroredRepeat as u32, 4);
    }

    #[test]
    fn zeroed_enums_hit_the_zero_variant() {
        assert_eq!(SgAction::zeroed(), SgAction::Default);
        assert_eq!(SgResourceState::zeroed(), SgResourceState::Initial);
        assert_eq!(SgUniformType::zeroed(), SgUniformType::Invalid);
    }
}
