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

//! Pass action descriptors (what happens to attachments at pass start).

use bytemuck::Zeroable;

use crate::array::PackedArray;
use crate::consts::SG_MAX_COLOR_ATTACHMENTS;
use crate::enums::SgAction;
use crate::zero_default;

/// Action and clear value for one color attachment.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Zeroable)]
pub struct SgColorAttachmentAction {
    pub action: SgAction,
    /// RGBA clear color.
    pub val: [f32; 4],
}

/// Action and clear value for the depth attachment.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Zeroable)]
pub struct SgDepthAttachmentAction {
    pub action: SgAction,
    pub val: f32,
}

/// Action and clear value for the stencil attachment.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Zeroable)]
pub struct SgStencilAttachmentAction {
    pub action: SgAction,
    pub val: u8,
}

/// Full set of attachment actions for `sg_begin_pass` /
/// `sg_begin_default_pass`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Zeroable)]
pub struct SgPassAction {
    pub _start_canary: u32,
    pub colors: PackedArray<SgColorAttachmentAction, SG_MAX_COLOR_ATTACHMENTS>,
    pub depth: SgDepthAttachmentAction,
    pub stencil: SgStencilAttachmentAction,
    pub _end_canary: u32,
}

zero_default!(
    SgColorAttachmentAction,
    SgDepthAttachmentAction,
    SgStencilAttachmentAction,
    SgPassAction,
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    #[test]
    fn attachment_action_layouts() {
        assert_eq!(size_of::<SgColorAttachmentAction>(), 20);
        assert_eq!(offset_of!(SgColorAttachmentAction, val), 4);
        assert_eq!(size_of::<SgDepthAttachmentAction>(), 8);
        assert_eq!(size_of::<SgStencilAttachmentAction>(), 8);
        assert_eq!(offset_of!(SgStencilAttachmentAction, val), 4);
    }

    #[test]
    fn pass_action_layout() {
        assert_eq!(size_of::<SgPassAction>(), 104);
        assert_eq!(offset_of!(SgPassAction, colors), 4);
        assert_eq!(offset_of!(SgPassAction, depth), 84);
        assert_eq!(offset_of!(SgPassAction, stencil), 92);
        assert_eq!(offset_of!(SgPassAction, _end_canary), 100);
    }

    #[test]
    fn default_is_all_zero_actions() {
        let action = SgPassAction::default();
        assert_eq!(action.colors[0].action, SgAction::Default);
        assert_eq!(action.depth.action, SgAction::Default);
        assert_eq!(action.stencil.val, 0);
    }
}
