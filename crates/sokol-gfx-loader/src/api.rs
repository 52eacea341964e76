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

//! The typed function table over the native library.
//!
//! [`GraphicsApi`] owns the opened library and one typed function pointer
//! per exported `sg_*` call. The symbol list is closed and declared once in
//! the [`graphics_api!`] macro invocation below, which generates the struct
//! fields, the symbol-name array and the binder together so the three can
//! never drift apart. Binding is all-or-nothing: the first unresolvable
//! symbol aborts the load, the library handle closes on the way out, and no
//! partially-bound table is ever observable.
//!
//! Dropping the table (or calling the consuming [`GraphicsApi::unload`])
//! closes the handle, so use-after-unload and double-unload are
//! type-level impossibilities. Loading twice yields two independent tables
//! over two opened handles; the OS loader reference-counts the underlying
//! mapping.

use std::ffi::{c_char, c_void};
use std::fmt;
use std::mem;
use std::path::Path;

use sokol_gfx_abi::{
    Bool8, SgBackend, SgBindings, SgBuffer, SgBufferDesc, SgBufferInfo, SgContext, SgDesc,
    SgFeatures, SgImage, SgImageContent, SgImageDesc, SgImageInfo, SgLimits, SgPass,
    SgPassAction, SgPassDesc, SgPassInfo, SgPipeline, SgPipelineDesc, SgPipelineInfo,
    SgPixelFormat, SgPixelformatInfo, SgResourceState, SgShader, SgShaderDesc, SgShaderInfo,
    SgShaderStage, SgTraceHooks,
};

use crate::dylib::Library;
use crate::error::LoadError;
use crate::paths::resolve_library_path;
use crate::platform::{ensure_64_bit, GraphicsBackend, Platform};

/// Logical library name; dressed per platform and backend by the path
/// resolver (e.g. `libsokol_gfx-opengl.so`).
pub const SOKOL_GFX_LOGICAL_NAME: &str = "sokol_gfx";

macro_rules! graphics_api {
    (
        $(
            fn $name:ident($($arg:ident: $arg_ty:ty),* $(,)?) $(-> $ret:ty)?;
        )+
    ) => {
        /// Typed function table of the native `sokol_gfx` exports.
        ///
        /// Every field is bound, or the table does not exist. Calls are
        /// `unsafe`: the caller upholds the native library's own
        /// preconditions (`sg_setup` before resource calls, valid pointers,
        /// single-threaded use).
        pub struct GraphicsApi {
            lib: Library,
            $(
                pub $name: unsafe extern "C" fn($($arg_ty),*) $(-> $ret)?,
            )+
        }

        /// Every symbol the binder resolves, in binding order.
        pub const SYMBOL_NAMES: &[&str] = &[$(stringify!($name)),+];

        impl GraphicsApi {
            /// Resolves all symbols from an opened library. On the first
            /// failure the error propagates and `lib` drops, closing the
            /// handle.
            fn bind(lib: Library) -> Result<Self, LoadError> {
                Ok(Self {
                    $(
                        $name: unsafe {
                            mem::transmute::<
                                *mut c_void,
                                unsafe extern "C" fn($($arg_ty),*) $(-> $ret)?,
                            >(lib.symbol(stringify!($name))?)
                        },
                    )+
                    lib,
                })
            }
        }
    };
}

graphics_api! {
    fn sg_setup(desc: *const SgDesc);
    fn sg_shutdown();
    fn sg_isvalid() -> Bool8;
    fn sg_reset_state_cache();
    fn sg_install_trace_hooks(trace_hooks: *const SgTraceHooks) -> SgTraceHooks;
    fn sg_push_debug_group(name: *const c_char);
    fn sg_pop_debug_group(name: *const c_char);
    fn sg_make_buffer(desc: *const SgBufferDesc) -> SgBuffer;
    fn sg_make_image(desc: *const SgImageDesc) -> SgImage;
    fn sg_make_shader(desc: *const SgShaderDesc) -> SgShader;
    fn sg_make_pipeline(desc: *const SgPipelineDesc) -> SgPipeline;
    fn sg_make_pass(desc: *const SgPassDesc) -> SgPass;
    fn sg_destroy_buffer(buf: SgBuffer);
    fn sg_destroy_image(img: SgImage);
    fn sg_destroy_shader(shd: SgShader);
    fn sg_destroy_pipeline(pip: SgPipeline);
    fn sg_destroy_pass(pass: SgPass);
    fn sg_update_buffer(buf: SgBuffer, data_ptr: *const c_void, data_size: i32);
    fn sg_update_image(img: SgImage, data: *const SgImageContent);
    fn sg_append_buffer(buf: SgBuffer, data_ptr: *const c_void, data_size: i32) -> i32;
    fn sg_query_buffer_overflow(buf: SgBuffer) -> Bool8;
    fn sg_begin_default_pass(pass_action: *const SgPassAction, width: i32, height: i32);
    fn sg_begin_pass(pass: SgPass, pass_action: *const SgPassAction);
    fn sg_apply_viewport(x: i32, y: i32, width: i32, height: i32, origin_top_left: Bool8);
    fn sg_apply_scissor_rect(x: i32, y: i32, width: i32, height: i32, origin_top_left: Bool8);
    fn sg_apply_pipeline(pip: SgPipeline);
    fn sg_apply_bindings(bindings: *const SgBindings);
    fn sg_apply_uniforms(stage: SgShaderStage, ub_index: i32, data: *const c_void, num_bytes: i32);
    fn sg_draw(base_element: i32, num_elements: i32, num_instances: i32);
    fn sg_end_pass();
    fn sg_commit();
    fn sg_query_desc() -> SgDesc;
    fn sg_query_backend() -> SgBackend;
    fn sg_query_features() -> SgFeatures;
    fn sg_query_limits() -> SgLimits;
    fn sg_query_pixelformat(fmt: SgPixelFormat) -> SgPixelformatInfo;
    fn sg_query_buffer_state(buf: SgBuffer) -> SgResourceState;
    fn sg_query_image_state(img: SgImage) -> SgResourceState;
    fn sg_query_shader_state(shd: SgShader) -> SgResourceState;
    fn sg_query_pipeline_state(pip: SgPipeline) -> SgResourceState;
    fn sg_query_pass_state(pass: SgPass) -> SgResourceState;
    fn sg_query_buffer_info(buf: SgBuffer) -> SgBufferInfo;
    fn sg_query_image_info(img: SgImage) -> SgImageInfo;
    fn sg_query_shader_info(shd: SgShader) -> SgShaderInfo;
    fn sg_query_pipeline_info(pip: SgPipeline) -> SgPipelineInfo;
    fn sg_query_pass_info(pass: SgPass) -> SgPassInfo;
    fn sg_query_buffer_defaults(desc: *const SgBufferDesc) -> SgBufferDesc;
    fn sg_query_image_defaults(desc: *const SgImageDesc) -> SgImageDesc;
    fn sg_query_shader_defaults(desc: *const SgShaderDesc) -> SgShaderDesc;
    fn sg_query_pipeline_defaults(desc: *const SgPipelineDesc) -> SgPipelineDesc;
    fn sg_query_pass_defaults(desc: *const SgPassDesc) -> SgPassDesc;
    fn sg_alloc_buffer() -> SgBuffer;
    fn sg_alloc_image() -> SgImage;
    fn sg_alloc_shader() -> SgShader;
    fn sg_alloc_pipeline() -> SgPipeline;
    fn sg_alloc_pass() -> SgPass;
    fn sg_init_buffer(buf_id: SgBuffer, desc: *const SgBufferDesc);
    fn sg_init_image(img_id: SgImage, desc: *const SgImageDesc);
    fn sg_init_shader(shd_id: SgShader, desc: *const SgShaderDesc);
    fn sg_init_pipeline(pip_id: SgPipeline, desc: *const SgPipelineDesc);
    fn sg_init_pass(pass_id: SgPass, desc: *const SgPassDesc);
    fn sg_fail_buffer(buf_id: SgBuffer);
    fn sg_fail_image(img_id: SgImage);
    fn sg_fail_shader(shd_id: SgShader);
    fn sg_fail_pipeline(pip_id: SgPipeline);
    fn sg_fail_pass(pass_id: SgPass);
    fn sg_setup_context() -> SgContext;
    fn sg_activate_context(ctx_id: SgContext);
    fn sg_discard_context(ctx_id: SgContext);
}

impl GraphicsApi {
    /// Opens the library at `path` and binds the full symbol table.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        ensure_64_bit()?;
        let lib = Library::open(path)?;
        let api = Self::bind(lib)?;
        log::info!(
            "bound {} sokol_gfx symbols from {}",
            SYMBOL_NAMES.len(),
            api.lib.path().display()
        );
        Ok(api)
    }

    /// Resolves the library variant for `backend` on the current platform
    /// and loads it.
    pub fn load_backend(backend: GraphicsBackend) -> Result<Self, LoadError> {
        let path = resolve_library_path(SOKOL_GFX_LOGICAL_NAME, backend)?;
        Self::load(&path)
    }

    /// Loads the platform's default backend variant (D3D11 on Windows,
    /// Metal on macOS, OpenGL on Linux).
    pub fn load_default() -> Result<Self, LoadError> {
        let backend = Platform::current()
            .default_backend()
            .ok_or(LoadError::UnsupportedPlatform)?;
        Self::load_backend(backend)
    }

    /// The path the table was bound from.
    pub fn library_path(&self) -> &Path {
        self.lib.path()
    }

    /// Closes the library. Equivalent to dropping the value; the explicit
    /// form reads better at call sites that unload deliberately.
    pub fn unload(self) {}
}

impl fmt::Debug for GraphicsApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphicsApi")
            .field("library", &self.lib.path())
            .field("symbols", &SYMBOL_NAMES.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::path::PathBuf;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn symbol_list_is_closed_and_well_formed() {
        assert_eq!(SYMBOL_NAMES.len(), 69);
        let unique: HashSet<_> = SYMBOL_NAMES.iter().collect();
        assert_eq!(unique.len(), SYMBOL_NAMES.len(), "duplicate symbol name");
        for name in SYMBOL_NAMES {
            assert!(name.starts_with("sg_"), "unexpected symbol {name}");
        }
    }

    #[test]
    fn load_from_garbage_path_fails_without_a_table() {
        init_logging();
        let path = PathBuf::from("/this/path/does/not/exist/libsokol_gfx-dummy.so");
        match GraphicsApi::load(&path) {
            Err(LoadError::OpenFailed { path: reported }) => assert_eq!(reported, path),
            other => panic!("expected OpenFailed, got {other:?}"),
        }
    }

    #[test]
    fn load_backend_fails_when_no_variant_is_present() {
        init_logging();
        // No dummy-backend library ships with the test environment.
        match GraphicsApi::load_backend(GraphicsBackend::Dummy) {
            Err(LoadError::LibraryNotFound {
                backend, file_name, ..
            }) => {
                assert_eq!(backend, GraphicsBackend::Dummy);
                assert!(file_name.contains("sokol_gfx-dummy"));
            }
            Err(other) => panic!("expected LibraryNotFound, got {other}"),
            Ok(_) => panic!("expected LibraryNotFound, got a bound table"),
        }
    }
}
