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

//! # sokol-gfx-loader
//!
//! Locates, opens and binds the native `sokol_gfx` shared library at
//! runtime, exposing it as a caller-owned typed function table
//! ([`GraphicsApi`]).
//!
//! ```no_run
//! use sokol_gfx_loader::GraphicsApi;
//!
//! let gfx = GraphicsApi::load_default()?;
//! let desc = sokol_gfx_abi::SgDesc::default();
//! unsafe { (gfx.sg_setup)(&desc) };
//! // ... render ...
//! unsafe { (gfx.sg_shutdown)() };
//! gfx.unload();
//! # Ok::<(), sokol_gfx_loader::LoadError>(())
//! ```
//!
//! Nothing here is thread-safe by design: the native library itself is
//! single-threaded, and the `GraphicsApi` value belongs to whichever
//! thread created it.

pub mod api;
pub mod dylib;
pub mod error;
pub mod paths;
pub mod platform;

pub use api::{GraphicsApi, SOKOL_GFX_LOGICAL_NAME, SYMBOL_NAMES};
pub use dylib::Library;
pub use error::LoadError;
pub use paths::{library_file_name, resolve_library_path};
pub use platform::{runtime_identifier, GraphicsBackend, Platform};
