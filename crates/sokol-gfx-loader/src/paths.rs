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

//! Shared library path resolution.
//!
//! A library variant is identified by a logical name plus a backend token
//! and dressed with the platform prefix and extension, e.g.
//! `libsokol_gfx-opengl.so` / `sokol_gfx-d3d11.dll`. Candidates are probed
//! in a fixed order and the first existing file wins; there is no fallback
//! to another backend.

use std::path::{Path, PathBuf};

use crate::error::LoadError;
use crate::platform::{runtime_identifier, GraphicsBackend, Platform};

/// Composes the platform file name for a library variant:
/// `<prefix><logical_name>-<token>.<ext>`.
pub fn library_file_name(
    platform: Platform,
    logical_name: &str,
    backend: GraphicsBackend,
) -> String {
    format!(
        "{}{}-{}.{}",
        platform.library_prefix(),
        logical_name,
        backend.token(),
        platform.library_extension()
    )
}

/// Resolves the library path for `backend`, probing in order:
/// working directory, executable directory, then
/// `runtimes/<rid>/native/` under the working directory.
pub fn resolve_library_path(
    logical_name: &str,
    backend: GraphicsBackend,
) -> Result<PathBuf, LoadError> {
    let platform = Platform::current();
    if platform == Platform::Unknown {
        return Err(LoadError::UnsupportedPlatform);
    }
    let file_name = library_file_name(platform, logical_name, backend);

    let cwd = std::env::current_dir().ok();
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));

    let mut dirs = Vec::with_capacity(3);
    if let Some(cwd) = &cwd {
        dirs.push(cwd.clone());
    }
    if let Some(exe_dir) = exe_dir {
        dirs.push(exe_dir);
    }
    if let Some(cwd) = cwd {
        dirs.push(
            cwd.join("runtimes")
                .join(runtime_identifier())
                .join("native"),
        );
    }

    match search(&dirs, &file_name) {
        Some(path) => {
            log::debug!("resolved native library {} at {}", file_name, path.display());
            Ok(path)
        }
        None => Err(LoadError::LibraryNotFound {
            backend,
            file_name,
            searched: dirs,
        }),
    }
}

/// Returns the first `dir/file_name` that exists, in `dirs` order.
fn search(dirs: &[PathBuf], file_name: &str) -> Option<PathBuf> {
    for dir in dirs {
        let candidate = dir.join(file_name);
        log::debug!("probing {}", candidate.display());
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "sokol-gfx-loader-{}-{}",
            tag,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn file_name_composition_per_platform() {
        assert_eq!(
            library_file_name(Platform::Linux, "sokol_gfx", GraphicsBackend::OpenGl),
            "libsokol_gfx-opengl.so"
        );
        assert_eq!(
            library_file_name(Platform::MacOs, "sokol_gfx", GraphicsBackend::Metal),
            "libsokol_gfx-metal.dylib"
        );
        assert_eq!(
            library_file_name(Platform::Windows, "sokol_gfx", GraphicsBackend::D3d11),
            "sokol_gfx-d3d11.dll"
        );
        assert_eq!(
            library_file_name(Platform::Linux, "sokol_gfx", GraphicsBackend::Dummy),
            "libsokol_gfx-dummy.so"
        );
    }

    #[test]
    fn earlier_directory_wins() {
        let first = temp_dir("first");
        let second = temp_dir("second");
        fs::write(first.join("libx-dummy.so"), b"").unwrap();
        fs::write(second.join("libx-dummy.so"), b"").unwrap();

        let found = search(&[first.clone(), second.clone()], "libx-dummy.so").unwrap();
        assert_eq!(found, first.join("libx-dummy.so"));

        let _ = fs::remove_dir_all(first);
        let _ = fs::remove_dir_all(second);
    }

    #[test]
    fn later_directory_used_when_earlier_is_empty() {
        let first = temp_dir("empty");
        let second = temp_dir("filled");
        fs::write(second.join("liby-dummy.so"), b"").unwrap();

        let found = search(&[first.clone(), second.clone()], "liby-dummy.so").unwrap();
        assert_eq!(found, second.join("liby-dummy.so"));

        let _ = fs::remove_dir_all(first);
        let _ = fs::remove_dir_all(second);
    }

    #[test]
    fn missing_everywhere_is_none() {
        let only = temp_dir("none");
        assert!(search(&[only.clone()], "libz-dummy.so").is_none());
        let _ = fs::remove_dir_all(only);
    }

    #[test]
    fn resolve_reports_backend_and_candidates() {
        match resolve_library_path("surely_not_here", GraphicsBackend::Dummy) {
            Err(LoadError::LibraryNotFound {
                backend,
                file_name,
                searched,
            }) => {
                assert_eq!(backend, GraphicsBackend::Dummy);
                assert!(file_name.contains("surely_not_here-dummy"));
                assert!(!searched.is_empty());
            }
            other => panic!("expected LibraryNotFound, got {other:?}"),
        }
    }
}
