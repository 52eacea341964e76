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

//! Errors raised while locating, opening and binding the native library.

use std::fmt;
use std::path::PathBuf;

use crate::platform::GraphicsBackend;

/// Why a load attempt failed. Every variant is fatal for that attempt;
/// nothing is retried and no partial function table survives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The host OS is not one the native library ships for.
    UnsupportedPlatform,
    /// The process is not 64-bit; all struct layouts assume 64-bit
    /// pointers.
    UnsupportedArchitecture,
    /// No shared library variant was found for the requested backend.
    LibraryNotFound {
        backend: GraphicsBackend,
        file_name: String,
        searched: Vec<PathBuf>,
    },
    /// The OS loader refused to open the library file.
    OpenFailed { path: PathBuf },
    /// A required symbol was missing from the opened library.
    MissingSymbol { name: &'static str },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::UnsupportedPlatform => {
                write!(f, "Unsupported platform: no native sokol_gfx library variant exists for this operating system")
            }
            LoadError::UnsupportedArchitecture => {
                write!(f, "Unsupported architecture: sokol_gfx requires a 64-bit process")
            }
            LoadError::LibraryNotFound {
                backend,
                file_name,
                searched,
            } => {
                write!(
                    f,
                    "Native library '{}' for backend {} not found (searched: ",
                    file_name, backend
                )?;
                for (i, path) in searched.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", path.display())?;
                }
                write!(f, ")")
            }
            LoadError::OpenFailed { path } => {
                write!(f, "Failed to open native library '{}'", path.display())
            }
            LoadError::MissingSymbol { name } => {
                write!(f, "Required symbol '{}' not found in native library", name)
            }
        }
    }
}

impl std::error::Error for LoadError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unsupported_architecture() {
        assert_eq!(
            LoadError::UnsupportedArchitecture.to_string(),
            "Unsupported architecture: sokol_gfx requires a 64-bit process"
        );
    }

    #[test]
    fn display_library_not_found_lists_candidates() {
        let err = LoadError::LibraryNotFound {
            backend: GraphicsBackend::OpenGl,
            file_name: "libsokol_gfx-opengl.so".to_string(),
            searched: vec![PathBuf::from("/a"), PathBuf::from("/b")],
        };
        assert_eq!(
            err.to_string(),
            "Native library 'libsokol_gfx-opengl.so' for backend OpenGL not found (searched: /a, /b)"
        );
    }

    #[test]
    fn display_missing_symbol() {
        let err = LoadError::MissingSymbol { name: "sg_setup" };
        assert_eq!(
            err.to_string(),
            "Required symbol 'sg_setup' not found in native library"
        );
    }

    #[test]
    fn display_open_failed() {
        let err = LoadError::OpenFailed {
            path: PathBuf::from("/nope/libsokol_gfx-dummy.so"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to open native library '/nope/libsokol_gfx-dummy.so'"
        );
    }
}
