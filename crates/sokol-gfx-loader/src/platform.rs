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

//! Host platform detection and backend selection.

use std::fmt;

use crate::error::LoadError;

/// Operating systems the native library ships for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
    /// Anything else. Never guessed at; loading on an unknown platform
    /// fails with [`LoadError::UnsupportedPlatform`].
    Unknown,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub const fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else {
            Platform::Unknown
        }
    }

    /// The backend the native library is normally built with on this OS.
    pub const fn default_backend(self) -> Option<GraphicsBackend> {
        match self {
            Platform::Windows => Some(GraphicsBackend::D3d11),
            Platform::MacOs => Some(GraphicsBackend::Metal),
            Platform::Linux => Some(GraphicsBackend::OpenGl),
            Platform::Unknown => None,
        }
    }

    /// Shared library file name prefix (`lib` on POSIX, empty on Windows).
    pub const fn library_prefix(self) -> &'static str {
        match self {
            Platform::Windows => "",
            _ => "lib",
        }
    }

    /// Shared library file extension, without the dot.
    pub const fn library_extension(self) -> &'static str {
        match self {
            Platform::Windows => "dll",
            Platform::MacOs => "dylib",
            _ => "so",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Windows => "Windows",
            Platform::MacOs => "macOS",
            Platform::Linux => "Linux",
            Platform::Unknown => "Unknown",
        };
        write!(f, "{name}")
    }
}

/// Rendering backends the native library can be compiled for; selects
/// which shared library variant is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphicsBackend {
    OpenGl,
    Metal,
    D3d11,
    Wgpu,
    /// Headless backend that performs no rendering; useful in tests.
    Dummy,
}

impl GraphicsBackend {
    /// The token embedded in the library file name
    /// (`sokol_gfx-<token>`).
    pub const fn token(self) -> &'static str {
        match self {
            GraphicsBackend::OpenGl => "opengl",
            GraphicsBackend::Metal => "metal",
            GraphicsBackend::D3d11 => "d3d11",
            GraphicsBackend::Wgpu => "wgpu",
            GraphicsBackend::Dummy => "dummy",
        }
    }
}

impl fmt::Display for GraphicsBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GraphicsBackend::OpenGl => "OpenGL",
            GraphicsBackend::Metal => "Metal",
            GraphicsBackend::D3d11 => "Direct3D 11",
            GraphicsBackend::Wgpu => "WebGPU",
            GraphicsBackend::Dummy => "Dummy",
        };
        write!(f, "{name}")
    }
}

/// `<os>-<arch>` runtime identifier used by the `runtimes/` layout.
pub const fn runtime_identifier() -> &'static str {
    if cfg!(target_os = "windows") {
        if cfg!(target_arch = "aarch64") {
            "win-arm64"
        } else {
            "win-x64"
        }
    } else if cfg!(target_os = "macos") {
        if cfg!(target_arch = "aarch64") {
            "osx-arm64"
        } else {
            "osx-x64"
        }
    } else if cfg!(target_arch = "aarch64") {
        "linux-arm64"
    } else {
        "linux-x64"
    }
}

/// Fails unless the process uses 64-bit pointers.
///
/// Every struct layout in the abi crate assumes 64-bit pointers, so a
/// 32-bit process would corrupt each descriptor it passed across.
pub fn ensure_64_bit() -> Result<(), LoadError> {
    if cfg!(target_pointer_width = "64") {
        Ok(())
    } else {
        Err(LoadError::UnsupportedArchitecture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_backend_per_platform() {
        assert_eq!(
            Platform::Windows.default_backend(),
            Some(GraphicsBackend::D3d11)
        );
        assert_eq!(
            Platform::MacOs.default_backend(),
            Some(GraphicsBackend::Metal)
        );
        assert_eq!(
            Platform::Linux.default_backend(),
            Some(GraphicsBackend::OpenGl)
        );
        assert_eq!(Platform::Unknown.default_backend(), None);
    }

    #[test]
    fn library_naming_pieces() {
        assert_eq!(Platform::Windows.library_prefix(), "");
        assert_eq!(Platform::Linux.library_prefix(), "lib");
        assert_eq!(Platform::MacOs.library_extension(), "dylib");
        assert_eq!(Platform::Windows.library_extension(), "dll");
        assert_eq!(Platform::Linux.library_extension(), "so");
    }

    #[test]
    fn backend_tokens() {
        assert_eq!(GraphicsBackend::OpenGl.token(), "opengl");
        assert_eq!(GraphicsBackend::Metal.token(), "metal");
        assert_eq!(GraphicsBackend::D3d11.token(), "d3d11");
        assert_eq!(GraphicsBackend::Wgpu.token(), "wgpu");
        assert_eq!(GraphicsBackend::Dummy.token(), "dummy");
    }

    #[test]
    fn runtime_identifier_matches_host() {
        let rid = runtime_identifier();
        let os_ok = (cfg!(target_os = "windows") && rid.starts_with("win-"))
            || (cfg!(target_os = "macos") && rid.starts_with("osx-"))
            || (!cfg!(target_os = "windows")
                && !cfg!(target_os = "macos")
                && rid.starts_with("linux-"));
        assert!(os_ok, "unexpected rid {rid}");
    }

    #[test]
    fn sixty_four_bit_check_matches_build() {
        assert_eq!(ensure_64_bit().is_ok(), cfg!(target_pointer_width = "64"));
    }
}
