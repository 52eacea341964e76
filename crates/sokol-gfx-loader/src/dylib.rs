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

//! Minimal cross-platform dynamic library handle.
//!
//! `dlopen`/`dlsym`/`dlclose` on POSIX, `LoadLibraryW`/`GetProcAddress`/
//! `FreeLibrary` on Windows. A [`Library`] always wraps a non-null handle
//! and closes it exactly once on drop, so "resolve on a closed handle" is
//! unrepresentable rather than checked. No symbol caching, no signature
//! validation.

use std::ffi::{c_void, CString};
use std::path::{Path, PathBuf};

use crate::error::LoadError;

#[cfg(target_family = "unix")]
mod platform {
    use std::ffi::{c_char, c_int, c_void, CStr};

    #[cfg_attr(target_os = "linux", link(name = "dl"))]
    extern "C" {
        fn dlopen(filename: *const c_char, flag: c_int) -> *mut c_void;
        fn dlsym(handle: *mut c_void, symbol: *const c_char) -> *mut c_void;
        fn dlclose(handle: *mut c_void) -> c_int;
    }

    // RTLD_LAZY | RTLD_GLOBAL; the constants differ between the glibc and
    // Darwin headers.
    #[cfg(target_os = "macos")]
    const OPEN_FLAGS: c_int = 0x1 | 0x8;
    #[cfg(not(target_os = "macos"))]
    const OPEN_FLAGS: c_int = 0x1 | 0x100;

    pub(super) unsafe fn open(path: &CStr) -> *mut c_void {
        unsafe { dlopen(path.as_ptr(), OPEN_FLAGS) }
    }

    pub(super) unsafe fn symbol(handle: *mut c_void, name: &CStr) -> *mut c_void {
        unsafe { dlsym(handle, name.as_ptr()) }
    }

    pub(super) unsafe fn close(handle: *mut c_void) {
        unsafe {
            dlclose(handle);
        }
    }
}

#[cfg(target_family = "windows")]
mod platform {
    use std::ffi::{c_char, c_void, CStr, OsStr};
    use std::iter;
    use std::os::windows::ffi::OsStrExt;

    #[link(name = "kernel32")]
    extern "system" {
        fn LoadLibraryW(lp_file_name: *const u16) -> *mut c_void;
        fn GetProcAddress(h_module: *mut c_void, lp_proc_name: *const c_char) -> *mut c_void;
        fn FreeLibrary(h_module: *mut c_void) -> i32;
    }

    pub(super) unsafe fn open_wide(path: &OsStr) -> *mut c_void {
        let wide: Vec<u16> = path.encode_wide().chain(iter::once(0)).collect();
        unsafe { LoadLibraryW(wide.as_ptr()) }
    }

    pub(super) unsafe fn symbol(handle: *mut c_void, name: &CStr) -> *mut c_void {
        unsafe { GetProcAddress(handle, name.as_ptr()) }
    }

    pub(super) unsafe fn close(handle: *mut c_void) {
        unsafe {
            FreeLibrary(handle);
        }
    }
}

#[cfg(not(any(target_family = "unix", target_family = "windows")))]
mod platform {
    use std::ffi::{c_void, CStr};

    pub(super) unsafe fn symbol(_handle: *mut c_void, _name: &CStr) -> *mut c_void {
        std::ptr::null_mut()
    }

    pub(super) unsafe fn close(_handle: *mut c_void) {}
}

/// An open shared library. Closing happens in `Drop`.
#[derive(Debug)]
pub struct Library {
    handle: *mut c_void,
    path: PathBuf,
}

impl Library {
    /// Opens the library at `path`.
    pub fn open(path: &Path) -> Result<Self, LoadError> {
        let open_failed = || LoadError::OpenFailed {
            path: path.to_path_buf(),
        };

        #[cfg(target_family = "windows")]
        let handle = unsafe { platform::open_wide(path.as_os_str()) };

        #[cfg(target_family = "unix")]
        let handle = {
            let c_path = CString::new(path.as_os_str().as_encoded_bytes())
                .map_err(|_| open_failed())?;
            unsafe { platform::open(&c_path) }
        };

        #[cfg(not(any(target_family = "unix", target_family = "windows")))]
        let handle: *mut c_void = std::ptr::null_mut();

        if handle.is_null() {
            Err(open_failed())
        } else {
            Ok(Self {
                handle,
                path: path.to_path_buf(),
            })
        }
    }

    /// Resolves an exported symbol to its raw address.
    pub fn symbol(&self, name: &'static str) -> Result<*mut c_void, LoadError> {
        let missing = LoadError::MissingSymbol { name };
        let c_name = CString::new(name).map_err(|_| missing.clone())?;
        let address = unsafe { platform::symbol(self.handle, &c_name) };
        if address.is_null() {
            Err(missing)
        } else {
            Ok(address)
        }
    }

    /// The path this library was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for Library {
    fn drop(&mut self) {
        unsafe { platform::close(self.handle) };
    }
}

// The handle is only an opaque token to the OS loader; the loader itself
// serializes access. Symbol resolution takes &self and returns raw
// addresses, which carry no lifetime back to this value.
unsafe impl Send for Library {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_missing_file_fails() {
        let path = Path::new("/definitely/not/a/real/libsokol_gfx-dummy.so");
        match Library::open(path) {
            Err(LoadError::OpenFailed { path: reported }) => {
                assert_eq!(reported, path.to_path_buf());
            }
            other => panic!("expected OpenFailed, got {other:?}"),
        }
    }
}
