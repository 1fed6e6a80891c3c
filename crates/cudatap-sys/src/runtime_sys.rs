#![allow(non_camel_case_types, non_upper_case_globals, non_snake_case)]

use std::fmt;
use std::os::raw::{c_char, c_uint, c_void};

// ─── Status Codes ────────────────────────────────────────────────────────────

/// `cudaError_t`. Newtype rather than a Rust enum so unknown codes coming back
/// from a newer runtime pass through unchanged.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct cudaError_t(pub c_uint);

impl cudaError_t {
    pub const cudaSuccess: cudaError_t = cudaError_t(0);
    pub const cudaErrorInvalidValue: cudaError_t = cudaError_t(1);
    pub const cudaErrorMemoryAllocation: cudaError_t = cudaError_t(2);
    pub const cudaErrorInitializationError: cudaError_t = cudaError_t(3);
    pub const cudaErrorInvalidConfiguration: cudaError_t = cudaError_t(9);
    pub const cudaErrorInvalidSymbol: cudaError_t = cudaError_t(13);
    pub const cudaErrorInvalidDevicePointer: cudaError_t = cudaError_t(17);
    pub const cudaErrorInvalidMemcpyDirection: cudaError_t = cudaError_t(21);
    pub const cudaErrorNoDevice: cudaError_t = cudaError_t(100);
    pub const cudaErrorInvalidDevice: cudaError_t = cudaError_t(101);
    pub const cudaErrorNotReady: cudaError_t = cudaError_t(600);
    pub const cudaErrorLaunchFailure: cudaError_t = cudaError_t(719);

    /// Symbolic name of the code, if it is one this crate knows about.
    pub fn name(self) -> Option<&'static str> {
        Some(match self.0 {
            0 => "cudaSuccess",
            1 => "cudaErrorInvalidValue",
            2 => "cudaErrorMemoryAllocation",
            3 => "cudaErrorInitializationError",
            9 => "cudaErrorInvalidConfiguration",
            13 => "cudaErrorInvalidSymbol",
            17 => "cudaErrorInvalidDevicePointer",
            21 => "cudaErrorInvalidMemcpyDirection",
            100 => "cudaErrorNoDevice",
            101 => "cudaErrorInvalidDevice",
            600 => "cudaErrorNotReady",
            719 => "cudaErrorLaunchFailure",
            _ => return None,
        })
    }
}

// ─── Launch Geometry ─────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct dim3 {
    pub x: c_uint,
    pub y: c_uint,
    pub z: c_uint,
}

impl dim3 {
    pub const fn new(x: c_uint, y: c_uint, z: c_uint) -> Self {
        dim3 { x, y, z }
    }
}

impl Default for dim3 {
    fn default() -> Self {
        dim3::new(1, 1, 1)
    }
}

/// Canonicalized rendering: trailing unit components are dropped, so a
/// one-dimensional extent prints as a bare scalar and a two-dimensional one
/// as a pair.
impl fmt::Display for dim3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.y == 1 && self.z == 1 {
            write!(f, "{}", self.x)
        } else if self.z == 1 {
            write!(f, "[{},{}]", self.x, self.y)
        } else {
            write!(f, "[{},{},{}]", self.x, self.y, self.z)
        }
    }
}

// ─── Opaque Handles ──────────────────────────────────────────────────────────

#[repr(C)]
pub struct CUstream_st {
    _unused: [u8; 0],
}
pub type cudaStream_t = *mut CUstream_st;

#[repr(C)]
pub struct CUevent_st {
    _unused: [u8; 0],
}
pub type cudaEvent_t = *mut CUevent_st;

/// Only ever passed by pointer; the layout stays the runtime's business.
#[repr(C)]
pub struct cudaArray {
    _unused: [u8; 0],
}

#[repr(C)]
pub struct cudaDeviceProp {
    _unused: [u8; 0],
}

#[repr(C)]
pub struct cudaFuncAttributes {
    _unused: [u8; 0],
}

#[repr(C)]
pub struct cudaChannelFormatDesc {
    _unused: [u8; 0],
}

#[repr(C)]
pub struct cudaMemcpy3DParms {
    _unused: [u8; 0],
}

#[repr(C)]
pub struct cudaLaunchParams {
    _unused: [u8; 0],
}

// ─── By-Value Structs ────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct cudaExtent {
    pub width: usize,
    pub height: usize,
    pub depth: usize,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct cudaPitchedPtr {
    pub ptr: *mut c_void,
    pub pitch: usize,
    pub xsize: usize,
    pub ysize: usize,
}

pub const CUDA_IPC_HANDLE_SIZE: usize = 64;

#[repr(C)]
#[derive(Copy, Clone)]
pub struct cudaIpcEventHandle_t {
    pub reserved: [c_char; CUDA_IPC_HANDLE_SIZE],
}

#[repr(C)]
#[derive(Copy, Clone)]
pub struct cudaIpcMemHandle_t {
    pub reserved: [c_char; CUDA_IPC_HANDLE_SIZE],
}

// ─── Enumerations ────────────────────────────────────────────────────────────
// Forwarded by value only, so each is a transparent wrapper over the C int
// representation with just the constants the interposer itself mentions.

#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct cudaMemcpyKind(pub c_uint);

impl cudaMemcpyKind {
    pub const cudaMemcpyHostToHost: cudaMemcpyKind = cudaMemcpyKind(0);
    pub const cudaMemcpyHostToDevice: cudaMemcpyKind = cudaMemcpyKind(1);
    pub const cudaMemcpyDeviceToHost: cudaMemcpyKind = cudaMemcpyKind(2);
    pub const cudaMemcpyDeviceToDevice: cudaMemcpyKind = cudaMemcpyKind(3);
    pub const cudaMemcpyDefault: cudaMemcpyKind = cudaMemcpyKind(4);
}

#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct cudaDeviceAttr(pub c_uint);

#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct cudaDeviceP2PAttr(pub c_uint);

#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct cudaFuncAttribute(pub c_uint);

#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct cudaFuncCache(pub c_uint);

#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct cudaLimit(pub c_uint);

#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct cudaSharedMemConfig(pub c_uint);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_dimensional_extent_renders_as_scalar() {
        assert_eq!(dim3::new(16, 1, 1).to_string(), "16");
    }

    #[test]
    fn two_dimensional_extent_renders_as_pair() {
        assert_eq!(dim3::new(2, 3, 1).to_string(), "[2,3]");
    }

    #[test]
    fn three_dimensional_extent_renders_as_triple() {
        assert_eq!(dim3::new(2, 3, 4).to_string(), "[2,3,4]");
        // A unit y component alone does not collapse the rendering.
        assert_eq!(dim3::new(4, 1, 5).to_string(), "[4,1,5]");
    }

    #[test]
    fn error_names_cover_known_codes_only() {
        assert_eq!(cudaError_t::cudaSuccess.name(), Some("cudaSuccess"));
        assert_eq!(
            cudaError_t::cudaErrorInvalidConfiguration.name(),
            Some("cudaErrorInvalidConfiguration")
        );
        assert_eq!(cudaError_t(0xdead).name(), None);
    }
}
