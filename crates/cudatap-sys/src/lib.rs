//! Minimal FFI surface of the CUDA Runtime API.
//!
//! Only the types needed to re-export the intercepted entry points with
//! ABI-identical signatures. Nothing here links against libcudart — the
//! interposer binds every function at run time through the dynamic loader.

pub mod runtime_helpers;
pub mod runtime_sys;
