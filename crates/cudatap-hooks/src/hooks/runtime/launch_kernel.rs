#![allow(non_snake_case, non_upper_case_globals, clippy::missing_safety_doc)]

//! Single-call launch entry points. No cross-call state to track, but the
//! launch geometry is rendered with the same canonicalization as the legacy
//! path so both read alike in the trace.

use std::os::raw::c_void;

use cudatap_sys::runtime_sys::{cudaError_t, cudaStream_t, dim3};
use tracing::info;

use crate::cudart_hook;

cudart_hook! {
    pub unsafe extern "C" fn cudaLaunchKernel(
        func: *const c_void,
        gridDim: dim3,
        blockDim: dim3,
        args: *mut *mut c_void,
        sharedMem: usize,
        stream: cudaStream_t
    ) -> cudaError_t {
        info!("cudaLaunchKernel gridDim={gridDim} blockDim={blockDim}");
        unsafe {
            (*__real_cudaLaunchKernel)(func, gridDim, blockDim, args, sharedMem, stream)
        }
    }
}

cudart_hook! {
    pub unsafe extern "C" fn cudaLaunchCooperativeKernel(
        func: *const c_void,
        gridDim: dim3,
        blockDim: dim3,
        args: *mut *mut c_void,
        sharedMem: usize,
        stream: cudaStream_t
    ) -> cudaError_t {
        info!("cudaLaunchCooperativeKernel gridDim={gridDim} blockDim={blockDim}");
        unsafe {
            (*__real_cudaLaunchCooperativeKernel)(func, gridDim, blockDim, args, sharedMem, stream)
        }
    }
}
