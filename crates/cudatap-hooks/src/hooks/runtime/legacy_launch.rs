#![allow(non_snake_case, non_upper_case_globals, clippy::missing_safety_doc)]

//! The legacy three-call launch sequence: configure, stage arguments, launch.
//!
//! Each call is forwarded natively like any other entry point, but the trio
//! is additionally correlated through the per-thread tracker so the launch
//! can be reported as one event with its full geometry and argument list.
//! A violating call is reported and answered with
//! `cudaErrorInvalidConfiguration` without forwarding, so the native side
//! never sees a launch this layer could not account for.

use std::os::raw::{c_char, c_void};

use cudatap_sys::cudart_errcheck;
use cudatap_sys::runtime_sys::{cudaError_t, cudaStream_t, dim3};
use tracing::{debug, error, info, warn};

use crate::cudart_hook;
use crate::tracker::with_tracker;

cudart_hook! {
    pub unsafe extern "C" fn cudaConfigureCall(
        gridDim: dim3,
        blockDim: dim3,
        sharedMem: usize,
        stream: cudaStream_t
    ) -> cudaError_t {
        debug!("cudaConfigureCall intercepted");
        if let Err(violation) =
            with_tracker(|t| t.configure(gridDim, blockDim, sharedMem, stream))
        {
            error!("{violation}");
            return cudaError_t::cudaErrorInvalidConfiguration;
        }
        unsafe { (*__real_cudaConfigureCall)(gridDim, blockDim, sharedMem, stream) }
    }
}

cudart_hook! {
    pub unsafe extern "C" fn cudaSetupArgument(
        arg: *const c_void,
        size: usize,
        offset: usize
    ) -> cudaError_t {
        debug!("cudaSetupArgument intercepted");
        if let Err(violation) = with_tracker(|t| t.append_argument(arg, size, offset)) {
            error!("{violation}");
            return cudaError_t::cudaErrorInvalidConfiguration;
        }
        unsafe { (*__real_cudaSetupArgument)(arg, size, offset) }
    }
}

cudart_hook! {
    pub unsafe extern "C" fn cudaLaunch(entry: *const c_char) -> cudaError_t {
        debug!("cudaLaunch intercepted");
        let config = match with_tracker(|t| t.take()) {
            Ok(config) => config,
            Err(violation) => {
                error!("{violation}");
                return cudaError_t::cudaErrorInvalidConfiguration;
            }
        };
        info!("kernel launch {} args={}", config, config.arguments().len());

        let rc = unsafe { (*__real_cudaLaunch)(entry) };
        if let Err(err) = cudart_errcheck!(rc) {
            warn!("cudaLaunch failed: {err}");
        }
        rc
    }
}
