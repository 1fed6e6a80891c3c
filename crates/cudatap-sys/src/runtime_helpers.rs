use std::fmt;

use crate::runtime_sys::cudaError_t;

#[derive(Debug, Copy, Clone)]
pub struct CudartError {
    pub errcode: cudaError_t,
}

impl fmt::Display for CudartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Asking the runtime for its own message would recurse through the
        // interposed cudaGetErrorString export, so render from a static table.
        match self.errcode.name() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "CUDA runtime error code {}", self.errcode.0),
        }
    }
}

impl std::error::Error for CudartError {}

#[macro_export]
macro_rules! cudart_errcheck {
    ($expr:expr) => {{
        let result = $expr;
        if result == $crate::runtime_sys::cudaError_t::cudaSuccess {
            Ok(())
        } else {
            Err($crate::runtime_helpers::CudartError { errcode: result })
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_render_by_name() {
        let err = CudartError {
            errcode: cudaError_t::cudaErrorNoDevice,
        };
        assert_eq!(err.to_string(), "cudaErrorNoDevice");
    }

    #[test]
    fn unknown_codes_render_raw() {
        let err = CudartError {
            errcode: cudaError_t(4242),
        };
        assert_eq!(err.to_string(), "CUDA runtime error code 4242");
    }

    #[test]
    fn errcheck_splits_success_from_failure() {
        assert!(cudart_errcheck!(cudaError_t::cudaSuccess).is_ok());
        let err = cudart_errcheck!(cudaError_t::cudaErrorLaunchFailure).unwrap_err();
        assert_eq!(err.errcode, cudaError_t::cudaErrorLaunchFailure);
    }
}
