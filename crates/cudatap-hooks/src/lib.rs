//! LD_PRELOAD interposer for the CUDA Runtime API.
//!
//! Every exported `cuda*` symbol here shadows the real libcudart entry point
//! with an identical signature, emits one trace event, and forwards the call
//! unchanged to the implementation the dynamic loader finds next in search
//! order. Load it ahead of libcudart (`LD_PRELOAD=libcudatap_hooks.so`) and
//! it activates for the whole process; nothing else is required.

pub mod ctor;
pub mod hooks;
pub mod reexports;
pub mod symbols;
pub mod tracker;

// ─── Hook Macro ──────────────────────────────────────────────────────────────

/// Declares an intercepted entry point with a hand-written body.
///
/// Generates the exported symbol plus a lazily bound `__real_<name>` pointer
/// to the implementation being shadowed. The body decides what to observe and
/// performs the forwarding call itself; resolution failure aborts the process
/// rather than letting the call fall through.
#[macro_export]
macro_rules! cudart_hook {
    (
        pub unsafe extern "C" fn $fname:ident( $($arg:ident : $arg_ty:ty),* $(,)? )
        -> $ret:ty
        $body:block
    ) => {
        ::paste::paste! {
            #[allow(non_upper_case_globals)]
            pub static [<__real_ $fname>]: ::once_cell::sync::Lazy<
                unsafe extern "C" fn($($arg_ty),*) -> $ret
            > = ::once_cell::sync::Lazy::new(|| {
                let addr = $crate::symbols::resolve(stringify!($fname));
                unsafe { ::std::mem::transmute(addr) }
            });

            #[unsafe(no_mangle)]
            pub unsafe extern "C" fn $fname( $($arg : $arg_ty),* ) -> $ret {
                $body
            }
        }
    };
}

#[cfg(test)]
mod forwarding_tests {
    //! The forwarding contract, exercised for real: the test binary
    //! interposes libc symbols, so `RTLD_NEXT` resolves to the genuine libc
    //! definitions and the macros must pass arguments and results through
    //! bit-exactly.

    use std::os::raw::{c_long, c_longlong};

    cudart_hook! {
        pub unsafe extern "C" fn labs(value: c_long) -> c_long {
            unsafe { (*__real_labs)(value) }
        }
    }

    crate::cudart_proxy! {
        fn llabs(value: c_longlong) -> c_longlong
    }

    #[test]
    fn hook_forwards_arguments_and_result_unchanged() {
        assert_eq!(unsafe { labs(-42) }, 42);
        assert_eq!(unsafe { labs(7) }, 7);
    }

    #[test]
    fn proxy_forwards_arguments_and_result_unchanged() {
        assert_eq!(unsafe { llabs(-9_000_000_000) }, 9_000_000_000);
        assert_eq!(unsafe { llabs(0) }, 0);
    }

    #[test]
    fn real_pointer_binds_once() {
        let first = *__real_labs as usize;
        unsafe { labs(1) };
        let second = *__real_labs as usize;
        assert_eq!(first, second);
    }
}
