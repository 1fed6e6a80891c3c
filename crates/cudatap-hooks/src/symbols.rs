//! Lazy binding of intercepted symbols to the implementations they shadow.

use std::collections::HashMap;
use std::ffi::CString;
use std::os::raw::c_void;
use std::sync::Mutex;

use once_cell::sync::Lazy;

/// Resolution state of one intercepted symbol. A name absent from the table
/// has simply never been requested.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Binding {
    Resolved(usize),
    Missing,
}

/// Process-wide table of every symbol this library has tried to bind.
/// Entries are never removed.
static BINDINGS: Lazy<Mutex<HashMap<&'static str, Binding>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Address of the next definition of `symbol` in the dynamic loader's search
/// order after this library, i.e. the genuine implementation being shadowed.
pub fn dlsym_next(symbol: &str) -> *mut c_void {
    let name = CString::new(symbol).unwrap();
    unsafe { libc::dlsym(libc::RTLD_NEXT, name.as_ptr()) }
}

/// Cached lookup. Both outcomes are remembered, so repeated requests for the
/// same name never repeat the loader query and always agree on the address.
pub fn try_resolve(symbol: &'static str) -> Option<*mut c_void> {
    let mut table = BINDINGS.lock().unwrap();
    let binding = *table.entry(symbol).or_insert_with(|| {
        let addr = dlsym_next(symbol);
        if addr.is_null() {
            Binding::Missing
        } else {
            Binding::Resolved(addr as usize)
        }
    });
    match binding {
        Binding::Resolved(addr) => Some(addr as *mut c_void),
        Binding::Missing => None,
    }
}

/// Resolve or die. An entry point whose real implementation cannot be found
/// must not return as though the call had happened.
pub fn resolve(symbol: &'static str) -> *mut c_void {
    match try_resolve(symbol) {
        Some(addr) => addr,
        None => {
            eprintln!(
                "fatal: symbol '{}' not found in any later-loaded library",
                symbol
            );
            std::process::abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Barrier};
    use std::thread;

    // libc is loaded after the test binary, so its exports stand in for the
    // shadowed runtime here.

    #[test]
    fn resolution_is_idempotent() {
        let first = try_resolve("malloc").expect("libc malloc visible via RTLD_NEXT");
        let second = try_resolve("malloc").unwrap();
        assert!(!first.is_null());
        assert_eq!(first, second);
    }

    #[test]
    fn resolve_agrees_with_try_resolve() {
        assert_eq!(resolve("free"), try_resolve("free").unwrap());
    }

    #[test]
    fn concurrent_first_use_agrees_on_one_address() {
        const THREADS: usize = 8;
        let barrier = Arc::new(Barrier::new(THREADS));
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    try_resolve("calloc").expect("libc calloc visible via RTLD_NEXT") as usize
                })
            })
            .collect();

        let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addresses[0] != 0);
        assert!(addresses.iter().all(|&a| a == addresses[0]));
    }

    #[test]
    fn missing_symbols_stay_missing() {
        assert!(try_resolve("cudatap_definitely_absent_symbol").is_none());
        assert!(try_resolve("cudatap_definitely_absent_symbol").is_none());
    }
}
