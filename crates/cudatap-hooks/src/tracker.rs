//! Cross-call state for the legacy execution-configuration launch protocol.
//!
//! `cudaConfigureCall` opens a pending launch, `cudaSetupArgument` stages
//! parameters into it, and `cudaLaunch` consumes it. The three calls arrive
//! as independent entry points, so the pending configuration lives here
//! between them — one per calling thread, because the protocol itself is
//! per-thread and a shared slot would let concurrent launches corrupt each
//! other.

use std::cell::RefCell;
use std::fmt;
use std::os::raw::c_void;

use cudatap_sys::runtime_sys::{cudaStream_t, dim3};

/// One staged kernel argument. Order and offsets mirror the native calling
/// convention layout; the pointee is never read by this layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct KernelArg {
    pub ptr: *const c_void,
    pub size: usize,
    pub offset: usize,
}

/// A launch accumulated between `cudaConfigureCall` and `cudaLaunch`.
#[derive(Debug)]
pub struct LaunchConfiguration {
    grid: dim3,
    block: dim3,
    shared_mem: usize,
    stream: cudaStream_t,
    arguments: Vec<KernelArg>,
}

impl LaunchConfiguration {
    pub fn grid(&self) -> dim3 {
        self.grid
    }

    pub fn block(&self) -> dim3 {
        self.block
    }

    pub fn shared_mem(&self) -> usize {
        self.shared_mem
    }

    pub fn stream(&self) -> cudaStream_t {
        self.stream
    }

    pub fn arguments(&self) -> &[KernelArg] {
        &self.arguments
    }
}

/// Grid and block extents rendered with the same canonicalization rule.
impl fmt::Display for LaunchConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gridDim={} blockDim={}", self.grid, self.block)
    }
}

/// Misuse of the configure/launch protocol. Reported instead of forwarding
/// with stale or zero-valued dimensions.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ProtocolViolation {
    ConfigureWhilePending,
    ArgumentWithoutConfigure,
    LaunchWithoutConfigure,
}

impl fmt::Display for ProtocolViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ProtocolViolation::ConfigureWhilePending => {
                "cudaConfigureCall while a configuration is already pending on this thread"
            }
            ProtocolViolation::ArgumentWithoutConfigure => {
                "cudaSetupArgument without a preceding cudaConfigureCall"
            }
            ProtocolViolation::LaunchWithoutConfigure => {
                "cudaLaunch without a preceding cudaConfigureCall"
            }
        };
        write!(f, "launch protocol violation: {}", msg)
    }
}

impl std::error::Error for ProtocolViolation {}

/// Idle when `pending` is `None`, configured otherwise.
#[derive(Default)]
pub struct LaunchTracker {
    pending: Option<LaunchConfiguration>,
}

impl LaunchTracker {
    /// The configure transition. Refused while a launch is still pending;
    /// the pending configuration is left untouched in that case.
    pub fn configure(
        &mut self,
        grid: dim3,
        block: dim3,
        shared_mem: usize,
        stream: cudaStream_t,
    ) -> Result<(), ProtocolViolation> {
        if self.pending.is_some() {
            return Err(ProtocolViolation::ConfigureWhilePending);
        }
        self.pending = Some(LaunchConfiguration {
            grid,
            block,
            shared_mem,
            stream,
            arguments: Vec::new(),
        });
        Ok(())
    }

    /// Appends one argument descriptor to the pending configuration.
    pub fn append_argument(
        &mut self,
        ptr: *const c_void,
        size: usize,
        offset: usize,
    ) -> Result<(), ProtocolViolation> {
        let config = self
            .pending
            .as_mut()
            .ok_or(ProtocolViolation::ArgumentWithoutConfigure)?;
        config.arguments.push(KernelArg { ptr, size, offset });
        Ok(())
    }

    /// The launch transition: hands the pending configuration to the caller
    /// and returns the tracker to idle.
    pub fn take(&mut self) -> Result<LaunchConfiguration, ProtocolViolation> {
        self.pending
            .take()
            .ok_or(ProtocolViolation::LaunchWithoutConfigure)
    }
}

thread_local! {
    static TRACKER: RefCell<LaunchTracker> = RefCell::new(LaunchTracker::default());
}

/// Runs `f` against the calling thread's tracker. A configuration opened on
/// one thread is only ever visible to, and consumable by, that thread.
pub fn with_tracker<R>(f: impl FnOnce(&mut LaunchTracker) -> R) -> R {
    TRACKER.with(|tracker| f(&mut tracker.borrow_mut()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;
    use std::thread;

    fn grid(x: u32, y: u32, z: u32) -> dim3 {
        dim3::new(x, y, z)
    }

    #[test]
    fn configure_then_launch_hands_back_the_configuration() {
        let mut tracker = LaunchTracker::default();
        tracker
            .configure(grid(2, 3, 1), grid(16, 1, 1), 128, ptr::null_mut())
            .unwrap();

        let config = tracker.take().unwrap();
        assert_eq!(config.grid(), grid(2, 3, 1));
        assert_eq!(config.block(), grid(16, 1, 1));
        assert_eq!(config.shared_mem(), 128);
        assert!(config.arguments().is_empty());

        // The launch consumed the configuration; the tracker is idle again.
        assert_eq!(
            tracker.take().unwrap_err(),
            ProtocolViolation::LaunchWithoutConfigure
        );
    }

    #[test]
    fn launch_event_renders_canonical_dimensions() {
        let mut tracker = LaunchTracker::default();
        tracker
            .configure(grid(2, 3, 1), grid(16, 1, 1), 0, ptr::null_mut())
            .unwrap();
        let config = tracker.take().unwrap();
        assert_eq!(config.to_string(), "gridDim=[2,3] blockDim=16");
    }

    #[test]
    fn arguments_are_kept_in_append_order() {
        let mut tracker = LaunchTracker::default();
        tracker
            .configure(grid(4, 1, 1), grid(8, 1, 1), 0, ptr::null_mut())
            .unwrap();
        tracker.append_argument(0x10 as *const _, 4, 0).unwrap();
        tracker.append_argument(0x20 as *const _, 8, 8).unwrap();

        let config = tracker.take().unwrap();
        let args = config.arguments();
        assert_eq!(args.len(), 2);
        assert_eq!(args[0].size, 4);
        assert_eq!(args[0].offset, 0);
        assert_eq!(args[1].size, 8);
        assert_eq!(args[1].offset, 8);
    }

    #[test]
    fn launch_without_configure_is_a_violation() {
        let mut tracker = LaunchTracker::default();
        assert_eq!(
            tracker.take().unwrap_err(),
            ProtocolViolation::LaunchWithoutConfigure
        );
    }

    #[test]
    fn argument_without_configure_is_a_violation() {
        let mut tracker = LaunchTracker::default();
        assert_eq!(
            tracker.append_argument(ptr::null(), 4, 0).unwrap_err(),
            ProtocolViolation::ArgumentWithoutConfigure
        );
    }

    #[test]
    fn double_configure_keeps_the_first_configuration() {
        let mut tracker = LaunchTracker::default();
        tracker
            .configure(grid(2, 3, 1), grid(16, 1, 1), 0, ptr::null_mut())
            .unwrap();
        assert_eq!(
            tracker
                .configure(grid(9, 9, 9), grid(1, 1, 1), 0, ptr::null_mut())
                .unwrap_err(),
            ProtocolViolation::ConfigureWhilePending
        );

        let config = tracker.take().unwrap();
        assert_eq!(config.grid(), grid(2, 3, 1));
    }

    #[test]
    fn pending_configurations_do_not_cross_threads() {
        with_tracker(|t| t.configure(grid(2, 1, 1), grid(32, 1, 1), 0, ptr::null_mut())).unwrap();

        // A fresh thread has its own idle tracker.
        thread::spawn(|| {
            with_tracker(|t| {
                assert_eq!(
                    t.take().unwrap_err(),
                    ProtocolViolation::LaunchWithoutConfigure
                );
            });
        })
        .join()
        .unwrap();

        // The configuration opened on this thread is still pending here.
        let config = with_tracker(|t| t.take()).unwrap();
        assert_eq!(config.block(), grid(32, 1, 1));
    }
}
