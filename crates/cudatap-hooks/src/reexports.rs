#![allow(non_snake_case, clippy::missing_safety_doc)]

//! The mechanical remainder of the intercepted surface.
//!
//! Every entry point below is one instantiation of the same forwarding
//! contract, differing only in symbol name and signature: bind the real
//! implementation on first use, emit the pre-call event, tail-call with the
//! arguments untouched, return the result verbatim.

// ─── Proxy Macro ─────────────────────────────────────────────────────────────

/// Declares a pure pass-through entry point.
#[macro_export]
macro_rules! cudart_proxy {
    (
        fn $fname:ident( $($arg:ident : $arg_ty:ty),* $(,)? ) -> $ret:ty
    ) => {
        ::paste::paste! {
            #[allow(non_upper_case_globals)]
            static [<__real_ $fname>]: ::once_cell::sync::Lazy<
                unsafe extern "C" fn($($arg_ty),*) -> $ret
            > = ::once_cell::sync::Lazy::new(|| {
                let addr = $crate::symbols::resolve(stringify!($fname));
                unsafe { ::std::mem::transmute(addr) }
            });

            #[unsafe(no_mangle)]
            pub unsafe extern "C" fn $fname( $($arg : $arg_ty),* ) -> $ret {
                ::tracing::debug!(concat!(stringify!($fname), " intercepted"));
                unsafe { (*[<__real_ $fname>])( $($arg),* ) }
            }
        }
    };
}

pub mod runtime {
    #![allow(non_snake_case, clippy::missing_safety_doc)]

    use std::os::raw::{c_char, c_int, c_uint, c_void};

    use cudatap_sys::runtime_sys::*;

    use crate::cudart_proxy;

    // ─── Error Handling ──────────────────────────────────────────────────────

    cudart_proxy! { fn cudaGetErrorName(error: cudaError_t) -> *const c_char }
    cudart_proxy! { fn cudaGetErrorString(error: cudaError_t) -> *const c_char }
    cudart_proxy! { fn cudaGetLastError() -> cudaError_t }
    cudart_proxy! { fn cudaPeekAtLastError() -> cudaError_t }

    // ─── Device Management ───────────────────────────────────────────────────

    cudart_proxy! { fn cudaChooseDevice(device: *mut c_int, prop: *const cudaDeviceProp) -> cudaError_t }
    cudart_proxy! { fn cudaDeviceGetAttribute(value: *mut c_int, attr: cudaDeviceAttr, device: c_int) -> cudaError_t }
    cudart_proxy! { fn cudaDeviceGetByPCIBusId(device: *mut c_int, pciBusId: *const c_char) -> cudaError_t }
    cudart_proxy! { fn cudaDeviceGetCacheConfig(pCacheConfig: *mut cudaFuncCache) -> cudaError_t }
    cudart_proxy! { fn cudaDeviceGetLimit(pValue: *mut usize, limit: cudaLimit) -> cudaError_t }
    cudart_proxy! { fn cudaDeviceGetNvSciSyncAttributes(nvSciSyncAttrList: *mut c_void, device: c_int, flags: c_int) -> cudaError_t }
    cudart_proxy! { fn cudaDeviceGetP2PAttribute(value: *mut c_int, attr: cudaDeviceP2PAttr, srcDevice: c_int, dstDevice: c_int) -> cudaError_t }
    cudart_proxy! { fn cudaDeviceGetPCIBusId(pciBusId: *mut c_char, len: c_int, device: c_int) -> cudaError_t }
    cudart_proxy! { fn cudaDeviceGetSharedMemConfig(pConfig: *mut cudaSharedMemConfig) -> cudaError_t }
    cudart_proxy! { fn cudaDeviceGetStreamPriorityRange(leastPriority: *mut c_int, greatestPriority: *mut c_int) -> cudaError_t }
    cudart_proxy! { fn cudaDeviceSetCacheConfig(cacheConfig: cudaFuncCache) -> cudaError_t }
    cudart_proxy! { fn cudaDeviceSetLimit(limit: cudaLimit, value: usize) -> cudaError_t }
    cudart_proxy! { fn cudaDeviceSetSharedMemConfig(config: cudaSharedMemConfig) -> cudaError_t }
    cudart_proxy! { fn cudaDeviceSynchronize() -> cudaError_t }
    cudart_proxy! { fn cudaGetDevice(device: *mut c_int) -> cudaError_t }
    cudart_proxy! { fn cudaGetDeviceCount(count: *mut c_int) -> cudaError_t }
    cudart_proxy! { fn cudaGetDeviceFlags(flags: *mut c_uint) -> cudaError_t }
    cudart_proxy! { fn cudaGetDeviceProperties(prop: *mut cudaDeviceProp, device: c_int) -> cudaError_t }
    cudart_proxy! { fn cudaIpcCloseMemHandle(devPtr: *mut c_void) -> cudaError_t }
    cudart_proxy! { fn cudaIpcGetEventHandle(handle: *mut cudaIpcEventHandle_t, event: cudaEvent_t) -> cudaError_t }
    cudart_proxy! { fn cudaIpcGetMemHandle(handle: *mut cudaIpcMemHandle_t, devPtr: *mut c_void) -> cudaError_t }
    cudart_proxy! { fn cudaIpcOpenEventHandle(event: *mut cudaEvent_t, handle: cudaIpcEventHandle_t) -> cudaError_t }
    cudart_proxy! { fn cudaIpcOpenMemHandle(devPtr: *mut *mut c_void, handle: cudaIpcMemHandle_t, flags: c_uint) -> cudaError_t }
    cudart_proxy! { fn cudaSetDevice(device: c_int) -> cudaError_t }
    cudart_proxy! { fn cudaSetDeviceFlags(flags: c_uint) -> cudaError_t }
    cudart_proxy! { fn cudaSetValidDevices(device_arr: *mut c_int, len: c_int) -> cudaError_t }

    // ─── Stream Management ───────────────────────────────────────────────────

    cudart_proxy! { fn cudaStreamAttachMemAsync(stream: cudaStream_t, devPtr: *mut c_void, length: usize, flags: c_uint) -> cudaError_t }
    cudart_proxy! { fn cudaStreamCreate(pStream: *mut cudaStream_t) -> cudaError_t }
    cudart_proxy! { fn cudaStreamCreateWithFlags(pStream: *mut cudaStream_t, flags: c_uint) -> cudaError_t }
    cudart_proxy! { fn cudaStreamCreateWithPriority(pStream: *mut cudaStream_t, flags: c_uint, priority: c_int) -> cudaError_t }
    cudart_proxy! { fn cudaStreamDestroy(stream: cudaStream_t) -> cudaError_t }
    cudart_proxy! { fn cudaStreamGetFlags(hStream: cudaStream_t, flags: *mut c_uint) -> cudaError_t }
    cudart_proxy! { fn cudaStreamGetPriority(hStream: cudaStream_t, priority: *mut c_int) -> cudaError_t }
    cudart_proxy! { fn cudaStreamQuery(stream: cudaStream_t) -> cudaError_t }
    cudart_proxy! { fn cudaStreamSynchronize(stream: cudaStream_t) -> cudaError_t }
    cudart_proxy! { fn cudaStreamWaitEvent(stream: cudaStream_t, event: cudaEvent_t, flags: c_uint) -> cudaError_t }

    // ─── Event Management ────────────────────────────────────────────────────

    cudart_proxy! { fn cudaEventCreate(event: *mut cudaEvent_t) -> cudaError_t }
    cudart_proxy! { fn cudaEventCreateWithFlags(event: *mut cudaEvent_t, flags: c_uint) -> cudaError_t }
    cudart_proxy! { fn cudaEventDestroy(event: cudaEvent_t) -> cudaError_t }
    cudart_proxy! { fn cudaEventElapsedTime(ms: *mut f32, start: cudaEvent_t, end: cudaEvent_t) -> cudaError_t }
    cudart_proxy! { fn cudaEventQuery(event: cudaEvent_t) -> cudaError_t }
    cudart_proxy! { fn cudaEventRecord(event: cudaEvent_t, stream: cudaStream_t) -> cudaError_t }
    cudart_proxy! { fn cudaEventSynchronize(event: cudaEvent_t) -> cudaError_t }

    // ─── Execution Control ───────────────────────────────────────────────────
    // The launch sequence itself (cudaConfigureCall, cudaSetupArgument,
    // cudaLaunch, cudaLaunchKernel, cudaLaunchCooperativeKernel) carries
    // instrumented bodies in hooks::runtime.

    cudart_proxy! { fn cudaFuncGetAttributes(attr: *mut cudaFuncAttributes, func: *const c_void) -> cudaError_t }
    cudart_proxy! { fn cudaFuncSetAttribute(func: *const c_void, attr: cudaFuncAttribute, value: c_int) -> cudaError_t }
    cudart_proxy! { fn cudaFuncSetCacheConfig(func: *const c_void, cacheConfig: cudaFuncCache) -> cudaError_t }
    cudart_proxy! { fn cudaFuncSetSharedMemConfig(func: *const c_void, config: cudaSharedMemConfig) -> cudaError_t }
    cudart_proxy! { fn cudaGetParameterBuffer(alignment: usize, size: usize) -> cudaError_t }
    cudart_proxy! { fn cudaGetParameterBufferV2(func: *mut c_void, gridDimension: dim3, blockDimension: dim3, sharedMemSize: c_uint) -> cudaError_t }
    cudart_proxy! { fn cudaLaunchCooperativeKernelMultiDevice(launchParamsList: *mut cudaLaunchParams, numDevices: c_uint, flags: c_uint) -> cudaError_t }
    cudart_proxy! { fn cudaSetDoubleForDevice(d: *mut f64) -> cudaError_t }
    cudart_proxy! { fn cudaSetDoubleForHost(d: *mut f64) -> cudaError_t }

    // ─── Memory Management ───────────────────────────────────────────────────

    cudart_proxy! { fn cudaFree(devPtr: *mut c_void) -> cudaError_t }
    cudart_proxy! { fn cudaFreeArray(array: *mut cudaArray) -> cudaError_t }
    cudart_proxy! { fn cudaFreeHost(ptr: *mut c_void) -> cudaError_t }
    cudart_proxy! { fn cudaGetSymbolAddress(devPtr: *mut *mut c_void, symbol: *const c_char) -> cudaError_t }
    cudart_proxy! { fn cudaGetSymbolSize(size: *mut usize, symbol: *const c_char) -> cudaError_t }
    cudart_proxy! { fn cudaHostAlloc(ptr: *mut *mut c_void, size: usize, flags: c_uint) -> cudaError_t }
    cudart_proxy! { fn cudaHostGetDevicePointer(pDevice: *mut *mut c_void, pHost: *mut c_void, flags: c_uint) -> cudaError_t }
    cudart_proxy! { fn cudaHostGetFlags(pFlags: *mut c_uint, pHost: *mut c_void) -> cudaError_t }
    cudart_proxy! { fn cudaMalloc(devPtr: *mut *mut c_void, size: usize) -> cudaError_t }
    cudart_proxy! { fn cudaMalloc3D(pitchedDevPtr: *mut cudaPitchedPtr, extent: cudaExtent) -> cudaError_t }
    cudart_proxy! { fn cudaMalloc3DArray(arrayPtr: *mut *mut cudaArray, desc: *const cudaChannelFormatDesc, extent: cudaExtent) -> cudaError_t }
    cudart_proxy! { fn cudaMallocArray(arrayPtr: *mut *mut cudaArray, desc: *const cudaChannelFormatDesc, width: usize, height: usize) -> cudaError_t }
    cudart_proxy! { fn cudaMallocHost(ptr: *mut *mut c_void, size: usize) -> cudaError_t }
    cudart_proxy! { fn cudaMallocPitch(devPtr: *mut *mut c_void, pitch: *mut usize, width: usize, height: usize) -> cudaError_t }
    cudart_proxy! { fn cudaMemcpy(dst: *mut c_void, src: *const c_void, count: usize, kind: cudaMemcpyKind) -> cudaError_t }
    cudart_proxy! { fn cudaMemcpy2D(dst: *mut c_void, dpitch: usize, src: *const c_void, spitch: usize, width: usize, height: usize, kind: cudaMemcpyKind) -> cudaError_t }
    cudart_proxy! { fn cudaMemcpy2DArrayToArray(dst: *mut cudaArray, wOffsetDst: usize, hOffsetDst: usize, src: *const cudaArray, wOffsetSrc: usize, hOffsetSrc: usize, width: usize, height: usize, kind: cudaMemcpyKind) -> cudaError_t }
    cudart_proxy! { fn cudaMemcpy2DAsync(dst: *mut c_void, dpitch: usize, src: *const c_void, spitch: usize, width: usize, height: usize, kind: cudaMemcpyKind, stream: cudaStream_t) -> cudaError_t }
    cudart_proxy! { fn cudaMemcpy2DFromArray(dst: *mut c_void, dpitch: usize, src: *const cudaArray, wOffset: usize, hOffset: usize, width: usize, height: usize, kind: cudaMemcpyKind) -> cudaError_t }
    cudart_proxy! { fn cudaMemcpy2DFromArrayAsync(dst: *mut c_void, dpitch: usize, src: *const cudaArray, wOffset: usize, hOffset: usize, width: usize, height: usize, kind: cudaMemcpyKind, stream: cudaStream_t) -> cudaError_t }
    cudart_proxy! { fn cudaMemcpy2DToArray(dst: *mut cudaArray, wOffset: usize, hOffset: usize, src: *const c_void, spitch: usize, width: usize, height: usize, kind: cudaMemcpyKind) -> cudaError_t }
    cudart_proxy! { fn cudaMemcpy2DToArrayAsync(dst: *mut cudaArray, wOffset: usize, hOffset: usize, src: *const c_void, spitch: usize, width: usize, height: usize, kind: cudaMemcpyKind, stream: cudaStream_t) -> cudaError_t }
    cudart_proxy! { fn cudaMemcpy3D(p: *const cudaMemcpy3DParms) -> cudaError_t }
    cudart_proxy! { fn cudaMemcpy3DAsync(p: *const cudaMemcpy3DParms, stream: cudaStream_t) -> cudaError_t }
    cudart_proxy! { fn cudaMemcpyArrayToArray(dst: *mut cudaArray, wOffsetDst: usize, hOffsetDst: usize, src: *const cudaArray, wOffsetSrc: usize, hOffsetSrc: usize, count: usize, kind: cudaMemcpyKind) -> cudaError_t }
    cudart_proxy! { fn cudaMemcpyAsync(dst: *mut c_void, src: *const c_void, count: usize, kind: cudaMemcpyKind, stream: cudaStream_t) -> cudaError_t }
    cudart_proxy! { fn cudaMemcpyFromArray(dst: *mut c_void, src: *const cudaArray, wOffset: usize, hOffset: usize, count: usize, kind: cudaMemcpyKind) -> cudaError_t }
    cudart_proxy! { fn cudaMemcpyFromArrayAsync(dst: *mut c_void, src: *const cudaArray, wOffset: usize, hOffset: usize, count: usize, kind: cudaMemcpyKind, stream: cudaStream_t) -> cudaError_t }
    cudart_proxy! { fn cudaMemcpyFromSymbol(dst: *mut c_void, symbol: *const c_char, count: usize, offset: usize, kind: cudaMemcpyKind) -> cudaError_t }
    cudart_proxy! { fn cudaMemcpyFromSymbolAsync(dst: *mut c_void, symbol: *const c_char, count: usize, offset: usize, kind: cudaMemcpyKind, stream: cudaStream_t) -> cudaError_t }
    cudart_proxy! { fn cudaMemcpyToArray(dst: *mut cudaArray, wOffset: usize, hOffset: usize, src: *const c_void, count: usize, kind: cudaMemcpyKind) -> cudaError_t }
    cudart_proxy! { fn cudaMemcpyToArrayAsync(dst: *mut cudaArray, wOffset: usize, hOffset: usize, src: *const c_void, count: usize, kind: cudaMemcpyKind, stream: cudaStream_t) -> cudaError_t }
    cudart_proxy! { fn cudaMemcpyToSymbol(symbol: *const c_char, src: *const c_void, count: usize, offset: usize, kind: cudaMemcpyKind) -> cudaError_t }
    cudart_proxy! { fn cudaMemcpyToSymbolAsync(symbol: *const c_char, src: *const c_void, count: usize, offset: usize, kind: cudaMemcpyKind, stream: cudaStream_t) -> cudaError_t }
    cudart_proxy! { fn cudaMemset(devPtr: *mut c_void, value: c_int, count: usize) -> cudaError_t }
    cudart_proxy! { fn cudaMemset2D(devPtr: *mut c_void, pitch: usize, value: c_int, width: usize, height: usize) -> cudaError_t }
    cudart_proxy! { fn cudaMemset3D(pitchedDevPtr: cudaPitchedPtr, value: c_int, extent: cudaExtent) -> cudaError_t }

    // ─── Version Management ──────────────────────────────────────────────────

    cudart_proxy! { fn cudaDriverGetVersion(driverVersion: *mut c_int) -> cudaError_t }
    cudart_proxy! { fn cudaRuntimeGetVersion(runtimeVersion: *mut c_int) -> cudaError_t }

    // ─── Thread Management (deprecated API, still exported) ──────────────────

    cudart_proxy! { fn cudaThreadExit() -> cudaError_t }
    cudart_proxy! { fn cudaThreadSynchronize() -> cudaError_t }
}
