//! Safe wrappers over the duty cycle driver entry points.
//!
//! Every wrapper follows the driver's calling convention: call the entry
//! point with an out-of-band status word, then translate a non-zero status
//! into [`HalError`](crate::HalError). The backend is the native library
//! when the `wpihal` feature is enabled and a software handle table
//! otherwise.

use std::ffi::CStr;

use crate::error::{check_status, HalResult};
use crate::handle::DutyCycleHandle;

#[cfg(feature = "wpihal")]
mod ffi;
#[cfg(feature = "wpihal")]
use self::ffi as backend;

#[cfg(not(feature = "wpihal"))]
pub mod sim;
#[cfg(not(feature = "wpihal"))]
use self::sim as backend;

/// Allocates a duty cycle measurement for `channel`.
///
/// `allocation_location` is recorded by the driver's resource tracker and
/// shows up in its reports when the allocation leaks.
pub fn initialize(channel: i32, allocation_location: &CStr) -> HalResult<DutyCycleHandle> {
    let mut status = 0;
    let raw = unsafe {
        backend::HAL_InitializeDutyCycle(channel, allocation_location.as_ptr(), &mut status)
    };
    check_status(status)?;
    Ok(DutyCycleHandle::from_raw(raw))
}

/// Releases `handle`. Passing [`DutyCycleHandle::INVALID`] is a no-op.
pub fn free(handle: DutyCycleHandle) {
    if handle.is_valid() {
        unsafe { backend::HAL_FreeDutyCycle(handle.as_raw()) };
    }
}

/// Measured input frequency in hertz.
pub fn frequency(handle: DutyCycleHandle) -> HalResult<i32> {
    let mut status = 0;
    let value = unsafe { backend::HAL_GetDutyCycleFrequency(handle.as_raw(), &mut status) };
    check_status(status)?;
    Ok(value)
}

/// Duty cycle ratio of the input signal.
pub fn output(handle: DutyCycleHandle) -> HalResult<f64> {
    let mut status = 0;
    let value = unsafe { backend::HAL_GetDutyCycleOutput(handle.as_raw(), &mut status) };
    check_status(status)?;
    Ok(value)
}

/// Measured high time of the input signal in nanoseconds.
pub fn high_time(handle: DutyCycleHandle) -> HalResult<i32> {
    let mut status = 0;
    let value = unsafe { backend::HAL_GetDutyCycleHighTime(handle.as_raw(), &mut status) };
    check_status(status)?;
    Ok(value)
}

/// Fixed-point scale the driver reports raw duty cycle output in.
pub fn output_scale_factor(handle: DutyCycleHandle) -> HalResult<i32> {
    let mut status = 0;
    let value = unsafe { backend::HAL_GetDutyCycleOutputScaleFactor(handle.as_raw(), &mut status) };
    check_status(status)?;
    Ok(value)
}

/// Index of the duty cycle resource on the FPGA.
pub fn fpga_index(handle: DutyCycleHandle) -> HalResult<i32> {
    let mut status = 0;
    let value = unsafe { backend::HAL_GetDutyCycleFPGAIndex(handle.as_raw(), &mut status) };
    check_status(status)?;
    Ok(value)
}
