//! Duty cycle sensor bindings for the JVM.
//!
//! The measurement itself (FPGA sampling, frequency and period computation)
//! lives in the native duty cycle driver. This crate is the boundary in
//! front of it: safe wrappers translate the driver's out-of-band status
//! codes into [`HalError`], and the `org.wpilib.hardware.hal.DutyCycleJNI`
//! entry points surface those errors as Java exceptions while marshalling
//! the opaque [`DutyCycleHandle`] token back and forth.
//!
//! The native driver is linked when the `wpihal` feature is enabled; the
//! default build routes the same entry points to a software handle table so
//! desktop callers and tests run without the hardware.

pub mod error;
pub mod hal;
mod handle;
pub mod jni;

pub use error::{check_status, HalError, HalResult};
pub use handle::DutyCycleHandle;
