//! Behavioral coverage for the driver boundary, exercised against the
//! software handle table. Each test owns its own channel numbers so the
//! process-global table stays race-free under the parallel test runner.

#![cfg(not(feature = "wpihal"))]

use std::ffi::CString;

use dutycycle_jni::hal::{self, sim};
use dutycycle_jni::{DutyCycleHandle, HalError};

fn location() -> CString {
    CString::new("duty_cycle tests").expect("static location string")
}

#[test]
fn initialize_returns_live_handle() {
    let handle = hal::initialize(0, &location()).expect("channel 0 should allocate");
    assert!(handle.is_valid());
    assert_eq!(hal::fpga_index(handle), Ok(0));
    hal::free(handle);
}

#[test]
fn initialize_rejects_out_of_range_channel() {
    assert_eq!(
        hal::initialize(99, &location()),
        Err(HalError::ResourceOutOfRange)
    );
    assert_eq!(
        hal::initialize(-1, &location()),
        Err(HalError::ResourceOutOfRange)
    );
}

#[test]
fn initialize_rejects_double_allocation() {
    let handle = hal::initialize(2, &location()).expect("first allocation");
    assert_eq!(
        hal::initialize(2, &location()),
        Err(HalError::ResourceAlreadyAllocated)
    );
    hal::free(handle);
}

#[test]
fn free_returns_channel_to_the_pool() {
    let first = hal::initialize(5, &location()).expect("first allocation");
    hal::free(first);
    let second = hal::initialize(5, &location()).expect("channel reusable after free");
    hal::free(second);
}

#[test]
fn free_of_invalid_sentinel_is_a_no_op() {
    let handle = hal::initialize(6, &location()).expect("allocation");
    hal::free(DutyCycleHandle::INVALID);
    // The live channel must be untouched by the sentinel free.
    assert_eq!(hal::fpga_index(handle), Ok(6));
    hal::free(handle);
}

#[test]
fn reads_through_a_freed_handle_report_handle_error() {
    let handle = hal::initialize(3, &location()).expect("allocation");
    hal::free(handle);
    assert_eq!(hal::frequency(handle), Err(HalError::InvalidHandle));
    assert_eq!(hal::output(handle), Err(HalError::InvalidHandle));
}

#[test]
fn reads_through_a_forged_handle_report_handle_error() {
    // Plausible index, wrong resource type tag.
    let forged = DutyCycleHandle::from_raw(7);
    assert_eq!(hal::high_time(forged), Err(HalError::InvalidHandle));
    assert_eq!(hal::output_scale_factor(forged), Err(HalError::InvalidHandle));
}

#[test]
fn measurements_pass_through_unchanged() {
    let handle = hal::initialize(4, &location()).expect("allocation");
    sim::set_frequency(4, 5_000);
    sim::set_output(4, 0.25);

    assert_eq!(hal::frequency(handle), Ok(5_000));
    assert_eq!(hal::output(handle), Ok(0.25));
    // 5 kHz -> 200 000 ns period, a quarter of which is high.
    assert_eq!(hal::high_time(handle), Ok(50_000));
    assert_eq!(hal::output_scale_factor(handle), Ok(40_000_000));
    hal::free(handle);
}

#[test]
fn high_time_is_zero_without_a_signal() {
    let handle = hal::initialize(1, &location()).expect("allocation");
    assert_eq!(hal::high_time(handle), Ok(0));
    hal::free(handle);
}
