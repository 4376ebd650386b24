//! Raw declarations of the native duty cycle driver entry points.

#![allow(non_snake_case)]

use std::os::raw::c_char;

#[link(name = "wpiHal")]
extern "C" {
    pub fn HAL_InitializeDutyCycle(
        channel: i32,
        allocation_location: *const c_char,
        status: *mut i32,
    ) -> i32;
    pub fn HAL_FreeDutyCycle(handle: i32);
    pub fn HAL_GetDutyCycleFrequency(handle: i32, status: *mut i32) -> i32;
    pub fn HAL_GetDutyCycleOutput(handle: i32, status: *mut i32) -> f64;
    pub fn HAL_GetDutyCycleHighTime(handle: i32, status: *mut i32) -> i32;
    pub fn HAL_GetDutyCycleOutputScaleFactor(handle: i32, status: *mut i32) -> i32;
    pub fn HAL_GetDutyCycleFPGAIndex(handle: i32, status: *mut i32) -> i32;
}
