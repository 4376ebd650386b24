//! Software stand-in for the native duty cycle driver.
//!
//! Reproduces the driver's observable behavior at the call boundary:
//! handles encode a resource type tag and a channel index, and every entry
//! point reports failure through the same out-of-band status convention.
//! Readings are injected through [`set_frequency`] and [`set_output`];
//! nothing here measures anything.

#![allow(non_snake_case)]

use std::os::raw::c_char;
use std::sync::{Mutex, MutexGuard, PoisonError};

use once_cell::sync::Lazy;

use crate::error::status as codes;

// Handle layout used by the native driver: resource type tag in the upper
// byte, channel index in the low sixteen bits.
const HANDLE_TYPE_DUTY_CYCLE: i32 = 26;
const HANDLE_TYPE_SHIFT: u32 = 24;
const HANDLE_INDEX_MASK: i32 = 0xFFFF;

// Fixed-point scale the driver reports raw duty cycle output in.
const OUTPUT_SCALE_FACTOR: i32 = 40_000_000;

static NUM_CHANNELS: Lazy<usize> = Lazy::new(|| {
    std::env::var("DUTYCYCLE_SIM_CHANNELS")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(8)
});

#[derive(Debug, Default, Clone, Copy)]
struct Channel {
    initialized: bool,
    frequency: i32,
    output: f64,
}

static CHANNELS: Lazy<Mutex<Vec<Channel>>> =
    Lazy::new(|| Mutex::new(vec![Channel::default(); *NUM_CHANNELS]));

fn table() -> MutexGuard<'static, Vec<Channel>> {
    CHANNELS.lock().unwrap_or_else(PoisonError::into_inner)
}

fn encode(index: usize) -> i32 {
    (HANDLE_TYPE_DUTY_CYCLE << HANDLE_TYPE_SHIFT) | index as i32
}

fn decode(handle: i32) -> Option<usize> {
    if handle >> HANDLE_TYPE_SHIFT != HANDLE_TYPE_DUTY_CYCLE {
        return None;
    }
    let index = (handle & HANDLE_INDEX_MASK) as usize;
    (index < *NUM_CHANNELS).then_some(index)
}

fn live_index(handle: i32) -> Option<usize> {
    let channels = table();
    decode(handle).filter(|&index| channels[index].initialized)
}

fn entry(handle: i32) -> Option<Channel> {
    let channels = table();
    decode(handle)
        .filter(|&index| channels[index].initialized)
        .map(|index| channels[index])
}

pub unsafe extern "C" fn HAL_InitializeDutyCycle(
    channel: i32,
    _allocation_location: *const c_char,
    status: *mut i32,
) -> i32 {
    let mut channels = table();
    let index = match usize::try_from(channel).ok().filter(|&i| i < channels.len()) {
        Some(index) => index,
        None => {
            *status = codes::RESOURCE_OUT_OF_RANGE;
            return 0;
        }
    };
    if channels[index].initialized {
        *status = codes::RESOURCE_IS_ALLOCATED;
        return 0;
    }
    channels[index].initialized = true;
    *status = codes::OK;
    encode(index)
}

pub unsafe extern "C" fn HAL_FreeDutyCycle(handle: i32) {
    if let Some(index) = decode(handle) {
        table()[index] = Channel::default();
    }
}

pub unsafe extern "C" fn HAL_GetDutyCycleFrequency(handle: i32, status: *mut i32) -> i32 {
    match entry(handle) {
        Some(channel) => {
            *status = codes::OK;
            channel.frequency
        }
        None => {
            *status = codes::HAL_HANDLE_ERROR;
            0
        }
    }
}

pub unsafe extern "C" fn HAL_GetDutyCycleOutput(handle: i32, status: *mut i32) -> f64 {
    match entry(handle) {
        Some(channel) => {
            *status = codes::OK;
            channel.output
        }
        None => {
            *status = codes::HAL_HANDLE_ERROR;
            0.0
        }
    }
}

pub unsafe extern "C" fn HAL_GetDutyCycleHighTime(handle: i32, status: *mut i32) -> i32 {
    match entry(handle) {
        Some(channel) => {
            *status = codes::OK;
            if channel.frequency > 0 {
                let period_ns = 1e9 / f64::from(channel.frequency);
                (channel.output * period_ns) as i32
            } else {
                0
            }
        }
        None => {
            *status = codes::HAL_HANDLE_ERROR;
            0
        }
    }
}

pub unsafe extern "C" fn HAL_GetDutyCycleOutputScaleFactor(handle: i32, status: *mut i32) -> i32 {
    match live_index(handle) {
        Some(_) => {
            *status = codes::OK;
            OUTPUT_SCALE_FACTOR
        }
        None => {
            *status = codes::HAL_HANDLE_ERROR;
            0
        }
    }
}

pub unsafe extern "C" fn HAL_GetDutyCycleFPGAIndex(handle: i32, status: *mut i32) -> i32 {
    match live_index(handle) {
        Some(index) => {
            *status = codes::OK;
            index as i32
        }
        None => {
            *status = codes::HAL_HANDLE_ERROR;
            0
        }
    }
}

/// Injects the frequency reported for `channel`, in hertz.
///
/// Takes effect whether or not the channel is currently allocated; freeing
/// a channel resets its readings.
pub fn set_frequency(channel: usize, hz: i32) {
    let mut channels = table();
    if let Some(entry) = channels.get_mut(channel) {
        entry.frequency = hz;
    }
}

/// Injects the duty cycle ratio reported for `channel`.
pub fn set_output(channel: usize, ratio: f64) {
    let mut channels = table();
    if let Some(entry) = channels.get_mut(channel) {
        entry.output = ratio;
    }
}
