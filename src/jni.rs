//! JNI entry points for `org.wpilib.hardware.hal.DutyCycleJNI`.
//!
//! Each export marshals the caller's primitives into the safe driver
//! wrappers and raises `UncleanStatusException` on the Java side when the
//! driver reports a non-zero status. The nominal return value of a failed
//! call is a zero the JVM discards once the exception is pending.

use std::ffi::CString;
use std::os::raw::c_void;

use jni::objects::{JClass, JObjectArray, JString};
use jni::sys::{jdouble, jint, JNI_VERSION_1_6};
use jni::{JNIEnv, JavaVM};

use crate::error::{HalError, HalResult};
use crate::hal;
use crate::handle::DutyCycleHandle;

const EXCEPTION_CLASS: &str = "org/wpilib/hardware/hal/util/UncleanStatusException";

// Frames above the first one in this package are binding glue and are
// trimmed from the allocation location reported to the driver.
const CALLER_PACKAGE: &str = "org.wpilib";

#[no_mangle]
pub extern "system" fn JNI_OnLoad(_vm: JavaVM, _reserved: *mut c_void) -> jint {
    let _ = env_logger::try_init();
    JNI_VERSION_1_6
}

#[no_mangle]
pub extern "system" fn Java_org_wpilib_hardware_hal_DutyCycleJNI_initialize<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    channel: jint,
) -> jint {
    let stack = java_stack_trace(&mut env);
    let location = CString::new(stack).unwrap_or_default();
    match hal::initialize(channel, &location) {
        Ok(handle) => handle.as_raw(),
        Err(err) => {
            throw(&mut env, &err);
            DutyCycleHandle::INVALID.as_raw()
        }
    }
}

#[no_mangle]
pub extern "system" fn Java_org_wpilib_hardware_hal_DutyCycleJNI_free<'local>(
    _env: JNIEnv<'local>,
    _class: JClass<'local>,
    handle: jint,
) {
    hal::free(DutyCycleHandle::from_raw(handle));
}

#[no_mangle]
pub extern "system" fn Java_org_wpilib_hardware_hal_DutyCycleJNI_getFrequency<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    handle: jint,
) -> jint {
    ok_or_throw(&mut env, hal::frequency(DutyCycleHandle::from_raw(handle)), 0)
}

#[no_mangle]
pub extern "system" fn Java_org_wpilib_hardware_hal_DutyCycleJNI_getOutput<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    handle: jint,
) -> jdouble {
    ok_or_throw(&mut env, hal::output(DutyCycleHandle::from_raw(handle)), 0.0)
}

#[no_mangle]
pub extern "system" fn Java_org_wpilib_hardware_hal_DutyCycleJNI_getHighTime<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    handle: jint,
) -> jint {
    ok_or_throw(&mut env, hal::high_time(DutyCycleHandle::from_raw(handle)), 0)
}

#[no_mangle]
pub extern "system" fn Java_org_wpilib_hardware_hal_DutyCycleJNI_getOutputScaleFactor<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    handle: jint,
) -> jint {
    ok_or_throw(
        &mut env,
        hal::output_scale_factor(DutyCycleHandle::from_raw(handle)),
        0,
    )
}

#[no_mangle]
pub extern "system" fn Java_org_wpilib_hardware_hal_DutyCycleJNI_getFPGAIndex<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    handle: jint,
) -> jint {
    ok_or_throw(&mut env, hal::fpga_index(DutyCycleHandle::from_raw(handle)), 0)
}

fn ok_or_throw<T>(env: &mut JNIEnv, result: HalResult<T>, fallback: T) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            throw(env, &err);
            fallback
        }
    }
}

fn throw(env: &mut JNIEnv, err: &HalError) {
    if let Err(jni_err) = env.throw_new(EXCEPTION_CLASS, err.to_string()) {
        log::error!("failed to raise {EXCEPTION_CLASS}: {jni_err}");
    }
}

fn java_stack_trace(env: &mut JNIEnv) -> String {
    match capture_stack_trace(env) {
        Ok(trace) => trace,
        Err(err) => {
            if env.exception_check().unwrap_or(false) {
                let _ = env.exception_clear();
            }
            log::warn!("could not capture Java stack trace: {err}");
            String::new()
        }
    }
}

fn capture_stack_trace(env: &mut JNIEnv) -> jni::errors::Result<String> {
    let throwable = env.new_object("java/lang/Throwable", "()V", &[])?;
    let frames: JObjectArray = env
        .call_method(
            &throwable,
            "getStackTrace",
            "()[Ljava/lang/StackTraceElement;",
            &[],
        )?
        .l()?
        .into();
    let count = env.get_array_length(&frames)?;

    let mut lines: Vec<String> = Vec::with_capacity(count as usize);
    for i in 0..count {
        let frame = env.get_object_array_element(&frames, i)?;
        let text: JString = env
            .call_method(&frame, "toString", "()Ljava/lang/String;", &[])?
            .l()?
            .into();
        lines.push(env.get_string(&text)?.into());
    }

    let first = lines
        .iter()
        .position(|line| line.starts_with(CALLER_PACKAGE))
        .unwrap_or(0);
    let mut trace = String::new();
    for line in &lines[first..] {
        trace.push_str("\tat ");
        trace.push_str(line);
        trace.push('\n');
    }
    Ok(trace)
}
