//! Status-to-error translation for the duty cycle driver.
//!
//! The driver reports failure through an out-of-band status integer. This
//! module owns the crate's single error type and the one translation point,
//! [`check_status`], that every wrapper funnels through.

use thiserror::Error;

/// Status codes used by the native duty cycle driver.
pub mod status {
    pub const OK: i32 = 0;
    pub const NO_AVAILABLE_RESOURCES: i32 = -104;
    pub const RESOURCE_IS_ALLOCATED: i32 = -1025;
    pub const RESOURCE_OUT_OF_RANGE: i32 = -1029;
    pub const HAL_HANDLE_ERROR: i32 = -1098;
}

/// Convenience alias for results at the driver boundary.
pub type HalResult<T> = std::result::Result<T, HalError>;

/// Error raised when a driver entry point reports a non-zero status.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalError {
    #[error("no available resources to allocate (status {})", status::NO_AVAILABLE_RESOURCES)]
    NoAvailableResources,

    #[error("resource is already allocated (status {})", status::RESOURCE_IS_ALLOCATED)]
    ResourceAlreadyAllocated,

    #[error("requested resource is out of range (status {})", status::RESOURCE_OUT_OF_RANGE)]
    ResourceOutOfRange,

    #[error("handle does not name a live duty cycle resource (status {})", status::HAL_HANDLE_ERROR)]
    InvalidHandle,

    #[error("duty cycle driver returned status {0}")]
    Other(i32),
}

impl HalError {
    /// Raw status code as reported by the driver.
    pub fn code(&self) -> i32 {
        match self {
            HalError::NoAvailableResources => status::NO_AVAILABLE_RESOURCES,
            HalError::ResourceAlreadyAllocated => status::RESOURCE_IS_ALLOCATED,
            HalError::ResourceOutOfRange => status::RESOURCE_OUT_OF_RANGE,
            HalError::InvalidHandle => status::HAL_HANDLE_ERROR,
            HalError::Other(code) => *code,
        }
    }

    fn from_status(code: i32) -> HalError {
        match code {
            status::NO_AVAILABLE_RESOURCES => HalError::NoAvailableResources,
            status::RESOURCE_IS_ALLOCATED => HalError::ResourceAlreadyAllocated,
            status::RESOURCE_OUT_OF_RANGE => HalError::ResourceOutOfRange,
            status::HAL_HANDLE_ERROR => HalError::InvalidHandle,
            _ => HalError::Other(code),
        }
    }
}

/// Translates an out-of-band driver status into a `Result`.
pub fn check_status(code: i32) -> HalResult<()> {
    if code == status::OK {
        Ok(())
    } else {
        Err(HalError::from_status(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_status_is_ok() {
        assert!(check_status(status::OK).is_ok());
    }

    #[test]
    fn known_codes_map_to_named_errors() {
        let err = check_status(status::HAL_HANDLE_ERROR).unwrap_err();
        assert_eq!(err, HalError::InvalidHandle);
        assert_eq!(err.code(), status::HAL_HANDLE_ERROR);
        assert!(err.to_string().contains("-1098"));
    }

    #[test]
    fn unknown_codes_keep_their_status() {
        let err = check_status(-9999).unwrap_err();
        assert_eq!(err, HalError::Other(-9999));
        assert_eq!(err.to_string(), "duty cycle driver returned status -9999");
        assert_eq!(err.code(), -9999);
    }
}
