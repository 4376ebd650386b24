/// Opaque token for a duty cycle resource tracked by the driver's handle
/// table. Carries no behavior; validity of a non-sentinel handle is owned
/// entirely by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct DutyCycleHandle(i32);

impl DutyCycleHandle {
    /// Sentinel the driver returns when allocation fails.
    pub const INVALID: DutyCycleHandle = DutyCycleHandle(0);

    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    pub const fn as_raw(self) -> i32 {
        self.0
    }

    pub const fn is_valid(self) -> bool {
        self.0 != Self::INVALID.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_not_valid() {
        assert!(!DutyCycleHandle::INVALID.is_valid());
        assert!(DutyCycleHandle::from_raw(0x1A00_0000).is_valid());
    }
}
