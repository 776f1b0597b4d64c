//! Conversion countdown value
//!
//! The raw representation is the integer persisted in the position's record:
//! any negative value means idle, `0` means the conversion fires on the tick
//! that observes it, and a positive value is ticks remaining.

/// Remaining ticks until conversion, or idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionTimer(i32);

impl ConversionTimer {
    /// No countdown in progress.
    pub const IDLE: Self = Self(-1);

    /// Reconstruct from a persisted raw value.
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Raw value for persistence.
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Start a fresh countdown of `ticks`.
    pub fn start(ticks: u32) -> Self {
        Self(ticks.min(i32::MAX as u32) as i32)
    }

    pub const fn is_idle(self) -> bool {
        self.0 < 0
    }

    /// Countdown complete; the conversion fires on this tick.
    pub const fn is_ready(self) -> bool {
        self.0 == 0
    }

    pub const fn is_counting(self) -> bool {
        self.0 > 0
    }

    /// One tick closer to ready. Only meaningful while counting.
    pub fn decremented(self) -> Self {
        Self(self.0 - 1)
    }
}

impl Default for ConversionTimer {
    fn default() -> Self {
        Self::IDLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_states() {
        assert!(ConversionTimer::IDLE.is_idle());
        assert!(ConversionTimer::from_raw(-5).is_idle());
        assert!(ConversionTimer::from_raw(0).is_ready());
        assert!(ConversionTimer::from_raw(1).is_counting());
        assert!(ConversionTimer::start(200).is_counting());
        assert!(ConversionTimer::start(0).is_ready());
    }

    #[test]
    fn test_decrement() {
        let t = ConversionTimer::start(2);
        assert_eq!(t.raw(), 2);
        assert_eq!(t.decremented().raw(), 1);
        assert_eq!(t.decremented().decremented().raw(), 0);
    }
}
