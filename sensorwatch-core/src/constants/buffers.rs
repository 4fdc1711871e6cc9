//! Window and History Sizes
//!
//! Sizes tuned for microcontrollers polling a handful of analog sensors.
//! All are non-zero by construction so they can seed infallible
//! constructors such as [`MovingAverage::default`](crate::MovingAverage).

use core::num::NonZeroUsize;

const fn non_zero(value: usize) -> NonZeroUsize {
    match NonZeroUsize::new(value) {
        Some(value) => value,
        None => panic!("size constants must be non-zero"),
    }
}

// ===== MOVING AVERAGE WINDOWS =====

/// Default moving average window (samples).
///
/// At a 10Hz polling rate this smooths over 0.8s:
/// - removes ADC quantization jitter and mains pickup
/// - still reacts to a real step within one second
/// - 8 × 4 bytes = 32 bytes of sample storage
pub const DEFAULT_WINDOW_SIZE: NonZeroUsize = non_zero(8);

// ===== HISTORY BUFFERS =====

/// Default history capacity for raw readings.
///
/// - 64 samples covers about a minute at 1Hz
/// - Enough context to inspect what led up to an alarm
pub const DEFAULT_HISTORY_CAPACITY: NonZeroUsize = non_zero(64);

/// Minimal history capacity for severely constrained devices.
///
/// Keeps just enough readings to compare the newest against the recent past.
pub const MINIMAL_HISTORY_CAPACITY: NonZeroUsize = non_zero(4);
