//! Error Types for Buffer and Filter Misuse
//!
//! ## Design Philosophy
//!
//! The data structures in this crate do pure in-memory computation, so the
//! only failures are caller mistakes that would otherwise be undefined:
//!
//! 1. **Small Size**: Every variant carries at most two `usize` fields and
//!    the enum is `Copy`, so errors can be returned from hot paths freely.
//!
//! 2. **No Heap Allocation**: No `String` payloads. The same type works on
//!    `no_std` targets.
//!
//! 3. **Fail Fast**: Misuse is reported at the call that caused it. There is
//!    no retry or recovery path anywhere in the crate.
//!
//! ## Error Categories
//!
//! - `InvalidCapacity`: a buffer or averaging window was requested with zero
//!   slots
//! - `OutOfRange`: a logical index was not below the current element count
//! - `EmptyWindow`: a mean was requested before any sample was stored
//!
//! ```rust
//! use sensorwatch_core::{CircularBuffer, MonitorError};
//!
//! let mut history = CircularBuffer::new(2).unwrap();
//! history.push(10);
//!
//! match history.element_at(5) {
//!     Ok(value) => println!("value: {}", value),
//!     Err(MonitorError::OutOfRange { index, len }) => {
//!         println!("index {} is past the {} stored readings", index, len);
//!     }
//!     Err(e) => println!("unexpected: {}", e),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for buffer and filter operations
pub type MonitorResult<T> = Result<T, MonitorError>;

/// Errors raised when a buffer or filter is used outside its contract
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorError {
    /// Capacity or window size of zero
    #[error("Invalid capacity {capacity}: must hold at least one element")]
    InvalidCapacity {
        /// The rejected capacity
        capacity: usize,
    },

    /// Logical index past the stored elements
    #[error("Index {index} out of range for {len} stored elements")]
    OutOfRange {
        /// The requested logical index
        index: usize,
        /// Number of elements stored when the request was made
        len: usize,
    },

    /// Mean requested from a window with no samples
    #[error("Moving average window holds no samples")]
    EmptyWindow,
}

#[cfg(feature = "defmt")]
impl defmt::Format for MonitorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidCapacity { capacity } =>
                defmt::write!(fmt, "Invalid capacity {}", capacity),
            Self::OutOfRange { index, len } =>
                defmt::write!(fmt, "Index {} out of range ({} stored)", index, len),
            Self::EmptyWindow =>
                defmt::write!(fmt, "Empty window"),
        }
    }
}
