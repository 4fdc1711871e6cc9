//! Constants for SensorWatch Core
//!
//! Compile-time defaults for the buffer and filter types. There is no
//! runtime configuration; firmware picks sizes here or passes its own to
//! the constructors.
//!
//! ## Usage Guidelines
//!
//! 1. Use these constants instead of magic numbers
//! 2. Document where a size comes from when adding one
//! 3. Include units in names where they apply

/// Window and history sizes for embedded targets.
pub mod buffers;

pub use buffers::{
    DEFAULT_WINDOW_SIZE, DEFAULT_HISTORY_CAPACITY, MINIMAL_HISTORY_CAPACITY,
};
