//! Core data structures for SensorWatch
//!
//! Small building blocks for firmware that polls a sensor and raises an
//! alarm when it passes a setpoint:
//! - [`CircularBuffer`]: fixed-capacity ring store that overwrites its oldest
//!   element when full
//! - [`MovingAverage`]: mean of the last N samples, built on the ring store
//! - [`SensorData`]: a reading, its setpoint, and the derived alarm flag
//!
//! Key constraints:
//! - Storage is allocated once at construction and never grows
//! - Every index access is bounds-checked
//! - Builds without `std` (needs `alloc`)
//!
//! ```no_run
//! use sensorwatch_core::{MovingAverage, SensorData};
//!
//! let mut filter = MovingAverage::new(4)?;
//! let mut status = SensorData::new(0, 700);
//!
//! // Feed raw ADC counts from the polling loop
//! for raw in [690, 705, 712, 720] {
//!     let smoothed = filter.add(raw as f32);
//!     status.set_sensor_value(smoothed as i32);
//!     if status.alarm() {
//!         // raise_alarm();
//!     }
//! }
//! # Ok::<(), sensorwatch_core::MonitorError>(())
//! ```

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod buffer;
pub mod constants;
pub mod errors;
pub mod moving_average;
pub mod sensor;

// Public API
pub use buffer::CircularBuffer;
pub use errors::{MonitorError, MonitorResult};
pub use moving_average::MovingAverage;
pub use sensor::SensorData;

/// Crate version, from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
