//! Sensor reading paired with its setpoint
//!
//! [`SensorData`] holds a raw integer reading (for example an ADC count from
//! the sensor) and a reference value (typically read from a potentiometer
//! the operator turns to set the trip point). The alarm state is derived
//! from the two on every call and never stored, so it cannot go stale after
//! a setter runs.
//!
//! ```rust
//! use sensorwatch_core::SensorData;
//!
//! let mut data = SensorData::new(512, 600);
//! assert!(!data.alarm());
//!
//! data.set_sensor_value(601);
//! assert!(data.alarm());
//! ```

use core::fmt;
use core::hash::{Hash, Hasher};

/// Raw sensor reading, its setpoint, and the derived alarm state
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorData {
    /// Raw reading from the sensor
    sensor_value: i32,

    /// Reference value the reading is compared against
    pot_value: i32,
}

impl SensorData {
    /// Reading and setpoint together. Use `default()` for both at zero.
    pub const fn new(sensor_value: i32, pot_value: i32) -> Self {
        Self {
            sensor_value,
            pot_value,
        }
    }

    /// Current sensor reading
    pub const fn sensor_value(&self) -> i32 {
        self.sensor_value
    }

    /// Replace the sensor reading
    pub fn set_sensor_value(&mut self, value: i32) {
        let was_alarmed = self.alarm();
        self.sensor_value = value;

        if !was_alarmed && self.alarm() {
            log_trace!("Sensor reading {} crossed setpoint {}", value, self.pot_value);
        }
    }

    /// Current setpoint
    pub const fn pot_value(&self) -> i32 {
        self.pot_value
    }

    /// Replace the setpoint
    pub fn set_pot_value(&mut self, value: i32) {
        self.pot_value = value;
    }

    /// True iff the reading is strictly above the setpoint
    pub const fn alarm(&self) -> bool {
        self.sensor_value > self.pot_value
    }

    /// How far the reading sits above the setpoint (negative when below)
    pub const fn margin(&self) -> i32 {
        self.sensor_value.saturating_sub(self.pot_value)
    }
}

// Alarm is compared alongside the raw fields even though it is derived from
// them today; equality must still hold if alarm gains another input.
impl PartialEq for SensorData {
    fn eq(&self, other: &Self) -> bool {
        self.sensor_value == other.sensor_value
            && self.pot_value == other.pot_value
            && self.alarm() == other.alarm()
    }
}

impl Eq for SensorData {}

impl Hash for SensorData {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sensor_value.hash(state);
        self.pot_value.hash(state);
        self.alarm().hash(state);
    }
}

impl From<(i32, i32)> for SensorData {
    fn from((sensor_value, pot_value): (i32, i32)) -> Self {
        Self::new(sensor_value, pot_value)
    }
}

impl fmt::Display for SensorData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sensor={} pot={} alarm={}",
            self.sensor_value,
            self.pot_value,
            self.alarm()
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SensorData {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "sensor={} pot={} alarm={}",
            self.sensor_value,
            self.pot_value,
            self.alarm()
        )
    }
}
