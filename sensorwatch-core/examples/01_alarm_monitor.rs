//! Alarm Monitoring Example
//!
//! Smooths simulated potentiometer-referenced sensor readings and reports
//! when the reading crosses the setpoint.
//!
//! ## What You'll Learn
//!
//! - Building a moving average filter for noisy readings
//! - Tracking a reading and its setpoint with `SensorData`
//! - Reacting to alarm transitions instead of raw threshold checks
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_alarm_monitor
//! ```

use sensorwatch_core::{MonitorError, MovingAverage, SensorData};

/// Setpoint read from the potentiometer (10-bit ADC counts)
const POT_SETPOINT: i32 = 640;

/// Samples averaged before comparing against the setpoint
const WINDOW: usize = 4;

fn main() -> Result<(), MonitorError> {
    println!("SensorWatch Alarm Monitor Example");
    println!("=================================\n");

    let mut filter = MovingAverage::new(WINDOW)?;
    let mut status = SensorData::new(0, POT_SETPOINT);

    // A reading that rises, spikes once, then settles back down
    let raw_readings = [
        610, 615, 622, 630, 900, 636, 641, 648, 655, 650, 638, 625, 612,
    ];

    println!("Setpoint: {} counts, window: {} samples\n", POT_SETPOINT, WINDOW);

    for (tick, raw) in raw_readings.iter().enumerate() {
        let was_alarmed = status.alarm();
        let smoothed = filter.add(*raw as f32);
        status.set_sensor_value(smoothed.round() as i32);

        print!("t={:2} raw={:4} smoothed={:7.2} ", tick, raw, smoothed);

        match (was_alarmed, status.alarm()) {
            (false, true) => println!("ALARM RAISED ({:+} over setpoint)", status.margin()),
            (true, false) => println!("alarm cleared"),
            (true, true) => println!("alarm"),
            (false, false) => println!("ok"),
        }
    }

    println!("\nFinal state: {}", status);

    println!("\n{}", "=".repeat(60));
    println!("Key Insights:");
    println!("- The single 900-count spike is diluted across the window");
    println!("- The alarm flag is always derived from the current values");

    Ok(())
}
