//! Ring Buffer Inspection Example
//!
//! Shows how the circular buffer evicts old values and how logical indices
//! map onto the stored window.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_smoothing_window
//! ```

use sensorwatch_core::{CircularBuffer, MonitorError};

fn main() -> Result<(), MonitorError> {
    println!("SensorWatch Ring Buffer Example");
    println!("===============================\n");

    let mut window = CircularBuffer::new(3)?;

    for reading in [21.5_f32, 21.7, 22.0, 22.4, 23.1] {
        window.push(reading);
        println!(
            "push {:4.1} -> len={} full={} contents={:?}",
            reading,
            window.len(),
            window.is_full(),
            window.iter().collect::<Vec<_>>()
        );
    }

    println!("\nLogical indices (0 = oldest):");
    for i in 0..window.len() {
        println!("  [{}] = {:.1}", i, window.element_at(i)?);
    }

    // Apply a calibration offset in place
    for i in 0..window.len() {
        *window.element_at_mut(i)? -= 0.3;
    }
    println!("\nAfter -0.3 calibration: {:?}", window);

    match window.element_at(window.len()) {
        Ok(_) => unreachable!("index past len must be rejected"),
        Err(e) => println!("\nReading past the end: {}", e),
    }

    Ok(())
}
