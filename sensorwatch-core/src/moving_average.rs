//! Simple moving average over a fixed window of samples
//!
//! Built on [`CircularBuffer`]: each new sample evicts the oldest one once
//! the window is full. The mean is recomputed from every stored sample on
//! each call rather than maintained as a running sum, so the result never
//! carries accumulated floating-point drift from samples that have already
//! left the window. Windows are small on the targets this runs on, so the
//! O(window) cost per sample is acceptable.

use core::num::NonZeroUsize;

use crate::buffer::{CircularBuffer, Iter};
use crate::constants::DEFAULT_WINDOW_SIZE;
use crate::errors::{MonitorError, MonitorResult};

/// Arithmetic mean of the most recent `window_size` samples
#[derive(Debug, Clone)]
pub struct MovingAverage {
    samples: CircularBuffer<f32>,
}

impl MovingAverage {
    /// Create a new moving average filter
    ///
    /// # Arguments
    /// * `window_size` - Number of samples to average (larger = smoother but slower response)
    ///
    /// A window of zero fails with [`MonitorError::InvalidCapacity`].
    pub fn new(window_size: usize) -> MonitorResult<Self> {
        Ok(Self {
            samples: CircularBuffer::new(window_size)?,
        })
    }

    /// Create a filter from a window size already known to be non-zero
    pub fn with_window(window_size: NonZeroUsize) -> Self {
        Self {
            samples: CircularBuffer::with_capacity(window_size),
        }
    }

    /// Add a new value and return the updated average
    ///
    /// ```rust
    /// # use sensorwatch_core::MovingAverage;
    /// let mut ma = MovingAverage::new(3).unwrap();
    ///
    /// assert_eq!(ma.add(1.0), 1.0);
    /// assert_eq!(ma.add(2.0), 1.5);
    /// assert_eq!(ma.add(3.0), 2.0);
    /// assert_eq!(ma.add(4.0), 3.0); // (2+3+4)/3, the 1.0 was evicted
    /// ```
    pub fn add(&mut self, value: f32) -> f32 {
        self.samples.push(value);

        // The window is never empty right after a push
        self.mean_of_samples()
    }

    /// Current average without adding a new value
    ///
    /// Fails with [`MonitorError::EmptyWindow`] before the first sample.
    pub fn average(&self) -> MonitorResult<f32> {
        if self.samples.is_empty() {
            return Err(MonitorError::EmptyWindow);
        }

        Ok(self.mean_of_samples())
    }

    /// Number of samples the window holds when full
    pub fn window_size(&self) -> usize {
        self.samples.capacity()
    }

    /// Number of samples currently in the window
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True before the first sample (or after [`MovingAverage::clear`])
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// True once `window_size` samples have been added
    pub fn is_full(&self) -> bool {
        self.samples.is_full()
    }

    /// Samples in the window, oldest first
    pub fn samples(&self) -> Iter<'_, f32> {
        self.samples.iter()
    }

    /// Forget every sample, keeping the window size
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    fn mean_of_samples(&self) -> f32 {
        let sum: f32 = self.samples.iter().sum();
        sum / self.samples.len() as f32
    }
}

impl Default for MovingAverage {
    fn default() -> Self {
        Self::with_window(DEFAULT_WINDOW_SIZE)
    }
}
