//! Bounded buffer of inter-event time deltas
//!
//! Samples are stored oldest first. The buffer never holds more than its
//! capacity; appending past it drops entries from the front so the buffer always
//! describes the most recent window of activity.

/// Ordered, bounded sequence of deltas in milliseconds
#[derive(Debug, Clone, Default)]
pub struct SampleBuffer {
    samples: Vec<f64>,
    capacity: usize,
}

impl SampleBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, discarding the oldest ones if the buffer is full
    pub fn push(&mut self, delta_ms: f64) {
        self.samples.push(delta_ms);
        self.trim_front();
    }

    /// Change the bound; shrinking drops from the front
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        self.trim_front();
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    /// Arithmetic mean, 0 for an empty buffer
    pub fn mean(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().sum::<f64>() / self.samples.len() as f64
    }

    /// Largest sample, `None` for an empty buffer
    pub fn max(&self) -> Option<f64> {
        self.samples.iter().copied().reduce(f64::max)
    }

    fn trim_front(&mut self) {
        if self.samples.len() > self.capacity {
            let excess = self.samples.len() - self.capacity;
            self.samples.drain(..excess);
        }
    }
}
