//! Timing sampler
//!
//! Turns the raw, bursty stream of pointer-move events into a bounded series of
//! inter-event deltas plus a running average. A delta is recorded only when it
//! falls inside the acceptance window `(0, window]`; anything else is dropped, but
//! the last timestamp always advances to the current event so the next delta is
//! measured against it.

use crate::draw::Point;
use crate::sample_buffer::SampleBuffer;
use tracing::trace;

/// Default upper bound of the acceptance window in milliseconds
pub const DEFAULT_ACCEPTANCE_WINDOW_MS: f64 = 100.0;

/// What happened to a single move event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    /// No previous timestamp to measure against (first event, or first after reset)
    First,
    /// Delta recorded in the sample buffer
    Accepted { delta_ms: f64 },
    /// Delta outside the acceptance window, not recorded
    Rejected { delta_ms: f64 },
}

impl MoveOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted { .. })
    }
}

/// Read-only view of the sampler handed to consumers
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SamplerSnapshot {
    pub average_delta_ms: f64,
    pub frequency_hz: f64,
    pub count: usize,
    pub position: Point,
    pub elapsed_ms: f64,
}

#[derive(Debug, Clone)]
pub struct TimingSampler {
    buffer: SampleBuffer,
    acceptance_window_ms: f64,
    last_timestamp_ms: Option<f64>,
    elapsed_ms: f64,
    position: Point,
    average_delta_ms: f64,
    frequency_hz: f64,
}

impl TimingSampler {
    /// Create a sampler whose buffer holds at most `capacity` samples
    pub fn new(capacity: usize, acceptance_window_ms: f64) -> Self {
        Self {
            buffer: SampleBuffer::with_capacity(capacity),
            acceptance_window_ms,
            last_timestamp_ms: None,
            elapsed_ms: 0.0,
            position: Point::default(),
            average_delta_ms: 0.0,
            frequency_hz: 0.0,
        }
    }

    /// Feed one pointer-move event
    pub fn on_move(&mut self, timestamp_ms: f64, position: Point) -> MoveOutcome {
        self.position = position;

        let previous = self.last_timestamp_ms.replace(timestamp_ms);
        let Some(previous) = previous else {
            return MoveOutcome::First;
        };

        let delta_ms = timestamp_ms - previous;
        if !(delta_ms > 0.0 && delta_ms <= self.acceptance_window_ms) {
            trace!(delta_ms, "delta outside acceptance window");
            return MoveOutcome::Rejected { delta_ms };
        }

        self.elapsed_ms += delta_ms;
        self.buffer.push(delta_ms);
        self.recompute();
        MoveOutcome::Accepted { delta_ms }
    }

    /// Back to the initial state: empty buffer, no last timestamp, zero elapsed time
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.last_timestamp_ms = None;
        self.elapsed_ms = 0.0;
        self.position = Point::default();
        self.average_delta_ms = 0.0;
        self.frequency_hz = 0.0;
    }

    /// Re-bound the buffer, typically after the chart changed width
    pub fn set_capacity(&mut self, capacity: usize) {
        self.buffer.set_capacity(capacity);
        self.recompute();
    }

    pub fn samples(&self) -> &[f64] {
        self.buffer.as_slice()
    }

    pub fn count(&self) -> usize {
        self.buffer.len()
    }

    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    pub fn average_delta_ms(&self) -> f64 {
        self.average_delta_ms
    }

    pub fn frequency_hz(&self) -> f64 {
        self.frequency_hz
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn last_timestamp_ms(&self) -> Option<f64> {
        self.last_timestamp_ms
    }

    pub fn snapshot(&self) -> SamplerSnapshot {
        SamplerSnapshot {
            average_delta_ms: self.average_delta_ms,
            frequency_hz: self.frequency_hz,
            count: self.buffer.len(),
            position: self.position,
            elapsed_ms: self.elapsed_ms,
        }
    }

    fn recompute(&mut self) {
        self.average_delta_ms = self.buffer.mean();
        self.frequency_hz = if self.average_delta_ms > 0.0 { 1000.0 / self.average_delta_ms } else { 0.0 };
    }
}
