use std::sync::Mutex;
use std::time::Duration;

use crate::math::matrix::Dimensions;
use crate::processing::partition::WorkUnit;
use crate::telemetry::observer::MultiplyObserver;

/// Counts engine events. The lock only guards these counters.
pub struct MetricsRecorder {
    inner: Mutex<MetricsSnapshot>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub started: usize,
    pub finished: usize,
    pub units: usize,
    pub busy: Duration,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MetricsSnapshot::default()),
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        if let Ok(metrics) = self.inner.lock() {
            *metrics
        } else {
            MetricsSnapshot::default()
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiplyObserver for MetricsRecorder {
    fn multiplication_started(&self, _engine: &str, _lhs: Dimensions, _rhs: Dimensions) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.started += 1;
        }
    }

    fn unit_completed(&self, _unit: &WorkUnit) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.units += 1;
        }
    }

    fn multiplication_finished(&self, _engine: &str, _output: Dimensions, elapsed: Duration) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.finished += 1;
            metrics.busy += elapsed;
        }
    }
}
