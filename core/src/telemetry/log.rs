use std::time::Duration;

use log::{info, trace};

use crate::math::matrix::Dimensions;
use crate::processing::partition::WorkUnit;
use crate::telemetry::observer::MultiplyObserver;

/// Observer that forwards engine progress to the `log` facade.
///
/// Call boundaries go out at `info`, individual work units at `trace`.
pub struct LogObserver;

impl LogObserver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiplyObserver for LogObserver {
    fn multiplication_started(&self, engine: &str, lhs: Dimensions, rhs: Dimensions) {
        info!("{} multiplication started: {} x {}", engine, lhs, rhs);
    }

    fn unit_completed(&self, unit: &WorkUnit) {
        trace!("computed {}", unit);
    }

    fn multiplication_finished(&self, engine: &str, output: Dimensions, elapsed: Duration) {
        info!(
            "{} multiplication completed: {} result in {:.3?}",
            engine, output, elapsed
        );
    }
}
