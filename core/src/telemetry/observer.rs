use std::time::Duration;

use crate::math::matrix::Dimensions;
use crate::processing::partition::WorkUnit;

/// Receives progress notifications from the engines.
///
/// Every method defaults to doing nothing. Observers are advisory: nothing
/// they do can change the result of a multiplication. `unit_completed` is
/// called from worker threads.
pub trait MultiplyObserver: Send + Sync {
    fn multiplication_started(&self, _engine: &str, _lhs: Dimensions, _rhs: Dimensions) {}

    fn unit_completed(&self, _unit: &WorkUnit) {}

    fn multiplication_finished(&self, _engine: &str, _output: Dimensions, _elapsed: Duration) {}
}

/// Default observer.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl MultiplyObserver for NoopObserver {}
