use std::sync::Arc;
use std::time::Instant;

use log::debug;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::math::matrix::{Dimensions, Element, Matrix};
use crate::prelude::{EngineConfig, MatrixError, MatrixResult, Multiplier};
use crate::processing::partition::{partition_operands, WorkUnit};
use crate::processing::result_buffer::ResultBuffer;
use crate::telemetry::observer::{MultiplyObserver, NoopObserver};

/// Multiplies with a fixed-size worker pool.
///
/// The pool holds exactly `max_workers` threads and is reused by every call,
/// so the number of active workers never grows with the matrix size. Each
/// work unit owns a disjoint slice of the result buffer; no lock guards the
/// numeric writes.
pub struct ParallelEngine {
    config: EngineConfig,
    pool: ThreadPool,
    observer: Arc<dyn MultiplyObserver>,
}

impl ParallelEngine {
    pub fn new(config: EngineConfig) -> MatrixResult<Self> {
        Self::with_observer(config, Arc::new(NoopObserver))
    }

    pub fn with_observer(
        config: EngineConfig,
        observer: Arc<dyn MultiplyObserver>,
    ) -> MatrixResult<Self> {
        config.validate()?;
        let pool = ThreadPoolBuilder::new()
            .num_threads(config.max_workers)
            .thread_name(|index| format!("matcore-worker-{}", index))
            .build()
            .map_err(|err| MatrixError::WorkerPool(err.to_string()))?;
        Ok(Self {
            config,
            pool,
            observer,
        })
    }

    /// Threads in the pool.
    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Computes `units` of an already validated pair on the pool and blocks
    /// until every one of them has been written.
    fn dispatch<T: Element>(
        &self,
        lhs: &Matrix<T>,
        rhs: &Matrix<T>,
        units: &[WorkUnit],
    ) -> MatrixResult<Matrix<T>> {
        let output = Dimensions::new(lhs.rows(), rhs.cols());
        let started = Instant::now();
        self.observer
            .multiplication_started(self.name(), lhs.dims(), rhs.dims());

        let mut buffer = ResultBuffer::zeroed(output);
        let assignments = buffer.assignments(units)?;
        debug!(
            "dispatching {} {} units ({} cells) over {} workers",
            assignments.len(),
            self.config.granularity,
            units.iter().map(|unit| unit.cells(output.cols)).sum::<usize>(),
            self.workers()
        );

        let (a, b) = (lhs.as_array(), rhs.as_array());
        let observer = self.observer.as_ref();
        self.pool.install(|| {
            assignments.into_par_iter().for_each(|assignment| {
                let unit = assignment.compute(a, b);
                observer.unit_completed(&unit);
            });
        });

        let result = buffer.into_matrix()?;
        self.observer
            .multiplication_finished(self.name(), output, started.elapsed());
        Ok(result)
    }
}

impl Multiplier for ParallelEngine {
    fn name(&self) -> &'static str {
        "parallel"
    }

    fn multiply<T: Element>(&self, lhs: &Matrix<T>, rhs: &Matrix<T>) -> MatrixResult<Matrix<T>> {
        let units = partition_operands(lhs, rhs, self.config.granularity)?;
        self.dispatch(lhs, rhs, &units)
    }
}

/// Multiplies with at most `max_workers` threads and the default granularity.
///
/// Shape errors are reported ahead of a zero `max_workers`. The one-off pool
/// never holds more threads than there are work units, so a bound as large
/// as the output cell count costs no more than one thread per output row.
pub fn multiply_concurrently<T: Element>(
    lhs: &Matrix<T>,
    rhs: &Matrix<T>,
    max_workers: usize,
) -> MatrixResult<Matrix<T>> {
    let config = EngineConfig::with_workers(max_workers);
    let units = partition_operands(lhs, rhs, config.granularity)?;
    config.validate()?;
    let engine = ParallelEngine::new(EngineConfig {
        max_workers: max_workers.min(units.len()),
        ..config
    })?;
    engine.dispatch(lhs, rhs, &units)
}
