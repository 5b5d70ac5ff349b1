pub mod parallel;
pub mod partition;
pub mod result_buffer;
pub mod sequential;

pub use parallel::{multiply_concurrently, ParallelEngine};
pub use partition::{partition, partition_operands, Granularity, WorkUnit};
pub use result_buffer::{Assignment, ResultBuffer};
pub use sequential::{multiply, SequentialEngine};
