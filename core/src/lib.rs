//! Dense matrix multiplication core.
//!
//! Matrices are validated when constructed and again as a pair before any
//! arithmetic starts. Products come from either the sequential reference
//! engine or the parallel engine, which splits the output into disjoint
//! work units and runs them on a fixed-size worker pool.

pub mod ingest;
pub mod math;
pub mod prelude;
pub mod processing;
pub mod telemetry;

pub use math::{transpose, validate_operands, Dimensions, Element, Matrix};
pub use prelude::{EngineConfig, MatrixError, MatrixResult, Multiplier, Operand};
pub use processing::{
    multiply, multiply_concurrently, Granularity, ParallelEngine, SequentialEngine, WorkUnit,
};
