pub mod log;
pub mod metrics;
pub mod observer;

pub use self::log::LogObserver;
pub use metrics::{MetricsRecorder, MetricsSnapshot};
pub use observer::{MultiplyObserver, NoopObserver};
