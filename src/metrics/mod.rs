//! Stage 3: metrics aggregation.

mod collector;

pub use collector::{aggregate, MetricsCollector};
