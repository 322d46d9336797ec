//! Stage 2: greedy capacitated spatial clustering.
//!
//! - [`SpatialClusterBuilder`] — builds trips one at a time from dense seeds
//! - [`select_seed`] — density-scored seed choice over a fixed-size sample
//! - [`WorkingSet`] — unassigned orders with deterministic prefix sampling

mod builder;
mod seed;
mod working_set;

pub use builder::SpatialClusterBuilder;
pub use seed::select_seed;
pub use working_set::WorkingSet;
