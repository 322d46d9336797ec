//! Error types.

use std::fmt;

use thiserror::Error;

/// Which field of an order failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// Latitude is NaN or infinite.
    NonFiniteLatitude,
    /// Longitude is NaN or infinite.
    NonFiniteLongitude,
    /// Weight is NaN or infinite.
    NonFiniteWeight,
    /// Latitude outside `[-90, 90]` or longitude outside `[-180, 180]`.
    CoordinateOutOfRange,
    /// Another order in the same input has this ID.
    DuplicateId,
    /// A required field is absent or null.
    MissingField(&'static str),
    /// A field holds something other than a number.
    NonNumericField(&'static str),
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteLatitude => f.write_str("latitude is not a finite number"),
            Self::NonFiniteLongitude => f.write_str("longitude is not a finite number"),
            Self::NonFiniteWeight => f.write_str("weight is not a finite number"),
            Self::CoordinateOutOfRange => f.write_str("coordinate out of range"),
            Self::DuplicateId => f.write_str("duplicate order id"),
            Self::MissingField(field) => write!(f, "missing field `{field}`"),
            Self::NonNumericField(field) => write!(f, "field `{field}` is not a number"),
        }
    }
}

/// Errors that abort an allocation run.
#[derive(Debug, Error)]
pub enum AllocationError {
    /// Capacity or tuning parameters are unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An order is not fully resolved.
    #[error("malformed order {order_id}: {reason}")]
    MalformedOrder {
        /// ID of the first offending order.
        order_id: i64,
        /// What was wrong with it.
        reason: MalformedReason,
    },

    /// Request or response JSON could not be processed.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AllocationError>;
