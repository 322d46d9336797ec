//! Order validation and partitioning.

use std::collections::HashSet;

use tracing::debug;

use crate::config::validate_capacity;
use crate::error::{AllocationError, MalformedReason, Result};
use crate::models::{Order, Unallocatable, UnallocatableReason};

/// Orders split into those the cluster builder may place and those it never will.
#[derive(Debug, Clone, PartialEq)]
pub struct Partitioned<'a> {
    /// Orders with `0 < weight <= capacity`, sorted by ascending ID.
    pub clusterable: Vec<&'a Order>,
    /// Rejected orders with their reasons, in input order.
    pub unallocatable: Vec<Unallocatable>,
}

/// Checks that an order is fully resolved.
///
/// Weight sign is not checked here; a non-positive weight is an
/// unallocatable order, not a malformed one.
pub fn check_order(order: &Order) -> std::result::Result<(), MalformedReason> {
    if !order.latitude().is_finite() {
        return Err(MalformedReason::NonFiniteLatitude);
    }
    if !order.longitude().is_finite() {
        return Err(MalformedReason::NonFiniteLongitude);
    }
    if !order.weight_kg().is_finite() {
        return Err(MalformedReason::NonFiniteWeight);
    }
    if !order.location().is_valid() {
        return Err(MalformedReason::CoordinateOutOfRange);
    }
    Ok(())
}

/// Classifies a well-formed order against the vehicle capacity.
///
/// Returns `None` if the order can go into a trip.
pub fn classify(order: &Order, vehicle_capacity_kg: f64) -> Option<UnallocatableReason> {
    let weight_kg = order.weight_kg();
    if weight_kg <= 0.0 {
        Some(UnallocatableReason::InvalidWeight { weight_kg })
    } else if weight_kg > vehicle_capacity_kg {
        Some(UnallocatableReason::ExceedsCapacity {
            weight_kg,
            capacity_kg: vehicle_capacity_kg,
        })
    } else {
        None
    }
}

/// Validates orders and splits them into clusterable and unallocatable.
///
/// Fails with [`AllocationError::InvalidConfiguration`] if the capacity is
/// not a positive number, and with [`AllocationError::MalformedOrder`] on the
/// first order (in input order) with a non-finite or out-of-range field or a
/// repeated ID.
///
/// # Examples
///
/// ```
/// use u_allocation::models::Order;
/// use u_allocation::preprocess::preprocess_orders;
///
/// let orders = vec![
///     Order::new(2, 0.0, 0.0, 40.0),
///     Order::new(1, 0.0, 0.0, 150.0),
///     Order::new(3, 0.0, 0.0, 0.0),
///     Order::new(0, 0.0, 0.0, 100.0),
/// ];
/// let parts = preprocess_orders(&orders, 100.0).unwrap();
/// let ids: Vec<i64> = parts.clusterable.iter().map(|o| o.id()).collect();
/// assert_eq!(ids, vec![0, 2]);
/// assert_eq!(parts.unallocatable.len(), 2);
/// ```
pub fn preprocess_orders(orders: &[Order], vehicle_capacity_kg: f64) -> Result<Partitioned<'_>> {
    validate_capacity(vehicle_capacity_kg)?;

    let mut seen = HashSet::with_capacity(orders.len());
    let mut clusterable = Vec::with_capacity(orders.len());
    let mut unallocatable = Vec::new();

    for order in orders {
        let malformed = |reason: MalformedReason| AllocationError::MalformedOrder {
            order_id: order.id(),
            reason,
        };
        check_order(order).map_err(|r| malformed(r))?;
        if !seen.insert(order.id()) {
            return Err(malformed(MalformedReason::DuplicateId));
        }

        match classify(order, vehicle_capacity_kg) {
            None => clusterable.push(order),
            Some(reason) => {
                debug!(order_id = order.id(), ?reason, "order is unallocatable");
                unallocatable.push(Unallocatable::new(order.id(), reason));
            }
        }
    }

    clusterable.sort_by_key(|o| o.id());

    Ok(Partitioned {
        clusterable,
        unallocatable,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(parts: &Partitioned<'_>) -> Vec<i64> {
        parts.clusterable.iter().map(|o| o.id()).collect()
    }

    #[test]
    fn test_all_valid_sorted_by_id() {
        let orders = vec![
            Order::new(3, 12.97, 77.59, 10.0),
            Order::new(1, 12.97, 77.59, 20.0),
            Order::new(2, 12.97, 77.59, 30.0),
        ];
        let parts = preprocess_orders(&orders, 100.0).expect("valid");
        assert_eq!(ids(&parts), vec![1, 2, 3]);
        assert!(parts.unallocatable.is_empty());
    }

    #[test]
    fn test_edge_weights() {
        let orders = vec![
            Order::new(1, 12.9716, 77.5946, 0.0),
            Order::new(2, 12.9720, 77.5950, -5.0),
            Order::new(3, 12.9725, 77.5955, 100.0),
            Order::new(4, 12.9730, 77.5960, 0.5),
            Order::new(5, 12.9730, 77.5960, 100.01),
        ];
        let parts = preprocess_orders(&orders, 100.0).expect("valid");
        assert_eq!(ids(&parts), vec![3, 4]);
        assert_eq!(
            parts.unallocatable,
            vec![
                Unallocatable::new(1, UnallocatableReason::InvalidWeight { weight_kg: 0.0 }),
                Unallocatable::new(2, UnallocatableReason::InvalidWeight { weight_kg: -5.0 }),
                Unallocatable::new(
                    5,
                    UnallocatableReason::ExceedsCapacity {
                        weight_kg: 100.01,
                        capacity_kg: 100.0
                    }
                ),
            ]
        );
    }

    #[test]
    fn test_invalid_capacity() {
        let orders = vec![Order::new(1, 0.0, 0.0, 1.0)];
        for cap in [0.0, -1.0, f64::NAN] {
            assert!(matches!(
                preprocess_orders(&orders, cap),
                Err(AllocationError::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn test_malformed_names_order() {
        let orders = vec![
            Order::new(1, 0.0, 0.0, 1.0),
            Order::new(7, f64::NAN, 0.0, 1.0),
        ];
        match preprocess_orders(&orders, 100.0) {
            Err(AllocationError::MalformedOrder { order_id, reason }) => {
                assert_eq!(order_id, 7);
                assert_eq!(reason, MalformedReason::NonFiniteLatitude);
            }
            other => panic!("expected MalformedOrder, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_weight_and_range() {
        let nan_weight = vec![Order::new(4, 0.0, 0.0, f64::NAN)];
        assert!(matches!(
            preprocess_orders(&nan_weight, 100.0),
            Err(AllocationError::MalformedOrder {
                order_id: 4,
                reason: MalformedReason::NonFiniteWeight
            })
        ));

        let out_of_range = vec![Order::new(5, 0.0, 200.0, 1.0)];
        assert!(matches!(
            preprocess_orders(&out_of_range, 100.0),
            Err(AllocationError::MalformedOrder {
                order_id: 5,
                reason: MalformedReason::CoordinateOutOfRange
            })
        ));
    }

    #[test]
    fn test_duplicate_id() {
        let orders = vec![Order::new(1, 0.0, 0.0, 1.0), Order::new(1, 1.0, 1.0, 2.0)];
        assert!(matches!(
            preprocess_orders(&orders, 100.0),
            Err(AllocationError::MalformedOrder {
                order_id: 1,
                reason: MalformedReason::DuplicateId
            })
        ));
    }

    #[test]
    fn test_empty() {
        let parts = preprocess_orders(&[], 100.0).expect("valid");
        assert!(parts.clusterable.is_empty());
        assert!(parts.unallocatable.is_empty());
    }

    #[test]
    fn test_deterministic() {
        let orders = vec![
            Order::new(9, 1.0, 1.0, 50.0),
            Order::new(4, 2.0, 2.0, 500.0),
            Order::new(6, 3.0, 3.0, 5.0),
        ];
        let a = preprocess_orders(&orders, 100.0).expect("valid");
        let b = preprocess_orders(&orders, 100.0).expect("valid");
        assert_eq!(a, b);
    }
}
