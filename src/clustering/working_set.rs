//! Unassigned-order working set with deterministic sampling.

use crate::models::Order;

/// Orders still waiting for a trip.
///
/// Orders are kept in ascending ID order and never reordered. Unassigned
/// orders are threaded on a doubly linked list of indices, so placing an
/// order is O(1) and a sample walks only unassigned orders. Samples are the
/// first `k` unassigned orders in ID order, so they depend on nothing but
/// the input.
#[derive(Debug, Clone)]
pub struct WorkingSet<'a> {
    orders: Vec<&'a Order>,
    next: Vec<Option<usize>>,
    prev: Vec<Option<usize>>,
    assigned: Vec<bool>,
    head: Option<usize>,
    remaining: usize,
}

impl<'a> WorkingSet<'a> {
    /// Creates a working set with every order unassigned.
    pub fn new(orders: &[&'a Order]) -> Self {
        let mut orders = orders.to_vec();
        orders.sort_by_key(|o| o.id());
        let n = orders.len();
        Self {
            orders,
            next: (1..=n).map(|i| (i < n).then_some(i)).collect(),
            prev: (0..n).map(|i| i.checked_sub(1)).collect(),
            assigned: vec![false; n],
            head: (n > 0).then_some(0),
            remaining: n,
        }
    }

    /// Total number of orders, assigned or not. Indices run `0..len()`.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Number of unassigned orders.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Returns `true` once every order has been placed.
    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// Order at a working-set index.
    pub fn order(&self, idx: usize) -> &'a Order {
        self.orders[idx]
    }

    /// Returns `true` if the order at `idx` is still unassigned.
    pub fn is_open(&self, idx: usize) -> bool {
        !self.assigned[idx]
    }

    /// Indices of the unassigned orders in ascending ID order.
    pub fn open_indices(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(self.head, move |&i| self.next[i])
    }

    /// Indices of the first `k` unassigned orders for which `keep` holds,
    /// in ascending ID order. Returns all of them if fewer than `k` qualify.
    ///
    /// `keep` is only consulted for unassigned orders.
    pub fn sample_where<F>(&self, k: usize, mut keep: F) -> Vec<usize>
    where
        F: FnMut(usize) -> bool,
    {
        self.open_indices().filter(|&i| keep(i)).take(k).collect()
    }

    /// Indices of the first `k` unassigned orders.
    pub fn sample(&self, k: usize) -> Vec<usize> {
        self.open_indices().take(k).collect()
    }

    /// Marks the order at `idx` as placed.
    pub fn remove(&mut self, idx: usize) {
        if self.assigned[idx] {
            return;
        }
        self.assigned[idx] = true;
        self.remaining -= 1;

        let (prev, next) = (self.prev[idx], self.next[idx]);
        match prev {
            Some(p) => self.next[p] = next,
            None => self.head = next,
        }
        if let Some(n) = next {
            self.prev[n] = prev;
        }
    }
}
