//! Dense dynamic-programming table for Held-Karp.
//!
//! Entries are addressed by `(mask, city)` where `mask` always contains the
//! origin and `city` is a non-origin member of `mask`. Since the origin bit
//! is fixed and the origin is never an endpoint, storage is
//! `2^(n-1) × (n-1)` slots addressed by `(mask >> 1, city - 1)`.
//!
//! Costs and predecessors are kept in parallel arrays. A predecessor of
//! [`UNSET`] marks a slot that has not been written yet.

use std::mem::size_of;

use crate::error::{Error, Result};

use super::subsets::ORIGIN_BIT;

/// Predecessor sentinel for unpopulated slots.
const UNSET: u8 = u8::MAX;

/// Number of slots a table for `cities` cities holds, or `None` on overflow.
fn slot_count(cities: usize) -> Option<usize> {
    let free = cities.checked_sub(1)?;
    let rows = 1usize.checked_shl(u32::try_from(free).ok()?)?;
    rows.checked_mul(free)
}

/// Bytes reserved by the DP table when solving `cities` cities.
///
/// Returns `None` if the size does not fit in `usize`.
///
/// # Examples
///
/// ```
/// use u_held_karp::exact::estimate_table_bytes;
///
/// // 2^3 masks × 3 endpoints × (8-byte cost + 1-byte predecessor)
/// assert_eq!(estimate_table_bytes(4), Some(216));
/// ```
pub fn estimate_table_bytes(cities: usize) -> Option<usize> {
    slot_count(cities)?.checked_mul(size_of::<f64>() + size_of::<u8>())
}

/// Write-once `(mask, city) -> (cost, predecessor)` table.
#[derive(Debug)]
pub(crate) struct DpTable {
    cities: usize,
    costs: Vec<f64>,
    parents: Vec<u8>,
}

impl DpTable {
    /// Reserves a table for `cities` cities with every slot unpopulated.
    pub(crate) fn new(cities: usize) -> Result<Self> {
        if cities < 2 || cities >= usize::BITS as usize {
            return Err(Error::internal(format!(
                "DP table requested for {cities} cities"
            )));
        }
        let bytes = estimate_table_bytes(cities).unwrap_or(usize::MAX);
        let slots = slot_count(cities).ok_or(Error::Allocation { cities, bytes })?;

        let mut costs = Vec::new();
        let mut parents = Vec::new();
        costs
            .try_reserve_exact(slots)
            .and_then(|()| parents.try_reserve_exact(slots))
            .map_err(|_| Error::Allocation { cities, bytes })?;
        costs.resize(slots, f64::INFINITY);
        parents.resize(slots, UNSET);

        Ok(Self {
            cities,
            costs,
            parents,
        })
    }

    /// Number of slots in the table.
    pub(crate) fn len(&self) -> usize {
        self.costs.len()
    }

    fn slot(&self, mask: usize, city: usize) -> Result<usize> {
        let in_range = mask & ORIGIN_BIT != 0
            && city != 0
            && city < self.cities
            && mask >> self.cities == 0
            && mask & (1 << city) != 0;
        if !in_range {
            return Err(Error::internal(format!(
                "invalid DP key (mask {mask:#b}, city {city})"
            )));
        }
        Ok((mask >> 1) * (self.cities - 1) + (city - 1))
    }

    /// Returns `(cost, predecessor)` stored at `(mask, city)`.
    ///
    /// Reading a slot that was never written is an internal error.
    pub(crate) fn get(&self, mask: usize, city: usize) -> Result<(f64, usize)> {
        let slot = self.slot(mask, city)?;
        match self.parents[slot] {
            UNSET => Err(Error::internal(format!(
                "DP entry (mask {mask:#b}, city {city}) read before it was written"
            ))),
            parent => Ok((self.costs[slot], usize::from(parent))),
        }
    }

    /// Stores `(cost, predecessor)` at `(mask, city)`.
    ///
    /// Each slot may be written once; the predecessor must be a member of
    /// `mask` other than `city`.
    pub(crate) fn insert(
        &mut self,
        mask: usize,
        city: usize,
        cost: f64,
        parent: usize,
    ) -> Result<()> {
        let slot = self.slot(mask, city)?;
        if self.parents[slot] != UNSET {
            return Err(Error::internal(format!(
                "DP entry (mask {mask:#b}, city {city}) written twice"
            )));
        }
        if parent == city || parent >= self.cities || mask & (1 << parent) == 0 {
            return Err(Error::internal(format!(
                "predecessor {parent} is not in mask {mask:#b} without {city}"
            )));
        }
        // parent < cities < usize::BITS, so it fits below UNSET
        self.parents[slot] = parent as u8;
        self.costs[slot] = cost;
        Ok(())
    }
}
