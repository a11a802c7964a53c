//! Held-Karp exact TSP solver.
//!
//! # Algorithm
//!
//! `DP[S, k]` is the cheapest path that starts at the origin, visits exactly
//! the cities in `S` and ends at `k`:
//!
//! ```text
//! DP[{0, k}, k] = d(0, k)
//! DP[S, k]      = min over m in S \ {0, k} of DP[S \ {k}, m] + d(m, k)
//! OPT           = min over k of DP[all, k] + d(k, 0)
//! ```
//!
//! Subsets are filled in increasing cardinality, since each entry reads
//! only entries one city smaller. The tour is recovered by following the
//! stored predecessors back from the best closing city.
//!
//! Among equal-cost predecessors the lowest city index wins.
//!
//! # Complexity
//!
//! O(n²·2ⁿ) time, O(n·2ⁿ) memory. Practical up to about 20-22 cities.
//!
//! # Reference
//!
//! Held, M. & Karp, R.M. (1962). "A dynamic programming approach to
//! sequencing problems", *Journal of SIAM* 10(1), 196-210.

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::models::{Tour, ORIGIN};

use super::subsets::{full_mask, members, SubsetMasks};
use super::table::{estimate_table_bytes, DpTable};

/// Largest instance the solver accepts regardless of configuration.
pub const MAX_SUPPORTED_CITIES: usize = 30;

/// Default city limit. A 20-city table takes about 90 MB.
pub const DEFAULT_MAX_CITIES: usize = 20;

/// Held-Karp solver configuration.
///
/// # Examples
///
/// ```
/// use u_held_karp::exact::HeldKarpConfig;
///
/// let config = HeldKarpConfig::default().with_max_cities(12);
/// assert_eq!(config.max_cities, 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKarpConfig {
    /// Instances with more cities are rejected before any allocation.
    /// Values above [`MAX_SUPPORTED_CITIES`] are capped to it.
    pub max_cities: usize,
}

impl Default for HeldKarpConfig {
    fn default() -> Self {
        Self {
            max_cities: DEFAULT_MAX_CITIES,
        }
    }
}

impl HeldKarpConfig {
    /// Sets the city limit.
    pub fn with_max_cities(mut self, max_cities: usize) -> Self {
        self.max_cities = max_cities;
        self
    }

    /// Effective city limit after applying the hard ceiling.
    pub fn city_limit(&self) -> usize {
        self.max_cities.min(MAX_SUPPORTED_CITIES)
    }
}

/// Exact TSP solver over a dense cost matrix.
///
/// # Examples
///
/// ```
/// use u_held_karp::distance::DistanceMatrix;
/// use u_held_karp::exact::{HeldKarp, HeldKarpConfig};
///
/// let dm = DistanceMatrix::from_rows(&[
///     [0, 10, 15, 20],
///     [10, 0, 35, 25],
///     [15, 35, 0, 30],
///     [20, 25, 30, 0],
/// ])
/// .unwrap();
///
/// let solver = HeldKarp::with_config(HeldKarpConfig::default().with_max_cities(8));
/// let tour = solver.solve(&dm).unwrap();
/// assert_eq!(tour.cost(), 80.0);
/// assert_eq!(dm.tour_cost(tour.path()), 80.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HeldKarp {
    config: HeldKarpConfig,
}

impl HeldKarp {
    /// Creates a solver with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solver with a custom configuration.
    pub fn with_config(config: HeldKarpConfig) -> Self {
        Self { config }
    }

    /// The solver configuration.
    pub fn config(&self) -> &HeldKarpConfig {
        &self.config
    }

    /// Computes a minimum-cost tour starting and ending at city 0.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInput`] for an empty or malformed matrix
    /// - [`Error::TooManyCities`] above the configured limit
    /// - [`Error::Allocation`] if the DP table cannot be reserved
    /// - [`Error::Overflow`] if finite weights sum past the `f64` range
    /// - [`Error::Infeasible`] if every tour uses an infinite edge
    /// - [`Error::Internal`] if a DP invariant is broken
    pub fn solve(&self, distances: &DistanceMatrix) -> Result<Tour> {
        let n = distances.size();
        if n == 0 {
            return Err(Error::invalid_input("cost matrix has zero cities"));
        }
        distances.validate()?;
        let limit = self.config.city_limit();
        if n > limit {
            return Err(Error::TooManyCities { cities: n, limit });
        }
        if n == 1 {
            return Ok(Tour::trivial());
        }

        let result = solve_dense(distances);
        if let Err(Error::Internal(msg)) = &result {
            log::error!("held_karp.solve: n={n} {msg}");
        }
        result
    }
}

/// Solves with the default configuration.
///
/// # Examples
///
/// ```
/// use u_held_karp::distance::DistanceMatrix;
/// use u_held_karp::exact::held_karp;
///
/// let dm = DistanceMatrix::from_rows(&[[0, 5], [5, 0]]).unwrap();
/// let tour = held_karp(&dm).unwrap();
/// assert_eq!(tour.cost(), 10.0);
/// assert_eq!(tour.path(), &[0, 1, 0]);
/// ```
pub fn held_karp(distances: &DistanceMatrix) -> Result<Tour> {
    HeldKarp::new().solve(distances)
}

/// Runs all four phases for `n >= 2`.
fn solve_dense(distances: &DistanceMatrix) -> Result<Tour> {
    let n = distances.size();
    let mut table = DpTable::new(n)?;
    log::debug!(
        "held_karp.solve: start n={n} slots={} bytes={}",
        table.len(),
        estimate_table_bytes(n).unwrap_or(usize::MAX)
    );

    seed_base_cases(&mut table, distances)?;
    for size in 2..n {
        let filled = expand(&mut table, distances, size)?;
        log::trace!("held_karp.expand: size={size} subsets={filled}");
    }

    let (cost, last_city) = close_cycle(&table, distances)?;
    if cost == f64::INFINITY {
        log::debug!("held_karp.solve: no finite tour n={n}");
        return Err(Error::Infeasible);
    }

    let tour = Tour::new(cost, reconstruct(&table, n, last_city)?);
    tour.validate(n)
        .map_err(|e| Error::internal(format!("reconstructed tour is malformed: {e}")))?;

    log::debug!("held_karp.solve: done n={n} cost={cost} last_city={last_city}");
    Ok(tour)
}

/// `DP[{0, k}, k] = d(0, k)` for every non-origin city.
fn seed_base_cases(table: &mut DpTable, distances: &DistanceMatrix) -> Result<()> {
    for k in 1..distances.size() {
        table.insert((1 << k) | (1 << ORIGIN), k, distances.get(ORIGIN, k), ORIGIN)?;
    }
    Ok(())
}

/// Fills every entry whose mask holds the origin plus `size` cities.
///
/// Returns the number of subsets processed.
fn expand(table: &mut DpTable, distances: &DistanceMatrix, size: usize) -> Result<usize> {
    let mut filled = 0;
    for mask in SubsetMasks::new(distances.size(), size) {
        for k in members(mask).filter(|&c| c != ORIGIN) {
            let prev = mask & !(1 << k);
            let mut best: Option<(f64, usize)> = None;
            for m in members(prev).filter(|&c| c != ORIGIN) {
                let (reach, _) = table.get(prev, m)?;
                let cost = extend_cost(reach, distances.get(m, k))?;
                if best.map_or(true, |(b, _)| cost < b) {
                    best = Some((cost, m));
                }
            }
            let (cost, parent) = best.ok_or_else(|| {
                Error::internal(format!("no predecessor for mask {mask:#b} city {k}"))
            })?;
            table.insert(mask, k, cost, parent)?;
        }
        filled += 1;
    }
    Ok(filled)
}

/// Picks the endpoint minimizing `DP[all, k] + d(k, 0)`.
fn close_cycle(table: &DpTable, distances: &DistanceMatrix) -> Result<(f64, usize)> {
    let n = distances.size();
    let full = full_mask(n);
    let mut best: Option<(f64, usize)> = None;
    for k in 1..n {
        let (reach, _) = table.get(full, k)?;
        let cost = extend_cost(reach, distances.get(k, ORIGIN))?;
        if best.map_or(true, |(b, _)| cost < b) {
            best = Some((cost, k));
        }
    }
    best.ok_or_else(|| Error::internal("no closing city"))
}

/// Adds an edge weight to a partial cost.
///
/// Two finite operands whose sum is infinite are an overflow, not a missing
/// edge, and are reported as [`Error::Overflow`].
pub(super) fn extend_cost(reach: f64, edge: f64) -> Result<f64> {
    let cost = reach + edge;
    if cost.is_infinite() && reach.is_finite() && edge.is_finite() {
        return Err(Error::Overflow);
    }
    Ok(cost)
}

/// Walks predecessors back from `(all, last_city)` and returns the tour in
/// forward order.
fn reconstruct(table: &DpTable, n: usize, last_city: usize) -> Result<Vec<usize>> {
    let mut path = Vec::with_capacity(n + 1);
    path.push(ORIGIN);

    let mut mask = full_mask(n);
    let mut city = last_city;
    for _ in 0..n - 1 {
        path.push(city);
        let (_, parent) = table.get(mask, city)?;
        mask &= !(1 << city);
        city = parent;
    }
    if city != ORIGIN || mask != 1 << ORIGIN {
        return Err(Error::internal(format!(
            "predecessor chain ended at city {city} with mask {mask:#b}"
        )));
    }

    path.push(ORIGIN);
    path.reverse();
    Ok(path)
}
