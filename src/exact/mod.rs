//! Exact TSP solvers.
//!
//! - [`held_karp()`] — Held-Karp bitmask dynamic program (1962), O(n²·2ⁿ)
//! - [`brute_force()`] — Exhaustive permutation search, O(n!), for cross-checking
//!
//! Supporting pieces are public for callers that size instances up front:
//! [`estimate_table_bytes`] reports the DP memory for a given city count, and
//! [`SubsetMasks`] enumerates visited-set bitmasks by cardinality.

mod brute_force;
mod held_karp;
mod subsets;
mod table;

pub use brute_force::{brute_force, BRUTE_FORCE_MAX_CITIES};
pub use held_karp::{
    held_karp, HeldKarp, HeldKarpConfig, DEFAULT_MAX_CITIES, MAX_SUPPORTED_CITIES,
};
pub use subsets::{members, SubsetMasks};
pub use table::estimate_table_bytes;
