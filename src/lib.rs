//! # u-held-karp
//!
//! Exact Traveling Salesman solving over dense directed cost matrices with
//! the Held-Karp dynamic program.
//!
//! ## Modules
//!
//! - [`distance`] — Validated N×N cost matrix
//! - [`models`] — Solution type ([`Tour`](models::Tour))
//! - [`exact`] — Held-Karp solver and a brute-force reference
//! - [`error`] — Error type shared across the crate
//!
//! ## Example
//!
//! ```
//! use u_held_karp::distance::DistanceMatrix;
//! use u_held_karp::exact::held_karp;
//!
//! let dm = DistanceMatrix::from_rows(&[
//!     [0, 10, 15, 20],
//!     [10, 0, 35, 25],
//!     [15, 35, 0, 30],
//!     [20, 25, 30, 0],
//! ])?;
//! let tour = held_karp(&dm)?;
//! assert_eq!(tour.cost(), 80.0);
//! assert_eq!(tour.path().len(), 5);
//! # Ok::<(), u_held_karp::Error>(())
//! ```

pub mod distance;
pub mod error;
pub mod exact;
pub mod models;

pub use error::{Error, Result};
