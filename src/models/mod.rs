//! Domain model types for exact TSP solving.
//!
//! A solve produces a [`Tour`]: the optimal cost together with the closed
//! city sequence starting and ending at [`ORIGIN`].

mod tour;

pub use tour::{Tour, ORIGIN};
