//! Cost matrices.
//!
//! Provides a dense, validated cost matrix for exact TSP solving.

mod matrix;

pub use matrix::DistanceMatrix;
