//! Error type shared by the matrix, tour and solver modules.

use thiserror::Error as ThisError;

/// Errors raised while validating input or solving an instance.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    /// The matrix or tour is malformed. Raised before any DP work starts.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The instance exceeds the configured city limit.
    #[error("instance has {cities} cities, limit is {limit}")]
    TooManyCities { cities: usize, limit: usize },
    /// The DP table could not be reserved.
    #[error("failed to allocate DP table for {cities} cities ({bytes} bytes)")]
    Allocation { cities: usize, bytes: usize },
    /// A sum of finite weights left the `f64` range.
    #[error("tour cost overflows f64")]
    Overflow,
    /// Every Hamiltonian cycle uses an infinite-weight edge.
    #[error("no tour with finite cost exists")]
    Infeasible,
    /// A DP invariant was broken. Indicates a bug in the fill order.
    #[error("internal invariant violated: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            Error::invalid_input("empty matrix").to_string(),
            "invalid input: empty matrix"
        );
        assert_eq!(
            Error::TooManyCities {
                cities: 25,
                limit: 20
            }
            .to_string(),
            "instance has 25 cities, limit is 20"
        );
        assert_eq!(
            Error::internal("slot (3, 1) read before write").to_string(),
            "internal invariant violated: slot (3, 1) read before write"
        );
    }
}
