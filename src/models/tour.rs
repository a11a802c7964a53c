//! Solution type for exact TSP solves.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The origin city. Every tour starts and ends here.
pub const ORIGIN: usize = 0;

/// A closed tour over all cities, together with its total cost.
///
/// The path starts and ends at [`ORIGIN`] and visits every other city
/// exactly once, so it holds `n + 1` indices for an `n`-city instance.
///
/// # Examples
///
/// ```
/// use u_held_karp::models::Tour;
///
/// let tour = Tour::new(80.0, vec![0, 2, 3, 1, 0]);
/// assert_eq!(tour.num_cities(), 4);
/// assert_eq!(tour.interior(), &[2, 3, 1]);
/// assert!(tour.validate(4).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    cost: f64,
    path: Vec<usize>,
}

impl Tour {
    /// Creates a tour from its cost and city sequence.
    pub fn new(cost: f64, path: Vec<usize>) -> Self {
        Self { cost, path }
    }

    /// The trivial tour of a single-city instance: `[0, 0]` at cost 0.
    pub fn trivial() -> Self {
        Self::new(0.0, vec![ORIGIN, ORIGIN])
    }

    /// Total cost of the tour.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// City sequence, origin first and last.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Consumes the tour, returning the city sequence.
    pub fn into_path(self) -> Vec<usize> {
        self.path
    }

    /// Number of distinct cities covered by the tour.
    pub fn num_cities(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Cities between the two origin visits.
    pub fn interior(&self) -> &[usize] {
        match self.path.len() {
            0..=2 => &[],
            len => &self.path[1..len - 1],
        }
    }

    /// Returns the same cycle traversed in the opposite direction.
    ///
    /// The cost is carried over unchanged; it only matches the reversed
    /// path's real cost when the matrix is symmetric.
    pub fn reversed(&self) -> Self {
        let mut path = self.path.clone();
        path.reverse();
        Self::new(self.cost, path)
    }

    /// Checks that the path is a closed Hamiltonian cycle over
    /// `num_cities` cities anchored at the origin.
    pub fn validate(&self, num_cities: usize) -> Result<()> {
        let path = &self.path;
        if path.len() != num_cities + 1 {
            return Err(Error::invalid_input(format!(
                "tour has {} entries, expected {}",
                path.len(),
                num_cities + 1
            )));
        }
        if path.first() != Some(&ORIGIN) || path.last() != Some(&ORIGIN) {
            return Err(Error::invalid_input("tour must start and end at city 0"));
        }

        let mut seen = vec![false; num_cities];
        for &city in self.interior() {
            if city == ORIGIN || city >= num_cities {
                return Err(Error::invalid_input(format!(
                    "tour interior contains invalid city {city}"
                )));
            }
            if seen[city] {
                return Err(Error::invalid_input(format!(
                    "tour visits city {city} more than once"
                )));
            }
            seen[city] = true;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tour_accessors() {
        let tour = Tour::new(10.0, vec![0, 1, 0]);
        assert_eq!(tour.cost(), 10.0);
        assert_eq!(tour.path(), &[0, 1, 0]);
        assert_eq!(tour.num_cities(), 2);
        assert_eq!(tour.interior(), &[1]);
        assert_eq!(tour.into_path(), vec![0, 1, 0]);
    }

    #[test]
    fn test_trivial() {
        let tour = Tour::trivial();
        assert_eq!(tour.cost(), 0.0);
        assert_eq!(tour.path(), &[0, 0]);
        assert_eq!(tour.num_cities(), 1);
        assert!(tour.interior().is_empty());
        assert!(tour.validate(1).is_ok());
    }

    #[test]
    fn test_reversed() {
        let tour = Tour::new(80.0, vec![0, 2, 3, 1, 0]);
        let rev = tour.reversed();
        assert_eq!(rev.path(), &[0, 1, 3, 2, 0]);
        assert_eq!(rev.cost(), 80.0);
        assert_eq!(rev.reversed(), tour);
    }

    #[test]
    fn test_validate_wrong_length() {
        let tour = Tour::new(0.0, vec![0, 1, 0]);
        assert!(tour.validate(3).is_err());
    }

    #[test]
    fn test_validate_endpoints() {
        assert!(Tour::new(0.0, vec![1, 0, 2, 1]).validate(3).is_err());
        assert!(Tour::new(0.0, vec![0, 1, 2, 1]).validate(3).is_err());
    }

    #[test]
    fn test_validate_repeats_and_range() {
        let repeat = Tour::new(0.0, vec![0, 1, 1, 0]).validate(3).unwrap_err();
        assert!(repeat.to_string().contains("more than once"));
        assert!(Tour::new(0.0, vec![0, 1, 3, 0]).validate(3).is_err());
        assert!(Tour::new(0.0, vec![0, 0, 1, 0]).validate(3).is_err());
    }
}
