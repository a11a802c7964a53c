//! Exhaustive TSP by permutation enumeration.
//!
//! Visits every ordering of cities `1..n` in lexicographic order and keeps
//! the cheapest closed tour. O(n!) time, so only tiny instances are
//! accepted. Serves as an independent oracle for [`held_karp`](fn@super::held_karp).

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::models::{Tour, ORIGIN};

use super::held_karp::extend_cost;

/// Largest instance [`brute_force`] accepts.
pub const BRUTE_FORCE_MAX_CITIES: usize = 10;

/// Finds a minimum-cost tour by trying every ordering.
///
/// Among equal-cost tours the lexicographically smallest path wins.
///
/// # Examples
///
/// ```
/// use u_held_karp::distance::DistanceMatrix;
/// use u_held_karp::exact::brute_force;
///
/// let dm = DistanceMatrix::from_rows(&[[0, 1, 10], [10, 0, 1], [1, 10, 0]]).unwrap();
/// let tour = brute_force(&dm).unwrap();
/// assert_eq!(tour.cost(), 3.0);
/// assert_eq!(tour.path(), &[0, 1, 2, 0]);
/// ```
pub fn brute_force(distances: &DistanceMatrix) -> Result<Tour> {
    let n = distances.size();
    if n == 0 {
        return Err(Error::invalid_input("cost matrix has zero cities"));
    }
    distances.validate()?;
    if n > BRUTE_FORCE_MAX_CITIES {
        return Err(Error::TooManyCities {
            cities: n,
            limit: BRUTE_FORCE_MAX_CITIES,
        });
    }
    if n == 1 {
        return Ok(Tour::trivial());
    }

    let mut path: Vec<usize> = std::iter::once(ORIGIN)
        .chain(1..n)
        .chain(std::iter::once(ORIGIN))
        .collect();
    let mut best: Option<(f64, Vec<usize>)> = None;

    loop {
        let cost = path
            .windows(2)
            .try_fold(0.0, |acc, w| extend_cost(acc, distances.get(w[0], w[1])))?;
        if best.as_ref().map_or(true, |(b, _)| cost < *b) {
            best = Some((cost, path.clone()));
        }
        if !next_permutation(&mut path[1..n]) {
            break;
        }
    }

    match best {
        Some((cost, _)) if cost == f64::INFINITY => Err(Error::Infeasible),
        Some((cost, path)) => Ok(Tour::new(cost, path)),
        None => Err(Error::internal("no permutation evaluated")),
    }
}

/// Rearranges `items` into the next lexicographic permutation.
///
/// Returns `false` (leaving `items` sorted ascending) after the last one.
fn next_permutation(items: &mut [usize]) -> bool {
    let Some(pivot) = items.windows(2).rposition(|w| w[0] < w[1]) else {
        items.reverse();
        return false;
    };
    let succ = items
        .iter()
        .rposition(|&x| x > items[pivot])
        .unwrap_or(pivot + 1);
    items.swap(pivot, succ);
    items[pivot + 1..].reverse();
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_permutation_sequence() {
        let mut items = vec![1, 2, 3];
        let mut seen = vec![items.clone()];
        while next_permutation(&mut items) {
            seen.push(items.clone());
        }
        assert_eq!(
            seen,
            vec![
                vec![1, 2, 3],
                vec![1, 3, 2],
                vec![2, 1, 3],
                vec![2, 3, 1],
                vec![3, 1, 2],
                vec![3, 2, 1],
            ]
        );
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn test_next_permutation_trivial() {
        let mut empty: Vec<usize> = vec![];
        assert!(!next_permutation(&mut empty));
        let mut one = vec![4];
        assert!(!next_permutation(&mut one));
    }

    #[test]
    fn test_reference_scenario() {
        let dm = DistanceMatrix::from_rows(&[
            [0, 10, 15, 20],
            [10, 0, 35, 25],
            [15, 35, 0, 30],
            [20, 25, 30, 0],
        ])
        .expect("valid");
        let tour = brute_force(&dm).expect("solve");
        assert_eq!(tour.cost(), 80.0);
        // lexicographically first optimal ordering
        assert_eq!(tour.path(), &[0, 1, 3, 2, 0]);
    }

    #[test]
    fn test_base_cases() {
        let one = DistanceMatrix::from_rows(&[[0.0]]).expect("valid");
        assert_eq!(brute_force(&one).expect("solve"), Tour::trivial());

        let two = DistanceMatrix::from_rows(&[[0, 5], [5, 0]]).expect("valid");
        let tour = brute_force(&two).expect("solve");
        assert_eq!(tour.cost(), 10.0);
        assert_eq!(tour.path(), &[0, 1, 0]);
    }

    #[test]
    fn test_limits() {
        assert!(matches!(
            brute_force(&DistanceMatrix::new(BRUTE_FORCE_MAX_CITIES + 1)),
            Err(Error::TooManyCities { .. })
        ));
        assert!(matches!(
            brute_force(&DistanceMatrix::new(0)),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_weights() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(2, 1, f64::NAN);
        assert!(matches!(brute_force(&dm), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_overflow() {
        let big = f64::MAX;
        let dm = DistanceMatrix::from_rows(&[[0.0, big], [big, 0.0]]).expect("valid");
        assert_eq!(brute_force(&dm), Err(Error::Overflow));
    }

    #[test]
    fn test_infeasible() {
        let inf = f64::INFINITY;
        let dm = DistanceMatrix::from_rows(&[[0.0, inf], [1.0, 0.0]]).expect("valid");
        assert_eq!(brute_force(&dm), Err(Error::Infeasible));
    }
}
