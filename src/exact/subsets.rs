//! Fixed-cardinality subset enumeration over visited-set bitmasks.
//!
//! Bit `i` of a mask means city `i` is visited. Every mask produced here
//! has the origin bit set; the `size` chosen bits come from cities
//! `1..cities`.
//!
//! Enumeration uses Gosper's hack on the `cities - 1` non-origin bits, so
//! masks come out in increasing numeric order without allocation.

use crate::models::ORIGIN;

/// Bit for the origin city.
pub(crate) const ORIGIN_BIT: usize = 1 << ORIGIN;

/// Iterator over every visited-set mask containing the origin plus exactly
/// `size` other cities.
///
/// # Examples
///
/// ```
/// use u_held_karp::exact::SubsetMasks;
///
/// let masks: Vec<usize> = SubsetMasks::new(4, 2).collect();
/// // {0,1,2}, {0,1,3}, {0,2,3}
/// assert_eq!(masks, vec![0b0111, 0b1011, 0b1101]);
/// ```
#[derive(Debug, Clone)]
pub struct SubsetMasks {
    /// Current combination over the non-origin bits, `None` once exhausted.
    combo: Option<usize>,
    limit: usize,
}

impl SubsetMasks {
    /// Creates the enumeration for an instance of `cities` cities.
    ///
    /// Yields nothing if `size` exceeds `cities - 1`.
    pub fn new(cities: usize, size: usize) -> Self {
        let free = cities.saturating_sub(1);
        let combo = if size > free || free >= usize::BITS as usize - 1 {
            None
        } else {
            Some((1usize << size) - 1)
        };
        Self {
            combo,
            limit: 1usize << free.min(usize::BITS as usize - 2),
        }
    }
}

impl Iterator for SubsetMasks {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let c = self.combo?;
        self.combo = if c == 0 {
            None
        } else {
            let u = c & c.wrapping_neg();
            let v = c + u;
            let next = v + (((v ^ c) / u) >> 2);
            (next < self.limit).then_some(next)
        };
        Some((c << 1) | ORIGIN_BIT)
    }
}

/// Iterates the cities in `mask` in ascending order.
pub fn members(mask: usize) -> impl Iterator<Item = usize> {
    let mut rest = mask;
    std::iter::from_fn(move || {
        if rest == 0 {
            return None;
        }
        let city = rest.trailing_zeros() as usize;
        rest &= rest - 1;
        Some(city)
    })
}

/// Mask with every one of `cities` bits set.
pub(crate) fn full_mask(cities: usize) -> usize {
    (1usize << cities) - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binomial(n: usize, k: usize) -> usize {
        (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
    }

    #[test]
    fn test_size_zero_is_origin_only() {
        let masks: Vec<usize> = SubsetMasks::new(5, 0).collect();
        assert_eq!(masks, vec![ORIGIN_BIT]);
    }

    #[test]
    fn test_size_one() {
        let masks: Vec<usize> = SubsetMasks::new(4, 1).collect();
        assert_eq!(masks, vec![0b0011, 0b0101, 0b1001]);
    }

    #[test]
    fn test_full_size() {
        let masks: Vec<usize> = SubsetMasks::new(5, 4).collect();
        assert_eq!(masks, vec![full_mask(5)]);
    }

    #[test]
    fn test_oversized_is_empty() {
        assert_eq!(SubsetMasks::new(4, 4).count(), 0);
        assert_eq!(SubsetMasks::new(1, 1).count(), 0);
    }

    #[test]
    fn test_counts_match_binomial() {
        for n in 1..=10 {
            for s in 0..n {
                assert_eq!(SubsetMasks::new(n, s).count(), binomial(n - 1, s), "n={n} s={s}");
            }
        }
    }

    #[test]
    fn test_masks_are_increasing_and_well_formed() {
        let n = 9;
        for s in 0..n {
            let masks: Vec<usize> = SubsetMasks::new(n, s).collect();
            assert!(masks.windows(2).all(|w| w[0] < w[1]));
            for &m in &masks {
                assert_eq!(m & ORIGIN_BIT, ORIGIN_BIT);
                assert_eq!(m.count_ones() as usize, s + 1);
                assert!(m <= full_mask(n));
            }
        }
    }

    #[test]
    fn test_members() {
        assert_eq!(members(0b1011_0101).collect::<Vec<_>>(), vec![0, 2, 4, 5, 7]);
        assert_eq!(members(0).count(), 0);
        assert_eq!(members(ORIGIN_BIT).collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_full_mask() {
        assert_eq!(full_mask(1), 0b1);
        assert_eq!(full_mask(4), 0b1111);
    }
}
