//! Dense cost matrix.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A dense n×n matrix of directed edge weights stored in row-major order.
///
/// `get(i, j)` is the weight of the edge from city `i` to city `j`. Weights
/// may be negative. `f64::INFINITY` marks an edge that cannot be used; NaN
/// and negative infinity are rejected on construction and deserialization.
/// [`set`](Self::set) does not check its argument; the solvers call
/// [`validate`](Self::validate) before doing any work.
///
/// # Examples
///
/// ```
/// use u_held_karp::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(&[[0, 5], [7, 0]]).unwrap();
/// assert_eq!(dm.size(), 2);
/// assert_eq!(dm.get(1, 0), 7.0);
/// assert!(!dm.is_symmetric(1e-10));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

/// Unchecked wire form, validated through [`DistanceMatrix::from_data`].
#[derive(Deserialize)]
struct RawMatrix {
    data: Vec<f64>,
    size: usize,
}

impl TryFrom<RawMatrix> for DistanceMatrix {
    type Error = Error;

    fn try_from(raw: RawMatrix) -> Result<Self> {
        Self::from_data(raw.size, raw.data)
    }
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Creates a distance matrix from a slice of rows.
    ///
    /// Fails if there are no rows, if any row length differs from the number
    /// of rows, or if an entry is NaN or negative infinity.
    ///
    /// Entries convert through `Into<f64>`, which covers `f32` and integers up
    /// to 32 bits. `i64` and `u64` are excluded because the conversion can
    /// lose precision; cast them with `as f64` and use [`Self::from_data`].
    pub fn from_rows<R, T>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[T]>,
        T: Copy + Into<f64>,
    {
        let size = rows.len();
        if size == 0 {
            return Err(Error::invalid_input("cost matrix has no rows"));
        }
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(Error::invalid_input(format!(
                    "cost matrix is not square: row {i} has {} columns, expected {size}",
                    row.len()
                )));
            }
            data.extend(row.iter().map(|&w| w.into()));
        }
        Self::from_data(size, data)
    }

    /// Creates a distance matrix from an explicit row-major n×n grid.
    ///
    /// Fails if `size` is zero, if the data length doesn't match
    /// `size * size`, or if an entry is NaN or negative infinity.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self> {
        if size == 0 {
            return Err(Error::invalid_input("cost matrix has zero cities"));
        }
        let dm = Self { data, size };
        dm.validate()?;
        Ok(dm)
    }

    /// Checks that the storage is `size × size` and every weight is usable
    /// (not NaN, not negative infinity).
    ///
    /// Catches bad values written through [`Self::set`].
    pub fn validate(&self) -> Result<()> {
        let size = self.size;
        if size.checked_mul(size) != Some(self.data.len()) {
            return Err(Error::invalid_input(format!(
                "cost matrix data has {} entries, expected {size}x{size}",
                self.data.len()
            )));
        }
        for (idx, &w) in self.data.iter().enumerate() {
            if w.is_nan() || w == f64::NEG_INFINITY {
                return Err(Error::invalid_input(format!(
                    "cost[{}][{}] is not a usable weight: {w}",
                    idx / size,
                    idx % size
                )));
            }
        }
        Ok(())
    }

    /// Computes a symmetric Euclidean distance matrix from planar points.
    pub fn from_points(points: &[(f64, f64)]) -> Result<Self> {
        let n = points.len();
        if n == 0 {
            return Err(Error::invalid_input("no points given"));
        }
        if let Some(i) = points
            .iter()
            .position(|&(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(Error::invalid_input(format!(
                "point {i} has a non-finite coordinate"
            )));
        }
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let (dx, dy) = (points[i].0 - points[j].0, points[i].1 - points[j].1);
                let d = (dx * dx + dy * dy).sqrt();
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        Ok(dm)
    }

    /// Generates a matrix of integer weights drawn uniformly from
    /// `0..=max_weight`, with a zero diagonal.
    ///
    /// The matrix is generally asymmetric.
    pub fn random<R: Rng + ?Sized>(size: usize, max_weight: u32, rng: &mut R) -> Self {
        let mut dm = Self::new(size);
        for i in 0..size {
            for j in 0..size {
                if i != j {
                    dm.set(i, j, f64::from(rng.random_range(0..=max_weight)));
                }
            }
        }
        dm
    }

    /// Returns the weight of the edge from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the weight of the edge from `from` to `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of cities in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                let (a, b) = (self.get(i, j), self.get(j, i));
                if a != b && (a - b).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Sums the weights of consecutive edges along `path`, left to right.
    ///
    /// The single-city tour `[c, c]` costs zero regardless of the diagonal.
    /// Any other repeated city is charged its diagonal entry.
    ///
    /// # Panics
    ///
    /// Panics if the path contains an out-of-range city.
    pub fn tour_cost(&self, path: &[usize]) -> f64 {
        if let [a, b] = path {
            if a == b {
                return 0.0;
            }
        }
        path.windows(2).fold(0.0, |acc, w| acc + self.get(w[0], w[1]))
    }
}
