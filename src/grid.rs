//! Rectangular evaluation grids.
//!
//! A [`GridSpec`] is the meshgrid analog: per-axis bounds and sample counts.
//! Sample positions are materialized row-major with x varying fastest, and
//! every array the crate derives from a grid shares that ordering.

use crate::math::{linspace, R2, Scalar};

/// Errors raised while validating a grid specification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Raised when any bound is NaN or infinite.
    #[error("grid bounds must be finite")]
    NonFiniteBounds,
    /// Raised when an axis minimum is not strictly below its maximum.
    #[error("grid axis minimum must be strictly below its maximum")]
    EmptyExtent,
    /// Raised when an axis has zero samples.
    #[error("grid needs at least one sample per axis")]
    ZeroSamples,
}

/// Rectangular sampling grid: bounds plus sample counts per axis.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GridSpec {
    x_min: Scalar,
    x_max: Scalar,
    y_min: Scalar,
    y_max: Scalar,
    nx: usize,
    ny: usize,
}

impl GridSpec {
    /// Creates a grid covering `[x_min, x_max] × [y_min, y_max]` with
    /// `nx × ny` samples.
    pub fn new(
        x_min: Scalar,
        x_max: Scalar,
        y_min: Scalar,
        y_max: Scalar,
        nx: usize,
        ny: usize,
    ) -> Result<Self, GridError> {
        if ![x_min, x_max, y_min, y_max].iter().all(|b| b.is_finite()) {
            return Err(GridError::NonFiniteBounds);
        }
        if x_min >= x_max || y_min >= y_max {
            return Err(GridError::EmptyExtent);
        }
        if nx == 0 || ny == 0 {
            return Err(GridError::ZeroSamples);
        }
        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
            nx,
            ny,
        })
    }

    /// Creates a square grid covering `[-half_extent, half_extent]²` with
    /// `n × n` samples.
    pub fn square(half_extent: Scalar, n: usize) -> Result<Self, GridError> {
        Self::new(-half_extent, half_extent, -half_extent, half_extent, n, n)
    }

    /// Lower x bound in meters.
    #[must_use]
    pub const fn x_min(&self) -> Scalar {
        self.x_min
    }

    /// Upper x bound in meters.
    #[must_use]
    pub const fn x_max(&self) -> Scalar {
        self.x_max
    }

    /// Lower y bound in meters.
    #[must_use]
    pub const fn y_min(&self) -> Scalar {
        self.y_min
    }

    /// Upper y bound in meters.
    #[must_use]
    pub const fn y_max(&self) -> Scalar {
        self.y_max
    }

    /// Samples along the x axis.
    #[must_use]
    pub const fn nx(&self) -> usize {
        self.nx
    }

    /// Samples along the y axis.
    #[must_use]
    pub const fn ny(&self) -> usize {
        self.ny
    }

    /// Total number of samples.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nx * self.ny
    }

    /// True when the grid holds no samples. Unreachable through the validated
    /// constructors; kept for the conventional pairing with [`Self::len`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sample spacing along x. Zero-width only for `nx == 1`.
    #[must_use]
    pub fn dx(&self) -> Scalar {
        if self.nx > 1 {
            (self.x_max - self.x_min) / (self.nx as Scalar - 1.0)
        } else {
            0.0
        }
    }

    /// Sample spacing along y. Zero-width only for `ny == 1`.
    #[must_use]
    pub fn dy(&self) -> Scalar {
        if self.ny > 1 {
            (self.y_max - self.y_min) / (self.ny as Scalar - 1.0)
        } else {
            0.0
        }
    }

    /// Flat index of the sample at `(row, col)`, row = y index, col = x index.
    #[must_use]
    pub const fn index(&self, row: usize, col: usize) -> usize {
        row * self.nx + col
    }

    /// Materializes every sample position, row-major with x varying fastest.
    #[must_use]
    pub fn positions(&self) -> Vec<R2> {
        let xs = linspace(self.x_min, self.x_max, self.nx);
        let ys = linspace(self.y_min, self.y_max, self.ny);
        let mut points = Vec::with_capacity(self.len());
        for &y in &ys {
            for &x in &xs {
                points.push(R2::new(x, y));
            }
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_are_row_major_x_fastest() {
        let grid = GridSpec::new(0.0, 1.0, 0.0, 2.0, 2, 3).expect("valid grid");
        let points = grid.positions();
        assert_eq!(points.len(), 6);
        assert_eq!(points[0], R2::new(0.0, 0.0));
        assert_eq!(points[1], R2::new(1.0, 0.0));
        assert_eq!(points[2], R2::new(0.0, 1.0));
        assert_eq!(points[grid.index(2, 1)], R2::new(1.0, 2.0));
    }

    #[test]
    fn square_grid_covers_symmetric_extent() {
        let grid = GridSpec::square(5.0, 100).expect("valid grid");
        let points = grid.positions();
        assert_eq!(points.len(), 100 * 100);
        assert_eq!(points[0], R2::new(-5.0, -5.0));
        let last = points[points.len() - 1];
        approx::assert_relative_eq!(last.x, 5.0, max_relative = 1.0e-12);
        approx::assert_relative_eq!(last.y, 5.0, max_relative = 1.0e-12);
    }

    #[test]
    fn rejects_invalid_specs() {
        assert_eq!(
            GridSpec::new(Scalar::NAN, 1.0, 0.0, 1.0, 4, 4),
            Err(GridError::NonFiniteBounds)
        );
        assert_eq!(
            GridSpec::new(1.0, 1.0, 0.0, 1.0, 4, 4),
            Err(GridError::EmptyExtent)
        );
        assert_eq!(
            GridSpec::new(0.0, 1.0, 0.0, 1.0, 0, 4),
            Err(GridError::ZeroSamples)
        );
    }

    #[test]
    fn spacing_matches_extent() {
        let grid = GridSpec::new(-5.0, 5.0, 0.0, 1.0, 101, 2).expect("valid grid");
        assert_eq!(grid.dx(), 0.1);
        assert_eq!(grid.dy(), 1.0);
    }
}
