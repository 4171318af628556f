//! Interactive session controller.
//!
//! An interactive front end (sliders, text input) owns exactly one
//! [`FieldSession`]. The session owns the charge collection and grid, each
//! mutation replaces a value wholesale, and [`FieldSession::compute`] rebuilds
//! the whole frame synchronously. There is a single mutator running to
//! completion per event, so no locking is involved anywhere.

use crate::charge::PointCharge;
use crate::errors::Coulomb2dError;
use crate::frame::FieldFrame;
use crate::grid::GridSpec;
use crate::math::Scalar;

/// Owns the charge set and evaluation grid driven by an interactive front end.
#[derive(Debug, Clone)]
pub struct FieldSession {
    charges: Vec<PointCharge>,
    grid: GridSpec,
}

impl FieldSession {
    /// Creates a session over an initial charge set and grid.
    #[must_use]
    pub fn new(charges: Vec<PointCharge>, grid: GridSpec) -> Self {
        Self { charges, grid }
    }

    /// Current charge set.
    #[must_use]
    pub fn charges(&self) -> &[PointCharge] {
        &self.charges
    }

    /// Current grid.
    #[must_use]
    pub const fn grid(&self) -> &GridSpec {
        &self.grid
    }

    /// Appends a charge.
    pub fn push_charge(&mut self, charge: PointCharge) {
        self.charges.push(charge);
    }

    /// Replaces the magnitude of charge `index`, keeping its position.
    ///
    /// This is the slider case: the stored charge value is swapped wholesale
    /// and the next [`Self::compute`] starts from scratch.
    pub fn set_charge_magnitude(
        &mut self,
        index: usize,
        charge_c: Scalar,
    ) -> Result<(), Coulomb2dError> {
        let len = self.charges.len();
        let charge = self
            .charges
            .get_mut(index)
            .ok_or(Coulomb2dError::ChargeIndex { index, len })?;
        *charge = PointCharge {
            charge_c,
            ..*charge
        };
        Ok(())
    }

    /// Replaces the evaluation grid (density or extent change).
    pub fn set_grid(&mut self, grid: GridSpec) {
        self.grid = grid;
    }

    /// Full synchronous recomputation of the frame.
    #[must_use]
    pub fn compute(&self) -> FieldFrame {
        FieldFrame::compute(&self.charges, &self.grid)
    }
}
