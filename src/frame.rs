//! Renderer-facing bundles of field data.
//!
//! A [`FieldFrame`] is the complete hand-off to an external renderer: sample
//! positions, field vectors, potential values, and charge markers. The crate's
//! obligation ends at producing these arrays in a documented shape; quiver
//! styling, color maps, and widgets belong to the renderer.

use crate::charge::PointCharge;
use crate::grid::GridSpec;
use crate::math::{R2, Scalar};
use crate::superposition::{field_magnitudes, field_on_grid, potential_on_grid};

/// Sign of a charge, used to style its marker.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Strictly positive charge.
    Positive,
    /// Zero or negative charge.
    Negative,
}

impl Polarity {
    /// Polarity of `charge_c` coulombs.
    #[must_use]
    pub fn of(charge_c: Scalar) -> Self {
        if charge_c > 0.0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}

/// Position and sign of one charge, for drawing markers over the field.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChargeMarker {
    /// Marker position in meters.
    pub position: R2,
    /// Marker sign.
    pub polarity: Polarity,
}

impl From<&PointCharge> for ChargeMarker {
    fn from(charge: &PointCharge) -> Self {
        Self {
            position: charge.position,
            polarity: Polarity::of(charge.charge_c),
        }
    }
}

/// One fully evaluated frame: everything a renderer consumes.
///
/// All sample arrays share the row-major ordering of
/// [`GridSpec::positions`] and have length [`GridSpec::len`].
#[derive(Debug, Clone)]
pub struct FieldFrame {
    /// Grid the samples were taken on.
    pub grid: GridSpec,
    /// Sample positions in meters.
    pub positions: Vec<R2>,
    /// Field vectors in N/C, one per sample.
    pub field: Vec<R2>,
    /// Potential in volts, one per sample.
    pub potential: Vec<Scalar>,
    /// Markers for the charges that produced the frame.
    pub markers: Vec<ChargeMarker>,
}

impl FieldFrame {
    /// Evaluates a full frame from scratch for `charges` over `grid`.
    #[must_use]
    pub fn compute(charges: &[PointCharge], grid: &GridSpec) -> Self {
        Self {
            grid: grid.clone(),
            positions: grid.positions(),
            field: field_on_grid(charges, grid),
            potential: potential_on_grid(charges, grid),
            markers: charges.iter().map(ChargeMarker::from).collect(),
        }
    }

    /// Per-sample field magnitudes, for color mapping.
    #[must_use]
    pub fn magnitudes(&self) -> Vec<Scalar> {
        field_magnitudes(&self.field)
    }
}
