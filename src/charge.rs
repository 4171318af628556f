//! Point charges and their Coulomb contributions.

use crate::constants::COULOMB_CONSTANT;
use crate::math::{R2, Scalar};

/// Point charge in coulombs at a fixed position in the plane.
///
/// Value-semantic: mutating a charge means replacing it wholesale. Equality is
/// by value only, and nothing prevents two charges from sharing a position.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointCharge {
    /// Signed charge in coulombs.
    pub charge_c: Scalar,
    /// Position in meters.
    pub position: R2,
}

impl PointCharge {
    /// Creates a charge of `charge_c` coulombs at `(x, y)` meters.
    #[must_use]
    pub fn new(charge_c: Scalar, x: Scalar, y: Scalar) -> Self {
        Self {
            charge_c,
            position: R2::new(x, y),
        }
    }

    /// Electric field contribution `E = k_e q (r - r0) / |r - r0|³` at `point`, in N/C.
    ///
    /// Exactly at the charge's own position the field is defined as the zero
    /// vector so samples landing on a charge stay finite for rendering. Near
    /// but not at the singularity the raw (possibly huge or infinite) value is
    /// returned untrapped.
    #[must_use]
    pub fn field_at(&self, point: R2) -> R2 {
        let r_vec = point - self.position;
        let r = r_vec.norm();
        if r == 0.0 {
            return R2::zeros();
        }
        r_vec * (COULOMB_CONSTANT * self.charge_c / (r * r * r))
    }

    /// Electric potential contribution `V = k_e q / |r - r0|` at `point`, in volts.
    ///
    /// Exactly at the charge's own position the potential is defined as
    /// positive infinity, regardless of the charge's sign. Note the asymmetry
    /// with [`Self::field_at`], which returns zero there.
    #[must_use]
    pub fn potential_at(&self, point: R2) -> Scalar {
        let r = (point - self.position).norm();
        if r == 0.0 {
            return Scalar::INFINITY;
        }
        COULOMB_CONSTANT * self.charge_c / r
    }
}
