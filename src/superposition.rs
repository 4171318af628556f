//! Linear superposition of point-charge contributions.
//!
//! Total field and potential are direct elementwise sums over the charge set,
//! so they are order-independent up to floating-point rounding and an empty
//! charge set yields identically zero. Evaluation is O(charges × points) with
//! no caching; callers recompute from scratch after any parameter change.

use crate::charge::PointCharge;
use crate::grid::GridSpec;
use crate::math::{R2, Scalar};

/// Total electric field at `point` due to `charges`, in N/C.
#[must_use]
pub fn total_field(charges: &[PointCharge], point: R2) -> R2 {
    let mut e = R2::zeros();
    for c in charges {
        e += c.field_at(point);
    }
    e
}

/// Total electric potential at `point` due to `charges`, in volts.
#[must_use]
pub fn total_potential(charges: &[PointCharge], point: R2) -> Scalar {
    let mut v = 0.0;
    for c in charges {
        v += c.potential_at(point);
    }
    v
}

/// Field samples over `grid`, ordered like [`GridSpec::positions`].
#[must_use]
pub fn field_on_grid(charges: &[PointCharge], grid: &GridSpec) -> Vec<R2> {
    grid.positions()
        .into_iter()
        .map(|p| total_field(charges, p))
        .collect()
}

/// Potential samples over `grid`, ordered like [`GridSpec::positions`].
#[must_use]
pub fn potential_on_grid(charges: &[PointCharge], grid: &GridSpec) -> Vec<Scalar> {
    grid.positions()
        .into_iter()
        .map(|p| total_potential(charges, p))
        .collect()
}

/// Per-sample Euclidean norm of a vector field, for color-coding output.
#[must_use]
pub fn field_magnitudes(vectors: &[R2]) -> Vec<Scalar> {
    vectors.iter().map(|v| v.norm()).collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::constants::COULOMB_CONSTANT;

    fn dipole() -> [PointCharge; 2] {
        [
            PointCharge::new(1.0e-9, -2.0, 0.0),
            PointCharge::new(-1.0e-9, 2.0, 0.0),
        ]
    }

    #[test]
    fn superposition_is_linear() {
        let [c1, c2] = dipole();
        let p = R2::new(0.7, -1.3);
        assert_eq!(total_field(&[c1, c2], p), c1.field_at(p) + c2.field_at(p));
        assert_eq!(
            total_potential(&[c1, c2], p),
            c1.potential_at(p) + c2.potential_at(p)
        );
    }

    #[test]
    fn opposite_charges_at_same_position_cancel() {
        let charges = [
            PointCharge::new(2.5e-9, 1.0, 1.0),
            PointCharge::new(-2.5e-9, 1.0, 1.0),
        ];
        let p = R2::new(-3.0, 0.25);
        assert_eq!(total_field(&charges, p), R2::zeros());
        assert_eq!(total_potential(&charges, p), 0.0);
    }

    #[test]
    fn empty_charge_set_is_identically_zero() {
        let grid = GridSpec::square(5.0, 20).expect("valid grid");
        assert!(field_on_grid(&[], &grid).iter().all(|e| *e == R2::zeros()));
        assert!(potential_on_grid(&[], &grid).iter().all(|v| *v == 0.0));
    }

    #[test]
    fn dipole_midpoint_matches_reference_value() {
        // Both contributions point along +x at the midpoint; each has
        // magnitude k_e * 1e-9 / 2^2, so the total is 4.495 N/C.
        let e = total_field(&dipole(), R2::zeros());
        assert!(e.x > 0.0);
        assert_relative_eq!(e.y, 0.0, epsilon = 1.0e-12);
        assert_relative_eq!(e.norm(), 2.0 * COULOMB_CONSTANT * 1.0e-9 / 4.0, max_relative = 1.0e-12);
        assert_relative_eq!(e.norm(), 4.495, max_relative = 1.0e-12);
    }

    #[test]
    fn dipole_midpoint_potential_is_exactly_zero() {
        assert_eq!(total_potential(&dipole(), R2::zeros()), 0.0);
    }

    #[test]
    fn sample_on_a_charge_inherits_singularity_policy() {
        let [c1, c2] = dipole();
        // Field: the coincident charge contributes zero, the other one its
        // ordinary finite value.
        let e = total_field(&[c1, c2], c1.position);
        assert_eq!(e, c2.field_at(c1.position));
        assert!(e.norm().is_finite());
        // Potential: infinity from the coincident charge dominates the sum.
        assert_eq!(total_potential(&[c1, c2], c1.position), Scalar::INFINITY);
    }

    #[test]
    fn magnitudes_are_per_sample_norms() {
        let vectors = [R2::new(3.0, 4.0), R2::zeros(), R2::new(-1.0, 0.0)];
        assert_eq!(field_magnitudes(&vectors), vec![5.0, 0.0, 1.0]);
    }
}
