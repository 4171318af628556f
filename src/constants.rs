//! Baseline physical constants for electrostatic evaluation.
//!
//! ## Accuracy
//!
//! `COULOMB_CONSTANT` is the three-significant-figure textbook value, which is
//! the convention throughout this crate: results are meant to match worked
//! classroom examples digit for digit, not CODATA. The remaining constants are
//! provided for context and carry CODATA precision.
//!
//! ## References
//!
//! - NIST Reference on Constants, Units, and Uncertainty: <https://physics.nist.gov/cuu/Constants/>
//! - CODATA 2018 values published May 20, 2019 (following 2019 SI redefinition)

/// Coulomb's constant k_e in newton square meters per square coulomb (N·m²/C²).
/// Textbook value 8.99 × 10⁹; the CODATA-derived value 1/(4πε₀) is
/// 8.9875517862 × 10⁹, about 0.017% larger.
pub const COULOMB_CONSTANT: f64 = 8.99e9;
/// Vacuum permittivity ε₀ in farads per meter (F/m).
/// Approximate value: 8.8541878128 × 10⁻¹² F/m (11 significant figures).
pub const VACUUM_PERMITTIVITY: f64 = 8.854_187_812_8e-12;
/// Elementary charge _e_ in coulombs (C).
/// Exact value by 2019 SI definition: 1.602176634 × 10⁻¹⁹ C.
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19;

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn coulomb_constant_tracks_permittivity() {
        let derived = 1.0 / (4.0 * PI * VACUUM_PERMITTIVITY);
        assert_relative_eq!(COULOMB_CONSTANT, derived, max_relative = 1.0e-3);
    }
}
