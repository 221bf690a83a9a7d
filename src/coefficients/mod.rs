//! Coefficient tables of the EOS-80 equation of state of seawater.
//!
//! Every table is an ascending-degree polynomial: index `i` multiplies `x^i`.
//! The variable is ITS-68 temperature (°C) unless stated otherwise.
//!
//! Sources:
//! - UNESCO (1981): Tenth report of the joint panel on oceanographic tables and standards.
//! - Millero & Poisson (1981): International one-atmosphere equation of state of seawater.
//! - Fofonoff & Millard (1983): Algorithms for computation of fundamental properties
//!   of seawater, UNESCO technical papers in marine science 44.
//!
//! Units conventions:
//! - Densities are kg/m³
//! - Bulk-modulus terms are in bar, pressure is expressed in bar (1 dbar = 0.1 bar)
//!
//! The values must match the published tables digit for digit; a transcription
//! error cannot be detected at runtime, only by the reference checks in `tests/`.
#![allow(clippy::excessive_precision)]

/// Scale factor from ITS-90 to ITS-68 temperature (t68 = t90 × 1.00024).
pub const T68_SCALE: f64 = 1.00024;
/// Conversion from decibar to bar, the pressure unit the EOS-80 tables are defined in.
pub const DBAR_TO_BAR: f64 = 1e-1;

// Pure water secant bulk modulus
/// Kw(t): zeroth pressure term of the pure water secant bulk modulus.
pub const SECK_PURE_0: [f64; 5] = [19652.21, 148.4206, -2.327105, 1.360477e-2, -5.155288e-5];
/// Aw(t): first pressure term of the pure water secant bulk modulus.
pub const SECK_PURE_1: [f64; 4] = [3.239908, 1.43713e-3, 1.16092e-4, -5.77905e-7];
/// Bw(t): second pressure term of the pure water secant bulk modulus.
pub const SECK_PURE_2: [f64; 3] = [8.50935e-5, -6.12293e-6, 5.2787e-8];

// Salinity corrections of the secant bulk modulus
/// Temperature polynomial multiplying S in the zeroth pressure term.
pub const SECK_0_S: [f64; 4] = [54.6746, -0.603459, 1.09987e-2, -6.1670e-5];
/// Temperature polynomial multiplying S^1.5 in the zeroth pressure term.
pub const SECK_0_S15: [f64; 3] = [7.944e-2, 1.6483e-2, -5.3009e-4];
/// Temperature polynomial multiplying S in the first pressure term.
pub const SECK_1_S: [f64; 3] = [2.2838e-3, -1.0981e-5, -1.6078e-6];
/// Coefficient of S^1.5 in the first pressure term.
pub const SECK_1_S15: f64 = 1.91075e-4;
/// Temperature polynomial multiplying S in the second pressure term.
pub const SECK_2_S: [f64; 3] = [-9.9348e-7, 2.0816e-8, 9.1697e-10];

/// Density of Standard Mean Ocean Water (Bigg 1967).
pub const SMOW: [f64; 6] = [
    999.842594,
    6.793952e-2,
    -9.095290e-3,
    1.001685e-4,
    -1.120083e-6,
    6.536332e-9,
];

// One-atmosphere salinity corrections
/// Temperature polynomial multiplying S in the one-atmosphere density.
pub const DENS_S: [f64; 5] = [8.24493e-1, -4.0899e-3, 7.6438e-5, -8.2467e-7, 5.3875e-9];
/// Temperature polynomial multiplying S^1.5 in the one-atmosphere density.
pub const DENS_S15: [f64; 3] = [-5.72466e-3, 1.0227e-4, -1.6546e-6];
/// Coefficient of S^2 in the one-atmosphere density.
pub const DENS_S2: f64 = 4.8314e-4;

/// ITS-68 temperature from ITS-90 temperature.
#[inline]
pub fn t68_from_t90(t90: f64) -> f64 {
    t90 * T68_SCALE
}

/// Pressure in bar from pressure in decibar.
#[inline]
pub fn bar_from_dbar(p_dbar: f64) -> f64 {
    p_dbar * DBAR_TO_BAR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_terms_match_published_tables() {
        assert_eq!(SMOW[0], 999.842594);
        assert_eq!(SECK_PURE_0[0], 19652.21);
        assert_eq!(DENS_S[0], 0.824493);
        assert_eq!(SMOW.len(), 6);
    }

    #[test]
    fn scale_factors() {
        assert_eq!(t68_from_t90(0.0), 0.0);
        assert!((t68_from_t90(25.0) - 25.006).abs() < 1e-12);
        assert!((bar_from_dbar(1000.0) - 100.0).abs() < 1e-12);
    }
}
