use crate::coefficients::{SECK_PURE_0, SECK_PURE_1, SECK_PURE_2, SMOW, t68_from_t90};
use crate::polynomial;

/// Zeroth pressure term Kw of the pure water secant bulk modulus [bar], at ITS-68 temperature.
pub fn pure_water_bulk_modulus_k0(t68: f64) -> f64 {
    polynomial(t68, &SECK_PURE_0)
}

/// First pressure term Aw of the pure water secant bulk modulus, at ITS-68 temperature.
pub fn pure_water_bulk_modulus_a(t68: f64) -> f64 {
    polynomial(t68, &SECK_PURE_1)
}

/// Second pressure term Bw of the pure water secant bulk modulus [1/bar], at ITS-68 temperature.
pub fn pure_water_bulk_modulus_b(t68: f64) -> f64 {
    polynomial(t68, &SECK_PURE_2)
}

/// Density of Standard Mean Ocean Water [kg/m³] at ITS-90 temperature `t90` [°C].
///
/// ```rust
/// use eos80_rs::pure_water_density;
///
/// let rho = pure_water_density(4.0);
/// assert!((rho - 999.975).abs() < 1e-3);
/// ```
pub fn pure_water_density(t90: f64) -> f64 {
    polynomial(t68_from_t90(t90), &SMOW)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terms_at_zero_are_leading_coefficients() {
        assert_eq!(pure_water_bulk_modulus_k0(0.0), 19652.21);
        assert_eq!(pure_water_bulk_modulus_a(0.0), 3.239908);
        assert_eq!(pure_water_bulk_modulus_b(0.0), 8.50935e-5);
        assert_eq!(pure_water_density(0.0), 999.842594);
    }

    #[test]
    fn smow_maximum_near_four_degrees() {
        let rho4 = pure_water_density(4.0);
        assert!(rho4 > pure_water_density(0.0));
        assert!(rho4 > pure_water_density(8.0));
    }

    #[test]
    fn smow_unesco_check_value() {
        // UNESCO tables are in ITS-68: t68 = 25 °C.
        let rho = pure_water_density(25.0 / 1.00024);
        assert!((rho - 997.0479).abs() < 1e-4, "rho={rho}");
    }
}
