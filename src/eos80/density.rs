use crate::coefficients::{DENS_S, DENS_S15, DENS_S2, bar_from_dbar, t68_from_t90};
use crate::eos80::bulk_modulus::secant_bulk_modulus;
use crate::eos80::pure_water::pure_water_density;
use crate::polynomial;

/// One-atmosphere density of seawater ρ(S, t, 0) [kg/m³].
///
/// Evaluated as a polynomial in √S whose coefficients are SMOW, zero and the
/// temperature dependent salinity corrections. Negative salinity gives NaN.
///
/// ```rust
/// use eos80_rs::seawater_density_at_surface;
///
/// let rho = seawater_density_at_surface(35.0, 25.0);
/// assert!((rho - 1023.34).abs() < 0.01);
/// ```
pub fn seawater_density_at_surface(sp: f64, t90: f64) -> f64 {
    let t68 = t68_from_t90(t90);
    let coefficients = [
        pure_water_density(t90),
        0.0,
        polynomial(t68, &DENS_S),
        polynomial(t68, &DENS_S15),
        DENS_S2,
    ];
    polynomial(sp.sqrt(), &coefficients)
}

/// In-situ density of seawater ρ(S, t, p) [kg/m³].
///
/// # Arguments
/// * `sp` - Practical salinity [PSU]
/// * `t90` - In-situ temperature, ITS-90 [°C]
/// * `p_dbar` - Sea pressure [dbar]
///
/// # Returns
/// `ρ(S, t, 0) / (1 - p / K(S, t, p))`. Infinite when K equals p (in bar).
pub fn seawater_density(sp: f64, t90: f64, p_dbar: f64) -> f64 {
    let rho0 = seawater_density_at_surface(sp, t90);
    let k = secant_bulk_modulus(sp, t90, p_dbar);
    rho0 / (1.0 - bar_from_dbar(p_dbar) / k)
}
