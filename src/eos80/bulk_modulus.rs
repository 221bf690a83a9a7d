use crate::coefficients::{
    SECK_0_S, SECK_0_S15, SECK_1_S, SECK_1_S15, SECK_2_S, bar_from_dbar, t68_from_t90,
};
use crate::eos80::pure_water::{
    pure_water_bulk_modulus_a, pure_water_bulk_modulus_b, pure_water_bulk_modulus_k0,
};
use crate::polynomial;

/// Zeroth pressure term K(S, t, 0) of the seawater secant bulk modulus [bar].
///
/// `sp` is practical salinity, `t68` ITS-68 temperature [°C]. Negative salinity gives NaN.
pub fn bulk_modulus_k0(sp: f64, t68: f64) -> f64 {
    pure_water_bulk_modulus_k0(t68)
        + polynomial(t68, &SECK_0_S) * sp
        + polynomial(t68, &SECK_0_S15) * sp.powf(1.5)
}

/// First pressure term A of the seawater secant bulk modulus. Negative salinity gives NaN.
pub fn bulk_modulus_a(sp: f64, t68: f64) -> f64 {
    pure_water_bulk_modulus_a(t68) + polynomial(t68, &SECK_1_S) * sp + SECK_1_S15 * sp.powf(1.5)
}

/// Second pressure term B of the seawater secant bulk modulus [1/bar].
pub fn bulk_modulus_b(sp: f64, t68: f64) -> f64 {
    pure_water_bulk_modulus_b(t68) + polynomial(t68, &SECK_2_S) * sp
}

/// Secant bulk modulus K(S, t, p) of seawater [bar].
///
/// # Arguments
/// * `sp` - Practical salinity [PSU]
/// * `t90` - In-situ temperature, ITS-90 [°C]
/// * `p_dbar` - Sea pressure [dbar]
///
/// The three pressure terms are combined as `K0 + A·p + B·p²` with `p` in bar.
pub fn secant_bulk_modulus(sp: f64, t90: f64, p_dbar: f64) -> f64 {
    let t68 = t68_from_t90(t90);
    let p_bar = bar_from_dbar(p_dbar);
    let terms = [
        bulk_modulus_k0(sp, t68),
        bulk_modulus_a(sp, t68),
        bulk_modulus_b(sp, t68),
    ];
    polynomial(p_bar, &terms)
}
