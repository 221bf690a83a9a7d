use crate::eos80::{
    pure_water_density, seawater_density, seawater_density_at_surface, secant_bulk_modulus,
};
use crate::models::{Conditions, DensitySummary};

/// Evaluate every EOS-80 quantity the crate provides for one sample.
///
/// The in-situ density is recomputed through [`seawater_density`], so it is
/// bit-identical to a direct call with the same arguments.
pub fn compute_summary(conditions: &Conditions) -> DensitySummary {
    let Conditions {
        salinity,
        temperature,
        pressure,
    } = *conditions;

    DensitySummary {
        salinity,
        temperature,
        pressure,
        pure_water_density: pure_water_density(temperature),
        surface_density: seawater_density_at_surface(salinity, temperature),
        secant_bulk_modulus: secant_bulk_modulus(salinity, temperature, pressure),
        density: seawater_density(salinity, temperature, pressure),
    }
}

/// Summaries for a water column of constant salinity and temperature.
///
/// One entry per pressure level, in the order given.
pub fn density_profile(salinity: f64, temperature: f64, pressures: &[f64]) -> Vec<DensitySummary> {
    pressures
        .iter()
        .map(|&pressure| compute_summary(&Conditions::new(salinity, temperature, pressure)))
        .collect()
}
