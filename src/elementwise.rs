//! Element-wise versions of the EOS-80 functions.
//!
//! Inputs are zipped, so the result has the length of the shortest slice.

use crate::eos80::{
    pure_water_density, seawater_density, seawater_density_at_surface, secant_bulk_modulus,
};

/// [`pure_water_density`] for each temperature.
pub fn pure_water_density_each(t90: &[f64]) -> Vec<f64> {
    t90.iter().map(|&t| pure_water_density(t)).collect()
}

/// [`seawater_density_at_surface`] for each (salinity, temperature) pair.
pub fn seawater_density_at_surface_each(sp: &[f64], t90: &[f64]) -> Vec<f64> {
    sp.iter()
        .zip(t90)
        .map(|(&s, &t)| seawater_density_at_surface(s, t))
        .collect()
}

/// [`secant_bulk_modulus`] for each (salinity, temperature, pressure) triple.
pub fn secant_bulk_modulus_each(sp: &[f64], t90: &[f64], p_dbar: &[f64]) -> Vec<f64> {
    sp.iter()
        .zip(t90)
        .zip(p_dbar)
        .map(|((&s, &t), &p)| secant_bulk_modulus(s, t, p))
        .collect()
}

/// [`seawater_density`] for each (salinity, temperature, pressure) triple.
pub fn seawater_density_each(sp: &[f64], t90: &[f64], p_dbar: &[f64]) -> Vec<f64> {
    sp.iter()
        .zip(t90)
        .zip(p_dbar)
        .map(|((&s, &t), &p)| seawater_density(s, t, p))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agrees_with_scalar_calls() {
        let sp = [0.0, 20.0, 35.0];
        let t = [4.0, 12.0, 25.0];
        let p = [0.0, 1000.0, 5000.0];

        let rho = seawater_density_each(&sp, &t, &p);
        let k = secant_bulk_modulus_each(&sp, &t, &p);
        let rho0 = seawater_density_at_surface_each(&sp, &t);
        let smow = pure_water_density_each(&t);
        for i in 0..3 {
            assert_eq!(rho[i], seawater_density(sp[i], t[i], p[i]));
            assert_eq!(k[i], secant_bulk_modulus(sp[i], t[i], p[i]));
            assert_eq!(rho0[i], seawater_density_at_surface(sp[i], t[i]));
            assert_eq!(smow[i], pure_water_density(t[i]));
        }
    }

    #[test]
    fn shortest_input_wins() {
        let rho = seawater_density_each(&[35.0, 35.0], &[10.0], &[0.0, 100.0, 200.0]);
        assert_eq!(rho.len(), 1);
    }
}
