//! EOS-80 equation of state of seawater.
//!
//! Public entry points take practical salinity (PSU), ITS-90 temperature (°C)
//! and pressure (dbar). Internally the published tables are evaluated at
//! ITS-68 temperature and pressure in bar.
//!
//! Inputs outside the oceanographic range are not rejected: negative salinity
//! gives NaN (`sqrt`/`powf` of a negative number) and a bulk modulus equal to
//! the pressure gives an infinite density.

pub mod bulk_modulus;
pub mod density;
pub mod pure_water;

pub use bulk_modulus::{bulk_modulus_a, bulk_modulus_b, bulk_modulus_k0, secant_bulk_modulus};
pub use density::{seawater_density, seawater_density_at_surface};
pub use pure_water::{
    pure_water_bulk_modulus_a, pure_water_bulk_modulus_b, pure_water_bulk_modulus_k0,
    pure_water_density,
};
