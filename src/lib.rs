//! EOS-80 equation of state of seawater.
//!
//! Density and secant bulk modulus from practical salinity [PSU], ITS-90
//! temperature [°C] and sea pressure [dbar].
//!
//! ```rust
//! use eos80_rs::{seawater_density, secant_bulk_modulus};
//!
//! let rho = seawater_density(35.0, 25.0, 1000.0);
//! assert!((rho - 1027.611).abs() < 1e-3);
//! let k = secant_bulk_modulus(35.0, 25.0, 0.0);
//! assert!(k > 23_000.0);
//! ```

#[cfg(feature = "cli")]
pub mod adapters;
pub mod coefficients;
pub mod elementwise;
pub mod eos80;
#[cfg(feature = "cli")]
pub mod error;
pub mod models;
pub mod polynomial;
pub mod summary;

pub use crate::coefficients::{bar_from_dbar, t68_from_t90};
pub use crate::elementwise::{
    pure_water_density_each, seawater_density_at_surface_each, seawater_density_each,
    secant_bulk_modulus_each,
};
pub use crate::eos80::{
    bulk_modulus_a, bulk_modulus_b, bulk_modulus_k0, pure_water_bulk_modulus_a,
    pure_water_bulk_modulus_b, pure_water_bulk_modulus_k0, pure_water_density, seawater_density,
    seawater_density_at_surface, secant_bulk_modulus,
};
#[cfg(feature = "cli")]
pub use crate::error::AppError;
pub use crate::models::{Conditions, DensitySummary};
pub use crate::polynomial::{polynomial, polynomial_each};
pub use crate::summary::{compute_summary, density_profile};
