use serde::{Deserialize, Serialize};

/// Hydrographic conditions of a single sample.
///
/// - `salinity`: practical salinity [PSU]
/// - `temperature`: in-situ temperature, ITS-90 [°C]
/// - `pressure`: sea pressure [dbar]
///
/// Fields missing from a JSON document fall back to [`Conditions::default`];
/// unknown fields are rejected.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Conditions {
    pub salinity: f64,
    pub temperature: f64,
    pub pressure: f64,
}

impl Default for Conditions {
    fn default() -> Self {
        Self {
            salinity: 35.0,
            temperature: 25.0,
            pressure: 0.0,
        }
    }
}

impl Conditions {
    pub fn new(salinity: f64, temperature: f64, pressure: f64) -> Self {
        Self {
            salinity,
            temperature,
            pressure,
        }
    }
}

/// EOS-80 quantities evaluated for one set of [`Conditions`].
///
/// - `pure_water_density`: SMOW density at the sample temperature [kg/m³]
/// - `surface_density`: seawater density at zero sea pressure [kg/m³]
/// - `secant_bulk_modulus`: K(S, t, p) [bar]
/// - `density`: in-situ density [kg/m³]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DensitySummary {
    pub salinity: f64,
    pub temperature: f64,
    pub pressure: f64,
    pub pure_water_density: f64,
    pub surface_density: f64,
    pub secant_bulk_modulus: f64,
    pub density: f64,
}
