//! Unit systems and gravitational-constant resolution
//!
//! A [`UnitSystem`] pins down one consistent choice of length/mass/time
//! units via SI scale factors (metres per length unit, etc). The only unit
//! logic the evaluation core consumes is [`UnitSystem::gravitational_constant`],
//! resolved exactly once when a model is constructed. Kernels never convert
//! units themselves.

use serde::Deserialize;

/// CODATA 2018 gravitational constant, m^3 kg^-1 s^-2
pub const G_SI: f64 = 6.67430e-11;

/// Metres per kiloparsec
pub const KPC_M: f64 = 3.085677581491367e19;
/// Seconds per megayear (Julian)
pub const MYR_S: f64 = 3.15576e13;
/// Kilograms per solar mass
pub const MSUN_KG: f64 = 1.98892e30;

/// One consistent unit system, stored as SI scale factors:
/// `length_m` metres per length unit, `mass_kg` kilograms per mass unit,
/// `time_s` seconds per time unit
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct UnitSystem {
    pub length_m: f64,
    pub mass_kg: f64,
    pub time_s: f64,
}

impl UnitSystem {
    /// Plain SI: metre, kilogram, second
    pub fn si() -> Self {
        Self {
            length_m: 1.0,
            mass_kg: 1.0,
            time_s: 1.0,
        }
    }

    /// Galactic-dynamics units: kiloparsec, solar mass, megayear
    pub fn galactic() -> Self {
        Self {
            length_m: KPC_M,
            mass_kg: MSUN_KG,
            time_s: MYR_S,
        }
    }

    /// Dimensionless units with G = 1 (useful for tests and toy problems)
    pub fn dimensionless() -> Self {
        Self {
            length_m: 1.0,
            mass_kg: 1.0 / G_SI, // makes gravitational_constant() == 1
            time_s: 1.0,
        }
    }

    /// Resolve G in this system's derived units (length^3 mass^-1 time^-2).
    /// G_sys = G_SI * mass_kg * time_s^2 / length_m^3
    pub fn gravitational_constant(&self) -> f64 {
        let l3 = self.length_m * self.length_m * self.length_m;
        G_SI * self.mass_kg * self.time_s * self.time_s / l3
    }
}
