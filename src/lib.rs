pub mod potential;
pub mod units;
pub mod configuration;
pub mod benchmark;
pub mod error;

pub use potential::kernel::{NMat3, NVec3, Potential};
pub use potential::frame::Frame;
pub use potential::params::{ParamSpec, PhysicalParameters};
pub use potential::hernquist::Hernquist;
pub use potential::miyamoto_nagai::MiyamotoNagai;
pub use potential::lee_suto::LeeSutoNfw;
pub use potential::model::{KernelKind, PotentialModel};

pub use units::units::UnitSystem;

pub use configuration::config::{build_model, ModelConfig, SetupConfig, UnitsConfig};

pub use error::PotentialError;

pub use benchmark::benchmark::bench_kernels;
