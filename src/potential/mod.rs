pub mod frame;
pub mod params;
pub mod kernel;
pub mod hernquist;
pub mod miyamoto_nagai;
pub mod lee_suto;
pub mod model;
