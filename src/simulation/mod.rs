// src/simulation/mod.rs

pub mod csv;
pub mod framework;
pub mod integrator;
pub mod load_parameters;
pub mod shared;

pub use integrator::{Integrator, Mode, Snapshot};
pub use shared::SharedIntegrator;
