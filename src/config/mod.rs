// src/config/mod.rs

pub mod parameters;
pub mod scenario;

pub use parameters::{Config, PhysicalParameters, PointerParameters, SolverParameters, SubStepping};
pub use scenario::{Action, Scenario, ScenarioEvent};
