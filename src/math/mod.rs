// src/math/mod.rs

pub mod state;

pub use state::StateVariable;
