// src/models/mod.rs

pub mod dynamics;
pub mod energy;
pub mod pointer;
