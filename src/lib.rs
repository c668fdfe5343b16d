// src/lib.rs

//! 台車に取り付けた振子（カートポール系）の非線形ダイナミクスを、
//! サブステップ付き前進オイラー法で固定フレームレートごとに進めるコア。
//!
//! 描画や入力イベントの処理は外部の責務で、外部からは
//! `reset` / `set_control` / `freeze` / `unfreeze` / `advance` と
//! スナップショットの読み取りだけを使う。

pub mod config;
pub mod error;
pub mod math;
pub mod models;
pub mod simulation;

pub use config::{Config, PhysicalParameters, SolverParameters, SubStepping};
pub use error::SimError;
pub use math::StateVariable;
pub use simulation::{Integrator, Mode, SharedIntegrator, Snapshot};
