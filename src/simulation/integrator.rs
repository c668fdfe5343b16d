// src/simulation/integrator.rs

use std::fmt;

use log::{debug, info, trace, warn};
use serde::Serialize;

use crate::config::{PhysicalParameters, SolverParameters, SubStepping};
use crate::error::SimError;
use crate::math::StateVariable;
use crate::models::dynamics::{cart_derivative, pole_derivative};
use crate::models::energy::total_energy;

/// 積分器の動作モード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Active,
    /// `advance` が何もしない状態（ドラッグで角度を設定している間）
    Frozen,
}

/// 描画・HUD 用の読み取り専用スナップショット
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot {
    pub x: f64,
    pub x_dot: f64,
    pub theta: f64,
    pub theta_dot: f64,
    pub u: f64,
    pub mode: Mode,
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "θ = {:+.4}\nx = {:+.4}\nu = {:+.4}", self.theta, self.x, self.u)
    }
}

/// 台車・振子系の状態を所有し、サブステップ付き前進オイラー法で進める積分器
#[derive(Debug, Clone)]
pub struct Integrator {
    params: PhysicalParameters,
    solver: SolverParameters,
    cart: StateVariable,
    pole: StateVariable,
    control: f64,
    mode: Mode,
}

impl Default for Integrator {
    fn default() -> Self {
        Integrator::unchecked(PhysicalParameters::default(), SolverParameters::default(), 0.0)
    }
}

impl Integrator {
    /// 積分器を生成する
    ///
    /// # 引数
    /// - `params`: 物理パラメータ（ここで検証する）
    /// - `solver`: ステップ幅とサブステップ方式
    /// - `initial_angle`: 初期振子角 θ₀ (rad)
    ///
    /// # 戻り値
    /// - 台車 `(0, 0)`、振子 `(θ₀, 0)`、`Active` の積分器
    pub fn new(
        params: PhysicalParameters,
        solver: SolverParameters,
        initial_angle: f64,
    ) -> Result<Self, SimError> {
        params.validate()?;
        solver.validate()?;
        info!(
            "integrator created: M={} m={} g={} L={} d={} h={} ({:?})",
            params.cart_mass,
            params.pole_mass,
            params.gravity,
            params.pole_length,
            params.damping,
            solver.step_size,
            solver.sub_stepping
        );
        Ok(Integrator::unchecked(params, solver, initial_angle))
    }

    /// 既定パラメータで初期角だけ指定する
    pub fn with_initial_angle(initial_angle: f64) -> Self {
        Integrator::unchecked(
            PhysicalParameters::default(),
            SolverParameters::default(),
            initial_angle,
        )
    }

    fn unchecked(params: PhysicalParameters, solver: SolverParameters, initial_angle: f64) -> Self {
        Integrator {
            params,
            solver,
            cart: StateVariable::ZERO,
            pole: StateVariable::at_rest(initial_angle),
            control: 0.0,
            mode: Mode::Active,
        }
    }

    /// 振子を `(θ₀, 0)`、台車を `(0, 0)` に戻す。制御入力とモードは保持
    pub fn reset(&mut self, initial_angle: f64) {
        debug!("reset: theta0={:+.4} mode={:?}", initial_angle, self.mode);
        self.pole = StateVariable::at_rest(initial_angle);
        self.cart = StateVariable::ZERO;
    }

    /// 制御入力をそのまま保持する（飽和処理は呼び出し側の責任）
    pub fn set_control(&mut self, u: f64) {
        self.control = u;
    }

    pub fn freeze(&mut self) {
        if self.mode != Mode::Frozen {
            debug!("mode: Active -> Frozen");
        }
        self.mode = Mode::Frozen;
    }

    pub fn unfreeze(&mut self) {
        if self.mode != Mode::Active {
            debug!("mode: Frozen -> Active");
        }
        self.mode = Mode::Active;
    }

    /// 1フレーム分だけ状態を進める
    ///
    /// `Frozen` のときは何もしない。それ以外はサブステップ方式に従って
    /// 前進オイラー法を繰り返す。
    ///
    /// # 引数
    /// - `elapsed`: 前回からの経過時間 (s)
    ///
    /// # 戻り値
    /// - 実行したサブステップ数
    pub fn advance(&mut self, elapsed: f64) -> usize {
        if self.mode == Mode::Frozen {
            trace!("advance skipped: frozen");
            return 0;
        }
        if !(elapsed.is_finite() && elapsed >= 0.0) {
            warn!("advance ignored: elapsed={}", elapsed);
            return 0;
        }

        let h = self.solver.step_size;
        let steps = match self.solver.sub_stepping {
            SubStepping::Counted => {
                let count = counted_sub_steps(elapsed, h);
                for _ in 0..count {
                    self.euler_step(h);
                }
                count
            }
            SubStepping::Accumulated => {
                let mut accumulated = 0.0;
                let mut count = 0;
                while accumulated < elapsed {
                    self.euler_step(h);
                    accumulated += h;
                    count += 1;
                }
                count
            }
        };

        trace!(
            "advance: elapsed={} steps={} x={:+.6} theta={:+.6}",
            elapsed,
            steps,
            self.cart.value,
            self.pole.value
        );
        steps
    }

    // 台車・振子の微分はどちらも更新前の状態から計算する
    fn euler_step(&mut self, h: f64) {
        let cart = self.cart;
        let pole = self.pole;
        let cart_rate = cart_derivative(&self.params, cart, pole, self.control);
        let pole_rate = pole_derivative(&self.params, pole, cart, self.control);
        self.cart = cart.euler_step(cart_rate, h);
        self.pole = pole.euler_step(pole_rate, h);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            x: self.cart.value,
            x_dot: self.cart.rate,
            theta: self.pole.value,
            theta_dot: self.pole.rate,
            u: self.control,
            mode: self.mode,
        }
    }

    pub fn cart(&self) -> StateVariable {
        self.cart
    }

    pub fn pole(&self) -> StateVariable {
        self.pole
    }

    pub fn control(&self) -> f64 {
        self.control
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_frozen(&self) -> bool {
        self.mode == Mode::Frozen
    }

    pub fn parameters(&self) -> &PhysicalParameters {
        &self.params
    }

    pub fn solver(&self) -> &SolverParameters {
        &self.solver
    }

    /// 現在の全力学的エネルギー（減衰・入力は含まない）
    pub fn energy(&self) -> f64 {
        total_energy(&self.params, self.cart, self.pole)
    }
}

/// `floor(elapsed / h)`。ちょうど割り切れる値が丸めで1つ減らないよう僅かに補正する
pub fn counted_sub_steps(elapsed: f64, h: f64) -> usize {
    ((elapsed / h) + 1e-9).floor() as usize
}
