// src/math/state.rs

use serde::Serialize;

/// 値とその一階微分の組
///
/// 台車の `(x, ẋ)` と振子の `(θ, θ̇)` の両方に同じ型を使う。
/// 微分関数の戻り値 `(ẋ, ẍ)` もこの型で表す。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct StateVariable {
    pub value: f64,
    pub rate: f64,
}

impl StateVariable {
    pub const ZERO: StateVariable = StateVariable { value: 0.0, rate: 0.0 };

    pub fn new(value: f64, rate: f64) -> Self {
        StateVariable { value, rate }
    }

    /// 静止状態（微分ゼロ）
    pub fn at_rest(value: f64) -> Self {
        StateVariable { value, rate: 0.0 }
    }

    /// 前進オイラー法の1ステップ
    ///
    /// # 引数
    /// - `derivative`: 現在の状態での微分 `(d value, d rate)`
    /// - `h`: ステップ幅（秒）
    ///
    /// # 戻り値
    /// - `self + h * derivative`
    pub fn euler_step(&self, derivative: StateVariable, h: f64) -> StateVariable {
        StateVariable {
            value: self.value + h * derivative.value,
            rate: self.rate + h * derivative.rate,
        }
    }
}
