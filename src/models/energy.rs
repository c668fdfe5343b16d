// src/models/energy.rs

use crate::config::PhysicalParameters;
use crate::math::StateVariable;

/// 減衰・入力なしの系の全力学的エネルギー
///
/// ```text
/// E = ½(M+m)ẋ² + m·L·ẋ·θ̇·cos(θ) + ½·m·L²·θ̇² + m·g·L·cos(θ)
/// ```
///
/// g < 0 のとき θ = 0 がポテンシャル最小（重力方向にぶら下がった姿勢）。
pub fn total_energy(params: &PhysicalParameters, cart: StateVariable, pole: StateVariable) -> f64 {
    let m = params.pole_mass;
    let l = params.pole_length;
    let cos = pole.value.cos();

    let kinetic = 0.5 * (params.cart_mass + m) * cart.rate.powi(2)
        + m * l * cart.rate * pole.rate * cos
        + 0.5 * m * l * l * pole.rate.powi(2);
    let potential = m * params.gravity * l * cos;
    kinetic + potential
}

/// 平衡点 θ = 0 まわりの線形化角振動数 ω = sqrt(|g|(M+m)/(M·L))
///
/// 前進オイラー法では1ステップごとに振動エネルギーが最大でおよそ
/// `(1 + h²ω²)` 倍になる。
pub fn linearized_angular_frequency(params: &PhysicalParameters) -> f64 {
    (params.gravity.abs() * (params.cart_mass + params.pole_mass)
        / (params.cart_mass * params.pole_length))
        .sqrt()
}
