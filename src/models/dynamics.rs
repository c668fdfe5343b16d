// src/models/dynamics.rs

use crate::config::PhysicalParameters;
use crate::math::StateVariable;

/// 台車の状態微分を計算する純粋関数
///
/// ```text
/// ẍ = [ m·sin(θ)·(L·θ̇² − g·cos(θ)) − d·ẋ − u ] / ( M + m·sin²(θ) )
/// ```
///
/// # 引数
/// - `params`: 物理パラメータ
/// - `cart`: 台車の状態 `(x, ẋ)`
/// - `pole`: 振子の状態 `(θ, θ̇)`
/// - `u`: 制御入力
///
/// # 戻り値
/// - `(ẋ, ẍ)`
pub fn cart_derivative(
    params: &PhysicalParameters,
    cart: StateVariable,
    pole: StateVariable,
    u: f64,
) -> StateVariable {
    let (sin, cos) = pole.value.sin_cos();
    let m = params.pole_mass;
    let l = params.pole_length;

    let numerator =
        m * sin * (l * pole.rate.powi(2) - params.gravity * cos) - params.damping * cart.rate - u;
    let acceleration = numerator / mass_term(params, sin);

    StateVariable::new(cart.rate, acceleration)
}

/// 振子の状態微分を計算する純粋関数
///
/// ```text
/// θ̈ = [ (m+M)·g·sin(θ) − cos(θ)·( m·L·θ̇²·sin(θ) − d·ẋ + u ) ] / ( L·( M + m·sin²(θ) ) )
/// ```
///
/// # 引数
/// - `params`: 物理パラメータ
/// - `pole`: 振子の状態 `(θ, θ̇)`
/// - `cart`: 台車の状態 `(x, ẋ)`
/// - `u`: 制御入力
///
/// # 戻り値
/// - `(θ̇, θ̈)`
pub fn pole_derivative(
    params: &PhysicalParameters,
    pole: StateVariable,
    cart: StateVariable,
    u: f64,
) -> StateVariable {
    let (sin, cos) = pole.value.sin_cos();
    let m = params.pole_mass;
    let l = params.pole_length;

    let numerator = (m + params.cart_mass) * params.gravity * sin
        - cos * (m * l * pole.rate.powi(2) * sin - params.damping * cart.rate + u);
    let acceleration = numerator / (l * mass_term(params, sin));

    StateVariable::new(pole.rate, acceleration)
}

// M + m·sin²(θ)。M > 0 なので常に正
fn mass_term(params: &PhysicalParameters, sin: f64) -> f64 {
    params.cart_mass + params.pole_mass * sin * sin
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn params() -> PhysicalParameters {
        PhysicalParameters::default()
    }

    #[test]
    fn test_derivatives_are_deterministic() {
        let p = params();
        let cart = StateVariable::new(0.12, -0.4);
        let pole = StateVariable::new(0.7, 1.3);
        let u = 2.5;

        let first_cart = cart_derivative(&p, cart, pole, u);
        let first_pole = pole_derivative(&p, pole, cart, u);
        for _ in 0..10 {
            let c = cart_derivative(&p, cart, pole, u);
            let q = pole_derivative(&p, pole, cart, u);
            assert_eq!(c.value.to_bits(), first_cart.value.to_bits());
            assert_eq!(c.rate.to_bits(), first_cart.rate.to_bits());
            assert_eq!(q.value.to_bits(), first_pole.value.to_bits());
            assert_eq!(q.rate.to_bits(), first_pole.rate.to_bits());
        }
    }

    #[test]
    fn test_origin_is_a_fixed_point() {
        let p = params();
        let c = cart_derivative(&p, StateVariable::ZERO, StateVariable::ZERO, 0.0);
        let q = pole_derivative(&p, StateVariable::ZERO, StateVariable::ZERO, 0.0);
        assert_eq!(c, StateVariable::ZERO);
        assert_eq!(q, StateVariable::ZERO);
    }

    #[test]
    fn test_first_component_is_the_rate() {
        let p = params();
        let cart = StateVariable::new(1.0, 0.3);
        let pole = StateVariable::new(0.2, -0.9);
        assert_eq!(cart_derivative(&p, cart, pole, 0.0).value, 0.3);
        assert_eq!(pole_derivative(&p, pole, cart, 0.0).value, -0.9);
    }

    #[test]
    fn test_control_at_rest_pushes_cart_negative() {
        let p = params();
        let c = cart_derivative(&p, StateVariable::ZERO, StateVariable::ZERO, 5.0);
        assert_relative_eq!(c.rate, -5.0 / p.cart_mass, epsilon = 1e-12);

        let q = pole_derivative(&p, StateVariable::ZERO, StateVariable::ZERO, 5.0);
        assert_relative_eq!(q.rate, -5.0 / (p.pole_length * p.cart_mass), epsilon = 1e-12);
    }

    #[test]
    fn test_gravity_term_sign_follows_g_sin_theta() {
        let p = params();
        let theta0 = PI / 15.0;
        let q = pole_derivative(&p, StateVariable::at_rest(theta0), StateVariable::ZERO, 0.0);
        assert_eq!(q.rate.signum(), (p.gravity * theta0.sin()).signum());

        let mirrored = pole_derivative(&p, StateVariable::at_rest(-theta0), StateVariable::ZERO, 0.0);
        assert_relative_eq!(mirrored.rate, -q.rate, epsilon = 1e-12);
    }

    #[test]
    fn test_damping_opposes_cart_velocity() {
        let p = params();
        let c = cart_derivative(&p, StateVariable::new(0.0, 2.0), StateVariable::ZERO, 0.0);
        assert_relative_eq!(c.rate, -p.damping * 2.0 / p.cart_mass, epsilon = 1e-12);
    }

    #[test]
    fn test_massless_pole_decouples_cart() {
        let p = PhysicalParameters {
            pole_mass: 0.0,
            ..params()
        };
        let pole = StateVariable::new(1.1, 3.0);
        let cart = StateVariable::new(0.0, 0.5);
        let c = cart_derivative(&p, cart, pole, 1.0);
        assert_relative_eq!(c.rate, (-p.damping * 0.5 - 1.0) / p.cart_mass, epsilon = 1e-12);
    }
}
