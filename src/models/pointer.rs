// src/models/pointer.rs

use log::debug;

use crate::config::PointerParameters;
use crate::simulation::integrator::Integrator;

/// ポインタ操作を積分器の操作に変換する
///
/// 座標は画面中心からの相対値 (px)、y は上向き。
/// 下半分（y < 0）の押下は振子角のドラッグ、上半分の移動は制御入力になる。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    params: PointerParameters,
}

impl Default for PointerInput {
    fn default() -> Self {
        PointerInput::new(PointerParameters::default())
    }
}

impl PointerInput {
    pub fn new(params: PointerParameters) -> Self {
        PointerInput { params }
    }

    pub fn press(&self, integrator: &mut Integrator, x: f64, y: f64) {
        if y < 0.0 {
            integrator.freeze();
            self.drag(integrator, x, y);
        }
    }

    pub fn drag(&self, integrator: &mut Integrator, x: f64, y: f64) {
        if y < 0.0 {
            integrator.reset(self.angle_for(x));
        } else {
            integrator.set_control(self.control_for(x));
        }
    }

    /// 離したら必ず再開し、制御入力をゼロに戻す
    pub fn release(&self, integrator: &mut Integrator) {
        debug!("pointer released");
        integrator.unfreeze();
        integrator.set_control(0.0);
    }

    /// 水平方向のずれから振子角を求める: atan(x / 振子長)
    pub fn angle_for(&self, x: f64) -> f64 {
        (x / self.params.pole_length_px).atan()
    }

    pub fn control_for(&self, x: f64) -> f64 {
        x / self.params.control_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::integrator::Mode;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn test_press_in_lower_half_freezes_and_sets_angle() {
        let input = PointerInput::default();
        let mut integrator = Integrator::with_initial_angle(0.0);
        integrator.advance(0.1);

        input.press(&mut integrator, 150.0, -10.0);

        let s = integrator.snapshot();
        assert_eq!(s.mode, Mode::Frozen);
        assert_relative_eq!(s.theta, FRAC_PI_4, epsilon = 1e-12);
        assert_eq!((s.x, s.x_dot, s.theta_dot), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_press_in_upper_half_is_ignored() {
        let input = PointerInput::default();
        let mut integrator = Integrator::with_initial_angle(0.3);
        let before = integrator.snapshot();
        input.press(&mut integrator, 80.0, 20.0);
        assert_eq!(integrator.snapshot(), before);
    }

    #[test]
    fn test_drag_in_upper_half_sets_scaled_control() {
        let input = PointerInput::default();
        let mut integrator = Integrator::with_initial_angle(0.0);
        input.drag(&mut integrator, 250.0, 40.0);
        assert_eq!(integrator.control(), 2.5);
        assert!(!integrator.is_frozen());
    }

    #[test]
    fn test_drag_while_frozen_keeps_resetting_angle() {
        let input = PointerInput::default();
        let mut integrator = Integrator::with_initial_angle(0.0);
        input.press(&mut integrator, 0.0, -50.0);
        input.drag(&mut integrator, -150.0, -50.0);
        assert_relative_eq!(integrator.pole().value, -FRAC_PI_4, epsilon = 1e-12);
        assert_eq!(integrator.advance(1.0 / 60.0), 0);
    }

    #[test]
    fn test_release_unfreezes_and_clears_control() {
        let input = PointerInput::default();
        let mut integrator = Integrator::with_initial_angle(0.0);
        input.drag(&mut integrator, 300.0, 10.0);
        input.press(&mut integrator, 30.0, -10.0);

        input.release(&mut integrator);

        assert_eq!(integrator.mode(), Mode::Active);
        assert_eq!(integrator.control(), 0.0);
    }

    #[test]
    fn test_custom_scales() {
        let input = PointerInput::new(PointerParameters {
            pole_length_px: 100.0,
            control_scale: 10.0,
        });
        assert_relative_eq!(input.angle_for(100.0), FRAC_PI_4, epsilon = 1e-12);
        assert_eq!(input.control_for(-25.0), -2.5);
    }
}
