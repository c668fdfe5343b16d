// src/config/parameters.rs

use serde::Deserialize;

use crate::error::SimError;

/// 台車・振子の物理パラメータ（セッション中は不変）
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct PhysicalParameters {
    pub cart_mass: f64,   // 台車質量 M (kg)
    pub pole_mass: f64,   // 振子質量 m (kg)
    pub gravity: f64,     // 重力加速度 g (m/s²)、負の値
    pub pole_length: f64, // 振子長 L (m)
    pub damping: f64,     // 台車の線形減衰係数 d
}

impl Default for PhysicalParameters {
    fn default() -> Self {
        PhysicalParameters {
            cart_mass: 0.38,
            pole_mass: 0.23,
            gravity: -9.81,
            pole_length: 0.33,
            damping: 1.0,
        }
    }
}

impl PhysicalParameters {
    /// 構築時の検証
    ///
    /// M > 0, L > 0, m ≥ 0 で、全て有限値であること。
    pub fn validate(&self) -> Result<(), SimError> {
        ensure_finite("cart_mass", self.cart_mass)?;
        ensure_finite("pole_mass", self.pole_mass)?;
        ensure_finite("gravity", self.gravity)?;
        ensure_finite("pole_length", self.pole_length)?;
        ensure_finite("damping", self.damping)?;
        ensure_positive("cart_mass", self.cart_mass)?;
        ensure_positive("pole_length", self.pole_length)?;
        if self.pole_mass < 0.0 {
            return Err(SimError::InvalidParameter {
                name: "pole_mass",
                value: self.pole_mass,
                reason: "負の値は使えません",
            });
        }
        Ok(())
    }
}

/// サブステップ数の決め方
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubStepping {
    /// 整数カウンタで `floor(elapsed / h)` 回
    #[default]
    Counted,
    /// 経過時間を `h` ずつ積算し、`elapsed` に達するまで繰り返す
    Accumulated,
}

/// 積分器の設定
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SolverParameters {
    pub step_size: f64, // マイクロステップ幅 h (s)
    pub sub_stepping: SubStepping,
}

impl Default for SolverParameters {
    fn default() -> Self {
        SolverParameters {
            step_size: 0.001,
            sub_stepping: SubStepping::Counted,
        }
    }
}

impl SolverParameters {
    pub fn validate(&self) -> Result<(), SimError> {
        ensure_finite("step_size", self.step_size)?;
        ensure_positive("step_size", self.step_size)
    }
}

/// ポインタ操作の換算係数
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct PointerParameters {
    pub pole_length_px: f64, // 描画上の振子長 (px)
    pub control_scale: f64,  // 力 1 あたりのドラッグ量 (px)
}

impl Default for PointerParameters {
    fn default() -> Self {
        PointerParameters {
            pole_length_px: 150.0,
            control_scale: 100.0,
        }
    }
}

impl PointerParameters {
    pub fn validate(&self) -> Result<(), SimError> {
        ensure_finite("pole_length_px", self.pole_length_px)?;
        ensure_finite("control_scale", self.control_scale)?;
        ensure_positive("pole_length_px", self.pole_length_px)?;
        ensure_positive("control_scale", self.control_scale)
    }
}

/// 設定ファイル全体
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub physics: PhysicalParameters,
    pub solver: SolverParameters,
    pub pointer: PointerParameters,
}

impl Config {
    pub fn validate(&self) -> Result<(), SimError> {
        self.physics.validate()?;
        self.solver.validate()?;
        self.pointer.validate()
    }
}

fn ensure_finite(name: &'static str, value: f64) -> Result<(), SimError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SimError::InvalidParameter {
            name,
            value,
            reason: "有限値である必要があります",
        })
    }
}

fn ensure_positive(name: &'static str, value: f64) -> Result<(), SimError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidParameter {
            name,
            value,
            reason: "正の値である必要があります",
        })
    }
}
