// src/config/scenario.rs

use serde::Deserialize;

use crate::error::SimError;

/// ヘッドレス実行用のシナリオ
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Scenario {
    pub initial_angle: f64, // 初期振子角 θ₀ (rad)
    #[serde(default = "default_frame_rate")]
    pub frame_rate: f64, // フレームレート (Hz)
    pub duration: f64, // シミュレーション時間 (s)
    #[serde(default)]
    pub events: Vec<ScenarioEvent>,
}

/// 指定時刻に積分器へ送る操作
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ScenarioEvent {
    pub time: f64, // 適用時刻 (s)
    pub action: Action,
}

/// 外部（UI 層）から積分器への操作
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    SetControl { u: f64 },
    Reset { angle: f64 },
    Freeze,
    Unfreeze,
    // 画面中心からの相対座標 (px)、y は上向き
    Press { x: f64, y: f64 },
    Drag { x: f64, y: f64 },
    Release,
}

fn default_frame_rate() -> f64 {
    60.0
}

impl Scenario {
    /// 1フレームあたりの経過時間 (s)
    pub fn frame_period(&self) -> f64 {
        1.0 / self.frame_rate
    }

    /// 総フレーム数（端数は切り捨て）
    pub fn frame_count(&self) -> usize {
        (self.duration * self.frame_rate + 1e-9).floor() as usize
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if !self.initial_angle.is_finite() {
            return Err(SimError::InvalidScenario(format!(
                "initial_angle は有限値である必要があります（値: {}）",
                self.initial_angle
            )));
        }
        if !(self.frame_rate.is_finite() && self.frame_rate > 0.0) {
            return Err(SimError::InvalidScenario(format!(
                "frame_rate は正の値である必要があります（値: {}）",
                self.frame_rate
            )));
        }
        if !(self.duration.is_finite() && self.duration >= 0.0) {
            return Err(SimError::InvalidScenario(format!(
                "duration は0以上である必要があります（値: {}）",
                self.duration
            )));
        }
        if let Some(event) = self.events.iter().find(|e| !e.time.is_finite() || e.time < 0.0) {
            return Err(SimError::InvalidScenario(format!(
                "イベント時刻は0以上である必要があります（値: {}）",
                event.time
            )));
        }
        Ok(())
    }
}
