// src/simulation/shared.rs

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::simulation::integrator::{Integrator, Snapshot};

/// 入力スレッドと描画スレッドが別の環境向けに、積分器を1つのロックで包む
///
/// 各操作はロックを1回だけ取る。状態は単純な浮動小数点値なので、
/// ロックが poison されていても中身はそのまま使う。
#[derive(Debug, Clone)]
pub struct SharedIntegrator {
    inner: Arc<Mutex<Integrator>>,
}

impl SharedIntegrator {
    pub fn new(integrator: Integrator) -> Self {
        SharedIntegrator {
            inner: Arc::new(Mutex::new(integrator)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Integrator> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn reset(&self, initial_angle: f64) {
        self.lock().reset(initial_angle);
    }

    pub fn set_control(&self, u: f64) {
        self.lock().set_control(u);
    }

    pub fn freeze(&self) {
        self.lock().freeze();
    }

    pub fn unfreeze(&self) {
        self.lock().unfreeze();
    }

    pub fn advance(&self, elapsed: f64) -> usize {
        self.lock().advance(elapsed)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.lock().snapshot()
    }

    /// ロックを保持したまま任意の処理を行う（複数操作をまとめたい場合）
    pub fn with<R>(&self, f: impl FnOnce(&mut Integrator) -> R) -> R {
        f(&mut self.lock())
    }
}
