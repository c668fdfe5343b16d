// src/simulation/framework.rs

use log::{debug, info, trace};

use crate::config::{Action, Scenario, ScenarioEvent};
use crate::models::pointer::PointerInput;
use crate::simulation::integrator::{Integrator, Snapshot};

// 浮動小数点の時刻比較の許容誤差
const TIME_EPSILON: f64 = 1e-9;

/// 操作を積分器に適用する
pub fn apply_action(integrator: &mut Integrator, pointer: &PointerInput, action: Action) {
    debug!("apply {:?}", action);
    match action {
        Action::SetControl { u } => integrator.set_control(u),
        Action::Reset { angle } => integrator.reset(angle),
        Action::Freeze => integrator.freeze(),
        Action::Unfreeze => integrator.unfreeze(),
        Action::Press { x, y } => pointer.press(integrator, x, y),
        Action::Drag { x, y } => pointer.drag(integrator, x, y),
        Action::Release => pointer.release(integrator),
    }
}

/// シナリオを固定フレームレートで実行する
///
/// 各フレームで、時刻に達したイベントを時刻順（同時刻は記述順）に適用してから
/// `advance(1 / frame_rate)` を呼び、進めた後の時刻とスナップショットを
/// `on_frame` に渡す。
///
/// # 戻り値
/// - 実行したサブステップの総数
pub fn run_scenario<E>(
    integrator: &mut Integrator,
    pointer: &PointerInput,
    scenario: &Scenario,
    mut on_frame: impl FnMut(f64, &Snapshot) -> Result<(), E>,
) -> Result<usize, E> {
    let mut events: Vec<&ScenarioEvent> = scenario.events.iter().collect();
    events.sort_by(|a, b| a.time.total_cmp(&b.time));

    let period = scenario.frame_period();
    let frames = scenario.frame_count();
    info!("running scenario: {} frames at {} Hz", frames, scenario.frame_rate);

    let mut pending = events.into_iter().peekable();
    let mut total_steps = 0;
    for frame in 0..frames {
        let now = frame as f64 * period;
        while let Some(event) = pending.next_if(|e| e.time <= now + TIME_EPSILON) {
            apply_action(integrator, pointer, event.action);
        }

        total_steps += integrator.advance(period);
        let time = (frame + 1) as f64 * period;
        let snapshot = integrator.snapshot();
        trace!("t={:.4}\n{}", time, snapshot);
        on_frame(time, &snapshot)?;
    }

    let skipped = pending.count();
    if skipped > 0 {
        debug!("{} events after the end of the scenario were not applied", skipped);
    }
    info!("scenario finished: {} sub-steps", total_steps);
    Ok(total_steps)
}
