// src/main.rs

use std::env;
use std::error::Error;
use std::io::Write;

use env_logger::{Builder, Env};
use log::info;

use cartpole::models::pointer::PointerInput;
use cartpole::simulation::csv::{create_csv_row, setup_csv_output};
use cartpole::simulation::framework::run_scenario;
use cartpole::simulation::load_parameters::{load_config, load_scenario};
use cartpole::Integrator;

fn main() -> Result<(), Box<dyn Error>> {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut args = env::args().skip(1);
    let config_path = args.next().unwrap_or_else(|| "config/cartpole.yaml".to_string());
    let scenario_path = args.next().unwrap_or_else(|| "config/scenario.yaml".to_string());
    let output_path = args
        .next()
        .unwrap_or_else(|| "output/cartpole_trace.csv".to_string());

    // 設定とシナリオの読み込み
    let config = load_config(&config_path)?;
    let scenario = load_scenario(&scenario_path)?;

    // 積分器と入力変換の初期化
    let mut integrator = Integrator::new(config.physics, config.solver, scenario.initial_angle)?;
    let pointer = PointerInput::new(config.pointer);

    // CSV出力の設定
    let mut writer = setup_csv_output(&output_path)?;
    writer.write_all(create_csv_row(0.0, &integrator.snapshot()).as_bytes())?;

    // シミュレーションのメインループ
    run_scenario(&mut integrator, &pointer, &scenario, |time, snapshot| {
        writer.write_all(create_csv_row(time, snapshot).as_bytes())
    })?;
    writer.flush()?;

    info!("final state:\n{}", integrator.snapshot());
    info!("trace written to {}", output_path);
    Ok(())
}
