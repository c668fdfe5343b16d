// src/simulation/load_parameters.rs

use std::fs::File;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_yaml::from_reader;

use crate::config::{Config, Scenario};
use crate::error::SimError;

/// YAML ファイルを読み込む共通関数
fn load_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, SimError> {
    let file = File::open(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_reader(file).map_err(|source| SimError::Yaml {
        path: path.to_path_buf(),
        source,
    })
}

/// 設定ファイルの読み込み（読み込み後に検証する）
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, SimError> {
    let config: Config = load_yaml(path.as_ref())?;
    config.validate()?;
    Ok(config)
}

/// シナリオの読み込み
pub fn load_scenario(path: impl AsRef<Path>) -> Result<Scenario, SimError> {
    let scenario: Scenario = load_yaml(path.as_ref())?;
    scenario.validate()?;
    Ok(scenario)
}
