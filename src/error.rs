// src/error.rs

use std::path::PathBuf;

use thiserror::Error;

/// シミュレーション全体で使うエラー
///
/// 積分器の操作（`reset` / `advance` など）は失敗しないため、
/// ここに現れるのは構築時の検証と設定ファイルの入出力だけ。
#[derive(Error, Debug)]
pub enum SimError {
    #[error("パラメータ `{name}` が不正です（値: {value}）: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("ファイル {} を開けません: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML {} の読み込みに失敗しました: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("シナリオが不正です: {0}")]
    InvalidScenario(String),
}
