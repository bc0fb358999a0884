//! Error taxonomy for catalog loading, draws and configuration.
use crate::catalog::WeaponType;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read weapon catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("weapon catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("weapon catalog is empty")]
    Empty,
    #[error("weapon catalog contains duplicate name `{0}`")]
    DuplicateName(String),
}

/// Failures that end a single interaction. Each maps to a user-visible message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    #[error("weapon catalog is empty")]
    EmptyCatalog,
    #[error("no weapons of type {0}")]
    NoCandidates(WeaponType),
    #[error("no draw history to redraw from")]
    NoHistory,
    #[error("previous weapon `{0}` is no longer in the catalog")]
    StaleHistory(String),
    #[error("no previous multi-draw to repeat")]
    NoMultiTargets,
    #[error("no users selected for a multi-draw")]
    NoTargetsSelected,
}

impl DrawError {
    /// Message shown to the invoking user.
    pub fn user_message(&self) -> String {
        match self {
            DrawError::EmptyCatalog => "⚠️ 武器一覧が空です。".to_string(),
            DrawError::NoCandidates(t) => {
                format!("📭 タイプ「{}」の武器が見つかりません。", t.as_str())
            }
            DrawError::NoHistory => "履歴がないため再抽選できません。".to_string(),
            DrawError::StaleHistory(_) => "前回の武器情報が見つかりません。".to_string(),
            DrawError::NoMultiTargets => {
                "前回の複数人抽選が見つからないため再抽選できません。".to_string()
            }
            DrawError::NoTargetsSelected => "抽選するユーザーを選択してください。".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {name}: `{value}`")]
    Invalid { name: &'static str, value: String },
}
