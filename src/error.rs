use thiserror::Error;

#[derive(Error, Debug)]
pub enum CareerPathError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("データエラー: {0}")]
    Data(#[from] career_path_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("グラフ描画エラー: {0}")]
    PlotRendering(String),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("スキル番号が不正です: {0}")]
    InvalidChoice(String),

    #[error("スキルカタログが空です: {0}")]
    EmptyCatalog(String),

    #[error("入力エラー: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, CareerPathError>;
