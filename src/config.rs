use crate::error::{CareerPathError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 探索分析の入力CSV
    pub explore_dataset: PathBuf,
    /// スキルマッチングの入力CSV（上書き対象）
    pub match_dataset: PathBuf,
    /// 抽出する業界
    pub filter_industry: String,
    /// 抽出結果の出力先
    pub filtered_output: PathBuf,
    /// グラフ画像の出力先
    pub plots_dir: PathBuf,
    pub histogram_bins: usize,
    pub top_n: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            explore_dataset: "Career_Path_Jobs_Expanded_Romania_Varied.csv".into(),
            match_dataset: "Career_Path_Jobs_With_Skills_and_MatchScores.csv".into(),
            filter_industry: "Information Technology".into(),
            filtered_output: "Information_Technology_Jobs_Romania.csv".into(),
            plots_dir: "plots".into(),
            histogram_bins: 20,
            top_n: 10,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "設定ファイルを読み込み");
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CareerPathError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("career-path").join("config.json"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.histogram_bins == 0 {
            return Err(CareerPathError::Config("histogram_bins は1以上にしてください".into()));
        }
        Ok(())
    }

    pub fn set_filter_industry(&mut self, industry: String) -> Result<()> {
        self.filter_industry = industry;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.filter_industry, "Information Technology");
        assert_eq!(config.histogram_bins, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"filter_industry": "Finance"}"#).unwrap();
        assert_eq!(config.filter_industry, "Finance");
        assert_eq!(config.top_n, 10);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let config: Config =
            serde_json::from_str(r#"{"required_skills": 7, "top_n": 3}"#).unwrap();
        assert_eq!(config.top_n, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_bins() {
        let config = Config { histogram_bins: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(CareerPathError::Config(_))));
    }
}
