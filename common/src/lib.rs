//! Career Path Common Library
//!
//! 求人データセットの型・統計・スキルマッチング

pub mod types;
pub mod error;
pub mod table;
pub mod stats;
pub mod profile;
pub mod skills;
pub mod matching;
pub mod export;

pub use types::JobListing;
pub use error::{Error, Result};
pub use table::Table;
pub use skills::{parse_skills, SkillCatalog};
pub use matching::{apply_match_scores, match_score, SelectionOutcome, SkillSelector, REQUIRED_SKILLS};
