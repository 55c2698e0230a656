//! 求人データの型定義
//!
//! - 列名定数
//! - JobListing: Tableから射影した型付きレコード

use crate::error::Result;
use crate::table::{parse_number, Table};

pub const COL_INDUSTRY: &str = "IndustryCluster";
pub const COL_JOB_TITLE: &str = "JobTitle";
pub const COL_ENTRY_WAGE: &str = "EntryLevelWage";
pub const COL_AVERAGE_WAGE: &str = "AverageWage";
pub const COL_SKILLS: &str = "Skills";
pub const COL_MATCH_SCORE: &str = "MatchScore";

/// 求人レコード
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobListing {
    pub industry_cluster: String,
    pub job_title: String,
    pub entry_level_wage: Option<f64>,
    pub average_wage: Option<f64>,
}

impl JobListing {
    /// 表から求人レコードを取り出す（必須列が無ければエラー）
    pub fn from_table(table: &Table) -> Result<Vec<JobListing>> {
        let industry = table.column_index(COL_INDUSTRY)?;
        let title = table.column_index(COL_JOB_TITLE)?;
        let entry = table.column_index(COL_ENTRY_WAGE)?;
        let average = table.column_index(COL_AVERAGE_WAGE)?;

        table
            .rows()
            .iter()
            .enumerate()
            .map(|(i, row)| {
                Ok(JobListing {
                    industry_cluster: row[industry].clone(),
                    job_title: row[title].clone(),
                    entry_level_wage: parse_number(&row[entry], COL_ENTRY_WAGE, i + 1)?,
                    average_wage: parse_number(&row[average], COL_AVERAGE_WAGE, i + 1)?,
                })
            })
            .collect()
    }
}
