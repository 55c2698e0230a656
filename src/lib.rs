//! career-path-rust
//!
//! 求人データセットの探索分析（統計・グラフ・業界別抽出）と
//! 対話式スキルマッチング

pub mod cli;
pub mod config;
pub mod error;
pub mod explore;
pub mod export;
pub mod logging;
pub mod matcher;
pub mod plot;
pub mod report;
