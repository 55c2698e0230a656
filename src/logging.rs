//! ログ初期化
//!
//! 進捗表示は標準出力の `println!`、診断ログは `tracing` で標準エラーへ出す。

use tracing_subscriber::EnvFilter;

/// `RUST_LOG` があれば優先し、なければ verbose に応じて info/debug
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("career_path_rust={0},career_path={0}", default_level)));

    // テストなどで二重初期化された場合は無視
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
