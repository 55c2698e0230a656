//! スキル番号の入力元

use crate::error::{CareerPathError, Result};
use dialoguer::Input;
use std::io::{BufRead, IsTerminal, Write};

/// 1行の入力を返す入力元
pub trait SkillPrompt {
    fn ask(&mut self, message: &str) -> Result<String>;
}

/// 標準入力からの入力
///
/// 端末なら dialoguer、パイプやリダイレクトなら1行ずつ読む。
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl SkillPrompt for TerminalPrompt {
    fn ask(&mut self, message: &str) -> Result<String> {
        let stdin = std::io::stdin();
        if !stdin.is_terminal() {
            return LinePrompt::new(stdin.lock()).ask(message);
        }

        Input::<String>::new()
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| CareerPathError::Prompt(e.to_string()))
    }
}

/// 任意の `BufRead` から1行ずつ読む入力元
#[derive(Debug)]
pub struct LinePrompt<R> {
    reader: R,
}

impl<R: BufRead> LinePrompt<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> SkillPrompt for LinePrompt<R> {
    fn ask(&mut self, message: &str) -> Result<String> {
        print!("{}: ", message);
        std::io::stdout().flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(CareerPathError::Prompt("入力が終了しました".into()));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
