//! # 交互输入模块
//!
//! 在命令行未提供参数时向用户提问。读写句柄由调用方传入，便于测试。

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// 输出问题和 `> ` 提示符，读取一行并去除首尾空白。
///
/// # Errors
///
/// * 读写失败，或输入在给出答案之前已经结束。
pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    write!(output, "{question}\n> ")?;
    output.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .with_context(|| format!("Unable to read an answer to: {question}"))?;
    anyhow::ensure!(read > 0, "No input provided for: {question}");

    Ok(line.trim().to_string())
}
