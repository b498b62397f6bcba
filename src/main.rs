use clap::Parser;
use std::io;

use lsb_secret::{cli::Cli, handler::run};

/// 程序的主入口点
///
/// 负责解析命令行参数，并以标准输入、标准输出作为交互句柄执行完整流程
fn main() -> anyhow::Result<()> {
    // 解析命令行参数
    let cli = Cli::parse();

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    run(cli, &mut input, &mut output)
}
