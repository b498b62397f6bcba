//! # 命令行接口模块
//!
//! 使用 `clap` 定义程序的命令行参数。所有参数都是可选的：
//! 缺少的图像路径和消息会在运行时交互式地询问。

use clap::Parser;
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具。
/// 输入有损图像 (如 JPG) 时写入消息，输入无损图像 (如 BMP, PNG) 时读出消息。
#[derive(Parser, Debug, Default)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具。输入有损图像 (如 JPG) 时写入消息并保存为无损图像，输入无损图像 (如 BMP, PNG) 时读出其中隐藏的消息。"
)]
pub struct Cli {
    /// 图像文件路径。有损格式将被写入消息，无损格式将被读出消息。
    pub image: Option<PathBuf>,

    /// 要隐藏的文本。仅在写入消息时使用。
    #[arg(short, long)]
    pub message: Option<String>,

    /// 结果图像的输出路径，必须是无损格式。默认为输入图像同目录下的 result.bmp。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 输出文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 写入消息所需的参数。
#[derive(Debug, Clone)]
pub struct EncodeArgs {
    pub image: PathBuf,
    pub message: Option<String>,
    pub dest: Option<PathBuf>,
    pub force: bool,
}

/// 读出消息所需的参数。
#[derive(Debug, Clone)]
pub struct DecodeArgs {
    pub image: PathBuf,
}
