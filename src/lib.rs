//! # lsb_secret 库
//!
//! 本库包含 LSB 隐写工具的核心逻辑：位映射、消息编解码以及命令处理。

// 声明库包含的所有模块。

pub mod cli;
pub mod constants;
pub mod error;
pub mod format;
pub mod handler;
pub mod mapper;
pub mod prompt;
pub mod steganography;
