//! # 错误类型模块
//!
//! 核心模块 (位映射、编解码、格式判定) 返回的类型化错误。
//! 上层处理逻辑通过 `anyhow` 为它们附加上下文信息。

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StegoError {
    /// 位索引超出了图像能够寻址的范围。
    #[error("Bit index {bit_index} is out of bounds for a {width}x{height} image.")]
    OutOfBounds {
        bit_index: u64,
        width: u32,
        height: u32,
    },

    /// 文件扩展名既不是受支持的有损格式，也不是无损格式。
    #[error("Unknown extension: {0}")]
    UnsupportedExtension(String),
}
