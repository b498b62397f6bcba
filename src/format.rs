//! # 图像格式判定模块
//!
//! 根据文件扩展名决定执行编码还是解码：有损格式作为载体写入消息，
//! 无损格式则被视为已隐写的图像。

use crate::constants::{
    DEFAULT_OUTPUT_EXTENSION, DEFAULT_OUTPUT_STEM, LOSSLESS_EXTENSIONS, LOSSY_EXTENSIONS,
};
use crate::error::StegoError;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    /// 需要先解码为真彩色缓冲区，随后写入消息。
    Lossy,
    /// 像素值可精确保存，用于读取已隐写的消息。
    Lossless,
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// 根据扩展名 (不区分大小写) 判定图像类别。
///
/// # Errors
///
/// * 扩展名缺失或不受支持时返回 [`StegoError::UnsupportedExtension`]。
pub fn classify(path: &Path) -> Result<ImageKind, StegoError> {
    let extension = extension_of(path);

    if LOSSY_EXTENSIONS.contains(&extension.as_str()) {
        Ok(ImageKind::Lossy)
    } else if LOSSLESS_EXTENSIONS.contains(&extension.as_str()) {
        Ok(ImageKind::Lossless)
    } else {
        Err(StegoError::UnsupportedExtension(extension))
    }
}

/// 确认输出路径使用无损格式，否则写入的位会在保存时丢失。
pub fn ensure_lossless(path: &Path) -> Result<(), StegoError> {
    match classify(path)? {
        ImageKind::Lossless => Ok(()),
        ImageKind::Lossy => Err(StegoError::UnsupportedExtension(extension_of(path))),
    }
}

/// 默认输出路径：与输入图像同目录下的 `result.bmp`。
pub fn default_output(image: &Path) -> PathBuf {
    image.with_file_name(format!("{DEFAULT_OUTPUT_STEM}.{DEFAULT_OUTPUT_EXTENSION}"))
}
