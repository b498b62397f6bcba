//! # 位映射模块
//!
//! 将从 1 开始的位索引映射到像素坐标和颜色通道。
//! 位的顺序为：像素内按 R, G, B 排列，像素之间逐行从左到右。
//! 坐标同样从 1 开始，只有 [`BitPosition::pixel`] 负责换算到从 0 开始的像素网格。

use crate::constants::{BOUNDS_DIVISOR, CHANNELS_PER_PIXEL};
use crate::error::StegoError;

/// 参与隐写的颜色通道。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// 通道序号：1, 2, 3 分别对应 R, G, B。
    pub fn ordinal(self) -> u8 {
        match self {
            Channel::Red => 1,
            Channel::Green => 2,
            Channel::Blue => 3,
        }
    }

    /// 在 `Rgba` 像素中的下标。
    pub fn index(self) -> usize {
        usize::from(self.ordinal() - 1)
    }

    fn from_ordinal(n: u64) -> Self {
        match n {
            1 => Channel::Red,
            2 => Channel::Green,
            _ => Channel::Blue,
        }
    }
}

/// 某一位所在的像素坐标 (从 1 开始) 及通道。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitPosition {
    pub x: u32,
    pub y: u32,
    pub channel: Channel,
}

impl BitPosition {
    /// 换算为从 0 开始的像素坐标；位于图像之外时返回 `None`。
    pub fn pixel(&self, width: u32, height: u32) -> Option<(u32, u32)> {
        let inside = (1..=width).contains(&self.x) && (1..=height).contains(&self.y);
        inside.then(|| (self.x - 1, self.y - 1))
    }
}

/// 计算第 `bit_index` 位 (从 1 开始) 的坐标和通道。
///
/// 当 `bit_index / 24 > width * height` 时视为越界。这一判定比实际像素数宽松，
/// 因此部分合法返回值会落在图像之外，由调用方通过 [`BitPosition::pixel`] 判断。
///
/// # Errors
///
/// * `bit_index` 为 0、`width` 为 0 或超出上述范围时返回 [`StegoError::OutOfBounds`]。
pub fn coordinates(bit_index: u64, width: u32, height: u32) -> Result<BitPosition, StegoError> {
    let out_of_bounds = StegoError::OutOfBounds {
        bit_index,
        width,
        height,
    };

    let pixels = u64::from(width) * u64::from(height);
    if bit_index == 0 || width == 0 || bit_index / BOUNDS_DIVISOR > pixels {
        return Err(out_of_bounds);
    }

    let width = u64::from(width);
    let pixel_number = bit_index.div_ceil(CHANNELS_PER_PIXEL);
    let channel = Channel::from_ordinal((bit_index - 1) % CHANNELS_PER_PIXEL + 1);
    let x = (pixel_number - 1) % width + 1;
    let y = pixel_number.div_ceil(width);

    match (u32::try_from(x), u32::try_from(y)) {
        (Ok(x), Ok(y)) => Ok(BitPosition { x, y, channel }),
        _ => Err(out_of_bounds),
    }
}
