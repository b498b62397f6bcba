use crate::constants::{BITS_PER_BYTE, CHANNELS_PER_PIXEL, TERMINATOR};
use crate::error::StegoError;
use crate::mapper::coordinates;
use image::RgbaImage;

/// 消息长度超过图像容量时给出的提示，不会中止编码。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityWarning {
    pub message_len: usize,
    pub capacity: u64,
}

/// 一次编码实际写入和因超出像素网格而丢弃的位数。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncodeSummary {
    pub written_bits: u64,
    pub dropped_bits: u64,
}

/// 解码结束时所处的状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeEnd {
    /// 读到了终止字节。
    Terminator,
    /// 图像中的位已全部读完。
    Exhausted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub bytes: Vec<u8>,
    pub end: DecodeEnd,
}

impl Decoded {
    /// 以文本形式呈现解码结果，非法的 UTF-8 序列会被替换。
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

/// 可隐藏的最大字符数：`floor(width * height * 3 / 8) - 1`，需为终止字节预留一个字节。
pub fn capacity(width: u32, height: u32) -> u64 {
    (u64::from(width) * u64::from(height) * CHANNELS_PER_PIXEL / BITS_PER_BYTE).saturating_sub(1)
}

pub fn check_capacity(image: &RgbaImage, message: &[u8]) -> Option<CapacityWarning> {
    let (width, height) = image.dimensions();
    let capacity = capacity(width, height);

    (message.len() as u64 > capacity).then_some(CapacityWarning {
        message_len: message.len(),
        capacity,
    })
}

/// 将 `bit` 写入通道值的最低位：`value & (0xFE | bit)`。
///
/// 该掩码只能清除最低位，不能置位：原最低位为 0 时写入 1 不会生效。
pub fn write_bit(value: u8, bit: u8) -> u8 {
    value & (0xFE | bit)
}

/// 将 `message` 及其终止字节逐位写入图像各通道的最低位。
///
/// 每个字节从最低位开始展开，第 `i` 个字节的第 `index` 位写入位索引 `i * 8 + index + 1`。
/// 落在像素网格之外的位会被丢弃并计入 [`EncodeSummary::dropped_bits`]。
///
/// # Errors
///
/// * 位索引超出位映射器的寻址范围时返回 [`StegoError::OutOfBounds`]。
pub fn encode(image: &mut RgbaImage, message: &[u8]) -> Result<EncodeSummary, StegoError> {
    let (width, height) = image.dimensions();
    let mut summary = EncodeSummary::default();

    let payload = message.iter().copied().chain(std::iter::once(TERMINATOR));

    for (i, byte) in payload.enumerate() {
        for index in 0..BITS_PER_BYTE as u8 {
            let bit = (byte >> index) & 1;
            let bit_index = i as u64 * BITS_PER_BYTE + u64::from(index) + 1;
            let position = coordinates(bit_index, width, height)?;

            match position.pixel(width, height) {
                Some((x, y)) => {
                    let channel = &mut image.get_pixel_mut(x, y).0[position.channel.index()];
                    *channel = write_bit(*channel, bit);
                    summary.written_bits += 1;
                }
                None => summary.dropped_bits += 1,
            }
        }
    }

    Ok(summary)
}

/// 从图像各通道的最低位中读出消息，直到遇到终止字节或读完全部的位。
///
/// 读完全部的位不视为错误，末尾不足一个字节的位会被丢弃。
///
/// # Errors
///
/// * 位索引超出位映射器的寻址范围时返回 [`StegoError::OutOfBounds`]。
pub fn decode(image: &RgbaImage) -> Result<Decoded, StegoError> {
    let (width, height) = image.dimensions();
    let limit = u64::from(width) * u64::from(height) * CHANNELS_PER_PIXEL * BITS_PER_BYTE;

    let mut bytes = Vec::new();
    let mut buffer: u8 = 0;

    for i in 1..=limit {
        let position = coordinates(i, width, height)?;
        let Some((x, y)) = position.pixel(width, height) else {
            break;
        };

        let bit = image.get_pixel(x, y).0[position.channel.index()] & 0x01;
        buffer |= bit << ((i - 1) % BITS_PER_BYTE) as u32;

        if i % BITS_PER_BYTE == 0 {
            if buffer == TERMINATOR {
                return Ok(Decoded {
                    bytes,
                    end: DecodeEnd::Terminator,
                });
            }
            bytes.push(buffer);
            buffer = 0;
        }
    }

    Ok(Decoded {
        bytes,
        end: DecodeEnd::Exhausted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn filled(width: u32, height: u32, value: u8) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([value, value, value, 255]))
    }

    /// 通道最低位均为 1 的非均匀图像
    fn odd_pattern(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            let base = (x * 37 + y * 11) as u8;
            Rgba([base | 1, base.wrapping_add(90) | 1, base.wrapping_mul(3) | 1, 200])
        })
    }

    #[test]
    fn write_bit_follows_the_and_mask() {
        for value in 0..=u8::MAX {
            for bit in 0..=1u8 {
                let written = write_bit(value, bit);
                assert_eq!(written & 0xFE, value & 0xFE, "upper bits changed for {value}");
                assert_eq!(written & 0x01, value & 0x01 & bit);
            }
        }
    }

    #[test]
    fn write_bit_cannot_raise_a_cleared_bit() {
        assert_eq!(write_bit(0x10, 1), 0x10);
        assert_eq!(write_bit(0x11, 1), 0x11);
        assert_eq!(write_bit(0x11, 0), 0x10);
    }

    #[test]
    fn hi_round_trips_through_a_4x4_image() {
        let mut image = filled(4, 4, 0xFF);
        assert_eq!(check_capacity(&image, b"Hi"), None);

        let summary = encode(&mut image, b"Hi").unwrap();
        assert_eq!(
            summary,
            EncodeSummary {
                written_bits: 24,
                dropped_bits: 0
            }
        );

        let decoded = decode(&image).unwrap();
        assert_eq!(decoded.bytes, b"Hi");
        assert_eq!(decoded.end, DecodeEnd::Terminator);
        assert_eq!(decoded.text(), "Hi");
    }

    #[test]
    fn utf8_message_round_trips_through_a_patterned_image() {
        let mut image = odd_pattern(10, 10);
        let message = "Hello, 世界";

        encode(&mut image, message.as_bytes()).unwrap();
        assert_eq!(decode(&image).unwrap().text(), message);
    }

    #[test]
    fn encoding_leaves_alpha_and_upper_bits_alone() {
        let original = odd_pattern(6, 6);
        let mut image = original.clone();
        encode(&mut image, b"secret").unwrap();

        for (before, after) in original.pixels().zip(image.pixels()) {
            assert_eq!(before.0[3], after.0[3]);
            for c in 0..3 {
                assert_eq!(before.0[c] & 0xFE, after.0[c] & 0xFE);
            }
        }
    }

    #[test]
    fn capacity_reserves_the_terminator() {
        assert_eq!(capacity(4, 4), 5);
        assert_eq!(capacity(1, 1), 0);
        assert_eq!(capacity(0, 0), 0);

        let image = filled(4, 4, 0xFF);
        assert_eq!(check_capacity(&image, b"12345"), None);
        assert_eq!(
            check_capacity(&image, b"123456"),
            Some(CapacityWarning {
                message_len: 6,
                capacity: 5
            })
        );
    }

    #[test]
    fn oversized_message_is_written_up_to_the_grid() {
        let mut image = filled(2, 2, 0xFF);
        let summary = encode(&mut image, b"Hi").unwrap();
        assert_eq!(
            summary,
            EncodeSummary {
                written_bits: 12,
                dropped_bits: 12
            }
        );
    }

    #[test]
    fn far_out_of_range_message_is_a_typed_error() {
        let mut image = filled(1, 1, 0xFF);
        let result = encode(&mut image, b"abcdef");
        assert_eq!(
            result,
            Err(StegoError::OutOfBounds {
                bit_index: 48,
                width: 1,
                height: 1
            })
        );
    }

    #[test]
    fn leading_zero_byte_decodes_to_empty_message() {
        let image = filled(4, 4, 0xFE);
        let decoded = decode(&image).unwrap();
        assert!(decoded.bytes.is_empty());
        assert_eq!(decoded.end, DecodeEnd::Terminator);
    }

    #[test]
    fn missing_terminator_returns_every_complete_byte() {
        let decoded = decode(&filled(4, 4, 0x01)).unwrap();
        assert_eq!(decoded.bytes, vec![0xFF; 6]);
        assert_eq!(decoded.end, DecodeEnd::Exhausted);

        // 9 个可用位：只有第一个字节完整
        let decoded = decode(&filled(3, 1, 0x01)).unwrap();
        assert_eq!(decoded.bytes, vec![0xFF]);
        assert_eq!(decoded.end, DecodeEnd::Exhausted);
    }

    #[test]
    fn empty_image_decodes_to_nothing() {
        let decoded = decode(&RgbaImage::new(0, 0)).unwrap();
        assert!(decoded.bytes.is_empty());
        assert_eq!(decoded.end, DecodeEnd::Exhausted);
    }
}
