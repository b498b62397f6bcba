/// 每个像素参与隐写的颜色通道数 (R, G, B)，alpha 通道不使用。
pub const CHANNELS_PER_PIXEL: u64 = 3;

/// 一个字节的位数。
pub const BITS_PER_BYTE: u64 = 8;

/// 消息结尾追加的终止字节。
pub const TERMINATOR: u8 = 0x00;

/// 位映射器的越界判定除数：`bit_index / 24 > width * height` 即视为越界。
pub const BOUNDS_DIVISOR: u64 = BITS_PER_BYTE * CHANNELS_PER_PIXEL;

/// 未指定输出路径时，结果图像的文件名 (不含扩展名)。
pub const DEFAULT_OUTPUT_STEM: &str = "result";

/// 未指定输出路径时，结果图像的扩展名。
pub const DEFAULT_OUTPUT_EXTENSION: &str = "bmp";

/// 有损格式：解码为真彩色缓冲区后用于写入消息，只作为输入。
pub const LOSSY_EXTENSIONS: &[&str] = &["jpg", "jpeg", "webp"];

/// 无损格式：用于读取已隐写的图像，以及保存结果。
pub const LOSSLESS_EXTENSIONS: &[&str] = &["bmp", "png", "tif", "tiff", "qoi"];
