//! # 命令处理逻辑模块
//!
//! 包含写入消息与读出消息的高级业务逻辑。
//! 本模块负责协调文件 I/O、交互式提问、调用核心隐写算法以及向用户报告结果。
//! 所有输出都写入调用方提供的句柄，而不是直接写入标准输出。

use crate::cli::{Cli, DecodeArgs, EncodeArgs};
use crate::format::{ImageKind, classify, default_output, ensure_lossless};
use crate::prompt::ask;
use crate::steganography::{DecodeEnd, capacity, check_capacity, decode, encode};
use anyhow::{Context, Result};
use colored::Colorize;
use image::RgbaImage;
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

const BANNER: &str = "--- LSB secret message tool ---";

/// 读取并解码图像文件，统一转换为 RGBA 缓冲区。
fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let bytes = fs::read(path).with_context(|| {
        format!(
            "Unable to read image file: {}",
            path.to_string_lossy().red().bold()
        )
    })?;

    let picture = image::load_from_memory(&bytes).with_context(|| {
        format!(
            "Unable to decode image: {}. \nThe file may be corrupt or not an image.",
            path.to_string_lossy().red().bold()
        )
    })?;

    Ok(picture.to_rgba8())
}

/// 程序的完整流程：询问图像路径，按扩展名分派到写入或读出。
///
/// # Errors
///
/// 扩展名不受支持，或任一处理函数失败时返回错误。
pub fn run<R: BufRead, W: Write>(cli: Cli, input: &mut R, out: &mut W) -> Result<()> {
    writeln!(out, "{}", BANNER.bold())?;

    let image = match cli.image {
        Some(path) => path,
        None => PathBuf::from(ask(input, out, "Where is your image (.jpg or .bmp)?")?),
    };

    match classify(&image)? {
        ImageKind::Lossy => {
            let args = EncodeArgs {
                image,
                message: cli.message,
                dest: cli.dest,
                force: cli.force,
            };
            handle_encode(args, input, out)?;
        }
        ImageKind::Lossless => {
            handle_decode(DecodeArgs { image }, out)?;
        }
    }

    writeln!(out, "{}", "Done!".green().bold())?;
    Ok(())
}

/// 处理写入消息的执行逻辑。
///
/// 负责读取载体图像、报告容量、获取消息、调用核心编码函数，
/// 最后将结果以无损格式写入目标文件。容量不足只会给出警告。
///
/// # Arguments
///
/// * `args` - 输入图像、消息及输出路径。
/// * `input` - 未提供消息时用于提问的输入句柄。
/// * `out` - 状态信息的输出句柄。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 输出路径不是无损格式，或输出文件已存在且未指定 `force`。
/// * 无法读取或解码输入图像。
/// * 消息远超图像的寻址范围。
/// * 无法写入目标图像文件。
pub fn handle_encode<R: BufRead, W: Write>(
    args: EncodeArgs,
    input: &mut R,
    out: &mut W,
) -> Result<PathBuf> {
    let dest = args
        .dest
        .clone()
        .unwrap_or_else(|| default_output(&args.image));

    ensure_lossless(&dest).with_context(|| {
        format!(
            "The output image must use a lossless format: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    anyhow::ensure!(
        args.force || !dest.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        dest.to_string_lossy().red().bold()
    );

    let mut picture = load_rgba(&args.image)?;
    let (width, height) = picture.dimensions();

    writeln!(
        out,
        "Max message length: {} chars",
        capacity(width, height).to_string().green().bold()
    )?;

    let message = match args.message {
        Some(message) => message,
        None => ask(input, out, "What is your message?")?,
    };

    writeln!(out, "Encoding: {}", args.image.to_string_lossy().bold())?;

    if let Some(warning) = check_capacity(&picture, message.as_bytes()) {
        writeln!(
            out,
            "{} Message: {} bytes, capacity: {} bytes. The hidden message will be incomplete.",
            "Your image is too small.".yellow().bold(),
            warning.message_len.to_string().red().bold(),
            warning.capacity.to_string().green().bold()
        )?;
    }

    let summary = encode(&mut picture, message.as_bytes()).with_context(|| {
        format!(
            "Failed to hide the message in: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    if summary.dropped_bits > 0 {
        writeln!(
            out,
            "{} bits did not fit into the image and were dropped.",
            summary.dropped_bits.to_string().yellow().bold()
        )?;
    }

    picture.save(&dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    writeln!(
        out,
        "The message has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    )?;

    Ok(dest)
}

/// 处理读出消息的执行逻辑。
///
/// 读取经过隐写的无损图像，解码隐藏的消息并输出，同时返回解码得到的文本。
///
/// # Errors
///
/// 无法读取或解码图像文件时返回错误。
pub fn handle_decode<W: Write>(args: DecodeArgs, out: &mut W) -> Result<String> {
    writeln!(out, "Decoding: {}", args.image.to_string_lossy().bold())?;

    let picture = load_rgba(&args.image)?;

    let decoded = decode(&picture).with_context(|| {
        format!(
            "Failed to recover the message from: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    if decoded.end == DecodeEnd::Exhausted {
        writeln!(
            out,
            "{}",
            "No terminator found; every available bit was read.".yellow()
        )?;
    }

    let text = decoded.text();
    writeln!(out, "Message: {text}")?;

    Ok(text)
}
