use {crate::*, base::Vec2, crates_image::ImageEncoder};

pub fn rgb_to_jpeg(size: Vec2<usize>, data: &[u8], quality: u8) -> Result<Vec<u8>, ImageError> {
    // the encoder panics on a length mismatch
    if data.len() != size.area() * 3 {
        return Err(ImageError::Encode(format!(
            "RGB frame of {} needs {} bytes, got {}",
            size,
            size.area() * 3,
            data.len()
        )));
    }
    let mut buffer = Vec::new();
    let encoder = crates_image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality);
    encoder
        .write_image(
            data,
            size.x as u32,
            size.y as u32,
            crates_image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| ImageError::Encode(e.to_string()))?;
    Ok(buffer)
}

pub fn yuyv_to_jpeg(size: Vec2<usize>, data: &[u8], quality: u8) -> Result<Vec<u8>, ImageError> {
    let rgb = yuyv_to_rgb(size, data);
    rgb_to_jpeg(size, &rgb, quality)
}

/// Encode a frame as baseline JPEG.
///
/// MJPEG frames are decoded and re-encoded: many webcams omit the Huffman
/// tables from their frames, which leaves the raw bytes unreadable for most
/// decoders.
pub fn encode_jpeg(image: &Image, quality: u8) -> Result<Vec<u8>, ImageError> {
    image.validate()?;
    match image.format {
        PixelFormat::Rgb8 => rgb_to_jpeg(image.size, image.frame_data(), quality),
        PixelFormat::Yuyv => yuyv_to_jpeg(image.size, image.frame_data(), quality),
        PixelFormat::Jpeg => {
            let rgb = jpeg_to_rgb(image)?;
            rgb_to_jpeg(rgb.size, &rgb.data, quality)
        }
    }
}

/// Identify an encoded image and return its MIME type.
pub fn sniff_mime(data: &[u8]) -> Result<&'static str, ImageError> {
    if data.is_empty() {
        return Err(ImageError::Decode("empty image data".to_string()));
    }
    let format = crates_image::guess_format(data)?;
    match format {
        crates_image::ImageFormat::Jpeg => Ok("image/jpeg"),
        crates_image::ImageFormat::Png => Ok("image/png"),
        crates_image::ImageFormat::WebP => Ok("image/webp"),
        crates_image::ImageFormat::Gif => Ok("image/gif"),
        crates_image::ImageFormat::Bmp => Ok("image/bmp"),
        crates_image::ImageFormat::Tiff => Ok("image/tiff"),
        other => Err(ImageError::Unsupported(format!("{:?}", other))),
    }
}
