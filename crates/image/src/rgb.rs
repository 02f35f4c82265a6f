use {crate::*, base::Vec2};

pub fn yuyv_to_rgb(size: Vec2<usize>, data: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(size.area() * 3);

    for chunk in data.chunks_exact(4) {
        let (r0, g0, b0) = yuv_to_rgb(chunk[0], chunk[1], chunk[3]);
        let (r1, g1, b1) = yuv_to_rgb(chunk[2], chunk[1], chunk[3]);
        rgb.extend_from_slice(&[r0, g0, b0, r1, g1, b1]);
    }

    rgb
}

pub fn jpeg_to_rgb(image: &Image) -> Result<Image, ImageError> {
    image.format.ensure_format(PixelFormat::Jpeg)?;
    let decoded = crates_image::load_from_memory(&image.data)
        .map_err(|e| ImageError::Decode(format!("Failed to decode JPEG: {}", e)))?;

    let rgb_image = decoded.to_rgb8();
    let (width, height) = rgb_image.dimensions();
    let size = Vec2::new(width as usize, height as usize);
    let data = rgb_image.into_raw();

    Ok(Image::new(size, data, PixelFormat::Rgb8))
}

/// Convert any supported frame to packed RGB8.
pub fn to_rgb(image: &Image) -> Result<Image, ImageError> {
    image.validate()?;
    match image.format {
        PixelFormat::Rgb8 => Ok(image.clone()),
        PixelFormat::Yuyv => Ok(Image::new(
            image.size,
            yuyv_to_rgb(image.size, image.frame_data()),
            PixelFormat::Rgb8,
        )),
        PixelFormat::Jpeg => jpeg_to_rgb(image),
    }
}
