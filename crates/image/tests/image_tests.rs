use base::Vec2;
use image::{Image, ImageError, PixelFormat};

#[test]
fn test_image_new_rgb8() {
    let size = Vec2::new(2, 3);
    let data: Vec<u8> = (0..18).collect(); // 2*3*3 = 18 bytes
    let image = Image::new(size, data.clone(), PixelFormat::Rgb8);

    assert_eq!(image.size, size);
    assert_eq!(image.data, data);
    assert!(matches!(image.format, PixelFormat::Rgb8));
    assert!(image.validate().is_ok());
}

#[test]
fn test_image_new_yuyv() {
    let size = Vec2::new(4, 2);
    let data: Vec<u8> = vec![128; 16]; // 4*2*2 = 16 bytes
    let image = Image::new(size, data, PixelFormat::Yuyv);

    assert_eq!(image.size.x, 4);
    assert_eq!(image.size.y, 2);
    assert!(image.validate().is_ok());
}

#[test]
fn test_empty_image_fails_validation() {
    let image = Image::new(Vec2::new(4, 2), Vec::new(), PixelFormat::Jpeg);

    assert!(image.is_empty());
    assert!(matches!(image.validate(), Err(ImageError::Decode(_))));
}

#[test]
fn test_zero_size_image_is_empty() {
    let image = Image::new(Vec2::new(0, 0), vec![1, 2, 3], PixelFormat::Rgb8);

    assert!(image.is_empty());
}

#[test]
fn test_frame_len() {
    let size = Vec2::new(640, 480);
    assert_eq!(PixelFormat::Rgb8.frame_len(size), Some(640 * 480 * 3));
    assert_eq!(PixelFormat::Yuyv.frame_len(size), Some(640 * 480 * 2));
    assert_eq!(PixelFormat::Jpeg.frame_len(size), None);
}

#[test]
fn test_fourcc_roundtrip() {
    for format in [PixelFormat::Rgb8, PixelFormat::Yuyv, PixelFormat::Jpeg] {
        assert_eq!(PixelFormat::from_fourcc(format.as_fourcc()).unwrap(), format);
    }
    assert_eq!(image::fourcc_to_string(PixelFormat::Jpeg.as_fourcc()), "MJPG");
}

#[test]
fn test_unknown_fourcc_is_unsupported() {
    let fourcc = u32::from_le_bytes(*b"NV12");

    match PixelFormat::from_fourcc(fourcc) {
        Err(ImageError::Unsupported(msg)) => assert!(msg.contains("NV12")),
        other => panic!("expected Unsupported, got {:?}", other),
    }
}

#[test]
fn test_ensure_format_mismatch() {
    assert!(PixelFormat::Jpeg.ensure_format(PixelFormat::Jpeg).is_ok());
    assert!(PixelFormat::Yuyv.ensure_format(PixelFormat::Jpeg).is_err());
}

#[test]
fn test_rgb_to_u32() {
    let size = Vec2::new(2, 1);
    let data = vec![255, 0, 0, 0, 255, 0]; // red, green

    let buf = image::rgb_to_u32(size, &data);

    assert_eq!(buf.len(), 2);
    assert_eq!(buf[0], 0xFFFF0000);
    assert_eq!(buf[1], 0xFF00FF00);
}

#[test]
fn test_yuyv_to_u32() {
    let size = Vec2::new(2, 1);
    let data = vec![128u8, 128, 128, 128];

    let buf = image::yuyv_to_u32(size, &data);

    assert_eq!(buf.len(), 2);
    // neutral YUV (128,128,128) should produce near-grey pixels
    for &pixel in &buf {
        let r = (pixel >> 16) & 0xFF;
        let g = (pixel >> 8) & 0xFF;
        let b = pixel & 0xFF;
        assert!((126..=130).contains(&r));
        assert!((126..=130).contains(&g));
        assert!((126..=130).contains(&b));
    }
}

#[test]
fn test_image_to_u32_decodes_jpeg() {
    let size = Vec2::new(4, 4);
    let jpeg = image::rgb_to_jpeg(size, &[200u8; 48], 90).unwrap();

    let (fb_size, buf) = image::image_to_u32(&Image::new(size, jpeg, PixelFormat::Jpeg)).unwrap();

    assert_eq!(fb_size, size);
    assert_eq!(buf.len(), 16);
}
