use std::path::PathBuf;
use video::{VideoError, VideoInConfig};

#[test]
fn test_config_defaults() {
    let config = VideoInConfig::default();

    assert_eq!(config.index, 0);
    assert_eq!(config.path, None);
    assert_eq!(config.size, None);
    assert_eq!(config.format, None);
}

#[test]
fn test_describe_prefers_path() {
    let config = VideoInConfig {
        index: 3,
        path: Some(PathBuf::from("/dev/video2")),
        ..Default::default()
    };

    assert_eq!(config.describe(), "/dev/video2");
}

#[test]
fn test_describe_by_index() {
    let config = VideoInConfig {
        index: 1,
        ..Default::default()
    };

    assert_eq!(config.describe(), "camera #1");
}

#[test]
fn test_error_display() {
    let device_err = VideoError::Device("busy".to_string());
    assert_eq!(device_err.to_string(), "device error: busy");

    let io_err: VideoError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
    assert!(matches!(io_err, VideoError::Device(ref msg) if msg.contains("gone")));

    let image_err: VideoError = image::ImageError::Unsupported("NV12".to_string()).into();
    assert!(image_err.to_string().starts_with("image error:"));
}
