use std::fmt;

#[derive(Debug)]
pub enum VideoError {
    Device(String),
    Stream(String),
    Image(image::ImageError),
    Preview(String),
}

impl fmt::Display for VideoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoError::Device(msg) => write!(f, "device error: {msg}"),
            VideoError::Stream(msg) => write!(f, "stream error: {msg}"),
            VideoError::Image(err) => write!(f, "image error: {err}"),
            VideoError::Preview(msg) => write!(f, "preview error: {msg}"),
        }
    }
}

impl std::error::Error for VideoError {}

impl From<std::io::Error> for VideoError {
    fn from(err: std::io::Error) -> Self {
        VideoError::Device(err.to_string())
    }
}

impl From<image::ImageError> for VideoError {
    fn from(err: image::ImageError) -> Self {
        VideoError::Image(err)
    }
}

impl From<minifb::Error> for VideoError {
    fn from(err: minifb::Error) -> Self {
        VideoError::Preview(err.to_string())
    }
}
