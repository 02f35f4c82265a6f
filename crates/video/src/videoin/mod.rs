use {
    crate::*,
    base::{Vec2, log_debug, log_info},
    image::PixelFormat,
    std::path::PathBuf,
};

#[derive(Debug, Clone, PartialEq)]
pub struct VideoInConfig {
    pub index: usize,              // device index, used when `path` is not set
    pub path: Option<PathBuf>,     // explicit device node, e.g. /dev/video2
    pub size: Option<Vec2<usize>>, // requested frame size, device default if None
    pub format: Option<PixelFormat>,
}

impl Default for VideoInConfig {
    fn default() -> Self {
        Self {
            index: 0,
            path: None,
            size: None,
            format: None,
        }
    }
}

impl VideoInConfig {
    /// Human-readable device name for diagnostics.
    pub fn describe(&self) -> String {
        match &self.path {
            Some(path) => path.display().to_string(),
            None => format!("camera #{}", self.index),
        }
    }
}

pub trait VideoInDevice {
    fn open(&mut self, config: &VideoInConfig) -> Result<VideoInConfig, VideoError>; // open the device, return config that was actually set
    fn close(&mut self); // close the device, if open
    fn blocking_capture(&mut self) -> Result<VideoFrame, VideoError>; // capture a frame
}

impl<D: VideoInDevice + ?Sized> VideoInDevice for Box<D> {
    fn open(&mut self, config: &VideoInConfig) -> Result<VideoInConfig, VideoError> {
        (**self).open(config)
    }

    fn close(&mut self) {
        (**self).close()
    }

    fn blocking_capture(&mut self) -> Result<VideoFrame, VideoError> {
        (**self).blocking_capture()
    }
}

/// An opened device. Closing happens exactly once, when this is dropped.
pub struct OpenDevice<'a, D: VideoInDevice + ?Sized> {
    device: &'a mut D,
    config: VideoInConfig,
}

impl<'a, D: VideoInDevice + ?Sized> OpenDevice<'a, D> {
    pub fn open(device: &'a mut D, config: &VideoInConfig) -> Result<Self, VideoError> {
        let config = device.open(config)?;
        log_info!(
            "opened {} ({:?}, {:?})",
            config.describe(),
            config.size,
            config.format
        );
        Ok(Self { device, config })
    }

    /// The configuration the device actually accepted.
    pub fn config(&self) -> &VideoInConfig {
        &self.config
    }

    /// Read one frame. Empty buffers are an error.
    pub fn capture(&mut self) -> Result<VideoFrame, VideoError> {
        let frame = self.device.blocking_capture()?;
        if frame.image.is_empty() {
            return Err(VideoError::Stream("device returned an empty frame".to_string()));
        }
        log_debug!(
            "captured {:?} frame {} ({} bytes)",
            frame.image.format,
            frame.image.size,
            frame.image.data.len()
        );
        Ok(frame)
    }
}

impl<D: VideoInDevice + ?Sized> Drop for OpenDevice<'_, D> {
    fn drop(&mut self) {
        self.device.close();
        log_info!("released {}", self.config.describe());
    }
}

#[cfg(feature = "v4l2")]
pub mod v4l2;
