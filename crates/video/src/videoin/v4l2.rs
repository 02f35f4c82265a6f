use {
    crate::*,
    base::Vec2,
    image::{Image, PixelFormat},
    v4l::{
        Device, Format, FourCC, buffer::Type, io::mmap::Stream as MmapStream,
        io::traits::CaptureStream, video::Capture,
    },
};

// number of mmap buffers queued with the driver
const BUFFER_COUNT: u32 = 4;

pub struct V4l2 {
    stream: Option<MmapStream<'static>>,
    size: Vec2<usize>,
    format: PixelFormat,
}

impl V4l2 {
    pub fn new() -> Self {
        Self {
            stream: None,
            size: Vec2::new(0, 0),
            format: PixelFormat::Yuyv,
        }
    }

    fn fourcc(format: PixelFormat) -> FourCC {
        FourCC::new(&format.as_fourcc().to_le_bytes())
    }
}

impl Default for V4l2 {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoInDevice for V4l2 {
    fn open(&mut self, config: &VideoInConfig) -> Result<VideoInConfig, VideoError> {
        // close stream
        self.stream.take();

        // create device from path or index
        let device = match &config.path {
            Some(path) => Device::with_path(path),
            None => Device::new(config.index),
        }
        .map_err(|e| VideoError::Device(format!("cannot open {}: {}", config.describe(), e)))?;
        let device_format = Capture::format(&device)?;

        // build size
        let desired_size = match config.size {
            Some(size) => size,
            None => Vec2::new(device_format.width as usize, device_format.height as usize),
        };

        // keep the device's format when we can read it, fall back to YUYV otherwise
        let desired_fourcc = match config.format {
            Some(format) => Self::fourcc(format),
            None => match PixelFormat::from_fourcc(u32::from_le_bytes(device_format.fourcc.repr)) {
                Ok(format) => Self::fourcc(format),
                Err(_) => Self::fourcc(PixelFormat::Yuyv),
            },
        };

        // set the format and get the actual format back
        let actual_format = Capture::set_format(
            &device,
            &Format::new(desired_size.x as u32, desired_size.y as u32, desired_fourcc),
        )?;

        // extract size and pixel format
        self.size = Vec2::new(actual_format.width as usize, actual_format.height as usize);
        self.format = PixelFormat::from_fourcc(u32::from_le_bytes(actual_format.fourcc.repr))?;

        // create the stream
        let mut stream = MmapStream::with_buffers(&device, Type::VideoCapture, BUFFER_COUNT)
            .map_err(|e| VideoError::Stream(e.to_string()))?;

        // v4l only streams on the first dequeue, start now so the sensor runs while the caller waits
        CaptureStream::next(&mut stream).map_err(|e| VideoError::Stream(e.to_string()))?;
        self.stream = Some(stream);

        Ok(VideoInConfig {
            index: config.index,
            path: config.path.clone(),
            size: Some(self.size),
            format: Some(self.format),
        })
    }

    fn close(&mut self) {
        self.stream.take();
    }

    fn blocking_capture(&mut self) -> Result<VideoFrame, VideoError> {
        let stream = self
            .stream
            .as_mut()
            .ok_or_else(|| VideoError::Stream("No stream".to_string()))?;

        // the queued buffers were filled right after open, cycle through all of them
        // so the returned frame was exposed after this call
        for _ in 1..BUFFER_COUNT {
            CaptureStream::next(&mut *stream).map_err(|e| VideoError::Stream(e.to_string()))?;
        }
        let (frame_data, metadata) =
            CaptureStream::next(&mut *stream).map_err(|e| VideoError::Stream(e.to_string()))?;

        // bytesused is what the driver filled, the mmap buffer may be larger
        let used = (metadata.bytesused as usize).min(frame_data.len());
        Ok(VideoFrame {
            image: Image::new(self.size, frame_data[..used].to_vec(), self.format),
            sequence: Some(metadata.sequence),
        })
    }
}
