use {crate::*, base::Vec2};

#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub size: Vec2<usize>,
    pub data: Vec<u8>,
    pub format: PixelFormat,
}

impl Image {
    pub fn new(size: Vec2<usize>, data: Vec<u8>, format: PixelFormat) -> Self {
        Self { size, data, format }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty() || self.size.is_empty()
    }

    /// Check that the buffer holds a full frame for its size and format.
    /// Compressed formats only need to be non-empty.
    pub fn validate(&self) -> Result<(), ImageError> {
        if self.is_empty() {
            return Err(ImageError::Decode("empty frame".to_string()));
        }
        match self.format.frame_len(self.size) {
            Some(expected) if self.data.len() < expected => Err(ImageError::Decode(format!(
                "{:?} frame of {} needs {} bytes, got {}",
                self.format,
                self.size,
                expected,
                self.data.len()
            ))),
            _ => Ok(()),
        }
    }

    /// The bytes of one frame, without any padding the driver left at the end.
    pub fn frame_data(&self) -> &[u8] {
        match self.format.frame_len(self.size) {
            Some(len) if len <= self.data.len() => &self.data[..len],
            _ => &self.data,
        }
    }
}
