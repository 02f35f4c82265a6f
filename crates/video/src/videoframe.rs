use image::Image;

#[derive(Debug, Clone)]
pub struct VideoFrame {
    pub image: Image,
    // driver frame counter, when the backend reports one
    pub sequence: Option<u32>,
}

impl VideoFrame {
    pub fn new(image: Image) -> Self {
        Self {
            image,
            sequence: None,
        }
    }
}
