use {
    crate::*,
    base::log_info,
    image::{Image, image_to_u32},
    minifb::{Window, WindowOptions},
};

const PREVIEW_FPS: usize = 30;

/// Shows a captured frame to the operator.
pub trait Preview {
    fn show(&mut self, title: &str, image: &Image) -> Result<(), VideoError>;
}

/// Headless runs: nothing is shown and nothing blocks.
pub struct NoPreview;

impl Preview for NoPreview {
    fn show(&mut self, _title: &str, _image: &Image) -> Result<(), VideoError> {
        Ok(())
    }
}

/// Opens a window with the frame and blocks until a key is pressed or the
/// window is closed.
pub struct WindowPreview;

impl Preview for WindowPreview {
    fn show(&mut self, title: &str, image: &Image) -> Result<(), VideoError> {
        let (size, buffer) = image_to_u32(image)?;

        let mut window = Window::new(title, size.x, size.y, WindowOptions::default())?;
        window.set_target_fps(PREVIEW_FPS);

        log_info!("preview: waiting for a key press");
        loop {
            window.update_with_buffer(&buffer, size.x, size.y)?;
            if !window.is_open() || !window.get_keys().is_empty() {
                break;
            }
        }
        Ok(())
    }
}
