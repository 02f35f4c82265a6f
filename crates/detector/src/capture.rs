use {
    crate::*,
    base::{log_error, log_info, log_warn},
    std::{fs, io::Write, path::PathBuf, thread, time::Duration},
    video::{OpenDevice, Preview, VideoFrame, VideoInDevice},
};

pub const PREVIEW_TITLE: &str = "Captured Image";

fn pause(duration: Duration) {
    if !duration.is_zero() {
        thread::sleep(duration);
    }
}

// whole seconds print bare, anything else with one decimal
fn format_seconds(duration: Duration) -> String {
    if duration.subsec_millis() == 0 {
        format!("{}", duration.as_secs())
    } else {
        format!("{:.1}", duration.as_secs_f64())
    }
}

// the device is released when `open` drops, on every path out of this function
fn grab_frame<D: VideoInDevice + ?Sized>(
    device: &mut D,
    settings: &CaptureSettings,
    console: &mut dyn Write,
) -> Result<VideoFrame, DetectorError> {
    let video_config = settings.video_config();
    let mut open = match OpenDevice::open(device, &video_config) {
        Ok(open) => open,
        Err(error) => {
            log_error!("cannot open {}: {}", video_config.describe(), error);
            say(console, format!("Error: could not access the webcam ({}).", error));
            return Err(DetectorError::DeviceUnavailable(error));
        }
    };

    // auto-exposure settle time
    pause(settings.settle());

    say(
        console,
        format!("Taking photo in {} seconds...", format_seconds(settings.countdown_total())),
    );
    for i in (1..=settings.countdown).rev() {
        say(console, format!("{}...", i));
        pause(settings.tick());
    }

    open.capture().map_err(|error| {
        log_error!("frame read failed: {}", error);
        say(console, "Error: could not capture the image.");
        DetectorError::CaptureFailed(error.to_string())
    })
}

/// Take one photo, store it as JPEG at `settings.output` and return that path.
///
/// With a preview, the frame is shown after the camera has been released and
/// the call blocks until the operator dismisses it.
pub fn capture<D: VideoInDevice + ?Sized>(
    device: &mut D,
    settings: &CaptureSettings,
    preview: Option<&mut dyn Preview>,
    console: &mut dyn Write,
) -> Result<PathBuf, DetectorError> {
    say(console, "Initializing webcam...");
    let frame = grab_frame(device, settings, console)?;

    let jpeg = image::encode_jpeg(&frame.image, settings.quality).map_err(|error| {
        log_error!("cannot encode frame: {}", error);
        say(console, "Error: could not encode the image.");
        DetectorError::CaptureFailed(error.to_string())
    })?;
    fs::write(&settings.output, &jpeg).map_err(|error| {
        log_error!("cannot write {}: {}", settings.output.display(), error);
        say(console, format!("Error: could not save {}.", settings.output.display()));
        DetectorError::CaptureFailed(format!("{}: {}", settings.output.display(), error))
    })?;
    log_info!("wrote {} bytes to {}", jpeg.len(), settings.output.display());

    if let Some(preview) = preview {
        say(console, "Press any key to continue...");
        if let Err(error) = preview.show(PREVIEW_TITLE, &frame.image) {
            log_warn!("preview failed: {}", error);
        }
    }

    say(console, format!("Image saved as {}", settings.output.display()));
    Ok(settings.output.clone())
}
