use base::Vec2;
use image::{Image, PixelFormat};
use video::{NoPreview, OpenDevice, Preview, VideoError, VideoFrame, VideoInConfig, VideoInDevice};

#[derive(Default)]
struct FakeDevice {
    fail_open: bool,
    frame: Option<Vec<u8>>,
    opens: usize,
    closes: usize,
}

impl VideoInDevice for FakeDevice {
    fn open(&mut self, config: &VideoInConfig) -> Result<VideoInConfig, VideoError> {
        self.opens += 1;
        if self.fail_open {
            return Err(VideoError::Device("no such device".to_string()));
        }
        Ok(VideoInConfig {
            size: Some(Vec2::new(2, 1)),
            format: Some(PixelFormat::Yuyv),
            ..config.clone()
        })
    }

    fn close(&mut self) {
        self.closes += 1;
    }

    fn blocking_capture(&mut self) -> Result<VideoFrame, VideoError> {
        match &self.frame {
            Some(data) => Ok(VideoFrame::new(Image::new(
                Vec2::new(2, 1),
                data.clone(),
                PixelFormat::Yuyv,
            ))),
            None => Err(VideoError::Stream("timeout".to_string())),
        }
    }
}

#[test]
fn test_open_device_returns_accepted_config() {
    let mut device = FakeDevice {
        frame: Some(vec![128; 4]),
        ..Default::default()
    };

    let open = OpenDevice::open(&mut device, &VideoInConfig::default()).unwrap();

    assert_eq!(open.config().size, Some(Vec2::new(2, 1)));
    assert_eq!(open.config().format, Some(PixelFormat::Yuyv));
}

#[test]
fn test_open_device_closes_once_after_capture() {
    let mut device = FakeDevice {
        frame: Some(vec![128; 4]),
        ..Default::default()
    };

    {
        let mut open = OpenDevice::open(&mut device, &VideoInConfig::default()).unwrap();
        let frame = open.capture().unwrap();
        assert_eq!(frame.image.data.len(), 4);
    }

    assert_eq!(device.opens, 1);
    assert_eq!(device.closes, 1);
}

#[test]
fn test_open_device_closes_once_after_failed_capture() {
    let mut device = FakeDevice::default();

    {
        let mut open = OpenDevice::open(&mut device, &VideoInConfig::default()).unwrap();
        assert!(matches!(open.capture(), Err(VideoError::Stream(_))));
    }

    assert_eq!(device.closes, 1);
}

#[test]
fn test_empty_frame_is_a_stream_error() {
    let mut device = FakeDevice {
        frame: Some(Vec::new()),
        ..Default::default()
    };

    {
        let mut open = OpenDevice::open(&mut device, &VideoInConfig::default()).unwrap();
        match open.capture() {
            Err(VideoError::Stream(msg)) => assert!(msg.contains("empty")),
            other => panic!("expected Stream error, got {:?}", other.map(|_| ())),
        }
    }

    assert_eq!(device.closes, 1);
}

#[test]
fn test_failed_open_does_not_close() {
    let mut device = FakeDevice {
        fail_open: true,
        ..Default::default()
    };

    assert!(matches!(
        OpenDevice::open(&mut device, &VideoInConfig::default()),
        Err(VideoError::Device(_))
    ));
    assert_eq!(device.opens, 1);
    assert_eq!(device.closes, 0);
}

#[test]
fn test_boxed_device_goes_through_guard() {
    let mut device: Box<dyn VideoInDevice> = Box::new(FakeDevice {
        frame: Some(vec![128; 4]),
        ..Default::default()
    });

    let mut open = OpenDevice::open(&mut device, &VideoInConfig::default()).unwrap();
    assert!(open.capture().is_ok());
}

#[test]
fn test_no_preview_returns_immediately() {
    let image = Image::new(Vec2::new(2, 1), vec![128; 4], PixelFormat::Yuyv);

    assert!(NoPreview.show("test", &image).is_ok());
}
