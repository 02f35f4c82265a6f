#![allow(dead_code)]

use {
    base::Vec2,
    detector::{AnalysisError, Analyzer, CaptureSettings, Config},
    image::{Image, PixelFormat},
    std::{cell::Cell, path::Path},
    video::{Preview, VideoError, VideoFrame, VideoInConfig, VideoInDevice},
};

pub const FRAME_SIZE: Vec2<usize> = Vec2 { x: 8, y: 6 };

pub enum Behavior {
    Works,
    FailsToOpen,
    FailsToRead,
    EmptyFrame,
}

pub struct FakeCamera {
    pub behavior: Behavior,
    pub opens: usize,
    pub closes: usize,
    pub reads: usize,
}

impl FakeCamera {
    pub fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            opens: 0,
            closes: 0,
            reads: 0,
        }
    }
}

impl VideoInDevice for FakeCamera {
    fn open(&mut self, config: &VideoInConfig) -> Result<VideoInConfig, VideoError> {
        self.opens += 1;
        if let Behavior::FailsToOpen = self.behavior {
            return Err(VideoError::Device("no camera at index 0".to_string()));
        }
        Ok(VideoInConfig {
            size: Some(FRAME_SIZE),
            format: Some(PixelFormat::Yuyv),
            ..config.clone()
        })
    }

    fn close(&mut self) {
        self.closes += 1;
    }

    fn blocking_capture(&mut self) -> Result<VideoFrame, VideoError> {
        self.reads += 1;
        match self.behavior {
            Behavior::FailsToRead => Err(VideoError::Stream("select timeout".to_string())),
            Behavior::EmptyFrame => Ok(VideoFrame::new(Image::new(
                FRAME_SIZE,
                Vec::new(),
                PixelFormat::Yuyv,
            ))),
            _ => Ok(VideoFrame::new(Image::new(
                FRAME_SIZE,
                vec![128u8; FRAME_SIZE.x * FRAME_SIZE.y * 2],
                PixelFormat::Yuyv,
            ))),
        }
    }
}

#[derive(Default)]
pub struct FakePreview {
    pub shown: usize,
    pub fail: bool,
}

impl Preview for FakePreview {
    fn show(&mut self, _title: &str, image: &Image) -> Result<(), VideoError> {
        assert!(!image.is_empty());
        self.shown += 1;
        if self.fail {
            return Err(VideoError::Preview("no display".to_string()));
        }
        Ok(())
    }
}

pub enum Reply {
    Text(&'static str),
    Fail(fn() -> AnalysisError),
}

pub struct StubAnalyzer {
    pub reply: Reply,
    pub calls: Cell<usize>,
    pub last_mime: Cell<Option<&'static str>>,
}

impl StubAnalyzer {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: Cell::new(0),
            last_mime: Cell::new(None),
        }
    }
}

impl Analyzer for StubAnalyzer {
    fn describe(&self, prompt: &str, image: &[u8], mime_type: &str) -> Result<String, AnalysisError> {
        assert_eq!(prompt, detector::PROMPT);
        assert!(!image.is_empty());
        self.calls.set(self.calls.get() + 1);
        self.last_mime.set(match mime_type {
            "image/jpeg" => Some("image/jpeg"),
            _ => Some("other"),
        });
        match &self.reply {
            Reply::Text(text) => Ok(text.to_string()),
            Reply::Fail(make) => Err(make()),
        }
    }
}

/// Fast, headless settings writing into `dir`.
pub fn config_in(dir: &Path) -> Config {
    Config {
        interactive: false,
        capture: CaptureSettings {
            output: dir.join("capture.jpg"),
            settle_ms: 0,
            tick_ms: 0,
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn console_text(console: &[u8]) -> String {
    String::from_utf8_lossy(console).into_owned()
}
