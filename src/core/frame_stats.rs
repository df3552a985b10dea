use std::fmt;

/// Frames and seconds accumulated since the last report.
/// Both fields are only ever reset together.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameCounter {
    frames: u64,
    elapsed: f64,
}

/// Snapshot taken when a report interval elapses
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub frames: u64,
    pub elapsed: f64,
    pub fps: f64,
}

impl fmt::Display for FrameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "frames: {} time: {:.2} fps: {:.2}",
            self.frames, self.elapsed, self.fps
        )
    }
}

impl FrameCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Count one frame of `delta` seconds. Once `interval` has accumulated the
    /// counter resets, yielding a report unless no time passed at all.
    pub fn tick(&mut self, delta: f64, interval: f64) -> Option<FrameReport> {
        self.frames += 1;
        self.elapsed += delta;

        if self.elapsed < interval {
            return None;
        }

        let report = (self.elapsed > 0.0).then(|| FrameReport {
            frames: self.frames,
            elapsed: self.elapsed,
            fps: self.frames as f64 / self.elapsed,
        });
        self.reset();
        report
    }

    pub fn reset(&mut self) {
        self.frames = 0;
        self.elapsed = 0.0;
    }
}
