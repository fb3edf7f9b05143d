use std::{thread, time::Duration};

/// Decides when the next frame runs.
pub trait FrameDriver {
    /// Blocks until the next frame is due. Returns false once no frame should follow.
    fn next_frame(&mut self) -> bool;
}

/// Runs a fixed number of frames, back to back unless a delay is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedFrames {
    remaining: usize,
    delay: Option<Duration>,
}

impl FixedFrames {
    pub fn new(frames: usize) -> Self {
        Self {
            remaining: frames,
            delay: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl FrameDriver for FixedFrames {
    fn next_frame(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        if let Some(delay) = self.delay {
            thread::sleep(delay);
        }
        true
    }
}

/// Sleeps a fixed delay before every frame, without end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paced {
    delay: Duration,
}

impl Paced {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl FrameDriver for Paced {
    fn next_frame(&mut self) -> bool {
        thread::sleep(self.delay);
        true
    }
}

/// Calls `frame` whenever `driver` allows, until either side stops.
///
/// Returns the number of frames that ran.
pub fn drive<F>(driver: &mut impl FrameDriver, mut frame: F) -> usize
where
    F: FnMut() -> bool,
{
    let mut frames = 0;
    while driver.next_frame() {
        frames += 1;
        if !frame() {
            break;
        }
    }
    frames
}
