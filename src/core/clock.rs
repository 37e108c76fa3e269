use std::time::Instant;

/// Timing of one rendered frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTick {
    /// Seconds since the previous tick
    pub delta: f32,
    /// Frames ticked so far, starting at 1
    pub frame: u64,
}

/// Frame clock for the render loop. Each `tick` marks the start of a frame.
#[derive(Debug)]
pub struct FrameClock {
    last_tick: Instant,
    frame: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            frame: 0,
        }
    }

    pub fn tick(&mut self) -> FrameTick {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        self.frame += 1;
        FrameTick {
            delta,
            frame: self.frame,
        }
    }

    /// Frames ticked so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Restart delta measurement without touching the frame counter
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
