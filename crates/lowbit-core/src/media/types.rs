use std::fmt;

/// Dimensions of a flat, row major sample buffer with interleaved channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub height: usize,
    pub width: usize,
    pub channels: usize,
}

impl Shape {
    pub fn new(height: usize, width: usize, channels: usize) -> Self {
        Self {
            height,
            width,
            channels,
        }
    }

    /// `height * width * channels`, `None` on overflow
    pub fn sample_count(&self) -> Option<usize> {
        self.height
            .checked_mul(self.width)?
            .checked_mul(self.channels)
    }

    /// The shape after a nearest neighbour 2x magnification.
    pub fn doubled(&self) -> Option<Self> {
        Some(Self {
            height: self.height.checked_mul(2)?,
            width: self.width.checked_mul(2)?,
            channels: self.channels,
        })
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.height, self.width, self.channels)
    }
}
