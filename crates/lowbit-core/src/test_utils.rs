use crate::media::{CoverImage, Shape};

/// A cover whose samples differ from their neighbours in all bits.
pub fn gradient_cover(shape: Shape) -> CoverImage {
    let count = shape.sample_count().expect("test shape too large");
    let samples = (0..count)
        .map(|i| (i * 97 + (i / shape.channels.max(1)) * 13 + 0x5a) as u8)
        .collect();

    CoverImage::new(samples, shape).expect("test shape does not match")
}
