use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use image::{ColorType, DynamicImage, GenericImageView, ImageError, ImageFormat};
use log::{debug, error};

use crate::error::LowbitError;
use crate::media::{Persist, Shape};
use crate::result::Result;

/// Raster image flattened into its 8 bit samples, row major with interleaved channels.
///
/// ## Example of usage
/// ```rust
/// use lowbit_core::{CoverImage, Shape};
///
/// let mut cover = CoverImage::new(vec![1, 2, 3, 4], Shape::new(1, 2, 2)).unwrap();
/// cover.upscale2x().unwrap();
///
/// assert_eq!(cover.shape(), Shape::new(2, 4, 2));
/// assert_eq!(&cover.samples()[..8], &[1, 2, 1, 2, 3, 4, 3, 4]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverImage {
    samples: Vec<u8>,
    shape: Shape,
}

impl CoverImage {
    /// fails when `samples` does not hold exactly `height * width * channels` values
    pub fn new(samples: Vec<u8>, shape: Shape) -> Result<Self> {
        if shape.sample_count() != Some(samples.len()) {
            return Err(LowbitError::InvalidShape {
                height: shape.height,
                width: shape.width,
                channels: shape.channels,
                samples: samples.len(),
            });
        }

        Ok(Self { samples, shape })
    }

    /// Reads any image the `image` crate understands.
    pub fn from_file(file: &Path) -> Result<Self> {
        let img = image::open(file).map_err(|e| {
            error!("Error opening image {file:?}: {e}");
            match e {
                ImageError::IoError(source) => LowbitError::ReadError { source },
                ImageError::Unsupported(_) => LowbitError::UnsupportedMedia,
                _ => LowbitError::InvalidImageMedia,
            }
        })?;

        Ok(Self::from_dynamic_image(img))
    }

    /// Keeps gray, gray with alpha, RGB and RGBA in their 8 bit layout,
    /// everything else ends up as RGBA with 8 bits per channel.
    pub fn from_dynamic_image(img: DynamicImage) -> Self {
        let (width, height) = GenericImageView::dimensions(&img);
        let (channels, samples) = match img {
            DynamicImage::ImageLuma8(i) => (1, i.into_raw()),
            DynamicImage::ImageLumaA8(i) => (2, i.into_raw()),
            DynamicImage::ImageRgb8(i) => (3, i.into_raw()),
            DynamicImage::ImageRgba8(i) => (4, i.into_raw()),
            other => {
                debug!("Converting {:?} to 8 bit RGBA", other.color());
                (4, other.to_rgba8().into_raw())
            }
        };

        Self {
            samples,
            shape: Shape::new(height as usize, width as usize, channels),
        }
    }

    /// Always encodes PNG, lossy formats would destroy the hidden bits.
    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W) -> Result<()> {
        let width = u32::try_from(self.shape.width).map_err(|_| LowbitError::ImageEncodingError)?;
        let height =
            u32::try_from(self.shape.height).map_err(|_| LowbitError::ImageEncodingError)?;

        image::write_buffer_with_format(
            &mut writer,
            &self.samples,
            width,
            height,
            self.color_type()?,
            ImageFormat::Png,
        )
        .map_err(|e| {
            error!("Error saving image: {e}");
            LowbitError::ImageEncodingError
        })
    }

    fn color_type(&self) -> Result<ColorType> {
        match self.shape.channels {
            1 => Ok(ColorType::L8),
            2 => Ok(ColorType::La8),
            3 => Ok(ColorType::Rgb8),
            4 => Ok(ColorType::Rgba8),
            _ => {
                error!("Cannot build an image with shape {}", self.shape);
                Err(LowbitError::ImageEncodingError)
            }
        }
    }

    /// Nearest neighbour magnification, every pixel becomes a 2x2 block of itself.
    pub fn upscaled(&self) -> Result<Self> {
        let shape = self
            .shape
            .doubled()
            .ok_or(LowbitError::OutOfMemory { samples: usize::MAX })?;
        let samples = shape
            .sample_count()
            .ok_or(LowbitError::OutOfMemory { samples: usize::MAX })?;

        let mut grown = Vec::new();
        grown
            .try_reserve_exact(samples)
            .map_err(|_| LowbitError::OutOfMemory { samples })?;

        let channels = self.shape.channels;
        let row_len = self.shape.width * channels;
        if row_len > 0 {
            for row in self.samples.chunks_exact(row_len) {
                let start = grown.len();
                for pixel in row.chunks_exact(channels) {
                    grown.extend_from_slice(pixel);
                    grown.extend_from_slice(pixel);
                }
                grown.extend_from_within(start..);
            }
        }

        Ok(Self {
            samples: grown,
            shape,
        })
    }

    pub fn upscale2x(&mut self) -> Result<&mut Self> {
        *self = self.upscaled()?;
        Ok(self)
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    pub fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.samples
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl Persist for CoverImage {
    fn save_as(&self, file: &Path) -> Result<()> {
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            LowbitError::WriteError { source: e }
        })?;
        let mut writer = BufWriter::new(f);
        self.save_to_writer(&mut writer)?;
        writer
            .flush()
            .map_err(|source| LowbitError::WriteError { source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::gradient_cover;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn should_refuse_samples_not_matching_the_shape() {
        let result = CoverImage::new(vec![0; 5], Shape::new(1, 2, 3));

        assert!(matches!(
            result,
            Err(LowbitError::InvalidShape { samples: 5, .. })
        ));
    }

    #[test]
    fn upscale_should_turn_every_pixel_into_a_2x2_block() {
        let shape = Shape::new(2, 3, 3);
        let cover = gradient_cover(shape);
        let grown = cover.upscaled().unwrap();
        let (h, w, c) = (shape.height, shape.width, shape.channels);

        assert_eq!(grown.shape(), Shape::new(2 * h, 2 * w, c));
        assert_eq!(grown.len(), 4 * cover.len());
        for y in 0..2 * h {
            for x in 0..2 * w {
                for ch in 0..c {
                    let given = grown.samples()[(y * 2 * w + x) * c + ch];
                    let expected = cover.samples()[((y / 2) * w + x / 2) * c + ch];
                    assert_eq!(given, expected, "sample ({y}, {x}, {ch}) was not duplicated");
                }
            }
        }
    }

    #[test]
    fn upscale_of_an_empty_image_should_stay_empty() {
        let mut cover = CoverImage::new(vec![], Shape::new(0, 4, 3)).unwrap();
        cover.upscale2x().unwrap();

        assert!(cover.is_empty());
        assert_eq!(cover.shape(), Shape::new(0, 8, 3));
    }

    #[test]
    fn should_keep_the_native_channel_layout() {
        let gray = image::GrayImage::from_fn(3, 2, |x, y| image::Luma([(x + y) as u8]));
        let cover = CoverImage::from_dynamic_image(DynamicImage::ImageLuma8(gray));
        assert_eq!(cover.shape(), Shape::new(2, 3, 1));

        let rgb16 = DynamicImage::new_rgb16(4, 5);
        let cover = CoverImage::from_dynamic_image(rgb16);
        assert_eq!(cover.shape(), Shape::new(5, 4, 4));
    }

    #[test]
    fn should_survive_a_png_round_trip() {
        for channels in 1..=4 {
            let cover = gradient_cover(Shape::new(7, 5, channels));
            let mut png = Cursor::new(Vec::new());
            cover.save_to_writer(&mut png).unwrap();

            let img = image::load_from_memory_with_format(png.get_ref(), ImageFormat::Png).unwrap();
            assert_eq!(CoverImage::from_dynamic_image(img), cover);
        }
    }

    #[test]
    fn should_persist_as_png_file() {
        let out_dir = TempDir::new().unwrap();
        let target = out_dir.path().join("cover.png");
        let cover = gradient_cover(Shape::new(4, 4, 3));

        cover.save_as(&target).unwrap();

        assert_eq!(CoverImage::from_file(&target).unwrap(), cover);
    }

    #[test]
    fn should_report_unsupported_and_missing_media() {
        let out_dir = TempDir::new().unwrap();
        let text = out_dir.path().join("notes.txt");
        std::fs::write(&text, b"no image").unwrap();

        assert!(matches!(
            CoverImage::from_file(&text),
            Err(LowbitError::UnsupportedMedia)
        ));
        assert!(matches!(
            CoverImage::from_file(&out_dir.path().join("missing.png")),
            Err(LowbitError::ReadError { .. })
        ));
    }

    #[test]
    fn should_refuse_to_encode_odd_channel_counts() {
        let cover = CoverImage::new(vec![0; 5], Shape::new(1, 1, 5)).unwrap();

        assert!(matches!(
            cover.save_to_writer(Cursor::new(Vec::new())),
            Err(LowbitError::ImageEncodingError)
        ));
    }
}
