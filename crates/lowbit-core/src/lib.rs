//! # Lowbit Core API
//!
//! Hides one file, together with its name, in the low-order bits of the
//! samples of a raster image and unveils it again losslessly.
//!
//! The number of bits taken from every sample adapts to the file size.
//! When a file needs more than 8 bits per sample the image is magnified 2x
//! (nearest neighbour) until it fits. The result is always written as PNG.
//!
//! # Usage Examples
//!
//! ## Hide a file inside an image
//!
//! ```rust,no_run
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//!
//! lowbit_core::api::hide::prepare()
//!     .with_file("Cargo.toml")        // will hide this file inside the image
//!     .with_image("cover.png")
//!     .with_output(temp_dir.path().join("image-with-a-file-inside.png"))
//!     .execute()
//!     .expect("Failed to hide file in image");
//! ```
//!
//! ## Unveil the file from an image
//!
//! ```rust,no_run
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//!
//! lowbit_core::api::unveil::prepare()
//!     .from_secret_file("image-with-a-file-inside.png")
//!     .into_output_folder(temp_dir.path())
//!     .execute()
//!     .expect("Failed to unveil file from image");
//! ```
//!
//! ## Work on samples in memory
//!
//! ```rust
//! use lowbit_core::{CodecOptions, CoverImage, HiddenFile, LsbCodec, Shape};
//!
//! let mut cover = CoverImage::new(vec![0x80; 16 * 16 * 3], Shape::new(16, 16, 3)).unwrap();
//! let file = HiddenFile::new("a.txt", b"ABC".to_vec()).unwrap();
//!
//! let plan = LsbCodec::hide(&mut cover, &file, &CodecOptions::default()).unwrap();
//! assert_eq!(plan.bits_per_sample, 1);
//! assert_eq!(LsbCodec::unveil(&cover).unwrap(), file);
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod bits;
pub mod commands;
pub mod container;
pub mod error;
pub mod media;
pub mod message;
pub mod planner;
pub mod radix;
pub mod result;

#[cfg(test)]
mod test_utils;

pub use crate::bits::BitSequence;
pub use crate::container::{ContainerInfo, Field, Header};
pub use crate::error::LowbitError;
pub use crate::media::image::{CoverImage, LsbCodec};
pub use crate::media::{CodecOptions, Persist, Shape};
pub use crate::message::HiddenFile;
pub use crate::planner::PlanResult;
pub use crate::result::Result;
