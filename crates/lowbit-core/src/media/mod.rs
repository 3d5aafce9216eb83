pub mod codec_options;
pub mod image;
mod types;

use std::path::Path;

pub use self::image::CoverImage;
pub use codec_options::CodecOptions;
pub use types::*;

pub trait Persist {
    fn save_as(&self, _: &Path) -> crate::Result<()>;
}
