pub mod cover;
pub mod lsb_codec;

pub use cover::CoverImage;
pub use lsb_codec::LsbCodec;
