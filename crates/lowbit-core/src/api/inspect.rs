use std::path::{Path, PathBuf};

use crate::container::ContainerInfo;
use crate::media::image::{CoverImage, LsbCodec};
use crate::LowbitError;

pub fn prepare() -> InspectApi {
    InspectApi::default()
}

#[derive(Default, Debug)]
pub struct InspectApi {
    secret_media: Option<PathBuf>,
}

impl InspectApi {
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// Reads header and file name, nothing is written
    pub fn execute(self) -> Result<ContainerInfo, LowbitError> {
        let Some(secret_media) = self.secret_media else {
            return Err(LowbitError::CarrierNotSet);
        };

        let cover = CoverImage::from_file(&secret_media)?;
        LsbCodec::inspect(&cover)
    }
}
