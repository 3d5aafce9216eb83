use std::path::{Path, PathBuf};

use log::info;

use crate::media::image::{CoverImage, LsbCodec};
use crate::media::{CodecOptions, Persist};
use crate::message::HiddenFile;
use crate::planner::PlanResult;
use crate::LowbitError;

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    file: Option<PathBuf>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// The file to hide, only its file name is stored next to the data
    pub fn with_file<A: AsRef<Path>>(mut self, data_file: A) -> Self {
        self.file = Some(data_file.as_ref().to_path_buf());
        self
    }

    /// The cover image, it is only read
    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// Where the PNG image carrying the file is written to
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<PlanResult, LowbitError> {
        let Some(file) = self.file else {
            return Err(LowbitError::MissingFiles);
        };
        let Some(image) = self.image else {
            return Err(LowbitError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(LowbitError::TargetNotSet);
        };

        let hidden = HiddenFile::from_file(&file)?;
        let mut cover = CoverImage::from_file(&image)?;
        let plan = LsbCodec::hide(&mut cover, &hidden, &self.options)?;
        cover.save_as(&output)?;
        info!("Hid {file:?} in {output:?}");

        Ok(plan)
    }
}
