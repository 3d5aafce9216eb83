use crate::container::{self, ContainerInfo};
use crate::media::image::CoverImage;
use crate::media::CodecOptions;
use crate::message::HiddenFile;
use crate::planner::{self, PlanResult};
use crate::result::Result;

/// Hides files in, and unveils them from, the low bits of image samples.
pub struct LsbCodec;

impl LsbCodec {
    /// Plans the payload width, grows `cover` if needed and writes the container.
    pub fn hide(cover: &mut CoverImage, file: &HiddenFile, opts: &CodecOptions) -> Result<PlanResult> {
        let plan = planner::plan(cover, file.payload_bits(), file.name_bits(), opts)?;
        container::embed(cover.samples_mut(), plan.bits_per_sample, file)?;

        Ok(plan)
    }

    pub fn unveil(cover: &CoverImage) -> Result<HiddenFile> {
        container::extract(cover.samples())
    }

    pub fn inspect(cover: &CoverImage) -> Result<ContainerInfo> {
        container::inspect(cover.samples())
    }
}
