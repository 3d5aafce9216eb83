use std::path::{Path, PathBuf};

use crate::media::image::{CoverImage, LsbCodec};
use crate::LowbitError;

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    output_folder: Option<PathBuf>,
}

impl UnveilApi {
    /// This is the secret image that contains the file to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// This is the folder where the file will be saved to, under its hidden name
    pub fn into_output_folder(mut self, output_folder: impl AsRef<Path>) -> Self {
        self.output_folder = Some(output_folder.as_ref().to_path_buf());
        self
    }

    /// Execute the unveil process, returns the path of the written file
    pub fn execute(self) -> Result<PathBuf, LowbitError> {
        let Some(secret_media) = self.secret_media else {
            return Err(LowbitError::CarrierNotSet);
        };
        let Some(output_folder) = self.output_folder else {
            return Err(LowbitError::TargetNotSet);
        };

        let cover = CoverImage::from_file(&secret_media)?;
        let file = LsbCodec::unveil(&cover)?;

        file.save_into(&output_folder)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;
    use crate::media::{Persist, Shape};
    use crate::test_utils::gradient_cover;

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let secret = temp_dir.path().join("secret.png");
        gradient_cover(Shape::new(32, 32, 4))
            .save_as(&temp_dir.path().join("cover.png"))
            .unwrap();
        crate::api::hide::prepare()
            .with_file("Cargo.toml")
            .with_image(temp_dir.path().join("cover.png"))
            .with_output(&secret)
            .execute()
            .unwrap();

        let unveiled = crate::api::unveil::prepare()
            .from_secret_file(&secret)
            .into_output_folder(temp_dir.path())
            .execute()
            .expect("Failed to unveil file from image");

        assert_eq!(unveiled, temp_dir.path().join("Cargo.toml"));
        assert_eq!(
            fs::read(unveiled).unwrap(),
            fs::read("Cargo.toml").unwrap()
        );
    }

    #[test]
    fn should_complain_about_missing_inputs() {
        assert!(matches!(
            prepare().into_output_folder(".").execute(),
            Err(LowbitError::CarrierNotSet)
        ));
        assert!(matches!(
            prepare().from_secret_file("a.png").execute(),
            Err(LowbitError::TargetNotSet)
        ));
    }

    #[test]
    fn should_not_write_anything_for_malformed_containers() {
        let temp_dir = tempdir().unwrap();
        let out_dir = temp_dir.path().join("out");
        fs::create_dir(&out_dir).unwrap();
        let plain = temp_dir.path().join("plain.png");
        // width 1, 4096 payload bits, no name, but only 48 samples
        let mut samples = vec![0u8; 48];
        samples[3] = 0x10;
        CoverImage::new(samples, Shape::new(4, 4, 3))
            .unwrap()
            .save_as(&plain)
            .unwrap();

        let result = prepare()
            .from_secret_file(&plain)
            .into_output_folder(&out_dir)
            .execute();

        assert!(matches!(result, Err(LowbitError::MalformedContainer { .. })));
        assert_eq!(fs::read_dir(&out_dir).unwrap().count(), 0);
    }
}
