use std::path::{Path, PathBuf};

use crate::container::ContainerInfo;
use crate::{CodecOptions, LowbitError};

/// Hides `data_file` in `media` and writes `<output_name>.png`, returns that path.
pub fn hide(
    data_file: &Path,
    media: &Path,
    output_name: &Path,
    options: CodecOptions,
) -> Result<PathBuf, LowbitError> {
    let output = png_output_path(output_name);
    crate::api::hide::prepare()
        .with_options(options)
        .with_file(data_file)
        .with_image(media)
        .with_output(&output)
        .execute()?;

    Ok(output)
}

/// Unveils the hidden file of `secret_media` into `output_folder`, returns its path.
pub fn unveil(secret_media: &Path, output_folder: &Path) -> Result<PathBuf, LowbitError> {
    crate::api::unveil::prepare()
        .from_secret_file(secret_media)
        .into_output_folder(output_folder)
        .execute()
}

pub fn inspect(secret_media: &Path) -> Result<ContainerInfo, LowbitError> {
    crate::api::inspect::prepare()
        .from_secret_file(secret_media)
        .execute()
}

/// `out` becomes `out.png`, names already ending in `.png` stay as they are.
pub fn png_output_path(output_name: &Path) -> PathBuf {
    let is_png = output_name
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
    if is_png {
        return output_name.to_path_buf();
    }

    let mut name = output_name.as_os_str().to_owned();
    name.push(".png");
    PathBuf::from(name)
}
