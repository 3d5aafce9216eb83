use std::fs;
use std::path::{Component, Path, PathBuf};

use log::info;

use crate::error::LowbitError;
use crate::result::Result;

/// Longest file name whose bit length still fits the 8 bit name length field.
pub const MAX_FILE_NAME_BYTES: usize = u8::MAX as usize / 8;

/// Longest payload whose bit length still fits the 32 bit payload length field.
pub const MAX_PAYLOAD_BYTES: usize = u32::MAX as usize / 8;

/// A file travelling inside a container: its bare name and its bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenFile {
    name: String,
    data: Vec<u8>,
}

impl HiddenFile {
    pub fn new<S: Into<String>>(name: S, data: Vec<u8>) -> Result<Self> {
        let name = name.into();
        check_file_name(&name)?;
        if name.len() > MAX_FILE_NAME_BYTES {
            return Err(LowbitError::FileNameTooLong { length: name.len() });
        }
        if data.len() > MAX_PAYLOAD_BYTES {
            return Err(LowbitError::PayloadTooLarge { length: data.len() });
        }

        Ok(Self { name, data })
    }

    /// Reads the file, only the last component of `file` is kept as name.
    pub fn from_file<P: AsRef<Path> + ?Sized>(file: &P) -> Result<Self> {
        let file = file.as_ref();
        let name = file
            .file_name()
            .ok_or(LowbitError::InvalidFileName)?
            .to_str()
            .ok_or(LowbitError::InvalidFileName)?
            .to_owned();
        let data = fs::read(file).map_err(|source| LowbitError::ReadError { source })?;

        Self::new(name, data)
    }

    /// Whatever a container declared, names are checked only when saving.
    pub(crate) fn from_container(name: String, data: Vec<u8>) -> Self {
        Self { name, data }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn name_bits(&self) -> u8 {
        (self.name.len() * 8) as u8
    }

    pub fn payload_bits(&self) -> u32 {
        (self.data.len() * 8) as u32
    }

    /// Writes the data as `<folder>/<last component of name>` and returns that path.
    pub fn save_into<P: AsRef<Path> + ?Sized>(&self, folder: &P) -> Result<PathBuf> {
        let file_name = Path::new(&self.name)
            .file_name()
            .ok_or(LowbitError::InvalidFileName)?;
        let target = folder.as_ref().join(file_name);
        fs::write(&target, &self.data).map_err(|source| LowbitError::WriteError { source })?;
        info!("Unveiled {} bytes into {target:?}", self.data.len());

        Ok(target)
    }
}

/// A usable name is exactly one normal path component.
fn check_file_name(name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(c)), None) if c == name => Ok(()),
        _ => Err(LowbitError::InvalidFileName),
    }
}
