use crate::error::LowbitError;

pub type Result<T> = std::result::Result<T, LowbitError>;
