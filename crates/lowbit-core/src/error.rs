use std::string::FromUtf8Error;
use thiserror::Error;

use crate::container::Field;

#[derive(Error, Debug)]
pub enum LowbitError {
    /// Represents an unsupported carrier media. For example, a text file given as cover image
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a sample buffer that does not match its shape
    #[error("Shape {height}x{width}x{channels} does not describe {samples} samples")]
    InvalidShape {
        height: usize,
        width: usize,
        channels: usize,
        samples: usize,
    },

    /// Represents an error caused by an invalid filename, for example an empty filename or `..`
    #[error("A file with an invalid file name was provided")]
    InvalidFileName,

    /// Represents a file name that does not fit into the 8 bit name length field
    #[error("File name is {length} bytes long, at most 31 bytes can be hidden")]
    FileNameTooLong { length: usize },

    /// Represents a payload that does not fit into the 32 bit payload length field
    #[error("Payload is {length} bytes long, at most 536870911 bytes can be hidden")]
    PayloadTooLarge { length: usize },

    /// Represents the error of invalid UTF-8 data found as file name inside of a container
    #[error("Invalid file name data found inside the container")]
    InvalidFileNameData(#[from] FromUtf8Error),

    /// Represents a header whose declared lengths run past the end of the sample buffer
    #[error("Malformed container: {field} needs {required} samples, only {available} left")]
    MalformedContainer {
        field: Field,
        required: usize,
        available: usize,
    },

    /// Represents a header declaring more payload bits per sample than a sample holds
    #[error("Malformed container: {0} bits per sample are not supported")]
    UnsupportedBitsPerSample(u16),

    /// Represents a digit width outside of 1..=64
    #[error("Digit width {0} is not supported, it must be within 1..=64")]
    InvalidDigitWidth(u32),

    /// Represents a request for more bits than a bit sequence holds
    #[error("Requested {required} bits, only {available} available")]
    InsufficientBits { required: usize, available: usize },

    /// Represents a field write that runs past the end of the sample buffer
    #[error("Capacity Error: {field} needs {required} samples, only {available} left")]
    CapacityExceeded {
        field: Field,
        required: usize,
        available: usize,
    },

    #[error(
        "Capacity Error: The image grown to {width}x{height} still needs {bits_per_sample} bits per sample, at most 8 are possible"
    )]
    ImageCapacityError {
        width: usize,
        height: usize,
        bits_per_sample: u64,
    },

    /// Represents a failed allocation while growing the cover image
    #[error("Not enough memory to grow the image to {samples} samples")]
    OutOfMemory { samples: usize },

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing files")]
    MissingFiles,
}
