use thiserror::Error;

#[derive(Error, Debug)]
pub enum StegamixError {
    /// Represents a bit depth outside of 1..=8, for example 0 or 9
    #[error("Bit depth must be between 1 and 8 inclusive, got {0}")]
    InvalidBitDepth(u8),

    /// Represents a bit plane index outside of 0..=7
    #[error("Bit plane must be between 0 and 7 inclusive, got {0}")]
    InvalidBitPlane(u8),

    /// Represents a message character that does not fit into 8 bits
    #[error("Character {0:?} cannot be encoded in 8 bits")]
    NonAsciiCharacter(char),

    /// Represents a bit string that is empty or contains anything but `0` and `1`
    #[error("Malformed bit string: {0:?}")]
    MalformedBits(String),

    /// Represents an image with rows of different length where a rectangular one is required
    #[error("Image is not rectangular: row {row} has {found} pixels, expected {expected}")]
    ShapeMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Represents a payload that does not fit into the carrier, sentinel byte included
    #[error("Capacity Error: message requires {required} bits but the image holds only {available} bits")]
    CapacityExceeded { required: usize, available: usize },

    /// Represents a row or column tag that does not decode to a usable index
    #[error("Line {line} carries an invalid tag {tag:?}")]
    InvalidTag { line: usize, tag: String },

    /// Represents an output position that no tagged line claimed
    #[error("No line is tagged with index {0}")]
    MissingTag(usize),

    /// Represents a flat pixel buffer that does not match the given dimensions
    #[error("Pixel buffer has {found} bytes, expected {expected}")]
    InvalidBufferSize { expected: usize, found: usize },

    /// Represents an unsupported media file. For example, an audio file
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    #[error("No carrier image set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,
}
