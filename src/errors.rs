use std::{
    error,
    fmt::{Display, Formatter},
    io::{self, ErrorKind},
    path::Path,
};

/// * The error info from `std::io::Error` but this must contains the message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IOErrorInfo {
    pub kind: ErrorKind,
    pub message: String,
}

impl IOErrorInfo {
    pub fn new(kind: ErrorKind, message: String) -> Self {
        Self { kind, message }
    }
}

/// The error info for converting between PCM and ADP ADPCM
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdpError {
    InvalidArguments(String),
    UnsupportedChannels(u16),
    BufferTooSmall(String),
    IOError(IOErrorInfo),
}

impl AdpError {
    /// * Wrap an `io::Error` and note which file it happened on.
    pub fn io_with_path(ioerr: io::Error, path: &Path) -> Self {
        Self::IOError(IOErrorInfo::new(ioerr.kind(), format!("{}: {ioerr}", path.display())))
    }
}

impl error::Error for AdpError {}

impl Display for AdpError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Self::InvalidArguments(info) => write!(f, "Invalid arguments: {info}"),
            Self::UnsupportedChannels(channels) => write!(f, "Unsupported channel count {channels}, only 1 or 2 channels are supported"),
            Self::BufferTooSmall(info) => write!(f, "The buffer is too small: {info}"),
            Self::IOError(ioerror) => write!(f, "IO error: {}", ioerror.message),
        }
    }
}

impl From<io::Error> for AdpError {
    fn from(ioerr: io::Error) -> Self {
        AdpError::IOError(IOErrorInfo {
            kind: ioerr.kind(),
            message: ioerr.to_string(),
        })
    }
}

impl From<AdpError> for io::Error {
    fn from(err: AdpError) -> Self {
        match err {
            AdpError::IOError(ioerr) => io::Error::new(ioerr.kind, ioerr.message),
            other => io::Error::new(ErrorKind::InvalidInput, other.to_string()),
        }
    }
}
