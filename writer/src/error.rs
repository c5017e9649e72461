use std::fmt;
use std::io;
use std::path::PathBuf;

/// Everything that can go wrong while splitting markdown into files.
/// The splitting itself cannot fail; these are all input, output, or
/// encoding problems around it.
#[derive(Debug)]
pub enum SplitError {
    InputNotFound(PathBuf),
    OutputExists(PathBuf),
    UnknownEncoding(String),
    UnsupportedEncoding(String),
    Decode { path: PathBuf, encoding: String },
    InvalidFilename(String),
    Io(io::Error),
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitError::InputNotFound(path) => {
                write!(f, "input file or folder '{}' does not exist", path.display())
            }
            SplitError::OutputExists(path) => write!(
                f,
                "output folder '{}' already exists (pass --force to write into it)",
                path.display()
            ),
            SplitError::UnknownEncoding(label) => write!(f, "unknown encoding '{}'", label),
            SplitError::UnsupportedEncoding(name) => {
                write!(f, "encoding '{}' cannot be used for output files", name)
            }
            SplitError::Decode { path, encoding } => {
                write!(f, "'{}' is not valid {}", path.display(), encoding)
            }
            SplitError::InvalidFilename(title) => {
                write!(f, "heading '{}' does not leave a usable file name", title)
            }
            SplitError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for SplitError {}

impl From<io::Error> for SplitError {
    fn from(err: io::Error) -> Self {
        SplitError::Io(err)
    }
}
