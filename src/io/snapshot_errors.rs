use std::{error::Error, fmt, io, num::ParseFloatError};

#[derive(Debug)]
pub enum SnapshotError {
    IoError(io::Error),
    ParseFloatError(ParseFloatError),
    UnknownCategory(String),
    UnknownRecord { line: usize },
    FieldCount { line: usize, expected: usize, found: usize },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::IoError(e) => write!(f, "I/O error: {}", e),
            SnapshotError::ParseFloatError(e) => write!(f, "Float parsing error: {}", e),
            SnapshotError::UnknownCategory(name) => write!(f, "Unknown category: {}", name),
            SnapshotError::UnknownRecord { line } => {
                write!(f, "Line {}: unrecognized record", line)
            }
            SnapshotError::FieldCount {
                line,
                expected,
                found,
            } => write!(f, "Line {}: expected {} fields, found {}", line, expected, found),
        }
    }
}

impl Error for SnapshotError {}

// Implement `From<T>` conversions for automatic error mapping
impl From<io::Error> for SnapshotError {
    fn from(err: io::Error) -> Self {
        SnapshotError::IoError(err)
    }
}

impl From<ParseFloatError> for SnapshotError {
    fn from(err: ParseFloatError) -> Self {
        SnapshotError::ParseFloatError(err)
    }
}
