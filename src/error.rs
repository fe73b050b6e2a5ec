use std::error;
use std::fmt;
use std::result;

pub type Result<T> = result::Result<T, SassError>;

#[derive(Debug, Clone, PartialEq)]
pub struct SassError {
    pub message: String,
    pub kind: ErrorKind,
    pub offset: usize,
}

impl SassError {
    pub fn new<S: Into<String>>(kind: ErrorKind, offset: usize, message: S) -> SassError {
        SassError {
            message: message.into(),
            kind: kind,
            offset: offset,
        }
    }

    /// Attaches a location to an error raised somewhere without one.
    pub fn at(mut self, offset: usize) -> SassError {
        if self.offset == 0 {
            self.offset = offset;
        }
        self
    }
}

impl fmt::Display for SassError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} at {}: {}", self.kind, self.offset, self.message)
    }
}

impl error::Error for SassError {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorKind {
    InvalidOutputStyle,
    TypeCoercion,
    IncompatibleUnits,
    InvalidSquareUnits,
    UnboundedIteration,
    RecursionLimit,
}
