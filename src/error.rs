//! Error types for reading and decoding SDLXLIFF files
//!
//! Only two things can go wrong: the file cannot be read, or its bytes do not
//! decode into a document. Everything downstream of a decoded document is
//! infallible.

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// Top-level error returned by the file-level helpers
#[derive(Debug, Error)]
pub enum Error {
    /// The input file could not be opened or read
    #[error("open {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was read but is not a decodable XLIFF document
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Categories of decode failure
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Not well-formed XML (bad tag nesting, bad entity, invalid UTF-8, ...)
    Syntax(String),
    /// The input holds no element at all
    NoRoot,
    /// The root element is not `xliff`
    UnexpectedRoot { found: String },
    /// Input larger than the configured limit
    MaxSizeExceeded { max: usize },
    /// Elements nested deeper than the configured limit
    MaxDepthExceeded { max: usize },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax(msg) => write!(f, "syntax error: {msg}"),
            Self::NoRoot => write!(f, "EOF: no root element"),
            Self::UnexpectedRoot { found } => {
                write!(f, "expected element type <xliff> but have <{found}>")
            }
            Self::MaxSizeExceeded { max } => write!(f, "input exceeds {max} bytes"),
            Self::MaxDepthExceeded { max } => write!(f, "elements nested deeper than {max}"),
        }
    }
}

/// Decode failure with the byte offset it was detected at, when known
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    kind: ParseErrorKind,
    offset: Option<u64>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind) -> Self {
        Self { kind, offset: None }
    }

    pub fn syntax(message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::Syntax(message.into()))
    }

    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    pub fn offset(&self) -> Option<u64> {
        self.offset
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(offset) = self.offset {
            write!(f, " at byte {offset}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

pub type Result<T> = std::result::Result<T, Error>;
