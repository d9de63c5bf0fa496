//! Error types for pattern decoding, construction and quantization.

use core::fmt;

/// The main error type, covering every failure the crate can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A byte buffer could not be decoded into a pattern.
    Parse(ParseError),
    /// An in-memory palette or pattern was inconsistent.
    Format(FormatError),
    /// A caller-supplied argument was invalid.
    Value(ValueError),
}

/// Errors related to reading a `.pat` byte buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The buffer ended before a section declared by the header.
    UnexpectedEof,
    /// The extension tag is neither the known tag nor blank.
    UnknownExtension,
    /// The header declares more palette entries than the format can hold.
    TooManyColors,
    /// Bytes follow the cell section (only reported in strict mode).
    TrailingData,
    /// The decoded fields do not form a valid pattern.
    InvalidPattern(FormatError),
}

/// Errors related to building a palette or a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// The palette has more entries than the format maximum.
    TooManyColors,
    /// A color index does not resolve in the palette.
    ColorIndexOutOfRange,
    /// The number of cells is not `width * height`.
    CellCountMismatch,
    /// The drop is larger than the pattern height.
    DropOutOfRange,
    /// An empty swatch was given a non-empty repeat unit.
    EmptyRepeatSource,
    /// The repeat derived from the drop does not fit the format's field width.
    RepeatTooLarge,
}

/// Errors related to invalid caller arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueError {
    /// The requested palette size was zero.
    ZeroMaxColors,
    /// The image is wider or taller than a pattern can be.
    ImageTooLarge,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Format(e) => write!(f, "{e}"),
            Self::Value(e) => write!(f, "{e}"),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof => write!(f, "unexpected end of input"),
            Self::UnknownExtension => write!(f, "unknown header extension tag"),
            Self::TooManyColors => write!(f, "declared palette exceeds 256 colors"),
            Self::TrailingData => write!(f, "trailing data after cell section"),
            Self::InvalidPattern(e) => write!(f, "invalid pattern: {e}"),
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyColors => write!(f, "palette exceeds 256 colors"),
            Self::ColorIndexOutOfRange => write!(f, "color index out of palette range"),
            Self::CellCountMismatch => write!(f, "cell count does not match dimensions"),
            Self::DropOutOfRange => write!(f, "drop exceeds pattern height"),
            Self::EmptyRepeatSource => write!(f, "empty swatch cannot fill a repeat"),
            Self::RepeatTooLarge => write!(f, "derived repeat width is too large"),
        }
    }
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxColors => write!(f, "max colors must be at least 1"),
            Self::ImageTooLarge => write!(f, "image dimensions exceed 65535"),
        }
    }
}

impl core::error::Error for Error {}
impl core::error::Error for ParseError {}
impl core::error::Error for FormatError {}
impl core::error::Error for ValueError {}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<FormatError> for Error {
    fn from(e: FormatError) -> Self {
        Self::Format(e)
    }
}

impl From<ValueError> for Error {
    fn from(e: ValueError) -> Self {
        Self::Value(e)
    }
}

impl From<FormatError> for ParseError {
    fn from(e: FormatError) -> Self {
        Self::InvalidPattern(e)
    }
}

/// Result type for pattern operations.
pub type Result<T> = core::result::Result<T, Error>;

macro_rules! bail {
    ($err:expr) => {
        return Err($err.into())
    };
}

pub(crate) use bail;
