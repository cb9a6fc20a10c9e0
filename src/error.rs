use std::fmt;

/// Classifies a lexical error.
///
/// The catalog is fixed; [`ScanErrorKind::code`] exposes the stable numeric
/// code each entry is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanErrorKind {
    /// No entry in the symbol table matches at this position.
    UnknownSymbol,
    /// String matcher invoked at a position without an opening quote.
    MissingOpeningQuote,
    /// End of input reached while parsing an escape sequence.
    EofInEscape,
    /// Backslash followed by an unrecognized escape character.
    UnknownEscape,
    /// End of input reached before the closing quote.
    MissingClosingQuote,
    /// Identifier matcher invoked at a non-identifier start character.
    BadIdentifierStart,
    /// Number matcher invoked at a character that is neither digit nor `.`.
    BadNumberStart,
    /// Number contained no digit at all (e.g. an isolated `.`).
    NoDigit,
    /// Exponent matcher invoked at a character other than `e`/`E`.
    BadExponentStart,
    /// No digit after the exponent marker and optional sign.
    NoExponentValue,
    /// Matcher invoked past the end of input.
    EofReached,
}

impl ScanErrorKind {
    /// Stable numeric code of this catalog entry.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::UnknownSymbol => 10,
            Self::MissingOpeningQuote => 11,
            Self::EofInEscape => 12,
            Self::UnknownEscape => 13,
            Self::MissingClosingQuote => 14,
            Self::BadIdentifierStart => 15,
            Self::BadNumberStart => 16,
            Self::NoDigit => 17,
            Self::BadExponentStart => 30,
            Self::NoExponentValue => 31,
            Self::EofReached => 40,
        }
    }
}

impl fmt::Display for ScanErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::UnknownSymbol => "Unknown symbol.",
            Self::MissingOpeningQuote => "Error parsing string: Opening quote missing.",
            Self::EofInEscape => {
                "Error parsing string: EOF reached while parsing escape sequence."
            }
            Self::UnknownEscape => "Error parsing string: Unknown escape sequence.",
            Self::MissingClosingQuote => "Error parsing string: Missing closing quote.",
            Self::BadIdentifierStart => "Invalid start character for identifier.",
            Self::BadNumberStart => "Error in parsing number: Expected digit or '.'.",
            Self::NoDigit => "Error in parsing number: No digit.",
            Self::BadExponentStart => "Error in parsing exponent: Invalid start character.",
            Self::NoExponentValue => "Error in parsing exponent: No value.",
            Self::EofReached => "Error: EOF reached.",
        };
        f.write_str(msg)
    }
}

/// One lexical failure, detected at byte offset `pos`.
///
/// `filename` and `content` are carried only so a reporter can turn `pos`
/// into a line/column pair later; the scanner never consults them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at offset {pos}")]
pub struct ScanError {
    pub filename: Option<String>,
    pub content: String,
    pub pos: usize,
    pub kind: ScanErrorKind,
}

impl ScanError {
    #[must_use]
    pub fn new(content: &str, pos: usize, kind: ScanErrorKind) -> Self {
        Self {
            filename: None,
            content: content.to_string(),
            pos,
            kind,
        }
    }

    /// Attach the originating file name for reporting.
    #[must_use]
    pub fn with_filename(mut self, filename: &str) -> Self {
        self.filename = Some(filename.to_string());
        self
    }

    /// Zero-based `(line, column)` of `pos`, found by counting newlines
    /// from the start of the buffer. O(pos) per call.
    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        let mut line = 0;
        let mut column = 0;
        for &byte in self.content.as_bytes().iter().take(self.pos) {
            if byte == b'\n' {
                line += 1;
                column = 0;
            } else {
                column += 1;
            }
        }
        (line, column)
    }

    /// Fixed-format report line: `Error in <file>:<line>:<col>: <msg>`.
    #[must_use]
    pub fn report(&self) -> String {
        let (line, column) = self.position();
        let file = self.filename.as_deref().unwrap_or("<input>");
        format!("Error in {file}:{line}:{column}: {}", self.kind)
    }
}
