//! Error types for parsing and value access.

use std::fmt;

use crate::value::JsonType;

/// The syntax error categories the parser can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// No JSON value starts at the current position
    ExpectValue,
    /// A literal or number began correctly but has an invalid shape
    InvalidValue,
    /// Raw control character inside a string
    InvalidStringChar,
    /// Unknown character after a backslash
    InvalidStringEscape,
    /// `\u` not followed by four hex digits
    InvalidUnicodeHex,
    /// Unpaired or out-of-range surrogate in a `\u` escape
    InvalidUnicodeSurrogate,
    /// Input ended before the closing quote of a string
    MissQuotationMark,
    /// Expected `,` or `]` inside an array
    MissCommaOrSquareBracket,
    /// Expected a string key inside an object
    MissKey,
    /// Expected `:` after an object key
    MissColon,
    /// Expected `,` or `}` inside an object
    MissCommaOrCurlyBracket,
    /// Number converts to an infinite double
    NumberTooBig,
    /// Leftover characters after the single top-level value
    RootNotSingular,
}

impl ParseErrorKind {
    /// The canonical wording for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            ParseErrorKind::ExpectValue => "EXPECT VALUE",
            ParseErrorKind::InvalidValue => "INVALID VALUE",
            ParseErrorKind::InvalidStringChar => "INVALID STRING CHAR",
            ParseErrorKind::InvalidStringEscape => "INVALID STRING ESCAPE",
            ParseErrorKind::InvalidUnicodeHex => "INVALID UNICODE HEX",
            ParseErrorKind::InvalidUnicodeSurrogate => "INVALID UNICODE SURROGATE",
            ParseErrorKind::MissQuotationMark => "MISS QUOTATION MARK",
            ParseErrorKind::MissCommaOrSquareBracket => "MISS COMMA OR SQUARE BRACKET",
            ParseErrorKind::MissKey => "MISS KEY",
            ParseErrorKind::MissColon => "MISS COLON",
            ParseErrorKind::MissCommaOrCurlyBracket => "MISS COMMA OR CURLY BRACKET",
            ParseErrorKind::NumberTooBig => "NUMBER TOO BIG",
            ParseErrorKind::RootNotSingular => "ROOT NOT SINGULAR",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A positioned syntax error.
///
/// `rest` is the unconsumed input starting at the offending token, which
/// serves as the positional marker in the rendered message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub rest: String,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, rest: &str) -> Self {
        ParseError {
            kind,
            rest: rest.to_string(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.rest)
    }
}

impl std::error::Error for ParseError {}

/// Error type for typed access against an incompatible value.
///
/// These are contract violations on an already-built tree; nothing inside
/// the crate catches them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// Wrong accessor for the active variant
    TypeMismatch {
        expected: &'static str,
        found: JsonType,
    },
    /// Object lookup miss
    KeyNotFound(String),
    /// Array position past the end
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessError::TypeMismatch { expected, found } => {
                write!(f, "type mismatch: expected {}, found {}", expected, found)
            }
            AccessError::KeyNotFound(key) => write!(f, "key not found: {}", key),
            AccessError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for array of length {}", index, len)
            }
        }
    }
}

impl std::error::Error for AccessError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::new(ParseErrorKind::MissColon, "1}");
        assert_eq!(err.to_string(), "MISS COLON: 1}");

        let err = ParseError::new(ParseErrorKind::ExpectValue, "");
        assert_eq!(err.to_string(), "EXPECT VALUE: ");
    }

    #[test]
    fn test_access_error_display() {
        let err = AccessError::TypeMismatch {
            expected: "array",
            found: JsonType::Number,
        };
        assert_eq!(err.to_string(), "type mismatch: expected array, found number");

        let err = AccessError::KeyNotFound("name".to_string());
        assert_eq!(err.to_string(), "key not found: name");

        let err = AccessError::IndexOutOfRange { index: 3, len: 2 };
        assert_eq!(err.to_string(), "index 3 out of range for array of length 2");
    }
}
