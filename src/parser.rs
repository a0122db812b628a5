//! Recursive-descent JSON parsing.

use ahash::AHashMap;

use crate::error::{ParseError, ParseErrorKind};
use crate::json::Json;

/// Parses one JSON value out of `input`.
///
/// Strict JSON only: no comments, no trailing commas, exactly one top-level
/// value. Errors carry the unconsumed input from the offending token as the
/// position marker. Recursion depth follows input nesting depth, so inputs
/// nested deep enough can exhaust the call stack.
pub(crate) fn parse(input: &str) -> Result<Json, ParseError> {
    let mut parser = Parser::new(input);
    parser.parse()
}

struct Parser<'a> {
    input: &'a str,
    /// Read cursor, a byte offset; advances monotonically.
    pos: usize,
    /// Start of the token being scanned, for error reporting.
    mark: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Parser {
            input,
            pos: 0,
            mark: 0,
        }
    }

    fn parse(&mut self) -> Result<Json, ParseError> {
        self.skip_whitespace();
        let value = self.parse_value()?;
        self.skip_whitespace();
        if self.pos < self.input.len() {
            return Err(self.fail(ParseErrorKind::RootNotSingular));
        }
        Ok(value)
    }

    fn fail(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, &self.input[self.mark..])
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\r' | b'\n') = self.peek() {
            self.bump();
        }
        self.mark = self.pos;
    }

    fn parse_value(&mut self) -> Result<Json, ParseError> {
        match self.peek() {
            Some(b'n') => self.parse_literal("null", Json::new()),
            Some(b't') => self.parse_literal("true", Json::from(true)),
            Some(b'f') => self.parse_literal("false", Json::from(false)),
            Some(b'"') => self.parse_string(),
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            Some(b'-' | b'0'..=b'9') => self.parse_number(),
            _ => Err(self.fail(ParseErrorKind::ExpectValue)),
        }
    }

    fn parse_literal(&mut self, literal: &str, value: Json) -> Result<Json, ParseError> {
        if !self.input[self.pos..].starts_with(literal) {
            return Err(self.fail(ParseErrorKind::InvalidValue));
        }
        self.pos += literal.len();
        self.mark = self.pos;
        Ok(value)
    }

    fn parse_number(&mut self) -> Result<Json, ParseError> {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.bump();
        }

        // Integer part: a lone 0, or 1-9 followed by any digits. A digit
        // after a leading 0 is left unconsumed and trips the caller.
        match self.peek() {
            Some(b'0') => self.bump(),
            Some(b'1'..=b'9') => {
                while let Some(b'0'..=b'9') = self.peek() {
                    self.bump();
                }
            }
            _ => return Err(self.fail(ParseErrorKind::InvalidValue)),
        }

        // Fraction: at least one digit after the point.
        if self.peek() == Some(b'.') {
            self.bump();
            if !matches!(self.peek(), Some(b'0'..=b'9')) {
                return Err(self.fail(ParseErrorKind::InvalidValue));
            }
            while let Some(b'0'..=b'9') = self.peek() {
                self.bump();
            }
        }

        // Exponent: optional sign, then at least one digit.
        if matches!(self.peek(), Some(b'e' | b'E')) {
            self.bump();
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.bump();
            }
            if !matches!(self.peek(), Some(b'0'..=b'9')) {
                return Err(self.fail(ParseErrorKind::InvalidValue));
            }
            while let Some(b'0'..=b'9') = self.peek() {
                self.bump();
            }
        }

        let value: f64 = self.input[start..self.pos]
            .parse()
            .map_err(|_| self.fail(ParseErrorKind::InvalidValue))?;
        if value.is_infinite() {
            return Err(self.fail(ParseErrorKind::NumberTooBig));
        }
        self.mark = self.pos;
        Ok(Json::from(value))
    }

    fn parse_string(&mut self) -> Result<Json, ParseError> {
        Ok(Json::from(self.parse_raw_string()?))
    }

    /// Scans a quoted string, decoding escapes into UTF-8 as it goes.
    /// The caller has already checked the opening quote.
    fn parse_raw_string(&mut self) -> Result<String, ParseError> {
        self.bump();
        let mut out = String::new();
        let mut run = self.pos;
        loop {
            match self.peek() {
                None => return Err(self.fail(ParseErrorKind::MissQuotationMark)),
                Some(b'"') => {
                    out.push_str(&self.input[run..self.pos]);
                    self.bump();
                    self.mark = self.pos;
                    return Ok(out);
                }
                Some(b'\\') => {
                    out.push_str(&self.input[run..self.pos]);
                    self.bump();
                    self.parse_escape(&mut out)?;
                    run = self.pos;
                }
                Some(b) if b < 0x20 => {
                    return Err(self.fail(ParseErrorKind::InvalidStringChar));
                }
                Some(_) => self.bump(),
            }
        }
    }

    fn parse_escape(&mut self, out: &mut String) -> Result<(), ParseError> {
        let b = self
            .peek()
            .ok_or_else(|| self.fail(ParseErrorKind::InvalidStringEscape))?;
        self.bump();
        match b {
            b'"' => out.push('"'),
            b'\\' => out.push('\\'),
            b'/' => out.push('/'),
            b'b' => out.push('\u{8}'),
            b'f' => out.push('\u{c}'),
            b'n' => out.push('\n'),
            b'r' => out.push('\r'),
            b't' => out.push('\t'),
            b'u' => {
                let mut code = u32::from(self.parse_hex4()?);
                if (0xD800..=0xDBFF).contains(&code) {
                    // High surrogate: the low half must follow immediately.
                    if self.peek() != Some(b'\\') {
                        return Err(self.fail(ParseErrorKind::InvalidUnicodeSurrogate));
                    }
                    self.bump();
                    if self.peek() != Some(b'u') {
                        return Err(self.fail(ParseErrorKind::InvalidUnicodeSurrogate));
                    }
                    self.bump();
                    let low = u32::from(self.parse_hex4()?);
                    if !(0xDC00..=0xDFFF).contains(&low) {
                        return Err(self.fail(ParseErrorKind::InvalidUnicodeSurrogate));
                    }
                    code = (((code - 0xD800) << 10) | (low - 0xDC00)) + 0x1_0000;
                } else if (0xDC00..=0xDFFF).contains(&code) {
                    return Err(self.fail(ParseErrorKind::InvalidUnicodeSurrogate));
                }
                let decoded = char::from_u32(code)
                    .ok_or_else(|| self.fail(ParseErrorKind::InvalidUnicodeSurrogate))?;
                out.push(decoded);
            }
            _ => return Err(self.fail(ParseErrorKind::InvalidStringEscape)),
        }
        Ok(())
    }

    fn parse_hex4(&mut self) -> Result<u16, ParseError> {
        let mut code: u16 = 0;
        for _ in 0..4 {
            let b = self
                .peek()
                .ok_or_else(|| self.fail(ParseErrorKind::InvalidUnicodeHex))?;
            let digit = match b {
                b'0'..=b'9' => b - b'0',
                b'a'..=b'f' => b - b'a' + 10,
                b'A'..=b'F' => b - b'A' + 10,
                _ => return Err(self.fail(ParseErrorKind::InvalidUnicodeHex)),
            };
            self.bump();
            code = code << 4 | u16::from(digit);
        }
        Ok(code)
    }

    fn parse_array(&mut self) -> Result<Json, ParseError> {
        self.bump();
        self.skip_whitespace();
        let mut items = Vec::new();
        if self.peek() == Some(b']') {
            self.bump();
            self.mark = self.pos;
            return Ok(Json::from(items));
        }
        loop {
            self.skip_whitespace();
            if self.peek().is_none() {
                return Err(self.fail(ParseErrorKind::MissCommaOrSquareBracket));
            }
            items.push(self.parse_value()?);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.bump(),
                Some(b']') => {
                    self.bump();
                    self.mark = self.pos;
                    return Ok(Json::from(items));
                }
                _ => return Err(self.fail(ParseErrorKind::MissCommaOrSquareBracket)),
            }
        }
    }

    fn parse_object(&mut self) -> Result<Json, ParseError> {
        self.bump();
        self.skip_whitespace();
        let mut entries = AHashMap::new();
        if self.peek() == Some(b'}') {
            self.bump();
            self.mark = self.pos;
            return Ok(Json::from(entries));
        }
        loop {
            self.skip_whitespace();
            if self.peek() != Some(b'"') {
                return Err(self.fail(ParseErrorKind::MissKey));
            }
            let key = self.parse_raw_string()?;
            self.skip_whitespace();
            if self.peek() != Some(b':') {
                return Err(self.fail(ParseErrorKind::MissColon));
            }
            self.bump();
            self.skip_whitespace();
            let value = self.parse_value()?;
            // Duplicate keys overwrite silently; the last write wins.
            entries.insert(key, value);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.bump(),
                Some(b'}') => {
                    self.bump();
                    self.mark = self.pos;
                    return Ok(Json::from(entries));
                }
                _ => return Err(self.fail(ParseErrorKind::MissCommaOrCurlyBracket)),
            }
        }
    }
}
