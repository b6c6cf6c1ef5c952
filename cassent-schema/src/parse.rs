//! Recursive-descent parser for CQL type expressions.

use std::collections::HashSet;

use thiserror::Error;

use crate::{NativeType, SchemaType};

/// Failure to parse a type expression.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeParseError {
    #[error("unknown type name '{0}'")]
    Unknown(String),
    #[error("{0}")]
    Malformed(String),
}

/// Parse a CQL type expression such as `list<frozen<map<text, int>>>`.
///
/// `frozen<...>` is transparent: it affects storage, not the value shape. A
/// bare identifier that is neither a native type nor in `udts` is an
/// [`TypeParseError::Unknown`]; a single-quoted name parses as a custom
/// marshal class.
pub fn parse_type(input: &str, udts: &HashSet<String>) -> Result<SchemaType, TypeParseError> {
    let mut parser = Parser {
        input,
        pos: 0,
        udts,
    };
    let ty = parser.parse()?;
    parser.skip_ws();
    if parser.pos != parser.input.len() {
        return Err(TypeParseError::Malformed(format!(
            "unexpected trailing input in '{}'",
            input
        )));
    }
    Ok(ty)
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
    udts: &'a HashSet<String>,
}

impl Parser<'_> {
    fn parse(&mut self) -> Result<SchemaType, TypeParseError> {
        self.skip_ws();
        if self.peek() == Some('\'') {
            return self.parse_quoted();
        }

        let name = self.parse_word()?;
        match name.as_str() {
            "frozen" => {
                self.expect('<')?;
                let inner = self.parse()?;
                self.expect('>')?;
                Ok(inner)
            }
            "list" => {
                self.expect('<')?;
                let inner = self.parse()?;
                self.expect('>')?;
                Ok(SchemaType::list(inner))
            }
            "set" => {
                self.expect('<')?;
                let inner = self.parse()?;
                self.expect('>')?;
                Ok(SchemaType::set(inner))
            }
            "map" => {
                self.expect('<')?;
                let key = self.parse()?;
                self.expect(',')?;
                let value = self.parse()?;
                self.expect('>')?;
                Ok(SchemaType::map(key, value))
            }
            "tuple" => {
                self.expect('<')?;
                let mut items = vec![self.parse()?];
                loop {
                    self.skip_ws();
                    if self.peek() == Some(',') {
                        self.pos += 1;
                        items.push(self.parse()?);
                    } else {
                        break;
                    }
                }
                self.expect('>')?;
                Ok(SchemaType::Tuple(items))
            }
            _ => {
                if let Some(native) = NativeType::parse(&name) {
                    Ok(SchemaType::Native(native))
                } else if self.udts.contains(&name) {
                    Ok(SchemaType::Udt(name))
                } else {
                    Err(TypeParseError::Unknown(name))
                }
            }
        }
    }

    fn parse_word(&mut self) -> Result<String, TypeParseError> {
        self.skip_ws();
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                self.pos += 1;
            } else {
                break;
            }
        }
        if self.pos == start {
            return Err(TypeParseError::Malformed(format!(
                "expected a type name in '{}'",
                self.input
            )));
        }
        Ok(self.input[start..self.pos].to_ascii_lowercase())
    }

    fn parse_quoted(&mut self) -> Result<SchemaType, TypeParseError> {
        self.pos += 1;
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c == '\'' {
                let class = self.input[start..self.pos].to_string();
                self.pos += 1;
                return Ok(SchemaType::Custom(class));
            }
            self.pos += c.len_utf8();
        }
        Err(TypeParseError::Malformed(format!(
            "unterminated quoted type in '{}'",
            self.input
        )))
    }

    fn expect(&mut self, expected: char) -> Result<(), TypeParseError> {
        self.skip_ws();
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            Ok(())
        } else {
            Err(TypeParseError::Malformed(format!(
                "expected '{}' in '{}'",
                expected, self.input
            )))
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
    }
}
