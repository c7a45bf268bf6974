//! Strict parser for JavaScript-flavored array/object literals.
//!
//! The original data file is TypeScript, so the extracted literals carry
//! unquoted identifier keys, single-quoted strings, trailing commas, and
//! embedded comments. Rather than evaluating the text as code, this is a
//! recursive-descent parser into [`serde_json::Value`] that accepts exactly
//! that literal grammar and nothing else. Untrusted text is never executed.
//!
//! A wall-clock deadline bounds adversarial input; exceeding it fails with
//! a parse error instead of hanging the invocation.

use std::time::{Duration, Instant};

use serde_json::{Map, Number, Value};

use crate::error::{Result, SelectorError};

/// Wall-clock budget for parsing one extracted literal.
const LITERAL_TIMEOUT: Duration = Duration::from_millis(1000);

/// Nesting bound; deeper input is rejected rather than recursed into.
const MAX_DEPTH: usize = 128;

/// Parse one extracted literal into a JSON value.
pub fn parse(literal: &str) -> Result<Value> {
    parse_with_deadline(literal, Instant::now() + LITERAL_TIMEOUT)
}

/// Parse with an explicit deadline (exposed for tests).
pub fn parse_with_deadline(literal: &str, deadline: Instant) -> Result<Value> {
    let mut parser = Parser {
        chars: literal.chars().collect(),
        pos: 0,
        deadline,
    };
    parser.skip_trivia()?;
    let value = parser.parse_value(0)?;
    parser.skip_trivia()?;
    if parser.pos < parser.chars.len() {
        return Err(parser.error("trailing characters after literal"));
    }
    Ok(value)
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
    deadline: Instant,
}

impl Parser {
    fn error(&self, message: &str) -> SelectorError {
        SelectorError::Parse(format!("{} at offset {}", message, self.pos))
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek();
        if ch.is_some() {
            self.pos += 1;
        }
        ch
    }

    fn eat(&mut self, expected: char) -> Result<()> {
        match self.bump() {
            Some(ch) if ch == expected => Ok(()),
            _ => Err(self.error(&format!("expected '{expected}'"))),
        }
    }

    /// Skip whitespace and both comment styles; doubles as the deadline
    /// checkpoint since it runs between every token.
    fn skip_trivia(&mut self) -> Result<()> {
        if Instant::now() > self.deadline {
            return Err(SelectorError::Parse(
                "literal evaluation exceeded 1000ms deadline".into(),
            ));
        }
        loop {
            match self.peek() {
                Some(ch) if ch.is_whitespace() => {
                    self.pos += 1;
                }
                Some('/') if self.chars.get(self.pos + 1) == Some(&'/') => {
                    while let Some(ch) = self.bump() {
                        if ch == '\n' {
                            break;
                        }
                    }
                }
                Some('/') if self.chars.get(self.pos + 1) == Some(&'*') => {
                    self.pos += 2;
                    loop {
                        match self.bump() {
                            Some('*') if self.peek() == Some('/') => {
                                self.pos += 1;
                                break;
                            }
                            Some(_) => {}
                            None => return Err(self.error("unterminated block comment")),
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn parse_value(&mut self, depth: usize) -> Result<Value> {
        if depth > MAX_DEPTH {
            return Err(self.error("literal nesting too deep"));
        }
        match self.peek() {
            Some('[') => self.parse_array(depth),
            Some('{') => self.parse_object(depth),
            Some('\'') | Some('"') | Some('`') => self.parse_string().map(Value::String),
            Some(ch) if ch == '-' || ch.is_ascii_digit() => self.parse_number(),
            Some(ch) if ch.is_alphabetic() => self.parse_keyword(),
            _ => Err(self.error("expected a value")),
        }
    }

    fn parse_array(&mut self, depth: usize) -> Result<Value> {
        self.eat('[')?;
        let mut items = Vec::new();
        loop {
            self.skip_trivia()?;
            if self.peek() == Some(']') {
                self.pos += 1;
                return Ok(Value::Array(items));
            }
            items.push(self.parse_value(depth + 1)?);
            self.skip_trivia()?;
            match self.peek() {
                Some(',') => {
                    self.pos += 1;
                }
                Some(']') => {}
                _ => return Err(self.error("expected ',' or ']' in array")),
            }
        }
    }

    fn parse_object(&mut self, depth: usize) -> Result<Value> {
        self.eat('{')?;
        let mut map = Map::new();
        loop {
            self.skip_trivia()?;
            if self.peek() == Some('}') {
                self.pos += 1;
                return Ok(Value::Object(map));
            }
            let key = self.parse_key()?;
            self.skip_trivia()?;
            self.eat(':')?;
            self.skip_trivia()?;
            let value = self.parse_value(depth + 1)?;
            map.insert(key, value);
            self.skip_trivia()?;
            match self.peek() {
                Some(',') => {
                    self.pos += 1;
                }
                Some('}') => {}
                _ => return Err(self.error("expected ',' or '}' in object")),
            }
        }
    }

    /// Object keys: quoted strings or bare identifiers (`$`, `_`, alphanumeric).
    fn parse_key(&mut self) -> Result<String> {
        match self.peek() {
            Some('\'') | Some('"') | Some('`') => self.parse_string(),
            Some(ch) if ch == '$' || ch == '_' || ch.is_alphabetic() => {
                let start = self.pos;
                while let Some(ch) = self.peek() {
                    if ch == '$' || ch == '_' || ch.is_alphanumeric() {
                        self.pos += 1;
                    } else {
                        break;
                    }
                }
                Ok(self.chars[start..self.pos].iter().collect())
            }
            _ => Err(self.error("expected an object key")),
        }
    }

    fn parse_string(&mut self) -> Result<String> {
        let quote = self
            .bump()
            .ok_or_else(|| self.error("expected a string"))?;
        let mut out = String::new();
        loop {
            match self.bump() {
                None => return Err(self.error("unterminated string")),
                Some(ch) if ch == quote => return Ok(out),
                Some('\\') => match self.bump() {
                    Some('n') => out.push('\n'),
                    Some('r') => out.push('\r'),
                    Some('t') => out.push('\t'),
                    Some('0') => out.push('\0'),
                    Some('u') => {
                        let mut code = 0u32;
                        for _ in 0..4 {
                            let digit = self
                                .bump()
                                .and_then(|c| c.to_digit(16))
                                .ok_or_else(|| self.error("invalid \\u escape"))?;
                            code = code * 16 + digit;
                        }
                        out.push(
                            char::from_u32(code)
                                .ok_or_else(|| self.error("invalid \\u escape"))?,
                        );
                    }
                    Some(ch @ ('\\' | '\'' | '"' | '`' | '/')) => out.push(ch),
                    _ => return Err(self.error("unsupported escape sequence")),
                },
                Some(ch) => out.push(ch),
            }
        }
    }

    fn parse_number(&mut self) -> Result<Value> {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.pos += 1;
        }
        let mut is_float = false;
        while let Some(ch) = self.peek() {
            match ch {
                '0'..='9' => self.pos += 1,
                '.' | 'e' | 'E' | '+' | '-' if self.pos > start => {
                    is_float = true;
                    self.pos += 1;
                }
                _ => break,
            }
        }
        let text: String = self.chars[start..self.pos].iter().collect();
        if is_float {
            let parsed: f64 = text
                .parse()
                .map_err(|_| self.error("malformed number"))?;
            Number::from_f64(parsed)
                .map(Value::Number)
                .ok_or_else(|| self.error("malformed number"))
        } else {
            let parsed: i64 = text
                .parse()
                .map_err(|_| self.error("malformed number"))?;
            Ok(Value::Number(parsed.into()))
        }
    }

    fn parse_keyword(&mut self) -> Result<Value> {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if ch.is_alphanumeric() {
                self.pos += 1;
            } else {
                break;
            }
        }
        let word: String = self.chars[start..self.pos].iter().collect();
        match word.as_str() {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            "null" | "undefined" => Ok(Value::Null),
            _ => Err(SelectorError::Parse(format!(
                "unexpected identifier '{word}' at offset {start}"
            ))),
        }
    }
}
