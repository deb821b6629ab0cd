//! Pattern specification compiler.
//!
//! Turns a raw specification string into a [`Pattern`] segment tree:
//!
//! | Syntax      | Segment                                   |
//! |-------------|-------------------------------------------|
//! | `[x]`       | [`Segment::Optional`]                     |
//! | `(a\|b\|c)` | [`Segment::Alternation`]                  |
//! | `<regex>`   | [`Segment::Regex`]                        |
//! | `%hint%`    | [`Segment::Placeholder`]                  |
//! | `\c`        | the literal character `c`                 |
//! | other text  | [`Segment::Literal`], lowercased          |
//!
//! `[a|b]` is an optional alternation; a `|` at the top level makes the whole
//! pattern an alternation.

use quill_foundation::{Error, Result, ValueType};
use regex::RegexBuilder;

use crate::matcher::CaptureKind;
use crate::pattern::{Pattern, Segment};

/// Compiles pattern specifications into [`Pattern`]s.
pub struct PatternCompiler;

impl PatternCompiler {
    /// Compiles one pattern specification.
    ///
    /// # Errors
    /// Returns a pattern syntax error on unbalanced brackets, an unterminated
    /// placeholder or regex, an unknown type hint, or a malformed regex.
    pub fn compile(spec: &str) -> Result<Pattern> {
        let mut cursor = Cursor::new(spec);
        let branches = cursor.branches(None)?;
        let segments = collapse(branches);

        tracing::trace!(pattern = spec, slots = cursor.slots.len(), "compiled pattern");

        Ok(Pattern {
            source: spec.to_string(),
            segments,
            slots: cursor.slots,
        })
    }

    /// Compiles synonymous surface forms, preserving their order.
    ///
    /// # Errors
    /// Returns the first pattern syntax error encountered.
    pub fn compile_all<S: AsRef<str>>(specs: &[S]) -> Result<Vec<Pattern>> {
        specs.iter().map(|s| Self::compile(s.as_ref())).collect()
    }
}

/// Turns a branch list into a segment sequence.
fn collapse(mut branches: Vec<Vec<Segment>>) -> Vec<Segment> {
    if branches.len() == 1 {
        branches.pop().unwrap_or_default()
    } else {
        vec![Segment::Alternation(branches)]
    }
}

struct Cursor<'a> {
    source: &'a str,
    chars: Vec<char>,
    pos: usize,
    slots: Vec<CaptureKind>,
}

impl<'a> Cursor<'a> {
    fn new(source: &'a str) -> Self {
        let source = source.trim();
        Self {
            source,
            chars: source.chars().collect(),
            pos: 0,
            slots: Vec::new(),
        }
    }

    fn error(&self, message: impl Into<String>) -> Error {
        Error::pattern_syntax(self.source, self.pos, message)
    }

    /// Parses `|`-separated branches up to `close` (or end of input at top level).
    fn branches(&mut self, close: Option<char>) -> Result<Vec<Vec<Segment>>> {
        let mut branches = Vec::new();
        let mut current = Vec::new();
        let mut literal = String::new();

        loop {
            let Some(&ch) = self.chars.get(self.pos) else {
                if let Some(close) = close {
                    return Err(self.error(format!("missing closing '{close}'")));
                }
                flush(&mut literal, &mut current);
                branches.push(current);
                return Ok(branches);
            };
            self.pos += 1;

            match ch {
                '\\' => {
                    let Some(&escaped) = self.chars.get(self.pos) else {
                        return Err(self.error("dangling escape"));
                    };
                    self.pos += 1;
                    push_literal(&mut literal, escaped);
                }
                '[' => {
                    flush(&mut literal, &mut current);
                    let inner = self.branches(Some(']'))?;
                    current.push(Segment::Optional(collapse(inner)));
                }
                '(' => {
                    flush(&mut literal, &mut current);
                    let inner = self.branches(Some(')'))?;
                    current.push(Segment::Alternation(inner));
                }
                ']' | ')' => {
                    if close != Some(ch) {
                        self.pos -= 1;
                        return Err(self.error(format!("unexpected '{ch}'")));
                    }
                    flush(&mut literal, &mut current);
                    branches.push(current);
                    return Ok(branches);
                }
                '|' => {
                    flush(&mut literal, &mut current);
                    branches.push(std::mem::take(&mut current));
                }
                '%' => {
                    flush(&mut literal, &mut current);
                    current.push(self.placeholder()?);
                }
                '<' => {
                    flush(&mut literal, &mut current);
                    current.push(self.regex()?);
                }
                _ => push_literal(&mut literal, ch),
            }
        }
    }

    fn placeholder(&mut self) -> Result<Segment> {
        let start = self.pos;
        let end = self.chars[start..]
            .iter()
            .position(|&c| c == '%')
            .map(|offset| start + offset)
            .ok_or_else(|| self.error("unterminated placeholder"))?;
        let name: String = self.chars[start..end].iter().collect();
        self.pos = end + 1;

        let hint = if name.trim().is_empty() {
            ValueType::Any
        } else {
            ValueType::from_hint(&name)
                .ok_or_else(|| self.error(format!("unknown type hint '{name}'")))?
        };
        let slot = self.slots.len();
        self.slots.push(CaptureKind::Placeholder(hint));
        Ok(Segment::Placeholder { hint, slot })
    }

    fn regex(&mut self) -> Result<Segment> {
        let mut body = String::new();
        loop {
            let Some(&ch) = self.chars.get(self.pos) else {
                return Err(self.error("unterminated regex capture"));
            };
            self.pos += 1;
            match ch {
                '>' => break,
                '\\' if self.chars.get(self.pos) == Some(&'>') => {
                    self.pos += 1;
                    body.push('>');
                }
                '\\' => {
                    body.push('\\');
                    if let Some(&next) = self.chars.get(self.pos) {
                        self.pos += 1;
                        body.push(next);
                    }
                }
                _ => body.push(ch),
            }
        }

        let regex = RegexBuilder::new(&format!("^(?:{body})"))
            .case_insensitive(true)
            .build()
            .map_err(|e| self.error(format!("malformed regex: {e}")))?;
        let slot = self.slots.len();
        self.slots.push(CaptureKind::Regex);
        Ok(Segment::Regex { regex, slot })
    }
}

/// Appends a literal character, lowercased, collapsing whitespace runs.
fn push_literal(literal: &mut String, ch: char) {
    if ch.is_whitespace() {
        if !literal.ends_with(' ') {
            literal.push(' ');
        }
    } else {
        literal.extend(ch.to_lowercase());
    }
}

fn flush(literal: &mut String, segments: &mut Vec<Segment>) {
    if !literal.is_empty() {
        segments.push(Segment::Literal(std::mem::take(literal)));
    }
}
