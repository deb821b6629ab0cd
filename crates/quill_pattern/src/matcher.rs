//! Backtracking pattern matching.
//!
//! Matches a whole input line against a compiled [`Pattern`] by recursive
//! descent over its segments. The matcher is continuation-based: each segment
//! tries its interpretations in order and hands the remainder of the pattern
//! to the next segment, so a choice is kept only if everything after it also
//! matches.
//!
//! - Alternation: branches in declared order, first that lets the rest match wins.
//! - Optional: "present" before "absent".
//! - Placeholder: shortest non-empty capture first, extended on failure;
//!   never ends inside a double-quoted string.
//! - Regex: applied once at the current position.
//! - Literal: case-insensitive; a space matches one input space, or nothing at
//!   a word boundary (start, end, or next to a space or punctuation).
//!
//! Failed (continuation, position) pairs are remembered per match, so a
//! run of placeholders separated by a repeated literal stays polynomial in
//! the line length instead of retrying every split.
//!
//! Input is normalised first: trimmed, with whitespace runs outside double
//! quotes collapsed to one space.

use std::collections::HashSet;

use quill_foundation::ValueType;

use crate::pattern::{Pattern, Segment};

/// What kind of segment produced a capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptureKind {
    /// A `%hint%` placeholder.
    Placeholder(ValueType),
    /// An inline `<regex>` capture.
    Regex,
}

/// A captured substring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Capture {
    /// The captured text (trimmed for placeholders)
    pub text: String,
    /// The capturing segment's kind
    pub kind: CaptureKind,
}

/// A successful match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match {
    /// Which of the candidate patterns matched
    pub pattern_index: usize,
    /// One entry per capture slot; `None` where an optional group or an
    /// untaken alternation branch skipped the capture
    pub captures: Vec<Option<Capture>>,
}

impl Match {
    /// Returns the capture in a slot, if present.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&Capture> {
        self.captures.get(slot).and_then(Option::as_ref)
    }

    /// Returns the captured text in a slot, if present.
    #[must_use]
    pub fn text(&self, slot: usize) -> Option<&str> {
        self.get(slot).map(|c| c.text.as_str())
    }

    /// Iterates over the captures that are present, in slot order.
    pub fn present(&self) -> impl Iterator<Item = &Capture> {
        self.captures.iter().flatten()
    }
}

/// Matches lines against compiled patterns.
pub struct PatternMatcher;

impl PatternMatcher {
    /// Matches a full line against one pattern.
    ///
    /// Returns `None` unless the pattern consumes the entire line.
    #[must_use]
    pub fn matches(pattern: &Pattern, line: &str) -> Option<Match> {
        let chars: Vec<char> = normalize(line).chars().collect();
        Self::match_chars(pattern, &chars, 0)
    }

    /// Tries several surface forms in order; the first match wins.
    #[must_use]
    pub fn first_match(patterns: &[Pattern], line: &str) -> Option<Match> {
        let chars: Vec<char> = normalize(line).chars().collect();
        patterns.iter().enumerate().find_map(|(index, pattern)| {
            let found = Self::match_chars(pattern, &chars, index);
            tracing::trace!(pattern = %pattern.source, line, matched = found.is_some());
            found
        })
    }

    fn match_chars(pattern: &Pattern, input: &[char], pattern_index: usize) -> Option<Match> {
        let mut state = MatchState {
            input,
            slots: vec![None; pattern.slot_count()],
            kinds: &pattern.slots,
            failed: HashSet::new(),
        };
        let root = Continuation {
            segments: &pattern.segments,
            next: None,
        };
        state.run(&root, 0).then(|| Match {
            pattern_index,
            captures: state.slots,
        })
    }
}

/// The rest of the pattern still to be matched.
struct Continuation<'a> {
    segments: &'a [Segment],
    next: Option<&'a Continuation<'a>>,
}

impl Continuation<'_> {
    /// Identifies the continuation for memoisation.
    ///
    /// A non-empty segment slice is always a suffix of exactly one sequence in
    /// the pattern tree, and that sequence's tail continuation is fixed by
    /// where it sits in the tree, so the slice address names the whole chain.
    fn key(&self) -> Option<usize> {
        (!self.segments.is_empty()).then(|| self.segments.as_ptr() as usize)
    }
}

struct MatchState<'i> {
    input: &'i [char],
    slots: Vec<Option<Capture>>,
    kinds: &'i [CaptureKind],
    /// (continuation, position) pairs known not to match
    failed: HashSet<(usize, usize)>,
}

impl MatchState<'_> {
    fn run(&mut self, cont: &Continuation<'_>, pos: usize) -> bool {
        let Some((segment, rest)) = cont.segments.split_first() else {
            return match cont.next {
                Some(next) => self.run(next, pos),
                None => pos == self.input.len(),
            };
        };
        let key = cont.key().map(|at| (at, pos));
        if key.is_some_and(|key| self.failed.contains(&key)) {
            return false;
        }

        let rest = Continuation {
            segments: rest,
            next: cont.next,
        };
        let matched = self.step(segment, &rest, pos);
        if !matched {
            if let Some(key) = key {
                self.failed.insert(key);
            }
        }
        matched
    }

    fn step(&mut self, segment: &Segment, rest: &Continuation<'_>, pos: usize) -> bool {
        match segment {
            Segment::Literal(text) => match self.literal(text, pos) {
                Some(end) => self.run(rest, end),
                None => false,
            },
            Segment::Optional(inner) => {
                let present = Continuation {
                    segments: inner,
                    next: Some(rest),
                };
                self.run(&present, pos) || self.run(rest, pos)
            }
            Segment::Alternation(branches) => branches.iter().any(|branch| {
                let taken = Continuation {
                    segments: branch,
                    next: Some(rest),
                };
                self.run(&taken, pos)
            }),
            Segment::Placeholder { slot, .. } => {
                if self.placeholder(*slot, rest, pos) {
                    return true;
                }
                self.slots[*slot] = None;
                false
            }
            Segment::Regex { regex, slot } => {
                let remaining: String = self.input[pos..].iter().collect();
                let Some(found) = regex.find(&remaining) else {
                    return false;
                };
                let text = &remaining[..found.end()];
                let consumed = text.chars().count();
                self.capture(*slot, text.to_string());
                if self.run(rest, pos + consumed) {
                    return true;
                }
                self.slots[*slot] = None;
                false
            }
        }
    }

    /// Tries every end for a placeholder starting at `pos`, shortest first.
    fn placeholder(&mut self, slot: usize, rest: &Continuation<'_>, pos: usize) -> bool {
        let input = self.input;
        let Some(start) = (pos..input.len()).find(|&at| !input[at].is_whitespace()) else {
            return false;
        };
        let mut quotes = 0;
        let mut last = start;
        for end in start + 1..=input.len() {
            let ch = input[end - 1];
            if ch == '"' {
                quotes += 1;
            }
            if !ch.is_whitespace() {
                last = end - 1;
            }
            if quotes % 2 == 1 || !self.may_start(rest, end) {
                continue;
            }
            self.capture(slot, input[start..=last].iter().collect());
            if self.run(rest, end) {
                return true;
            }
        }
        false
    }

    /// Cheap check that a literal heading `cont` can begin at `pos`.
    fn may_start(&self, cont: &Continuation<'_>, pos: usize) -> bool {
        let Some(Segment::Literal(text)) = cont.segments.first() else {
            return true;
        };
        match text.chars().next() {
            Some(' ') | None => true,
            Some(expected) => self
                .input
                .get(pos)
                .is_some_and(|&actual| chars_eq(actual, expected)),
        }
    }

    fn capture(&mut self, slot: usize, text: String) {
        self.slots[slot] = Some(Capture {
            text,
            kind: self.kinds[slot],
        });
    }

    /// Matches literal text at `pos`, returning the position after it.
    fn literal(&self, text: &str, pos: usize) -> Option<usize> {
        let input = self.input;
        let mut at = pos;
        for expected in text.chars() {
            if expected == ' ' {
                if input.get(at) == Some(&' ') {
                    at += 1;
                } else if !(at == 0
                    || at == input.len()
                    || !is_word(input[at - 1])
                    || !is_word(input[at]))
                {
                    return None;
                }
            } else {
                let actual = *input.get(at)?;
                if !chars_eq(actual, expected) {
                    return None;
                }
                at += 1;
            }
        }
        Some(at)
    }
}

fn is_word(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

fn chars_eq(actual: char, expected: char) -> bool {
    actual == expected || actual.to_lowercase().eq(expected.to_lowercase())
}

/// Normalises a script line: trims it and collapses whitespace runs outside
/// double quotes to a single space.
#[must_use]
pub fn normalize(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut in_quotes = false;
    let mut pending_space = false;

    for ch in line.trim().chars() {
        if ch == '"' {
            in_quotes = !in_quotes;
        }
        if ch.is_whitespace() && !in_quotes {
            pending_space = true;
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.push(ch);
    }
    out
}
