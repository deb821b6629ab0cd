//! Compiled pattern representation.

use quill_foundation::ValueType;
use regex::Regex;

use crate::matcher::CaptureKind;

/// One element of a compiled pattern.
#[derive(Clone, Debug)]
pub enum Segment {
    /// Lowercased literal text; a space matches flexibly (see [`crate::matcher`]).
    Literal(String),
    /// Zero-or-one occurrence of the inner sequence, "present" tried first.
    Optional(Vec<Segment>),
    /// Mutually exclusive branches, tried in declared order.
    Alternation(Vec<Vec<Segment>>),
    /// Arbitrary sub-text later parsed as an expression of the hinted type.
    Placeholder {
        /// Type hint for the captured sub-expression
        hint: ValueType,
        /// Capture slot in the match result
        slot: usize,
    },
    /// Inline regex capture, anchored at the current position.
    Regex {
        /// Compiled regex (already anchored with `^`)
        regex: Regex,
        /// Capture slot in the match result
        slot: usize,
    },
}

/// A compiled pattern: an ordered segment sequence anchored to a whole line.
#[derive(Clone, Debug)]
pub struct Pattern {
    /// The raw specification this pattern was compiled from
    pub source: String,
    /// Top-level segments
    pub segments: Vec<Segment>,
    /// Capture kind per slot, in textual order
    pub slots: Vec<CaptureKind>,
}

impl Pattern {
    /// Number of capture slots (placeholders and regex captures).
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the pattern captures nothing.
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        self.slots.is_empty()
    }

    /// Placeholder hints, in slot order (regex captures are skipped).
    pub fn hints(&self) -> impl Iterator<Item = ValueType> + '_ {
        self.slots.iter().filter_map(|kind| match kind {
            CaptureKind::Placeholder(hint) => Some(*hint),
            CaptureKind::Regex => None,
        })
    }
}
