//! Decoder for the `Label: value` block the model is asked to produce.
//!
//! Scanning is line based with one piece of state, the field currently being
//! filled. A line opening with a known label switches to that field and seeds
//! it; any other line is appended to the current field. Text before the first
//! label has nowhere to go and is dropped.

use crate::models::FactCheckResult;

pub const LABEL_VERDICT: &str = "Final Verdict";
pub const LABEL_SCORE: &str = "Score";
pub const LABEL_REASONING: &str = "Reasoning";
pub const LABEL_EVIDENCE: &str = "Evidence";
pub const LABEL_WARNINGS: &str = "Warnings";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Field {
    Verdict,
    Score,
    Reasoning,
    Evidence,
    Warnings,
}

impl Field {
    const ALL: [Field; 5] = [
        Field::Verdict,
        Field::Score,
        Field::Reasoning,
        Field::Evidence,
        Field::Warnings,
    ];

    fn label(self) -> &'static str {
        match self {
            Field::Verdict => LABEL_VERDICT,
            Field::Score => LABEL_SCORE,
            Field::Reasoning => LABEL_REASONING,
            Field::Evidence => LABEL_EVIDENCE,
            Field::Warnings => LABEL_WARNINGS,
        }
    }

    /// Splits `line` into this field's seed value if it opens with `Label:`.
    fn strip_label(self, line: &str) -> Option<&str> {
        line.strip_prefix(self.label())?.strip_prefix(':')
    }

    fn slot(self, result: &mut FactCheckResult) -> &mut String {
        match self {
            Field::Verdict => &mut result.verdict,
            Field::Score => &mut result.score,
            Field::Reasoning => &mut result.reasoning,
            Field::Evidence => &mut result.evidence,
            Field::Warnings => &mut result.warnings,
        }
    }
}

/// Line separators recognised when splitting model output; wider than
/// `str::lines`, which ignores a lone `\r` and the Unicode separators.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}'
            | '\u{2028}' | '\u{2029}'
    )
}

/// Splits on any line break, treating `\r\n` as one. A trailing break does not
/// produce an extra empty line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                chars.next();
                start = j + 1;
            }
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Decodes model output into a result record. Never fails; unmatched fields
/// stay empty.
pub fn parse(text: &str) -> FactCheckResult {
    let mut result = FactCheckResult::default();
    let mut current: Option<Field> = None;

    for raw_line in split_lines(text) {
        let line = raw_line.trim();
        let labelled = Field::ALL
            .iter()
            .find_map(|field| field.strip_label(line).map(|rest| (*field, rest)));

        match (labelled, current) {
            (Some((field, rest)), _) => {
                *field.slot(&mut result) = rest.trim().to_string();
                current = Some(field);
            }
            (None, Some(field)) => {
                let slot = field.slot(&mut result);
                slot.push(' ');
                slot.push_str(line);
            }
            (None, None) => {}
        }
    }

    result
}
