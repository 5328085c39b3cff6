use std::fmt;

/// Canonical form of a raw claim.
///
/// Surrounding whitespace is trimmed, whitespace runs collapse to one space,
/// curly double/single quotes become straight ones and trailing `?` marks are
/// dropped. Total and idempotent.
pub fn normalize(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    let straightened: String = collapsed
        .chars()
        .map(|c| match c {
            '\u{201C}' | '\u{201D}' => '"',
            '\u{2018}' | '\u{2019}' => '\'',
            other => other,
        })
        .collect();
    // "true ?" must not leave a trailing space behind
    straightened
        .trim_end_matches(|c: char| c == '?' || c.is_whitespace())
        .to_string()
}

/// A claim that has been through [`normalize`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Claim {
    pub statement: String,
}

impl Claim {
    pub fn new(raw: &str) -> Self {
        Self {
            statement: normalize(raw),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.statement
    }
}

impl fmt::Display for Claim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.statement)
    }
}
