//! The snake_case to camelCase rewrite engine.
//!
//! A line is rewritten by repeatedly locating a *prefix* followed by a
//! *trigger* (an underscore immediately followed by an ASCII letter),
//! emitting the prefix, dropping the underscore and upper-casing the letter.
//! The prefix is the shortest run that lets a trigger match right after it,
//! so an underscore that is not followed by a letter is simply carried along
//! in the prefix. Scanning resumes after the consumed letter and never looks
//! back at output already produced.
//!
//! The rewrite is purely character-level. It has no idea about string
//! literals, comments or token boundaries, so `"a_b"` inside a quoted string
//! is converted exactly like an identifier.

use crate::conversion::{CasePolicy, ConversionStats, LineConversion, TriggerMatch};

/// Finds the next prefix + trigger match at or after byte offset `from`.
///
/// Returns `None` when the rest of the line holds no underscore followed by
/// an ASCII letter. `from` must lie on a char boundary.
///
/// # Examples
/// ```
/// use camelize::conversion::find_trigger;
///
/// let m = find_trigger("foo__bar", 0).unwrap();
/// assert_eq!((m.start, m.underscore, m.end, m.letter), (0, 4, 6, 'b'));
/// assert!(find_trigger("trailing_\n", 0).is_none());
/// ```
pub fn find_trigger(line: &str, from: usize) -> Option<TriggerMatch> {
    let bytes = line.as_bytes();
    line[from..]
        .match_indices('_')
        .map(|(offset, _)| from + offset)
        .find_map(|underscore| {
            let next = *bytes.get(underscore + 1)?;
            next.is_ascii_alphabetic().then_some(TriggerMatch {
                start: from,
                underscore,
                end: underscore + 2,
                letter: next as char,
            })
        })
}

/// Converts a line with the default camelCase policy.
///
/// # Examples
/// ```
/// use camelize::conversion::convert_line;
///
/// assert_eq!(convert_line("foo_bar_baz\n"), "fooBarBaz\n");
/// assert_eq!(convert_line("foo__bar\n"), "foo_Bar\n");
/// assert_eq!(convert_line("no_1digit\n"), "no_1digit\n");
/// ```
pub fn convert_line(line: &str) -> String {
    convert_line_with(line, CasePolicy::Camel).text
}

/// Converts a line with an explicit policy and reports how many triggers fired.
pub fn convert_line_with(line: &str, policy: CasePolicy) -> LineConversion {
    let mut text = String::with_capacity(line.len());
    let mut pos = 0;
    let mut matches = 0;

    while let Some(m) = find_trigger(line, pos) {
        let prefix = &line[m.start..m.underscore];
        match policy {
            CasePolicy::Camel => text.push_str(prefix),
            CasePolicy::Pascal => push_capitalized(&mut text, prefix),
        }
        text.push(m.letter.to_ascii_uppercase());
        pos = m.end;
        matches += 1;
    }

    text.push_str(&line[pos..]);
    LineConversion { text, matches }
}

// An empty prefix has nothing to capitalize; only the trigger letter changes.
fn push_capitalized(out: &mut String, prefix: &str) {
    let mut chars = prefix.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}

/// Line-oriented converter bound to one policy
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    policy: CasePolicy,
}

impl Converter {
    pub fn new(policy: CasePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> CasePolicy {
        self.policy
    }

    /// Converts one line, terminator included
    pub fn convert_line(&self, line: &str) -> LineConversion {
        convert_line_with(line, self.policy)
    }

    /// Converts an ordered sequence of lines, preserving their order
    pub fn convert_lines<I, S>(&self, lines: I) -> (Vec<String>, ConversionStats)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stats = ConversionStats::default();
        let converted = lines
            .into_iter()
            .map(|line| {
                let result = self.convert_line(line.as_ref());
                stats.record(&result);
                result.text
            })
            .collect();
        (converted, stats)
    }

    /// Converts a whole document.
    ///
    /// The text is split after every `\n`, so `\r\n` endings and a missing
    /// final terminator come through untouched.
    pub fn convert_text(&self, text: &str) -> (String, ConversionStats) {
        let (lines, stats) = self.convert_lines(text.split_inclusive('\n'));
        (lines.concat(), stats)
    }
}
