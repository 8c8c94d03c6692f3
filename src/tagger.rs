//! Regex-driven lexical tagger.
//!
//! Splits a source string into [`Fragment`]s for styled display. A
//! [`Grammar`] is an ordered list of [`PatternCategory`]s; every category
//! scans the whole source on its own, candidates are sorted by offset, and a
//! single walk over the source emits the output.
//!
//! ```text
//! main:users slay:* sus:age>18
//! ──┬──      ──┬──  ─┬──
//!   │          │     └── keyword
//!   │          └── keyword
//!   └── keyword          (everything else: one untagged fragment per char)
//! ```
//!
//! When two candidates start at the same offset, the one from the category
//! declared first wins, whatever its length. Candidates starting inside a
//! span that has already been emitted are dropped.

use regex::Regex;
use serde::Serialize;
use std::fmt;

use crate::error::{SqaullError, SqaullResult};
use crate::modes::Mode;

/// Display class of a pattern category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Keyword,
    Operator,
    Number,
    Function,
}

impl Tag {
    /// CSS class used by the docs site.
    pub fn css_class(self) -> &'static str {
        match self {
            Tag::Keyword => "code-keyword",
            Tag::Operator => "code-operator",
            Tag::Number => "code-number",
            Tag::Function => "code-function",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tag::Keyword => "keyword",
            Tag::Operator => "operator",
            Tag::Number => "number",
            Tag::Function => "function",
        };
        write!(f, "{}", name)
    }
}

/// A named class of token recognised by one regex.
///
/// The regex must have exactly one capturing group; the group's span is what
/// gets tagged, so a pattern may require context (a trailing backtick, say)
/// without tagging it.
#[derive(Debug, Clone)]
pub struct PatternCategory {
    name: String,
    tag: Tag,
    pattern: Regex,
}

impl PatternCategory {
    /// Compile a category.
    ///
    /// # Example
    ///
    /// ```
    /// use sqaull::tagger::{PatternCategory, Tag};
    ///
    /// let params = PatternCategory::new("param", Tag::Number, r"(\$\d+)").unwrap();
    /// assert_eq!(params.name(), "param");
    /// ```
    pub fn new(name: impl Into<String>, tag: Tag, pattern: &str) -> SqaullResult<Self> {
        let name = name.into();
        let pattern =
            Regex::new(pattern).map_err(|e| SqaullError::invalid_pattern(name.clone(), e))?;

        // captures_len counts the implicit whole-match group
        if pattern.captures_len() != 2 {
            return Err(SqaullError::MissingCaptureGroup(name));
        }

        Ok(Self { name, tag, pattern })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Every non-overlapping match of this category, in source order.
    fn scan<'a>(&self, source: &'a str, out: &mut Vec<Match<'a>>) {
        for caps in self.pattern.captures_iter(source) {
            let Some(group) = caps.get(1) else {
                continue;
            };
            if group.is_empty() {
                continue;
            }
            out.push(Match {
                start: group.start(),
                text: group.as_str(),
                tag: self.tag,
            });
        }
    }
}

/// A candidate produced while tagging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    /// Byte offset into the source.
    pub start: usize,
    pub text: &'a str,
    pub tag: Tag,
}

impl Match<'_> {
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// A contiguous slice of the source, tagged or plain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fragment<'a> {
    pub text: &'a str,
    /// Byte offset into the source.
    pub start: usize,
    pub tag: Option<Tag>,
}

impl<'a> Fragment<'a> {
    pub fn tagged(text: &'a str, start: usize, tag: Tag) -> Self {
        Self {
            text,
            start,
            tag: Some(tag),
        }
    }

    pub fn plain(text: &'a str, start: usize) -> Self {
        Self {
            text,
            start,
            tag: None,
        }
    }

    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    pub fn is_tagged(&self) -> bool {
        self.tag.is_some()
    }
}

/// An ordered list of pattern categories.
#[derive(Debug, Clone, Default)]
pub struct Grammar {
    categories: Vec<PatternCategory>,
}

impl Grammar {
    /// Append a category; it is scanned after every category already present.
    pub fn with(mut self, category: PatternCategory) -> Self {
        self.categories.push(category);
        self
    }

    pub fn categories(&self) -> &[PatternCategory] {
        &self.categories
    }

    /// Candidate matches from every category, sorted by start offset.
    ///
    /// The sort is stable, so candidates sharing an offset stay in category
    /// order.
    pub fn matches<'a>(&self, source: &'a str) -> Vec<Match<'a>> {
        let mut matches = Vec::new();
        for category in &self.categories {
            category.scan(source, &mut matches);
        }
        matches.sort_by_key(|m| m.start);
        matches
    }

    /// Split `source` into fragments. Never fails.
    pub fn tag<'a>(&self, source: &'a str) -> Vec<Fragment<'a>> {
        let matches = self.matches(source);
        let mut fragments = Vec::new();
        let mut pending = matches.iter().peekable();
        let mut cursor = 0;

        while cursor < source.len() {
            while pending.next_if(|m| m.start < cursor).is_some() {}

            if let Some(m) = pending.next_if(|m| m.start == cursor) {
                fragments.push(Fragment::tagged(m.text, m.start, m.tag));
                cursor = m.end();
                continue;
            }

            let width = source[cursor..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
            fragments.push(Fragment::plain(&source[cursor..cursor + width], cursor));
            cursor += width;
        }

        fragments
    }
}

/// Tag `source` with one of the built-in modes.
///
/// # Example
///
/// ```
/// use sqaull::{tag, Mode, Tag};
///
/// let fragments = tag("SELECT * FROM users", Mode::Sql);
/// assert_eq!(fragments[0].text, "SELECT");
/// assert_eq!(fragments[0].tag, Some(Tag::Keyword));
/// ```
pub fn tag(source: &str, mode: Mode) -> Vec<Fragment<'_>> {
    mode.grammar().tag(source)
}

/// Coalesce runs of adjacent untagged fragments.
pub fn merge_plain<'a>(source: &'a str, fragments: &[Fragment<'a>]) -> Vec<Fragment<'a>> {
    let mut merged: Vec<Fragment<'a>> = Vec::with_capacity(fragments.len());

    for fragment in fragments {
        match merged.last_mut() {
            Some(last) if !last.is_tagged() && !fragment.is_tagged() => {
                last.text = &source[last.start..fragment.end()];
            }
            _ => merged.push(*fragment),
        }
    }

    merged
}
