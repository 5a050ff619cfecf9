//! Description shortening.

/// Suffix appended to every truncated description.
pub const ELLIPSIS: &str = "...";

/// Word limit for summary cards.
pub const CARD_WORD_LIMIT: usize = 15;

/// Word limit for the full detail layout.
pub const DETAIL_WORD_LIMIT: usize = 30;

/// Character limit for the compact detail layout.
pub const DETAIL_CHAR_LIMIT: usize = 200;

/// How a description is shortened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Truncation {
    /// Keep the first `n` space-separated words.
    Words(usize),
    /// Keep the first `n` characters.
    Chars(usize),
}

impl Truncation {
    /// Truncation used by summary cards.
    pub const fn card() -> Self {
        Truncation::Words(CARD_WORD_LIMIT)
    }

    /// Applies this truncation to `text`.
    pub fn apply(&self, text: &str) -> String {
        match *self {
            Truncation::Words(limit) => truncate_words(text, limit),
            Truncation::Chars(limit) => truncate_chars(text, limit),
        }
    }
}

/// Keeps the first `limit` words of `text` and appends [`ELLIPSIS`].
///
/// Words are the pieces between single spaces, so runs of spaces produce
/// empty words and count toward the limit. The suffix is appended even
/// when nothing was cut.
///
/// # Examples
///
/// ```
/// use showcase_core::text::truncate_words;
///
/// assert_eq!(truncate_words("one two three", 2), "one two...");
/// assert_eq!(truncate_words("short", 15), "short...");
/// ```
pub fn truncate_words(text: &str, limit: usize) -> String {
    let kept: Vec<&str> = text.split(' ').take(limit).collect();
    let mut out = kept.join(" ");
    out.push_str(ELLIPSIS);
    out
}

/// Keeps the first `limit` characters of `text` and appends [`ELLIPSIS`].
pub fn truncate_chars(text: &str, limit: usize) -> String {
    let mut out: String = text.chars().take(limit).collect();
    out.push_str(ELLIPSIS);
    out
}
