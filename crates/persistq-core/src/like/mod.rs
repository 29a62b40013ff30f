//! Module: like
//! Responsibility: escaping literal text for LIKE pattern filters.
//! Does not own: pattern matching or backend ESCAPE clause emission.
//! Boundary: `EscapedLikeText` can only be built here, so raw strings never
//! reach a LIKE filter without going through an escaper.


use std::ops::Add;

///
/// CONSTANTS
///

/// Wildcard metacharacters shared by the common SQL backends.
pub const DEFAULT_WILDCARDS: [char; 2] = ['%', '_'];

/// Escape character used when none is configured.
pub const DEFAULT_ESCAPE: char = '\\';

///
/// EscapedLikeText
///
/// Pattern text whose wildcard and escape characters have already been
/// prefixed with an escape character.
///
/// There is no public constructor from a raw string and no conversion back
/// into one. Concatenation is allowed: appending escaped text keeps both
/// halves literal, appending a raw `&str` inserts it verbatim (use this for
/// deliberate `%`/`_` wildcards). Concatenated content is never re-escaped;
/// the meaning of a composition is the caller's responsibility.
///

#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct EscapedLikeText(String);

impl EscapedLikeText {
    /// Borrow the escaped text for a backend that emits it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append a raw fragment verbatim.
    #[must_use]
    pub fn push_raw(mut self, raw: &str) -> Self {
        self.0.push_str(raw);
        self
    }
}

impl Add for EscapedLikeText {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self.0.push_str(&rhs.0);
        self
    }
}

impl Add<&str> for EscapedLikeText {
    type Output = Self;

    fn add(self, rhs: &str) -> Self::Output {
        self.push_raw(rhs)
    }
}

///
/// LikeEscaper
///
/// Reusable escaper bound to one escape character and wildcard set.
/// Built from `LikeConfig` or directly for a known backend.
///
/// `%` and `_` are always in the set; backend-specific wildcards are added
/// on top of them, never in place of them.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LikeEscaper {
    escape: char,
    wildcards: Vec<char>,
}

impl LikeEscaper {
    /// Escaper for the default wildcard set.
    #[must_use]
    pub fn new(escape: char) -> Self {
        Self::with_wildcards(escape, DEFAULT_WILDCARDS.to_vec())
    }

    /// Escaper for a backend with extra wildcard characters.
    #[must_use]
    pub fn with_wildcards(escape: char, extra: Vec<char>) -> Self {
        let mut wildcards = DEFAULT_WILDCARDS.to_vec();
        for ch in extra {
            if !wildcards.contains(&ch) {
                wildcards.push(ch);
            }
        }

        Self { escape, wildcards }
    }

    #[must_use]
    pub const fn escape_char(&self) -> char {
        self.escape
    }

    #[must_use]
    pub fn wildcards(&self) -> &[char] {
        &self.wildcards
    }

    /// Escape `pattern` so it matches only itself.
    #[must_use]
    pub fn escape(&self, pattern: &str) -> EscapedLikeText {
        EscapedLikeText(escape_with(pattern, self.escape, &self.wildcards))
    }

    /// Escape `fragment` and wrap it in `%` for a substring match.
    #[must_use]
    pub fn contains(&self, fragment: &str) -> EscapedLikeText {
        EscapedLikeText::default() + "%" + self.escape(fragment) + "%"
    }

    /// Escape `prefix` and append `%` for a prefix match.
    #[must_use]
    pub fn starts_with(&self, prefix: &str) -> EscapedLikeText {
        self.escape(prefix) + "%"
    }

    /// Escape `suffix` and prepend `%` for a suffix match.
    #[must_use]
    pub fn ends_with(&self, suffix: &str) -> EscapedLikeText {
        EscapedLikeText::default() + "%" + self.escape(suffix)
    }
}

impl Default for LikeEscaper {
    fn default() -> Self {
        Self::new(DEFAULT_ESCAPE)
    }
}

///
/// Escape `pattern` against the default wildcard set.
///
/// Every occurrence of `escape`, `%`, and `_` is prefixed with `escape`;
/// everything else passes through. If `pattern` already contains `escape`
/// as data it is escaped too; choosing an escape character that does not
/// collide with the data is the caller's responsibility.
///
#[must_use]
pub fn escape(pattern: &str, escape: char) -> EscapedLikeText {
    EscapedLikeText(escape_with(pattern, escape, &DEFAULT_WILDCARDS))
}

// Prefix every metacharacter (escape included) with the escape character.
fn escape_with(pattern: &str, escape: char, wildcards: &[char]) -> String {
    let mut out = String::with_capacity(pattern.len());

    for ch in pattern.chars() {
        if ch == escape || wildcards.contains(&ch) {
            out.push(escape);
        }
        out.push(ch);
    }

    out
}
