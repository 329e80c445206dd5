//! Locale-style string ordering for titles and facet values.
//!
//! Strings are compared in three passes, like a root-locale collator:
//! 1. base characters, ignoring case and accents (`"alpha" < "Bravo"`); whitespace sorts
//!    before punctuation, punctuation before digits, digits before letters
//! 2. accents (`"e" < "é"`)
//! 3. case, lowercase first (`"a" < "A"`)
//!
//! A final code-point comparison keeps the order total, so two strings only compare
//! equal when they are identical.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Compare two strings the way a catalog reader expects them ordered
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(primary_key(b))
        .then_with(|| secondary_key(a).cmp(secondary_key(b)))
        .then_with(|| tertiary_key(a).cmp(tertiary_key(b)))
        .then_with(|| a.cmp(b))
}

/// Sort strings in place by [`locale_cmp`] (stable)
pub fn sort_locale<S: AsRef<str>>(values: &mut [S]) {
    values.sort_by(|a, b| locale_cmp(a.as_ref(), b.as_ref()));
}

fn primary_key(s: &str) -> impl Iterator<Item = (CharClass, char)> + '_ {
    s.nfd().filter(|c| !is_combining_mark(*c)).flat_map(char::to_lowercase).map(classify)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Whitespace,
    Punctuation,
    Digit,
    Other,
}

fn classify(c: char) -> (CharClass, char) {
    let class = if c.is_whitespace() {
        CharClass::Whitespace
    } else if c.is_ascii_punctuation() {
        CharClass::Punctuation
    } else if c.is_numeric() {
        CharClass::Digit
    } else {
        CharClass::Other
    };
    (class, c)
}

fn secondary_key(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn tertiary_key(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.nfd().filter(|c| !is_combining_mark(*c)).map(char::is_uppercase)
}
