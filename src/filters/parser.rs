//! Facet filter expression parser.
//!
//! Parses a compact textual filter into [`FacetSelections`], so facet filters can be
//! given on the command line in one argument.
//!
//! # Syntax
//!
//! ```text
//! filter_expr := field_filter*
//! field_filter := field_name:value | field_name:"quoted value"
//! field_name := category | tag | author (singular or plural, case-insensitive)
//! ```
//!
//! There are no operator keywords: values in the same group are OR'd and different
//! groups are AND'd, the same way facet checkboxes combine.
//!
//! # Examples
//!
//! ```rust
//! # use codelab_catalog::filters::parser::parse_filter;
//! # use codelab_catalog::models::FacetGroup;
//! // Single filter
//! let selections = parse_filter("category:Web").unwrap();
//!
//! // Same group → either value matches
//! let selections = parse_filter("tag:go tag:rust").unwrap();
//!
//! // Quoted values for spaces
//! let selections = parse_filter("author:\"Grace Hopper\" category:Cloud").unwrap();
//! assert!(selections.is_selected(FacetGroup::Authors, "Grace Hopper"));
//! ```

use anyhow::{Context, Result, anyhow};

use super::selection::FacetSelections;
use crate::models::FacetGroup;

/// field:value or field:"quoted value"
#[derive(Debug, Clone, PartialEq, Eq)]
struct Token {
    field: String,
    value: String,
}

/// Tokenize filter input into field:value pairs
fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&ch) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
            continue;
        }

        let word = read_word(&mut chars);

        if matches!(word.to_uppercase().as_str(), "AND" | "OR") {
            return Err(anyhow!(
                "Operator '{}' is not supported (values in a group are OR'd, groups are AND'd)",
                word
            ));
        }

        let Some(colon_pos) = word.find(':') else {
            return Err(anyhow!("Invalid token: '{}' (expected field:value)", word));
        };

        let field = word[..colon_pos].to_string();
        let mut value = word[colon_pos + 1..].to_string();

        if value.starts_with('"') {
            value = read_quoted_value(&mut chars, &value)?;
        }

        if field.is_empty() || value.is_empty() {
            return Err(anyhow!("Invalid field:value format: {}", word));
        }

        tokens.push(Token { field, value });
    }

    Ok(tokens)
}

/// Read a word (until whitespace or end)
fn read_word(chars: &mut std::iter::Peekable<std::str::Chars>) -> String {
    let mut word = String::new();

    while let Some(&ch) = chars.peek() {
        if ch.is_whitespace() {
            break;
        }
        word.push(ch);
        chars.next();
    }

    word
}

/// Read a quoted value; `initial` is the part of the word after the colon, opening quote included
fn read_quoted_value(
    chars: &mut std::iter::Peekable<std::str::Chars>,
    initial: &str,
) -> Result<String> {
    let mut value = initial[1..].to_string();

    if let Some(quote_pos) = value.find('"') {
        return Ok(value[..quote_pos].to_string());
    }

    for ch in chars.by_ref() {
        if ch == '"' {
            return Ok(value);
        }
        value.push(ch);
    }

    Err(anyhow!("Unterminated quoted string"))
}

/// Parse a filter string into facet selections
///
/// Examples:
/// - "category:Web" → one category selected
/// - "tag:go tag:rust" → two tags, either matches
/// - "category:Web author:Ada" → both must match
/// - "author:\"Grace Hopper\"" → quoted value containing spaces
pub fn parse_filter(input: &str) -> Result<FacetSelections> {
    let mut selections = FacetSelections::new();

    if input.trim().is_empty() {
        return Ok(selections);
    }

    let tokens = tokenize(input).context("Failed to tokenize filter")?;

    for Token { field, value } in tokens {
        let group: FacetGroup = field.parse()?;
        selections.select(group, value);
    }

    Ok(selections)
}
