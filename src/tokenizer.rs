//! Tokenizer for command-string parsing.
//!
//! Parses the decoded command string that drives dispatch. Supports:
//! - Quoted string literals (single and double quotes)
//! - Flag parameters (`-name` or `-name="value"`)
//! - Bare (whitespace-delimited) words
//!
//! The grammar is a single alternation with leftmost-match semantics: at the
//! first position where any alternative matches, a string literal wins over a
//! flag, and a flag wins over a bare word. Escaping inside literals is
//! deliberately narrow: a backslash escapes only the matching delimiter, and a
//! backslash before any other character is two ordinary body characters.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// The term grammar, in priority order: string literal, flag parameter, word.
///
/// Capture groups: 1 single-quoted body, 2 double-quoted body, 3 flag name,
/// 4/5 single-/double-quoted flag value, 6 bare word. Literal bodies are one
/// or more characters (lazy), so an empty pair of quotes is not a literal and
/// falls through to the word rule.
static TERM_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    const STRING_LITERAL: &str = r#"'((?:\\'|.)+?)'|"((?:\\"|.)+?)""#;
    const WORD: &str = r"(\S+)";
    let parameter = format!(r"-(\w+)(?:=(?:{STRING_LITERAL}))?");
    let term = format!("{STRING_LITERAL}|{parameter}|{WORD}");
    Regex::new(&term).expect("term grammar must compile")
});

/// A single term recognized in a command string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// A quoted string literal, with escapes of its delimiter resolved.
    Literal(String),
    /// A flag parameter (`-name` or `-name="value"`).
    Flag {
        /// The flag name (without the leading dash).
        name: String,
        /// The flag value, present only when given as a quoted literal.
        value: Option<String>,
    },
    /// A plain word (unquoted, whitespace-delimited).
    Word(String),
}

impl Term {
    /// Returns the term as a word if it is one.
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Term::Word(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the literal contents if this is a string literal.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Term::Literal(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the name and optional value if this is a flag.
    pub fn as_flag(&self) -> Option<(&str, Option<&str>)> {
        match self {
            Term::Flag { name, value } => Some((name, value.as_deref())),
            _ => None,
        }
    }

    /// Returns true if this is a flag with the given name.
    pub fn is_flag(&self, name: &str) -> bool {
        matches!(self, Term::Flag { name: n, .. } if n == name)
    }

    /// The command name this term denotes when it leads a command string:
    /// a word's raw text, a flag's name, or a literal's resolved contents.
    pub fn command_name(&self) -> &str {
        match self {
            Term::Literal(s) => s,
            Term::Flag { name, .. } => name,
            Term::Word(s) => s,
        }
    }
}

/// Extracts the first term of a command string.
///
/// Only the first term is extracted; the dispatcher treats it as the command
/// name and passes the untouched command string on to the entry point. Use
/// [`terms`] when an entry point wants the full argument sequence.
///
/// Returns `None` when no term is found (empty or whitespace-only input);
/// callers treat that as an invalid command, not as a default.
pub fn first_term(input: &str) -> Option<Term> {
    TERM_PATTERN.captures(input).map(|caps| term_from_captures(&caps))
}

/// Returns an iterator over all terms of a command string, in order.
///
/// Repeated leftmost matching of the same grammar as [`first_term`]. The
/// dispatcher never consumes more than the first term; this exists for entry
/// points that parse their own arguments out of the raw command string.
pub fn terms(input: &str) -> Terms<'_> {
    Terms {
        inner: TERM_PATTERN.captures_iter(input),
    }
}

/// Iterator over the terms of a command string. Created by [`terms`].
pub struct Terms<'a> {
    inner: regex::CaptureMatches<'static, 'a>,
}

impl<'a> Iterator for Terms<'a> {
    type Item = Term;

    fn next(&mut self) -> Option<Term> {
        self.inner.next().map(|caps| term_from_captures(&caps))
    }
}

fn term_from_captures(caps: &Captures<'_>) -> Term {
    if let Some(body) = caps.get(1) {
        Term::Literal(body.as_str().replace("\\'", "'"))
    } else if let Some(body) = caps.get(2) {
        Term::Literal(body.as_str().replace("\\\"", "\""))
    } else if let Some(name) = caps.get(3) {
        let value = caps
            .get(4)
            .map(|m| m.as_str().replace("\\'", "'"))
            .or_else(|| caps.get(5).map(|m| m.as_str().replace("\\\"", "\"")));
        Term::Flag {
            name: name.as_str().to_string(),
            value,
        }
    } else {
        // The alternation is exhaustive; group 6 is the only one left.
        Term::Word(caps[6].to_string())
    }
}
