//! Placeholder substitution for command templates.
//!
//! Templates mark user-supplied text with `<token>` placeholders. A single
//! substitution value is broadcast to every placeholder of a command.

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use std::borrow::Cow;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]+>").expect("placeholder pattern is valid"));

/// Produces the display and copy text of `command`.
///
/// Without a value (or with an empty one) the command is returned unchanged,
/// placeholders included. Otherwise every `<token>` is replaced by `value`
/// verbatim.
#[must_use]
pub fn render<'a>(command: &'a str, value: Option<&str>) -> Cow<'a, str> {
    match value {
        Some(value) if !value.is_empty() => PLACEHOLDER.replace_all(command, NoExpand(value)),
        _ => Cow::Borrowed(command),
    }
}

/// Token names in order of appearance, without the angle brackets.
#[must_use]
pub fn placeholders(command: &str) -> Vec<&str> {
    PLACEHOLDER
        .find_iter(command)
        .map(|m| &command[m.start() + 1..m.end() - 1])
        .collect()
}

/// A piece of a command string, for highlighting placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    /// A full `<token>`, brackets included.
    Token(&'a str),
}

#[must_use]
pub fn segments(command: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut last = 0;
    for m in PLACEHOLDER.find_iter(command) {
        if m.start() > last {
            out.push(Segment::Text(&command[last..m.start()]));
        }
        out.push(Segment::Token(m.as_str()));
        last = m.end();
    }
    if last < command.len() {
        out.push(Segment::Text(&command[last..]));
    }
    out
}

/// The three segments shown while a command is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditView<'a> {
    pub prefix: &'a str,
    pub value: &'a str,
    pub suffix: &'a str,
}

/// Splits `command` around its first placeholder: text before the first `<`,
/// the stored value, and text after the first `>`.
#[must_use]
pub fn edit_view<'a>(command: &'a str, value: Option<&'a str>) -> EditView<'a> {
    let prefix = command.find('<').map_or(command, |i| &command[..i]);
    let suffix = command.split_once('>').map_or("", |(_, rest)| rest);
    EditView {
        prefix,
        value: value.unwrap_or_default(),
        suffix,
    }
}
