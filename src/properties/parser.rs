//! Parser for the conventional properties text format.
//!
//! Rules, matching what deployed properties files rely on:
//!
//! - Blank lines and lines whose first non-blank character is `#` or `!`
//!   are ignored.
//! - A line ending in an odd number of backslashes continues on the next
//!   line; leading whitespace of the continuation is stripped.
//! - The key ends at the first unescaped `=`, `:`, or whitespace; the
//!   separator and surrounding whitespace are skipped; the rest of the
//!   logical line is the value. `key=` and a bare `key` both yield an
//!   empty value; `=value` stores `value` under the empty-string key.
//! - Escape sequences `\t`, `\n`, `\r`, `\f`, `\\`, and `\uXXXX` are
//!   decoded in keys and values; a backslash before any other character
//!   drops the backslash.
//! - Duplicate keys: last write wins.

use std::collections::HashMap;

use thiserror::Error;

/// Errors while parsing a properties stream.
#[derive(Error, Debug)]
pub enum PropertiesError {
    #[error("malformed \\u escape {found:?} on line {line}")]
    BadUnicodeEscape { line: usize, found: String },
}

/// Parse properties text into a key-value mapping.
pub fn parse_str(input: &str) -> Result<HashMap<String, String>, PropertiesError> {
    let mut values = HashMap::new();
    let mut lines = input.lines().enumerate();

    while let Some((idx, line)) = lines.next() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
            continue;
        }

        let line_no = idx + 1;
        let mut logical = trimmed.to_string();
        while ends_with_odd_backslashes(&logical) {
            logical.pop();
            match lines.next() {
                Some((_, next)) => logical.push_str(next.trim_start()),
                None => break,
            }
        }

        let (key, value) = split_pair(&logical, line_no)?;
        values.insert(key, value);
    }

    Ok(values)
}

/// Whether the logical line so far ends in an unfinished continuation.
///
/// An even run of trailing backslashes is just escaped backslashes; only an
/// odd run marks a continuation.
fn ends_with_odd_backslashes(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Split a logical line into raw key and value, then decode escapes.
fn split_pair(line: &str, line_no: usize) -> Result<(String, String), PropertiesError> {
    let chars: Vec<char> = line.chars().collect();

    // Key ends at the first unescaped separator.
    let mut key_end = chars.len();
    let mut escaped = false;
    for (i, &c) in chars.iter().enumerate() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '=' || c == ':' || c.is_whitespace() {
            key_end = i;
            break;
        }
    }

    // Skip whitespace, at most one `=`/`:`, and whitespace again.
    let mut value_start = key_end;
    while value_start < chars.len() && chars[value_start].is_whitespace() {
        value_start += 1;
    }
    if value_start < chars.len() && (chars[value_start] == '=' || chars[value_start] == ':') {
        value_start += 1;
        while value_start < chars.len() && chars[value_start].is_whitespace() {
            value_start += 1;
        }
    }

    let key = unescape(&chars[..key_end], line_no)?;
    let value = unescape(&chars[value_start..], line_no)?;
    Ok((key, value))
}

/// Decode backslash escapes in a raw key or value.
fn unescape(chars: &[char], line_no: usize) -> Result<String, PropertiesError> {
    let mut out = String::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c != '\\' {
            out.push(c);
            i += 1;
            continue;
        }

        i += 1;
        match chars.get(i) {
            // Trailing backslash with nothing to escape: dropped.
            None => break,
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{000c}'),
            Some('u') => {
                let hex: String = chars
                    .get(i + 1..i + 5)
                    .map(|s| s.iter().collect())
                    .unwrap_or_default();
                let decoded = (hex.len() == 4)
                    .then(|| u32::from_str_radix(&hex, 16).ok())
                    .flatten()
                    .and_then(char::from_u32);
                match decoded {
                    Some(c) => out.push(c),
                    None => {
                        return Err(PropertiesError::BadUnicodeEscape {
                            line: line_no,
                            found: format!("\\u{hex}"),
                        });
                    }
                }
                i += 4;
            }
            Some(&other) => out.push(other),
        }
        i += 1;
    }

    Ok(out)
}
