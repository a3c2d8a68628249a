//! Types for reading properties files
//!

use std::io::Read;

use bon::Builder;
use tracing::{debug, instrument};

use crate::error::{Error, Result};
use crate::types::PropertyTable;

/// How truncated `\uXXXX` escapes and unpaired surrogates are handled.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum EscapePolicy {
    /// Accept one to four hex digits, pass a bare `\u` through as a literal `u` and replace
    /// unpaired surrogates with U+FFFD. This is what the historical Mozilla parser does.
    #[default]
    Lenient,

    /// Require exactly four hex digits and well-paired surrogates, failing with
    /// [`Error::MalformedEscape`] or [`Error::UTF16Error`] otherwise.
    Strict,
}

/// Options for how a properties file should be read
#[derive(Debug, Clone, Copy, Builder)]
pub struct PropertiesReaderOptions {
    /// The policy to apply to malformed escape sequences
    #[builder(default)]
    pub escape_policy: EscapePolicy,
}

impl Default for PropertiesReaderOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Properties file reader
///
/// ```no_run
/// use std::io::prelude::*;
///
/// fn list_entries(reader: impl Read) -> l10n_properties::error::Result<()> {
///     let properties = l10n_properties::PropertiesReader::new(reader)?;
///
///     for (key, value) in properties.entries() {
///         println!("{}: {}", key, value);
///     }
///
///     Ok(())
/// }
/// ```
pub struct PropertiesReader {
    entries: PropertyTable,
}

impl PropertiesReader {
    /// Read a properties file and parse its entries.
    pub fn new<R: Read>(reader: R) -> Result<PropertiesReader> {
        Self::with_options(reader, PropertiesReaderOptions::default())
    }

    /// Read a properties file with explicit [`PropertiesReaderOptions`].
    #[instrument(skip(reader), err)]
    pub fn with_options<R: Read>(
        mut reader: R,
        options: PropertiesReaderOptions,
    ) -> Result<PropertiesReader> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        Self::from_str_with_options(&input, options)
    }

    /// Parse entries from UTF-8 text already in memory.
    pub fn from_str(input: &str) -> Result<PropertiesReader> {
        Self::from_str_with_options(input, PropertiesReaderOptions::default())
    }

    /// Parse entries from UTF-8 text with explicit [`PropertiesReaderOptions`].
    pub fn from_str_with_options(
        input: &str,
        options: PropertiesReaderOptions,
    ) -> Result<PropertiesReader> {
        Ok(PropertiesReader {
            entries: parse(input, options)?,
        })
    }

    /// Number of entries contained in this file.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether this file contains no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Try to get a value by its key
    pub fn get(&self, key: impl AsRef<str>) -> Option<&str> {
        self.entries.get(key.as_ref()).map(String::as_str)
    }

    /// Iterate over the entries in file order. Each call starts a fresh pass.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.entries()
    }

    /// Get a reference to the parsed table
    pub fn table(&self) -> &PropertyTable {
        &self.entries
    }

    /// Consume the reader, returning the parsed table
    pub fn into_table(self) -> PropertyTable {
        self.entries
    }
}

/// Line-oriented state machine over the physical lines of `input`.
///
/// Physical lines are split on `\n` with a trailing `\r` stripped. A logical line accumulates
/// physical lines for as long as it ends in an odd number of backslashes; the comment check
/// applies only while the accumulator is empty.
fn parse(input: &str, options: PropertiesReaderOptions) -> Result<PropertyTable> {
    let mut table = PropertyTable::default();
    let mut logical = String::new();
    let mut logical_line = 1usize;

    for (idx, raw) in input.split('\n').enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);

        if logical.is_empty() {
            let lead = line.trim_start();
            if lead.starts_with('#') || lead.starts_with('!') {
                continue;
            }
            logical_line = idx + 1;
            logical.push_str(line);
        } else {
            logical.push_str(line.trim_start());
        }

        if trailing_backslashes(&logical) % 2 == 1 {
            // continued line, drop the continuation backslash and keep accumulating
            logical.pop();
            continue;
        }

        if let Some((key, value)) = decode_line(&logical, logical_line, options.escape_policy)? {
            table.insert(key, value);
        }
        logical.clear();
    }

    // a continuation on the very last physical line leaves the accumulator non-empty
    if !logical.is_empty() {
        if let Some((key, value)) = decode_line(&logical, logical_line, options.escape_policy)? {
            table.insert(key, value);
        }
    }

    Ok(table)
}

fn trailing_backslashes(s: &str) -> usize {
    s.chars().rev().take_while(|c| *c == '\\').count()
}

/// Split a complete logical line into a decoded entry, or `None` for blank lines and lines
/// without a usable key.
fn decode_line(
    line: &str,
    line_number: usize,
    policy: EscapePolicy,
) -> Result<Option<(String, String)>> {
    let trimmed = line.trim_start();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let (raw_key, raw_value) = match find_separator(trimmed) {
        None => (trimmed, ""),
        Some((at, separator)) => {
            let key = &trimmed[..at];
            let mut rest = &trimmed[at..];
            if separator == '=' || separator == ':' {
                rest = rest[1..].trim_start();
            } else {
                rest = rest.trim_start();
                if let Some(stripped) = rest.strip_prefix(['=', ':']) {
                    rest = stripped.trim_start();
                }
            }
            (key, trim_end_unescaped(rest))
        }
    };

    if raw_key.is_empty() {
        debug!(line_number, "skipping line with empty key");
        return Ok(None);
    }

    let key = decode_segment(raw_key, line_number, policy)?;
    if key.is_empty() {
        debug!(line_number, "skipping line whose key decodes to nothing");
        return Ok(None);
    }
    let value = decode_segment(raw_value, line_number, policy)?;

    Ok(Some((key, value)))
}

/// Find the first unescaped `=`, `:` or whitespace character.
fn find_separator(line: &str) -> Option<(usize, char)> {
    let mut escaped = false;
    for (idx, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        if c == '\\' {
            escaped = true;
            continue;
        }
        if c == '=' || c == ':' || c.is_whitespace() {
            return Some((idx, c));
        }
    }
    None
}

/// Trim trailing whitespace, keeping whitespace that is preceded by an escape.
fn trim_end_unescaped(s: &str) -> &str {
    let mut end = 0;
    let mut escaped = false;
    for (idx, c) in s.char_indices() {
        if escaped {
            escaped = false;
            end = idx + c.len_utf8();
            continue;
        }
        if c == '\\' {
            escaped = true;
            end = idx + 1;
            continue;
        }
        if !c.is_whitespace() {
            end = idx + c.len_utf8();
        }
    }
    &s[..end]
}

/// Decode the escape sequences of a key or raw value segment.
///
/// The segment is expanded into UTF-16 code units so that adjacent surrogate escapes written as
/// two `\uXXXX` sequences combine into one supplementary character, the way the original
/// UTF-16-based parsers read them.
fn decode_segment(segment: &str, line_number: usize, policy: EscapePolicy) -> Result<String> {
    if !segment.contains('\\') {
        return Ok(segment.to_owned());
    }

    let mut units: Vec<u16> = Vec::with_capacity(segment.len());
    let mut buf = [0u16; 2];
    let mut chars = segment.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            units.extend_from_slice(c.encode_utf16(&mut buf));
            continue;
        }

        match chars.next() {
            // a lone backslash at the end of a segment carries no information
            None => break,
            Some('n') => units.push('\n' as u16),
            Some('t') => units.push('\t' as u16),
            Some('r') => units.push('\r' as u16),
            Some('f') => units.push('\u{000C}' as u16),
            Some('u') => {
                let mut value: u32 = 0;
                let mut digits = 0;
                while digits < 4 {
                    match chars.peek().and_then(|c| c.to_digit(16)) {
                        Some(d) => {
                            value = value * 16 + d;
                            digits += 1;
                            chars.next();
                        }
                        None => break,
                    }
                }

                if digits == 0 {
                    if policy == EscapePolicy::Strict {
                        return Err(Error::MalformedEscape { line: line_number });
                    }
                    debug!(line_number, "\\u escape with no hex digits, keeping `u`");
                    units.push('u' as u16);
                } else if digits < 4 && policy == EscapePolicy::Strict {
                    return Err(Error::MalformedEscape { line: line_number });
                } else {
                    units.push(value as u16);
                }
            }
            Some(other) => units.extend_from_slice(other.encode_utf16(&mut buf)),
        }
    }

    match policy {
        EscapePolicy::Strict => Ok(String::from_utf16(&units)?),
        EscapePolicy::Lenient => Ok(String::from_utf16_lossy(&units)),
    }
}
