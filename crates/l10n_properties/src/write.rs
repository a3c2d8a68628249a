//! Types for writing properties files
//!

use std::io::Write;

use bon::Builder;
use tracing::{instrument, warn};

use crate::error::Result;
use crate::types::PropertyTable;

/// Options for how the properties file should be written
#[derive(Debug, Clone, Copy, Builder)]
pub struct PropertiesWriterOptions {
    /// Emit characters above U+007E as `\uXXXX` escapes. When disabled they are written as raw
    /// UTF-8.
    #[builder(default = true)]
    pub escape_unicode: bool,
}

impl Default for PropertiesWriterOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Properties file generator
///
/// Entries are written in the order the `write_entry` calls arrive, one `key=value` line each,
/// escaped so that reading the output back yields the same entries.
///
/// ```
/// # fn doit() -> l10n_properties::error::Result<()>
/// # {
/// use l10n_properties::write::{PropertiesWriter, PropertiesWriterOptions};
///
/// let mut writer = PropertiesWriter::new(Vec::new(), PropertiesWriterOptions::default());
/// writer.write_comment("application strings")?;
/// writer.write_entry("greeting", "Hello, World!")?;
///
/// let buf = writer.finish()?;
/// assert_eq!(buf, b"# application strings\ngreeting=Hello, World\\!\n");
/// # Ok(())
/// # }
/// # doit().unwrap();
/// ```
pub struct PropertiesWriter<W: Write> {
    inner: W,
    options: PropertiesWriterOptions,
}

impl<W: Write> PropertiesWriter<W> {
    /// Initializes the writer.
    pub fn new(inner: W, options: PropertiesWriterOptions) -> PropertiesWriter<W> {
        PropertiesWriter { inner, options }
    }

    /// Write a comment line. Embedded line breaks start further comment lines so the comment
    /// cannot leak into entry data.
    pub fn write_comment(&mut self, text: &str) -> Result<()> {
        for line in text.lines() {
            writeln!(self.inner, "# {}", line.trim_end())?;
        }
        Ok(())
    }

    /// Write a single entry.
    ///
    /// An entry with an empty key has no representation in the format and is skipped with a
    /// warning.
    #[instrument(skip(self, key, value), err)]
    pub fn write_entry(&mut self, key: impl AsRef<str>, value: impl AsRef<str>) -> Result<()> {
        let key = key.as_ref();
        if key.is_empty() {
            warn!("skipping entry with empty key");
            return Ok(());
        }

        let mut line = String::with_capacity(key.len() + value.as_ref().len() + 2);
        escape_key(&mut line, key, self.options.escape_unicode);
        line.push('=');
        escape_value(&mut line, value.as_ref(), self.options.escape_unicode);
        writeln!(self.inner, "{}", line)?;

        Ok(())
    }

    /// Write every entry of a table in stored order.
    #[instrument(skip_all, err, fields(entries = table.len()))]
    pub fn write_table(&mut self, table: &PropertyTable) -> Result<()> {
        for (key, value) in table.entries() {
            self.write_entry(key, value)?;
        }
        Ok(())
    }

    /// Flush and return the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

/// Serialize a table to a string, a convenience over [`PropertiesWriter`].
pub fn to_string(table: &PropertyTable, options: PropertiesWriterOptions) -> String {
    let mut writer = PropertiesWriter::new(Vec::new(), options);

    // writing to a Vec cannot fail
    writer
        .write_table(table)
        .and_then(|()| writer.finish())
        .map(|buf| String::from_utf8(buf).expect("escaped output is always valid UTF-8"))
        .expect("writing to an in-memory buffer cannot fail")
}

fn escape_key(out: &mut String, key: &str, escape_unicode: bool) {
    for c in key.chars() {
        // any whitespace in a key would be read back as a separator
        if c == ' ' {
            out.push_str("\\ ");
        } else {
            escape_char(out, c, escape_unicode);
        }
    }
}

fn escape_value(out: &mut String, value: &str, escape_unicode: bool) {
    let leading = value.len() - value.trim_start_matches(' ').len();
    let trailing = value.len() - value.trim_end_matches(' ').len();
    let body_end = value.len() - trailing.min(value.len() - leading);

    for (idx, c) in value.char_indices() {
        // unescaped spaces at either end would be trimmed on the way back in
        if c == ' ' && (idx < leading || idx >= body_end) {
            out.push_str("\\ ");
        } else {
            escape_char(out, c, escape_unicode);
        }
    }
}

fn escape_char(out: &mut String, c: char, escape_unicode: bool) {
    match c {
        '\\' => out.push_str("\\\\"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        '\u{000C}' => out.push_str("\\f"),
        '=' | ':' | '#' | '!' => {
            out.push('\\');
            out.push(c);
        }
        c if c < ' ' || (escape_unicode && c > '\u{7e}') => {
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                out.push_str(&format!("\\u{:04X}", unit));
            }
        }
        c if c != ' ' && c.is_whitespace() => {
            // non-space whitespace is a separator candidate on re-parse, escape it outright
            out.push('\\');
            out.push(c);
        }
        c => out.push(c),
    }
}
