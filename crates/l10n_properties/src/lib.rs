//! # Properties Format Documentation
//!
//! This crate provides utilities to read and write the **.properties** format used for
//! application localization and configuration. The format is a line-oriented text format that
//! stores an ordered list of string keys and values within a single file. Properties files are
//! typically identified with the `.properties` extension.
//!
//! ## File Structure
//!
//! A properties file is a sequence of physical lines separated by a line feed (an optional
//! carriage return before the line feed is ignored). Physical lines combine into logical lines:
//!
//! | Logical line            | Meaning                                                          |
//! |-------------------------|------------------------------------------------------------------|
//! | `# text` or `! text`    | Comment, ignored                                                 |
//! | blank                   | Ignored                                                          |
//! | `key=value`             | Entry, also `key:value` and `key value`                          |
//! | `key=value \` + line    | Continued entry, the next physical line is joined to this one    |
//!
//! ### Comments
//!
//! A line whose first non-whitespace character is `#` or `!` is a comment for its entire length.
//! Comment detection only applies at the start of a logical line; a continued line whose second
//! physical line begins with `#` is data, not a comment.
//!
//! ### Continuations
//!
//! A logical line ending in an odd number of backslashes is continued: the final backslash is
//! dropped and the next physical line is appended after stripping its leading whitespace. An
//! even number of trailing backslashes is a run of escaped literal backslashes and does not
//! continue the line.
//!
//! ### Entries
//!
//! The first unescaped `=`, `:` or whitespace run on a logical line separates the key from the
//! value. After a whitespace separator a single optional `=` or `:` is consumed as well, so
//! `key = value` and `key value` both work. Unescaped whitespace around the key and value is
//! trimmed; whitespace preceded by a backslash is preserved. A line with no separator is a key
//! with an empty value.
//!
//! ### Escape Sequences
//!
//! | Escape      | Result                                                                       |
//! |-------------|------------------------------------------------------------------------------|
//! | `\n` `\r` `\t` `\f` | Line feed, carriage return, tab, form feed                           |
//! | `\uXXXX`    | The UTF-16 code unit with hex value `XXXX`; pairs of surrogate escapes combine |
//! | `\` + other | That character, literally                                                    |
//!
//! Decoding is lenient by default, matching the historical Mozilla parser: `\u` accepts from one
//! up to four hex digits, `\u` followed by no hex digit yields a literal `u`, and an unpaired
//! surrogate becomes U+FFFD. The strict policy turns both cases into errors instead, see
//! [`read::EscapePolicy`].
//!
//! ## Additional Information
//!
//! - **File Extension**: `.properties`
//! - **Encoding**: UTF-8
//! - **Duplicate keys**: the last occurrence wins, the first occurrence keeps its position
//!

pub mod error;
pub mod read;
pub mod types;
pub mod write;

#[cfg(feature = "serde")]
mod serde;

pub use read::{EscapePolicy, PropertiesReader};
pub use types::PropertyTable;
pub use write::PropertiesWriter;
