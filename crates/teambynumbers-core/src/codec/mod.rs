//! Flat-file line codec.
//!
//! Backing files hold one record per line, fields separated by commas, no
//! quoting. Decoding is lenient and panic-free:
//! - a line with an unexpected field count becomes a [`SkippedRecord`];
//! - a numeric field that does not parse becomes a [`ParseWarning`] and reads
//!   as zero, the rest of the line is kept.
//!
//! Callers decide what to log; nothing here aborts on bad input.

pub mod fields;
mod person;
mod stat;

use std::fmt;

pub use fields::FieldReader;

/// Separator between fields on a line.
pub const SEPARATOR: char = ',';

/// A record type that lives one-per-line in a flat file.
pub trait LineRecord: Sized {
    /// Short name used in log lines.
    const KIND: &'static str;

    /// Build a record from split fields. `None` means the field count is not
    /// one this record accepts.
    fn decode(fields: &[&str], reader: &mut FieldReader) -> Option<Self>;

    /// Render the record as one line, without the trailing newline.
    fn encode(&self) -> String;
}

/// A numeric field that failed to parse and was read as zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    /// 1-based line number.
    pub line: usize,
    pub field: &'static str,
    pub raw: String,
    pub reason: String,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: unable to convert {} {:?} to number: {}",
            self.line, self.field, self.raw, self.reason
        )
    }
}

/// A line dropped because of its field count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedRecord {
    /// 1-based line number.
    pub line: usize,
    pub fields: usize,
}

/// Outcome of decoding a whole file.
#[derive(Debug)]
pub struct Parsed<T> {
    /// Records in file order.
    pub records: Vec<T>,
    pub warnings: Vec<ParseWarning>,
    pub skipped: Vec<SkippedRecord>,
}

/// Decode every line of `input`. Blank lines are ignored.
pub fn parse<T: LineRecord>(input: &str) -> Parsed<T> {
    let mut out = Parsed {
        records: Vec::new(),
        warnings: Vec::new(),
        skipped: Vec::new(),
    };

    for (idx, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(SEPARATOR).collect();
        let mut reader = FieldReader::new(idx + 1);

        match T::decode(&fields, &mut reader) {
            Some(record) => {
                out.records.push(record);
                out.warnings.extend(reader.finish());
            }
            None => out.skipped.push(SkippedRecord {
                line: idx + 1,
                fields: fields.len(),
            }),
        }
    }
    out
}

/// Encode `records` as file contents, one newline-terminated line each.
pub fn render<T: LineRecord>(records: &[T]) -> String {
    let mut out = String::new();
    for r in records {
        out.push_str(&r.encode());
        out.push('\n');
    }
    out
}
