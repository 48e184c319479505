//! Numeric field parsing with zero fallback.

use std::str::FromStr;

use super::ParseWarning;

/// Collects parse warnings for a single line.
#[derive(Debug)]
pub struct FieldReader {
    line: usize,
    warnings: Vec<ParseWarning>,
}

impl FieldReader {
    pub fn new(line: usize) -> Self {
        Self {
            line,
            warnings: Vec::new(),
        }
    }

    pub fn int(&mut self, field: &'static str, raw: &str) -> i64 {
        self.number(field, raw)
    }

    pub fn float(&mut self, field: &'static str, raw: &str) -> f64 {
        self.number(field, raw)
    }

    pub fn finish(self) -> Vec<ParseWarning> {
        self.warnings
    }

    fn number<N>(&mut self, field: &'static str, raw: &str) -> N
    where
        N: FromStr + Default,
        N::Err: std::fmt::Display,
    {
        match raw.parse::<N>() {
            Ok(v) => v,
            Err(e) => {
                self.warnings.push(ParseWarning {
                    line: self.line,
                    field,
                    raw: raw.to_string(),
                    reason: e.to_string(),
                });
                N::default()
            }
        }
    }
}
