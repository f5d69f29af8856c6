//! Record parser for delimited text held in memory

use super::config::TextConfig;
use crate::common::bom::strip_bom_str;
use crate::sheet::CellValue;
use memchr::{memchr, memchr_iter};

/// Parser yielding one record (logical row) at a time.
///
/// A record ends at an unquoted LF, CR or CRLF. A quote at the start of a
/// field opens a quoted section in which delimiters and line breaks are
/// literal and a doubled quote stands for one quote character. Lines holding
/// nothing but spaces and tabs are skipped.
pub struct TextParser<'a> {
    input: &'a [u8],
    pos: usize,
    line: usize,
    record_line: usize,
    config: TextConfig,
}

impl<'a> TextParser<'a> {
    /// Create a new text parser
    pub fn new(input: &'a str, config: TextConfig) -> Self {
        let input = if config.strip_bom {
            strip_bom_str(input)
        } else {
            input
        };

        TextParser {
            input: input.as_bytes(),
            pos: 0,
            line: 1,
            record_line: 0,
            config,
        }
    }

    /// Physical line (1-based) on which the last returned record started
    pub fn record_line(&self) -> usize {
        self.record_line
    }

    /// Reset the parser to the beginning
    pub fn reset(&mut self) {
        self.pos = 0;
        self.line = 1;
        self.record_line = 0;
    }

    /// Parse the next record, or `None` at end of input
    pub fn next_record(&mut self) -> Option<Vec<CellValue>> {
        self.skip_blank_lines();
        if self.pos >= self.input.len() {
            return None;
        }
        self.record_line = self.line;

        let mut fields = Vec::new();
        let mut field = Vec::new();
        // Bytes up to here came from a quoted section and are never trimmed
        let mut protected = 0;
        let mut at_field_start = true;

        loop {
            let Some(&byte) = self.input.get(self.pos) else {
                self.finish_field(&mut field, protected, &mut fields);
                return Some(fields);
            };
            self.pos += 1;

            match byte {
                b'\n' => {
                    self.line += 1;
                    self.finish_field(&mut field, protected, &mut fields);
                    return Some(fields);
                },
                b'\r' => {
                    // CRLF or a lone CR both end the record
                    if self.input.get(self.pos) == Some(&b'\n') {
                        self.pos += 1;
                    }
                    self.line += 1;
                    self.finish_field(&mut field, protected, &mut fields);
                    return Some(fields);
                },
                quote if quote == self.config.quote && at_field_start => {
                    self.read_quoted(&mut field);
                    protected = field.len();
                    at_field_start = false;
                },
                delim if delim == self.config.delimiter => {
                    self.finish_field(&mut field, protected, &mut fields);
                    protected = 0;
                    at_field_start = true;
                },
                b' ' | b'\t' if at_field_start && self.config.trim_whitespace => {
                    // Leading whitespace; the field has not started yet
                },
                _ => {
                    field.push(byte);
                    at_field_start = false;
                },
            }
        }
    }

    /// Consume a quoted section up to and including its closing quote.
    ///
    /// An unterminated section takes the rest of the input.
    fn read_quoted(&mut self, field: &mut Vec<u8>) {
        let quote = self.config.quote;

        loop {
            let rest = &self.input[self.pos..];
            match memchr(quote, rest) {
                Some(offset) => {
                    let chunk = &rest[..offset];
                    self.line += memchr_iter(b'\n', chunk).count();
                    field.extend_from_slice(chunk);
                    self.pos += offset + 1;

                    if self.input.get(self.pos) == Some(&quote) {
                        // Escaped quote (doubled quote)
                        field.push(quote);
                        self.pos += 1;
                    } else {
                        return;
                    }
                },
                None => {
                    self.line += memchr_iter(b'\n', rest).count();
                    field.extend_from_slice(rest);
                    self.pos = self.input.len();
                    return;
                },
            }
        }
    }

    /// Skip lines consisting only of spaces and tabs
    fn skip_blank_lines(&mut self) {
        let delimiter = self.config.delimiter;

        loop {
            let rest = &self.input[self.pos..];
            let blank = rest
                .iter()
                .take_while(|&&b| (b == b' ' || b == b'\t') && b != delimiter)
                .count();

            match rest.get(blank) {
                None => {
                    self.pos = self.input.len();
                    return;
                },
                Some(b'\n') => {
                    self.pos += blank + 1;
                },
                Some(b'\r') => {
                    self.pos += blank + 1;
                    if self.input.get(self.pos) == Some(&b'\n') {
                        self.pos += 1;
                    }
                },
                Some(_) => return,
            }
            self.line += 1;
        }
    }

    /// Finish parsing a field and add it to the fields vector
    fn finish_field(&self, current_field: &mut Vec<u8>, protected: usize, fields: &mut Vec<CellValue>) {
        let mut field_bytes = std::mem::take(current_field);

        if self.config.trim_whitespace {
            let end = field_bytes
                .iter()
                .rposition(|b| !b.is_ascii_whitespace())
                .map_or(0, |i| i + 1)
                .max(protected);
            field_bytes.truncate(end);
        }

        let field_str = match String::from_utf8(field_bytes) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        };

        fields.push(if field_str.is_empty() {
            CellValue::Empty
        } else {
            CellValue::String(field_str)
        });
    }
}

impl Iterator for TextParser<'_> {
    type Item = Vec<CellValue>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record()
    }
}
