//! Delimited text (CSV/TSV) reader and writer.

use crate::common::{Error, Result};
use crate::sheet::text::config::TextConfig;
use crate::sheet::text::parser::TextParser;
use crate::sheet::{CellValue, Columns, DataRow, Dataset};
use std::borrow::Cow;
use std::cmp::Ordering;

/// Parse delimited text into a [`Dataset`].
///
/// The first non-blank record is the header. Records shorter than the header
/// are padded with [`CellValue::Empty`]; longer ones are truncated.
///
/// # Errors
///
/// [`Error::EmptyInput`] when no header record exists, [`Error::Config`] when
/// `config` is unusable.
pub fn read_delimited(raw: &str, config: &TextConfig) -> Result<Dataset> {
    config.validate()?;

    let mut parser = TextParser::new(raw, config.clone());
    let header = parser.next_record().ok_or(Error::EmptyInput)?;
    let columns = Columns::new(header.iter().map(|cell| cell.display_text().into_owned()));
    let width = columns.len();

    let mut rows = Vec::new();
    let mut padded = 0usize;
    let mut truncated = 0usize;

    while let Some(record) = parser.next_record() {
        match record.len().cmp(&width) {
            Ordering::Less => {
                padded += 1;
                tracing::debug!(
                    line = parser.record_line(),
                    fields = record.len(),
                    expected = width,
                    "padding short record"
                );
            },
            Ordering::Greater => {
                truncated += 1;
                tracing::debug!(
                    line = parser.record_line(),
                    fields = record.len(),
                    expected = width,
                    "truncating long record"
                );
            },
            Ordering::Equal => {},
        }
        rows.push(DataRow::with_width(record, width));
    }

    tracing::debug!(
        rows = rows.len(),
        columns = width,
        padded,
        truncated,
        "parsed delimited text"
    );

    Ok(Dataset::new(columns, rows))
}

/// Serialize rows under `columns` into delimited text.
///
/// Fields holding the delimiter, the quote character, a line break, or
/// leading/trailing whitespace are quoted with inner quotes doubled, so the
/// output parses back to the same cells. Records are separated by `\n`, with
/// no trailing line break.
pub fn write_delimited<'a, I>(rows: I, columns: &Columns, config: &TextConfig) -> String
where
    I: IntoIterator<Item = &'a DataRow>,
{
    let mut out = String::new();
    if config.write_bom {
        out.push('\u{FEFF}');
    }

    write_record(&mut out, columns.iter(), config);

    let width = columns.len();
    for row in rows {
        out.push('\n');
        let fields = (0..width).map(|idx| row.get(idx).map_or(Cow::Borrowed(""), CellValue::display_text));
        write_record(&mut out, fields, config);
    }

    out
}

fn write_record<I, S>(out: &mut String, fields: I, config: &TextConfig)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut count = 0usize;
    let mut all_empty = true;

    for (idx, field) in fields.into_iter().enumerate() {
        if idx > 0 {
            out.push(config.delimiter_char());
        }
        let field = field.as_ref();
        all_empty &= field.is_empty();
        write_field(out, field, config);
        count += 1;
    }

    // A lone empty field would otherwise be an empty line, which the parser skips
    if count == 1 && all_empty {
        out.push(config.quote_char());
        out.push(config.quote_char());
    }
}

fn write_field(out: &mut String, field: &str, config: &TextConfig) {
    let delimiter = config.delimiter_char();
    let quote = config.quote_char();

    let needs_quote = field.contains([delimiter, quote, '\n', '\r'])
        || field.starts_with([' ', '\t', '\u{FEFF}'])
        || field.ends_with([' ', '\t']);

    if needs_quote {
        out.push(quote);
        for ch in field.chars() {
            if ch == quote {
                out.push(quote);
            }
            out.push(ch);
        }
        out.push(quote);
    } else {
        out.push_str(field);
    }
}
