//! Configuration for reading and writing delimited text.

use crate::common::{Error, Result};

/// Configuration for parsing and serializing delimited text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextConfig {
    /// Field delimiter character
    pub delimiter: u8,
    /// Quote character for quoted fields
    pub quote: u8,
    /// Whether to trim whitespace from unquoted fields
    pub trim_whitespace: bool,
    /// Whether to drop a leading U+FEFF before parsing
    pub strip_bom: bool,
    /// Whether to prefix serialized output with a UTF-8 BOM
    pub write_bom: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',        // CSV default
            quote: b'"',            // Standard CSV quoting
            trim_whitespace: false, // Preserve whitespace by default
            strip_bom: true,
            write_bom: false,
        }
    }
}

impl TextConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Comma-separated configuration
    pub fn csv() -> Self {
        Self::default()
    }

    /// Tab-separated configuration
    pub fn tsv() -> Self {
        Self::new().with_delimiter(b'\t')
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the quote character
    pub fn with_quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }

    /// Enable/disable whitespace trimming
    pub fn with_trim_whitespace(mut self, trim: bool) -> Self {
        self.trim_whitespace = trim;
        self
    }

    /// Enable/disable writing a UTF-8 BOM on export
    pub fn with_write_bom(mut self, write_bom: bool) -> Self {
        self.write_bom = write_bom;
        self
    }

    /// Check that delimiter and quote are usable.
    ///
    /// Both must be distinct ASCII bytes other than CR and LF, so that
    /// splitting raw UTF-8 on them never cuts a multi-byte character.
    pub fn validate(&self) -> Result<()> {
        for (what, byte) in [("delimiter", self.delimiter), ("quote", self.quote)] {
            if !byte.is_ascii() || byte == b'\n' || byte == b'\r' {
                return Err(Error::Config(format!(
                    "{} must be an ASCII character other than CR/LF, got 0x{:02X}",
                    what, byte
                )));
            }
        }
        if self.delimiter == self.quote {
            return Err(Error::Config(
                "delimiter and quote must differ".to_string(),
            ));
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn delimiter_char(&self) -> char {
        char::from(self.delimiter)
    }

    #[inline]
    pub(crate) fn quote_char(&self) -> char {
        char::from(self.quote)
    }
}
