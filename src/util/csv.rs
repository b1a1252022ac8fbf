//! CSV reader and writer
//!
//! Rows carry no header. Fields are trimmed, rows may differ in length, and
//! reading stops at end of input or at the first blank line outside a quoted
//! field. Written fields are always quoted.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::Path;

use csv::{QuoteStyle, ReaderBuilder, StringRecordsIntoIter, Terminator, Trim, WriterBuilder};

use crate::error::Result;

/// Separator used when none is given.
pub const DEFAULT_SEPARATOR: u8 = b',';

// == Blank Line Cut ==
/// Passes input through line by line and reports end of input at the first
/// blank line that is not inside a quoted field.
struct UntilBlankLine<R> {
    inner: R,
    line: Vec<u8>,
    pos: usize,
    in_quote: bool,
    done: bool,
}

impl<R: BufRead> UntilBlankLine<R> {
    fn new(inner: R) -> Self {
        Self {
            inner,
            line: Vec::new(),
            pos: 0,
            in_quote: false,
            done: false,
        }
    }

    /// Loads the next line; false once the input is over.
    fn fill_line(&mut self) -> io::Result<bool> {
        self.line.clear();
        self.pos = 0;

        if self.inner.read_until(b'\n', &mut self.line)? == 0 {
            return Ok(false);
        }
        if !self.in_quote && self.line.iter().all(u8::is_ascii_whitespace) {
            self.line.clear();
            return Ok(false);
        }

        // Escaped quotes come in pairs, so only an odd count flips the state
        let quotes = self.line.iter().filter(|&&b| b == b'"').count();
        if quotes % 2 == 1 {
            self.in_quote = !self.in_quote;
        }
        Ok(true)
    }
}

impl<R: BufRead> Read for UntilBlankLine<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pos >= self.line.len() {
            if self.done {
                return Ok(0);
            }
            if !self.fill_line()? {
                self.done = true;
                return Ok(0);
            }
        }

        let n = buf.len().min(self.line.len() - self.pos);
        buf[..n].copy_from_slice(&self.line[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

// == CSV Reader ==
/// Streaming reader yielding one row of fields per record.
pub struct CsvReader<R> {
    records: StringRecordsIntoIter<UntilBlankLine<R>>,
}

impl CsvReader<BufReader<File>> {
    /// Opens a CSV file for reading.
    pub fn open(path: impl AsRef<Path>, separator: u8) -> Result<Self> {
        Ok(Self::new(BufReader::new(File::open(path)?), separator))
    }
}

impl<R: BufRead> CsvReader<R> {
    pub fn new(input: R, separator: u8) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .delimiter(separator)
            .trim(Trim::All)
            .flexible(true)
            .from_reader(UntilBlankLine::new(input));

        Self {
            records: reader.into_records(),
        }
    }
}

impl<R: BufRead> Iterator for CsvReader<R> {
    type Item = Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.records
            .next()
            .map(|record| -> Result<Vec<String>> {
                Ok(record?.iter().map(str::to_string).collect())
            })
    }
}

// == CSV Writer ==
/// Writes rows with every field wrapped in double quotes.
pub struct CsvWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvWriter<File> {
    /// Creates (or truncates) a CSV file for writing.
    pub fn create(path: impl AsRef<Path>, separator: u8) -> Result<Self> {
        Ok(Self::new(File::create(path)?, separator))
    }
}

impl<W: Write> CsvWriter<W> {
    pub fn new(output: W, separator: u8) -> Self {
        let writer = WriterBuilder::new()
            .has_headers(false)
            .delimiter(separator)
            .quote_style(QuoteStyle::Always)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(output);

        Self { writer }
    }

    /// Writes one row.
    pub fn push<S: AsRef<str>>(&mut self, row: &[S]) -> Result<()> {
        self.writer.write_record(row.iter().map(|field| field.as_ref()))?;
        Ok(())
    }

    /// Flushes and returns the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| e.into_error().into())
    }
}

/// Reads a whole CSV file into memory.
pub fn parse_csv(path: impl AsRef<Path>, separator: u8) -> Result<Vec<Vec<String>>> {
    CsvReader::open(path, separator)?.collect()
}

/// Writes every row to a CSV file, replacing previous content.
pub fn write_csv<S: AsRef<str>>(
    path: impl AsRef<Path>,
    rows: &[Vec<S>],
    separator: u8,
) -> Result<()> {
    let mut writer = CsvWriter::create(path, separator)?;
    for row in rows {
        writer.push(row)?;
    }
    writer.into_inner()?;
    Ok(())
}
