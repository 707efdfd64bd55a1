use std::borrow::Cow;
use std::iter::Peekable;
use std::path::Path;
use std::str::Chars;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, BufReader};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::verse::VerseRecord;

/// Configuration for corpus reading
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Skip the first record as a header row
    pub has_headers: bool,
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            has_headers: false,
            buffer_size: 8192,
        }
    }
}

/// Statistics for one corpus read
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub file_path: String,
    pub verses_read: u64,
    pub bytes_read: u64,
    pub duration_ms: u64,
}

/// Async reader for two-column `id,text` CSV corpora
pub struct AsyncVerseReader {
    config: ReaderConfig,
}

impl AsyncVerseReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read and parse the whole corpus; any malformed row fails the read
    pub async fn read_verses<P: AsRef<Path>>(&self, file_path: P) -> Result<(Vec<VerseRecord>, ReadStats)> {
        let path = file_path.as_ref();
        let start_time = std::time::Instant::now();

        debug!("Starting async read of corpus: {}", path.display());

        let file = File::open(path).await.map_err(|e| Error::io(path, e))?;
        let mut reader = BufReader::with_capacity(self.config.buffer_size, file);
        let mut content = String::new();
        let bytes_read = reader
            .read_to_string(&mut content)
            .await
            .map_err(|e| Error::io(path, e))? as u64;

        let verses = parse_verses(&content, self.config.has_headers)?;

        let stats = ReadStats {
            file_path: path.display().to_string(),
            verses_read: verses.len() as u64,
            bytes_read,
            duration_ms: start_time.elapsed().as_millis() as u64,
        };

        info!(
            "Read {}: {} verses, {} bytes in {}ms",
            stats.file_path, stats.verses_read, stats.bytes_read, stats.duration_ms
        );
        Ok((verses, stats))
    }
}

/// Convenience function for reading a corpus with default buffering
pub async fn read_verses_async<P: AsRef<Path>>(file_path: P, has_headers: bool) -> Result<Vec<VerseRecord>> {
    let reader = AsyncVerseReader::new(ReaderConfig {
        has_headers,
        ..Default::default()
    });
    let (verses, _stats) = reader.read_verses(file_path).await?;
    Ok(verses)
}

/// Parse CSV text into verse records
///
/// Accepts RFC 4180 quoting and LF or CRLF line endings. A BOM at the start
/// of any line is removed first. Blank lines are skipped. Every data row must
/// have exactly two fields.
pub fn parse_verses(content: &str, has_headers: bool) -> Result<Vec<VerseRecord>> {
    let content = strip_line_boms(content);
    let mut parser = RecordParser::new(&content);
    let mut verses = Vec::new();
    let mut skip_header = has_headers;

    while let Some((line, fields)) = parser.next_record()? {
        if skip_header {
            skip_header = false;
            continue;
        }
        let [id, text]: [String; 2] = fields
            .try_into()
            .map_err(|fields: Vec<String>| Error::csv(line, format!("expected 2 fields, found {}", fields.len())))?;
        verses.push(VerseRecord { id, text });
    }
    Ok(verses)
}

/// Remove a UTF-8 BOM, or its Latin-1 mojibake `»¿`, from the start of every line
///
/// Concatenated CSV files carry one BOM per source file, not only at offset 0.
fn strip_line_boms(content: &str) -> Cow<'_, str> {
    if !content.contains('\u{FEFF}') && !content.contains(MOJIBAKE_BOM) {
        return Cow::Borrowed(content);
    }
    let mut cleaned = String::with_capacity(content.len());
    for line in content.split_inclusive('\n') {
        let line = line.strip_prefix('\u{FEFF}').unwrap_or(line);
        let line = line.strip_prefix(MOJIBAKE_BOM).unwrap_or(line);
        cleaned.push_str(line);
    }
    Cow::Owned(cleaned)
}

const MOJIBAKE_BOM: &str = "\u{00BB}\u{00BF}";

/// Pull parser yielding one record at a time with its starting line
struct RecordParser<'a> {
    chars: Peekable<Chars<'a>>,
    line: u64,
}

impl<'a> RecordParser<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            chars: content.chars().peekable(),
            line: 1,
        }
    }

    fn next_record(&mut self) -> Result<Option<(u64, Vec<String>)>> {
        self.skip_blank_lines();
        if self.chars.peek().is_none() {
            return Ok(None);
        }

        let start_line = self.line;
        let mut fields = Vec::new();
        loop {
            let field = if self.chars.peek() == Some(&'"') {
                self.chars.next();
                self.quoted_field(start_line)?
            } else {
                self.bare_field()?
            };
            fields.push(field);

            match self.chars.next() {
                Some(',') => continue,
                Some('\r') => {
                    if self.chars.peek() == Some(&'\n') {
                        self.chars.next();
                    }
                    self.line += 1;
                    break;
                }
                Some('\n') => {
                    self.line += 1;
                    break;
                }
                _ => break,
            }
        }
        Ok(Some((start_line, fields)))
    }

    fn skip_blank_lines(&mut self) {
        while let Some(&c) = self.chars.peek() {
            match c {
                '\n' => self.line += 1,
                '\r' => {
                    self.chars.next();
                    if self.chars.peek() != Some(&'\n') {
                        self.line += 1;
                    }
                    continue;
                }
                _ => return,
            }
            self.chars.next();
        }
    }

    /// Field body after its opening quote, up to and including the closing quote
    fn quoted_field(&mut self, start_line: u64) -> Result<String> {
        let mut field = String::new();
        loop {
            match self.chars.next() {
                None => return Err(Error::csv(start_line, "unterminated quoted field")),
                Some('"') => {
                    if self.chars.peek() == Some(&'"') {
                        self.chars.next();
                        field.push('"');
                    } else {
                        break;
                    }
                }
                Some(c) => {
                    if c == '\n' || (c == '\r' && self.chars.peek() != Some(&'\n')) {
                        self.line += 1;
                    }
                    field.push(c);
                }
            }
        }
        match self.chars.peek() {
            None | Some(',') | Some('\n') | Some('\r') => Ok(field),
            Some(_) => Err(Error::csv(self.line, "unexpected character after closing quote")),
        }
    }

    fn bare_field(&mut self) -> Result<String> {
        let mut field = String::new();
        while let Some(&c) = self.chars.peek() {
            match c {
                ',' | '\n' | '\r' => break,
                '"' => return Err(Error::csv(self.line, "bare quote in unquoted field")),
                _ => {
                    field.push(c);
                    self.chars.next();
                }
            }
        }
        Ok(field)
    }
}
