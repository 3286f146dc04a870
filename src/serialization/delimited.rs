//! Delimited text codec: detection, structural inference, parse, write.
//!
//! Detection and dimension inference are heuristics preserved from the
//! legacy format: the row and column counts are established by two
//! independent passes (newline counting and a single-row token scan),
//! not by a header. Files that interleave non-matrix data after a blank
//! separator line still parse; files with ragged rows are rejected up
//! front by [`detect`].

use crate::error::{MatrizError, Result};
use crate::primitives::Matrix;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::Path;

/// Checks whether `path` holds a well-formed delimited matrix.
///
/// The file is scanned line by line. Scanning stops at the first blank
/// line once at least one row has been counted (end of the matrix
/// block), or at the first line lacking the delimiter (which invalidates
/// the scan). Tokens per line are counted over the raw line, empty
/// tokens skipped; a token count that changes between consecutive rows
/// invalidates the scan.
///
/// # Errors
///
/// Returns `OpenFailed` if the file cannot be opened and
/// `DimensionMismatch` if no row was counted or the token counts are
/// inconsistent.
pub fn detect<P: AsRef<Path>>(path: P, delimiter: char) -> Result<()> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| open_failed(path, e))?;
    let mut reader = BufReader::new(file);

    let mut line = String::new();
    let mut rows = 0usize;
    let mut cols: Option<usize> = None;

    loop {
        line.clear();
        let read = reader
            .read_line(&mut line)
            .map_err(|e| MatrizError::Other(format!("read failed on {}: {e}", path.display())))?;
        if read == 0 {
            break;
        }
        // A blank line after at least one row marks the end of the block.
        if cols.is_some() && line == "\n" {
            break;
        }
        if !line.contains(delimiter) {
            cols = None;
            break;
        }
        let count = line.split(delimiter).filter(|t| !t.is_empty()).count();
        if let Some(prev) = cols {
            if count != prev {
                cols = None;
                break;
            }
        }
        cols = Some(count);
        rows += 1;
    }

    match cols {
        Some(count) if rows > 0 && count > 0 => Ok(()),
        _ => Err(MatrizError::dimension_mismatch(
            "rows of equal width separated by the delimiter",
            &format!("no consistent matrix layout in {}", path.display()),
        )),
    }
}

impl Matrix {
    /// Reads a matrix from a delimited text file.
    ///
    /// Runs [`detect`] first and propagates its error. Dimensions are
    /// then inferred by two independent passes — rows from newline
    /// counting (stopping at a blank separator line, counting a final
    /// unterminated line), columns from one row's worth of
    /// float-then-delimiter tokens — before the cells are parsed.
    ///
    /// # Errors
    ///
    /// Returns `OpenFailed` if the file cannot be opened,
    /// `DimensionMismatch` if it is not a well-formed delimited matrix,
    /// and `Other` if a value fails to parse mid-read (the partially
    /// filled matrix is dropped).
    pub fn from_delimited_file<P: AsRef<Path>>(path: P, delimiter: char) -> Result<Self> {
        let path = path.as_ref();
        detect(path, delimiter)?;

        let mut contents = String::new();
        File::open(path)
            .map_err(|e| open_failed(path, e))?
            .read_to_string(&mut contents)
            .map_err(|e| MatrizError::Other(format!("read failed on {}: {e}", path.display())))?;

        let rows = count_rows(&contents);
        let cols = count_cols(&contents, delimiter);
        let mut mat = Matrix::new(rows, cols)?;

        let mut scanner = Scanner::new(&contents);
        for i in 1..=rows {
            for j in 1..=cols {
                let value = scanner.scan_f64().ok_or_else(|| {
                    MatrizError::Other(format!(
                        "malformed value at row {i}, column {j} in {}",
                        path.display()
                    ))
                })?;
                mat.set(i, j, value)?;
                // One character sits between columns; consume it unseen.
                if j < cols {
                    scanner.next_char();
                }
            }
        }

        Ok(mat)
    }

    /// Writes the matrix to a delimited text file, truncating any
    /// existing contents.
    ///
    /// Each row becomes one line: values separated by the delimiter,
    /// fixed-point with six fractional digits, newline after every row.
    ///
    /// # Errors
    ///
    /// Returns `OpenFailed` if the file cannot be created, `Other` if
    /// writing fails, and `CloseFailed` if the handle cannot be synced
    /// after a completed write (the data has been handed to the OS by
    /// then; this is a reporting-only failure).
    pub fn to_delimited_file<P: AsRef<Path>>(&self, path: P, delimiter: char) -> Result<()> {
        let path = path.as_ref();

        let mut rendered = String::new();
        for row in self.as_slice().chunks(self.n_cols()) {
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    rendered.push(delimiter);
                }
                let _ = write!(rendered, "{value:.6}");
            }
            rendered.push('\n');
        }

        let mut file = File::create(path).map_err(|e| open_failed(path, e))?;
        file.write_all(rendered.as_bytes())
            .map_err(|e| MatrizError::Other(format!("write failed on {}: {e}", path.display())))?;
        file.sync_all().map_err(|e| MatrizError::CloseFailed {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(())
    }
}

fn open_failed(path: &Path, source: std::io::Error) -> MatrizError {
    MatrizError::OpenFailed {
        path: path.display().to_string(),
        source,
    }
}

/// Counts matrix rows: one per newline, plus one for a final line
/// without a terminating newline. Two consecutive newlines end the
/// count — the matrix block is over even if data follows.
fn count_rows(contents: &str) -> usize {
    let mut rows = 0;
    let mut bytes = contents.bytes().peekable();
    while let Some(ch) = bytes.next() {
        if ch == b'\n' {
            rows += 1;
        }
        match bytes.peek() {
            None if ch != b'\n' => rows += 1,
            Some(&b'\n') if ch == b'\n' => break,
            _ => {}
        }
    }
    rows
}

/// Counts columns heuristically from the head of the contents: one
/// float token, then one delimiter, repeated until a token is not
/// followed by the delimiter. Independent of [`count_rows`].
fn count_cols(contents: &str, delimiter: char) -> usize {
    let mut scanner = Scanner::new(contents);
    let mut cols = 0;
    while scanner.scan_f64().is_some() {
        cols += 1;
        if scanner.next_char() != Some(delimiter) {
            break;
        }
    }
    cols
}

/// Cursor over the file contents with `fscanf("%lf")`-style float
/// scanning: leading whitespace (newlines included) is skipped, then the
/// longest prefix that parses as a float is consumed.
struct Scanner<'a> {
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    fn new(contents: &'a str) -> Self {
        Self { rest: contents }
    }

    fn next_char(&mut self) -> Option<char> {
        let mut chars = self.rest.chars();
        let ch = chars.next()?;
        self.rest = chars.as_str();
        Some(ch)
    }

    fn scan_f64(&mut self) -> Option<f64> {
        self.rest = self.rest.trim_start();
        let candidate = self
            .rest
            .find(|c: char| !matches!(c, '0'..='9' | '+' | '-' | '.' | 'e' | 'E'))
            .map_or(self.rest, |end| &self.rest[..end]);
        // Longest-prefix match: "1.2." parses as 1.2 with the dot left over.
        for end in (1..=candidate.len()).rev() {
            if let Ok(value) = candidate[..end].parse::<f64>() {
                self.rest = &self.rest[end..];
                return Some(value);
            }
        }
        None
    }
}
