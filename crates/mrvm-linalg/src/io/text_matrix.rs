//! Whitespace-delimited text matrices.
//!
//! Two layouts are understood:
//!
//! * auto-detected: no header, one matrix row per non-blank line. The number
//!   of rows and columns is found by scanning the input before the values are
//!   read.
//! * header: the first line holds `rows cols`, followed by `rows * cols`
//!   values in row-major order.
use std::io::{self, BufReader, Read, Seek, Write};

use crate::error::{MatrixError, Result};
use crate::math::Matrix;

/// Matches C `isspace`, which also treats vertical tab as blank.
#[inline]
fn is_space(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == 0x0b
}

/// Count the rows of a text matrix: every newline (or the start of input)
/// followed by a non-newline byte starts a row. Rewinds the reader.
pub fn count_rows<R: Read + Seek>(reader: &mut R) -> io::Result<usize> {
    let mut last = b'\n';
    let mut count = 0;
    for byte in reader.by_ref().bytes() {
        let byte = byte?;
        if last == b'\n' && byte != b'\n' {
            count += 1;
        }
        last = byte;
    }
    reader.rewind()?;
    Ok(count)
}

/// Count the whitespace-delimited tokens on the first line. Rewinds the
/// reader.
pub fn count_columns<R: Read + Seek>(reader: &mut R) -> io::Result<usize> {
    let mut last = b' ';
    let mut count = 0;
    for byte in reader.by_ref().bytes() {
        let byte = byte?;
        if byte == b'\n' {
            break;
        }
        if is_space(last) && !is_space(byte) {
            count += 1;
        }
        last = byte;
    }
    reader.rewind()?;
    Ok(count)
}

/// Read an auto-detected text matrix.
///
/// Values are scanned in row-major order. Scanning is lenient: it stops at
/// the first token that is not a number or when the input runs out, and the
/// cells not reached keep the value zero. Rows are not checked against the
/// first row's token count, so ragged input shifts values between rows.
pub fn read_auto<R: Read + Seek>(reader: R) -> Result<Matrix> {
    let mut reader = BufReader::new(reader);
    let rows = count_rows(&mut reader)?;
    let cols = count_columns(&mut reader)?;
    log::trace!("Detected {} rows and {} columns", rows, cols);

    let mut m = Matrix::new(rows, cols)?;

    let mut raw = Vec::new();
    reader.read_to_end(&mut raw)?;
    let text = String::from_utf8_lossy(&raw);

    let cells = m.as_mut_slice();
    let mut filled = 0;
    let tokens = text
        .split(|c: char| c.is_ascii() && is_space(c as u8))
        .filter(|token| !token.is_empty());
    for (slot, token) in cells.iter_mut().zip(tokens) {
        match token.parse::<f64>() {
            Ok(value) => {
                *slot = value;
                filled += 1;
            }
            Err(_) => {
                log::warn!("Stopped scanning at non-numeric token '{}'", token);
                break;
            }
        }
    }
    if filled < cells.len() {
        log::warn!(
            "Only {} of {} matrix cells were read; the rest are zero",
            filled,
            cells.len()
        );
    }

    Ok(m)
}

/// Read a text matrix whose first non-blank line is a `rows cols` header.
///
/// Unlike [`read_auto`], the values are validated: a malformed token or a
/// short file is reported with the offending line number. Values beyond
/// `rows * cols` are ignored.
pub fn read_with_header<R: Read>(mut reader: R) -> Result<Matrix> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut lines = text
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let (header_line, header) = lines.next().ok_or(MatrixError::Parse {
        line: 1,
        message: "missing 'rows cols' header".to_string(),
    })?;
    let dims = header
        .split_ascii_whitespace()
        .map(|token| token.parse::<usize>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| MatrixError::Parse {
            line: header_line,
            message: format!("invalid header: {}", e),
        })?;
    let (rows, cols) = match dims.as_slice() {
        [rows, cols] => (*rows, *cols),
        _ => {
            return Err(MatrixError::Parse {
                line: header_line,
                message: format!("expected 'rows cols', found '{}'", header.trim()),
            })
        }
    };

    let mut m = Matrix::new(rows, cols)?;
    let cells = m.as_mut_slice();
    let mut filled = 0;
    let mut last_line = header_line;
    'lines: for (line_no, line) in lines {
        last_line = line_no;
        for token in line.split_ascii_whitespace() {
            if filled == cells.len() {
                break 'lines;
            }
            cells[filled] = token.parse::<f64>().map_err(|_| MatrixError::Parse {
                line: line_no,
                message: format!("'{}' is not a number", token),
            })?;
            filled += 1;
        }
    }
    if filled < cells.len() {
        return Err(MatrixError::Parse {
            line: last_line,
            message: format!("expected {} values, found {}", cells.len(), filled),
        });
    }

    Ok(m)
}

/// Write `m` in the auto-detected layout: values separated by one space,
/// one row per line. Values use Rust's shortest round-trip formatting.
pub fn write_plain<W: Write>(m: &Matrix, mut writer: W) -> io::Result<()> {
    for row in 0..m.height() {
        let line = m
            .row_slice(row)
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}

/// Write `m` with a leading `rows cols` header line.
pub fn write_with_header<W: Write>(m: &Matrix, mut writer: W) -> io::Result<()> {
    writeln!(writer, "{} {}", m.height(), m.width())?;
    write_plain(m, writer)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn count_rows_skips_blank_lines() {
        let mut cur = Cursor::new("1 2\n\n3 4\n\n");
        assert_eq!(count_rows(&mut cur).unwrap(), 2);
        assert_eq!(cur.position(), 0);
    }

    #[test]
    fn count_rows_without_trailing_newline() {
        let mut cur = Cursor::new("1 2\n3 4");
        assert_eq!(count_rows(&mut cur).unwrap(), 2);
    }

    #[test]
    fn count_columns_only_looks_at_first_line() {
        let mut cur = Cursor::new("  1\t2   3 \n4 5\n");
        assert_eq!(count_columns(&mut cur).unwrap(), 3);
        assert_eq!(cur.position(), 0);
    }

    #[test]
    fn count_rows_counts_whitespace_only_lines() {
        let mut cur = Cursor::new("1 2\n   \n3 4\n");
        assert_eq!(count_rows(&mut cur).unwrap(), 3);
    }

    #[test]
    fn read_auto_zero_fills_whitespace_only_row() {
        let m = read_auto(Cursor::new("1 2\n   \n3 4\n")).unwrap();
        assert_eq!(m.shape(), (3, 2));
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 0.0, 0.0]);
    }

    #[test]
    fn read_auto_handles_crlf() {
        let m = read_auto(Cursor::new("1 2\r\n3 4\r\n")).unwrap();
        assert_eq!(m.shape(), (2, 2));
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn read_auto_splits_on_vertical_tab() {
        let m = read_auto(Cursor::new("1\x0b2\n3\x0b4\n")).unwrap();
        assert_eq!(m.shape(), (2, 2));
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn count_columns_single_line_without_newline() {
        let mut cur = Cursor::new("7 8");
        assert_eq!(count_columns(&mut cur).unwrap(), 2);
    }

    #[test]
    fn read_auto_zero_fills_after_bad_token() {
        let m = read_auto(Cursor::new("1 2\n3 x\n")).unwrap();
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 0.0]);
    }

    #[test]
    fn read_auto_rejects_empty_input() {
        assert!(matches!(
            read_auto(Cursor::new("")),
            Err(MatrixError::EmptyDimension { rows: 0, .. })
        ));
    }

    #[test]
    fn header_round_trip() {
        let m = Matrix::from_slice(&[1.5, -2.0, 0.25, 4.0], 2, 2).unwrap();
        let mut buf = Vec::new();
        write_with_header(&m, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf.clone()).unwrap(), "2 2\n1.5 -2\n0.25 4\n");
        assert_eq!(read_with_header(buf.as_slice()).unwrap(), m);
    }
}
