//! Buffered readers and the forward-only line cursor
//! every decoding stage pulls its lines from.
#[cfg(feature = "flate2")]
use flate2::read::GzDecoder;

use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

/// [BufferedReader] wraps local files, with possible .gz decompression.
/// The file descriptor is released when this reader is dropped,
/// whatever the decoding outcome.
#[derive(Debug)]
pub enum BufferedReader {
    /// Readable (plain) file
    PlainFile(BufReader<File>),
    /// gzip compressed file
    #[cfg(feature = "flate2")]
    GzFile(BufReader<GzDecoder<File>>),
}

impl BufferedReader {
    /// Opens a plain readable file
    pub fn plain<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let fd = File::open(path)?;
        Ok(Self::PlainFile(BufReader::new(fd)))
    }
    /// Opens a gzip compressed file
    #[cfg(feature = "flate2")]
    pub fn gzip<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let fd = File::open(path)?;
        Ok(Self::GzFile(BufReader::new(GzDecoder::new(fd))))
    }
}

impl Read for BufferedReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self {
            Self::PlainFile(ref mut h) => h.read(buf),
            #[cfg(feature = "flate2")]
            Self::GzFile(ref mut h) => h.read(buf),
        }
    }
}

impl BufRead for BufferedReader {
    fn fill_buf(&mut self) -> std::io::Result<&[u8]> {
        match self {
            Self::PlainFile(ref mut bufreader) => bufreader.fill_buf(),
            #[cfg(feature = "flate2")]
            Self::GzFile(ref mut bufreader) => bufreader.fill_buf(),
        }
    }
    fn consume(&mut self, s: usize) {
        match self {
            Self::PlainFile(ref mut bufreader) => bufreader.consume(s),
            #[cfg(feature = "flate2")]
            Self::GzFile(ref mut bufreader) => bufreader.consume(s),
        }
    }
}

/// [LineCursor] hands out one line at a time, never looks ahead,
/// and strips both LF and CRLF terminations.
#[derive(Debug)]
pub struct LineCursor<R: BufRead> {
    reader: R,
    /// Number of lines consumed so far
    consumed: usize,
}

impl<R: BufRead> LineCursor<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            consumed: 0,
        }
    }

    /// Returns next line, `None` once input is exhausted.
    pub fn next_line(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::with_capacity(96);
        let size = self.reader.read_line(&mut line)?;
        if size == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        self.consumed += 1;
        Ok(Some(line))
    }

    /// Number of lines consumed so far
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

#[cfg(test)]
mod test {
    use super::LineCursor;
    use std::io::Cursor;

    #[test]
    fn lf_and_crlf_lines() {
        let content = "first line\r\nsecond line\n\nlast line";
        let mut cursor = LineCursor::new(Cursor::new(content));
        assert_eq!(cursor.next_line().unwrap(), Some("first line".to_string()));
        assert_eq!(cursor.next_line().unwrap(), Some("second line".to_string()));
        assert_eq!(cursor.next_line().unwrap(), Some("".to_string()));
        assert_eq!(cursor.next_line().unwrap(), Some("last line".to_string()));
        assert_eq!(cursor.consumed(), 4);
        assert_eq!(cursor.next_line().unwrap(), None);
        assert_eq!(cursor.next_line().unwrap(), None);
        assert_eq!(cursor.consumed(), 4);
    }

    #[test]
    fn empty_input() {
        let mut cursor = LineCursor::new(Cursor::new(""));
        assert_eq!(cursor.next_line().unwrap(), None);
        assert_eq!(cursor.consumed(), 0);
    }
}
