//! Character sources consumed by the lexer.
//!
//! The lexer never sees where its characters come from. It only talks to a
//! [`CharStream`], which hands out one byte at a time and keeps the
//! line/column bookkeeping. Files and in-memory strings are both served by
//! [`BufferedReader`], so the two providers behave identically.

use std::{
    fs::File,
    io::{BufRead, BufReader, Cursor},
    path::Path,
};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

pub const EOL: u8 = b'\n';

/// A pull-based source of bytes.
///
/// `Ok(None)` marks the end of the input. It is not an error and is
/// returned again on every later call.
pub trait CharStream {
    /// Consumes the next byte and updates the position.
    fn read(&mut self) -> Result<Option<u8>, Error>;
    /// Returns the next byte without consuming it.
    fn peek(&mut self) -> Result<Option<u8>, Error>;
    fn current_position(&self) -> Position;
}

/// A [`CharStream`] over any buffered byte source.
#[derive(Debug)]
pub struct BufferedReader<R: BufRead> {
    inner: R,
    position: Position,
}

/// Reads characters from a file on disk.
pub type FileReader = BufferedReader<BufReader<File>>;

/// Reads characters from an owned in-memory string.
pub type StringReader = BufferedReader<Cursor<Vec<u8>>>;

impl<R: BufRead> BufferedReader<R> {
    pub fn new(inner: R) -> Self {
        BufferedReader {
            inner,
            position: Position::start(),
        }
    }

    fn calculate_position(&mut self, byte: u8) {
        if byte == EOL {
            self.position.line += 1;
            self.position.column = 0;
        } else {
            self.position.column += 1;
        }
    }
}

impl FileReader {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|error| {
            Error::new(
                ErrorImpl::Io {
                    message: format!("can not open {}: {}", path.display(), error),
                },
                Position::start(),
            )
        })?;

        tracing::debug!(path = %path.display(), "Opened source file");
        Ok(BufferedReader::new(BufReader::new(file)))
    }
}

impl StringReader {
    pub fn from_source(source: &str) -> Self {
        BufferedReader::new(Cursor::new(source.as_bytes().to_vec()))
    }
}

impl<R: BufRead> CharStream for BufferedReader<R> {
    fn read(&mut self) -> Result<Option<u8>, Error> {
        let byte = self.peek()?;

        if let Some(byte) = byte {
            self.inner.consume(1);
            self.calculate_position(byte);
        }

        Ok(byte)
    }

    fn peek(&mut self) -> Result<Option<u8>, Error> {
        let position = self.position;

        match self.inner.fill_buf() {
            Ok(buffer) => Ok(buffer.first().copied()),
            Err(error) => Err(Error::new(
                ErrorImpl::Io {
                    message: error.to_string(),
                },
                position,
            )),
        }
    }

    fn current_position(&self) -> Position {
        self.position
    }
}
