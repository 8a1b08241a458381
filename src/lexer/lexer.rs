use crate::{
    errors::errors::{Error, ErrorImpl},
    reader::reader::{CharStream, EOL},
    Position, MK_TOKEN,
};

use super::tokens::{Token, TokenKind};

/// Tunable lexer settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerConfig {
    /// Byte that starts a comment running to the end of the line.
    pub comment_marker: u8,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            comment_marker: b'#',
        }
    }
}

/// A pull-based tokenizer.
///
/// Holds the current character of its [`CharStream`] and asks the stream
/// to peek at the one after it when a token needs two characters. Tokens
/// are produced one at a time by [`Lexer::next_token`].
pub struct Lexer<R: CharStream> {
    reader: R,
    config: LexerConfig,
    current_char: Option<u8>,
    /// Where `current_char` sits. A newline belongs to the line it ends.
    position: Position,
    started: bool,
}

impl<R: CharStream> Lexer<R> {
    pub fn new(reader: R) -> Lexer<R> {
        Lexer::with_config(reader, LexerConfig::default())
    }

    pub fn with_config(reader: R, config: LexerConfig) -> Lexer<R> {
        Lexer {
            reader,
            config,
            current_char: None,
            position: Position::start(),
            started: false,
        }
    }

    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Produces the next token.
    ///
    /// Once the input is exhausted every call returns an EOF token.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        if !self.started {
            self.started = true;
            self.advance()?;
        }

        self.skip_ignored()?;

        let position = self.position;
        let Some(current) = self.current_char else {
            return Ok(MK_TOKEN!(TokenKind::EOF, position));
        };

        let token = match current {
            b'+' => MK_TOKEN!(TokenKind::Plus, position),
            b'-' => MK_TOKEN!(TokenKind::Minus, position),
            b'*' => MK_TOKEN!(TokenKind::Star, position),
            b'/' => MK_TOKEN!(TokenKind::Slash, position),
            b'(' => MK_TOKEN!(TokenKind::OpenParen, position),
            b')' => MK_TOKEN!(TokenKind::CloseParen, position),
            b'{' => MK_TOKEN!(TokenKind::OpenCurly, position),
            b'}' => MK_TOKEN!(TokenKind::CloseCurly, position),
            b':' => MK_TOKEN!(TokenKind::Colon, position),
            b';' => MK_TOKEN!(TokenKind::Semicolon, position),
            b',' => MK_TOKEN!(TokenKind::Comma, position),
            EOL => MK_TOKEN!(TokenKind::Newline, position),
            b'=' => self.with_equals(TokenKind::Assignment, TokenKind::Equals, position)?,
            b'!' => self.with_equals(TokenKind::Not, TokenKind::NotEquals, position)?,
            b'<' => self.with_equals(TokenKind::Less, TokenKind::LessEquals, position)?,
            b'>' => self.with_equals(TokenKind::Greater, TokenKind::GreaterEquals, position)?,
            b'"' => self.lex_string(position)?,
            b'\'' => self.lex_char(position)?,
            c if c.is_ascii_digit() => self.lex_number(position)?,
            c if c.is_ascii_alphabetic() => self.lex_identifier(position)?,
            c => {
                return Err(Error::new(
                    ErrorImpl::UnrecognisedCharacter {
                        character: self.decode_char(c)?,
                    },
                    position,
                ))
            }
        };

        // Step past the last character of the token.
        self.advance()?;

        tracing::trace!(kind = %token.kind, spelling = %token.value, position = %token.position, "Lexed token");
        Ok(token)
    }

    fn advance(&mut self) -> Result<(), Error> {
        let before = self.reader.current_position();
        self.current_char = self.reader.read()?;

        self.position = match self.current_char {
            Some(EOL) => Position {
                line: before.line,
                column: before.column + 1,
            },
            _ => self.reader.current_position(),
        };

        Ok(())
    }

    /// Reads the rest of the UTF-8 sequence that `first` starts.
    ///
    /// Leaves the last byte of the sequence as the current character.
    /// Broken sequences decode to U+FFFD.
    fn decode_char(&mut self, first: u8) -> Result<char, Error> {
        let width = match first {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        };

        let mut bytes = vec![first];
        while bytes.len() < width && self.peek()?.is_some_and(|c| (0x80..=0xBF).contains(&c)) {
            self.advance()?;
            if let Some(c) = self.current_char {
                bytes.push(c);
            }
        }

        Ok(std::str::from_utf8(&bytes)
            .ok()
            .and_then(|decoded| decoded.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    fn peek(&mut self) -> Result<Option<u8>, Error> {
        self.reader.peek()
    }

    fn peek_is_digit(&mut self) -> Result<bool, Error> {
        Ok(self.peek()?.is_some_and(|c| c.is_ascii_digit()))
    }

    fn skip_ignored(&mut self) -> Result<(), Error> {
        loop {
            while matches!(self.current_char, Some(b' ' | b'\t' | b'\r')) {
                self.advance()?;
            }

            if self.current_char != Some(self.config.comment_marker) {
                return Ok(());
            }

            // The newline itself is still a token.
            while !matches!(self.current_char, None | Some(EOL)) {
                self.advance()?;
            }
        }
    }

    /// Lexes `single`, or `double` when the next character is `=`.
    fn with_equals(
        &mut self,
        single: TokenKind,
        double: TokenKind,
        position: Position,
    ) -> Result<Token, Error> {
        if self.peek()? == Some(b'=') {
            self.advance()?;
            Ok(MK_TOKEN!(double, position))
        } else {
            Ok(MK_TOKEN!(single, position))
        }
    }

    fn lex_string(&mut self, position: Position) -> Result<Token, Error> {
        let mut bytes = vec![];
        self.advance()?;

        while self.current_char != Some(b'"') {
            let Some(current) = self.current_char else {
                return Err(Error::new(
                    ErrorImpl::UnterminatedString {
                        spelling: String::from_utf8_lossy(&bytes).into_owned(),
                    },
                    position,
                ));
            };

            bytes.push(current);
            self.advance()?;
        }

        Ok(MK_TOKEN!(
            TokenKind::StringLiteral,
            String::from_utf8_lossy(&bytes).into_owned(),
            position
        ))
    }

    fn lex_char(&mut self, position: Position) -> Result<Token, Error> {
        self.advance()?;

        let value = match self.current_char {
            Some(c) if c != b'\'' && c != EOL => self.decode_char(c)?,
            _ => {
                return Err(Error::new(
                    ErrorImpl::UnterminatedCharacter {
                        spelling: String::new(),
                    },
                    position,
                ))
            }
        };

        self.advance()?;
        if self.current_char != Some(b'\'') {
            return Err(Error::new(
                ErrorImpl::UnterminatedCharacter {
                    spelling: value.to_string(),
                },
                position,
            ));
        }

        Ok(MK_TOKEN!(TokenKind::CharLiteral, value.to_string(), position))
    }

    fn lex_number(&mut self, position: Position) -> Result<Token, Error> {
        let mut number = String::new();
        self.push_current(&mut number);

        while self.peek_is_digit()? {
            self.advance()?;
            self.push_current(&mut number);
        }

        if self.peek()? != Some(b'.') {
            return Ok(MK_TOKEN!(TokenKind::IntegerLiteral, number, position));
        }

        self.advance()?;
        self.push_current(&mut number);

        if !self.peek_is_digit()? {
            let dot_position = self.position;
            let character = match self.peek()? {
                Some(next) => {
                    self.advance()?;
                    Some(self.decode_char(next)?)
                }
                None => None,
            };

            return Err(Error::new(
                ErrorImpl::MalformedNumber {
                    spelling: number,
                    character,
                },
                dot_position,
            ));
        }

        while self.peek_is_digit()? {
            self.advance()?;
            self.push_current(&mut number);
        }

        Ok(MK_TOKEN!(TokenKind::DecimalLiteral, number, position))
    }

    fn lex_identifier(&mut self, position: Position) -> Result<Token, Error> {
        let mut identifier = String::new();
        self.push_current(&mut identifier);

        while self.peek()?.is_some_and(|c| c.is_ascii_alphanumeric()) {
            self.advance()?;
            self.push_current(&mut identifier);
        }

        Ok(MK_TOKEN!(TokenKind::Identifier, identifier, position))
    }

    fn push_current(&self, spelling: &mut String) {
        if let Some(c) = self.current_char {
            spelling.push(char::from(c));
        }
    }
}

/// Collects the tokens of a stream up to and including EOF.
pub fn tokenize<R: CharStream>(lexer: &mut Lexer<R>) -> Result<Vec<Token>, Error> {
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token()?;
        let at_end = token.is(TokenKind::EOF);
        tokens.push(token);

        if at_end {
            return Ok(tokens);
        }
    }
}
