use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. }
            | ErrorImpl::MalformedNumber { .. }
            | ErrorImpl::UnterminatedString { .. }
            | ErrorImpl::UnterminatedCharacter { .. } => ErrorKind::Lexical,
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::NoPrefixHandler { .. }
            | ErrorImpl::NumberParseError { .. } => ErrorKind::Parse,
            ErrorImpl::Io { .. } => ErrorKind::Io,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::MalformedNumber { .. } => "MalformedNumber",
            ErrorImpl::UnterminatedString { .. } => "UnterminatedString",
            ErrorImpl::UnterminatedCharacter { .. } => "UnterminatedCharacter",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NoPrefixHandler { .. } => "NoPrefixHandler",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::Io { .. } => "Io",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::MalformedNumber { spelling, character } => ErrorTip::Suggestion(format!(
                "Illegal character in number: `{}{}`, a `.` must be followed by a digit",
                spelling,
                character.map(String::from).unwrap_or_default()
            )),
            ErrorImpl::UnterminatedString { .. } => {
                ErrorTip::Suggestion(String::from("String literal is missing its closing `\"`"))
            }
            ErrorImpl::UnterminatedCharacter { .. } => {
                ErrorTip::Suggestion(String::from("Char literal is missing its closing `'`"))
            }
            ErrorImpl::UnexpectedToken { expected, received } => ErrorTip::Suggestion(format!(
                "Expected {}, got {}",
                expected, received
            )),
            ErrorImpl::NoPrefixHandler { token } => ErrorTip::Suggestion(format!(
                "`{}` cannot start an expression, is an operand missing?",
                token
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::Io { message } => ErrorTip::Suggestion(message.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Parse,
    Io,
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("lexical error: unknown token {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("lexical error: illegal character in number {spelling:?} (next: {character:?})")]
    MalformedNumber { spelling: String, character: Option<char> },
    #[error("lexical error: unterminated string {spelling:?}")]
    UnterminatedString { spelling: String },
    #[error("lexical error: unterminated char literal {spelling:?}")]
    UnterminatedCharacter { spelling: String },
    #[error("parser error: expected {expected}, got {received}")]
    UnexpectedToken { expected: String, received: String },
    #[error("parser error: no prefix parse function for {token:?} found")]
    NoPrefixHandler { token: String },
    #[error("parser error: could not parse {token:?} as a number")]
    NumberParseError { token: String },
    #[error("cannot read the source: {message}")]
    Io { message: String },
}
