use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("then", TokenKind::Then);
        map.insert("func", TokenKind::Func);
        map.insert("while", TokenKind::While);
        map.insert("var", TokenKind::Var);
        map.insert("print", TokenKind::Print);
        map.insert("return", TokenKind::Return);
        map.insert("Integer", TokenKind::IntegerType);
        map.insert("Decimal", TokenKind::DecimalType);
        map.insert("String", TokenKind::StringType);
        map.insert("Char", TokenKind::CharType);
        map.insert("Boolean", TokenKind::BooleanType);
        map.insert("true", TokenKind::BooleanLiteral);
        map.insert("false", TokenKind::BooleanLiteral);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    Newline,
    IntegerLiteral,
    DecimalLiteral,
    CharLiteral,
    StringLiteral,
    BooleanLiteral,

    // Reserved
    If,
    Else,
    Then,
    Func,
    While,
    Var,
    Print,
    Return,
    IntegerType,
    DecimalType,
    StringType,
    CharType,
    BooleanType,

    Plus,
    Minus,
    Star,
    Slash,
    Equals,    // ==
    NotEquals, // !=
    Less,
    LessEquals,
    Greater,
    GreaterEquals,
    Not,

    Assignment, // =
    Semicolon,
    Colon,
    Comma,
    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,

    Error,
    EOF,
}

impl TokenKind {
    /// The fixed spelling of the kind, or a `<placeholder>` for kinds whose
    /// spelling comes from the source.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "<identifier>",
            TokenKind::Newline => "<new line>",
            TokenKind::IntegerLiteral => "<integer>",
            TokenKind::DecimalLiteral => "<decimal>",
            TokenKind::CharLiteral => "<char>",
            TokenKind::StringLiteral => "<string>",
            TokenKind::BooleanLiteral => "<boolean>",

            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Then => "then",
            TokenKind::Func => "func",
            TokenKind::While => "while",
            TokenKind::Var => "var",
            TokenKind::Print => "print",
            TokenKind::Return => "return",
            TokenKind::IntegerType => "Integer",
            TokenKind::DecimalType => "Decimal",
            TokenKind::StringType => "String",
            TokenKind::CharType => "Char",
            TokenKind::BooleanType => "Boolean",

            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Equals => "==",
            TokenKind::NotEquals => "!=",
            TokenKind::Less => "<",
            TokenKind::LessEquals => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEquals => ">=",
            TokenKind::Not => "!",

            TokenKind::Assignment => "=",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",

            TokenKind::Error => "<error>",
            TokenKind::EOF => "<eof>",
        }
    }

    /// Whether the kind ends a statement.
    pub fn is_terminator(&self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::Semicolon)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Position,
}

impl Token {
    /// Builds a token whose spelling is fixed by its kind.
    pub fn fixed(kind: TokenKind, position: Position) -> Self {
        Token {
            kind,
            value: String::from(kind.name()),
            position,
        }
    }

    /// Builds a token with a source spelling.
    ///
    /// Identifiers that spell a reserved word become that word's kind.
    pub fn spelled(kind: TokenKind, value: String, position: Position) -> Self {
        let kind = match kind {
            TokenKind::Identifier => RESERVED_LOOKUP
                .get(value.as_str())
                .copied()
                .unwrap_or(TokenKind::Identifier),
            _ => kind,
        };

        Token {
            kind,
            value,
            position,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{Kind: {}, Spelling: {:?}, Position: {}}}",
            self.kind, self.value, self.position
        )
    }
}
