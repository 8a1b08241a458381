#![allow(clippy::module_inception)]

use std::{fmt::Display, path::Path};

use colored::Colorize;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorTip},
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::Token,
    },
    parser::parser::parse,
    reader::reader::{FileReader, StringReader},
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod reader;

/// A location in the source text.
///
/// Lines start at 1. The column counts the characters consumed on the
/// current line, so it resets to 0 right after a newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn start() -> Self {
        Position { line: 1, column: 0 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Parses an in-memory source string into a [`Program`].
pub fn parse_source(source: &str) -> Result<Program, Error> {
    parse(Lexer::new(StringReader::from_source(source)))
}

/// Parses the file at `path` into a [`Program`].
///
/// The file handle is owned by the parser and released when it returns,
/// whether parsing succeeded or not.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Program, Error> {
    parse(Lexer::new(FileReader::open(path)?))
}

/// Pulls every token out of `source`, including the trailing EOF token.
pub fn tokenize_source(source: &str) -> Result<Vec<Token>, Error> {
    tokenize(&mut Lexer::new(StringReader::from_source(source)))
}

/// Returns the text of the given 1-based line, without its line break.
pub fn get_line(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth((line - 1) as usize)
        .map(|text| text.trim_end_matches('\r'))
}

pub fn display_error(error: &Error, source: &str, file_name: &str) {
    /*
        Error: message
        -> main.wb
           |
        20 | var a = 1.;
           | ----------^
    */

    let position = error.get_position();

    if let ErrorTip::None = error.get_tip() {
        println!("{} {}", "Error:".red().bold(), error.get_error_name());
    } else {
        println!(
            "{} {} ({})",
            "Error:".red().bold(),
            error.get_error_name(),
            error.get_tip()
        );
    }
    println!("-> {}", file_name);

    let Some(line_text) = get_line(source, position.line) else {
        return;
    };

    let line_str = position.line.to_string();
    let padding = line_str.len() + 2;

    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    println!("{} | {}", line_str, line_text_removed.trim_end());

    let arrows = (position.column as usize).saturating_sub(removed_whitespace).max(1);

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
