use std::{
    env,
    fs::read_to_string,
    io::{self, BufRead, Write},
    path::Path,
    process::ExitCode,
};

use wb_lang::{
    display_error, errors::errors::Error, lexer::tokens::TokenKind, parse_file, parse_source,
    tokenize_source, MK_TOKEN,
};

const PROMPT: &str = "-> ";

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match args.as_slice() {
        [_] => repl(),
        [_, flag, file_path] if flag == "--tokens" => dump_tokens(file_path),
        [_, file_path] => run_file(file_path),
        _ => {
            eprintln!("usage: wb-lang [--tokens] [file]");
            ExitCode::FAILURE
        }
    }
}

fn repl() -> ExitCode {
    println!("Welcome to wb-lang!");
    println!("Type in an expression or statement, one per line.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{}", PROMPT);
        if stdout.flush().is_err() {
            return ExitCode::FAILURE;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => return ExitCode::SUCCESS,
            Ok(_) => {}
            Err(err) => {
                eprintln!("cannot read input: {}", err);
                return ExitCode::FAILURE;
            }
        }

        match parse_source(&line) {
            Ok(program) => println!("{}", program),
            Err(error) => display_error(&error, &line, "<stdin>"),
        }
    }
}

fn run_file(file_path: &str) -> ExitCode {
    match parse_file(file_path) {
        Ok(program) => {
            println!("{}", program);
            ExitCode::SUCCESS
        }
        Err(error) => {
            report(&error, file_path);
            ExitCode::FAILURE
        }
    }
}

fn dump_tokens(file_path: &str) -> ExitCode {
    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("can not open {}: {}", file_path, err);
            return ExitCode::FAILURE;
        }
    };

    match tokenize_source(&source) {
        Ok(tokens) => {
            for token in tokens {
                println!("{}", token);
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            println!("{}", MK_TOKEN!(TokenKind::Error, *error.get_position()));
            report(&error, file_path);
            ExitCode::FAILURE
        }
    }
}

/// Prints the diagnostic for an error raised while reading `file_path`.
fn report(error: &Error, file_path: &str) {
    let file_name = Path::new(file_path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(file_path);
    let source = read_to_string(file_path).unwrap_or_default();

    display_error(error, &source, file_name);
}
