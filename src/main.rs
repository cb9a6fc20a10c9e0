//! CLI shell for the jlox scanner: token-echo REPL and file runner.

use std::fs;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use jlox_rs::{Token, tokenize};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    match args.len() {
        1 => repl(),
        2 if args[1] == "--help" || args[1] == "-h" => {
            usage();
            ExitCode::from(2)
        }
        2 => run_file(&args[1]),
        _ => {
            usage();
            ExitCode::from(2)
        }
    }
}

fn usage() {
    eprintln!("Usage: jlox [ <FILENAME> ]");
    eprintln!();
    eprintln!("With a file argument, tokenizes it line by line and echoes");
    eprintln!("the tokens; with no argument, starts a token-echo REPL.");
}

/// Read, scan, echo loop. Ends at EOF (Ctrl-D).
fn repl() -> ExitCode {
    let stdin = io::stdin();
    loop {
        print!("jlox > ");
        if io::stdout().flush().is_err() {
            break;
        }
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("read error: {e}");
                return ExitCode::FAILURE;
            }
        }
        let out = tokenize(line.trim_end_matches(['\n', '\r']));
        println!("{}", echo(&out.tokens));
        for err in &out.errors {
            eprintln!("{}", err.report());
        }
    }
    ExitCode::SUCCESS
}

fn run_file(path: &str) -> ExitCode {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut had_error = false;
    for line in content.lines() {
        let out = tokenize(line);
        println!("{}", echo(&out.tokens));
        for err in &out.errors {
            eprintln!("{}", err.clone().with_filename(path).report());
            had_error = true;
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Space-joined `KIND(lexeme-or-literal)` forms, the REPL echo format.
fn echo(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
