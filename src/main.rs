use std::{env, fs::read_to_string, path::Path, process::ExitCode, time::Instant};

use monkey_parser::{display_error, lexer::lexer::Lexer, parser::parser::Parser};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("usage: monkey-parse <file>");
        return ExitCode::from(2);
    }

    let file_path = &args[1];
    let file_name = Path::new(file_path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.clone());

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(err) => {
            error!(%file_path, %err, "failed to read source file");
            return ExitCode::from(2);
        }
    };

    let start = Instant::now();

    let mut parser = Parser::new(Lexer::new(source.clone(), Some(file_name)));
    let program = parser.parse_program();

    info!(
        elapsed = ?start.elapsed(),
        statements = program.len(),
        errors = parser.errors().len(),
        "parsed {}",
        file_path
    );

    for stmt in program.iter() {
        println!("{}", stmt);
    }

    if parser.errors().is_empty() {
        return ExitCode::SUCCESS;
    }

    for error in parser.errors() {
        eprint!("{}", display_error(error, &source));
    }

    ExitCode::FAILURE
}
