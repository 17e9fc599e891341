use std::process::ExitCode;

#[cfg(feature = "cli")]
use std::io::Write;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
use armjitc::cli::{build_symbol_table, format_words, Cli};
#[cfg(feature = "cli")]
use armjitc::compiler::compile;

#[cfg(feature = "cli")]
fn main() -> ExitCode {
    let cli = Cli::parse();

    let symbols = match build_symbol_table(&cli.vars, &cli.consts) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("armjitc: {e}");
            return ExitCode::FAILURE;
        }
    };

    let words = match compile(&cli.expression, &symbols) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("armjitc: {e}");
            return ExitCode::FAILURE;
        }
    };

    let rendered = format_words(&words, cli.format);

    if let Some(path) = &cli.out {
        if let Err(e) = std::fs::write(path, rendered) {
            eprintln!("armjitc: could not write '{path}': {e}");
            return ExitCode::FAILURE;
        }
    } else if let Err(e) = std::io::stdout().write_all(rendered.as_bytes()) {
        eprintln!("armjitc: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[cfg(not(feature = "cli"))]
fn main() -> ExitCode {
    eprintln!("armjitc: built without the 'cli' feature");
    ExitCode::FAILURE
}
