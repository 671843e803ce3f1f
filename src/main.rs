// meow: scan, parse, and print meowBASIC expressions

use std::fs;
use std::io;
use std::process;

use ansi_term::Style;
use linefeed::{Interface, ReadResult};

use meowbasic::parser::lexer::Scanner;
use meowbasic::parser::parser::Parser;
use meowbasic::parser::printer::AstPrinter;
use meowbasic::report::Reporter;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    match args.len() {
        1 => {
            if let Err(err) = run_prompt() {
                eprintln!("{}", err);
                process::exit(1);
            }
        }
        2 => run_file(&args[1]),
        _ => {
            eprintln!("Usage: meow [script]");
            process::exit(64);
        }
    }
}

/// Run a script file. Any diagnostic discards the tree and exits 65.
fn run_file(path: &str) {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Error: could not read '{}': {}", path, err);
            process::exit(1);
        }
    };

    let reporter = run(&source);
    if reporter.had_error() {
        for diagnostic in reporter.diagnostics() {
            eprintln!("{}", diagnostic);
        }
        process::exit(65);
    }
}

/// Interactive prompt with line editing and history. Errors are shown and
/// forgotten; `:quit` or `:q` exits.
fn run_prompt() -> io::Result<()> {
    let interface = Interface::new("meow")?;
    interface.set_prompt("> ")?;

    while let ReadResult::Input(line) = interface.read_line()? {
        if line.eq_ignore_ascii_case(":quit") || line.eq_ignore_ascii_case(":q") {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let reporter = run(&line);
        for diagnostic in reporter.diagnostics() {
            interface.write_fmt(format_args!(
                "{}\n",
                Style::new().bold().paint(diagnostic.to_string())
            ))?;
        }
        interface.add_history_unique(line);
    }

    Ok(())
}

/// One scan+parse cycle. The tree is printed only when no diagnostic was
/// reported; the caller inspects the returned reporter.
fn run(source: &str) -> Reporter {
    let mut reporter = Reporter::new();
    let tokens = Scanner::new(source).scan_tokens(&mut reporter);
    let expr = Parser::new(tokens).parse(&mut reporter);

    if reporter.had_error() {
        return reporter;
    }
    if let Some(expr) = expr {
        println!("{}", AstPrinter::new().print(&expr));
    }
    reporter
}
