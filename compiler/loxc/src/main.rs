//! Lox interpreter CLI.

use std::process::ExitCode;

use loxc::commands::{lex_file, parse_file, repl, run_file};
use loxc::exit_code;

fn main() -> ExitCode {
    loxc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let Some(command) = args.get(1) else {
        return repl();
    };

    match command.as_str() {
        "run" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: lox run <script>");
                return ExitCode::from(exit_code::USAGE);
            };
            run_file(path)
        }
        "lex" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: lox lex <script>");
                return ExitCode::from(exit_code::USAGE);
            };
            lex_file(path)
        }
        "parse" => {
            let rpn = args.iter().skip(2).any(|arg| arg == "--rpn");
            let Some(path) = args.iter().skip(2).find(|arg| !arg.starts_with('-')) else {
                eprintln!("Usage: lox parse <script> [--rpn]");
                return ExitCode::from(exit_code::USAGE);
            };
            parse_file(path, rpn)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-V" => {
            println!("lox {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        _ if command.starts_with('-') || args.len() > 2 => {
            eprintln!("Unknown command: {}", args[1..].join(" "));
            eprintln!();
            print_usage();
            ExitCode::from(exit_code::USAGE)
        }
        // A bare argument is a script path.
        _ => run_file(command),
    }
}

fn print_usage() {
    println!("Lox tree-walking interpreter");
    println!();
    println!("Usage: lox [command] [script]");
    println!();
    println!("Commands:");
    println!("  (none)                  Start the interactive prompt");
    println!("  <script>                Run a script");
    println!("  run <script>            Run a script");
    println!("  lex <script>            Tokenize and display tokens");
    println!("  parse <script> [--rpn]  Parse and display each statement");
    println!("  help                    Show this help message");
    println!("  version                 Show version information");
    println!();
    println!("Exit status:");
    println!("  65  the script has a syntax error");
    println!("  70  the script raised a runtime error");
    println!();
    println!("Environment:");
    println!("  RUST_LOG      log filter, e.g. RUST_LOG=lox_parse=debug");
    println!("  LOX_LOG_TREE  render logs as an indented span tree");
}
