//! Monkey Language CLI
//!
//! Command-line interface for the Monkey front end.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::process;

use colored::Colorize;
use log::{Level, LevelFilter, Log, Metadata, Record};

use monkey_lang::{parse, Diagnostic, Lexer, VERSION};

const PROMPT: &str = ">> ";

/// What the REPL does with each line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Parse,
    Tokens,
}

/// Writes log records to stderr
struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let level = match record.level() {
            Level::Error => "error".red().bold(),
            Level::Warn => "warn".yellow().bold(),
            Level::Info => "info".green(),
            Level::Debug => "debug".blue(),
            Level::Trace => "trace".dimmed(),
        };
        eprintln!("[{} {}] {}", level, record.target(), record.args());
    }

    fn flush(&self) {}
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut mode = Mode::Parse;
    let mut verbosity = 0;
    let mut show_help = false;
    let mut filename: Option<&String> = None;

    for arg in &args[1..] {
        match arg.as_str() {
            "--tokens" | "-t" => mode = Mode::Tokens,
            "--verbose" | "-v" => verbosity += 1,
            "-vv" => verbosity += 2,
            "--help" | "-h" => show_help = true,
            _ if arg.starts_with('-') => {
                eprintln!("Unknown flag: {}", arg);
                print_usage();
                process::exit(1);
            }
            _ => filename = Some(arg),
        }
    }

    if show_help {
        print_help();
        return;
    }

    init_logger(verbosity);

    match filename {
        Some(file) => {
            if let Err(e) = run_file(file, mode) {
                eprintln!("{}", e);
                process::exit(1);
            }
        }
        None => {
            println!("Hello {}! This is the Monkey programming language!", user_name());
            println!("Feel free to type in commands");
            repl(mode);
        }
    }
}

fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => return,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let logger = Box::new(StderrLogger { level });
    if log::set_boxed_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}

fn user_name() -> String {
    env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_else(|_| "there".to_string())
}

fn print_usage() {
    eprintln!("Usage: monkey [OPTIONS] [script]");
    eprintln!("       monkey --help");
}

fn print_help() {
    println!("Monkey v{} - Scanner and parser", VERSION);
    println!();
    println!("USAGE:");
    println!("    monkey [OPTIONS] [script]");
    println!();
    println!("OPTIONS:");
    println!("    -t, --tokens     Show tokenization output (lexer only)");
    println!("    -v, --verbose    Log parser activity to stderr (repeat for more)");
    println!("    -h, --help       Show this help message");
    println!();
    println!("EXAMPLES:");
    println!("    monkey script.mk            Parse a script and print its AST");
    println!("    monkey --tokens script.mk   Show tokens from lexer");
    println!("    monkey                      Start interactive REPL");
}

/// Render the tokens or the AST of a source unit
fn render(source: &str, mode: Mode) -> Result<String, String> {
    match mode {
        Mode::Tokens => {
            let tokens = Lexer::new(source).tokenize();
            let lines: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
            Ok(lines.join("\n"))
        }
        Mode::Parse => {
            let (program, errors) = parse(source);
            if errors.is_empty() {
                Ok(program.to_string())
            } else {
                Err(Diagnostic::report(&errors, Some(source)))
            }
        }
    }
}

/// Parse a Monkey script from a file
fn run_file(filename: &str, mode: Mode) -> Result<(), String> {
    let source = fs::read_to_string(filename)
        .map_err(|e| format!("Failed to read file '{}': {}", filename, e))?;

    println!("{}", render(&source, mode)?);
    Ok(())
}

/// Start an interactive Read-Parse-Print loop
fn repl(mode: Mode) {
    let stdin = io::stdin();

    loop {
        print!("{}", PROMPT);
        if io::stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        match stdin.read_line(&mut input) {
            Ok(0) => break, // EOF
            Ok(_) => {
                let input = input.trim();

                if input == "exit" || input == "quit" {
                    break;
                }

                if input.is_empty() {
                    continue;
                }

                match render(input, mode) {
                    Ok(output) => println!("{}", output),
                    Err(report) => eprint!("{}", report),
                }
            }
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                break;
            }
        }
    }

    println!("\nGoodbye!");
}
