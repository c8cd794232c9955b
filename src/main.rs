//! Bongo CLI: compile and run bongo programs.

use std::env;
use std::path::Path;
use std::process;

use colored::Colorize;

use bongolang::BongoError;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI command to execute.
enum Command {
    /// Run a script file
    Run { file: String },
    /// Evaluate a string
    Eval { code: String },
}

/// CLI options parsed from arguments.
struct Options {
    command: Command,
    disassemble: bool,
}

fn print_usage() {
    eprintln!("Bongo {} - Bongo Interpreter", VERSION);
    eprintln!();
    eprintln!("Usage: bongo [options] <script.bongo>");
    eprintln!("       bongo -e <code>");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -e <code>        Evaluate code instead of reading a file");
    eprintln!("  --disassemble    Print the compiled instruction listing before running");
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  bongo sum.bongo                 Run a bongo program");
    eprintln!("  bongo --disassemble sum.bongo   Show the listing, then run");
    eprintln!("  bongo -e 'define:x 5'           Run an inline program");
}

fn parse_args() -> Options {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut command = None;
    let mut disassemble = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            "--disassemble" => disassemble = true,
            "-e" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("{}", "-e requires a code string".red());
                    print_usage();
                    process::exit(64);
                }
                command = Some(Command::Eval {
                    code: args[i].clone(),
                });
            }
            arg if arg.starts_with('-') => {
                eprintln!("{}", format!("Unknown option: {}", arg).red());
                print_usage();
                process::exit(64);
            }
            arg => {
                command = Some(Command::Run {
                    file: arg.to_string(),
                });
            }
        }
        i += 1;
    }

    match command {
        Some(command) => Options {
            command,
            disassemble,
        },
        None => {
            eprintln!(
                "{}",
                "No file provided. Use bongo <file-name> to interpret a file.".red()
            );
            print_usage();
            process::exit(64);
        }
    }
}

fn main() {
    let options = parse_args();

    let result = match &options.command {
        Command::Run { file } => bongolang::run_file(Path::new(file), options.disassemble),
        Command::Eval { code } => bongolang::run_with_options(code, options.disassemble),
    };

    if let Err(error) = result {
        match error {
            BongoError::Script { .. } => {
                eprintln!("{}", error.to_string().red());
                process::exit(66);
            }
            BongoError::Io(_) => {
                eprintln!("{}", format!("Error: {}", error).red());
                process::exit(70);
            }
        }
    }
}
