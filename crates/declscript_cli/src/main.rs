//! dsc: The declscript declaration parser CLI.
//!
//! Usage:
//!   dsc [options] [file...]
//!
//! Parses each input file and reports diagnostics; with `--print` the parsed
//! declaration skeleton is written to stdout.

use clap::Parser as ClapParser;
use declscript_core::text::LineMap;
use declscript_diagnostics::{messages, Diagnostic};
use declscript_parser::{ParseError, Parser};
use declscript_printer::Printer;
use std::process;

#[derive(ClapParser, Debug)]
#[command(name = "dsc", about = "declscript - an ambient declaration parser", disable_version_flag = true)]
struct Cli {
    /// Declaration files to parse.
    #[arg(value_name = "FILE")]
    files: Vec<String>,

    /// Print the parsed declaration skeleton to stdout.
    #[arg(long)]
    print: bool,

    /// Enable pretty printing for diagnostics.
    #[arg(long, default_value_t = true)]
    pretty: bool,

    /// Print the parser version.
    #[arg(short = 'v', long)]
    version: bool,
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";
const GRAY: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn main() {
    let cli = Cli::parse();

    if cli.version {
        println!("dsc Version 0.1.0");
        return;
    }

    if cli.files.is_empty() {
        print_error("No input files found.");
        process::exit(1);
    }

    let exit_code = run_parse(&cli);
    process::exit(exit_code);
}

fn run_parse(cli: &Cli) -> i32 {
    let use_color = cli.pretty && atty_is_terminal();
    let mut exit_code = 0;

    for file_name in &cli.files {
        // A stream-read failure is reported distinctly from a parse failure.
        let source = match std::fs::read_to_string(file_name) {
            Ok(source) => source,
            Err(e) => {
                let diag =
                    Diagnostic::new(&messages::FAILED_TO_READ_INPUT, &[file_name, &e.to_string()]);
                print_error(&diag.message_text);
                return 1;
            }
        };

        let line_map = LineMap::new(&source);
        match Parser::new(file_name, &source).parse_source_file() {
            Ok(file) => {
                if cli.print {
                    print!("{}", Printer::new().print_source_file(&file));
                }
            }
            Err(err) => {
                print_parse_error(&err, &line_map, use_color);
                exit_code = 2;
            }
        }
    }

    exit_code
}

fn print_parse_error(err: &ParseError, line_map: &LineMap, use_color: bool) {
    print_diagnostic(&err.diagnostic, line_map, use_color);
    for note in &err.notes {
        if use_color {
            eprintln!("  {}note{}: {}", GRAY, RESET, note);
        } else {
            eprintln!("  note: {}", note);
        }
    }
}

fn print_diagnostic(diag: &Diagnostic, line_map: &LineMap, use_color: bool) {
    if use_color {
        if let Some(ref file) = diag.file {
            eprint!("{}{}{}", CYAN, file, RESET);
            if let Some(span) = diag.span {
                let lc = line_map.line_and_column_of(span.start);
                eprint!("({},{})", lc.line + 1, lc.character + 1);
            }
            eprint!(": ");
        }
        eprintln!(
            "{}{}error{} {}TS{}{}: {}",
            BOLD, RED, RESET, CYAN, diag.code, RESET, diag.message_text
        );
    } else if let Some(span) = diag.span {
        let lc = line_map.line_and_column_of(span.start);
        eprintln!(
            "{}({},{}): error TS{}: {}",
            diag.file.as_deref().unwrap_or("<input>"),
            lc.line + 1,
            lc.character + 1,
            diag.code,
            diag.message_text
        );
    } else {
        eprintln!("{}", diag);
    }
}

fn print_error(msg: &str) {
    if atty_is_terminal() {
        eprintln!("{}{}error{}: {}", BOLD, RED, RESET, msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

fn atty_is_terminal() -> bool {
    // On Unix, check if stderr is a terminal
    #[cfg(unix)]
    {
        unsafe { libc::isatty(2) != 0 }
    }
    #[cfg(not(unix))]
    {
        true // Assume terminal on other platforms
    }
}
