use std::{
    fs,
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use forest::{execute, parse};

/// forest runs programs written in Forest, a small scripting language with
/// variadic prefix operators.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat CONTENTS as Forest source instead of a file path.
    #[arg(short, long)]
    eval: bool,

    /// Print the parsed syntax tree before running the program.
    #[arg(long)]
    ast: bool,

    /// Do not print the values produced by top-level statements.
    #[arg(short, long)]
    quiet: bool,

    /// Path of a Forest source file, or source text with --eval.
    contents: String,
}

/// Exit code for source that does not parse.
const EXIT_PARSE_ERROR: u8 = 65;
/// Exit code for programs that reported runtime errors.
const EXIT_RUNTIME_ERROR: u8 = 70;

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let script = if args.eval {
        args.contents
    } else {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    };

    let program = match parse(&script) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(EXIT_PARSE_ERROR);
        },
    };

    if args.ast {
        println!("{program:#?}");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let execution = execute(&program, &mut out);

    if !args.quiet {
        for value in &execution.values {
            if writeln!(out, "{value}").is_err() {
                return ExitCode::FAILURE;
            }
        }
    }

    for diagnostic in &execution.diagnostics {
        eprintln!("{diagnostic}");
    }

    if execution.diagnostics.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_RUNTIME_ERROR)
    }
}

/// Installs a stderr log subscriber when `FOREST_LOG` is set, e.g.
/// `FOREST_LOG=forest=trace`.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var_os("FOREST_LOG").is_some() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_env("FOREST_LOG"))
                                      .init();
    }
}
