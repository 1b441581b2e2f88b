use std::fs;
use std::process;

use clap::Parser;
use loxscan::Lexer;
use owo_colors::OwoColorize;

mod output;
mod repl;

use output::{OutputOptions, StderrReporter};

/// Exit code for command line usage errors.
const EXIT_USAGE: i32 = 64;
/// Exit code when the scanned source had lexical errors.
const EXIT_DATA_ERR: i32 = 65;
/// Exit code when the script could not be read.
const EXIT_NO_INPUT: i32 = 66;

#[derive(Parser)]
#[command(name = "loxscan", about = "Lexical scanner for the Lox scripting language")]
struct Cli {
    /// Path to a .lox script to scan
    script: Option<String>,
    /// Scan inline Lox source
    #[arg(long, conflicts_with = "script")]
    eval: Option<String>,
    /// Print the token stream as JSON
    #[arg(long)]
    json: bool,
    /// Render errors as annotated source snippets
    #[arg(long)]
    fancy: bool,
    /// Only report errors, do not print tokens
    #[arg(long)]
    quiet: bool,
    /// Print version and exit
    #[arg(long)]
    version: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { EXIT_USAGE } else { 0 };
            let _ = err.print();
            process::exit(code);
        }
    };

    init_tracing();

    if cli.version {
        println!(
            "{} {}",
            "loxscan".bright_cyan().bold(),
            env!("CARGO_PKG_VERSION").bright_black()
        );
        return;
    }

    let options = OutputOptions {
        json: cli.json,
        fancy: cli.fancy,
        quiet: cli.quiet,
    };

    let source = if let Some(code) = cli.eval {
        code
    } else if let Some(path) = cli.script {
        match fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!(
                    "{} could not read '{}': {e}",
                    "error:".red().bold(),
                    path.yellow()
                );
                process::exit(EXIT_NO_INPUT);
            }
        }
    } else {
        if let Err(err) = repl::run(options) {
            eprintln!("{} {err}", "error:".red().bold());
            process::exit(1);
        }
        return;
    };

    if scan_and_print(&Lexer::new(), &source, options) {
        process::exit(EXIT_DATA_ERR);
    }
}

/// Scan `source`, print its tokens and report its errors. Returns whether
/// any lexical error was reported.
pub(crate) fn scan_and_print(lexer: &Lexer, source: &str, options: OutputOptions) -> bool {
    let mut reporter = StderrReporter::new(source, options.fancy);
    let tokens = lexer.lex_with(source, &mut reporter);
    if !options.quiet {
        output::print_tokens(&tokens, options.json);
    }
    reporter.had_error()
}

/// Install a tracing subscriber when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}
