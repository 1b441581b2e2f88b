mod completer;
mod helper;
mod highlighter;
mod hinter;

use loxscan::{Lexer, LoxError};
use owo_colors::OwoColorize;
use rustyline::error::ReadlineError;
use rustyline::{Config, EditMode, Editor};
use std::fs;

use self::helper::ReplHelper;
use crate::output::OutputOptions;

/// Run the interactive prompt. Every entry is scanned on its own, so line
/// numbers and the error flag start fresh each time.
pub fn run(options: OutputOptions) -> Result<(), LoxError> {
    let config = Config::builder()
        .history_ignore_dups(true)
        .map_err(to_repl_error)?
        .completion_type(rustyline::CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .build();

    let mut rl: Editor<ReplHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(config).map_err(to_repl_error)?;
    rl.set_helper(Some(ReplHelper));

    let lexer = Lexer::new();

    println!(
        "{} {}",
        "loxscan".bright_cyan().bold(),
        env!("CARGO_PKG_VERSION").bright_black()
    );
    println!("{}", "Type .help for REPL commands".bright_black());

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                match handle_command(trimmed, &lexer, options) {
                    Command::Exit => break,
                    Command::Handled => continue,
                    Command::NotACommand => {}
                }

                let _ = rl.add_history_entry(trimmed);
                crate::scan_and_print(&lexer, trimmed, options);
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".yellow());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "bye".bright_black());
                break;
            }
            Err(err) => {
                eprintln!("{} {err}", "repl error:".red().bold());
                break;
            }
        }
    }

    Ok(())
}

enum Command {
    Exit,
    Handled,
    NotACommand,
}

fn handle_command(trimmed: &str, lexer: &Lexer, options: OutputOptions) -> Command {
    if trimmed == ".exit" {
        return Command::Exit;
    }
    if trimmed == ".help" {
        println!("{}", ".help                show commands".bright_blue());
        println!("{}", ".load <file.lox>     scan a script".bright_blue());
        println!("{}", ".exit                exit REPL".bright_blue());
        return Command::Handled;
    }
    if let Some(path) = trimmed.strip_prefix(".load ") {
        let path = path.trim();
        match fs::read_to_string(path).map_err(|e| LoxError::io(path, e)) {
            Ok(source) => {
                crate::scan_and_print(lexer, &source, options);
            }
            Err(err) => eprintln!("{} {err}", "load error:".red().bold()),
        }
        return Command::Handled;
    }
    Command::NotACommand
}

fn to_repl_error(err: ReadlineError) -> LoxError {
    LoxError::Repl {
        message: err.to_string(),
    }
}
