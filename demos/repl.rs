//! Basic REPL for cellscheme.
//!
//! Run interactively as:    `cargo run --example repl`.
//! Replay a file first as:  `cargo run --example repl -- path/to/file.scm`.
//!
//! A replayed file holds one expression per line; blank lines and lines
//! starting with ';' are skipped. The session stays live afterwards unless
//! -b/--batch is given.

use clap::{App, Arg};
use colored::*;
use env_logger::{Builder, Env};
use log::{info, LevelFilter};
use rustyline::error::ReadlineError;
use rustyline::Editor;
use std::fs;

use cellscheme::builtins;
use cellscheme::error::Error;
use cellscheme::interpreter::{Interpreter, SpecialForm};
use cellscheme::token::{CliHelper, Token, Tokenizer};


fn main() -> Result<(), String> {
    // Setup logging.
    Builder::from_env(Env::default().default_filter_or("warn"))
        .filter_module("rustyline", LevelFilter::Warn)
        .init();

    // Parse args.
    let matches = App::new("cellscheme REPL")
        .version("0.1")
        .about("Single-session Scheme REPL")
        .arg(
            Arg::new("file")
                .help("File to evaluate before the interactive session")
                .index(1),
        )
        .arg(
            Arg::new("batch")
                .short('b')
                .long("batch")
                .help("Exit after replaying the file"),
        )
        .arg(
            Arg::new("max-depth")
                .short('d')
                .long("max-depth")
                .takes_value(true)
                .help("Evaluation nesting limit"),
        )
        .get_matches();

    let mut interpreter = Interpreter::new();
    if let Some(depth) = matches.value_of("max-depth") {
        let depth = depth
            .parse::<usize>()
            .map_err(|err| format!("Bad --max-depth: {}", err))?;
        interpreter = interpreter.with_max_depth(depth);
    }

    if let Some(path) = matches.value_of("file") {
        let contents =
            fs::read_to_string(path).map_err(|err| format!("Reading {} failed: {}", path, err))?;
        info!("Replaying {}", path);
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(';') {
                continue;
            }
            println!("{} {}", ">".dimmed(), line);
            print_result(interpreter.run(line));
        }
        if matches.is_present("batch") {
            return Ok(());
        }
    }

    run_interactive(&mut interpreter);
    Ok(())
}

fn run_interactive(interpreter: &mut Interpreter) {
    let mut editor = Editor::<CliHelper>::new();
    editor.set_helper(Some(CliHelper::new(interpreter.global().clone())));

    let mut curr_expr = String::default();
    loop {
        let prompt = if curr_expr.is_empty() {
            "> ".to_string()
        } else {
            format!("..{}", "  ".repeat(open_parens(&curr_expr)))
        };

        let line = match editor.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                curr_expr.clear();
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                break;
            }
            Err(err) => {
                println!("[Readline Error]: {:?}", err);
                break;
            }
        };

        if curr_expr.is_empty() {
            match line.trim() {
                "" => continue,
                ":quit" => break,
                ":help" => {
                    editor.add_history_entry(line.as_str());
                    print_help();
                    continue;
                }
                ":env" => {
                    editor.add_history_entry(line.as_str());
                    print_env(interpreter);
                    continue;
                }
                _ => {}
            }
        } else {
            curr_expr.push(' ');
        }
        curr_expr += &line;

        if open_parens(&curr_expr) > 0 {
            continue;
        }
        editor.add_history_entry(curr_expr.as_str());
        print_result(interpreter.run(&curr_expr));
        curr_expr.clear();
    }
}

// Parens left open in text; lexing errors end the expression so the
// interpreter can report them.
fn open_parens(text: &str) -> usize {
    let mut depth: usize = 0;
    for token in Tokenizer::new(text) {
        match token {
            Ok(info) => match info.token {
                Token::LeftParen => depth += 1,
                Token::RightParen => depth = depth.saturating_sub(1),
                _ => {}
            },
            Err(_) => return 0,
        }
    }
    depth
}

fn print_result(result: Result<String, Error>) {
    match result {
        Ok(val) => println!("{} {}", "->".green(), val),
        Err(err) => println!("{}", err.to_string().red()),
    }
    println!();
}

fn print_help() {
    println!("{}", "Commands:".bold());
    println!("  :env   list session bindings");
    println!("  :help  show this message");
    println!("  :quit  exit (or ^D)");
    println!("{}", "Special forms:".bold());
    let forms = SpecialForm::ALL
        .iter()
        .map(|form| form.name())
        .collect::<Vec<_>>();
    println!("  {}", forms.join(" "));
    println!("{}", "Builtins:".bold());
    println!("  {}", builtins::names().join(" "));
    println!();
}

fn print_env(interpreter: &Interpreter) {
    let bindings = interpreter.global_bindings();
    if bindings.is_empty() {
        println!("{}", "(no bindings)".dimmed());
    }
    for (name, value) in bindings {
        println!("  {} {}", name.to_string().cyan(), value);
    }
    println!();
}
