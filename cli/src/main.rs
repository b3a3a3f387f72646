use clap::{Arg, Command};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::fs;

use lark_interpreter::{compile, Bytecode, Compiler, SymbolTable, VM};

mod print;

fn read_file(filename: &str) -> Option<String> {
  match fs::read_to_string(filename) {
    Ok(source) => Some(source),
    Err(_) => {
      print::error_message(&format!("problem reading file: {filename}"));
      None
    }
  }
}

fn compile_source(source: &str) -> Option<Bytecode> {
  let program = match lark_syntax::parse(source) {
    Ok(program) => program,
    Err(errors) => {
      print::parse_errors(&errors);
      return None;
    }
  };

  match compile(&program) {
    Ok(bytecode) => Some(bytecode),
    Err(error) => {
      print::error(&error);
      None
    }
  }
}

fn run_source(source: &str) {
  if let Some(bytecode) = compile_source(source) {
    let mut vm = VM::new();
    if let Err(error) = vm.run(&bytecode) {
      print::error(&error);
    }
  }
}

fn repl() {
  let mut editor = match DefaultEditor::new() {
    Ok(editor) => editor,
    Err(error) => return print::error(&error),
  };

  let mut symbols = SymbolTable::new();
  let mut vm = VM::new();

  loop {
    match editor.readline("> ") {
      Ok(line) => {
        let _ = editor.add_history_entry(line.as_str());

        let program = match lark_syntax::parse(&line) {
          Ok(program) => program,
          Err(errors) => {
            print::parse_errors(&errors);
            continue;
          }
        };
        if program.statements.is_empty() {
          continue;
        }

        // Bindings survive the line: the compiler hands the symbol table
        // back even when it fails part way through.
        let mut compiler = Compiler::with_symbols(std::mem::take(&mut symbols));
        let result = compiler.compile(&program);
        let (bytecode, table) = compiler.finish();
        symbols = table;

        if let Err(error) = result {
          print::error(&error);
          continue;
        }

        match vm.run(&bytecode) {
          Ok(()) => println!("=> {}\n", vm.last_popped_stack_element()),
          Err(error) => print::error(&error),
        }
      }
      Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
      Err(error) => {
        print::error(&error);
        break;
      }
    }
  }
}

fn main() {
  let version = env!("CARGO_PKG_VERSION");
  let app = Command::new("lark")
    .version(version)
    .about("The lark programming language")
    .subcommand(
      Command::new("run")
        .about("Execute a lark script")
        .arg(Arg::new("file").help("The file to run").required(true)),
    )
    .subcommand(
      Command::new("tokens")
        .about("Display the tokens for a file")
        .arg(Arg::new("file").help("The file to scan").required(true)),
    )
    .subcommand(
      Command::new("ast")
        .about("Display the abstract syntax tree for a file")
        .arg(Arg::new("file").help("The file to parse").required(true)),
    )
    .subcommand(
      Command::new("bytecode")
        .about("Display the compiled bytecode for a file")
        .arg(Arg::new("file").help("The file to compile").required(true)),
    )
    .get_matches();

  if let Some((command, subcommand)) = app.subcommand() {
    let filename = subcommand
      .get_one::<String>("file")
      .expect("file argument is required");
    let Some(source) = read_file(filename) else {
      return;
    };

    match command {
      "run" => run_source(&source),
      "tokens" => print::tokens(&source),
      "ast" => match lark_syntax::parse(&source) {
        Ok(program) => print::ast(&program),
        Err(errors) => print::parse_errors(&errors),
      },
      "bytecode" => {
        if let Some(bytecode) = compile_source(&source) {
          print::bytecode(&bytecode);
        }
      }
      _ => unreachable!(),
    }
  } else {
    println!("Lark (v{version})");
    repl();
  }
}
