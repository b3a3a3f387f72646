use ansi_term::Colour::Red;
use lark_interpreter::{Bytecode, Instructions, Value};
use lark_syntax::{
  ast::{Block, Expression, Program, Statement},
  ParseError, TokenKind,
};
use std::fmt::Display;

pub fn error_message(message: &str) {
  eprintln!("{} {}", Red.bold().paint("Error:"), message);
}

pub fn error(error: &impl Display) {
  eprintln!("{} {}", Red.bold().paint("Error:"), error);
}

pub fn parse_errors(errors: &[ParseError]) {
  for error in errors {
    eprintln!("{} {}", Red.bold().paint("Syntax Error:"), error);
  }
}

pub fn tokens(source: &str) {
  let mut line = 0;

  println!("     ╭─[Tokens]");
  for token in lark_syntax::tokenize(source) {
    if token.line == line {
      print!("     │ ");
    } else {
      print!("{:>4} │ ", token.line);
      line = token.line;
    }

    if token.kind == TokenKind::Identifier
      || token.kind == TokenKind::Integer
      || token.kind == TokenKind::String
    {
      println!("{:?} ({})", token.kind, token.get_value(source));
    } else {
      println!("{:?}", token.kind);
    }
  }
  println!("─────╯");
}

pub fn bytecode(bytecode: &Bytecode) {
  println!("╭─[Bytecode: main]");
  instructions(&bytecode.instructions);

  for (index, constant) in bytecode.constants.iter().enumerate() {
    if let Value::Function(function) = constant {
      println!("├─[Function: constant {index}]");
      instructions(&function.instructions);
    }
  }
  println!("╰─");
}

fn instructions(instructions: &Instructions) {
  for line in instructions.to_string().lines() {
    println!("│ {line}");
  }
}

pub use ast::print as ast;
mod ast {
  use super::*;

  pub fn print(program: &Program) {
    println!("  ╭─[Abstract Syntax Tree]");
    for statement in &program.statements {
      print_statement(statement, "  ├─ ", "  │  ");
    }
    println!("──╯");
  }

  fn print_statement(statement: &Statement, prefix: &str, prefix_raw: &str) {
    let prefix_start = &format!("{prefix_raw}╰─ ");
    let prefix_blank = &format!("{prefix_raw}   ");

    match statement {
      Statement::Let { name, value } => {
        println!("{prefix}Let ({name})");
        print_expression(value, prefix_start, prefix_blank);
      }
      Statement::Return { value } => {
        println!("{prefix}Return");
        print_expression(value, prefix_start, prefix_blank);
      }
      Statement::Expression { expression } => {
        println!("{prefix}Expression");
        print_expression(expression, prefix_start, prefix_blank);
      }
    }
  }

  fn print_block(block: &Block, prefix: &str, prefix_raw: &str) {
    let prefix_list_start = &format!("{prefix_raw}├─ ");
    let prefix_list = &format!("{prefix_raw}│  ");
    let prefix_start = &format!("{prefix_raw}╰─ ");
    let prefix_blank = &format!("{prefix_raw}   ");

    println!("{prefix}Block");
    if let Some((last, rest)) = block.statements.split_last() {
      for statement in rest {
        print_statement(statement, prefix_list_start, prefix_list);
      }
      print_statement(last, prefix_start, prefix_blank);
    }
  }

  fn print_expression(expression: &Expression, prefix: &str, prefix_raw: &str) {
    let prefix_list_start = &format!("{prefix_raw}├─ ");
    let prefix_list = &format!("{prefix_raw}│  ");
    let prefix_start = &format!("{prefix_raw}╰─ ");
    let prefix_blank = &format!("{prefix_raw}   ");

    match expression {
      Expression::Integer(value) => println!("{prefix}Integer ({value})"),
      Expression::String(value) => println!("{prefix}String (\"{value}\")"),
      Expression::Boolean(value) => println!("{prefix}Boolean ({value})"),
      Expression::Identifier(name) => println!("{prefix}Identifier ({name})"),
      Expression::Prefix { operator, right } => {
        println!("{prefix}Prefix ({operator})");
        print_expression(right, prefix_start, prefix_blank);
      }
      Expression::Infix {
        operator,
        left,
        right,
      } => {
        println!("{prefix}Infix ({operator})");
        print_expression(left, prefix_list_start, prefix_list);
        print_expression(right, prefix_start, prefix_blank);
      }
      Expression::If {
        condition,
        consequence,
        alternative,
      } => {
        println!("{prefix}If");
        print_expression(condition, prefix_list_start, prefix_list);
        match alternative {
          Some(alternative) => {
            print_block(consequence, prefix_list_start, prefix_list);
            print_block(alternative, prefix_start, prefix_blank);
          }
          None => print_block(consequence, prefix_start, prefix_blank),
        }
      }
      Expression::Function { parameters, body } => {
        println!("{prefix}Function ({})", parameters.join(", "));
        print_block(body, prefix_start, prefix_blank);
      }
      Expression::Call {
        function,
        arguments,
      } => {
        println!("{prefix}Call");
        match arguments.split_last() {
          Some((last, rest)) => {
            print_expression(function, prefix_list_start, prefix_list);
            for argument in rest {
              print_expression(argument, prefix_list_start, prefix_list);
            }
            print_expression(last, prefix_start, prefix_blank);
          }
          None => print_expression(function, prefix_start, prefix_blank),
        }
      }
      Expression::Array { elements } => {
        println!("{prefix}Array");
        if let Some((last, rest)) = elements.split_last() {
          for element in rest {
            print_expression(element, prefix_list_start, prefix_list);
          }
          print_expression(last, prefix_start, prefix_blank);
        }
      }
      Expression::Hash { pairs } => {
        println!("{prefix}Hash");
        if let Some(((last_key, last_value), rest)) = pairs.split_last() {
          for (key, value) in rest {
            print_expression(key, prefix_list_start, prefix_list);
            print_expression(value, prefix_list_start, prefix_list);
          }
          print_expression(last_key, prefix_list_start, prefix_list);
          print_expression(last_value, prefix_start, prefix_blank);
        }
      }
      Expression::Index { left, index } => {
        println!("{prefix}Index");
        print_expression(left, prefix_list_start, prefix_list);
        print_expression(index, prefix_start, prefix_blank);
      }
    }
  }
}
