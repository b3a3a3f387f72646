mod code;
mod compiler;
mod symbol_table;
mod value;
mod vm;

// The instruction set and its encoding
pub use code::{make, read_operands, Definition, Instructions, OpCode};

// Compile an AST into bytecode
pub use compiler::{compile, Bytecode, CompileError, Compiler};

// Compile-time name resolution
pub use symbol_table::{Symbol, SymbolScope, SymbolTable};

// Run bytecode
pub use vm::{RuntimeError, FRAMES_SIZE, GLOBALS_SIZE, STACK_SIZE, VM};

// A value from the virtual machine
pub use value::{CompiledFunction, HashKey, HashPair, Value};

use lark_syntax::ParseError;
use std::fmt;

/// Any failure from the parse-compile-run pipeline.
#[derive(Debug)]
pub enum Error {
  Parse(Vec<ParseError>),
  Compile(CompileError),
  Runtime(RuntimeError),
}
impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Self::Parse(errors) => {
        let messages = errors
          .iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join("\n");
        write!(f, "{messages}")
      }
      Self::Compile(error) => write!(f, "{error}"),
      Self::Runtime(error) => write!(f, "{error}"),
    }
  }
}
impl std::error::Error for Error {}

impl From<Vec<ParseError>> for Error {
  fn from(errors: Vec<ParseError>) -> Self {
    Self::Parse(errors)
  }
}
impl From<CompileError> for Error {
  fn from(error: CompileError) -> Self {
    Self::Compile(error)
  }
}
impl From<RuntimeError> for Error {
  fn from(error: RuntimeError) -> Self {
    Self::Runtime(error)
  }
}

/// Parse, compile, and run a source string in a fresh virtual machine.
/// Returns the machine so the result of the final expression can be read
/// from the last popped slot.
pub fn interpret(source: &str) -> Result<VM, Error> {
  let program = lark_syntax::parse(source)?;
  let bytecode = compile(&program)?;

  let mut vm = VM::new();
  vm.run(&bytecode)?;
  Ok(vm)
}
