use crate::code::Instructions;
use ahash::AHashMap as HashMap;
use std::{fmt, rc::Rc};

/// A runtime value.
///
/// The booleans and null are canonical: the machine only ever produces
/// `Value::TRUE`, `Value::FALSE`, and `Value::NULL` for them, so comparing
/// them is comparing identities. Containers are never mutated once built;
/// operations which look like mutation return fresh values.
#[derive(Clone, Debug)]
pub enum Value {
  Integer(i64),
  Boolean(bool),
  String(Rc<str>),
  Array(Rc<[Value]>),
  Hash(Rc<HashMap<HashKey, HashPair>>),
  Function(Rc<CompiledFunction>),
  ReturnValue(Rc<Value>),
  Error(Rc<str>),
  Null,
}

impl Value {
  pub const TRUE: Self = Self::Boolean(true);
  pub const FALSE: Self = Self::Boolean(false);
  pub const NULL: Self = Self::Null;

  /// The tag used in error messages and hash keys.
  pub fn get_type(&self) -> &'static str {
    match self {
      Self::Integer(_) => "INTEGER",
      Self::Boolean(_) => "BOOLEAN",
      Self::String(_) => "STRING",
      Self::Array(_) => "ARRAY",
      Self::Hash(_) => "HASH",
      Self::Function(_) => "FUNCTION",
      Self::ReturnValue(_) => "RETURN",
      Self::Error(_) => "ERROR",
      Self::Null => "NULL",
    }
  }

  /// FALSE and NULL are falsy, everything else is truthy.
  pub fn is_truthy(&self) -> bool {
    !matches!(self, Self::Boolean(false) | Self::Null)
  }

  pub fn hash_key(&self) -> Option<HashKey> {
    match self {
      Self::Integer(value) => Some(HashKey {
        kind: self.get_type(),
        value: *value as u64,
      }),
      Self::Boolean(value) => Some(HashKey {
        kind: self.get_type(),
        value: u64::from(*value),
      }),
      Self::String(value) => Some(HashKey {
        kind: self.get_type(),
        value: fnv1a(value.as_bytes()),
      }),
      _ => None,
    }
  }
}

// 64-bit FNV-1a over the raw bytes
fn fnv1a(bytes: &[u8]) -> u64 {
  let mut hash = 0xcbf2_9ce4_8422_2325_u64;
  for byte in bytes {
    hash ^= u64::from(*byte);
    hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
  }
  hash
}

impl PartialEq for Value {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (Self::Integer(value), Self::Integer(other)) => value == other,
      (Self::Boolean(value), Self::Boolean(other)) => value == other,
      (Self::Null, Self::Null) => true,
      (Self::String(value), Self::String(other)) => value == other,
      (Self::Array(value), Self::Array(other)) => value == other,
      (Self::Hash(value), Self::Hash(other)) => {
        value.len() == other.len()
          && value.iter().all(|(key, pair)| {
            other
              .get(key)
              .is_some_and(|entry| pair.key == entry.key && pair.value == entry.value)
          })
      }
      (Self::Function(value), Self::Function(other)) => Rc::ptr_eq(value, other),
      (Self::ReturnValue(value), Self::ReturnValue(other)) => value == other,
      (Self::Error(value), Self::Error(other)) => value == other,
      _ => false,
    }
  }
}

impl fmt::Display for Value {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Self::Integer(value) => write!(f, "{value}"),
      Self::Boolean(value) => write!(f, "{value}"),
      Self::String(value) => write!(f, "{value}"),
      Self::Array(elements) => {
        let elements = elements
          .iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join(", ");
        write!(f, "[{elements}]")
      }
      Self::Hash(pairs) => {
        let pairs = pairs
          .values()
          .map(|pair| format!("{}: {}", pair.key, pair.value))
          .collect::<Vec<_>>()
          .join(", ");
        write!(f, "{{{pairs}}}")
      }
      Self::Function(_) => write!(f, "<function>"),
      Self::ReturnValue(value) => write!(f, "{value}"),
      Self::Error(message) => write!(f, "ERROR: {message}"),
      Self::Null => write!(f, "null"),
    }
  }
}

impl From<i64> for Value {
  fn from(value: i64) -> Self {
    Self::Integer(value)
  }
}
impl From<bool> for Value {
  fn from(value: bool) -> Self {
    Self::Boolean(value)
  }
}
impl From<&str> for Value {
  fn from(value: &str) -> Self {
    Self::String(Rc::from(value))
  }
}
impl From<String> for Value {
  fn from(value: String) -> Self {
    Self::String(Rc::from(value))
  }
}
impl From<Vec<Value>> for Value {
  fn from(value: Vec<Value>) -> Self {
    Self::Array(Rc::from(value))
  }
}
impl From<CompiledFunction> for Value {
  fn from(value: CompiledFunction) -> Self {
    Self::Function(Rc::new(value))
  }
}
impl From<()> for Value {
  fn from(_value: ()) -> Self {
    Self::Null
  }
}

/// The key a hashable value reduces to: discriminated by type tag so `1` and
/// `"1"` never collide.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct HashKey {
  pub kind: &'static str,
  pub value: u64,
}

/// An entry in a hash, keeping the original key value for display.
#[derive(Clone, Debug, PartialEq)]
pub struct HashPair {
  pub key: Value,
  pub value: Value,
}

/// A function body lowered to bytecode, living in the constant pool.
#[derive(Debug)]
pub struct CompiledFunction {
  pub instructions: Instructions,
  pub num_locals: usize,
  pub num_parameters: usize,
}
