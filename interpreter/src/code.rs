use smallvec::SmallVec;
use std::fmt;

/// The operations understood by the virtual machine. Each opcode occupies one
/// byte, followed by its operands as described by [`OpCode::definition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OpCode {
  Constant = 0,
  Pop,
  True,
  False,
  Null,
  Add,
  Sub,
  Mul,
  Div,
  Equal,
  NotEqual,
  GreaterThan,
  Minus,
  Bang,
  Jump,
  JumpNotTruthy,
  SetGlobal,
  GetGlobal,
  SetLocal,
  GetLocal,
  Call,
  ReturnValue,
  Return,
  Unknown,
}
impl From<u8> for OpCode {
  fn from(code: u8) -> Self {
    match code {
      0 => Self::Constant,
      1 => Self::Pop,
      2 => Self::True,
      3 => Self::False,
      4 => Self::Null,
      5 => Self::Add,
      6 => Self::Sub,
      7 => Self::Mul,
      8 => Self::Div,
      9 => Self::Equal,
      10 => Self::NotEqual,
      11 => Self::GreaterThan,
      12 => Self::Minus,
      13 => Self::Bang,
      14 => Self::Jump,
      15 => Self::JumpNotTruthy,
      16 => Self::SetGlobal,
      17 => Self::GetGlobal,
      18 => Self::SetLocal,
      19 => Self::GetLocal,
      20 => Self::Call,
      21 => Self::ReturnValue,
      22 => Self::Return,
      _ => Self::Unknown,
    }
  }
}

/// The mnemonic and operand layout for an opcode.
pub struct Definition {
  pub name: &'static str,
  pub operand_widths: &'static [usize],
}

impl OpCode {
  pub fn definition(self) -> Definition {
    let (name, operand_widths): (&'static str, &'static [usize]) = match self {
      Self::Constant => ("OpConstant", &[2]),
      Self::Pop => ("OpPop", &[]),
      Self::True => ("OpTrue", &[]),
      Self::False => ("OpFalse", &[]),
      Self::Null => ("OpNull", &[]),
      Self::Add => ("OpAdd", &[]),
      Self::Sub => ("OpSub", &[]),
      Self::Mul => ("OpMul", &[]),
      Self::Div => ("OpDiv", &[]),
      Self::Equal => ("OpEqual", &[]),
      Self::NotEqual => ("OpNotEqual", &[]),
      Self::GreaterThan => ("OpGreaterThan", &[]),
      Self::Minus => ("OpMinus", &[]),
      Self::Bang => ("OpBang", &[]),
      Self::Jump => ("OpJump", &[2]),
      Self::JumpNotTruthy => ("OpJumpNotTruthy", &[2]),
      Self::SetGlobal => ("OpSetGlobal", &[2]),
      Self::GetGlobal => ("OpGetGlobal", &[2]),
      Self::SetLocal => ("OpSetLocal", &[1]),
      Self::GetLocal => ("OpGetLocal", &[1]),
      Self::Call => ("OpCall", &[1]),
      Self::ReturnValue => ("OpReturnValue", &[]),
      Self::Return => ("OpReturn", &[]),
      Self::Unknown => ("OpUnknown", &[]),
    };

    Definition {
      name,
      operand_widths,
    }
  }
}

/// Encode an opcode and its operands into bytes. Multi-byte operands are
/// big-endian. Panics when the operand count does not match the opcode's
/// definition, as that is a compiler bug rather than a user error.
pub fn make(op: OpCode, operands: &[usize]) -> Instructions {
  let definition = op.definition();
  assert_eq!(
    operands.len(),
    definition.operand_widths.len(),
    "wrong operand count for {}",
    definition.name
  );

  let length = 1 + definition.operand_widths.iter().sum::<usize>();
  let mut code = Vec::with_capacity(length);
  code.push(op as u8);

  for (operand, width) in operands.iter().zip(definition.operand_widths) {
    match width {
      2 => {
        let operand = u16::try_from(*operand).expect("operand should fit in two bytes");
        code.extend_from_slice(&operand.to_be_bytes());
      }
      1 => {
        let operand = u8::try_from(*operand).expect("operand should fit in one byte");
        code.push(operand);
      }
      _ => unreachable!("operands are one or two bytes wide"),
    }
  }

  Instructions(code)
}

/// Decode the operands following an opcode byte. Returns the operands and the
/// number of bytes they occupied.
pub fn read_operands(definition: &Definition, code: &[u8]) -> (SmallVec<[usize; 2]>, usize) {
  let mut operands = SmallVec::new();
  let mut offset = 0;

  for width in definition.operand_widths {
    match width {
      2 => operands.push(usize::from(read_u16(&code[offset..]))),
      1 => operands.push(usize::from(read_u8(&code[offset..]))),
      _ => unreachable!("operands are one or two bytes wide"),
    }
    offset += width;
  }

  (operands, offset)
}

#[inline]
pub fn read_u16(code: &[u8]) -> u16 {
  u16::from_be_bytes([code[0], code[1]])
}

#[inline]
pub fn read_u8(code: &[u8]) -> u8 {
  code[0]
}

/// A buffer of encoded instructions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Instructions(pub Vec<u8>);

impl Instructions {
  pub fn new() -> Self {
    Self(Vec::new())
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Append an encoded instruction, returning the position it starts at.
  pub fn add(&mut self, instruction: &Instructions) -> usize {
    let position = self.0.len();
    self.0.extend_from_slice(&instruction.0);
    position
  }

  /// Overwrite the bytes starting at `position`. Used for backpatching jump
  /// operands and the trailing pop rewrite; never changes instruction length.
  pub fn replace(&mut self, position: usize, instruction: &Instructions) {
    self.0[position..position + instruction.len()].copy_from_slice(&instruction.0);
  }

  /// Drop every byte from `position` onwards.
  pub fn truncate(&mut self, position: usize) {
    self.0.truncate(position);
  }
}

impl fmt::Display for Instructions {
  /// Disassembles the buffer, one instruction per line:
  /// `0003 OpConstant 2`.
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let mut position = 0;

    while position < self.0.len() {
      let definition = OpCode::from(self.0[position]).definition();
      let (operands, offset) = read_operands(&definition, &self.0[position + 1..]);

      write!(f, "{position:04} {}", definition.name)?;
      for operand in operands {
        write!(f, " {operand}")?;
      }
      writeln!(f)?;

      position += 1 + offset;
    }

    Ok(())
  }
}
