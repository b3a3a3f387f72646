use crate::tokens::TokenKind;
use std::fmt;

/// A parsed program: the list of top level statements.
#[derive(Clone, Debug, Default)]
pub struct Program<'source> {
  pub statements: Vec<Statement<'source>>,
}

#[derive(Clone, Debug)]
pub enum Statement<'source> {
  Let {
    name: &'source str,
    value: Expression<'source>,
  },
  Return {
    value: Expression<'source>,
  },
  Expression {
    expression: Expression<'source>,
  },
}

/// A braced sequence of statements, as used by if/else arms and function
/// bodies.
#[derive(Clone, Debug)]
pub struct Block<'source> {
  pub statements: Vec<Statement<'source>>,
}

#[derive(Clone, Debug)]
pub enum Expression<'source> {
  Integer(i64),
  String(&'source str),
  Boolean(bool),
  Identifier(&'source str),
  Prefix {
    operator: UnaryOperator,
    right: Box<Expression<'source>>,
  },
  Infix {
    operator: BinaryOperator,
    left: Box<Expression<'source>>,
    right: Box<Expression<'source>>,
  },
  If {
    condition: Box<Expression<'source>>,
    consequence: Block<'source>,
    alternative: Option<Block<'source>>,
  },
  Function {
    parameters: Vec<&'source str>,
    body: Block<'source>,
  },
  Call {
    function: Box<Expression<'source>>,
    arguments: Vec<Expression<'source>>,
  },
  Array {
    elements: Vec<Expression<'source>>,
  },
  Hash {
    pairs: Vec<(Expression<'source>, Expression<'source>)>,
  },
  Index {
    left: Box<Expression<'source>>,
    index: Box<Expression<'source>>,
  },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UnaryOperator {
  Minus,
  Bang,
}
impl From<TokenKind> for UnaryOperator {
  fn from(kind: TokenKind) -> Self {
    match kind {
      TokenKind::Minus => Self::Minus,
      TokenKind::Bang => Self::Bang,
      _ => unreachable!("only prefix operator tokens become unary operators"),
    }
  }
}
impl fmt::Display for UnaryOperator {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Self::Minus => write!(f, "-"),
      Self::Bang => write!(f, "!"),
    }
  }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BinaryOperator {
  Plus,
  Minus,
  Multiply,
  Divide,
  Equal,
  NotEqual,
  Less,
  Greater,
}
impl From<TokenKind> for BinaryOperator {
  fn from(kind: TokenKind) -> Self {
    match kind {
      TokenKind::Plus => Self::Plus,
      TokenKind::Minus => Self::Minus,
      TokenKind::Star => Self::Multiply,
      TokenKind::Slash => Self::Divide,
      TokenKind::Equal => Self::Equal,
      TokenKind::NotEqual => Self::NotEqual,
      TokenKind::Less => Self::Less,
      TokenKind::Greater => Self::Greater,
      _ => unreachable!("only infix operator tokens become binary operators"),
    }
  }
}
impl fmt::Display for BinaryOperator {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Self::Plus => write!(f, "+"),
      Self::Minus => write!(f, "-"),
      Self::Multiply => write!(f, "*"),
      Self::Divide => write!(f, "/"),
      Self::Equal => write!(f, "=="),
      Self::NotEqual => write!(f, "!="),
      Self::Less => write!(f, "<"),
      Self::Greater => write!(f, ">"),
    }
  }
}

// The display forms mirror the source, with grouping made explicit. They keep
// the precedence tests readable and power the `ast` debugging printer.

impl fmt::Display for Program<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    for statement in &self.statements {
      write!(f, "{statement}")?;
    }
    Ok(())
  }
}

impl fmt::Display for Statement<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Self::Let { name, value } => write!(f, "let {name} = {value};"),
      Self::Return { value } => write!(f, "return {value};"),
      Self::Expression { expression } => write!(f, "{expression}"),
    }
  }
}

impl fmt::Display for Block<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{{ ")?;
    for statement in &self.statements {
      write!(f, "{statement} ")?;
    }
    write!(f, "}}")
  }
}

impl fmt::Display for Expression<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Self::Integer(value) => write!(f, "{value}"),
      Self::String(value) => write!(f, "\"{value}\""),
      Self::Boolean(value) => write!(f, "{value}"),
      Self::Identifier(name) => write!(f, "{name}"),
      Self::Prefix { operator, right } => write!(f, "({operator}{right})"),
      Self::Infix {
        operator,
        left,
        right,
      } => write!(f, "({left} {operator} {right})"),
      Self::If {
        condition,
        consequence,
        alternative,
      } => {
        write!(f, "if {condition} {consequence}")?;
        if let Some(alternative) = alternative {
          write!(f, " else {alternative}")?;
        }
        Ok(())
      }
      Self::Function { parameters, body } => {
        write!(f, "fn({}) {body}", parameters.join(", "))
      }
      Self::Call {
        function,
        arguments,
      } => {
        let arguments = arguments
          .iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join(", ");
        write!(f, "{function}({arguments})")
      }
      Self::Array { elements } => {
        let elements = elements
          .iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join(", ");
        write!(f, "[{elements}]")
      }
      Self::Hash { pairs } => {
        let pairs = pairs
          .iter()
          .map(|(key, value)| format!("{key}: {value}"))
          .collect::<Vec<_>>()
          .join(", ");
        write!(f, "{{{pairs}}}")
      }
      Self::Index { left, index } => write!(f, "({left}[{index}])"),
    }
  }
}
