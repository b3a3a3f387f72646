use crate::{
  ast::{BinaryOperator, Block, Expression, Program, Statement, UnaryOperator},
  tokens::{tokenize, LineNumber, Token, TokenKind},
};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialOrd, PartialEq)]
enum Precedence {
  Lowest = 1,
  Equality,   // == !=
  Comparison, // < >
  Term,       // + -
  Factor,     // * /
  Unary,      // ! -
  Call,       // ()
  Index,      // []
}
impl Precedence {
  fn of(kind: TokenKind) -> Self {
    match kind {
      TokenKind::Equal | TokenKind::NotEqual => Self::Equality,
      TokenKind::Less | TokenKind::Greater => Self::Comparison,
      TokenKind::Plus | TokenKind::Minus => Self::Term,
      TokenKind::Star | TokenKind::Slash => Self::Factor,
      TokenKind::LeftParen => Self::Call,
      TokenKind::LeftSquare => Self::Index,
      _ => Self::Lowest,
    }
  }
}

enum Error {
  ExpectedExpression,
  ExpectedIdentifier,
  ExpectedAssign,
  ExpectedOpeningParen,
  ExpectedClosingParen,
  ExpectedOpeningBrace,
  ExpectedClosingBrace,
  ExpectedClosingSquare,
  ExpectedColon,
  UnterminatedString,
  InvalidInteger,
  UnexpectedCharacter,
}
impl Error {
  fn message(&self, value: &str) -> String {
    match self {
      Self::ExpectedExpression => format!("expected an expression but received '{value}'"),
      Self::ExpectedIdentifier => format!("expected an identifier but received '{value}'"),
      Self::ExpectedAssign => format!("expected '=' but received '{value}'"),
      Self::ExpectedOpeningParen => format!("expected '(' but received '{value}'"),
      Self::ExpectedClosingParen => format!("expected ')' but received '{value}'"),
      Self::ExpectedOpeningBrace => format!("expected '{{' but received '{value}'"),
      Self::ExpectedClosingBrace => format!("expected '}}' but received '{value}'"),
      Self::ExpectedClosingSquare => format!("expected ']' but received '{value}'"),
      Self::ExpectedColon => format!("expected ':' but received '{value}'"),
      Self::UnterminatedString => "missing closing quote for string".to_string(),
      Self::InvalidInteger => format!("could not parse '{value}' as an integer"),
      Self::UnexpectedCharacter => format!("unexpected character '{value}'"),
    }
  }
}

/// A syntax problem found while parsing, with the line it was found on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
  pub message: String,
  pub line: LineNumber,
}
impl fmt::Display for ParseError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "line {}: {}", self.line, self.message)
  }
}
impl std::error::Error for ParseError {}

type ExpressionResult<'source> = Result<Expression<'source>, ParseError>;
type StatementResult<'source> = Result<Statement<'source>, ParseError>;

struct Parser<'source> {
  source: &'source str,
  tokens: Vec<Token>,
  position: usize,
  errors: Vec<ParseError>,
}

impl<'source> Parser<'source> {
  fn new(source: &'source str) -> Self {
    Self {
      source,
      tokens: tokenize(source),
      position: 0,
      errors: Vec::new(),
    }
  }

  fn current(&self) -> Token {
    self.tokens.get(self.position).copied().unwrap_or(Token {
      kind: TokenKind::EndOfFile,
      start: self.source.len() as u32,
      end: self.source.len() as u32,
      line: self.tokens.last().map_or(1, |token| token.line),
    })
  }

  fn next(&mut self) {
    if self.position < self.tokens.len() {
      self.position += 1;
    }
  }

  fn matches(&mut self, kind: TokenKind) -> bool {
    let matches = self.current().kind == kind;
    if matches {
      self.next();
    }
    matches
  }

  fn consume(&mut self, kind: TokenKind, error: Error) -> Result<Token, ParseError> {
    let token = self.current();
    if token.kind == kind {
      self.next();
      Ok(token)
    } else {
      Err(self.make_error(&error, token))
    }
  }

  fn make_error(&self, error: &Error, token: Token) -> ParseError {
    let value = if token.kind == TokenKind::EndOfFile {
      "end of input"
    } else {
      token.get_value(self.source)
    };

    ParseError {
      message: error.message(value),
      line: token.line,
    }
  }

  fn parse_program(mut self) -> Result<Program<'source>, Vec<ParseError>> {
    let mut statements = Vec::new();

    while self.current().kind != TokenKind::EndOfFile {
      match self.statement() {
        Ok(statement) => statements.push(statement),
        Err(error) => {
          self.errors.push(error);
          self.synchronise();
        }
      }
    }

    if self.errors.is_empty() {
      Ok(Program { statements })
    } else {
      Err(self.errors)
    }
  }

  // After an error, skip to the next statement boundary so later problems are
  // still reported.
  fn synchronise(&mut self) {
    while !matches!(
      self.current().kind,
      TokenKind::Semicolon | TokenKind::EndOfFile
    ) {
      self.next();
    }
    self.matches(TokenKind::Semicolon);
  }

  fn statement(&mut self) -> StatementResult<'source> {
    match self.current().kind {
      TokenKind::Let => self.let_statement(),
      TokenKind::Return => self.return_statement(),
      _ => self.expression_statement(),
    }
  }

  fn let_statement(&mut self) -> StatementResult<'source> {
    self.next();
    let name = self.consume(TokenKind::Identifier, Error::ExpectedIdentifier)?;
    self.consume(TokenKind::Assign, Error::ExpectedAssign)?;

    let value = self.expression(Precedence::Lowest)?;
    self.matches(TokenKind::Semicolon);

    Ok(Statement::Let {
      name: name.get_value(self.source),
      value,
    })
  }

  fn return_statement(&mut self) -> StatementResult<'source> {
    self.next();
    let value = self.expression(Precedence::Lowest)?;
    self.matches(TokenKind::Semicolon);

    Ok(Statement::Return { value })
  }

  fn expression_statement(&mut self) -> StatementResult<'source> {
    let expression = self.expression(Precedence::Lowest)?;
    self.matches(TokenKind::Semicolon);

    Ok(Statement::Expression { expression })
  }

  fn expression(&mut self, precedence: Precedence) -> ExpressionResult<'source> {
    let mut left = self.prefix_expression()?;

    while precedence < Precedence::of(self.current().kind) {
      left = self.infix_expression(left)?;
    }

    Ok(left)
  }

  fn prefix_expression(&mut self) -> ExpressionResult<'source> {
    let token = self.current();

    match token.kind {
      TokenKind::Integer => {
        let value = token
          .get_value(self.source)
          .parse()
          .map_err(|_| self.make_error(&Error::InvalidInteger, token))?;
        self.next();
        Ok(Expression::Integer(value))
      }
      TokenKind::String => {
        let value = token.get_value(self.source);
        if value.len() < 2 || !value.ends_with('"') {
          return Err(self.make_error(&Error::UnterminatedString, token));
        }
        self.next();
        Ok(Expression::String(&value[1..value.len() - 1]))
      }
      TokenKind::True => {
        self.next();
        Ok(Expression::Boolean(true))
      }
      TokenKind::False => {
        self.next();
        Ok(Expression::Boolean(false))
      }
      TokenKind::Identifier => {
        self.next();
        Ok(Expression::Identifier(token.get_value(self.source)))
      }
      TokenKind::Bang | TokenKind::Minus => {
        self.next();
        let right = self.expression(Precedence::Unary)?;
        Ok(Expression::Prefix {
          operator: UnaryOperator::from(token.kind),
          right: Box::new(right),
        })
      }
      TokenKind::LeftParen => {
        self.next();
        let expression = self.expression(Precedence::Lowest)?;
        self.consume(TokenKind::RightParen, Error::ExpectedClosingParen)?;
        Ok(expression)
      }
      TokenKind::If => self.if_expression(),
      TokenKind::Fn => self.function_literal(),
      TokenKind::LeftSquare => {
        self.next();
        let elements = self.expression_list(TokenKind::RightSquare, Error::ExpectedClosingSquare)?;
        Ok(Expression::Array { elements })
      }
      TokenKind::LeftBrace => self.hash_literal(),
      TokenKind::Unknown => Err(self.make_error(&Error::UnexpectedCharacter, token)),
      _ => Err(self.make_error(&Error::ExpectedExpression, token)),
    }
  }

  fn infix_expression(&mut self, left: Expression<'source>) -> ExpressionResult<'source> {
    let token = self.current();

    match token.kind {
      TokenKind::LeftParen => {
        self.next();
        let arguments = self.expression_list(TokenKind::RightParen, Error::ExpectedClosingParen)?;
        Ok(Expression::Call {
          function: Box::new(left),
          arguments,
        })
      }
      TokenKind::LeftSquare => {
        self.next();
        let index = self.expression(Precedence::Lowest)?;
        self.consume(TokenKind::RightSquare, Error::ExpectedClosingSquare)?;
        Ok(Expression::Index {
          left: Box::new(left),
          index: Box::new(index),
        })
      }
      _ => {
        self.next();
        let right = self.expression(Precedence::of(token.kind))?;
        Ok(Expression::Infix {
          operator: BinaryOperator::from(token.kind),
          left: Box::new(left),
          right: Box::new(right),
        })
      }
    }
  }

  fn if_expression(&mut self) -> ExpressionResult<'source> {
    self.next();
    let condition = self.expression(Precedence::Lowest)?;
    let consequence = self.block()?;

    let alternative = if self.matches(TokenKind::Else) {
      Some(self.block()?)
    } else {
      None
    };

    Ok(Expression::If {
      condition: Box::new(condition),
      consequence,
      alternative,
    })
  }

  fn function_literal(&mut self) -> ExpressionResult<'source> {
    self.next();
    self.consume(TokenKind::LeftParen, Error::ExpectedOpeningParen)?;

    let mut parameters = Vec::new();
    if self.current().kind != TokenKind::RightParen {
      loop {
        let parameter = self.consume(TokenKind::Identifier, Error::ExpectedIdentifier)?;
        parameters.push(parameter.get_value(self.source));

        if !self.matches(TokenKind::Comma) {
          break;
        }
      }
    }
    self.consume(TokenKind::RightParen, Error::ExpectedClosingParen)?;

    let body = self.block()?;

    Ok(Expression::Function { parameters, body })
  }

  fn hash_literal(&mut self) -> ExpressionResult<'source> {
    self.next();

    let mut pairs = Vec::new();
    if self.current().kind != TokenKind::RightBrace {
      loop {
        let key = self.expression(Precedence::Lowest)?;
        self.consume(TokenKind::Colon, Error::ExpectedColon)?;
        let value = self.expression(Precedence::Lowest)?;
        pairs.push((key, value));

        if !self.matches(TokenKind::Comma) {
          break;
        }
      }
    }
    self.consume(TokenKind::RightBrace, Error::ExpectedClosingBrace)?;

    Ok(Expression::Hash { pairs })
  }

  fn block(&mut self) -> Result<Block<'source>, ParseError> {
    self.consume(TokenKind::LeftBrace, Error::ExpectedOpeningBrace)?;

    let mut statements = Vec::new();
    while !matches!(
      self.current().kind,
      TokenKind::RightBrace | TokenKind::EndOfFile
    ) {
      statements.push(self.statement()?);
    }
    self.consume(TokenKind::RightBrace, Error::ExpectedClosingBrace)?;

    Ok(Block { statements })
  }

  fn expression_list(
    &mut self,
    end: TokenKind,
    error: Error,
  ) -> Result<Vec<Expression<'source>>, ParseError> {
    let mut items = Vec::new();

    if self.current().kind != end {
      loop {
        items.push(self.expression(Precedence::Lowest)?);

        if !self.matches(TokenKind::Comma) {
          break;
        }
      }
    }
    self.consume(end, error)?;

    Ok(items)
  }
}

/// Parse a source string, collecting every syntax error rather than stopping
/// at the first.
pub fn parse(source: &str) -> Result<Program<'_>, Vec<ParseError>> {
  Parser::new(source).parse_program()
}
