use ahash::AHashMap as HashMap;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolScope {
  Global,
  Local,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
  pub name: Rc<str>,
  pub index: usize,
  pub scope: SymbolScope,
}

/// Maps identifier names to storage slots at compile time. Tables nest: one
/// per function being compiled, hanging off the global table. Lookup walks
/// outward; definition only ever touches the innermost table.
#[derive(Debug, Default)]
pub struct SymbolTable {
  outer: Option<Box<SymbolTable>>,
  store: HashMap<Rc<str>, Symbol>,
  num_definitions: usize,
}

impl SymbolTable {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn nested(outer: SymbolTable) -> Self {
    Self {
      outer: Some(Box::new(outer)),
      store: HashMap::new(),
      num_definitions: 0,
    }
  }

  /// A table is global iff it has no outer table.
  pub fn is_global(&self) -> bool {
    self.outer.is_none()
  }

  /// Discard this table and return the one it nests inside.
  ///
  /// # Panics
  ///
  /// Panics on the global table, which has no outer table. The compiler only
  /// calls this when leaving a function scope it entered itself.
  pub fn unnest(self) -> SymbolTable {
    *self.outer.expect("global symbol table has no outer table")
  }

  pub fn num_definitions(&self) -> usize {
    self.num_definitions
  }

  /// Record a name in the innermost table, assigning the next free index.
  /// Redefining a name overwrites the entry but the index counter still
  /// advances.
  pub fn define(&mut self, name: &str) -> Symbol {
    let symbol = Symbol {
      name: Rc::from(name),
      index: self.num_definitions,
      scope: if self.is_global() {
        SymbolScope::Global
      } else {
        SymbolScope::Local
      },
    };

    self.num_definitions += 1;
    self.store.insert(symbol.name.clone(), symbol.clone());
    symbol
  }

  /// Find a name, preferring the innermost definition and falling outward.
  /// The scope kind is whatever was recorded when the name was defined.
  pub fn resolve(&self, name: &str) -> Option<&Symbol> {
    self
      .store
      .get(name)
      .or_else(|| self.outer.as_ref().and_then(|outer| outer.resolve(name)))
  }
}
