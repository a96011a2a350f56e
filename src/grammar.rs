use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::rules::{Production, Rule, Symbol};
use crate::Err;

/// An immutable CNF grammar. Rules keep their declared order per symbol, which
/// is what tree reconstruction walks; the chart builder only uses the indices.
#[derive(Debug, Clone)]
pub struct Grammar {
  start: Symbol,
  /// symbols in first-seen order, each with its rules in declared order
  order: Vec<Symbol>,
  rules: HashMap<Symbol, Vec<Production>>,
  by_word: HashMap<String, Vec<Symbol>>,
  by_pair: HashMap<(Symbol, Symbol), Vec<Symbol>>,
}

impl Grammar {
  pub fn new(start: Symbol, rules: impl IntoIterator<Item = Rule>) -> Self {
    let mut g = Self {
      start,
      order: Vec::new(),
      rules: HashMap::new(),
      by_word: HashMap::new(),
      by_pair: HashMap::new(),
    };
    g.ensure_entry(start);

    for Rule { symbol, production } in rules {
      g.ensure_entry(symbol);
      match &production {
        Production::Terminal(w) => push_unique(g.by_word.entry(w.clone()).or_default(), symbol),
        Production::Binary(b, c) => {
          g.ensure_entry(*b);
          g.ensure_entry(*c);
          push_unique(g.by_pair.entry((*b, *c)).or_default(), symbol);
        }
      }
      g.rules.entry(symbol).or_default().push(production);
    }

    g
  }

  /// Every referenced symbol gets an entry, even if it never gets a rule
  fn ensure_entry(&mut self, symbol: Symbol) {
    if !self.rules.contains_key(&symbol) {
      self.rules.insert(symbol, Vec::new());
      self.order.push(symbol);
    }
  }

  pub fn read_from_file(path: impl AsRef<Path>) -> Result<Self, Err> {
    fs::read_to_string(path)?.parse()
  }

  pub fn start(&self) -> Symbol {
    self.start
  }

  /// All symbols with an entry, in the order they were first mentioned
  pub fn symbols(&self) -> &[Symbol] {
    &self.order
  }

  pub fn has_symbol(&self, symbol: Symbol) -> bool {
    self.rules.contains_key(&symbol)
  }

  pub fn rules_for(&self, symbol: Symbol) -> &[Production] {
    self.rules.get(&symbol).map(Vec::as_slice).unwrap_or(&[])
  }

  pub fn binary_rules(&self, symbol: Symbol) -> impl Iterator<Item = (Symbol, Symbol)> + '_ {
    self.rules_for(symbol).iter().filter_map(Production::get_binary)
  }

  pub fn terminals_of(&self, symbol: Symbol) -> impl Iterator<Item = &str> + '_ {
    self.rules_for(symbol).iter().filter_map(Production::get_terminal)
  }

  /// Symbols A with a rule A -> word
  pub fn parents_of_word(&self, word: &str) -> &[Symbol] {
    self.by_word.get(word).map(Vec::as_slice).unwrap_or(&[])
  }

  /// Symbols A with a rule A -> B C
  pub fn parents_of_pair(&self, b: Symbol, c: Symbol) -> &[Symbol] {
    self.by_pair.get(&(b, c)).map(Vec::as_slice).unwrap_or(&[])
  }

  pub fn is_known_word(&self, word: &str) -> bool {
    self.by_word.contains_key(word)
  }

  /// Bound pronoun forms split off by the tokenizer, in declared order.
  /// These are the same literals as the free-standing pronouns.
  pub fn clitic_suffixes(&self) -> impl Iterator<Item = &str> + '_ {
    self.terminals_of(Symbol::Pronoun)
  }

  pub fn rules(&self) -> impl Iterator<Item = Rule> + '_ {
    self.order.iter().flat_map(move |sym| {
      self
        .rules_for(*sym)
        .iter()
        .map(move |p| Rule::new(*sym, p.clone()))
    })
  }

  pub fn rule_count(&self) -> usize {
    self.rules.values().map(Vec::len).sum()
  }
}

fn push_unique(v: &mut Vec<Symbol>, symbol: Symbol) {
  if !v.contains(&symbol) {
    v.push(symbol);
  }
}

impl fmt::Display for Grammar {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "// start: {}", self.start)?;
    let empty = self
      .order
      .iter()
      .filter(|sym| self.rules_for(**sym).is_empty())
      .collect::<Vec<_>>();
    if !empty.is_empty() {
      write!(f, "// without rules:")?;
      for sym in empty {
        write!(f, " {}", sym)?;
      }
      writeln!(f)?;
    }
    for rule in self.rules() {
      writeln!(f, "{}", rule)?;
    }
    Ok(())
  }
}
