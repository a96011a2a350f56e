use std::collections::HashSet;
use std::fmt;

use crate::grammar::Grammar;
use crate::rules::{Production, Symbol};

/// A token that matched no terminal rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalGap {
  pub token: String,
  pub position: usize,
}

impl fmt::Display for LexicalGap {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "word '{}' at {} is not in the lexicon", self.token, self.position)
  }
}

/// Finds every token position the grammar has no terminal rule for
pub fn lexical_gaps(tokens: &[String], grammar: &Grammar) -> Vec<LexicalGap> {
  tokens
    .iter()
    .enumerate()
    .filter(|(_, t)| !grammar.is_known_word(t))
    .map(|(position, t)| LexicalGap {
      token: t.clone(),
      position,
    })
    .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarIssue {
  /// derives no terminal string, so it can never appear in a chart
  Unproductive(Symbol),
  /// no derivation from the start symbol mentions it
  Unreachable(Symbol),
  DuplicateRule(Symbol, Production),
}

impl fmt::Display for GrammarIssue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Unproductive(s) => write!(f, "{} derives no words", s),
      Self::Unreachable(s) => write!(f, "{} is unreachable from the start symbol", s),
      Self::DuplicateRule(s, p) => write!(f, "duplicate rule {} -> {}", s, p),
    }
  }
}

/// Consistency report for a grammar. Issues are listed by kind, each kind in
/// symbol order.
pub fn audit(grammar: &Grammar) -> Vec<GrammarIssue> {
  let productive = find_productive(grammar);
  let reachable = find_reachable(grammar);

  let mut issues = Vec::new();
  for sym in grammar.symbols() {
    if !productive.contains(sym) {
      issues.push(GrammarIssue::Unproductive(*sym));
    }
  }
  for sym in grammar.symbols() {
    if !reachable.contains(sym) {
      issues.push(GrammarIssue::Unreachable(*sym));
    }
  }
  for sym in grammar.symbols() {
    let mut seen = HashSet::new();
    for p in grammar.rules_for(*sym) {
      if !seen.insert(p) {
        issues.push(GrammarIssue::DuplicateRule(*sym, p.clone()));
      }
    }
  }
  issues
}

fn find_productive(grammar: &Grammar) -> HashSet<Symbol> {
  let mut productive: HashSet<Symbol> = HashSet::new();

  let mut last_length = usize::MAX;
  while last_length != productive.len() {
    last_length = productive.len();
    for sym in grammar.symbols() {
      if productive.contains(sym) {
        continue;
      }
      let derives = grammar.rules_for(*sym).iter().any(|p| match p {
        Production::Terminal(_) => true,
        Production::Binary(b, c) => productive.contains(b) && productive.contains(c),
      });
      if derives {
        productive.insert(*sym);
      }
    }
  }

  productive
}

fn find_reachable(grammar: &Grammar) -> HashSet<Symbol> {
  let mut reachable = HashSet::new();
  let mut stack = vec![grammar.start()];
  while let Some(sym) = stack.pop() {
    if reachable.insert(sym) {
      for (b, c) in grammar.binary_rules(sym) {
        stack.push(b);
        stack.push(c);
      }
    }
  }
  reachable
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::BALINESE;

  #[test]
  fn gaps_are_keyed_by_position() {
    let tokens = ["blah", "jegeg", "foo"].map(String::from);
    assert_eq!(
      lexical_gaps(&tokens, &BALINESE),
      vec![
        LexicalGap {
          token: "blah".to_string(),
          position: 0
        },
        LexicalGap {
          token: "foo".to_string(),
          position: 2
        },
      ]
    );
    assert_eq!(
      lexical_gaps(&tokens, &BALINESE)[0].to_string(),
      "word 'blah' at 0 is not in the lexicon"
    );
  }

  #[test]
  fn balinese_catalog_only_has_stray_numeral() {
    assert_eq!(audit(&BALINESE), vec![GrammarIssue::Unreachable(Symbol::Num)]);
  }

  #[test]
  fn finds_every_kind_of_issue() {
    let g: Grammar = r#"
      K -> P S;
      P -> jegeg | jegeg;
      S -> NP Det;
      NP -> tiang;
      Adv -> sajan;
    "#
    .parse()
    .unwrap();

    assert_eq!(
      audit(&g),
      vec![
        GrammarIssue::Unproductive(Symbol::K),
        GrammarIssue::Unproductive(Symbol::S),
        GrammarIssue::Unproductive(Symbol::Det),
        GrammarIssue::Unreachable(Symbol::Adv),
        GrammarIssue::DuplicateRule(Symbol::P, Production::terminal("jegeg")),
      ]
    );
  }
}
