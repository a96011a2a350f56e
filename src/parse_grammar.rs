//! Simple recursive-descent parsing of CNF grammar files

use regex::Regex;
use std::str::FromStr;

use crate::grammar::Grammar;
use crate::rules::{Production, Rule, Symbol};
use crate::Err;

/// Parses a grammar like
///
/// ```text
/// // comments run to the end of the line
/// K -> P S | X1 S;
/// P -> jegeg | lantang;
/// ```
///
/// Upper-case names are nonterminals, lower-case names are words. Every
/// alternative is either one word or two nonterminals.
impl FromStr for Grammar {
  type Err = Err;

  /// Parses a grammar from a string. Assumes the first rule's symbol
  /// is the start symbol.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let (rules, s) = parse_rules(s)?;
    assert!(s.is_empty());

    if let Some(first) = rules.first() {
      Ok(Self::new(first.symbol, rules))
    } else {
      Err("empty ruleset".into())
    }
  }
}

type Infallible<'a, T> = (T, &'a str);
type ParseResult<'a, T> = Result<(T, &'a str), Err>;

/// helper macro for initializing a regex with lazy_static!
macro_rules! regex_static {
  ($name:ident, $pattern:expr) => {
    lazy_static! {
      static ref $name: Regex = Regex::new($pattern).unwrap();
    }
  };
}

/// Try to consume a regex, returning None if it doesn't match
fn optional_re<'a>(re: &'static Regex, s: &'a str) -> Infallible<'a, Option<&'a str>> {
  match re.find(s) {
    Some(m) if m.start() == 0 => {
      let (_, rest) = s.split_at(m.end());
      (Some(m.as_str()), rest)
    }
    _ => (None, s),
  }
}

/// Try to consume a regex, failing if it doesn't match
fn needed_re<'a>(re: &'static Regex, s: &'a str) -> ParseResult<'a, &'a str> {
  if let (Some(c), rest) = optional_re(re, s) {
    Ok((c, rest))
  } else {
    Err(format!("couldn't match {} at {}", re, snippet(s)).into())
  }
}

/// Try to consume a char, returning None if it doesn't match
fn optional_char(c: char, s: &str) -> Infallible<'_, Option<char>> {
  match s.strip_prefix(c) {
    Some(rest) => (Some(c), rest),
    None => (None, s),
  }
}

/// Tries to skip whitespace and comments
fn skip_whitespace(s: &str) -> &str {
  regex_static!(WHITESPACE_OR_COMMENT, r"^(\s|//[^\n]*)*");
  optional_re(&*WHITESPACE_OR_COMMENT, s).1
}

/// The rest of the line, for error messages
fn snippet(s: &str) -> &str {
  s.lines().next().unwrap_or("end of input")
}

/// Tries to parse a name made of letters, numbers, - and _
fn parse_name(s: &str) -> ParseResult<'_, &str> {
  regex_static!(NAME, r"^[a-zA-Z0-9\-_]+");
  needed_re(&*NAME, s).map_err(|err| format!("name: {}", err).into())
}

enum Item {
  Word(String),
  Symbol(Symbol),
}

fn parse_item(s: &str) -> ParseResult<'_, Item> {
  let (name, rest) = parse_name(s)?;
  // parse_name never returns an empty match
  let first = name.chars().next().unwrap_or_default();
  if first.is_uppercase() {
    Ok((Item::Symbol(name.parse()?), rest))
  } else {
    Ok((Item::Word(name.to_string()), rest))
  }
}

/// One alternative: a word, or two nonterminals
fn parse_production(s: &str) -> ParseResult<'_, Production> {
  let mut items = Vec::new();
  let mut rem = s;
  loop {
    rem = skip_whitespace(rem);
    if rem.is_empty() || rem.starts_with(';') || rem.starts_with('|') {
      break;
    }
    let (item, s) = parse_item(rem)?;
    items.push(item);
    rem = s;
  }

  let production = match items.as_slice() {
    [Item::Word(w)] => Production::Terminal(w.clone()),
    [Item::Symbol(b), Item::Symbol(c)] => Production::Binary(*b, *c),
    [] => return Err(format!("empty alternative at {}", snippet(s)).into()),
    [Item::Symbol(sym)] => {
      return Err(format!("unit rule to {} is not CNF at {}", sym, snippet(s)).into());
    }
    _ => {
      return Err(
        format!(
          "alternative must be one word or two nonterminals at {}",
          snippet(s)
        )
        .into(),
      );
    }
  };

  Ok((production, rem))
}

/// Symbol, alternatives separated by |, terminated by ;
fn parse_rule(s: &str) -> ParseResult<'_, Vec<Rule>> {
  #![allow(clippy::trivial_regex)]
  regex_static!(ARROW, "^->");

  let (symbol, s) = match parse_item(s)? {
    (Item::Symbol(sym), s) => (sym, s),
    (Item::Word(w), _) => return Err(format!("rule symbol: expected nonterminal, got word {}", w).into()),
  };
  let s = skip_whitespace(s);
  let (_, s) = needed_re(&*ARROW, s).map_err(|e| -> Err { format!("rule arrow: {}", e).into() })?;

  let mut rules = Vec::new();
  let mut rem = s;
  loop {
    let (production, s) = parse_production(rem)
      .map_err(|e| -> Err { format!("rule {}: {}", symbol, e).into() })?;
    rules.push(Rule::new(symbol, production));
    rem = s;

    if let (Some(_), s) = optional_char('|', rem) {
      rem = s;
    } else if let (Some(_), s) = optional_char(';', rem) {
      return Ok((rules, s));
    } else {
      return Err(format!("rule {}: missing ;", symbol).into());
    }
  }
}

fn parse_rules(s: &str) -> ParseResult<'_, Vec<Rule>> {
  let mut rules = Vec::new();
  let mut rem = s;
  loop {
    rem = skip_whitespace(rem);
    if rem.is_empty() {
      return Ok((rules, rem));
    }
    let (rule, s) = parse_rule(rem)?;
    rules.extend(rule);
    rem = s;
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog;

  fn err(src: &str) -> String {
    src.parse::<Grammar>().unwrap_err().to_string()
  }

  #[test]
  fn parses_alternatives_and_comments() {
    let g: Grammar = r#"
      // sentence
      K -> P S;
      P -> jegeg | lantang; // adjectives
      S -> NP Det
         | tiang;
    "#
    .parse()
    .unwrap();

    assert_eq!(g.start(), Symbol::K);
    assert_eq!(
      g.rules_for(Symbol::P),
      &[Production::terminal("jegeg"), Production::terminal("lantang")]
    );
    assert_eq!(
      g.rules_for(Symbol::S),
      &[
        Production::Binary(Symbol::NP, Symbol::Det),
        Production::terminal("tiang")
      ]
    );
    assert!(g.has_symbol(Symbol::Det));
  }

  #[test]
  fn words_may_contain_dashes() {
    let g: Grammar = "NP -> awig-awig;".parse().unwrap();
    assert_eq!(g.start(), Symbol::NP);
    assert!(g.is_known_word("awig-awig"));
  }

  #[test]
  fn rejects_non_cnf() {
    assert!(err("K -> P S Ket;").contains("one word or two nonterminals"));
    assert!(err("S -> NP;").contains("unit rule to NP"));
    assert!(err("K -> P tiang;").contains("one word or two nonterminals"));
    assert!(err("K -> ;").contains("empty alternative"));
  }

  #[test]
  fn rejects_malformed_rules() {
    assert_eq!(err(""), "empty ruleset");
    assert_eq!(err("  // nothing\n"), "empty ruleset");
    assert!(err("Foo -> bar;").contains("unknown nonterminal Foo"));
    assert!(err("K P S;").contains("rule arrow"));
    assert!(err("K -> P S").contains("missing ;"));
    assert!(err("jegeg -> P;").contains("expected nonterminal"));
  }

  #[test]
  fn catalog_round_trips_through_text() {
    let g = catalog::build();
    let reparsed: Grammar = g.to_string().parse().unwrap();
    assert_eq!(reparsed.start(), g.start());
    for sym in Symbol::ALL {
      assert_eq!(reparsed.rules_for(sym), g.rules_for(sym), "{}", sym);
    }
  }
}
