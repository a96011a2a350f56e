use std::fmt;
use std::str::FromStr;

use crate::Err;

/// Every nonterminal the Balinese catalog knows about. Grammars loaded from
/// text may use any subset of these.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
  /// kalimat, the sentence (start symbol)
  K,
  /// P Pel
  X1,
  /// S Pel
  X2,
  /// X1 S, i.e. P Pel S
  X3,
  /// P X2, i.e. P S Pel
  X4,
  /// predikat
  P,
  AdjP,
  Adv,
  Adj,
  /// subjek
  S,
  /// pelengkap (complement)
  Pel,
  /// keterangan (adverbial)
  Ket,
  NP,
  VP,
  PP,
  NumP,
  NP_time,
  Noun,
  Verb,
  PropNoun,
  Pronoun,
  Det,
  Part,
  Prep,
  Num,
  Noun_time,
  Adj_time,
}

impl Symbol {
  pub const ALL: [Symbol; 27] = [
    Self::K,
    Self::X1,
    Self::X2,
    Self::X3,
    Self::X4,
    Self::P,
    Self::AdjP,
    Self::Adv,
    Self::Adj,
    Self::S,
    Self::Pel,
    Self::Ket,
    Self::NP,
    Self::VP,
    Self::PP,
    Self::NumP,
    Self::NP_time,
    Self::Noun,
    Self::Verb,
    Self::PropNoun,
    Self::Pronoun,
    Self::Det,
    Self::Part,
    Self::Prep,
    Self::Num,
    Self::Noun_time,
    Self::Adj_time,
  ];

  pub fn name(&self) -> &'static str {
    match self {
      Self::K => "K",
      Self::X1 => "X1",
      Self::X2 => "X2",
      Self::X3 => "X3",
      Self::X4 => "X4",
      Self::P => "P",
      Self::AdjP => "AdjP",
      Self::Adv => "Adv",
      Self::Adj => "Adj",
      Self::S => "S",
      Self::Pel => "Pel",
      Self::Ket => "Ket",
      Self::NP => "NP",
      Self::VP => "VP",
      Self::PP => "PP",
      Self::NumP => "NumP",
      Self::NP_time => "NP_time",
      Self::Noun => "Noun",
      Self::Verb => "Verb",
      Self::PropNoun => "PropNoun",
      Self::Pronoun => "Pronoun",
      Self::Det => "Det",
      Self::Part => "Part",
      Self::Prep => "Prep",
      Self::Num => "Num",
      Self::Noun_time => "Noun_time",
      Self::Adj_time => "Adj_time",
    }
  }
}

impl fmt::Display for Symbol {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}

impl FromStr for Symbol {
  type Err = Err;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .iter()
      .find(|sym| sym.name() == s)
      .copied()
      .ok_or_else(|| format!("unknown nonterminal {}", s).into())
  }
}

/// Right-hand side of a CNF rule
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Production {
  Terminal(String),
  Binary(Symbol, Symbol),
}

impl Production {
  pub fn terminal(word: impl Into<String>) -> Self {
    Self::Terminal(word.into())
  }

  pub fn is_terminal(&self) -> bool {
    matches!(self, Self::Terminal(_))
  }

  pub fn is_binary(&self) -> bool {
    matches!(self, Self::Binary(_, _))
  }

  pub fn get_binary(&self) -> Option<(Symbol, Symbol)> {
    match self {
      Self::Binary(b, c) => Some((*b, *c)),
      _ => None,
    }
  }

  pub fn get_terminal(&self) -> Option<&str> {
    match self {
      Self::Terminal(w) => Some(w.as_str()),
      _ => None,
    }
  }
}

impl fmt::Display for Production {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Terminal(w) => write!(f, "{}", w),
      Self::Binary(b, c) => write!(f, "{} {}", b, c),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
  pub symbol: Symbol,
  pub production: Production,
}

impl Rule {
  pub fn new(symbol: Symbol, production: Production) -> Self {
    Self { symbol, production }
  }
}

impl fmt::Display for Rule {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} -> {};", self.symbol, self.production)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn symbol_names_round_trip() {
    for sym in Symbol::ALL {
      assert_eq!(sym.name().parse::<Symbol>().unwrap(), sym);
    }
    assert!("Foo".parse::<Symbol>().is_err());
    assert!("np".parse::<Symbol>().is_err());
  }

  #[test]
  fn rule_display() {
    let r = Rule::new(Symbol::K, Production::Binary(Symbol::P, Symbol::S));
    assert_eq!(r.to_string(), "K -> P S;");
    let r = Rule::new(Symbol::NP_time, Production::terminal("dibi"));
    assert_eq!(r.to_string(), "NP_time -> dibi;");
  }
}
